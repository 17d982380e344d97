use super::*;

/// Tests updating a live user.
///
/// Expected: Ok(Some) with the new values and an unchanged creation time
#[tokio::test]
async fn updates_live_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_user(db).await?;

    let user = UserRepository::new(db)
        .update(UpdateUserParam {
            id: existing.id,
            username: "updated".to_string(),
            hashed_password: "new-hash".to_string(),
            role: Role::Employee,
        })
        .await?
        .unwrap();

    assert_eq!(user.username, "updated");
    assert_eq!(user.hashed_password, "new-hash");
    assert_eq!(user.role, Role::Employee);
    assert_eq!(user.created_at, existing.created_at);

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db)
        .update(UpdateUserParam {
            id: 42,
            username: "ghost".to_string(),
            hashed_password: "hash".to_string(),
            role: Role::Driver,
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
