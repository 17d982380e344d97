use super::*;

/// Tests writing a new role.
///
/// Expected: Ok(true) and the role persisted by display name
#[tokio::test]
async fn writes_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    assert!(
        repo.set_role(existing.id, Role::Driver, Role::Administrator)
            .await?
    );

    let stored = entity::prelude::User::find_by_id(existing.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.role, "ADMINISTRATOR");

    Ok(())
}

/// Tests writing a role for a deleted user.
///
/// Expected: Ok(false)
#[tokio::test]
async fn skips_deleted_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_user(db).await?;
    let repo = UserRepository::new(db);
    repo.delete(existing.id).await?;

    assert!(
        !repo
            .set_role(existing.id, Role::Driver, Role::Employee)
            .await?
    );

    Ok(())
}

/// Tests writing a role when the stored role differs from the one read.
///
/// Expected: Ok(false) and the stored role left untouched
#[tokio::test]
async fn skips_stale_current_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::user::UserFactory::new(db)
        .role("EMPLOYEE")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    assert!(
        !repo
            .set_role(existing.id, Role::Driver, Role::Administrator)
            .await?
    );

    let stored = entity::prelude::User::find_by_id(existing.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.role, "EMPLOYEE");

    Ok(())
}
