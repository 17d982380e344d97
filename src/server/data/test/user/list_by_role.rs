use super::*;

/// Tests listing users by role.
///
/// Verifies that only live users with the role are returned, ordered by id.
///
/// Expected: Ok with the two live drivers
#[tokio::test]
async fn lists_live_users_with_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;
    let deleted = factory::create_user(db).await?;
    factory::user::UserFactory::new(db)
        .role("EMPLOYEE")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    repo.delete(deleted.id).await?;

    let users = repo.list_by_role(Role::Driver).await?;

    let ids: Vec<i32> = users.iter().map(|user| user.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests listing a role nobody holds.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_list_for_unused_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let users = UserRepository::new(db)
        .list_by_role(Role::Administrator)
        .await?;

    assert!(users.is_empty());

    Ok(())
}
