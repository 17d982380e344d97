use super::*;

/// Tests finding a user by username.
///
/// Expected: Ok(Some) for the stored username, Ok(None) otherwise
#[tokio::test]
async fn finds_user_by_username() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::user::UserFactory::new(db)
        .username("motorista")
        .build()
        .await?;
    factory::create_user(db).await?;

    let repo = UserRepository::new(db);

    let user = repo.find_by_username("motorista").await?.unwrap();
    assert_eq!(user.id, existing.id);
    assert!(repo.find_by_username("nobody").await?.is_none());

    Ok(())
}
