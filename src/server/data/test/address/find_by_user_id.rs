use super::*;

/// Tests finding the address of a user.
///
/// Expected: Ok(Some) for the owner, Ok(None) for a user without an address
#[tokio::test]
async fn finds_address_by_owner() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Address)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let existing = factory::create_address(db, owner.id).await?;

    let repo = AddressRepository::new(db);

    let address = repo.find_by_user_id(owner.id).await?.unwrap();
    assert_eq!(address.id, existing.id);
    assert!(repo.find_by_user_id(other.id).await?.is_none());

    Ok(())
}
