use super::*;

/// Tests inserting an address for a user.
///
/// Verifies that the state is persisted by its accented display name.
///
/// Expected: Ok with the address stored under the user
#[tokio::test]
async fn inserts_address() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Address)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let address = AddressRepository::new(db)
        .upsert(upsert_param(None, user.id, BrazilianState::EspiritoSanto))
        .await?;

    assert_eq!(address.user_id, user.id);
    assert_eq!(address.state, BrazilianState::EspiritoSanto);

    let stored = entity::prelude::Address::find_by_id(address.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.state, "ESPÍRITO SANTO");

    Ok(())
}

/// Tests replacing an address by id.
///
/// Expected: Ok with the new state and the original creation time
#[tokio::test]
async fn replaces_existing_address() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Address)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let existing = factory::create_address(db, user.id).await?;

    let address = AddressRepository::new(db)
        .upsert(upsert_param(Some(existing.id), user.id, BrazilianState::Bahia))
        .await?;

    assert_eq!(address.id, existing.id);
    assert_eq!(address.state, BrazilianState::Bahia);
    assert_eq!(address.created_at, existing.created_at);

    Ok(())
}

/// Tests inserting a second address for the same user.
///
/// Expected: Err(AppError::DbErr) from the unique user constraint
#[tokio::test]
async fn rejects_second_address_for_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Address)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_address(db, user.id).await?;

    let result = AddressRepository::new(db)
        .upsert(upsert_param(None, user.id, BrazilianState::Parana))
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    Ok(())
}

/// Tests giving a user a new address after the old one was deleted.
///
/// Verifies that a soft-deleted address no longer counts against the one
/// address per user rule.
///
/// Expected: Ok with a new live address for the same user
#[tokio::test]
async fn inserts_address_after_previous_was_deleted() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Address)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = AddressRepository::new(db);

    let old = repo
        .upsert(upsert_param(None, user.id, BrazilianState::Bahia))
        .await?;
    assert!(repo.delete(old.id).await?);
    assert!(repo.find_by_user_id(user.id).await?.is_none());

    let new = repo
        .upsert(upsert_param(None, user.id, BrazilianState::Parana))
        .await?;

    assert_ne!(new.id, old.id);
    let found = repo.find_by_user_id(user.id).await?.unwrap();
    assert_eq!(found.id, new.id);
    assert_eq!(found.state, BrazilianState::Parana);

    Ok(())
}
