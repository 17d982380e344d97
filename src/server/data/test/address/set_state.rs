use super::*;

/// Tests writing a new state.
///
/// Expected: Ok(true) and the state persisted by display name
#[tokio::test]
async fn writes_state() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Address)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let existing = factory::create_address(db, user.id).await?;

    let repo = AddressRepository::new(db);
    assert!(
        repo.set_state(existing.id, BrazilianState::SaoPaulo, BrazilianState::Tocantins)
            .await?
    );

    let stored = entity::prelude::Address::find_by_id(existing.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.state, "TOCANTINS");

    Ok(())
}

/// Tests writing a state for a missing address.
///
/// Expected: Ok(false)
#[tokio::test]
async fn skips_missing_address() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Address)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AddressRepository::new(db);
    assert!(
        !repo
            .set_state(7, BrazilianState::SaoPaulo, BrazilianState::Acre)
            .await?
    );

    Ok(())
}

/// Tests writing a state when the stored state differs from the one read.
///
/// Expected: Ok(false) and the stored state left untouched
#[tokio::test]
async fn skips_stale_current_state() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Address)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let existing = factory::address::AddressFactory::new(db, user.id)
        .state("BAHIA")
        .build()
        .await?;

    let repo = AddressRepository::new(db);
    assert!(
        !repo
            .set_state(existing.id, BrazilianState::SaoPaulo, BrazilianState::Acre)
            .await?
    );

    let stored = entity::prelude::Address::find_by_id(existing.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.state, "BAHIA");

    Ok(())
}
