use super::*;

/// Tests finding a live address.
///
/// Expected: Ok(Some) with the accented state decoded
#[tokio::test]
async fn finds_live_address() -> Result<(), AppError> {
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
        .find_by_id(existing.id)
        .await?
        .unwrap();

    assert_eq!(address.state, BrazilianState::SaoPaulo);
    assert_eq!(address.city, existing.city);

    Ok(())
}

/// Tests reading a row whose state is not a Brazilian state.
///
/// Expected: Err(AppError::RowDecode) naming the state column
#[tokio::test]
async fn fails_on_unknown_stored_state() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Address)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let existing = factory::address::AddressFactory::new(db, user.id)
        .state("MISSOURI")
        .build()
        .await?;

    let result = AddressRepository::new(db).find_by_id(existing.id).await;

    match result {
        Err(AppError::RowDecode(err)) => {
            assert_eq!(err.field, "state");
            assert_eq!(err.source.value, "MISSOURI");
        }
        other => panic!("Expected RowDecode, got: {:?}", other),
    }

    Ok(())
}
