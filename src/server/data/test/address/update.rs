use super::*;

/// Tests updating a live address.
///
/// Verifies that the owning user is left unchanged.
///
/// Expected: Ok(Some) with the new values
#[tokio::test]
async fn updates_live_address() -> Result<(), AppError> {
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
        .update(UpdateAddressParam {
            id: existing.id,
            locality: "Rua das Flores".to_string(),
            number: "10".to_string(),
            complement: String::new(),
            neighborhood: "Centro".to_string(),
            city: "Curitiba".to_string(),
            state: BrazilianState::Parana,
            cep: "80010-000".to_string(),
            country: "Brasil".to_string(),
        })
        .await?
        .unwrap();

    assert_eq!(address.user_id, user.id);
    assert_eq!(address.city, "Curitiba");
    assert_eq!(address.state, BrazilianState::Parana);

    Ok(())
}
