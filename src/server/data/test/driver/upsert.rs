use super::*;

/// Tests inserting a driver for a user.
///
/// Expected: Ok with a relation-free driver
#[tokio::test]
async fn inserts_driver() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fleet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let driver = DriverRepository::new(db)
        .upsert(upsert_param(None, user.id, fixture::driver::DEFAULT_CPF))
        .await?;

    assert!(driver.id > 0);
    assert_eq!(driver.user_id, user.id);
    assert_eq!(driver.legal_information.cpf, fixture::driver::DEFAULT_CPF);
    assert!(driver.address.is_none());
    assert!(driver.vehicles.is_empty());

    Ok(())
}

/// Tests replacing a driver by id.
///
/// Expected: Ok with the new documents and the original creation time
#[tokio::test]
async fn replaces_existing_driver() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fleet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, existing) = factory::helpers::create_driver_with_user(db).await?;

    let driver = DriverRepository::new(db)
        .upsert(upsert_param(Some(existing.id), user.id, "987.654.321-00"))
        .await?;

    assert_eq!(driver.id, existing.id);
    assert_eq!(driver.legal_information.cpf, "987.654.321-00");
    assert_eq!(driver.created_at, existing.created_at);

    Ok(())
}

/// Tests inserting a second driver with a registered CPF.
///
/// Expected: Err(AppError::DbErr)
#[tokio::test]
async fn rejects_duplicate_cpf() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fleet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, existing) = factory::helpers::create_driver_with_user(db).await?;
    let other = factory::create_user(db).await?;

    let mut param = upsert_param(None, other.id, "unused");
    param.legal_information.cpf = existing.cpf;

    let result = DriverRepository::new(db).upsert(param).await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    Ok(())
}

/// Tests registering a new driver for a user whose driver was deleted, reusing
/// the same documents.
///
/// Expected: Ok with a new live driver for the user
#[tokio::test]
async fn reuses_documents_of_deleted_driver() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fleet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, existing) = factory::helpers::create_driver_with_user(db).await?;
    let repo = DriverRepository::new(db);
    assert!(repo.delete(existing.id).await?);

    let mut param = upsert_param(None, user.id, &existing.cpf);
    param.legal_information.rg = existing.rg.clone();
    param.legal_information.driver_license = existing.driver_license.clone();

    let driver = repo.upsert(param).await?;

    assert_ne!(driver.id, existing.id);
    let found = repo.find_by_user_id(user.id, false).await?.unwrap();
    assert_eq!(found.id, driver.id);
    assert_eq!(found.legal_information.cpf, existing.cpf);

    Ok(())
}
