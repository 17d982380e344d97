use super::*;

/// Tests inserting a vehicle.
///
/// Expected: Ok with the licensing data persisted
#[tokio::test]
async fn inserts_vehicle() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Vehicle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let vehicle = VehicleRepository::new(db)
        .upsert(upsert_param(None, "ABC1D23", "98765432100"))
        .await?;

    assert!(vehicle.id > 0);
    assert_eq!(vehicle.legal_information.plate, "ABC1D23");
    assert_eq!(
        vehicle.legal_information.licensing.expiry_date,
        fixture::vehicle::licensing_expiry_date()
    );

    let stored = entity::prelude::Vehicle::find_by_id(vehicle.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.licensing_status, "REGULAR");

    Ok(())
}

/// Tests inserting a vehicle with a plate that is already registered.
///
/// Expected: Err(AppError::DbErr)
#[tokio::test]
async fn rejects_duplicate_plate() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Vehicle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_vehicle(db).await?;

    let result = VehicleRepository::new(db)
        .upsert(upsert_param(None, &existing.plate, "11111111111"))
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    Ok(())
}

/// Tests registering the plate and renavam of a deleted vehicle.
///
/// Expected: Ok with a new live vehicle found by both documents
#[tokio::test]
async fn reuses_registration_of_deleted_vehicle() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Vehicle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_vehicle(db).await?;
    let repo = VehicleRepository::new(db);
    assert!(repo.delete(existing.id).await?);

    let vehicle = repo
        .upsert(upsert_param(None, &existing.plate, &existing.renavam))
        .await?;

    assert_ne!(vehicle.id, existing.id);
    assert_eq!(repo.find_by_plate(&existing.plate).await?.map(|v| v.id), Some(vehicle.id));
    assert_eq!(
        repo.find_by_renavam(&existing.renavam).await?.map(|v| v.id),
        Some(vehicle.id)
    );

    Ok(())
}
