use super::*;

/// Tests linking a live driver to a live vehicle.
///
/// Expected: Ok with a live link carrying its creation time
#[tokio::test]
async fn links_live_driver_and_vehicle() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fleet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, driver) = factory::helpers::create_driver_with_user(db).await?;
    let vehicle = factory::create_vehicle(db).await?;

    let link = DriverVehicleRepository::new(db)
        .create(driver.id, vehicle.id)
        .await?;

    assert_eq!(link.driver_id, driver.id);
    assert_eq!(link.vehicle_id, vehicle.id);
    assert!(link.created_at.timestamp() > 0);
    assert!(!soft_delete::is_deleted(&link.deleted_at));

    Ok(())
}

/// Tests linking a driver that does not exist.
///
/// Verifies that the transaction leaves no row behind.
///
/// Expected: Err(AppError::ReferentialIntegrity) naming both ids
#[tokio::test]
async fn rejects_missing_driver() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fleet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let vehicle = factory::create_vehicle(db).await?;

    let repo = DriverVehicleRepository::new(db);
    let result = repo.create(999, vehicle.id).await;

    assert!(matches!(
        result,
        Err(AppError::ReferentialIntegrity { driver_id: 999, vehicle_id }) if vehicle_id == vehicle.id
    ));
    assert!(repo.find(999, vehicle.id).await?.is_none());
    assert!(!repo.delete(999, vehicle.id).await?);

    Ok(())
}

/// Tests linking a vehicle that has been soft-deleted.
///
/// Expected: Err(AppError::ReferentialIntegrity)
#[tokio::test]
async fn rejects_deleted_vehicle() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fleet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, driver) = factory::helpers::create_driver_with_user(db).await?;
    let vehicle = factory::create_vehicle(db).await?;
    VehicleRepository::new(db).delete(vehicle.id).await?;

    let result = DriverVehicleRepository::new(db)
        .create(driver.id, vehicle.id)
        .await;

    assert!(matches!(result, Err(AppError::ReferentialIntegrity { .. })));

    Ok(())
}

/// Tests linking a soft-deleted driver.
///
/// Expected: Err(AppError::ReferentialIntegrity)
#[tokio::test]
async fn rejects_deleted_driver() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fleet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, driver) = factory::helpers::create_driver_with_user(db).await?;
    let vehicle = factory::create_vehicle(db).await?;
    DriverRepository::new(db).delete(driver.id).await?;

    let result = DriverVehicleRepository::new(db)
        .create(driver.id, vehicle.id)
        .await;

    assert!(matches!(result, Err(AppError::ReferentialIntegrity { .. })));

    Ok(())
}

/// Tests relinking a pair whose link was removed earlier.
///
/// Expected: Ok with the link live again and its original creation time
#[tokio::test]
async fn revives_removed_link() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fleet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, driver) = factory::helpers::create_driver_with_user(db).await?;
    let vehicle = factory::create_vehicle(db).await?;
    let removed = factory::driver_vehicle::DriverVehicleFactory::new(db, driver.id, vehicle.id)
        .deleted_at(Utc::now() - Duration::days(1))
        .build()
        .await?;

    let repo = DriverVehicleRepository::new(db);
    assert!(repo.find(driver.id, vehicle.id).await?.is_none());

    let link = repo.create(driver.id, vehicle.id).await?;

    assert_eq!(link.created_at, removed.created_at);
    assert!(!soft_delete::is_deleted(&link.deleted_at));
    assert!(repo.find(driver.id, vehicle.id).await?.is_some());

    Ok(())
}
