use super::*;

/// Tests removing a link.
///
/// Verifies that the driver and vehicle themselves stay live.
///
/// Expected: Ok(true), then Ok(false) once the link is gone
#[tokio::test]
async fn removes_link_only() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fleet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, driver) = factory::helpers::create_driver_with_user(db).await?;
    let vehicle = factory::create_vehicle(db).await?;
    factory::create_link(db, driver.id, vehicle.id).await?;

    let repo = DriverVehicleRepository::new(db);
    assert!(repo.delete(driver.id, vehicle.id).await?);
    assert!(!repo.delete(driver.id, vehicle.id).await?);

    assert!(repo.find(driver.id, vehicle.id).await?.is_none());
    assert!(DriverRepository::new(db)
        .find_by_id(driver.id, false)
        .await?
        .is_some());
    assert!(VehicleRepository::new(db).find_by_id(vehicle.id).await?.is_some());

    Ok(())
}
