use super::*;

/// Tests listing the vehicles of a driver.
///
/// Verifies that removed links, deleted vehicles and other drivers' vehicles are
/// left out.
///
/// Expected: Ok with the driver's live vehicles ordered by id
#[tokio::test]
async fn lists_live_vehicles_of_driver() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fleet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, driver) = factory::helpers::create_driver_with_user(db).await?;
    let (_, other) = factory::helpers::create_driver_with_user(db).await?;
    let first = factory::create_vehicle(db).await?;
    let second = factory::create_vehicle(db).await?;
    let removed = factory::create_vehicle(db).await?;
    let deleted = factory::create_vehicle(db).await?;
    let foreign = factory::create_vehicle(db).await?;

    factory::create_link(db, driver.id, second.id).await?;
    factory::create_link(db, driver.id, first.id).await?;
    factory::create_link(db, driver.id, removed.id).await?;
    factory::create_link(db, driver.id, deleted.id).await?;
    factory::create_link(db, other.id, foreign.id).await?;

    let repo = DriverVehicleRepository::new(db);
    repo.delete(driver.id, removed.id).await?;
    VehicleRepository::new(db).delete(deleted.id).await?;

    let vehicles = repo
        .list_vehicles_by_driver(driver.id, Pagination::default())
        .await?;

    let ids: Vec<i32> = vehicles.iter().map(|vehicle| vehicle.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests paginating the vehicles of a driver.
///
/// Expected: Ok with the second vehicle only
#[tokio::test]
async fn paginates_vehicles_of_driver() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fleet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, driver) = factory::helpers::create_driver_with_user(db).await?;
    let mut ids = Vec::new();
    for _ in 0..3 {
        let vehicle = factory::create_vehicle(db).await?;
        factory::create_link(db, driver.id, vehicle.id).await?;
        ids.push(vehicle.id);
    }

    let vehicles = DriverVehicleRepository::new(db)
        .list_vehicles_by_driver(driver.id, Pagination::new(2, 1))
        .await?;

    assert_eq!(vehicles.len(), 1);
    assert_eq!(vehicles[0].id, ids[1]);

    Ok(())
}
