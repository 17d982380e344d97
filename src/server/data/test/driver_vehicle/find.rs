use super::*;

/// Tests finding a link for a linked and an unlinked pair.
///
/// Expected: Ok(Some) for the linked pair, Ok(None) for the other
#[tokio::test]
async fn finds_only_linked_pairs() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fleet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, driver) = factory::helpers::create_driver_with_user(db).await?;
    let linked = factory::create_vehicle(db).await?;
    let unlinked = factory::create_vehicle(db).await?;
    factory::create_link(db, driver.id, linked.id).await?;

    let repo = DriverVehicleRepository::new(db);

    let link = repo.find(driver.id, linked.id).await?.unwrap();
    assert_eq!((link.driver_id, link.vehicle_id), (driver.id, linked.id));
    assert!(repo.find(driver.id, unlinked.id).await?.is_none());

    Ok(())
}
