use super::*;

/// Tests a shallow read of a driver that has an address and vehicles.
///
/// Expected: Ok(Some) with no address and no vehicles attached
#[tokio::test]
async fn shallow_read_skips_relations() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fleet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, existing) = factory::helpers::create_driver_with_address(db).await?;
    let vehicle = factory::create_vehicle(db).await?;
    factory::create_link(db, existing.id, vehicle.id).await?;

    let driver = DriverRepository::new(db)
        .find_by_id(existing.id, false)
        .await?
        .unwrap();

    assert_eq!(driver.attributes.name, existing.name);
    assert!(driver.address.is_none());
    assert!(driver.vehicles.is_empty());

    Ok(())
}

/// Tests an eager read.
///
/// Verifies that the address comes from the owning user and that vehicles are
/// ordered by id.
///
/// Expected: Ok(Some) with the address and both linked vehicles
#[tokio::test]
async fn eager_read_attaches_address_and_vehicles() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fleet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, address, existing) = factory::helpers::create_driver_with_address(db).await?;
    let first = factory::create_vehicle(db).await?;
    let second = factory::vehicle::VehicleFactory::new(db)
        .licensing_status("LATE")
        .build()
        .await?;
    factory::create_link(db, existing.id, second.id).await?;
    factory::create_link(db, existing.id, first.id).await?;

    let driver = DriverRepository::new(db)
        .find_by_id(existing.id, true)
        .await?
        .unwrap();

    let driver_address = driver.address.unwrap();
    assert_eq!(driver_address.id, address.id);
    assert_eq!(driver_address.state, BrazilianState::SaoPaulo);

    let vehicle_ids: Vec<i32> = driver.vehicles.iter().map(|vehicle| vehicle.id).collect();
    assert_eq!(vehicle_ids, vec![first.id, second.id]);
    assert_eq!(
        driver.vehicles[1].legal_information.licensing.status,
        LicensingStatus::Late
    );

    Ok(())
}

/// Tests that an eager read skips removed links and deleted vehicles.
///
/// Expected: Ok(Some) with only the vehicle whose link and row are live
#[tokio::test]
async fn eager_read_skips_deleted_links_and_vehicles() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fleet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, existing) = factory::helpers::create_driver_with_user(db).await?;
    let kept = factory::create_vehicle(db).await?;
    let unlinked = factory::create_vehicle(db).await?;
    let deleted = factory::create_vehicle(db).await?;

    factory::create_link(db, existing.id, kept.id).await?;
    factory::driver_vehicle::DriverVehicleFactory::new(db, existing.id, unlinked.id)
        .deleted_at(Utc::now())
        .build()
        .await?;
    factory::create_link(db, existing.id, deleted.id).await?;
    crate::server::data::vehicle::VehicleRepository::new(db)
        .delete(deleted.id)
        .await?;

    let driver = DriverRepository::new(db)
        .find_by_id(existing.id, true)
        .await?
        .unwrap();

    assert!(driver.address.is_none());
    let vehicle_ids: Vec<i32> = driver.vehicles.iter().map(|vehicle| vehicle.id).collect();
    assert_eq!(vehicle_ids, vec![kept.id]);

    Ok(())
}

/// Tests an eager read when the owning user's address holds an unknown state.
///
/// Verifies that the failure of the nested address fails the whole read, while
/// a shallow read of the same driver still succeeds.
///
/// Expected: Err(AppError::RowDecode) for eager, Ok(Some) for shallow
#[tokio::test]
async fn eager_read_fails_on_undecodable_address() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fleet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::address::AddressFactory::new(db, user.id)
        .state("MISSOURI")
        .build()
        .await?;
    let existing = factory::create_driver(db, user.id).await?;

    let repo = DriverRepository::new(db);

    let result = repo.find_by_id(existing.id, true).await;
    assert!(matches!(
        result,
        Err(AppError::RowDecode(ref err)) if err.entity == "address" && err.field == "state"
    ));

    assert!(repo.find_by_id(existing.id, false).await?.is_some());

    Ok(())
}

/// Tests reading a missing driver, shallow and eager.
///
/// Expected: Ok(None) in both modes
#[tokio::test]
async fn returns_none_for_missing_driver() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fleet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DriverRepository::new(db);

    assert!(repo.find_by_id(404, false).await?.is_none());
    assert!(repo.find_by_id(404, true).await?.is_none());

    Ok(())
}
