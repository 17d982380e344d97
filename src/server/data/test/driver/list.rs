use super::*;

/// Tests an eager listing.
///
/// Verifies that relations are attached to the right driver when several
/// drivers are loaded in one batch.
///
/// Expected: Ok with each driver carrying its own address and vehicles
#[tokio::test]
async fn eager_listing_attaches_relations_per_driver() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fleet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, address, with_address) = factory::helpers::create_driver_with_address(db).await?;
    let (_, without_address) = factory::helpers::create_driver_with_user(db).await?;
    let vehicle = factory::create_vehicle(db).await?;
    factory::create_link(db, without_address.id, vehicle.id).await?;

    let drivers = DriverRepository::new(db)
        .list(Pagination::default(), true)
        .await?;

    assert_eq!(drivers.len(), 2);
    assert_eq!(drivers[0].id, with_address.id);
    assert_eq!(drivers[0].address.as_ref().map(|a| a.id), Some(address.id));
    assert!(drivers[0].vehicles.is_empty());
    assert_eq!(drivers[1].id, without_address.id);
    assert!(drivers[1].address.is_none());
    assert_eq!(drivers[1].vehicles[0].id, vehicle.id);

    Ok(())
}

/// Tests paginating a shallow listing.
///
/// Expected: Ok with the second page only, ordered by id
#[tokio::test]
async fn paginates_drivers() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fleet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mut ids = Vec::new();
    for _ in 0..3 {
        ids.push(factory::helpers::create_driver_with_user(db).await?.1.id);
    }

    let drivers = DriverRepository::new(db)
        .list(Pagination::new(2, 2), false)
        .await?;

    let page_ids: Vec<i32> = drivers.iter().map(|driver| driver.id).collect();
    assert_eq!(page_ids, vec![ids[2]]);

    Ok(())
}

/// Tests listing an empty table.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_list_without_drivers() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fleet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let drivers = DriverRepository::new(db)
        .list(Pagination::new(1, 10), true)
        .await?;

    assert!(drivers.is_empty());

    Ok(())
}

/// Tests a page far beyond the signed 64-bit range.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_list_for_out_of_range_page() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fleet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_driver_with_user(db).await?;

    let drivers = DriverRepository::new(db)
        .list(Pagination::new(u64::MAX, 2), false)
        .await?;

    assert!(drivers.is_empty());

    Ok(())
}
