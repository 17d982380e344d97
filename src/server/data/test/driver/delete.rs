use super::*;

/// Tests soft-deleting a driver.
///
/// Expected: Ok(true) and the driver hidden from reads and listings
#[tokio::test]
async fn soft_deletes_driver() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fleet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, existing) = factory::helpers::create_driver_with_user(db).await?;

    let repo = DriverRepository::new(db);
    assert!(repo.delete(existing.id).await?);

    assert!(repo.find_by_id(existing.id, false).await?.is_none());
    assert!(repo.find_by_user_id(user.id, false).await?.is_none());
    assert!(repo.list(Pagination::default(), false).await?.is_empty());

    Ok(())
}
