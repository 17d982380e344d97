use super::*;

/// Tests finding a live vehicle.
///
/// Expected: Ok(Some) with attributes and licensing decoded
#[tokio::test]
async fn finds_live_vehicle() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Vehicle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::vehicle::VehicleFactory::new(db)
        .licensing_status("seized")
        .build()
        .await?;

    let vehicle = VehicleRepository::new(db)
        .find_by_id(existing.id)
        .await?
        .unwrap();

    assert_eq!(vehicle.attributes.brand, existing.brand);
    assert_eq!(
        vehicle.legal_information.licensing.status,
        LicensingStatus::Seized
    );

    Ok(())
}

/// Tests reading a row whose licensing status is not a known status.
///
/// Expected: Err(AppError::RowDecode) naming the licensing status column
#[tokio::test]
async fn fails_on_unknown_stored_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Vehicle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::vehicle::VehicleFactory::new(db)
        .licensing_status("OPTIMIZED")
        .build()
        .await?;

    let result = VehicleRepository::new(db).find_by_id(existing.id).await;

    match result {
        Err(AppError::RowDecode(err)) => {
            assert_eq!(err.entity, "vehicle");
            assert_eq!(err.field, "licensing_status");
            assert_eq!(err.source.value, "OPTIMIZED");
        }
        other => panic!("Expected RowDecode, got: {:?}", other),
    }

    Ok(())
}
