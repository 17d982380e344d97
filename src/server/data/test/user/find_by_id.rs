use super::*;

/// Tests finding a live user.
///
/// Expected: Ok(Some) with the stored values decoded
#[tokio::test]
async fn finds_live_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::user::UserFactory::new(db)
        .role("administrator")
        .build()
        .await?;

    let user = UserRepository::new(db).find_by_id(existing.id).await?.unwrap();

    assert_eq!(user.username, existing.username);
    assert_eq!(user.role, Role::Administrator);

    Ok(())
}

/// Tests that soft-deleted and nonexistent users are absent.
///
/// Expected: Ok(None) in both cases
#[tokio::test]
async fn returns_none_for_deleted_or_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_user(db).await?;
    let repo = UserRepository::new(db);
    repo.delete(existing.id).await?;

    assert!(repo.find_by_id(existing.id).await?.is_none());
    assert!(repo.find_by_id(999).await?.is_none());

    Ok(())
}

/// Tests reading a row whose role is not a known role.
///
/// Verifies that the mapping fails instead of falling back to undefined, and
/// that the error names the entity, the field and the stored value.
///
/// Expected: Err(AppError::RowDecode)
#[tokio::test]
async fn fails_on_unknown_stored_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::user::UserFactory::new(db)
        .role("SUPERVISOR")
        .build()
        .await?;

    let result = UserRepository::new(db).find_by_id(existing.id).await;

    match result {
        Err(AppError::RowDecode(err)) => {
            assert_eq!(err.entity, "user");
            assert_eq!(err.field, "role");
            assert_eq!(err.source.value, "SUPERVISOR");
        }
        other => panic!("Expected RowDecode, got: {:?}", other),
    }

    Ok(())
}
