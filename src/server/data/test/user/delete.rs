use super::*;

/// Tests soft-deleting a user.
///
/// Verifies that the row stays in the table with a real deletion time and that a
/// second delete finds nothing to do.
///
/// Expected: Ok(true), then Ok(false)
#[tokio::test]
async fn soft_deletes_user_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    assert!(repo.delete(existing.id).await?);
    assert!(!repo.delete(existing.id).await?);

    let stored = entity::prelude::User::find_by_id(existing.id)
        .one(db)
        .await?
        .unwrap();
    assert!(entity::soft_delete::is_deleted(&stored.deleted_at));

    Ok(())
}
