use super::*;

/// Tests updating a live driver.
///
/// Verifies that identity documents and the owning user are not touched.
///
/// Expected: Ok(Some) with the new name and contact and the original documents
#[tokio::test]
async fn updates_driver_but_not_documents() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fleet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, existing) = factory::helpers::create_driver_with_user(db).await?;

    let driver = DriverRepository::new(db)
        .update(UpdateDriverParam {
            id: existing.id,
            attributes: DriverAttributes {
                name: "Maria Souza".to_string(),
                date_of_birth: fixture::driver::date_of_birth(),
            },
            contact: Contact {
                cell_phone: "+55 21 99876-5432".to_string(),
                email: "maria@example.com".to_string(),
            },
        })
        .await?
        .unwrap();

    assert_eq!(driver.attributes.name, "Maria Souza");
    assert_eq!(driver.contact.email, "maria@example.com");
    assert_eq!(driver.user_id, user.id);
    assert_eq!(driver.legal_information.cpf, existing.cpf);
    assert_eq!(driver.legal_information.rg, existing.rg);
    assert_eq!(driver.legal_information.driver_license, existing.driver_license);

    Ok(())
}

/// Tests updating a deleted driver.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_deleted_driver() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fleet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, existing) = factory::helpers::create_driver_with_user(db).await?;
    let repo = DriverRepository::new(db);
    repo.delete(existing.id).await?;

    let result = repo
        .update(UpdateDriverParam {
            id: existing.id,
            attributes: DriverAttributes {
                name: "Nobody".to_string(),
                date_of_birth: fixture::driver::date_of_birth(),
            },
            contact: Contact {
                cell_phone: String::new(),
                email: String::new(),
            },
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
