//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories insert rows into the database and take the
//! ids of the rows they depend on, so foreign keys stay valid.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let user = factory::user::create_user(&db).await?;
//!     let driver = factory::driver::create_driver(&db, user.id).await?;
//!     let vehicle = factory::vehicle::create_vehicle(&db).await?;
//!     factory::driver_vehicle::create_link(&db, driver.id, vehicle.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let vehicle = factory::vehicle::VehicleFactory::new(&db)
//!     .brand("Scania")
//!     .licensing_status("LATE")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `address` - Create address entities for a user
//! - `driver` - Create driver entities for a user
//! - `vehicle` - Create vehicle entities
//! - `driver_vehicle` - Create driver-vehicle links
//! - `helpers` - Id generation and entities with their dependencies

pub mod address;
pub mod driver;
pub mod driver_vehicle;
pub mod helpers;
pub mod user;
pub mod vehicle;

pub use address::create_address;
pub use driver::create_driver;
pub use driver_vehicle::create_link;
pub use user::create_user;
pub use vehicle::create_vehicle;
