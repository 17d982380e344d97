pub use super::address::Entity as Address;
pub use super::driver::Entity as Driver;
pub use super::driver_vehicle::Entity as DriverVehicle;
pub use super::user::Entity as User;
pub use super::vehicle::Entity as Vehicle;
