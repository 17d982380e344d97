//! User fixtures.

use entity::user;

use super::timestamp;

pub const DEFAULT_USERNAME: &str = "motorista";
pub const DEFAULT_HASHED_PASSWORD: &str = "$2a$10$Qb0dJ9vYm1hQ7sH0XgC2ReJ3n1o9f8c3b2a1z0y9x8w7v6u5t4s3q";
pub const DEFAULT_ROLE: &str = "DRIVER";

/// Creates a live user row with id `1`, username `"motorista"` and role `"DRIVER"`.
pub fn entity() -> user::Model {
    user::Model {
        id: 1,
        username: DEFAULT_USERNAME.to_string(),
        hashed_password: DEFAULT_HASHED_PASSWORD.to_string(),
        role: DEFAULT_ROLE.to_string(),
        created_at: timestamp(),
        updated_at: timestamp(),
        deleted_at: entity::soft_delete::sentinel(),
    }
}
