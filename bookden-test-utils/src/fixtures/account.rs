//! Fixtures for account records.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::{
    constant::{TEST_PASSWORD, TEST_USERNAME},
    error::TestError,
};

/// Insert an account row with the given username and password.
///
/// The password is hashed with Argon2 the same way the application stores
/// credentials, so login flows can verify against the fixture.
///
/// # Arguments
/// - `db` - Database connection with the account table created
/// - `username` - Username for the new account
/// - `password` - Plaintext password to hash and store
///
/// # Returns
/// - `entity::account::Model` - The inserted account row
pub async fn insert_account(
    db: &DatabaseConnection,
    username: &str,
    password: &str,
) -> Result<entity::account::Model, TestError> {
    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| TestError::PasswordHash(e.to_string()))?
        .to_string();

    let account = entity::account::ActiveModel {
        username: ActiveValue::Set(username.to_string()),
        password_hash: ActiveValue::Set(password_hash),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    Ok(account.insert(db).await?)
}

/// Insert an account with [`TEST_USERNAME`] and [`TEST_PASSWORD`].
pub async fn insert_default_account(
    db: &DatabaseConnection,
) -> Result<entity::account::Model, TestError> {
    insert_account(db, TEST_USERNAME, TEST_PASSWORD).await
}
