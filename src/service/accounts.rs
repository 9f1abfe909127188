//! Account service layer.
//!
//! This module contains the business logic for creating accounts and checking
//! credentials. Validation failures are ordinary values here, not errors; the
//! `Error` type is reserved for infrastructure failures.

use sea_orm::{DatabaseConnection, SqlErr};

use crate::{
    data::account::AccountRepository,
    error::Error,
    model::accounts::{SignupErrors, SignupForm, USERNAME_TAKEN},
    util::password,
};

/// Result of a signup attempt that did not hit an infrastructure failure.
pub enum SignupOutcome {
    /// The account was created.
    Created(entity::account::Model),
    /// The submission failed validation; nothing was written.
    Invalid(SignupErrors),
}

/// Service for managing account operations.
pub struct AccountService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AccountService<'a> {
    /// Creates a new instance of AccountService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Validate a signup submission and create the account when it passes.
    ///
    /// Uniqueness is checked up front so the form can show a field error, but
    /// the UNIQUE constraint on the username column settles races between
    /// concurrent submissions. A constraint violation on insert is therefore
    /// reported as the same field error rather than a database failure.
    ///
    /// # Arguments
    /// - `form` - The submitted signup fields
    ///
    /// # Returns
    /// - `Ok(SignupOutcome::Created(_))` - Account created
    /// - `Ok(SignupOutcome::Invalid(_))` - Validation failed, no account created
    /// - `Err(Error)` - Database or hashing failure
    pub async fn signup(&self, form: &SignupForm) -> Result<SignupOutcome, Error> {
        let mut errors = form.validate();

        let account_repository = AccountRepository::new(self.db);

        if errors.username.is_empty()
            && account_repository
                .find_by_username(&form.username)
                .await?
                .is_some()
        {
            errors.username.push(USERNAME_TAKEN.to_string());
        }

        if !errors.is_empty() {
            return Ok(SignupOutcome::Invalid(errors));
        }

        let password_hash = password::hash_password(&form.password1)?;

        match account_repository.create(&form.username, &password_hash).await {
            Ok(account) => Ok(SignupOutcome::Created(account)),
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    let mut errors = SignupErrors::default();
                    errors.username.push(USERNAME_TAKEN.to_string());

                    Ok(SignupOutcome::Invalid(errors))
                }
                _ => Err(err.into()),
            },
        }
    }

    /// Check a username and password pair against the account store.
    ///
    /// Returns the account on success and `None` for an unknown username or a
    /// wrong password; callers cannot tell the two apart.
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<entity::account::Model>, Error> {
        let account_repository = AccountRepository::new(self.db);

        let account = match account_repository.find_by_username(username).await? {
            Some(account) => account,
            None => return Ok(None),
        };

        if password::verify_password(&account.password_hash, password)? {
            Ok(Some(account))
        } else {
            Ok(None)
        }
    }

    /// Look up an account by ID, for rendering the signed-in state.
    pub async fn get_account(
        &self,
        account_id: i32,
    ) -> Result<Option<entity::account::Model>, Error> {
        let account_repository = AccountRepository::new(self.db);

        Ok(account_repository.get_by_id(account_id).await?)
    }
}
