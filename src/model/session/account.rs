use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::error::Error;

pub const SESSION_ACCOUNT_ID_KEY: &str = "bookden:account:id";

#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionAccountId(pub i32);

impl SessionAccountId {
    /// Insert account ID into session
    pub async fn insert(session: &Session, account_id: i32) -> Result<(), Error> {
        session
            .insert(SESSION_ACCOUNT_ID_KEY, SessionAccountId(account_id))
            .await?;

        Ok(())
    }

    /// Get account ID from session
    pub async fn get(session: &Session) -> Result<Option<i32>, Error> {
        Ok(session
            .get::<SessionAccountId>(SESSION_ACCOUNT_ID_KEY)
            .await?
            .map(|SessionAccountId(account_id)| account_id))
    }
}
