use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::error::Error;

pub const SESSION_FLASH_KEY: &str = "bookden:flash";

/// Queue of one-shot notices to show on the next rendered page.
///
/// Notices survive exactly one redirect: a handler queues them with [`push`]
/// and the page that renders afterwards drains them with [`take`].
///
/// [`push`]: SessionFlash::push
/// [`take`]: SessionFlash::take
#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionFlash(pub Vec<String>);

impl SessionFlash {
    /// Append a notice to the queue, creating the queue if absent
    pub async fn push(session: &Session, message: &str) -> Result<(), Error> {
        let SessionFlash(mut messages) = session
            .get::<SessionFlash>(SESSION_FLASH_KEY)
            .await?
            .unwrap_or_default();

        messages.push(message.to_string());

        session
            .insert(SESSION_FLASH_KEY, SessionFlash(messages))
            .await?;

        Ok(())
    }

    /// Remove and return all queued notices
    ///
    /// Draining on read is what makes each notice render exactly once.
    pub async fn take(session: &Session) -> Result<Vec<String>, Error> {
        Ok(session
            .remove::<SessionFlash>(SESSION_FLASH_KEY)
            .await?
            .map(|SessionFlash(messages)| messages)
            .unwrap_or_default())
    }
}
