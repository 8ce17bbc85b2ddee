//! Type-safe flash message session wrapper.
//!
//! Flash messages are one-shot notices queued during one request and rendered
//! on the next page the user sees. The wrapper exposes only push and drain
//! operations so handlers cannot corrupt the stored message list.

use tower_sessions::Session;

use crate::error::AppError;

const SESSION_FLASH_MESSAGES: &str = "flash:messages";

/// Flash message session management.
///
/// Wraps the tower-sessions Session with queue semantics: messages pushed
/// during a request survive a redirect and are removed when rendered.
pub struct FlashSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> FlashSession<'a> {
    /// Creates a new FlashSession wrapper.
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Queues a flash message for the next rendered page.
    ///
    /// # Returns
    /// - `Ok(())` - Message successfully queued
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn push(&self, message: impl Into<String>) -> Result<(), AppError> {
        let mut messages: Vec<String> = self
            .session
            .get(SESSION_FLASH_MESSAGES)
            .await?
            .unwrap_or_default();

        messages.push(message.into());
        self.session
            .insert(SESSION_FLASH_MESSAGES, messages)
            .await?;

        Ok(())
    }

    /// Retrieves and removes all queued flash messages.
    ///
    /// Messages are removed so each is rendered exactly once.
    ///
    /// # Returns
    /// - `Ok(messages)` - All queued messages, oldest first; empty when none
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn take(&self) -> Result<Vec<String>, AppError> {
        let messages = self
            .session
            .remove(SESSION_FLASH_MESSAGES)
            .await?
            .unwrap_or_default();

        Ok(messages)
    }
}
