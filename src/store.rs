use std::sync::Arc;
use tokio::sync::RwLock;

/// Returned by [`MotdStore::get`] until a message has been set.
pub const NO_MOTD: &str = "No motd entered.";

/// Shareable message-of-the-day store for use across async handlers
///
/// Holds at most one message. Clones share the same slot, so a store built once
/// at startup and handed to the router is the single owner of the value.
#[derive(Clone, Default)]
pub struct MotdStore {
    inner: Arc<RwLock<Option<String>>>,
}

impl MotdStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the current message, or [`NO_MOTD`] if none has been set
    pub async fn get(&self) -> String {
        self.inner
            .read()
            .await
            .clone()
            .unwrap_or_else(|| NO_MOTD.to_string())
    }

    /// Replace the current message and return the stored value
    ///
    /// Any string is accepted, including the empty string.
    pub async fn set(&self, input: String) -> String {
        let mut slot = self.inner.write().await;
        slot.insert(input).clone()
    }
}
