use std::sync::Arc;
use time::Duration;
use tower_sessions::{Expiry, MemoryStore, Session};

/// Test context holding a session that is not attached to any request.
///
/// Use it to exercise session wrappers, guards and services directly. The
/// session is created lazily on first access and persists for the lifetime of
/// the context.
pub struct TestContext {
    /// Optional session instance backed by an in-memory store.
    ///
    /// Initialized lazily when `session()` is first called.
    pub session: Option<Session>,
}

impl TestContext {
    /// Creates a new empty test context.
    pub fn new() -> Self {
        Self { session: None }
    }

    /// Gets or creates the test session instance.
    ///
    /// On first call a fresh `MemoryStore` and a session without an ID are
    /// created; subsequent calls return the same session.
    ///
    /// # Example
    /// ```rust,ignore
    /// let mut test = TestContext::new();
    /// let session = test.session();
    ///
    /// session.insert("student:reg_number", "Y24CM133").await?;
    /// ```
    pub fn session(&mut self) -> &Session {
        self.session.get_or_insert_with(|| {
            Session::new(
                None,
                Arc::new(MemoryStore::default()),
                Some(Expiry::OnInactivity(Duration::days(7))),
            )
        })
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn session_is_reused() {
        let mut test = TestContext::new();

        test.session().insert("key", 7).await.unwrap();

        let value: Option<i32> = test.session().get("key").await.unwrap();
        assert_eq!(value, Some(7));
    }
}
