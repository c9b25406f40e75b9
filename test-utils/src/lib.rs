//! Mealboard Test Utils
//!
//! Shared helpers for exercising the mealboard server in tests without a
//! network listener or a browser.
//!
//! # Overview
//!
//! - **TestContext**: lazily created in-memory `Session` for service and guard tests
//! - **TestClient**: drives an `axum::Router` request by request, carrying the
//!   session cookie the way a browser would
//! - **TestError**: errors that can occur while driving a test
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::client::TestClient;
//!
//! #[tokio::test]
//! async fn portal_requires_login() -> Result<(), TestError> {
//!     let mut client = TestClient::new(app);
//!
//!     let response = client.get("/student_portal").await?;
//!     assert_eq!(response.location(), Some("/student_login"));
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod context;
pub mod error;
