//! Server-side HTTP backend and business logic.
//!
//! # Architecture
//!
//! The server follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers, session checks and DTO conversion
//! - **Service Layer** (`service/`) - Booking, feedback, sign-in and dashboard logic
//! - **Data Layer** (`data/`) - In-memory stores, the allow-list and the weekly menu
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Typed session access and authorization guards
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Stores, credentials and clock shared by all handlers
//! - **Startup** (`startup`) - Tracing, session layer, listener and shutdown
//! - **Router** (`router`) - Axum route table
//!
//! # Request Flow
//!
//! 1. **Router** matches the request; the session layer loads the session
//! 2. **Controller** runs the `AuthGuard`, redirecting to a login page on failure
//! 3. **Controller** turns form fields into parameters, or a form error
//! 4. **Service** applies the rules and reads or writes a store
//! 5. **Controller** converts the result to a page DTO or a redirect

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
