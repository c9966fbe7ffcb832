//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `document` - Headless Chromium capture and lopdf assembly
//! - `mail` - SMTP delivery and the HTTP relay client
//! - `storage` - In-memory design sessions
//! - `http` - Axum REST API

pub mod document;
pub mod http;
pub mod mail;
pub mod storage;

pub use document::{ChromiumRasterizer, LopdfAssembler};
pub use mail::{HttpMailRelay, SmtpMailRelay};
pub use storage::InMemoryDesignStore;
