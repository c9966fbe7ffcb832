//! Mail adapters - implementations of the `MailRelay` port.
//!
//! - **SmtpMailRelay** - sends directly through an SMTP account
//! - **HttpMailRelay** - forwards to a remote mail submission endpoint

mod content;
mod http_relay;
mod smtp_relay;

pub use http_relay::HttpMailRelay;
pub use smtp_relay::SmtpMailRelay;
