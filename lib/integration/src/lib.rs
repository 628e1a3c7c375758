//! Messaging backend integration for the my-telegrams skill.
//!
//! This crate provides:
//!
//! - **Client traits**: the account, address book and identity operations the
//!   conversation layer depends on
//! - **HTTP backend**: a `reqwest` implementation against the companion service
//! - **Transport errors**: failures that end a turn and surface as HTTP codes

pub mod client;
pub mod config;
pub mod error;
pub mod http;

pub use client::{AddressBook, IdentityStore, MessagingAccountClient};
pub use config::BackendConfig;
pub use error::TransportError;
pub use http::{AccountClient, HttpBackend};
