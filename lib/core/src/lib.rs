//! Core domain types and utilities for the my-telegrams skill backend.
//!
//! This crate provides the identifiers, domain records and error handling
//! alias shared by the phrase, integration and conversation crates.

pub mod error;
pub mod id;
pub mod model;

pub use error::Result;
pub use id::{AccountId, ParseIdError, TurnId};
pub use model::{Account, Contact, Conversation, MessageRecord};
