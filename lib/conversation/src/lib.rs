//! Conversation layer of the my-telegrams skill.
//!
//! This crate provides:
//!
//! - **Name matching**: fuzzy resolution of spoken contact names
//! - **Authorization flow**: phone-code login spread over several turns
//! - **Dispatcher**: routes turns to intent handlers
//! - **Dispatch exception policy**: final speech for failed turns
//! - **Session state**: typed attributes persisted between turns

pub mod authorization;
pub mod dispatch;
pub mod error;
pub mod handler;
pub mod handlers;
pub mod name_match;
pub mod policy;
pub mod request;
pub mod response;
pub mod services;
pub mod session;

#[cfg(test)]
mod testing;

pub use authorization::{AuthorizationFlow, AuthorizationStage, AuthorizationStep};
pub use dispatch::{DispatchOutcome, Dispatcher, TurnResult};
pub use error::{InputError, SessionError, TurnFailure};
pub use handler::{IntentHandler, TurnContext};
pub use name_match::{ACCEPTANCE_THRESHOLD, best_match, resolve_contact, similarity};
pub use policy::{DispatchExceptionPolicy, FailureClass};
pub use request::{Intent, RequestKind, TurnRequest, intents};
pub use response::{SlotElicitation, TurnResponse};
pub use services::{AccountServices, BackendConnector};
pub use session::{AccountState, SessionState};
