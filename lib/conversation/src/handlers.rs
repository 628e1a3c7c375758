//! Intent handlers of the skill.

mod authorize;
mod builtin;
mod messaging;

pub use authorize::AuthorizeHandler;
pub use builtin::{
    CancelOrStopHandler, FallbackHandler, HelpHandler, LaunchHandler, SessionEndedHandler,
};
pub use messaging::{CheckTelegramsHandler, SendTelegramHandler, SpeedDialHandler};

use crate::handler::IntentHandler;

/// All handlers in routing order.
#[must_use]
pub fn default_handlers() -> Vec<Box<dyn IntentHandler>> {
    vec![
        Box::new(SessionEndedHandler),
        Box::new(LaunchHandler),
        Box::new(AuthorizeHandler),
        Box::new(SendTelegramHandler),
        Box::new(SpeedDialHandler),
        Box::new(CheckTelegramsHandler),
        Box::new(HelpHandler),
        Box::new(CancelOrStopHandler),
        Box::new(FallbackHandler),
    ]
}
