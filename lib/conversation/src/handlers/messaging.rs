//! Handlers that need an authorized account.

use crate::error::InputError;
use crate::handler::{IntentHandler, TurnContext};
use crate::name_match::resolve_contact;
use crate::request::{Intent, TurnRequest, intents};
use crate::response::TurnResponse;
use crate::services::AccountServices;
use crate::session::SessionState;
use async_trait::async_trait;
use my_telegrams_core::Contact;
use my_telegrams_i18n::BREAK_150;
use my_telegrams_integration::TransportError;
use rootcause::prelude::Report;
use tracing::{debug, info, instrument};

type Resolved = Result<Contact, InputError>;

/// Sends a Telegram to a contact named by first name.
pub struct SendTelegramHandler;

#[async_trait]
impl IntentHandler for SendTelegramHandler {
    fn name(&self) -> &'static str {
        "send_telegram"
    }

    fn can_handle(&self, request: &TurnRequest, session: &SessionState) -> bool {
        request.is_intent(&[intents::SEND_TELEGRAM]) && session.is_authorized()
    }

    #[instrument(skip_all, name = "send_telegram")]
    async fn handle(
        &self,
        ctx: &mut TurnContext<'_>,
    ) -> Result<TurnResponse, Report<TransportError>> {
        let (Some(intent), Some(client)) = (ctx.intent(), ctx.account_services()) else {
            return Ok(TurnResponse::continuing(ctx.phrases.fallback(ctx.selector)));
        };

        match recipient_by_name(intent, client.as_ref()).await? {
            Ok(contact) => deliver(ctx, intent, client.as_ref(), &contact).await,
            Err(input) => Ok(ask_again(ctx, &input, &intent.name)),
        }
    }
}

/// Sends a Telegram to the contact stored under a speed dial number.
pub struct SpeedDialHandler;

#[async_trait]
impl IntentHandler for SpeedDialHandler {
    fn name(&self) -> &'static str {
        "speed_dial"
    }

    fn can_handle(&self, request: &TurnRequest, session: &SessionState) -> bool {
        request.is_intent(&[intents::SEND_SPEED_DIAL]) && session.is_authorized()
    }

    #[instrument(skip_all, name = "speed_dial")]
    async fn handle(
        &self,
        ctx: &mut TurnContext<'_>,
    ) -> Result<TurnResponse, Report<TransportError>> {
        let (Some(intent), Some(client)) = (ctx.intent(), ctx.account_services()) else {
            return Ok(TurnResponse::continuing(ctx.phrases.fallback(ctx.selector)));
        };

        match recipient_by_speed_dial(intent, client.as_ref()).await? {
            Ok(contact) => deliver(ctx, intent, client.as_ref(), &contact).await,
            Err(input) => Ok(ask_again(ctx, &input, &intent.name)),
        }
    }
}

/// Reads out who sent unread Telegrams.
pub struct CheckTelegramsHandler;

#[async_trait]
impl IntentHandler for CheckTelegramsHandler {
    fn name(&self) -> &'static str {
        "check_telegrams"
    }

    fn can_handle(&self, request: &TurnRequest, session: &SessionState) -> bool {
        request.is_intent(&[intents::CHECK_TELEGRAMS]) && session.is_authorized()
    }

    #[instrument(skip_all, name = "check_telegrams")]
    async fn handle(
        &self,
        ctx: &mut TurnContext<'_>,
    ) -> Result<TurnResponse, Report<TransportError>> {
        let Some(client) = ctx.account_services() else {
            return Ok(TurnResponse::continuing(ctx.phrases.fallback(ctx.selector)));
        };

        let conversations = client.unread_conversations().await?;
        let total: usize = conversations.iter().map(|c| c.unread_count()).sum();
        let follow_up = ctx.phrases.random_anything_else_without_ack(ctx.selector);
        debug!(chats = conversations.len(), total, "Unread Telegrams loaded");

        if total == 0 {
            return Ok(TurnResponse::continuing(format!(
                "{} {BREAK_150} {follow_up}",
                ctx.phrases.no_new_telegrams
            )));
        }

        let mut senders: Vec<String> = Vec::new();
        for conversation in conversations.iter().filter(|c| c.unread_count() > 0) {
            let name = conversation.sender.display_name();
            if !senders.contains(&name) {
                senders.push(name);
            }
        }

        let summary = (ctx.phrases.unread_summary)(total, &ctx.phrases.spoken_list(&senders));
        Ok(TurnResponse::continuing(format!(
            "{summary} {BREAK_150} {follow_up}"
        )))
    }
}

async fn recipient_by_name(
    intent: &Intent,
    client: &dyn AccountServices,
) -> Result<Resolved, Report<TransportError>> {
    let Some(spoken) = intent.slot(intents::FIRST_NAME_SLOT) else {
        return Ok(Err(InputError::MissingSlot {
            slot: intents::FIRST_NAME_SLOT,
        }));
    };

    let contacts = client.contacts().await?;
    Ok(resolve_contact(&contacts, spoken)
        .cloned()
        .ok_or_else(|| InputError::UnknownContact {
            spoken: spoken.to_string(),
        }))
}

async fn recipient_by_speed_dial(
    intent: &Intent,
    client: &dyn AccountServices,
) -> Result<Resolved, Report<TransportError>> {
    let Some(spoken) = intent.slot(intents::SPEED_DIAL_SLOT) else {
        return Ok(Err(InputError::MissingSlot {
            slot: intents::SPEED_DIAL_SLOT,
        }));
    };
    let unknown = || InputError::UnknownSpeedDial {
        spoken: spoken.to_string(),
    };
    let Ok(number) = spoken.parse::<u32>() else {
        return Ok(Err(unknown()));
    };

    let contacts = client.contacts().await?;
    Ok(contacts
        .into_iter()
        .find(|contact| contact.speed_dial_number == Some(number))
        .ok_or_else(unknown))
}

/// Sends the message slot to `contact`, or asks for it first.
async fn deliver(
    ctx: &TurnContext<'_>,
    intent: &Intent,
    client: &dyn AccountServices,
    contact: &Contact,
) -> Result<TurnResponse, Report<TransportError>> {
    let name = contact.display_name();
    let Some(text) = intent.slot(intents::MESSAGE_SLOT) else {
        return Ok(TurnResponse::continuing((ctx.phrases.ask_message)(&name))
            .eliciting(&intent.name, intents::MESSAGE_SLOT));
    };

    client.send_message(contact, text).await?;
    info!(recipient = %name, "Telegram sent");
    Ok(TurnResponse::continuing(
        ctx.phrases.random_anything_else(ctx.selector),
    ))
}

fn ask_again(ctx: &TurnContext<'_>, input: &InputError, intent_name: &str) -> TurnResponse {
    info!(error = %input, "Asking again");
    let phrases = ctx.phrases;
    let (speech, slot) = match input {
        InputError::MissingSlot { slot } if *slot == intents::SPEED_DIAL_SLOT => {
            (phrases.ask_speed_dial.to_string(), *slot)
        }
        InputError::MissingSlot { slot } => (phrases.ask_recipient.to_string(), *slot),
        InputError::UnknownContact { .. } => (
            format!(
                "{}{}",
                phrases.random_dont_understand(ctx.selector),
                phrases.contact_not_found
            ),
            intents::FIRST_NAME_SLOT,
        ),
        InputError::UnknownSpeedDial { .. } => (
            format!(
                "{}{}",
                phrases.random_dont_understand(ctx.selector),
                phrases.no_speed_dial
            ),
            intents::SPEED_DIAL_SLOT,
        ),
    };
    TurnResponse::continuing(speech).eliciting(intent_name, slot)
}
