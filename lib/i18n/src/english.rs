//! Default (English) phrases.

use crate::locale::Locale;
use crate::table::PhraseTable;

fn ask_message(name: &str) -> String {
    format!("What is the message for {name}?")
}

fn unread_summary(count: usize, senders: &str) -> String {
    match count {
        1 => format!("You have one new Telegram from {senders}."),
        n => format!("You have {n} new Telegrams from {senders}."),
    }
}

pub(crate) static PHRASES: PhraseTable = PhraseTable {
    locale: Locale::English,

    welcome: "Welcome",
    help: "My Telegrams connects Alexa with your Telegram Messenger. You can send a Telegram to a \
           person, group, or bot. Alternately, If I have trouble understanding a complex name, you \
           can use the speed dial feature to send a telegram. Furthermore, you can also check for \
           new telegrams. Say: 'Check my telegrams.' or 'Send a telegram' or 'send a speedgram' ",
    send_or_check: "I can help you send a Telegram or check for new Telegrams. So, which do you need?",
    authorize_prompt: "Before you can send Telegrams, I need to verify your phone number. \
                       Say 'yes' and I will send you a code.",

    backend_exception: "This is an error that shouldn't happen. I am sorry.",
    server_error: "Due to updates the service is currently not available. Try again later.",
    account_linking_required: "Welcome to My Telegrams. My Telegrams let's you connect Alexa with \
                               your Telegram Messenger. You must have a My Telegrams account to use \
                               this skill. Go to the Alexa app to link your Amazon account with your \
                               My Telegrams Account. Visit the website mentioned in the skill \
                               description. Bye for now.",
    wrong_intent: "I didn't quite catch that. I can't help you here.",
    detour_exception: "Sorry, My Telegrams can't help you here. A possible problem is that you \
                       wanted to reply with: 'Yes' to a Telegram. That is not possible. Bye for now",
    not_authorized_detour: "Sorry, My Telegrams can't help you with that yet. You first need to \
                            authorize this skill. Open the skill again and say 'yes' when I offer \
                            to send you a code. Bye for now",
    frontend_error_tail: ", an unexpected error happened. Try again later. ",

    fallback_intent: "My Telegrams can't help you here. You can either send a Telegram or check \
                      for new ones. So, which do you need?",
    fallback_tail: ", what did you say?",
    fallback_reprompt_tail: ", I am still having trouble understanding you. You can either say: \
                             'Send a telegram' or 'Check my Telegrams' ",

    no_phone_number: "You have not added a telephone number. Visit the website mentioned in the \
                      skill description and add a telephone number then try again. Bye for now",
    code_sent: "You received a code on your phone. <break time='200ms'/> What is the code?",
    authorized: "Done. You are now authorized.",
    wrong_code: "The code is wrong. Please try again. Bye for now",

    ask_recipient: "To whom should I send the Telegram?",
    ask_speed_dial: "Which speed dial number should I use?",
    contact_not_found: ", I could not find that contact. Who should receive the Telegram?",
    no_speed_dial: ", there is no contact with that speed dial number. Which number should I use?",
    no_new_telegrams: "You have no new Telegrams.",
    ask_message,
    unread_summary,
    list_and: "and",

    acks: &["Okay", "Alright", "Okey Dokey"],
    acceptance_acks: &["Okay", "Sure", "Alright", "Got it", "You got it"],
    done_acks: &["Okay", "Alright", "Got it", "Done", "You got it"],
    thinking: &["Umm", "Ahhm", "Hmmm"],
    dont_understand: &["Sorry", "Excuse me", "Pardon"],
    goodbyes: &[
        "adiós",
        "aloha",
        "arrivederci",
        "ciao",
        "auf Wiedersehen",
        "au revoir",
        "bon voyage",
        "shalom",
        "vale",
    ],
    anything_else: &[
        "Anything else?",
        "Is there something else I can help you with?",
        "Do you need anything else?",
        "Is there something else you need?",
    ],
};
