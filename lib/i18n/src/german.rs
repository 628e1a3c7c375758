//! German phrases (`de-DE`).

use crate::locale::Locale;
use crate::table::PhraseTable;

fn ask_message(name: &str) -> String {
    format!("Was soll ich {name} schreiben?")
}

fn unread_summary(count: usize, senders: &str) -> String {
    match count {
        1 => format!("Du hast ein neues Telegram von {senders}."),
        n => format!("Du hast {n} neue Telegramme von {senders}."),
    }
}

pub(crate) static PHRASES: PhraseTable = PhraseTable {
    locale: Locale::German,

    welcome: "Willkommen",
    help: "My Telegrams verbindet Alexa mit deinem Telegram Messenger. Du kannst ein Telegram zu \
           einer Person, Gruppe oder einem Bot schicken. Alternativ kannst du, falls ich Probleme \
           habe den Namen zu verstehen, ein 'Speedgram' verschicken. Außerdem kannst du checken ob \
           du neue Telegrame hast. Sage:  'Verschicke ein Telegram.' oder 'Checke meine \
           Telegramme.' oder 'Verschicke ein Speedgram.'",
    send_or_check: "Ich kann ein Telegram verschicken oder nach neuen Telegrammen schauen. Also, \
                    was brauchst du?",
    authorize_prompt: "Bevor du Telegramme verschicken kannst, muss ich deine Telefonnummer \
                       bestätigen. Sage 'Ja' und ich schicke dir einen Code.",

    backend_exception: "Das ist ein Fehler, der nicht passieren dürfte. Tut mir leid.",
    server_error: "Aufgrund von Server Updates ist dieser Skill momentan nicht verfügbar. \
                   Versuche es später erneut ",
    account_linking_required: "Du benötigst einen My Telegrams Account um diesen Skill nutzen zu \
                               können. Bevor du diesen Skill verwenden kannst, benutze die Alexa \
                               app um deinen Amazon Account mit dem My Telegrams Account zu \
                               verknüpfen.",
    wrong_intent: "Sorry das habe ich jetzt nicht nachvollziehen können. Ich kann dir hier nicht \
                   weiter helfen. ",
    detour_exception: "Sorry, My Telegrams kann dir hier nicht weiterhelfen. Ein mögliches Problem \
                       ist, dass du mit: 'Ja' auf ein Telegram antworten möchtest. Das ist nicht \
                       möglich. Tschüss",
    not_authorized_detour: "Sorry, dabei kann dir My Telegrams noch nicht helfen. Du musst diesen \
                            Skill zuerst autorisieren. Öffne den Skill erneut und sage 'Ja', wenn \
                            ich dir anbiete einen Code zu schicken. Tschüss",
    frontend_error_tail: ", es ist ein Fehler aufgetreten. Versuche es später noch einmal. ",

    fallback_intent: "My Telegrams kann dir dabei nicht helfen. Du kannst entweder ein Telegram \
                      verschicken oder checken ob es neue gibt. Also, was brauchst du?",
    fallback_tail: ", was hast du gesagt?",
    fallback_reprompt_tail: ", ich habe das nicht verstanden. Sage entweder: 'Versende ein \
                             Telegram' oder 'Checke meine Telegramme' ",

    no_phone_number: "Du hast noch keine Telefonnummer hinterlegt. Besuche die Webseite aus der \
                      Skill Beschreibung, füge eine Telefonnummer hinzu und versuche es dann \
                      erneut. Tschüss",
    code_sent: "Du hast einen Code auf dein Telefon bekommen. <break time='200ms'/> Wie lautet der \
                Code?",
    authorized: "Geschafft. Du bist jetzt autorisiert.",
    wrong_code: "Der Code ist falsch. Bitte versuche es später noch einmal. Tschüss",

    ask_recipient: "An wen soll ich das Telegram schicken?",
    ask_speed_dial: "Welche Kurzwahl soll ich nehmen?",
    contact_not_found: ", diesen Kontakt konnte ich nicht finden. Wer soll das Telegram bekommen?",
    no_speed_dial: ", unter dieser Kurzwahl gibt es keinen Kontakt. Welche Nummer soll ich nehmen?",
    no_new_telegrams: "Du hast keine neuen Telegramme.",
    ask_message,
    unread_summary,
    list_and: "und",

    acks: &["Okay", "In Ordnung", "Alles klar", "Okey Dokey"],
    acceptance_acks: &["Okay", "In Ordnung", "Alles klar"],
    done_acks: &["Okay", "In Ordnung", "Alles klar", "Geschafft"],
    thinking: &["Umm", "Ahhm", "Hmmm"],
    dont_understand: &["Sorry", "Entschuldigung", "Pardon"],
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
        "Gibt es sonst noch was?",
        "Gibt es noch etwas wobei ich dir helfen kann?",
        "Brauchst du noch etwas?",
        "Noch etwas?",
    ],
};
