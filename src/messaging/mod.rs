//! Messaging deep-link construction.
//!
//! Builds the `wa.me` link the card's "message me" action opens: a URL that
//! drops the user into a chat with the card's owner, message pre-filled.

/// Deep-link host for WhatsApp chats.
pub const WHATSAPP_BASE_URL: &str = "https://wa.me";

/// Greeting pre-filled into the chat when the caller does not override it.
pub const DEFAULT_GREETING: &str =
    "Hello! I found your contact through your digital business card.";

/// Build a chat deep link for `number` (digit string, no leading `+`) with
/// `message` percent-encoded into the `text` query parameter.
///
/// The encoding leaves no raw spaces or punctuation in the query, so the
/// link survives every context it gets pasted into.
pub fn whatsapp_link(number: &str, message: &str) -> String {
    format!(
        "{}/{}?text={}",
        WHATSAPP_BASE_URL,
        number,
        urlencoding::encode(message)
    )
}
