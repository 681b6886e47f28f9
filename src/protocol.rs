//! Chat line format and room routes
//!
//! The chat server speaks plain text frames. A broadcast frame is
//! `"<username>: <message>"`; the client sends its display name once, then raw
//! message text.

use std::fmt;

pub const SEPARATOR: &str = ": ";
pub const DEFAULT_DISPLAY_NAME: &str = "Anonymous";
pub const LOCAL_SENDER_LABEL: &str = "You";
/// Transcript prefix marking a line the local user sent
pub const OUTGOING_PREFIX: &str = "> ";
const ROOM_ROUTE_PREFIX: &str = "/chat/";

/// One chat line as carried on the wire
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatLine {
    pub sender: Option<String>,
    pub text: String,
}

impl ChatLine {
    pub fn new(sender: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            sender: Some(sender.into()),
            text: text.into(),
        }
    }

    /// Splits on the first `": "`; later separators belong to the message.
    /// A line without a separator has no sender.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.split_once(SEPARATOR) {
            Some((sender, text)) => Self::new(sender, text),
            None => Self {
                sender: None,
                text: raw.to_string(),
            },
        }
    }
}

impl fmt::Display for ChatLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.sender {
            Some(sender) => write!(f, "{}{}{}", sender, SEPARATOR, self.text),
            None => f.write_str(&self.text),
        }
    }
}

/// Which side of the conversation a message is drawn on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// A message ready for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageView {
    pub sender: String,
    pub text: String,
    pub side: Side,
}

impl MessageView {
    /// Message echoed locally after sending
    pub fn outgoing(text: impl Into<String>) -> Self {
        Self {
            sender: LOCAL_SENDER_LABEL.to_string(),
            text: text.into(),
            side: Side::Right,
        }
    }

    /// Message received from the server
    #[must_use]
    pub fn incoming(line: &ChatLine) -> Self {
        Self {
            sender: line.sender.clone().unwrap_or_default(),
            text: line.text.clone(),
            side: Side::Left,
        }
    }

    /// Reads one transcript line: `> text` is a local send, anything else is a
    /// wire line from the server. Blank lines and blank sends yield nothing.
    #[must_use]
    pub fn from_transcript_line(raw: &str) -> Option<Self> {
        if raw.trim().is_empty() {
            return None;
        }
        match raw.strip_prefix(OUTGOING_PREFIX) {
            Some(text) if should_send(text) => Some(Self::outgoing(text)),
            Some(_) => None,
            None => Some(Self::incoming(&ChatLine::parse(raw))),
        }
    }
}

impl fmt::Display for MessageView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.side {
            Side::Left => write!(f, "{} │ {}", self.sender, self.text),
            Side::Right => write!(f, "{} │ {}", self.text, self.sender),
        }
    }
}

/// Name announced to the server; blank input falls back to `fallback`
#[must_use]
pub fn display_name(input: Option<&str>, fallback: &str) -> String {
    match input.map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => fallback.to_string(),
    }
}

/// Blank messages are never sent
#[must_use]
pub fn should_send(message: &str) -> bool {
    !message.trim().is_empty()
}

#[must_use]
pub fn room_route(room_id: i64) -> String {
    format!("{}{}", ROOM_ROUTE_PREFIX, room_id)
}

/// Extracts the room id from `/chat/<id>` (a trailing slash is allowed).
/// Accepts every id [`room_route`] can produce, negative ones included.
#[must_use]
pub fn parse_room_route(path: &str) -> Option<i64> {
    let rest = path.strip_prefix(ROOM_ROUTE_PREFIX)?;
    let id = rest.strip_suffix('/').unwrap_or(rest);
    let digits = id.strip_prefix('-').unwrap_or(id);
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    id.parse().ok()
}
