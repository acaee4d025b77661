//! Chat-profile messages: token-gated transcript sessions.
//!
//! `type` values on this profile: `0 = Hello`, `1 = Text`, `2 = Auth`,
//! `3 = AuthAck`, `4 = AuthRst`, `5 = MayNotEnter`.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::{CodecError, Envelope, Identity};

/// Wire `type` values for the chat profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    /// Entry request carrying `"<name>\n<email>"`.
    Hello,
    /// A chat line.
    Text,
    /// The shared-secret verification token.
    Auth,
    /// Verification accepted; the session is live.
    AuthAck,
    /// Verification failed.
    AuthRst,
    /// The requested name is already taken.
    MayNotEnter,
}

impl Kind {
    /// Convert the kind into its wire integer value.
    #[must_use]
    pub fn as_i64(self) -> i64 {
        match self {
            Self::Hello => 0,
            Self::Text => 1,
            Self::Auth => 2,
            Self::AuthAck => 3,
            Self::AuthRst => 4,
            Self::MayNotEnter => 5,
        }
    }

    /// Parse a kind from its wire integer value.
    fn from_i64(value: i64) -> Result<Self, CodecError> {
        match value {
            0 => Ok(Self::Hello),
            1 => Ok(Self::Text),
            2 => Ok(Self::Auth),
            3 => Ok(Self::AuthAck),
            4 => Ok(Self::AuthRst),
            5 => Ok(Self::MayNotEnter),
            other => Err(CodecError::UnknownType(other)),
        }
    }
}

/// A decoded inbound frame on the chat profile.
#[derive(Clone, Debug, PartialEq)]
pub enum Message {
    /// Server echo of an entry request. Ignored by the client.
    Hello,
    /// An attributed chat line.
    Text { from: Identity, text: String },
    /// Echo of a verification attempt. Ignored by the client.
    Auth,
    /// Verification accepted.
    AuthAck,
    /// Verification failed; the token was wrong.
    AuthRst,
    /// Name collision; the identity must be re-chosen.
    MayNotEnter,
}

/// Decode one raw transport frame into a chat-profile message.
///
/// # Errors
///
/// Returns [`CodecError::Json`] for a malformed envelope and
/// [`CodecError::UnknownType`] for a `type` outside the profile.
pub fn decode(raw: &str) -> Result<Message, CodecError> {
    let env = Envelope::decode(raw)?;

    match Kind::from_i64(env.kind)? {
        Kind::Hello => Ok(Message::Hello),
        Kind::Text => Ok(Message::Text { from: env.sender(), text: env.text }),
        Kind::Auth => Ok(Message::Auth),
        Kind::AuthAck => Ok(Message::AuthAck),
        Kind::AuthRst => Ok(Message::AuthRst),
        Kind::MayNotEnter => Ok(Message::MayNotEnter),
    }
}

/// Outbound entry request. The entry surface validates that both halves are
/// non-empty before connecting.
#[must_use]
pub fn hello(name: &str, email: &str) -> Envelope {
    Envelope::new(Kind::Hello.as_i64(), format!("{name}\n{email}"))
}

/// Outbound verification token.
#[must_use]
pub fn auth(token: &str) -> Envelope {
    Envelope::new(Kind::Auth.as_i64(), token)
}

/// Outbound chat line.
#[must_use]
pub fn text(body: &str) -> Envelope {
    Envelope::new(Kind::Text.as_i64(), body)
}
