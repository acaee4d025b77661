//! Drawing-profile messages: shared-canvas sessions.
//!
//! `type` values on this profile: `0 = Hello`, `1 = Text` (a serialized
//! stroke), `2 = ChangeUser`, `3 = PresentUsers`, `4 = EmptyCanvas`.

#[cfg(test)]
#[path = "draw_test.rs"]
mod draw_test;

use crate::{CodecError, Envelope, Identity, Stroke, split_pair};

/// Wire `type` values for the drawing profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    /// A client introduced itself with `"<name>\n<color>"`.
    Hello,
    /// A completed stroke, JSON-serialized into `text`.
    Text,
    /// A rename/recolor announcement, `"<name>\n<color>"` in `text`.
    ChangeUser,
    /// A full roster snapshot, a JSON identity array in `text`.
    PresentUsers,
    /// The shared canvas was cleared.
    EmptyCanvas,
}

impl Kind {
    /// Convert the kind into its wire integer value.
    #[must_use]
    pub fn as_i64(self) -> i64 {
        match self {
            Self::Hello => 0,
            Self::Text => 1,
            Self::ChangeUser => 2,
            Self::PresentUsers => 3,
            Self::EmptyCanvas => 4,
        }
    }

    /// Parse a kind from its wire integer value.
    fn from_i64(value: i64) -> Result<Self, CodecError> {
        match value {
            0 => Ok(Self::Hello),
            1 => Ok(Self::Text),
            2 => Ok(Self::ChangeUser),
            3 => Ok(Self::PresentUsers),
            4 => Ok(Self::EmptyCanvas),
            other => Err(CodecError::UnknownType(other)),
        }
    }
}

/// A decoded inbound frame on the drawing profile.
///
/// Attribution comes from the envelope `user` field where the dispatch
/// consumes it; an unattributed frame yields an empty identity there, which
/// matches nothing in the roster and renders as an empty name.
#[derive(Clone, Debug, PartialEq)]
pub enum Message {
    /// A peer joined the session.
    Hello(Identity),
    /// A peer completed a stroke.
    Stroke(Stroke),
    /// A peer renamed or recolored. `prev` is the sender identity before
    /// the change; `next` is the announced replacement.
    ChangeUser { prev: Identity, next: Identity },
    /// Authoritative roster snapshot; replaces the registry wholesale.
    PresentUsers(Vec<Identity>),
    /// A peer cleared the shared canvas.
    EmptyCanvas { by: Identity },
}

/// Decode one raw transport frame into a drawing-profile message.
///
/// # Errors
///
/// Returns [`CodecError::Json`] for a malformed envelope or stroke/roster
/// payload, [`CodecError::UnknownType`] for a `type` outside the profile,
/// and [`CodecError::MalformedPayload`] for a bad identity pair.
pub fn decode(raw: &str) -> Result<Message, CodecError> {
    let env = Envelope::decode(raw)?;

    match Kind::from_i64(env.kind)? {
        Kind::Hello => {
            let (name, color) =
                split_pair(&env.text).ok_or(CodecError::MalformedPayload("hello"))?;
            Ok(Message::Hello(Identity::new(name, color)))
        }
        Kind::Text => Ok(Message::Stroke(serde_json::from_str(&env.text)?)),
        Kind::ChangeUser => {
            let (name, color) =
                split_pair(&env.text).ok_or(CodecError::MalformedPayload("change-user"))?;
            Ok(Message::ChangeUser {
                prev: env.sender(),
                next: Identity::new(name, color),
            })
        }
        Kind::PresentUsers => Ok(Message::PresentUsers(serde_json::from_str(&env.text)?)),
        Kind::EmptyCanvas => Ok(Message::EmptyCanvas { by: env.sender() }),
    }
}

/// Outbound introduction frame for `user`.
#[must_use]
pub fn hello(user: &Identity) -> Envelope {
    Envelope::new(Kind::Hello.as_i64(), format!("{}\n{}", user.name, user.color))
}

/// Outbound broadcast of one completed stroke.
#[must_use]
pub fn stroke(stroke: &Stroke) -> Envelope {
    // A stroke is plain strings and floats; serialization cannot fail.
    let payload = serde_json::to_string(stroke).unwrap_or_default();
    Envelope::new(Kind::Text.as_i64(), payload)
}

/// Outbound rename/recolor announcement.
#[must_use]
pub fn change_user(next: &Identity) -> Envelope {
    Envelope::new(Kind::ChangeUser.as_i64(), format!("{}\n{}", next.name, next.color))
}

/// Outbound canvas-clear broadcast.
#[must_use]
pub fn empty_canvas() -> Envelope {
    Envelope::new(Kind::EmptyCanvas.as_i64(), String::new())
}
