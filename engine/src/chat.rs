//! Token-gated chat session controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! This deployment gates entry behind a shared-secret verification token:
//! the hello announces an identity, the server issues a challenge out of
//! band, and the session only goes live on an explicit acknowledgement.
//! A failed verification or a name collision parks the session in
//! `Rejected`; nothing may be sent until a fresh `connect` completes the
//! handshake again.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use messages::{CodecError, chat};

use crate::session::{Effect, SessionState};
use crate::transcript::Transcript;

/// One token-gated transcript session.
pub struct ChatSession {
    state: SessionState,
    name: String,
    email: String,
    /// Attributed chat lines; read by the renderer.
    pub transcript: Transcript,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: SessionState::Disconnected,
            name: String::new(),
            email: String::new(),
            transcript: Transcript::new(),
        }
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    // --- Lifecycle ---

    /// The entry surface supplied a validated identity; the host is about
    /// to open the socket. Re-entry after a rejection starts here too.
    pub fn connect(&mut self, name: impl Into<String>, email: impl Into<String>) {
        self.name = name.into();
        self.email = email.into();
        self.state = SessionState::Connecting;
    }

    /// The socket opened: send the hello and wait for verification.
    pub fn socket_open(&mut self) -> Vec<Effect> {
        if self.state != SessionState::Connecting {
            return Vec::new();
        }

        self.state = SessionState::AwaitingVerification;
        vec![Effect::Send(chat::hello(&self.name, &self.email).encode())]
    }

    /// The user entered the verification token.
    pub fn verify(&mut self, token: &str) -> Vec<Effect> {
        if self.state != SessionState::AwaitingVerification {
            return Vec::new();
        }
        vec![Effect::Send(chat::auth(token).encode())]
    }

    /// The transport failed. The session is over; re-entry is user-driven.
    pub fn transport_error(&mut self, reason: &str) {
        tracing::warn!("transport error: {reason}");
        self.state = SessionState::Disconnected;
    }

    /// The socket closed. No automatic reconnection is attempted.
    pub fn closed(&mut self) {
        tracing::debug!("session closed");
        self.state = SessionState::Disconnected;
    }

    // --- Inbound dispatch ---

    /// Decode and dispatch one inbound frame. Malformed or unknown frames
    /// are logged and dropped; nothing inbound is ever fatal.
    pub fn handle_frame(&mut self, raw: &str) -> Vec<Effect> {
        let message = match chat::decode(raw) {
            Ok(message) => message,
            Err(CodecError::UnknownType(kind)) => {
                tracing::warn!("dropping frame with unknown type {kind}");
                return Vec::new();
            }
            Err(err) => {
                tracing::warn!("dropping malformed frame: {err}");
                return Vec::new();
            }
        };

        match message {
            // Echoes of our own handshake frames carry nothing to apply.
            chat::Message::Hello | chat::Message::Auth => Vec::new(),
            chat::Message::Text { from, text } => {
                self.transcript.push(from.name, text);
                vec![Effect::Render]
            }
            chat::Message::AuthAck => {
                self.state = SessionState::Authenticated;
                vec![Effect::Render]
            }
            chat::Message::AuthRst => {
                self.state = SessionState::Rejected;
                vec![Effect::Notice("Verification failed: incorrect token".to_owned())]
            }
            chat::Message::MayNotEnter => {
                self.state = SessionState::Rejected;
                vec![Effect::Notice(
                    "Another user is already using that name. Try a different one.".to_owned(),
                )]
            }
        }
    }

    // --- User actions ---

    /// Send a chat line. A no-op unless the session is live.
    pub fn send_chat(&mut self, body: &str) -> Vec<Effect> {
        if self.state != SessionState::Authenticated {
            return Vec::new();
        }
        vec![Effect::Send(chat::text(body).encode())]
    }
}
