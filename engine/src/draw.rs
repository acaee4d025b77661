//! Drawing-profile session controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns every piece of mutable state for one shared-canvas session: the
//! lifecycle state machine, the local identity, the gesture capture, and
//! the stores the render layer reads (strokes, roster, toasts). Inbound
//! frames are dispatched here; outbound frames leave as [`Effect::Send`].
//!
//! This deployment uses the direct variant of the handshake: the hello goes
//! out as soon as the socket opens and the session is considered live
//! without a server acknowledgement. Stroke events are idempotent
//! broadcasts, not state transitions requiring an ack, so optimistically
//! emitting them before any presence confirmation is accepted.

#[cfg(test)]
#[path = "draw_test.rs"]
mod draw_test;

use messages::{CodecError, Identity, Point, draw};

use crate::capture::{CaptureConfig, CaptureEvent, StrokeCapture};
use crate::presence::PresenceRegistry;
use crate::profile::ProfileStore;
use crate::session::{Effect, SessionState};
use crate::stroke::StrokeStore;
use crate::toast::NotificationQueue;

/// One shared-canvas session.
pub struct DrawSession {
    state: SessionState,
    identity: Identity,
    profile: ProfileStore,
    capture: StrokeCapture,
    /// Committed strokes and the in-progress stroke; read by the renderer.
    pub strokes: StrokeStore,
    /// Peers in the session; read by the renderer.
    pub presence: PresenceRegistry,
    /// Live notices; read by the renderer, expired by the host's timer.
    pub toasts: NotificationQueue,
}

impl DrawSession {
    /// Build a session restoring the persisted identity (or the default)
    /// from `profile`.
    #[must_use]
    pub fn new(profile: ProfileStore, config: CaptureConfig) -> Self {
        let identity = profile.load_or_default();
        Self {
            state: SessionState::Disconnected,
            identity,
            profile,
            capture: StrokeCapture::new(config),
            strokes: StrokeStore::new(),
            presence: PresenceRegistry::new(),
            toasts: NotificationQueue::new(),
        }
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    // --- Lifecycle ---

    /// The user committed an identity; the host is about to open the socket.
    pub fn connect(&mut self) {
        self.state = SessionState::Connecting;
    }

    /// The socket opened: introduce ourselves and go live. No server
    /// acknowledgement gates this variant.
    pub fn socket_open(&mut self) -> Vec<Effect> {
        if self.state != SessionState::Connecting {
            return Vec::new();
        }

        self.state = SessionState::Authenticated;
        vec![Effect::Send(draw::hello(&self.identity).encode())]
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

    /// Decode and dispatch one inbound frame, received at `now_ms`.
    ///
    /// A malformed payload or unknown type is logged and dropped; nothing
    /// inbound is ever fatal.
    pub fn handle_frame(&mut self, raw: &str, now_ms: i64) -> Vec<Effect> {
        let message = match draw::decode(raw) {
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
            draw::Message::Hello(user) => {
                tracing::debug!("peer joined: {}", user.name);
                self.presence.join(user);
            }
            draw::Message::Stroke(stroke) => {
                self.strokes.push(stroke);
            }
            draw::Message::ChangeUser { prev, next } => {
                tracing::debug!("peer renamed: {} -> {}", prev.name, next.name);
                self.presence.rename(&prev, next);
            }
            draw::Message::PresentUsers(snapshot) => {
                self.presence.replace_all(snapshot);
            }
            draw::Message::EmptyCanvas { by } => {
                self.strokes.clear();
                self.toasts.push_at(format!("{} cleared", by.name), now_ms);
            }
        }
        vec![Effect::Render]
    }

    // --- Gesture input ---

    /// A pointer or touch pressed with `contacts` simultaneous contacts.
    pub fn pointer_down(&mut self, pt: Point, contacts: u32) -> Vec<Effect> {
        match self.capture.press(&mut self.strokes, pt, contacts) {
            CaptureEvent::Started => vec![Effect::Render],
            _ => Vec::new(),
        }
    }

    /// A pointer or touch moved while dragging.
    pub fn pointer_move(&mut self, pt: Point) -> Vec<Effect> {
        match self.capture.movement(&mut self.strokes, pt) {
            CaptureEvent::Extended { .. } => vec![Effect::Render],
            CaptureEvent::Ended => self.commit_stroke(),
            _ => Vec::new(),
        }
    }

    /// The pointer or touch released.
    pub fn pointer_up(&mut self) -> Vec<Effect> {
        match self.capture.release() {
            CaptureEvent::Ended => self.commit_stroke(),
            _ => Vec::new(),
        }
    }

    /// Commit the in-progress stroke locally and broadcast it exactly once.
    fn commit_stroke(&mut self) -> Vec<Effect> {
        let stroke = self.strokes.commit(&self.identity.color);

        let mut effects = Vec::new();
        if self.state == SessionState::Authenticated {
            effects.push(Effect::Send(draw::stroke(&stroke).encode()));
        }
        effects.push(Effect::Render);
        effects
    }

    // --- User actions ---

    /// Rename/recolor the local user. The new identity applies locally in
    /// all cases; the announcement and the profile write only happen on a
    /// live session.
    pub fn change_user(&mut self, next: Identity) -> Vec<Effect> {
        self.identity = next;

        if self.state != SessionState::Authenticated {
            return vec![Effect::Render];
        }

        self.profile.save(&self.identity);
        vec![
            Effect::Send(draw::change_user(&self.identity).encode()),
            Effect::Render,
        ]
    }

    /// Clear the local canvas and, on a live session, tell the peers.
    pub fn empty_canvas(&mut self) -> Vec<Effect> {
        self.strokes.clear();

        if self.state != SessionState::Authenticated {
            return vec![Effect::Render];
        }

        vec![Effect::Send(draw::empty_canvas().encode()), Effect::Render]
    }
}
