//! Connection lifecycle state and the host-facing effect vocabulary.
//!
//! DESIGN
//! ======
//! Each session controller owns exactly one connection for its lifetime: the
//! state machine below never loops back on its own. A transport error or
//! close collapses to `Disconnected` with no automatic reconnection, and a
//! rejection parks in `Rejected` until the user re-enters an identity —
//! session identity is transport-lifetime-bound by contract.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Lifecycle state of one session's connection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    /// No connection; the socket is closed or was never opened.
    #[default]
    Disconnected,
    /// The user entered an identity and the socket is being opened.
    Connecting,
    /// Hello sent; waiting for the verification exchange to resolve.
    AwaitingVerification,
    /// The session is live; events may be sent.
    Authenticated,
    /// The server rejected entry; a fresh user-driven `connect` is required.
    Rejected,
}

/// Actions returned from session handlers for the host to process.
///
/// The engine is sans-IO: it never writes to a socket or paints a surface
/// itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// A serialized frame to write to the transport, one per effect.
    Send(String),
    /// Engine state changed; the render layer should repaint.
    Render,
    /// A user-facing notice to surface (rejection, failure).
    Notice(String),
}
