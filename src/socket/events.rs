//! Messages exchanged between the panel and the socket task.

use tokio::sync::mpsc;

/// Lifecycle and traffic events emitted by the socket task.
///
/// Contract: a task emits at most one [`Opened`](Self::Opened) and exactly
/// one [`Closed`](Self::Closed), the latter always last. Any
/// [`Error`](Self::Error) is followed by a `Closed`, so the close reaction
/// is the panel's single teardown path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SocketEvent {
    /// Handshake completed; the Connection is ready for traffic.
    Opened,
    /// A text payload arrived, passed through verbatim.
    Message(String),
    /// Transport failure. Cosmetic at the panel layer; teardown follows
    /// via `Closed`.
    Error(String),
    /// The Connection ended, gracefully or not.
    Closed {
        /// Numeric close code (1006 when the peer vanished without a
        /// close frame, 1005 when the frame carried no code).
        code: u16,
        /// Close reason string, possibly empty.
        reason: String,
    },
}

/// Outbound requests from the panel to the socket task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outgoing {
    /// Transmit a text payload verbatim.
    Text(String),
    /// Send a normal close frame and wait for the peer's close.
    Close,
}

/// Handle to the single live socket task.
///
/// Dropping the handle closes the outbound channel, which the task treats
/// as a close request. Delivery failures are silently ignored: the task
/// reports its own demise through a `Closed` event, and the panel models
/// no acknowledgement for sends.
#[derive(Debug, Clone)]
pub struct SocketHandle {
    outbound: mpsc::UnboundedSender<Outgoing>,
}

impl SocketHandle {
    /// Wraps the outbound sender for a spawned socket task.
    #[must_use]
    pub fn new(outbound: mpsc::UnboundedSender<Outgoing>) -> Self {
        Self { outbound }
    }

    /// Queues a text payload for transmission.
    pub fn send_text(&self, text: impl Into<String>) {
        let _ = self.outbound.send(Outgoing::Text(text.into()));
    }

    /// Requests closure of the socket. The close event arrives
    /// asynchronously through the event channel.
    pub fn request_close(&self) {
        let _ = self.outbound.send(Outgoing::Close);
    }
}
