//! Connection Panel Controller.
//!
//! Owns the connection state machine, the widget mirror, the status
//! display, the traffic log, and at most one socket handle. User actions
//! and socket events are serialized onto one event loop, so no two
//! mutations ever race.

use tracing::{debug, error, warn};

use super::log::TrafficLog;
use super::state::ConnectionState;
use super::widgets::{StatusDisplay, WidgetState};
use crate::error::PanelError;
use crate::socket::{SocketEvent, SocketHandle};

/// Single-instance controller for the connection panel.
///
/// Holds the one shared socket handle explicitly (rather than as ambient
/// mutable state) and keeps the widget mirror derived from the state
/// machine on every mutation.
#[derive(Debug)]
pub struct PanelController {
    url: String,
    state: ConnectionState,
    widgets: WidgetState,
    status: StatusDisplay,
    log: TrafficLog,
    handle: Option<SocketHandle>,
}

impl PanelController {
    /// Creates a controller for the given endpoint address, with no
    /// Connection and the widget mirror in its disconnected shape.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            state: ConnectionState::Absent,
            widgets: WidgetState::default(),
            status: StatusDisplay::default(),
            log: TrafficLog::new(),
            handle: None,
        }
    }

    /// Endpoint address this panel connects to.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Current connection state.
    #[must_use]
    pub fn state(&self) -> ConnectionState {
        self.state
    }

    /// Current widget mirror.
    #[must_use]
    pub fn widgets(&self) -> WidgetState {
        self.widgets
    }

    /// Current status display.
    #[must_use]
    pub fn status(&self) -> StatusDisplay {
        self.status
    }

    /// The traffic log.
    #[must_use]
    pub fn log(&self) -> &TrafficLog {
        &self.log
    }

    /// Initiates a connection.
    ///
    /// Logs the intent line and transitions to `Connecting`. The caller is
    /// expected to spawn the socket task next and [`attach`](Self::attach)
    /// its handle.
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::AlreadyActive`] when a Connection already
    /// exists; the live Connection is left untouched.
    pub fn connect(&mut self) -> Result<(), PanelError> {
        let Some(next) = self.state.on_connect() else {
            warn!(state = ?self.state, "connect rejected: connection already active");
            return Err(PanelError::AlreadyActive);
        };
        self.log.append(format!("Connecting to {}", self.url));
        self.transition(next);
        Ok(())
    }

    /// Attaches the outbound handle for the Connection initiated by the
    /// last successful [`connect`](Self::connect).
    pub fn attach(&mut self, handle: SocketHandle) {
        debug_assert!(!self.state.is_absent());
        self.handle = Some(handle);
    }

    /// Terminates the Connection.
    ///
    /// No-op when the Connection is absent or already closing: zero log
    /// lines, zero state change. Otherwise logs the intent, requests
    /// closure, and transitions to `Closing`; the teardown itself happens
    /// when the close event lands.
    pub fn disconnect(&mut self) {
        let Some(next) = self.state.on_disconnect() else {
            return;
        };
        self.log.append("Disconnecting...");
        if let Some(handle) = &self.handle {
            handle.request_close();
        }
        self.transition(next);
    }

    /// Sends a text message verbatim.
    ///
    /// Transmitted only when the Connection is open, a handle is attached,
    /// and the text is non-empty (emptiness only — whitespace is not
    /// trimmed). Anything else is a silent no-op. Returns `true` when the
    /// text was handed to the socket, so the frontend can clear its input.
    /// Delivery is not acknowledged at this layer.
    pub fn send(&mut self, text: &str) -> bool {
        if !self.state.is_open() || text.is_empty() {
            return false;
        }
        let Some(handle) = &self.handle else {
            return false;
        };
        self.log.append(format!("Sent: {text}"));
        handle.send_text(text);
        true
    }

    /// Dispatches a socket event to the matching reaction.
    pub fn on_event(&mut self, event: SocketEvent) {
        match event {
            SocketEvent::Opened => self.on_open(),
            SocketEvent::Message(payload) => self.on_message(&payload),
            SocketEvent::Error(detail) => self.on_error(&detail),
            SocketEvent::Closed { code, reason } => self.on_close(code, &reason),
        }
    }

    /// Open reaction: confirmed connected, enable the sending controls.
    fn on_open(&mut self) {
        self.status = StatusDisplay::connected();
        self.log.append("Connection OPEN");
        self.transition(self.state.on_open());
    }

    /// Close reaction: log the code and reason, drop the handle, and
    /// converge to absent. Fires identically for graceful and abnormal
    /// closure.
    fn on_close(&mut self, code: u16, reason: &str) {
        self.status = StatusDisplay::not_connected();
        self.log.append(format!("Connection CLOSED: {code} {reason}"));
        self.handle = None;
        self.transition(self.state.on_close());
    }

    /// Error reaction: status and log only. The transport guarantees a
    /// close event follows every error, so no state transition happens
    /// here.
    fn on_error(&mut self, detail: &str) {
        self.status = StatusDisplay::error();
        self.log.append(format!("Error: {detail}"));
        error!(detail, "socket error");
    }

    /// Message reaction: the payload is logged verbatim, no parsing.
    fn on_message(&mut self, payload: &str) {
        self.log.append(format!("Received: {payload}"));
    }

    /// Applies a state transition and re-derives the widget mirror, which
    /// keeps the mirror invariant by construction.
    fn transition(&mut self, next: ConnectionState) {
        if next != self.state {
            debug!(from = ?self.state, to = ?next, "connection state transition");
        }
        self.state = next;
        self.widgets = WidgetState::for_state(next);
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::socket::Outgoing;
    use tokio::sync::mpsc;

    const URL: &str = "ws://localhost:8080";

    fn handle() -> (SocketHandle, mpsc::UnboundedReceiver<Outgoing>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (SocketHandle::new(tx), rx)
    }

    /// Drives the controller to `Open` with an attached handle.
    fn open_panel() -> (PanelController, mpsc::UnboundedReceiver<Outgoing>) {
        let mut panel = PanelController::new(URL);
        let (handle, rx) = handle();
        let Ok(()) = panel.connect() else {
            panic!("connect from absent must succeed");
        };
        panel.attach(handle);
        panel.on_event(SocketEvent::Opened);
        (panel, rx)
    }

    #[test]
    fn lifecycle_logs_in_order() {
        let (mut panel, mut rx) = open_panel();
        assert!(panel.send("msg"));
        panel.on_event(SocketEvent::Closed {
            code: 1000,
            reason: "bye".to_string(),
        });

        assert_eq!(
            panel.log().lines(),
            [
                "Connecting to ws://localhost:8080",
                "Connection OPEN",
                "Sent: msg",
                "Connection CLOSED: 1000 bye",
            ]
        );
        assert_eq!(rx.try_recv(), Ok(Outgoing::Text("msg".to_string())));
    }

    #[test]
    fn send_rejected_while_absent() {
        let mut panel = PanelController::new(URL);
        for text in ["hello", "", "  "] {
            assert!(!panel.send(text));
        }
        assert!(panel.log().is_empty());
    }

    #[test]
    fn send_rejected_while_connecting() {
        let mut panel = PanelController::new(URL);
        let (handle, mut rx) = handle();
        let Ok(()) = panel.connect() else {
            panic!("connect must succeed");
        };
        panel.attach(handle);

        assert!(!panel.send("early"));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn empty_send_is_a_silent_noop() {
        let (mut panel, mut rx) = open_panel();
        let before = panel.log().len();
        assert!(!panel.send(""));
        assert_eq!(panel.log().len(), before);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn widgets_after_open() {
        let (panel, _rx) = open_panel();
        let w = panel.widgets();
        assert!(!w.connect);
        assert!(w.disconnect);
        assert!(w.input);
        assert!(w.send);
        assert_eq!(panel.status(), StatusDisplay::connected());
    }

    #[test]
    fn widgets_after_any_close() {
        let (mut panel, _rx) = open_panel();
        panel.on_event(SocketEvent::Closed {
            code: 1006,
            reason: String::new(),
        });

        let w = panel.widgets();
        assert!(w.connect);
        assert!(!w.disconnect);
        assert!(!w.input);
        assert!(!w.send);
        assert!(panel.state().is_absent());
        assert_eq!(panel.status(), StatusDisplay::not_connected());
    }

    #[test]
    fn round_trip_order_preserved() {
        let (mut panel, _rx) = open_panel();
        assert!(panel.send("hello"));
        panel.on_event(SocketEvent::Message("hello".to_string()));

        assert_eq!(
            panel.log().since(2),
            ["Sent: hello", "Received: hello"]
        );
    }

    #[test]
    fn disconnect_while_absent_is_a_noop() {
        let mut panel = PanelController::new(URL);
        panel.disconnect();
        assert!(panel.log().is_empty());
        assert!(panel.state().is_absent());
    }

    #[test]
    fn disconnect_requests_closure() {
        let (mut panel, mut rx) = open_panel();
        panel.disconnect();

        assert_eq!(panel.state(), ConnectionState::Closing);
        assert_eq!(rx.try_recv(), Ok(Outgoing::Close));
        assert_eq!(panel.log().since(2), ["Disconnecting..."]);

        // Second disconnect while closing: nothing happens.
        panel.disconnect();
        assert_eq!(panel.log().len(), 3);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn connect_while_active_is_rejected() {
        let (mut panel, _rx) = open_panel();
        let Err(PanelError::AlreadyActive) = panel.connect() else {
            panic!("second connect must be rejected");
        };
        assert!(panel.state().is_open());
        assert_eq!(panel.log().len(), 2);
    }

    #[test]
    fn error_does_not_transition_state() {
        let (mut panel, _rx) = open_panel();
        panel.on_event(SocketEvent::Error("connection reset".to_string()));

        assert!(panel.state().is_open());
        assert_eq!(panel.status(), StatusDisplay::error());
        assert_eq!(panel.log().since(2), ["Error: connection reset"]);

        // The close that follows every error tears down as usual.
        panel.on_event(SocketEvent::Closed {
            code: 1006,
            reason: String::new(),
        });
        assert!(panel.state().is_absent());
    }

    #[test]
    fn received_payload_is_verbatim() {
        let (mut panel, _rx) = open_panel();
        panel.on_event(SocketEvent::Message("  {\"raw\": 1}  ".to_string()));
        assert_eq!(panel.log().since(2), ["Received:   {\"raw\": 1}  "]);
    }
}
