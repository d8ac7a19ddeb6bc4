//! # ws-panel
//!
//! Interactive terminal panel for driving a single WebSocket client
//! connection. The user connects to a configured endpoint, relays typed
//! text messages verbatim, and watches a scrolling traffic log of sent and
//! received lines plus connection lifecycle events.
//!
//! At most one connection exists at a time. There is no reconnection, no
//! message framing beyond raw text, and no persisted state — the crate is
//! a thin, explicit state machine around the socket lifecycle.
//!
//! ## Architecture
//!
//! ```text
//! stdin lines ──▶ terminal run loop ◀── SocketEvent channel
//!                      │                       ▲
//!                      ▼                       │
//!               PanelController           socket task
//!               (FSM + widgets            (tokio-tungstenite
//!                + traffic log) ─Outgoing─▶ read/write loop)
//! ```

pub mod config;
pub mod error;
pub mod panel;
pub mod socket;
pub mod terminal;
