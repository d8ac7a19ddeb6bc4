//! Socket transport: the tokio task that owns the live WebSocket stream.
//!
//! The panel never touches the stream directly. It holds a [`SocketHandle`]
//! for outbound traffic and observes the socket only through the
//! [`SocketEvent`] channel, which keeps all state transitions on the panel's
//! single event loop.

pub mod events;
pub mod task;

pub use events::{Outgoing, SocketEvent, SocketHandle};
pub use task::spawn;
