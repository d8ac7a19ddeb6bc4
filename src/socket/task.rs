//! Socket task: connect, then run the read/write loop.
//!
//! One task per Connection. The task reports everything it observes as
//! [`SocketEvent`]s and ends after emitting exactly one
//! [`SocketEvent::Closed`], on every exit path. There is no timeout
//! handling: a handshake that never resolves keeps the Connection pending
//! until the user abandons it.

use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::tungstenite::protocol::CloseFrame;
use tokio_tungstenite::tungstenite::protocol::frame::coding::CloseCode;
use tracing::debug;

use super::events::{Outgoing, SocketEvent, SocketHandle};

/// Close code reported when the peer vanished without a close frame.
const ABNORMAL_CLOSURE: u16 = 1006;

/// Close code reported when the close frame carried no code.
const NO_STATUS_RECEIVED: u16 = 1005;

/// Spawns the socket task for one Connection attempt and returns its
/// outbound handle.
///
/// Events flow back through `events`; the task ends once it has emitted
/// its `Closed` event or once the event channel is gone.
#[must_use]
pub fn spawn(url: String, events: mpsc::UnboundedSender<SocketEvent>) -> SocketHandle {
    let (outbound_tx, outbound_rx) = mpsc::unbounded_channel();
    tokio::spawn(run_socket(url, outbound_rx, events));
    SocketHandle::new(outbound_tx)
}

/// Connects and runs the read/write loop until the Connection ends.
async fn run_socket(
    url: String,
    mut outbound: mpsc::UnboundedReceiver<Outgoing>,
    events: mpsc::UnboundedSender<SocketEvent>,
) {
    let stream = match connect_async(url.as_str()).await {
        Ok((stream, _response)) => stream,
        Err(err) => {
            // A failed connect surfaces as error-then-close, the same
            // order a browser reports it.
            let _ = events.send(SocketEvent::Error(err.to_string()));
            let _ = events.send(SocketEvent::Closed {
                code: ABNORMAL_CLOSURE,
                reason: String::new(),
            });
            return;
        }
    };
    let _ = events.send(SocketEvent::Opened);

    let (mut ws_tx, mut ws_rx) = stream.split();
    // Once the outbound channel is drained and closed, stop polling it and
    // wait for the peer's close frame.
    let mut outbound_open = true;

    loop {
        tokio::select! {
            request = outbound.recv(), if outbound_open => match request {
                Some(Outgoing::Text(text)) => {
                    if let Err(err) = ws_tx.send(Message::text(text)).await {
                        let _ = events.send(SocketEvent::Error(err.to_string()));
                        let _ = events.send(SocketEvent::Closed {
                            code: ABNORMAL_CLOSURE,
                            reason: String::new(),
                        });
                        return;
                    }
                }
                Some(Outgoing::Close) | None => {
                    // Handle dropped counts as a close request. Keep
                    // reading so the reported code is the peer's.
                    let frame = CloseFrame {
                        code: CloseCode::Normal,
                        reason: "".into(),
                    };
                    let _ = ws_tx.send(Message::Close(Some(frame))).await;
                    outbound_open = false;
                }
            },
            message = ws_rx.next() => match message {
                Some(Ok(Message::Text(text))) => {
                    let _ = events.send(SocketEvent::Message(text.to_string()));
                }
                Some(Ok(Message::Close(frame))) => {
                    let (code, reason) = match frame {
                        Some(frame) => (u16::from(frame.code), frame.reason.to_string()),
                        None => (NO_STATUS_RECEIVED, String::new()),
                    };
                    let _ = events.send(SocketEvent::Closed { code, reason });
                    debug!(code, "socket closed by peer");
                    return;
                }
                // Binary payloads are outside this panel's contract;
                // ping/pong is answered by tungstenite itself.
                Some(Ok(_)) => {}
                Some(Err(err)) => {
                    let _ = events.send(SocketEvent::Error(err.to_string()));
                    let _ = events.send(SocketEvent::Closed {
                        code: ABNORMAL_CLOSURE,
                        reason: String::new(),
                    });
                    return;
                }
                None => {
                    let _ = events.send(SocketEvent::Closed {
                        code: ABNORMAL_CLOSURE,
                        reason: String::new(),
                    });
                    return;
                }
            },
        }
    }
}
