//! Line-oriented terminal frontend.
//!
//! The UI boundary of the panel. Stdin lines are parsed into user actions,
//! socket events arrive over a channel, and one `tokio::select!` loop
//! serializes both onto the controller — no two reactions ever execute
//! concurrently. Stdout carries the status line and the traffic log; the
//! log region only ever appends.

use tokio::io::{AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tracing::warn;

use crate::config::PanelConfig;
use crate::panel::{PanelController, StatusDisplay};
use crate::socket::{self, SocketEvent};

/// User action parsed from one stdin line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Action {
    /// `/connect` — initiate a connection.
    Connect,
    /// `/disconnect` — terminate the connection.
    Disconnect,
    /// A plain line: send it as a message (the Enter-to-send shortcut).
    Send(String),
    /// `/help` or an unrecognized `/command`.
    Help,
    /// `/quit` or `/exit`.
    Quit,
}

impl Action {
    fn parse(line: &str) -> Self {
        match line.trim_end_matches(['\r']) {
            "/connect" => Self::Connect,
            "/disconnect" => Self::Disconnect,
            "/quit" | "/exit" => Self::Quit,
            other if other.starts_with('/') => Self::Help,
            other => Self::Send(other.to_string()),
        }
    }
}

/// Incremental renderer for the status line and traffic log.
struct View {
    color: bool,
    printed: usize,
    status: StatusDisplay,
}

impl View {
    fn new(color: bool) -> Self {
        Self {
            color,
            printed: 0,
            status: StatusDisplay::default(),
        }
    }

    /// Writes log lines appended since the last render, plus the status
    /// line whenever it changed.
    async fn render<W>(&mut self, panel: &PanelController, out: &mut W) -> std::io::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        let mut buf = String::new();
        for line in panel.log().since(self.printed) {
            buf.push_str(line);
            buf.push('\n');
        }
        self.printed = panel.log().len();

        if panel.status() != self.status {
            self.status = panel.status();
            buf.push_str("[status] ");
            buf.push_str(&self.status.render(self.color));
            buf.push('\n');
        }

        if !buf.is_empty() {
            out.write_all(buf.as_bytes()).await?;
            out.flush().await?;
        }
        Ok(())
    }

    async fn print_intro<W>(&self, url: &str, out: &mut W) -> std::io::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        let intro = format!(
            "ws-panel — endpoint {url}\n\
             commands: /connect  /disconnect  /quit  (anything else is sent as a message)\n\
             [status] {}\n",
            self.status.render(self.color)
        );
        out.write_all(intro.as_bytes()).await?;
        out.flush().await
    }

    async fn print_help<W>(&self, out: &mut W) -> std::io::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        out.write_all(
            b"commands: /connect  /disconnect  /quit  (anything else is sent as a message)\n",
        )
        .await?;
        out.flush().await
    }
}

/// Runs the panel until the user quits or stdin reaches end of file.
///
/// # Errors
///
/// Returns an error when reading stdin or writing stdout fails. Socket
/// failures never end the loop; they surface in the traffic log and leave
/// the panel ready for a fresh connect.
pub async fn run(config: PanelConfig) -> anyhow::Result<()> {
    let mut panel = PanelController::new(config.url.clone());
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<SocketEvent>();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    let mut view = View::new(config.color);
    view.print_intro(panel.url(), &mut stdout).await?;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match Action::parse(&line) {
                    Action::Connect => match panel.connect() {
                        Ok(()) => {
                            let handle = socket::spawn(config.url.clone(), event_tx.clone());
                            panel.attach(handle);
                        }
                        Err(err) => warn!(%err, "connect ignored"),
                    },
                    Action::Disconnect => panel.disconnect(),
                    Action::Send(text) => {
                        // Enter sends only while the send widget is enabled.
                        if panel.widgets().send {
                            panel.send(&text);
                        }
                    }
                    Action::Help => view.print_help(&mut stdout).await?,
                    Action::Quit => break,
                }
            }
            event = event_rx.recv() => {
                if let Some(event) = event {
                    panel.on_event(event);
                }
            }
        }
        view.render(&panel, &mut stdout).await?;
    }

    Ok(())
}
