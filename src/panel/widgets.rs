//! Widget mirror and status display.
//!
//! The panel exposes five widgets: a status label, connect and disconnect
//! buttons, a message input, and a send button. Their enabled state is a
//! pure function of [`ConnectionState`], so the mirror can never drift from
//! the Connection it reflects.

use super::state::ConnectionState;

/// Enabled/disabled state of the four interactive widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetState {
    /// Connect button.
    pub connect: bool,
    /// Disconnect button.
    pub disconnect: bool,
    /// Message input field.
    pub input: bool,
    /// Send button (and the Enter-to-send shortcut).
    pub send: bool,
}

impl WidgetState {
    /// Derives the widget mirror for a connection state.
    ///
    /// Connect is enabled only while the Connection is absent; input and
    /// send require an open Connection; disconnect is available as soon as
    /// a socket exists so a hung handshake can be abandoned.
    #[must_use]
    pub const fn for_state(state: ConnectionState) -> Self {
        match state {
            ConnectionState::Absent => Self {
                connect: true,
                disconnect: false,
                input: false,
                send: false,
            },
            ConnectionState::Connecting => Self {
                connect: false,
                disconnect: true,
                input: false,
                send: false,
            },
            ConnectionState::Open => Self {
                connect: false,
                disconnect: true,
                input: true,
                send: true,
            },
            ConnectionState::Closing => Self {
                connect: false,
                disconnect: false,
                input: false,
                send: false,
            },
        }
    }
}

impl Default for WidgetState {
    fn default() -> Self {
        Self::for_state(ConnectionState::Absent)
    }
}

/// Color of the status label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusColor {
    /// Healthy connection.
    Green,
    /// Disconnected or failed.
    Red,
}

impl StatusColor {
    /// ANSI escape sequence for this color.
    const fn ansi(self) -> &'static str {
        match self {
            Self::Green => "\x1b[32m",
            Self::Red => "\x1b[31m",
        }
    }
}

/// The status label: text plus color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusDisplay {
    /// Status text shown to the user.
    pub text: &'static str,
    /// Display color.
    pub color: StatusColor,
}

impl StatusDisplay {
    /// Status before any connection and after every close.
    #[must_use]
    pub const fn not_connected() -> Self {
        Self {
            text: "Not Connected",
            color: StatusColor::Red,
        }
    }

    /// Status set by the open reaction.
    #[must_use]
    pub const fn connected() -> Self {
        Self {
            text: "Connected",
            color: StatusColor::Green,
        }
    }

    /// Status set by the error reaction. Cosmetic only: the state machine
    /// transitions on close, never on error.
    #[must_use]
    pub const fn error() -> Self {
        Self {
            text: "Connection Error",
            color: StatusColor::Red,
        }
    }

    /// Renders the label, with ANSI colors when `color` is `true`.
    #[must_use]
    pub fn render(&self, color: bool) -> String {
        if color {
            format!("{}{}\x1b[0m", self.color.ansi(), self.text)
        } else {
            self.text.to_string()
        }
    }
}

impl Default for StatusDisplay {
    fn default() -> Self {
        Self::not_connected()
    }
}
