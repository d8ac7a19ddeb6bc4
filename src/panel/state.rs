//! Connection lifecycle finite-state machine.
//!
//! The Connection is either absent (no socket) or backed by exactly one
//! live socket handle, moving through:
//!
//! ```text
//! Absent ──connect──▶ Connecting ──open──▶ Open
//!    ▲                    │                  │
//!    │                disconnect         disconnect
//!    │                    ▼                  ▼
//!    └─────close────── Closing ◀─────────────┘
//! ```
//!
//! Transitions are total: events that do not apply in the current state
//! leave it unchanged (or are rejected where the caller needs to know).
//! Every close event, graceful or abnormal, converges to [`Absent`].
//!
//! [`Absent`]: ConnectionState::Absent

/// Logical state of the single Connection tracked by the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionState {
    /// No socket exists.
    #[default]
    Absent,
    /// A socket exists; the handshake has neither completed nor failed.
    Connecting,
    /// Handshake complete; ready for sending and receiving.
    Open,
    /// Closure requested; waiting for the close event to land.
    Closing,
}

impl ConnectionState {
    /// Returns `true` when no Connection exists.
    #[must_use]
    pub const fn is_absent(self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns `true` when the Connection is ready for traffic.
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    /// Transition for a user connect action.
    ///
    /// Only valid from [`Absent`](Self::Absent); returns `None` otherwise
    /// so the caller can reject the action instead of leaking the live
    /// Connection.
    #[must_use]
    pub const fn on_connect(self) -> Option<Self> {
        match self {
            Self::Absent => Some(Self::Connecting),
            Self::Connecting | Self::Open | Self::Closing => None,
        }
    }

    /// Transition for the socket open event.
    ///
    /// A stale open event (state not [`Connecting`](Self::Connecting))
    /// leaves the state unchanged.
    #[must_use]
    pub const fn on_open(self) -> Self {
        match self {
            Self::Connecting => Self::Open,
            other => other,
        }
    }

    /// Transition for a user disconnect action.
    ///
    /// Valid while a Connection is pending or open; `None` when absent or
    /// already closing (the action is a no-op).
    #[must_use]
    pub const fn on_disconnect(self) -> Option<Self> {
        match self {
            Self::Connecting | Self::Open => Some(Self::Closing),
            Self::Absent | Self::Closing => None,
        }
    }

    /// Transition for the socket close event. All states converge to
    /// [`Absent`](Self::Absent).
    #[must_use]
    pub const fn on_close(self) -> Self {
        match self {
            Self::Absent | Self::Connecting | Self::Open | Self::Closing => Self::Absent,
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn connect_only_from_absent() {
        assert_eq!(
            ConnectionState::Absent.on_connect(),
            Some(ConnectionState::Connecting)
        );
        assert_eq!(ConnectionState::Connecting.on_connect(), None);
        assert_eq!(ConnectionState::Open.on_connect(), None);
        assert_eq!(ConnectionState::Closing.on_connect(), None);
    }

    #[test]
    fn open_only_from_connecting() {
        assert_eq!(ConnectionState::Connecting.on_open(), ConnectionState::Open);
        assert_eq!(ConnectionState::Absent.on_open(), ConnectionState::Absent);
        assert_eq!(ConnectionState::Closing.on_open(), ConnectionState::Closing);
    }

    #[test]
    fn disconnect_from_pending_or_open() {
        assert_eq!(
            ConnectionState::Connecting.on_disconnect(),
            Some(ConnectionState::Closing)
        );
        assert_eq!(
            ConnectionState::Open.on_disconnect(),
            Some(ConnectionState::Closing)
        );
        assert_eq!(ConnectionState::Absent.on_disconnect(), None);
        assert_eq!(ConnectionState::Closing.on_disconnect(), None);
    }

    #[test]
    fn every_close_converges_to_absent() {
        for state in [
            ConnectionState::Absent,
            ConnectionState::Connecting,
            ConnectionState::Open,
            ConnectionState::Closing,
        ] {
            assert_eq!(state.on_close(), ConnectionState::Absent);
        }
    }

    #[test]
    fn full_lifecycle() {
        let mut state = ConnectionState::default();
        assert!(state.is_absent());

        state = state.on_connect().unwrap_or(state);
        assert_eq!(state, ConnectionState::Connecting);

        state = state.on_open();
        assert!(state.is_open());

        state = state.on_disconnect().unwrap_or(state);
        assert_eq!(state, ConnectionState::Closing);

        state = state.on_close();
        assert!(state.is_absent());
    }
}
