//! Panel error types.
//!
//! [`PanelError`] is the central error type for the panel. Failures are
//! surfaced to the user through the traffic log and status display; nothing
//! here is fatal to the process — every error leaves the controller ready
//! to accept a fresh connect action.

/// Errors raised by panel operations.
///
/// Deliberately small: sends and disconnects without a live Connection are
/// silent no-ops by design, so only the connect path can fail.
#[derive(Debug, thiserror::Error)]
pub enum PanelError {
    /// Connect requested while a Connection already exists. The live
    /// Connection is left untouched; the original behavior of silently
    /// leaking the prior socket is not preserved.
    #[error("a connection is already active or pending")]
    AlreadyActive,
}
