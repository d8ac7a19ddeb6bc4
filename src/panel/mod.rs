//! Connection panel: state machine, widget mirror, traffic log, controller.
//!
//! The panel owns at most one active Connection at a time. Control flow is
//! entirely reactive: user actions and socket events invoke controller
//! methods that mutate the shared state and the widget mirror.

pub mod controller;
pub mod log;
pub mod state;
pub mod widgets;

pub use controller::PanelController;
pub use log::TrafficLog;
pub use state::ConnectionState;
pub use widgets::{StatusDisplay, WidgetState};
