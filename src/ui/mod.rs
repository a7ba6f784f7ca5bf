//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four layers:
//!
//! - **[`app`]** — event loop, frame pacing, key and mouse handling
//! - **[`panes`]** — stateless render functions for the bar chart, algorithm
//!   menu, control buttons, run summary and status bar
//! - **[`hit`]** — rectangles captured at render time so pointer presses can
//!   be resolved into controller commands
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a
//! [`Controller`] and call [`App::run`] to start the event loop.
//!
//! [`Controller`]: crate::controller::Controller
//! [`App::run`]: app::App::run

pub mod app;
pub mod hit;
pub mod panes;
pub mod theme;

pub use app::App;
