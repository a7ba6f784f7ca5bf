//! # Introduction
//!
//! Sortty animates classic comparison sorts (bubble, insertion, heap, quick,
//! merge) as a bar chart in the terminal.  Each algorithm is written as a set
//! of resumable frames so that a frame loop can advance it exactly one
//! mutation per rendered frame, without the algorithm knowing about frames.
//!
//! ## Pipeline
//!
//! ```text
//! Input → Controller → Stepper (one Step per tick) → Sequence + Highlight → TUI
//! ```
//!
//! 1. [`sequence`] — the permutation of `1..=N` being sorted.
//! 2. [`engine`] — the step engine: [`engine::Routine`] frames driven by an
//!    [`engine::Coroutine`] that flattens nested calls into one step stream.
//! 3. [`algorithms`] — the five strategies and the [`algorithms::Algorithm`]
//!    selection value.
//! 4. [`audio`] — the cue sink fed at algorithm milestones.
//! 5. [`controller`] — idle/running state machine mapping select, start,
//!    reset and tick onto the engine.
//! 6. [`ui`] — ratatui-based TUI; not part of the stable library API.

pub mod algorithms;
pub mod audio;
pub mod config;
pub mod controller;
pub mod engine;
pub mod logging;
pub mod sequence;
pub mod ui;
