//! Audio cues
//!
//! Algorithms call [`CueSink::play_cue`] at their milestones (end of a bubble
//! pass, an insertion, a heap extraction, a partition, a merge rewrite).  The
//! sink is built once at startup and handed to the controller.
//!
//! Playback is fire-and-forget: no sink may block the frame loop.

use std::io::{self, Write};
use std::time::{Duration, Instant};

/// Receiver of milestone cues
pub trait CueSink {
    fn play_cue(&mut self);
}

impl<T: CueSink + ?Sized> CueSink for Box<T> {
    fn play_cue(&mut self) {
        (**self).play_cue();
    }
}

impl<T: CueSink + ?Sized> CueSink for &mut T {
    fn play_cue(&mut self) {
        (**self).play_cue();
    }
}

/// Drops every cue
#[derive(Debug, Clone, Copy, Default)]
pub struct Muted;

impl CueSink for Muted {
    fn play_cue(&mut self) {}
}

/// Counts cues without playing them
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CueTally {
    pub count: usize,
}

impl CueSink for CueTally {
    fn play_cue(&mut self) {
        self.count += 1;
    }
}

/// Forwards cues to another sink while counting them
pub struct CueCounter<'a> {
    inner: &'a mut dyn CueSink,
    count: usize,
}

impl<'a> CueCounter<'a> {
    pub fn new(inner: &'a mut dyn CueSink) -> Self {
        CueCounter { inner, count: 0 }
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

impl CueSink for CueCounter<'_> {
    fn play_cue(&mut self) {
        self.count += 1;
        self.inner.play_cue();
    }
}

/// Rings the terminal bell
///
/// Bells closer together than `min_gap` are swallowed, otherwise a fast
/// bubble sort turns into one continuous buzz.
pub struct TerminalBell<W: Write> {
    out: W,
    min_gap: Duration,
    last_ring: Option<Instant>,
}

impl TerminalBell<io::Stdout> {
    pub fn stdout(min_gap: Duration) -> Self {
        TerminalBell::new(io::stdout(), min_gap)
    }
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W, min_gap: Duration) -> Self {
        TerminalBell {
            out,
            min_gap,
            last_ring: None,
        }
    }

    fn ring(&mut self) -> io::Result<()> {
        self.out.write_all(b"\x07")?;
        self.out.flush()
    }
}

impl<W: Write> CueSink for TerminalBell<W> {
    fn play_cue(&mut self) {
        if self
            .last_ring
            .is_some_and(|last| last.elapsed() < self.min_gap)
        {
            return;
        }
        self.last_ring = Some(Instant::now());
        if let Err(err) = self.ring() {
            tracing::warn!(error = %err, "failed to ring terminal bell");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_forwards_and_counts() {
        let mut tally = CueTally::default();
        {
            let mut counter = CueCounter::new(&mut tally);
            counter.play_cue();
            counter.play_cue();
            assert_eq!(counter.count(), 2);
        }
        assert_eq!(tally.count, 2);
    }

    #[test]
    fn test_bell_respects_min_gap() {
        let mut out = Vec::new();
        {
            let mut bell = TerminalBell::new(&mut out, Duration::from_secs(60));
            bell.play_cue();
            bell.play_cue();
            bell.play_cue();
        }
        assert_eq!(out, b"\x07");
    }

    #[test]
    fn test_bell_without_gap_rings_every_cue() {
        let mut out = Vec::new();
        {
            let mut bell = TerminalBell::new(&mut out, Duration::ZERO);
            bell.play_cue();
            bell.play_cue();
        }
        assert_eq!(out, b"\x07\x07");
    }
}
