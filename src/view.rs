//! The rendering boundary of the engine, and a terminal implementation of it.
//!
//! The engine never draws anything itself. It talks to a [`View`]: one notification per paced
//! swap, with the bars already exchanged, plus start/finish/reject signals a UI can use to toggle
//! its triggers. [`TermView`] renders the bars as rows in the terminal, repainting the frame in
//! place after every swap; [`NullView`] discards everything, for headless runs and tests.

use std::io::{self, Write};

use colored::Colorize;

use crate::engine::RunError;

/// A collaborator notified of everything a [`Session`](crate::engine::Session) animates.
pub trait View<T> {
    /// Called once per completed swap, after its delay has elapsed. The exchange of `i` and `j`
    /// is already reflected in `bars`.
    fn swap(&mut self, bars: &[T], i: usize, j: usize);

    /// A run or shuffle has claimed the session; triggers that would start a competing one
    /// should be withdrawn.
    fn run_started(&mut self) {}

    /// The active run or shuffle finished; triggers may be restored.
    fn run_finished(&mut self) {}

    /// A run or shuffle request was refused before any swap happened.
    fn run_rejected(&mut self, _reason: &RunError) {}
}

/// A view that ignores every notification.
pub struct NullView;

impl<T> View<T> for NullView {
    fn swap(&mut self, _bars: &[T], _i: usize, _j: usize) {}
}

/// Renders each bar as a horizontal row of blocks, scaled to a fixed column width, and
/// repaints the whole frame in place on every swap with the freshly swapped pair highlighted.
pub struct TermView {
    width: usize,
    painted: bool,
}

impl TermView {
    /// A view whose longest bar spans `width` terminal columns.
    pub fn new(width: usize) -> Self {
        TermView {
            width,
            painted: false,
        }
    }

    /// Paints the current state of the bars with nothing highlighted. Call once before running
    /// so the animation has a first frame to repaint over.
    pub fn draw(&mut self, bars: &[u32]) {
        self.paint(bars, None);
    }

    fn paint(&mut self, bars: &[u32], swapped: Option<(usize, usize)>) {
        let mut out = io::stdout().lock();

        if self.painted {
            // Back up over the previous frame so the new one lands on top of it.
            let _ = write!(out, "\x1b[{}A", bars.len());
        }

        let tallest = bars.iter().copied().max().unwrap_or(0).max(1) as usize;

        for (index, &height) in bars.iter().enumerate() {
            let blocks = height as usize * self.width / tallest;
            let bar = "\u{2588}".repeat(blocks);
            let highlighted = matches!(swapped, Some((i, j)) if index == i || index == j);

            let bar = if highlighted {
                bar.cyan().bold().to_string()
            } else {
                bar
            };

            // Clear to end of line so a shrinking bar leaves no residue.
            let _ = writeln!(out, "{bar}\x1b[K");
        }

        let _ = out.flush();
        self.painted = true;
    }
}

impl Default for TermView {
    fn default() -> Self {
        TermView::new(60)
    }
}

impl View<u32> for TermView {
    fn swap(&mut self, bars: &[u32], i: usize, j: usize) {
        self.paint(bars, Some((i, j)));
    }

    fn run_rejected(&mut self, reason: &RunError) {
        eprintln!("{} {reason}", "==>".red().bold());
    }
}
