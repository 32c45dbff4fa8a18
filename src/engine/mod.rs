//! The animated sorting engine.
//!
//! A [`Session`] owns the array of bars, the swap delay and the selected algorithm. Calling
//! [`Session::run`] hands the bars to one of the four strategies, which sorts them strictly
//! through the paced [`SortRun::swap`] primitive so that every state the array passes through is
//! observable by a [`View`](crate::view::View) collaborator.
//!
//! # Example
//!
//! ```
//! use sortviz::engine::{Algorithm, Session};
//! use sortviz::view::NullView;
//!
//! let mut session = Session::new(vec![1, 3, 2, 5, 4], 0);
//! session.select(Algorithm::Quick.sorter());
//!
//! tokio::runtime::Builder::new_current_thread()
//!     .enable_time()
//!     .build()
//!     .unwrap()
//!     .block_on(session.run(&mut NullView))
//!     .unwrap();
//!
//! assert_eq!(session.bars(), [1, 2, 3, 4, 5]);
//! ```

mod run;
mod session;
mod sorters;

pub use run::SortRun;
pub use session::{RunError, Session, SpeedHandle};
pub use sorters::heap::HeapSorter;
pub use sorters::insertion::InsertionSorter;
pub use sorters::quick::QuickSorter;
pub use sorters::selection::SelectionSorter;

use std::fmt;

use futures::future::LocalBoxFuture;

/// A sorting algorithm animated by the engine must implement the trait `Sorter`.
///
/// The strategy receives mutable access to the array only through the [`SortRun`] handed to it:
/// reads go through [`SortRun::value`] and the single mutator is [`SortRun::swap`], which is also
/// the strategy's only suspension point. The returned future is boxed locally because the
/// recursive strategies (quick and heap sort) re-enter themselves while borrowing the run.
pub trait Sorter<T>
where
    T: Ord,
{
    /// Drives the bars of `run` to a sorted state through a finite sequence of paced swaps.
    fn sort<'a, 's>(&self, run: &'a mut SortRun<'s, T>) -> LocalBoxFuture<'a, ()>
    where
        's: 'a;
}

/// One of the four selectable sorting algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Algorithm {
    /// Stable, quadratic, and the fastest of the four on nearly sorted input.
    Insertion,
    /// Always performs exactly one swap per position, no-ops included.
    Selection,
    /// Lomuto partitioning around the last element of each range.
    Quick,
    /// In-place max-heap build followed by repeated root extraction.
    Heap,
}

impl Algorithm {
    /// Returns the boxed strategy this selection names.
    pub fn sorter<T: Ord>(self) -> Box<dyn Sorter<T>> {
        match self {
            Algorithm::Insertion => Box::new(InsertionSorter),
            Algorithm::Selection => Box::new(SelectionSorter),
            Algorithm::Quick => Box::new(QuickSorter),
            Algorithm::Heap => Box::new(HeapSorter),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Quick => "Quick Sort",
            Algorithm::Heap => "Heap Sort",
        };
        f.write_str(name)
    }
}
