use std::cell::Cell;
use std::error::Error;
use std::fmt;
use std::rc::Rc;

use rand::Rng;

use super::run::SortRun;
use super::Sorter;
use crate::view::View;

/// Why a [`Session::run`] or [`Session::shuffle`] request was refused.
///
/// Rejections are reported synchronously, before any swap happens; a refused request leaves the
/// bars untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunError {
    /// Raised when the bars are already in non-decreasing order, so there is nothing to animate.
    AlreadySorted,

    /// Raised when no sorting algorithm has been selected on the session.
    NoSorterSelected,

    /// Raised when a run or shuffle is already animating; only one step sequence may be active
    /// at a time.
    Busy,
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunError::AlreadySorted => f.write_str("array already sorted"),
            RunError::NoSorterSelected => f.write_str("no algorithm selected"),
            RunError::Busy => f.write_str("a run is already in progress"),
        }
    }
}

impl Error for RunError {}

/// A cloneable handle onto a session's swap delay.
///
/// The delay may be retuned at any moment, even while a run is animating; the new value lands on
/// the next swap, never retroactively on one already waiting.
#[derive(Clone, Debug)]
pub struct SpeedHandle(Rc<Cell<u64>>);

impl SpeedHandle {
    /// Sets the delay, in milliseconds, inserted after every swap.
    pub fn set(&self, millis: u64) {
        self.0.set(millis);
    }

    /// The delay the next swap will sample.
    pub fn get(&self) -> u64 {
        self.0.get()
    }
}

/// The run controller: owns the bars, the swap delay and the selected algorithm, and admits at
/// most one animated step sequence at a time.
pub struct Session<T> {
    bars: Vec<T>,
    speed: Rc<Cell<u64>>,
    sorter: Option<Box<dyn Sorter<T>>>,
    busy: bool,
}

impl<T> Session<T>
where
    T: Ord,
{
    /// Creates a session over `bars` with a swap delay of `speed` milliseconds.
    ///
    /// No algorithm is selected yet; [`run`](Session::run) rejects until one is.
    pub fn new(bars: Vec<T>, speed: u64) -> Self {
        Session {
            bars,
            speed: Rc::new(Cell::new(speed)),
            sorter: None,
            busy: false,
        }
    }

    pub fn bars(&self) -> &[T] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Consumes the session, handing back the bars in their current order.
    pub fn into_bars(self) -> Vec<T> {
        self.bars
    }

    /// Selects the algorithm the next [`run`](Session::run) will animate, replacing any previous
    /// selection.
    pub fn select(&mut self, sorter: Box<dyn Sorter<T>>) {
        self.sorter = Some(sorter);
    }

    /// A handle for retuning the swap delay, usable even mid-run.
    pub fn speed_handle(&self) -> SpeedHandle {
        SpeedHandle(Rc::clone(&self.speed))
    }

    /// Whether the bars are currently in non-decreasing order.
    pub fn is_sorted(&self) -> bool {
        self.bars.windows(2).all(|pair| pair[0] <= pair[1])
    }

    /// Animates the selected algorithm over the bars, driving it to completion.
    ///
    /// Rejects without touching the bars if they are already sorted, if no algorithm is selected,
    /// or if another run or shuffle is active. The sorted check deliberately comes first: a
    /// sorted array with no selection still reports [`RunError::AlreadySorted`]. The view hears
    /// [`run_started`](View::run_started), one [`swap`](View::swap) per paced exchange, and
    /// finally [`run_finished`](View::run_finished).
    pub async fn run(&mut self, view: &mut dyn View<T>) -> Result<(), RunError> {
        if self.busy {
            return reject(view, RunError::Busy);
        }
        if self.is_sorted() {
            return reject(view, RunError::AlreadySorted);
        }
        if self.sorter.is_none() {
            return reject(view, RunError::NoSorterSelected);
        }

        self.busy = true;
        view.run_started();

        {
            let Session {
                bars,
                speed,
                sorter,
                ..
            } = &mut *self;

            if let Some(sorter) = sorter.as_deref() {
                let mut run = SortRun::new(bars, Rc::clone(speed), view);
                sorter.sort(&mut run).await;
            }
        }

        self.busy = false;
        view.run_finished();
        Ok(())
    }

    /// Animates a shuffle: each index is swapped once with a uniformly random target, possibly
    /// itself, paced exactly like a sort swap.
    ///
    /// The resulting permutation is not uniform (the targets are independent draws, not a
    /// Fisher-Yates walk), which is accepted as cosmetic for an animation. Shares the busy
    /// discipline of [`run`](Session::run).
    pub async fn shuffle(&mut self, view: &mut dyn View<T>) -> Result<(), RunError> {
        if self.busy {
            return reject(view, RunError::Busy);
        }

        self.busy = true;
        view.run_started();

        {
            let Session { bars, speed, .. } = &mut *self;
            let n = bars.len();
            let mut run = SortRun::new(bars, Rc::clone(speed), view);
            let mut rng = rand::thread_rng();

            for i in 0..n {
                let target = rng.gen_range(0..n);
                run.swap(i, target).await;
            }
        }

        self.busy = false;
        view.run_finished();
        Ok(())
    }
}

fn reject<T>(view: &mut dyn View<T>, error: RunError) -> Result<(), RunError> {
    view.run_rejected(&error);
    Err(error)
}
