use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use crate::view::View;

/// One strategy's borrowed window onto the bars, plus the swap primitive.
///
/// A `SortRun` lives for exactly one run. The array length is fixed for its whole lifetime, and
/// indexing past it is a programmer error that panics rather than a recoverable condition:
/// strategies must only address indices they derived from [`len`](SortRun::len).
pub struct SortRun<'a, T> {
    bars: &'a mut [T],
    speed: Rc<Cell<u64>>,
    view: &'a mut dyn View<T>,
}

impl<'a, T> SortRun<'a, T> {
    pub(crate) fn new(bars: &'a mut [T], speed: Rc<Cell<u64>>, view: &'a mut dyn View<T>) -> Self {
        SortRun { bars, speed, view }
    }

    /// Number of bars under sort. Never changes mid-run.
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// The bar at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn value(&self, index: usize) -> &T {
        &self.bars[index]
    }

    /// Exchanges the bars at `i` and `j`, waits out the configured delay, then notifies the view.
    ///
    /// The exchange itself is synchronous, so the mutation is visible to any reader before the
    /// delay starts; the view is only told about it once the delay has elapsed, which is what
    /// spaces consecutive swaps far enough apart to be watchable. The delay is sampled on every
    /// call, so retuning the speed mid-run takes effect on the next swap.
    ///
    /// `i == j` is legal and still incurs the full delay and notification, which keeps the
    /// strategies free to let their index arithmetic coincide.
    pub async fn swap(&mut self, i: usize, j: usize) {
        self.bars.swap(i, j);
        tokio::time::sleep(Duration::from_millis(self.speed.get())).await;
        self.view.swap(self.bars, i, j);
    }
}
