use futures::future::LocalBoxFuture;
use futures::FutureExt;

use crate::engine::{SortRun, Sorter};

/// An animated implementation of [Quick Sort](https://en.wikipedia.org/wiki/Quicksort)
///
/// # Explanation
///
/// Recursive quicksort with a [Lomuto
/// partition](https://en.wikipedia.org/wiki/Quicksort#Lomuto_partition_scheme): the last element
/// of each range is the pivot, a boundary index sweeps everything smaller than the pivot to the
/// left through paced swaps, and one final swap drops the pivot onto the boundary.
///
/// The pivot is never randomized, so already sorted and reverse sorted input hit the quadratic
/// worst case. That is accepted here: watching the degenerate partitions crawl is half the point
/// of animating the algorithm.
///
/// # Usage
///
/// ```
/// use sortviz::engine::{Algorithm, Session};
/// use sortviz::view::NullView;
///
/// let mut session = Session::new(vec![5, 4, 3, 2, 1], 0);
/// session.select(Algorithm::Quick.sorter());
///
/// tokio::runtime::Builder::new_current_thread()
///     .enable_time()
///     .build()
///     .unwrap()
///     .block_on(session.run(&mut NullView))
///     .unwrap();
///
/// assert_eq!(session.bars(), [1, 2, 3, 4, 5]);
/// ```
pub struct QuickSorter;

impl<T> Sorter<T> for QuickSorter
where
    T: Ord,
{
    fn sort<'a, 's>(&self, run: &'a mut SortRun<'s, T>) -> LocalBoxFuture<'a, ()>
    where
        's: 'a,
    {
        async move {
            let n = run.len();
            if n > 1 {
                sort_range(run, 0, n - 1).await;
            }
        }
        .boxed_local()
    }
}

fn sort_range<'a, T: Ord>(
    run: &'a mut SortRun<'_, T>,
    lower: usize,
    upper: usize,
) -> LocalBoxFuture<'a, ()> {
    async move {
        if lower < upper {
            let pivot = partition(run, lower, upper).await;

            // The left range is empty when the pivot landed on `lower`; guarded separately
            // because `pivot` is unsigned.
            if pivot > lower {
                sort_range(run, lower, pivot - 1).await;
            }
            sort_range(run, pivot + 1, upper).await;
        }
    }
    .boxed_local()
}

/// Partitions `[lower, upper]` around the value at `upper` and returns the pivot's final index.
///
/// The pivot stays put at `upper` for the whole scan (every swap the scan performs is strictly
/// below it), so comparing against `run.value(upper)` is comparing against the pivot.
async fn partition<T: Ord>(run: &mut SortRun<'_, T>, lower: usize, upper: usize) -> usize {
    let mut i = lower;

    for j in lower..=upper {
        if run.value(j) < run.value(upper) {
            run.swap(i, j).await;
            i += 1;
        }
    }

    run.swap(i, upper).await;
    i
}
