use futures::future::LocalBoxFuture;
use futures::FutureExt;

use crate::engine::{SortRun, Sorter};

/// An animated implementation of [Heap Sort](https://en.wikipedia.org/wiki/Heapsort)
///
/// # Explanation
///
/// Two phases, both animated. First the array is reorganized in place into a max-heap by sifting
/// down every internal node, from the last one up to the root. Then the maximum is repeatedly
/// pulled off: the root is swapped with the last unsorted index and sifted back down over the
/// shrinking unsorted range, so the sorted suffix grows from the right.
///
/// When sifting, the right child is considered before the left, and a child only displaces the
/// current candidate when strictly greater. Among equal children that favors the left one, since
/// it is checked last.
///
/// # Usage
///
/// ```
/// use sortviz::engine::{Algorithm, Session};
/// use sortviz::view::NullView;
///
/// let mut session = Session::new(vec![4, 10, 3, 5, 1], 0);
/// session.select(Algorithm::Heap.sorter());
///
/// tokio::runtime::Builder::new_current_thread()
///     .enable_time()
///     .build()
///     .unwrap()
///     .block_on(session.run(&mut NullView))
///     .unwrap();
///
/// assert_eq!(session.bars(), [1, 3, 4, 5, 10]);
/// ```
pub struct HeapSorter;

impl<T> Sorter<T> for HeapSorter
where
    T: Ord,
{
    fn sort<'a, 's>(&self, run: &'a mut SortRun<'s, T>) -> LocalBoxFuture<'a, ()>
    where
        's: 'a,
    {
        async move {
            let n = run.len();
            build_heap(run).await;

            for i in (1..n).rev() {
                run.swap(0, i).await;
                sift_down(run, 0, i).await;
            }
        }
        .boxed_local()
    }
}

/// Heapifies every internal node, deepest first, leaving `run` a valid max-heap.
async fn build_heap<T: Ord>(run: &mut SortRun<'_, T>) {
    let n = run.len();
    for root in (0..n / 2).rev() {
        sift_down(run, root, n).await;
    }
}

/// Restores the heap property under `root`, treating indices at or past `cutoff` as outside the
/// heap.
fn sift_down<'a, T: Ord>(
    run: &'a mut SortRun<'_, T>,
    root: usize,
    cutoff: usize,
) -> LocalBoxFuture<'a, ()> {
    async move {
        let mut max = root;
        let left = 2 * root + 1;
        let right = 2 * root + 2;

        if right < cutoff && run.value(right) > run.value(max) {
            max = right;
        }
        if left < cutoff && run.value(left) > run.value(max) {
            max = left;
        }

        if max != root {
            run.swap(root, max).await;
            sift_down(run, max, cutoff).await;
        }
    }
    .boxed_local()
}
