use futures::future::LocalBoxFuture;
use futures::FutureExt;

use crate::engine::{SortRun, Sorter};

/// An animated implementation of [Insertion
/// Sort](https://en.wikipedia.org/wiki/Insertion_sort)
///
/// # Explanation
///
/// Insertion sort grows a sorted prefix one element at a time. Each freshly considered element is
/// walked leftwards through the prefix, one paced swap per step, until the element to its left is
/// no longer greater.
///
/// The walk stops on equality because the comparison is strict, so equal values never trade
/// places: the sort is stable, and on already sorted input it performs no swaps at all.
///
/// # Usage
///
/// ```
/// use sortviz::engine::{Algorithm, Session};
/// use sortviz::view::NullView;
///
/// let mut session = Session::new(vec![1, 5, 4, 2, 3], 0);
/// session.select(Algorithm::Insertion.sorter());
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
pub struct InsertionSorter;

impl<T> Sorter<T> for InsertionSorter
where
    T: Ord,
{
    fn sort<'a, 's>(&self, run: &'a mut SortRun<'s, T>) -> LocalBoxFuture<'a, ()>
    where
        's: 'a,
    {
        async move {
            for unsorted in 1..run.len() {
                let mut i = unsorted;
                while i >= 1 && run.value(i) < run.value(i - 1) {
                    run.swap(i, i - 1).await;
                    i -= 1;
                }
            }
        }
        .boxed_local()
    }
}
