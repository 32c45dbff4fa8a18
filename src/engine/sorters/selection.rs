use futures::future::LocalBoxFuture;
use futures::FutureExt;

use crate::engine::{SortRun, Sorter};

/// An animated implementation of [Selection
/// Sort](https://en.wikipedia.org/wiki/Selection_sort)
///
/// # Explanation
///
/// For every position in turn, scans the rest of the array for the minimum and swaps it into
/// place. Two behaviors are kept deliberately, because the animation is defined by them:
///
/// - The scan compares with `<=`, so among equal minima the *last* occurrence wins. That makes
///   the sort unstable, but it is the reference behavior this engine reproduces.
/// - The swap into place is unconditional. A position that already holds its minimum still gets
///   a no-op swap, so every run emits exactly one paced swap per position.
///
/// # Usage
///
/// ```
/// use sortviz::engine::{Algorithm, Session};
/// use sortviz::view::NullView;
///
/// let mut session = Session::new(vec![4, 2, 3, 5, 1], 0);
/// session.select(Algorithm::Selection.sorter());
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
pub struct SelectionSorter;

impl<T> Sorter<T> for SelectionSorter
where
    T: Ord,
{
    fn sort<'a, 's>(&self, run: &'a mut SortRun<'s, T>) -> LocalBoxFuture<'a, ()>
    where
        's: 'a,
    {
        async move {
            for limit in 0..run.len() {
                let mut min = limit;
                for i in limit..run.len() {
                    if run.value(i) <= run.value(min) {
                        min = i;
                    }
                }
                run.swap(limit, min).await;
            }
        }
        .boxed_local()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::view::NullView;

    async fn sort(mut bars: Vec<i32>) -> Vec<i32> {
        let mut view = NullView;
        let mut run = SortRun::new(&mut bars, Rc::new(Cell::new(0)), &mut view);
        SelectionSorter.sort(&mut run).await;
        drop(run);
        bars
    }

    #[tokio::test]
    async fn arbitrary_array() {
        assert_eq!(sort(vec![4, 2, 3, 5, 1]).await, [1, 2, 3, 4, 5]);
    }

    #[tokio::test]
    async fn sorted_array() {
        let sorted = (1..10).collect::<Vec<_>>();
        assert_eq!(sort(sorted.clone()).await, sorted);
    }

    #[tokio::test]
    async fn all_equal_array() {
        assert_eq!(sort(vec![7, 7, 7, 7]).await, [7, 7, 7, 7]);
    }

    #[tokio::test]
    async fn very_unsorted() {
        let mut slice = (1..500).rev().collect::<Vec<_>>();
        slice = sort(slice).await;
        assert_eq!(slice, (1..500).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn simple_edge_cases() {
        assert_eq!(sort(vec![]).await, []);
        assert_eq!(sort(vec![1]).await, [1]);
        assert_eq!(sort(vec![1, 2]).await, [1, 2]);
        assert_eq!(sort(vec![2, 1]).await, [1, 2]);
        assert_eq!(sort(vec![3, 1, 2]).await, [1, 2, 3]);
    }
}
