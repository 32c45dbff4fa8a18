use std::cmp::Ordering;

use sortviz::engine::{Algorithm, RunError, Session};
use sortviz::view::{NullView, View};

/// Records every notification a run emits: the swap events in order, a snapshot of the bars
/// after each one, and the lifecycle signals.
#[derive(Default)]
struct Recorder {
    swaps: Vec<(usize, usize)>,
    frames: Vec<Vec<u32>>,
    started: usize,
    finished: usize,
    rejected: Vec<RunError>,
}

impl View<u32> for Recorder {
    fn swap(&mut self, bars: &[u32], i: usize, j: usize) {
        self.swaps.push((i, j));
        self.frames.push(bars.to_vec());
    }

    fn run_started(&mut self) {
        self.started += 1;
    }

    fn run_finished(&mut self) {
        self.finished += 1;
    }

    fn run_rejected(&mut self, reason: &RunError) {
        self.rejected.push(*reason);
    }
}

async fn record(algorithm: Algorithm, bars: Vec<u32>) -> (Vec<u32>, Recorder) {
    let mut session = Session::new(bars, 0);
    session.select(algorithm.sorter());

    let mut recorder = Recorder::default();
    session.run(&mut recorder).await.unwrap();
    (session.into_bars(), recorder)
}

const ALL: [Algorithm; 4] = [
    Algorithm::Insertion,
    Algorithm::Selection,
    Algorithm::Quick,
    Algorithm::Heap,
];

mod sorting {
    use super::*;

    #[tokio::test]
    async fn every_algorithm_sorts() {
        let input = vec![470, 12, 303, 12, 89, 404, 1, 270, 89, 55];
        let mut expected = input.clone();
        expected.sort();

        for algorithm in ALL {
            let (bars, recorder) = record(algorithm, input.clone()).await;
            assert_eq!(bars, expected, "{algorithm} left the bars unsorted");
            assert_eq!(recorder.started, 1);
            assert_eq!(recorder.finished, 1);
        }
    }

    #[tokio::test]
    async fn quick_sort_survives_its_worst_case() {
        // Reverse sorted input drives the Lomuto partition through its quadratic path; it must
        // still terminate with at most one partition per element pair plus the pivot drops.
        let input: Vec<u32> = (1..=50).rev().collect();
        let (bars, recorder) = record(Algorithm::Quick, input).await;

        assert_eq!(bars, (1..=50).collect::<Vec<_>>());
        assert!(recorder.swaps.len() <= 50 * 50);
    }
}

mod determinism {
    use super::*;

    #[tokio::test]
    async fn swap_sequences_replay_exactly() {
        let input = vec![88, 14, 3, 3, 250, 197, 42, 111];

        for algorithm in ALL {
            let (_, first) = record(algorithm, input.clone()).await;
            let (_, second) = record(algorithm, input.clone()).await;
            assert_eq!(
                first.swaps, second.swaps,
                "{algorithm} emitted different swaps on identical input"
            );
        }
    }
}

mod notification {
    use super::*;

    #[tokio::test]
    async fn frames_reflect_each_swap_before_notification() {
        // Replaying the reported swap events over a copy of the input must reproduce every
        // frame: each notification describes an exchange that has already happened.
        let input = vec![470, 12, 303, 89, 404, 1, 270];

        for algorithm in ALL {
            let (_, recorder) = record(algorithm, input.clone()).await;

            let mut replay = input.clone();
            for (step, &(i, j)) in recorder.swaps.iter().enumerate() {
                replay.swap(i, j);
                assert_eq!(
                    replay, recorder.frames[step],
                    "{algorithm} frame {step} does not match its swap event"
                );
            }
        }
    }
}

mod tie_breaks {
    use super::*;

    /// A value with an identity that the ordering ignores.
    #[derive(Clone, Copy, Debug)]
    struct Tagged {
        key: u32,
        id: char,
    }

    impl PartialEq for Tagged {
        fn eq(&self, other: &Self) -> bool {
            self.key == other.key
        }
    }

    impl Eq for Tagged {}

    impl PartialOrd for Tagged {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Tagged {
        fn cmp(&self, other: &Self) -> Ordering {
            self.key.cmp(&other.key)
        }
    }

    fn tagged(pairs: &[(u32, char)]) -> Vec<Tagged> {
        pairs.iter().map(|&(key, id)| Tagged { key, id }).collect()
    }

    #[tokio::test]
    async fn insertion_sort_is_stable() {
        let mut session = Session::new(tagged(&[(2, 'a'), (1, 'b'), (2, 'c')]), 0);
        session.select(Algorithm::Insertion.sorter());
        session.run(&mut NullView).await.unwrap();

        let ids: Vec<char> = session.into_bars().iter().map(|bar| bar.id).collect();
        assert_eq!(ids, ['b', 'a', 'c']);
    }

    #[tokio::test]
    async fn selection_sort_picks_the_last_minimum() {
        // Scanning [3, 1, 1, 2] forward with `<=`, the second 1 (index 2) wins the first scan,
        // and every position still gets its one swap even when it is a no-op.
        let (bars, recorder) = record(Algorithm::Selection, vec![3, 1, 1, 2]).await;

        assert_eq!(recorder.swaps, [(0, 2), (1, 1), (2, 3), (3, 3)]);
        assert_eq!(bars, [1, 1, 2, 3]);
    }

    #[tokio::test]
    async fn selection_sort_is_not_stable() {
        let mut session = Session::new(tagged(&[(3, 'a'), (3, 'b'), (1, 'x'), (2, 'y')]), 0);
        session.select(Algorithm::Selection.sorter());
        session.run(&mut NullView).await.unwrap();

        // The last-minimum rule ends up placing 'b' ahead of 'a' even though 'a' came first.
        let ids: Vec<char> = session.into_bars().iter().map(|bar| bar.id).collect();
        assert_eq!(ids, ['x', 'y', 'b', 'a']);
    }
}

mod heap_phases {
    use super::*;

    fn is_max_heap(bars: &[u32]) -> bool {
        (0..bars.len() / 2).all(|parent| {
            let left = 2 * parent + 1;
            let right = 2 * parent + 2;
            (left >= bars.len() || bars[parent] >= bars[left])
                && (right >= bars.len() || bars[parent] >= bars[right])
        })
    }

    #[tokio::test]
    async fn build_phase_produces_a_valid_heap() {
        let input = vec![4, 10, 3, 5, 1];
        let (_, recorder) = record(Algorithm::Heap, input.clone()).await;

        // The first extraction is always the root swapped with the last index; everything
        // before that event is the build phase.
        let extraction = recorder
            .swaps
            .iter()
            .position(|&swap| swap == (0, input.len() - 1))
            .expect("heap sort never started extracting");

        let after_build = if extraction == 0 {
            &input
        } else {
            &recorder.frames[extraction - 1]
        };
        assert!(
            is_max_heap(after_build),
            "build phase ended on a non-heap: {after_build:?}"
        );
    }
}

mod rejections {
    use super::*;

    #[tokio::test]
    async fn already_sorted_is_refused() {
        let mut session = Session::new(vec![1, 2, 3], 0);
        session.select(Algorithm::Quick.sorter());

        let mut recorder = Recorder::default();
        let result = session.run(&mut recorder).await;

        assert_eq!(result, Err(RunError::AlreadySorted));
        assert_eq!(recorder.rejected, [RunError::AlreadySorted]);
        assert_eq!(recorder.started, 0);
        assert!(recorder.swaps.is_empty());
    }

    #[tokio::test]
    async fn missing_selection_is_refused_even_on_unsorted_input() {
        let mut session = Session::new(vec![3, 1, 2], 0);

        let mut recorder = Recorder::default();
        let result = session.run(&mut recorder).await;

        assert_eq!(result, Err(RunError::NoSorterSelected));
        assert_eq!(recorder.rejected, [RunError::NoSorterSelected]);
        assert_eq!(session.bars(), [3, 1, 2]);
    }
}

mod shuffle {
    use super::*;

    #[tokio::test]
    async fn shuffle_walks_every_index_once() {
        let input: Vec<u32> = (0..40).collect();
        let mut session = Session::new(input.clone(), 0);

        let mut recorder = Recorder::default();
        session.shuffle(&mut recorder).await.unwrap();

        assert_eq!(recorder.started, 1);
        assert_eq!(recorder.finished, 1);
        assert_eq!(recorder.swaps.len(), input.len());
        for (step, &(i, j)) in recorder.swaps.iter().enumerate() {
            assert_eq!(i, step);
            assert!(j < input.len());
        }

        let mut bars = session.into_bars();
        bars.sort();
        assert_eq!(bars, input);
    }
}
