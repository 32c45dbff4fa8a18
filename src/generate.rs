//! Initial bar layouts.
//!
//! Generation is a collaborator of the engine, not part of it: it is the one source of
//! randomness in the system, and once a layout is handed to a
//! [`Session`](crate::engine::Session) every run over it is deterministic.

use rand::seq::SliceRandom;
use rand::Rng;

/// Fewest bars a generated layout will hold.
pub const MIN_LEN: usize = 20;

/// Most bars a generated layout will hold (exclusive).
pub const MAX_LEN: usize = 100;

const MIN_HEIGHT: u32 = 10;
const MAX_HEIGHT: u32 = 500;
const STEP_HEIGHT: u32 = 6;

/// Bars of uniformly random heights in `[10, 500)`, with a random length in `[20, 100)`.
pub fn random_bars() -> Vec<u32> {
    let mut rng = rand::thread_rng();
    let length = rng.gen_range(MIN_LEN..MAX_LEN);

    (0..length)
        .map(|_| rng.gen_range(MIN_HEIGHT..MAX_HEIGHT))
        .collect()
}

/// Bars of heights `0, 6, 12, ...` that form an even staircase once sorted, handed out
/// pre-shuffled (without animation) so there is something to sort.
pub fn step_bars() -> Vec<u32> {
    let mut rng = rand::thread_rng();
    let length = rng.gen_range(MIN_LEN..MAX_LEN);

    let mut bars: Vec<u32> = (0..length as u32).map(|i| i * STEP_HEIGHT).collect();
    bars.shuffle(&mut rng);
    bars
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_bars_stay_in_bounds() {
        for _ in 0..20 {
            let bars = random_bars();
            assert!((MIN_LEN..MAX_LEN).contains(&bars.len()));
            assert!(bars
                .iter()
                .all(|&height| (MIN_HEIGHT..MAX_HEIGHT).contains(&height)));
        }
    }

    #[test]
    fn step_bars_sort_into_a_staircase() {
        let mut bars = step_bars();
        assert!((MIN_LEN..MAX_LEN).contains(&bars.len()));

        bars.sort();
        let staircase: Vec<u32> = (0..bars.len() as u32).map(|i| i * STEP_HEIGHT).collect();
        assert_eq!(bars, staircase);
    }
}
