//! Seeded random games for property checks and benchmarks.
//!
//! Payoffs are drawn as integers so that ties, and with them weak dominance
//! and multiple best responses, actually occur.

use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::classic::custom_game;
use crate::error::Result;
use crate::extensive::{GameTree, NormalFormGame};

fn labels(prefix: &str, count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("{}{}", prefix, i)).collect()
}

fn draw_grid(rows: usize, cols: usize, range: RangeInclusive<i32>, seed: u64) -> Vec<Vec<(f64, f64)>> {
    let (lo, hi) = if range.start() <= range.end() {
        (*range.start(), *range.end())
    } else {
        (*range.end(), *range.start())
    };
    let mut rng = StdRng::seed_from_u64(seed);
    (0..rows)
        .map(|_| {
            (0..cols)
                .map(|_| (rng.gen_range(lo..=hi) as f64, rng.gen_range(lo..=hi) as f64))
                .collect()
        })
        .collect()
}

/// A `rows` x `cols` game with integer payoffs drawn from `range`.
///
/// Player 1's strategies are `R1, R2, ...` and player 2's are `C1, C2, ...`.
/// The same seed always gives the same game.
pub fn random_bimatrix(
    rows: usize,
    cols: usize,
    range: RangeInclusive<i32>,
    seed: u64,
) -> Result<NormalFormGame> {
    let grid = draw_grid(rows, cols, range, seed);
    let p1 = labels("R", rows);
    let p2 = labels("C", cols);
    let p1: Vec<&str> = p1.iter().map(String::as_str).collect();
    let p2: Vec<&str> = p2.iter().map(String::as_str).collect();
    NormalFormGame::from_bimatrix(&p1, &p2, &grid)
}

/// The same game as [`random_bimatrix`] for this seed, as a tree.
pub fn random_game_tree(
    rows: usize,
    cols: usize,
    range: RangeInclusive<i32>,
    seed: u64,
) -> Result<GameTree> {
    let grid = draw_grid(rows, cols, range, seed);
    let p1 = labels("R", rows);
    let p2 = labels("C", cols);
    let p1: Vec<&str> = p1.iter().map(String::as_str).collect();
    let p2: Vec<&str> = p2.iter().map(String::as_str).collect();
    custom_game(&p1, &p2, &grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{compute_expected_payoff, pure_distribution, strict_dominance, weak_dominance};
    use crate::extensive::{evaluate_profile, extensive_to_normal_form};
    use crate::games::players;

    const SHAPES: [(usize, usize); 4] = [(2, 2), (2, 3), (3, 2), (3, 3)];

    #[test]
    fn test_seed_is_deterministic() {
        let a = random_bimatrix(3, 2, -5..=5, 42).unwrap();
        let b = random_bimatrix(3, 2, -5..=5, 42).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 6);
        assert!(a.payoffs().iter().flatten().all(|&u| (-5.0..=5.0).contains(&u)));
    }

    #[test]
    fn test_reversed_range() {
        let g = random_bimatrix(2, 2, 3..=1, 7).unwrap();
        assert!(g.payoffs().iter().flatten().all(|&u| (1.0..=3.0).contains(&u)));
    }

    #[test]
    fn test_tree_matches_bimatrix() {
        for (seed, &(rows, cols)) in SHAPES.iter().enumerate() {
            let tree = random_game_tree(rows, cols, -9..=9, seed as u64).unwrap();
            let converted = extensive_to_normal_form(&tree, &players()).unwrap();
            let direct = random_bimatrix(rows, cols, -9..=9, seed as u64).unwrap();

            assert_eq!(converted.payoffs(), direct.payoffs());
            assert_eq!(converted.strategy_labels(0), direct.strategy_labels(0));
            assert_eq!(converted.strategy_labels(1), direct.strategy_labels(1));
        }
    }

    #[test]
    fn test_conversion_properties() {
        for seed in 0..50u64 {
            let (rows, cols) = SHAPES[(seed % 4) as usize];
            let tree = random_game_tree(rows, cols, -9..=9, seed).unwrap();
            let game = extensive_to_normal_form(&tree, &players()).unwrap();

            assert_eq!(game.profiles().len(), game.payoffs().len());
            assert_eq!(game.len(), rows * cols, "seed {}", seed);

            for (profile, payoff) in game.iter() {
                let replayed = evaluate_profile(tree.root(), &players(), profile).unwrap();
                assert_eq!(replayed.as_slice(), payoff, "seed {}", seed);
            }

            // Pure distributions pick single cells of the row-major list.
            for i in 0..rows {
                for j in 0..cols {
                    let (u1, u2) = compute_expected_payoff(
                        game.payoffs(),
                        &pure_distribution(i, rows),
                        &pure_distribution(j, cols),
                    )
                    .unwrap();
                    assert_eq!(vec![u1, u2], game.payoffs()[i * cols + j]);
                }
            }
        }
    }

    #[test]
    fn test_strict_subset_of_weak() {
        for seed in 0..200u64 {
            let (rows, cols) = SHAPES[(seed % 4) as usize];
            let game = random_bimatrix(rows, cols, -2..=2, seed).unwrap();
            let strict = strict_dominance(&game, &players()).unwrap();
            let weak = weak_dominance(&game, &players()).unwrap();
            for player in 0..2 {
                for s in strict.for_player(player) {
                    assert!(weak.contains(player, s), "seed {}: {} missing from weak set", seed, s);
                }
            }
        }
    }
}
