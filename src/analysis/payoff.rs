//! Expected payoffs under mixed strategies.
//!
//! The payoff list must be in row-major order: player 1's strategy index
//! varies slowest and player 2's fastest, which is exactly the order
//! [`extensive_to_normal_form`](crate::extensive::extensive_to_normal_form)
//! emits for two players.

use thiserror::Error;

use crate::error::{GameError, Result};
use crate::extensive::Payoffs;

/// Expected payoffs `(player 1, player 2)` when both players mix.
///
/// Computes `sum_i sum_j p1[i] * p2[j] * payoff[i * len(p2) + j]` for each
/// player. Probabilities are used as given; checking that they form a
/// distribution is the caller's job (see [`validate_distribution`]).
///
/// # Example
/// ```
/// use game_analyzer::analysis::compute_expected_payoff;
///
/// let pennies = vec![vec![1.0, -1.0], vec![-1.0, 1.0], vec![-1.0, 1.0], vec![1.0, -1.0]];
/// let (u1, u2) = compute_expected_payoff(&pennies, &[0.5, 0.5], &[0.5, 0.5]).unwrap();
/// assert_eq!((u1, u2), (0.0, 0.0));
/// ```
pub fn compute_expected_payoff(payoffs: &[Payoffs], p1: &[f64], p2: &[f64]) -> Result<(f64, f64)> {
    let cells = p1.len() * p2.len();
    if payoffs.len() != cells {
        return Err(GameError::ShapeMismatch {
            what: "payoff entries for the mixed profile",
            expected: cells,
            found: payoffs.len(),
        });
    }

    let mut expected = (0.0, 0.0);
    for (i, &x) in p1.iter().enumerate() {
        for (j, &y) in p2.iter().enumerate() {
            let payoff = &payoffs[i * p2.len() + j];
            if payoff.len() < 2 {
                return Err(GameError::PayoffArity {
                    expected: 2,
                    found: payoff.len(),
                });
            }
            let weight = x * y;
            expected.0 += weight * payoff[0];
            expected.1 += weight * payoff[1];
        }
    }
    Ok(expected)
}

/// Expected payoff of `player` (0 or 1) mixing with `mixture` while the
/// opponent plays its pure strategy `opponent` out of `opponent_count`.
pub fn expected_payoff_vs_pure(
    payoffs: &[Payoffs],
    player: usize,
    mixture: &[f64],
    opponent: usize,
    opponent_count: usize,
) -> Result<f64> {
    let pure = pure_distribution(opponent, opponent_count);
    if player == 0 {
        Ok(compute_expected_payoff(payoffs, mixture, &pure)?.0)
    } else {
        Ok(compute_expected_payoff(payoffs, &pure, mixture)?.1)
    }
}

/// A probability vector that puts all weight on `index`.
pub fn pure_distribution(index: usize, len: usize) -> Vec<f64> {
    let mut dist = vec![0.0; len];
    if index < len {
        dist[index] = 1.0;
    }
    dist
}

/// Problems with a user-supplied probability vector.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// One probability per strategy is required.
    #[error("Expected {expected} probabilities, got {found}")]
    WrongLength {
        /// Number of strategies.
        expected: usize,
        /// Number of probabilities given.
        found: usize,
    },
    /// A probability is negative, above one, or not a number.
    #[error("Probability {value} at position {index} is not between 0 and 1")]
    OutOfRange {
        /// Position in the vector.
        index: usize,
        /// The offending value.
        value: f64,
    },
    /// The probabilities do not add up to one.
    #[error("Probabilities must sum to 1.0 (current: {sum:.3})")]
    BadSum {
        /// The actual sum.
        sum: f64,
    },
}

/// Check that `probs` is a distribution over `len` strategies.
///
/// Each entry must lie in `[0, 1]` and the sum must be within `tolerance` of
/// one. Interactive front ends call this until it succeeds, then hand the
/// vector to [`compute_expected_payoff`].
pub fn validate_distribution(
    probs: &[f64],
    len: usize,
    tolerance: f64,
) -> std::result::Result<Vec<f64>, ValidationError> {
    if probs.len() != len {
        return Err(ValidationError::WrongLength {
            expected: len,
            found: probs.len(),
        });
    }
    if let Some((index, &value)) = probs
        .iter()
        .enumerate()
        .find(|&(_, &p)| !(0.0..=1.0).contains(&p))
    {
        return Err(ValidationError::OutOfRange { index, value });
    }
    let sum: f64 = probs.iter().sum();
    if (sum - 1.0).abs() > tolerance {
        return Err(ValidationError::BadSum { sum });
    }
    Ok(probs.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pd() -> Vec<Payoffs> {
        vec![vec![3.0, 3.0], vec![0.0, 5.0], vec![5.0, 0.0], vec![1.0, 1.0]]
    }

    #[test]
    fn test_pure_profiles_pick_cells() {
        let payoffs = pd();
        assert_eq!(
            compute_expected_payoff(&payoffs, &[1.0, 0.0], &[0.0, 1.0]).unwrap(),
            (0.0, 5.0)
        );
        assert_eq!(
            compute_expected_payoff(&payoffs, &pure_distribution(1, 2), &pure_distribution(0, 2)).unwrap(),
            (5.0, 0.0)
        );
    }

    #[test]
    fn test_uniform_mix() {
        let (u1, u2) = compute_expected_payoff(&pd(), &[0.5, 0.5], &[0.5, 0.5]).unwrap();
        assert!((u1 - 2.25).abs() < 1e-12);
        assert!((u2 - 2.25).abs() < 1e-12);
    }

    #[test]
    fn test_unvalidated_input_still_computes() {
        // Not a distribution, but the primitive does not care.
        let (u1, _) = compute_expected_payoff(&pd(), &[2.0, 0.0], &[1.0, 0.0]).unwrap();
        assert_eq!(u1, 6.0);
    }

    #[test]
    fn test_expected_payoff_vs_pure() {
        // Player 1 mixes 50/50 against Defect: 0.5 * 0 + 0.5 * 1.
        let u = expected_payoff_vs_pure(&pd(), 0, &[0.5, 0.5], 1, 2).unwrap();
        assert!((u - 0.5).abs() < 1e-12, "got {}", u);

        // Player 2 mixes 50/50 against Cooperate: 0.5 * 3 + 0.5 * 5.
        let u = expected_payoff_vs_pure(&pd(), 1, &[0.5, 0.5], 0, 2).unwrap();
        assert!((u - 4.0).abs() < 1e-12, "got {}", u);
    }

    #[test]
    fn test_shape_mismatch() {
        let err = compute_expected_payoff(&pd(), &[1.0, 0.0, 0.0], &[1.0, 0.0]).unwrap_err();
        assert!(matches!(err, GameError::ShapeMismatch { expected: 6, found: 4, .. }));

        let err = compute_expected_payoff(&[vec![1.0]], &[1.0], &[1.0]).unwrap_err();
        assert!(matches!(err, GameError::PayoffArity { .. }));
    }

    #[test]
    fn test_validate_distribution() {
        assert_eq!(validate_distribution(&[0.25, 0.75], 2, 1e-3), Ok(vec![0.25, 0.75]));
        assert!(validate_distribution(&[0.3334, 0.3333, 0.3333], 3, 1e-3).is_ok());

        assert_eq!(
            validate_distribution(&[1.0], 2, 1e-3),
            Err(ValidationError::WrongLength { expected: 2, found: 1 })
        );
        assert!(matches!(
            validate_distribution(&[1.5, -0.5], 2, 1e-3),
            Err(ValidationError::OutOfRange { index: 0, .. })
        ));
        assert!(matches!(
            validate_distribution(&[f64::NAN, 1.0], 2, 1e-3),
            Err(ValidationError::OutOfRange { index: 0, .. })
        ));
        assert!(matches!(
            validate_distribution(&[0.5, 0.4], 2, 1e-3),
            Err(ValidationError::BadSum { .. })
        ));
    }
}
