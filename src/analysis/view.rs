//! A two-player matrix view over a [`NormalFormGame`].
//!
//! The normal form is stored as a relation (profile list + payoff list). The
//! solution-concept routines all want the same thing from it: each player's
//! distinct strategies in first-seen order and a payoff lookup by strategy
//! pair. [`BimatrixView`] derives both once.

use rustc_hash::FxHashMap;

use crate::error::{GameError, Result};
use crate::extensive::{NormalFormGame, Payoffs};

/// Distinct strategies per player plus a payoff lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct BimatrixView {
    players: [String; 2],
    strategies: [Vec<String>; 2],
    cells: FxHashMap<(usize, usize), [f64; 2]>,
}

impl BimatrixView {
    /// Scan `game` and index it.
    ///
    /// # Errors
    /// - [`GameError::UnsupportedPlayerCount`] unless there are exactly two
    ///   players and every profile has two strategies.
    /// - [`GameError::PayoffArity`] if a payoff vector is shorter than two.
    /// - [`GameError::DuplicateProfile`] if two profiles carry the same pair
    ///   of strategy labels.
    pub fn new(game: &NormalFormGame, players: &[String]) -> Result<Self> {
        let [p1, p2] = players else {
            return Err(GameError::UnsupportedPlayerCount(players.len()));
        };

        let mut strategies: [Vec<String>; 2] = [Vec::new(), Vec::new()];
        let mut cells = FxHashMap::default();

        for (profile, payoff) in game.iter() {
            if profile.len() != 2 {
                return Err(GameError::UnsupportedPlayerCount(profile.len()));
            }
            if payoff.len() < 2 {
                return Err(GameError::PayoffArity {
                    expected: 2,
                    found: payoff.len(),
                });
            }

            let labels = profile.labels();
            let mut index = [0usize; 2];
            for (player, label) in labels.into_iter().enumerate() {
                let known = &mut strategies[player];
                index[player] = match known.iter().position(|s| *s == label) {
                    Some(i) => i,
                    None => {
                        known.push(label);
                        known.len() - 1
                    }
                };
            }
            if cells
                .insert((index[0], index[1]), [payoff[0], payoff[1]])
                .is_some()
            {
                return Err(GameError::DuplicateProfile {
                    row: strategies[0][index[0]].clone(),
                    column: strategies[1][index[1]].clone(),
                });
            }
        }

        Ok(Self {
            players: [p1.clone(), p2.clone()],
            strategies,
            cells,
        })
    }

    /// Name of player `player` (0 or 1).
    pub fn player(&self, player: usize) -> &str {
        &self.players[player]
    }

    /// Both player names.
    pub fn players(&self) -> &[String; 2] {
        &self.players
    }

    /// Distinct strategies of `player`, first-seen order.
    pub fn strategies(&self, player: usize) -> &[String] {
        &self.strategies[player]
    }

    /// Strategy counts `(player 1, player 2)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.strategies[0].len(), self.strategies[1].len())
    }

    /// Position of `label` among `player`'s strategies.
    pub fn index_of(&self, player: usize, label: &str) -> Option<usize> {
        self.strategies[player].iter().position(|s| s == label)
    }

    /// Payoffs when player 1 plays strategy `row` and player 2 plays `column`.
    pub fn payoff(&self, row: usize, column: usize) -> Result<[f64; 2]> {
        self.cells
            .get(&(row, column))
            .copied()
            .ok_or_else(|| GameError::MissingProfile {
                row: self.label_or_index(0, row),
                column: self.label_or_index(1, column),
            })
    }

    /// `player`'s payoff from playing `own` while the opponent plays `opponent`.
    pub fn utility(&self, player: usize, own: usize, opponent: usize) -> Result<f64> {
        if player == 0 {
            Ok(self.payoff(own, opponent)?[0])
        } else {
            Ok(self.payoff(opponent, own)?[1])
        }
    }

    /// All payoffs in row-major order, ready for
    /// [`compute_expected_payoff`](super::compute_expected_payoff).
    pub fn row_major(&self) -> Result<Vec<Payoffs>> {
        let (rows, columns) = self.shape();
        let mut out = Vec::with_capacity(rows * columns);
        for r in 0..rows {
            for c in 0..columns {
                out.push(self.payoff(r, c)?.to_vec());
            }
        }
        Ok(out)
    }

    fn label_or_index(&self, player: usize, index: usize) -> String {
        self.strategies[player]
            .get(index)
            .cloned()
            .unwrap_or_else(|| format!("#{index}"))
    }
}
