//! Everything the analysis can say about one game, in one value.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::best_response::{best_responses_in_view, pure_nash, BestResponses, NashEquilibrium};
use super::config::AnalysisConfig;
use super::dominance::{
    mixed_strategy_dominance, strict_dominance, weak_dominance, DominatedStrategies,
    MixedDominance,
};
use super::rationalizability::{iterated_strict_dominance, rationalizability, Elimination};
use super::view::BimatrixView;
use crate::error::Result;
use crate::extensive::NormalFormGame;

/// Normal form plus every solution concept computed on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Player names.
    pub players: [String; 2],
    /// Distinct strategies per player, first-seen order.
    pub strategies: [Vec<String>; 2],
    /// The analysed game.
    pub normal_form: NormalFormGame,
    /// Pure strategies strictly dominated by another pure strategy.
    pub strict_dominance: DominatedStrategies,
    /// Pure strategies weakly dominated by another pure strategy.
    pub weak_dominance: DominatedStrategies,
    /// Pure strategies dominated by a two-strategy mixture.
    pub mixed_dominance: MixedDominance,
    /// Best responses of each player.
    pub best_responses: [BestResponses; 2],
    /// Pure Nash equilibria.
    pub pure_nash: Vec<NashEquilibrium>,
    /// Iterated never-best-response elimination.
    pub rationalizable: Elimination,
    /// Iterated strict dominance.
    pub iesds: Elimination,
}

impl AnalysisReport {
    /// Run every analysis on `game` for `config.players`.
    pub fn analyze(game: &NormalFormGame, config: &AnalysisConfig) -> Result<Self> {
        let players = &config.players;
        let view = BimatrixView::new(game, players)?;

        let report = Self {
            players: view.players().clone(),
            strategies: [view.strategies(0).to_vec(), view.strategies(1).to_vec()],
            normal_form: game.clone(),
            strict_dominance: strict_dominance(game, players)?,
            weak_dominance: weak_dominance(game, players)?,
            mixed_dominance: mixed_strategy_dominance(game, players, config)?,
            best_responses: best_responses_in_view(&view)?,
            pure_nash: pure_nash(game, players)?,
            rationalizable: rationalizability(game, players, config)?,
            iesds: iterated_strict_dominance(game, players, config)?,
        };
        log::debug!(
            "analysed {}x{} game: {} pure equilibria",
            report.strategies[0].len(),
            report.strategies[1].len(),
            report.pure_nash.len()
        );
        Ok(report)
    }

    /// The normal form as a text table: player 1's strategies down the side,
    /// player 2's across the top.
    pub fn render_table(&self) -> Result<String> {
        let view = BimatrixView::new(&self.normal_form, &self.players)?;
        let mut out = String::from("=== Normal Form Representation ===\n\n");
        out.push_str(&format!("             {}\n", self.players[1]));
        let header: Vec<String> = view
            .strategies(1)
            .iter()
            .map(|s| format!("{:^10}", s))
            .collect();
        out.push_str(&format!("         {}\n", header.join("   ")));

        let initial = self.players[0].chars().next().unwrap_or('?');
        for (r, row_label) in view.strategies(0).iter().enumerate() {
            let mut row = format!("{}: {:<6} ", initial, row_label);
            for c in 0..view.strategies(1).len() {
                let [u1, u2] = view.payoff(r, c)?;
                row.push_str(&format!("{:^12}", format!("({}, {})", u1, u2)));
            }
            out.push_str(row.trim_end());
            out.push('\n');
        }
        Ok(out)
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn list(items: &[String]) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.join(", ")
    }
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sets = [
            ("Strictly dominated", &self.strict_dominance),
            ("Weakly dominated", &self.weak_dominance),
            ("Dominated by a mixture", &self.mixed_dominance.dominated),
        ];
        for (title, set) in sets {
            writeln!(f, "{}:", title)?;
            for (player, dominated) in set.players.iter().zip(&set.dominated) {
                writeln!(f, "  {}: {}", player, list(dominated))?;
            }
        }
        for witness in &self.mixed_dominance.witnesses {
            writeln!(
                f,
                "  {} is dominated by the mixed strategy: {:?} (p={:.2})",
                witness.dominated, witness.mixture, witness.probability
            )?;
        }

        writeln!(f, "Best responses:")?;
        for br in &self.best_responses {
            for (opponent, best) in br.iter() {
                writeln!(f, "  {} vs {}: {}", br.player, opponent, best.join(", "))?;
            }
        }

        writeln!(f, "Pure Nash equilibria:")?;
        if self.pure_nash.is_empty() {
            writeln!(f, "  none")?;
        }
        for eq in &self.pure_nash {
            writeln!(
                f,
                "  ({}, {}) -> {:?}",
                eq.strategies[0], eq.strategies[1], eq.payoffs
            )?;
        }

        let eliminations = [
            ("Rationalizable", &self.rationalizable),
            ("Surviving iterated strict dominance", &self.iesds),
        ];
        for (title, result) in eliminations {
            writeln!(f, "{} ({} round(s)):", title, result.rounds.len())?;
            for (player, surviving) in result.players.iter().zip(&result.surviving) {
                writeln!(f, "  {}: {}", player, list(surviving))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GameError;

    fn bos() -> NormalFormGame {
        NormalFormGame::from_bimatrix(
            &["Opera", "Football"],
            &["Opera", "Football"],
            &[vec![(2.0, 1.0), (0.0, 0.0)], vec![(0.0, 0.0), (1.0, 2.0)]],
        )
        .unwrap()
    }

    #[test]
    fn test_analyze_battle_of_the_sexes() {
        let report = AnalysisReport::analyze(&bos(), &AnalysisConfig::default()).unwrap();
        assert_eq!(report.pure_nash.len(), 2);
        assert!(report.strict_dominance.is_empty());
        assert!(report.mixed_dominance.witnesses.is_empty());
        assert!(report.rationalizable.rounds.is_empty());
        assert_eq!(report.strategies[0], vec!["Opera", "Football"]);
    }

    #[test]
    fn test_render_table() {
        let report = AnalysisReport::analyze(&bos(), &AnalysisConfig::default()).unwrap();
        let table = report.render_table().unwrap();
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[0], "=== Normal Form Representation ===");
        assert_eq!(lines[2], "             Player 2");
        assert!(lines[3].contains("Opera") && lines[3].contains("Football"));
        assert!(lines[4].starts_with("P: Opera"), "row: {:?}", lines[4]);
        assert!(lines[4].contains("(2, 1)"));
        assert!(lines[5].contains("(1, 2)"));
        assert_eq!(lines.len(), 6, "table: {table}");
        assert!(lines[1].is_empty());
        assert!(table.ends_with('\n'));
    }

    #[test]
    fn test_render_table_reports_missing_cell() {
        let mut report = AnalysisReport::analyze(&bos(), &AnalysisConfig::default()).unwrap();
        report.normal_form = report
            .normal_form
            .retain(|p| p.labels() != ["Football", "Opera"]);

        let err = report.render_table().unwrap_err();
        assert!(
            matches!(err, GameError::MissingProfile { .. }),
            "expected MissingProfile, got {:?}",
            err
        );
    }

    #[test]
    fn test_json_round_trip() {
        let report = AnalysisReport::analyze(&bos(), &AnalysisConfig::default()).unwrap();
        let json = report.to_json().unwrap();
        assert!(json.contains("\"pure_nash\""));
        let back: AnalysisReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }

    #[test]
    fn test_display_lists_sections() {
        let report = AnalysisReport::analyze(&bos(), &AnalysisConfig::default()).unwrap();
        let text = report.to_string();
        assert!(text.contains("Pure Nash equilibria:"));
        assert!(text.contains("(Opera, Opera) -> [2.0, 1.0]"));
        assert!(text.contains("Strictly dominated:\n  Player 1: none"));
    }
}
