//! In-game remarks that accompany each move.

use std::time::Duration;

use crate::alpha_beta_searcher::SearchStats;
use crate::board::{Move, Player};
use crate::evaluate::Score;

/// Everything a remark generator may comment on for one move.
#[derive(Clone, Debug)]
pub struct RemarkContext<'a> {
    pub side: Player,
    pub mv: Move,
    /// Search value of `mv`, positive favouring X.
    pub value: Score,
    pub opponent_remark: Option<&'a str>,
    pub stats: &'a SearchStats,
    pub elapsed: Duration,
    pub turn_count: usize,
}

impl<'a> RemarkContext<'a> {
    /// `value` from the speaker's point of view: positive is good for `side`.
    pub fn own_value(&self) -> Score {
        if self.side.maximize_score() {
            self.value
        } else {
            self.value.saturating_neg()
        }
    }
}

pub trait RemarkGenerator {
    fn remark(&mut self, context: &RemarkContext) -> String;
}

const STATS_REQUEST: &str = "tell me how you did that";
const SUMMARY_REQUEST: &str = "what's your take on the game so far";

const WINNING_THRESHOLD: Score = 500;
const AHEAD_THRESHOLD: Score = 100;
const LOSING_THRESHOLD: Score = -500;

/// Picks a canned line by value thresholds, and answers two questions from
/// the opponent: a request for search statistics and a request for a
/// summary of the game.
#[derive(Clone, Copy, Default, Debug)]
pub struct RuleBasedRemarks;

impl RuleBasedRemarks {
    fn stats_report(context: &RemarkContext) -> String {
        let stats = context.stats;
        format!(
            "Here is how I found {}:\n\
             - positions visited: {}\n\
             - static evaluations: {}\n\
             - alpha-beta cutoffs: {}\n\
             - cache: {} hits out of {} reads, {} entries written\n\
             - time: {:.4} seconds",
            context.mv,
            stats.nodes,
            stats.leaf_evaluations,
            stats.cutoffs,
            stats.cache_hits,
            stats.cache_reads,
            stats.cache_writes,
            context.elapsed.as_secs_f64()
        )
    }

    fn summary(context: &RemarkContext) -> String {
        let value = context.own_value();
        let (assessment, prediction) = if value > AHEAD_THRESHOLD {
            (
                "The board has been going my way.",
                "I expect to finish this soon.",
            )
        } else if value < -AHEAD_THRESHOLD {
            (
                "You have played well so far.",
                "I still plan to turn it around.",
            )
        } else {
            ("It has been an even game.", "Either of us could take it.")
        };
        format!(
            "We are {} turns in. {} {}",
            context.turn_count, assessment, prediction
        )
    }
}

impl RemarkGenerator for RuleBasedRemarks {
    fn remark(&mut self, context: &RemarkContext) -> String {
        let opponent_remark = context
            .opponent_remark
            .map(str::to_lowercase)
            .unwrap_or_default();

        if opponent_remark.contains(STATS_REQUEST) {
            return Self::stats_report(context);
        }
        if opponent_remark.contains(SUMMARY_REQUEST) {
            return Self::summary(context);
        }

        let value = context.own_value();
        let mut remark = format!("I'll take {}. ", context.mv);
        remark.push_str(if value > WINNING_THRESHOLD {
            "That should just about settle it."
        } else if value > AHEAD_THRESHOLD {
            "Things are lining up nicely."
        } else if value < LOSING_THRESHOLD {
            "This is not going well for me."
        } else {
            "Still early days."
        });
        if opponent_remark.contains("win") {
            remark.push_str(" Let's not talk about winning just yet.");
        }
        remark
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context<'a>(
        side: Player,
        value: Score,
        opponent_remark: Option<&'a str>,
        stats: &'a SearchStats,
    ) -> RemarkContext<'a> {
        RemarkContext {
            side,
            mv: Move::new(1, 2),
            value,
            opponent_remark,
            stats,
            elapsed: Duration::from_millis(1500),
            turn_count: 4,
        }
    }

    #[test]
    fn test_value_thresholds() {
        let stats = SearchStats::default();
        let mut remarks = RuleBasedRemarks;

        let winning = remarks.remark(&context(Player::X, 900, None, &stats));
        assert!(winning.starts_with("I'll take (1, 2)."));
        assert!(winning.contains("settle it"));

        let ahead = remarks.remark(&context(Player::X, 200, None, &stats));
        assert!(ahead.contains("lining up"));

        let losing = remarks.remark(&context(Player::X, -900, None, &stats));
        assert!(losing.contains("not going well"));

        let quiet = remarks.remark(&context(Player::X, 0, None, &stats));
        assert!(quiet.contains("early days"));
    }

    #[test]
    fn test_o_reads_values_from_its_own_side() {
        let stats = SearchStats::default();
        let mut remarks = RuleBasedRemarks;

        let remark = remarks.remark(&context(Player::O, -900, None, &stats));
        assert!(remark.contains("settle it"), "{}", remark);
    }

    #[test]
    fn test_reacts_to_win() {
        let stats = SearchStats::default();
        let remark =
            RuleBasedRemarks.remark(&context(Player::X, 0, Some("I'm going to WIN this"), &stats));
        assert!(remark.ends_with("Let's not talk about winning just yet."));
    }

    #[test]
    fn test_stats_request() {
        let stats = SearchStats {
            nodes: 120,
            leaf_evaluations: 80,
            cutoffs: 7,
            cache_reads: 30,
            cache_hits: 12,
            cache_writes: 18,
        };
        let remark = RuleBasedRemarks.remark(&context(
            Player::X,
            0,
            Some("Tell me how you did that."),
            &stats,
        ));

        assert!(remark.starts_with("Here is how I found (1, 2):\n- positions visited: 120\n"));
        assert!(remark.contains("\n- static evaluations: 80\n"));
        assert!(remark.contains("alpha-beta cutoffs: 7"));
        assert!(remark.contains("12 hits out of 30 reads, 18 entries written"));
        assert!(remark.contains("1.5000 seconds"));
    }

    #[test]
    fn test_summary_request() {
        let stats = SearchStats::default();
        let question = Some("So, what's your take on the game so far?");

        let ahead = RuleBasedRemarks.remark(&context(Player::O, -150, question, &stats));
        assert!(ahead.starts_with("We are 4 turns in."));
        assert!(ahead.contains("going my way"));

        let behind = RuleBasedRemarks.remark(&context(Player::X, -150, question, &stats));
        assert!(behind.contains("turn it around"));

        let even = RuleBasedRemarks.remark(&context(Player::X, 100, question, &stats));
        assert!(even.contains("even game"));
    }
}
