//! Plays two agents against each other and records the game.

use std::fmt;

use log::info;
use thiserror::Error;

use super::agent::{AgentError, GameAgent};
use crate::board::{BoardError, GameType, Move, Player, State};
use crate::evaluate::{classify, Outcome, Score};

#[derive(Error, Debug)]
pub enum MatchError {
    #[error("{player} failed to move: {source}")]
    Agent {
        player: Player,
        #[source]
        source: AgentError,
    },
    #[error("{player} played an illegal move: {source}")]
    IllegalMove {
        player: Player,
        #[source]
        source: BoardError,
    },
    #[error("{player} reported a state that does not follow from {mv}")]
    StateMismatch { player: Player, mv: Move },
}

/// One ply of a finished match.
#[derive(Clone, Debug)]
pub struct Turn {
    pub number: usize,
    pub player: Player,
    pub agent: String,
    pub mv: Move,
    pub value: Option<Score>,
    pub remark: String,
    pub state: State,
}

#[derive(Clone, Debug)]
pub struct MatchReport {
    pub game: String,
    pub x_name: String,
    pub o_name: String,
    pub initial_state: State,
    pub turns: Vec<Turn>,
    /// `Ongoing` when the move limit stopped the game.
    pub outcome: Outcome,
    pub final_state: State,
}

impl fmt::Display for MatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.game)?;
        writeln!(f, "X: {}", self.x_name)?;
        writeln!(f, "O: {}", self.o_name)?;
        writeln!(f)?;
        write!(f, "{}", self.initial_state.board())?;

        for turn in &self.turns {
            writeln!(f)?;
            write!(
                f,
                "{}. {} ({}) plays {}",
                turn.number, turn.agent, turn.player, turn.mv
            )?;
            match turn.value {
                Some(value) => writeln!(f, " [value {}]", value)?,
                None => writeln!(f)?,
            }
            if !turn.remark.is_empty() {
                for line in turn.remark.lines() {
                    writeln!(f, "   > {}", line)?;
                }
            }
            write!(f, "{}", turn.state.board())?;
        }

        writeln!(f)?;
        match self.outcome {
            Outcome::Ongoing => writeln!(f, "Result: stopped after {} moves", self.turns.len()),
            outcome => writeln!(f, "Result: {}", outcome),
        }
    }
}

/// A game between two agents. X is seated first and moves first unless the
/// game type's initial state says otherwise.
pub struct Match {
    game_type: GameType,
    agents: [Box<dyn GameAgent>; 2],
    seed: u64,
}

impl Match {
    pub fn new(
        game_type: GameType,
        x_agent: Box<dyn GameAgent>,
        o_agent: Box<dyn GameAgent>,
    ) -> Self {
        Self {
            game_type,
            agents: [x_agent, o_agent],
            seed: 0,
        }
    }

    /// Seeds both agents; X gets `seed` and O gets `seed + 1`.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn game_type(&self) -> &GameType {
        &self.game_type
    }

    /// Plays until someone wins, the board fills, or `max_moves` plies have
    /// been made.
    pub fn play(&mut self, max_moves: usize) -> Result<MatchReport, MatchError> {
        let game_type = &self.game_type;
        let k = game_type.k();

        for player in Player::ALL.iter().copied() {
            let agent = &mut self.agents[player.index()];
            agent
                .prepare(
                    game_type,
                    player,
                    self.seed.wrapping_add(player.index() as u64),
                )
                .map_err(|source| MatchError::Agent { player, source })?;
            info!("{} plays {}: {}", agent.nickname(), player, agent.introduce());
        }

        let initial_state = game_type.initial_state().clone();
        let mut state = initial_state.clone();
        let mut outcome = classify(&state, None, k);
        let mut turns: Vec<Turn> = Vec::new();
        let mut last_remark: Option<String> = None;

        info!("starting {} ({} to move)", game_type, state.whose_move());

        while !outcome.is_terminal() && turns.len() < max_moves {
            let player = state.whose_move();
            let agent = &mut self.agents[player.index()];

            let decision = agent
                .make_move(&state, last_remark.as_deref())
                .map_err(|source| MatchError::Agent { player, source })?;
            let next = state
                .apply(decision.mv)
                .map_err(|source| MatchError::IllegalMove { player, source })?;
            if next.board() != decision.state.board() {
                return Err(MatchError::StateMismatch {
                    player,
                    mv: decision.mv,
                });
            }

            outcome = classify(&next, Some(decision.mv), k);
            info!(
                "{}. {} ({}) plays {}: {}",
                turns.len() + 1,
                agent.nickname(),
                player,
                decision.mv,
                decision.remark
            );

            turns.push(Turn {
                number: turns.len() + 1,
                player,
                agent: agent.nickname().to_string(),
                mv: decision.mv,
                value: decision.value,
                remark: decision.remark.clone(),
                state: next.clone(),
            });
            last_remark = Some(decision.remark);
            state = next;
        }

        info!("game over after {} moves: {}", turns.len(), outcome);

        Ok(MatchReport {
            game: game_type.to_string(),
            x_name: self.agents[Player::X.index()].nickname().to_string(),
            o_name: self.agents[Player::O.index()].nickname().to_string(),
            initial_state,
            turns,
            outcome,
            final_state: state,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alpha_beta_searcher::{CacheKeying, SearchConfig};
    use crate::game::{Agent, AgentConfig, MoveDecision, RandomAgent};

    fn minimax(max_ply: u8) -> Box<dyn GameAgent> {
        let search = SearchConfig::new(max_ply)
            .with_transposition_cache(Some(CacheKeying::DepthAware));
        Box::new(Agent::new(AgentConfig::with_search(search)))
    }

    #[test]
    fn test_perfect_tic_tac_toe_is_a_draw() {
        let mut game = Match::new(GameType::tic_tac_toe(), minimax(9), minimax(9));

        let report = game.play(100).unwrap();

        assert_eq!(Outcome::Draw, report.outcome);
        assert_eq!(9, report.turns.len());
        assert!(!report.final_state.board().has_empty());
    }

    #[test]
    fn test_full_depth_minimax_never_loses_to_random() {
        for seed in 0..3 {
            let mut game = Match::new(
                GameType::tic_tac_toe(),
                minimax(9),
                Box::new(RandomAgent::default()),
            )
            .with_seed(seed);

            let report = game.play(100).unwrap();
            assert_ne!(Outcome::WinBy(Player::O), report.outcome, "seed {}", seed);
            assert!(report.outcome.is_terminal());
        }
    }

    #[test]
    fn test_turns_alternate_and_replay() {
        let mut game = Match::new(
            GameType::four_in_a_row(),
            Box::new(RandomAgent::default()),
            Box::new(RandomAgent::default()),
        )
        .with_seed(8);

        let report = game.play(100).unwrap();

        let mut state = report.initial_state.clone();
        for (i, turn) in report.turns.iter().enumerate() {
            assert_eq!(i + 1, turn.number);
            assert_eq!(state.whose_move(), turn.player);
            state = state.apply(turn.mv).unwrap();
            assert_eq!(&state, &turn.state);
        }
        assert_eq!(state, report.final_state);
        assert_eq!(
            report.outcome,
            classify(&state, report.turns.last().map(|turn| turn.mv), 4)
        );
    }

    #[test]
    fn test_move_limit() {
        let mut game = Match::new(GameType::five_in_a_row(), minimax(1), minimax(1));

        let report = game.play(3).unwrap();

        assert_eq!(3, report.turns.len());
        assert_eq!(Outcome::Ongoing, report.outcome);
        assert!(report.to_string().ends_with("Result: stopped after 3 moves\n"));
    }

    #[test]
    fn test_transcript() {
        let mut game = Match::new(GameType::tic_tac_toe(), minimax(2), minimax(2));
        let report = game.play(2).unwrap();
        let transcript = report.to_string();

        assert!(transcript.starts_with("Tic-Tac-Toe"), "{}", transcript);
        assert!(transcript.contains("X: Minimax\nO: Minimax\n"));
        assert!(transcript.contains("1. Minimax (X) plays (1, 1) [value "));
        assert!(transcript.contains("   > I'll take (1, 1)."));
        assert!(transcript.contains("2. Minimax (O) plays "));
    }

    /// Always claims the top-left corner, occupied or not.
    struct CornerHog;

    impl GameAgent for CornerHog {
        fn nickname(&self) -> &str {
            "Hog"
        }

        fn long_name(&self) -> &str {
            "a corner hog"
        }

        fn prepare(&mut self, _: &GameType, _: Player, _: u64) -> Result<(), AgentError> {
            Ok(())
        }

        fn make_move(
            &mut self,
            state: &State,
            _: Option<&str>,
        ) -> Result<MoveDecision, AgentError> {
            let mv = Move::new(0, 0);
            Ok(MoveDecision {
                mv,
                state: state.apply(mv).unwrap_or_else(|_| state.clone()),
                value: None,
                remark: String::new(),
            })
        }
    }

    /// Plays a random move but reports the board unchanged.
    struct Liar(RandomAgent);

    impl GameAgent for Liar {
        fn nickname(&self) -> &str {
            "Liar"
        }

        fn long_name(&self) -> &str {
            "an unreliable narrator"
        }

        fn prepare(
            &mut self,
            game_type: &GameType,
            side: Player,
            seed: u64,
        ) -> Result<(), AgentError> {
            self.0.prepare(game_type, side, seed)
        }

        fn make_move(
            &mut self,
            state: &State,
            remark: Option<&str>,
        ) -> Result<MoveDecision, AgentError> {
            let decision = self.0.make_move(state, remark)?;
            Ok(MoveDecision {
                state: state.clone(),
                ..decision
            })
        }
    }

    #[test]
    fn test_occupied_cell_is_rejected() {
        let mut game = Match::new(
            GameType::tic_tac_toe(),
            Box::new(CornerHog),
            Box::new(CornerHog),
        );

        assert!(matches!(
            game.play(10),
            Err(MatchError::IllegalMove {
                player: Player::O,
                source: BoardError::CellNotEmpty { .. }
            })
        ));
    }

    #[test]
    fn test_forbidden_cell_is_rejected() {
        let mut game = Match::new(
            GameType::five_in_a_row_forbidden(),
            Box::new(CornerHog),
            Box::new(RandomAgent::default()),
        );

        assert!(matches!(
            game.play(10),
            Err(MatchError::IllegalMove {
                player: Player::X,
                source: BoardError::CellNotEmpty { .. }
            })
        ));
    }

    #[test]
    fn test_reported_state_must_match_move() {
        let mut game = Match::new(
            GameType::tic_tac_toe(),
            minimax(1),
            Box::new(Liar(RandomAgent::default())),
        );

        assert!(matches!(
            game.play(10),
            Err(MatchError::StateMismatch {
                player: Player::O,
                ..
            })
        ));
    }
}
