use std::time::Duration;

use log::debug;
use thiserror::Error;

use super::remarks::{RemarkContext, RemarkGenerator, RuleBasedRemarks};
use crate::alpha_beta_searcher::{search_best_move, SearchConfig, SearchError, SearchSession};
use crate::board::{BoardError, GameType, Move, Player, State};
use crate::evaluate::{Evaluator, Score, SequenceEvaluator};

#[derive(Error, Debug)]
pub enum AgentError {
    #[error("agent has not been prepared for a game")]
    NotPrepared,
    #[error("agent plays {side} but it is {to_move}'s turn")]
    WrongSide { side: Player, to_move: Player },
    #[error("search failed: {0}")]
    Search(#[from] SearchError),
    #[error("board error: {0}")]
    Board(#[from] BoardError),
}

/// A move together with the state it leads to and the agent's comment.
#[derive(Clone, Debug)]
pub struct MoveDecision {
    pub mv: Move,
    pub state: State,
    /// Search value of `mv`, when the agent searched for it.
    pub value: Option<Score>,
    pub remark: String,
}

/// Anything that can play one side of a match.
pub trait GameAgent {
    fn nickname(&self) -> &str;

    fn long_name(&self) -> &str;

    fn introduce(&self) -> String {
        format!("I am {}.", self.long_name())
    }

    /// Called once before the first move of every game. `seed` makes the
    /// agent's random choices reproducible.
    fn prepare(&mut self, game_type: &GameType, side: Player, seed: u64)
        -> Result<(), AgentError>;

    fn make_move(
        &mut self,
        state: &State,
        opponent_remark: Option<&str>,
    ) -> Result<MoveDecision, AgentError>;
}

/// Names and search settings for a minimax [`Agent`].
#[derive(Clone, Debug)]
pub struct AgentConfig {
    pub nickname: String,
    pub long_name: String,
    pub search: SearchConfig,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            nickname: "Minimax".to_string(),
            long_name: "a minimax player with alpha-beta pruning".to_string(),
            search: SearchConfig::default(),
        }
    }
}

impl AgentConfig {
    pub fn with_search(search: SearchConfig) -> Self {
        Self {
            search,
            ..Self::default()
        }
    }
}

struct Seat {
    side: Player,
    session: SearchSession,
}

/// The searching agent. Owns one [`SearchSession`] per game, created by
/// `prepare`.
pub struct Agent {
    config: AgentConfig,
    evaluator: Box<dyn Evaluator>,
    remarks: Box<dyn RemarkGenerator>,
    seat: Option<Seat>,
    turn_count: usize,
    my_remarks: Vec<String>,
    opponent_remarks: Vec<String>,
    history: Vec<State>,
    last_move_time: Option<Duration>,
}

impl Default for Agent {
    fn default() -> Self {
        Self::new(AgentConfig::default())
    }
}

impl Agent {
    pub fn new(config: AgentConfig) -> Self {
        Self {
            config,
            evaluator: Box::new(SequenceEvaluator),
            remarks: Box::new(RuleBasedRemarks),
            seat: None,
            turn_count: 0,
            my_remarks: Vec::new(),
            opponent_remarks: Vec::new(),
            history: Vec::new(),
            last_move_time: None,
        }
    }

    pub fn with_evaluator(mut self, evaluator: Box<dyn Evaluator>) -> Self {
        self.evaluator = evaluator;
        self
    }

    pub fn with_remarks(mut self, remarks: Box<dyn RemarkGenerator>) -> Self {
        self.remarks = remarks;
        self
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    pub fn side(&self) -> Option<Player> {
        self.seat.as_ref().map(|seat| seat.side)
    }

    pub fn session(&self) -> Option<&SearchSession> {
        self.seat.as_ref().map(|seat| &seat.session)
    }

    pub fn turn_count(&self) -> usize {
        self.turn_count
    }

    pub fn my_remarks(&self) -> &[String] {
        &self.my_remarks
    }

    pub fn opponent_remarks(&self) -> &[String] {
        &self.opponent_remarks
    }

    /// States produced by this agent's moves, oldest first.
    pub fn history(&self) -> &[State] {
        &self.history
    }

    pub fn last_move_time(&self) -> Option<Duration> {
        self.last_move_time
    }

    /// Searches `state` and returns the chosen move with a remark.
    pub fn choose_move(
        &mut self,
        state: &State,
        opponent_remark: Option<&str>,
    ) -> Result<MoveDecision, AgentError> {
        let seat = self.seat.as_mut().ok_or(AgentError::NotPrepared)?;
        if state.whose_move() != seat.side {
            return Err(AgentError::WrongSide {
                side: seat.side,
                to_move: state.whose_move(),
            });
        }

        if let Some(remark) = opponent_remark {
            self.opponent_remarks.push(remark.to_string());
        }
        self.turn_count += 1;

        let result = search_best_move(
            &mut seat.session,
            state,
            &self.config.search,
            self.evaluator.as_ref(),
        )?;
        self.last_move_time = Some(result.duration);

        let remark = self.remarks.remark(&RemarkContext {
            side: seat.side,
            mv: result.best_move,
            value: result.value,
            opponent_remark,
            stats: &result.stats,
            elapsed: result.duration,
            turn_count: self.turn_count,
        });
        debug!("{} says: {}", self.config.nickname, remark);

        self.my_remarks.push(remark.clone());
        self.history.push(result.state.clone());

        Ok(MoveDecision {
            mv: result.best_move,
            state: result.state,
            value: Some(result.value),
            remark,
        })
    }
}

impl GameAgent for Agent {
    fn nickname(&self) -> &str {
        &self.config.nickname
    }

    fn long_name(&self) -> &str {
        &self.config.long_name
    }

    fn prepare(
        &mut self,
        game_type: &GameType,
        side: Player,
        seed: u64,
    ) -> Result<(), AgentError> {
        self.config.search.validate()?;
        self.seat = Some(Seat {
            side,
            session: SearchSession::new(game_type, seed),
        });
        self.turn_count = 0;
        self.my_remarks.clear();
        self.opponent_remarks.clear();
        self.history.clear();
        self.last_move_time = None;

        debug!(
            "{} prepared for {} as {} (seed {})",
            self.config.nickname, game_type, side, seed
        );
        Ok(())
    }

    fn make_move(
        &mut self,
        state: &State,
        opponent_remark: Option<&str>,
    ) -> Result<MoveDecision, AgentError> {
        self.choose_move(state, opponent_remark)
    }
}
