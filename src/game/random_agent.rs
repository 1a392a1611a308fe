use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::agent::{AgentError, GameAgent, MoveDecision};
use crate::alpha_beta_searcher::SearchError;
use crate::board::{GameType, Player, State};

/// Plays a uniformly random empty cell. Useful as a baseline opponent.
pub struct RandomAgent {
    nickname: String,
    long_name: String,
    rng: Option<StdRng>,
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self {
            nickname: "Random".to_string(),
            long_name: "a player who picks moves at random".to_string(),
            rng: None,
        }
    }
}

impl GameAgent for RandomAgent {
    fn nickname(&self) -> &str {
        &self.nickname
    }

    fn long_name(&self) -> &str {
        &self.long_name
    }

    fn prepare(
        &mut self,
        _game_type: &GameType,
        _side: Player,
        seed: u64,
    ) -> Result<(), AgentError> {
        self.rng = Some(StdRng::seed_from_u64(seed));
        Ok(())
    }

    fn make_move(
        &mut self,
        state: &State,
        _opponent_remark: Option<&str>,
    ) -> Result<MoveDecision, AgentError> {
        let rng = self.rng.as_mut().ok_or(AgentError::NotPrepared)?;
        let moves = state.legal_moves();
        let mv = *moves
            .choose(rng)
            .ok_or(AgentError::Search(SearchError::NoAvailableMoves))?;

        Ok(MoveDecision {
            mv,
            state: state.apply(mv)?,
            value: None,
            remark: format!("{}, why not.", mv),
        })
    }
}
