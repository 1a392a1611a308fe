//! Agents and the match runner that plays them against each other.

pub mod agent;
pub mod match_runner;
pub mod random_agent;
pub mod remarks;

pub use agent::{Agent, AgentConfig, AgentError, GameAgent, MoveDecision};
pub use match_runner::{Match, MatchError, MatchReport, Turn};
pub use random_agent::RandomAgent;
pub use remarks::{RemarkContext, RemarkGenerator, RuleBasedRemarks};
