use esagent_shared::*;
use tracing::debug;

use crate::config::AgentConfig;
use crate::error::PerceptionError;
use crate::perceive::{perceive, Perception};
use crate::state::PersistentAgentState;
use crate::strategy::Strategy;

/// What the agent did with a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Controlled entity absent: release every input, strategy not consulted.
    ReleaseAll,
    Stepped { opponent_port: Port },
}

/// Expert-system agent: normalizes each frame and hands it to a strategy.
pub struct EsAgent<S: Strategy> {
    config: AgentConfig,
    state: PersistentAgentState,
    strategy: S,
}

impl<S: Strategy> EsAgent<S> {
    /// Build an agent for one match. `make_strategy` receives the configured
    /// difficulty unchanged.
    pub fn new(
        config: AgentConfig,
        make_strategy: impl FnOnce(u8) -> S,
    ) -> Result<Self, PerceptionError> {
        config.validate()?;
        let strategy = make_strategy(config.difficulty);
        debug!(
            controlled = config.controlled_port,
            opponent = config.opponent_port,
            difficulty = config.difficulty,
            strategy = strategy.name(),
            "agent created"
        );
        Ok(Self {
            state: PersistentAgentState::new(config.opponent_port),
            config,
            strategy,
        })
    }

    /// Process one frame. The frame is normalized and annotated in place.
    pub fn act(&mut self, frame: &mut Frame) -> Result<StepOutcome, PerceptionError> {
        let controlled = self.config.controlled_port;
        let resolution = match perceive(frame, &mut self.state, controlled)? {
            Perception::Absent => return Ok(StepOutcome::ReleaseAll),
            Perception::Resolved(resolution) => resolution,
        };

        let (Some(me), Some(opponent)) = (frame.player(controlled), frame.player(resolution.port))
        else {
            return Err(PerceptionError::InvariantViolation {
                frame: frame.frame,
                detail: format!(
                    "ports {controlled}/{} vanished after perception",
                    resolution.port
                ),
            });
        };
        self.strategy.step(frame, me, opponent);

        Ok(StepOutcome::Stepped {
            opponent_port: resolution.port,
        })
    }

    /// Forget everything learned this match.
    pub fn reset(&mut self) {
        self.state = PersistentAgentState::new(self.config.opponent_port);
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    pub fn state(&self) -> &PersistentAgentState {
        &self.state
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }
}
