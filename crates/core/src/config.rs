use esagent_shared::*;
use serde::{Deserialize, Serialize};

use crate::error::PerceptionError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    pub controlled_port: Port,
    /// Starting guess for the opponent; replaced once frames arrive.
    pub opponent_port: Port,
    /// Handed to the strategy untouched.
    pub difficulty: u8,
}

impl AgentConfig {
    pub fn new(controlled_port: Port, opponent_port: Port) -> Self {
        Self {
            controlled_port,
            opponent_port,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), PerceptionError> {
        for (label, port) in [
            ("controlled_port", self.controlled_port),
            ("opponent_port", self.opponent_port),
        ] {
            if !(MIN_PORT..=MAX_PORT).contains(&port) {
                return Err(PerceptionError::InvalidConfig(format!(
                    "{label} must be in {MIN_PORT}..={MAX_PORT}, got {port}"
                )));
            }
        }
        if self.controlled_port == self.opponent_port {
            return Err(PerceptionError::InvalidConfig(format!(
                "controlled and opponent ports are both {}",
                self.controlled_port
            )));
        }
        Ok(())
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            controlled_port: 1,
            opponent_port: 2,
            difficulty: DEFAULT_DIFFICULTY,
        }
    }
}
