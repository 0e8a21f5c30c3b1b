use esagent_shared::*;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::agent::{EsAgent, StepOutcome};
use crate::error::PerceptionError;
use crate::state::PersistentAgentState;
use crate::strategy::Strategy;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplaySummary {
    pub frames: usize,
    /// Frames on which the controlled port was absent.
    pub skipped: usize,
    pub final_state: PersistentAgentState,
    /// How many frames each port was resolved as the opponent.
    pub opponent_counts: BTreeMap<Port, usize>,
}

impl ReplaySummary {
    /// Port resolved most often; ties go to the lowest port.
    pub fn primary_opponent(&self) -> Option<Port> {
        self.opponent_counts
            .iter()
            .fold(None, |best: Option<(Port, usize)>, (&port, &n)| match best {
                Some((_, best_n)) if n <= best_n => best,
                _ => Some((port, n)),
            })
            .map(|(port, _)| port)
    }
}

#[derive(Debug, Clone)]
pub struct Replay {
    /// Every input frame after normalization, in order.
    pub frames: Vec<Frame>,
    pub summary: ReplaySummary,
}

/// Feed recorded frames through `agent` in order.
pub fn run_replay<S: Strategy>(
    agent: &mut EsAgent<S>,
    frames: impl IntoIterator<Item = Frame>,
) -> Result<Replay, PerceptionError> {
    let mut processed = Vec::new();
    let mut skipped = 0;
    let mut opponent_counts = BTreeMap::new();

    for mut frame in frames {
        match agent.act(&mut frame)? {
            StepOutcome::ReleaseAll => skipped += 1,
            StepOutcome::Stepped { opponent_port } => {
                *opponent_counts.entry(opponent_port).or_insert(0) += 1;
            }
        }
        processed.push(frame);
    }

    Ok(Replay {
        summary: ReplaySummary {
            frames: processed.len(),
            skipped,
            final_state: agent.state().clone(),
            opponent_counts,
        },
        frames: processed,
    })
}
