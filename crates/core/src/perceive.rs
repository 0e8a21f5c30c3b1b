use esagent_shared::*;
use tracing::{debug, error, trace};

use crate::error::PerceptionError;
use crate::stages::{
    actionability, animation, invulnerability, ledge, opponent, powershield, projectiles,
    Resolution,
};
use crate::state::PersistentAgentState;

/// Result of running the pipeline over one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Perception {
    /// The controlled port has no player this frame. Nothing was touched.
    Absent,
    Resolved(Resolution),
}

/// Normalize and annotate `frame` in place, advancing the agent's counters.
///
/// Stages run in a fixed order and every stage after opponent resolution sees
/// the post-swap opponent. On the absent path neither the frame nor `state`
/// is modified.
pub fn perceive(
    frame: &mut Frame,
    state: &mut PersistentAgentState,
    controlled: Port,
) -> Result<Perception, PerceptionError> {
    let Some(resolution) = opponent::resolve(frame, controlled) else {
        trace!(frame = frame.frame, controlled, "controlled port absent");
        return Ok(Perception::Absent);
    };
    frame.annotations.clear();

    if resolution.port != state.opponent_port {
        debug!(
            frame = frame.frame,
            from = state.opponent_port,
            to = resolution.port,
            "opponent changed"
        );
    }
    state.opponent_port = resolution.port;

    projectiles::filter(&mut frame.projectiles, controlled);

    // Alone on the frame, the fallback opponent is ourselves; opponent-only
    // stages leave it untouched.
    let has_opponent = resolution.port != controlled;

    if let Some(opp) = opponent_mut(frame, resolution.port, has_opponent) {
        animation::normalize(opp);
    }

    if let Some(me) = frame.players.get(&controlled) {
        state.lockouts.update(&me.controller_state);
    }

    if let Some(opp) = frame.players.get(&resolution.port).filter(|_| has_opponent) {
        state.ledge_grab_count = ledge::update(state.ledge_grab_count, opp, frame.frame);
    }

    if let Some(me) = frame.players.get(&controlled) {
        state.powershielded_last = powershield::update(state.powershielded_last, me);
    }

    state.annotate(&mut frame.annotations);

    if let Some(opp) = opponent_mut(frame, resolution.port, has_opponent) {
        invulnerability::infer(opp);
        actionability::correct(opp);
    }

    check_invariants(frame, state)?;
    Ok(Perception::Resolved(resolution))
}

fn opponent_mut(frame: &mut Frame, port: Port, has_opponent: bool) -> Option<&mut PlayerState> {
    if has_opponent {
        frame.players.get_mut(&port)
    } else {
        None
    }
}

/// Internal consistency of a processed frame. A failure here is a pipeline
/// defect, not bad input.
pub fn check_invariants(frame: &Frame, state: &PersistentAgentState) -> Result<(), PerceptionError> {
    let violation = |detail: String| -> Result<(), PerceptionError> {
        error!(frame = frame.frame, %detail, "invariant violated");
        Err(PerceptionError::InvariantViolation {
            frame: frame.frame,
            detail,
        })
    };

    if state.lockouts.max_value() > LOCKOUT_FRAMES {
        return violation(format!("lockout above {LOCKOUT_FRAMES}: {:?}", state.lockouts));
    }
    if state.ledge_grab_count > LEDGE_GRAB_CAP {
        return violation(format!(
            "ledge grab count above {LEDGE_GRAB_CAP}: {}",
            state.ledge_grab_count
        ));
    }
    if let Some(key) = keys::REQUIRED
        .iter()
        .find(|key| !frame.annotations.contains(key))
    {
        return violation(format!("annotation {key} missing"));
    }
    if !frame.players.contains_key(&state.opponent_port) {
        return violation(format!("opponent port {} not on frame", state.opponent_port));
    }
    Ok(())
}
