use esagent_shared::*;
use serde::{Deserialize, Serialize};

use crate::stages::lockout::Lockouts;

/// Memory carried from one frame to the next for the length of a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistentAgentState {
    pub opponent_port: Port,
    pub ledge_grab_count: u8,
    pub lockouts: Lockouts,
    pub powershielded_last: bool,
}

impl PersistentAgentState {
    pub fn new(opponent_hint: Port) -> Self {
        Self {
            opponent_port: opponent_hint,
            ledge_grab_count: 0,
            lockouts: Lockouts::default(),
            powershielded_last: false,
        }
    }

    /// Write the counters and flags into the frame's annotation map.
    pub fn annotate(&self, annotations: &mut Annotations) {
        annotations.set_int(keys::LEDGE_GRAB_COUNT, self.ledge_grab_count.into());
        annotations.set_int(keys::TECH_LOCKOUT, self.lockouts.tech.value().into());
        annotations.set_int(keys::METEOR_JUMP_LOCKOUT, self.lockouts.meteor_jump.value().into());
        annotations.set_int(keys::METEOR_FF_LOCKOUT, self.lockouts.meteor_ff.value().into());
        annotations.set_bool(keys::POWERSHIELDED_LAST, self.powershielded_last);
    }
}
