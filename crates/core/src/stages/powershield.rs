use esagent_shared::*;

/// Whether the controlled entity's last block was a powershield.
///
/// Only shield-stun and shield-reflect frames can change the answer; outside
/// them the previous value carries over.
pub fn update(powershielded_last: bool, me: &PlayerState) -> bool {
    if !matches!(me.action, ActionId::SHIELD_REFLECT | ActionId::SHIELD_STUN) {
        return powershielded_last;
    }
    if me.is_powershield {
        true
    } else if me.hitlag_left > 0 {
        false
    } else {
        powershielded_last
    }
}
