use esagent_shared::*;
use tracing::trace;

/// Canonical action for a (character, action) pair the engine misreports.
///
/// Yoshi's shield shows up under his neutral-special ids.
pub fn canonical_action(character: Character, action: ActionId) -> Option<ActionId> {
    match (character, action) {
        (
            Character::Yoshi,
            ActionId::NEUTRAL_B_CHARGING | ActionId::NEUTRAL_B_FULL_CHARGE | ActionId::LASER_GUN_PULL,
        ) => Some(ActionId::SHIELD),
        _ => None,
    }
}

/// Rewrite the player's action in place. Returns true if it changed.
pub fn normalize(player: &mut PlayerState) -> bool {
    match canonical_action(player.character, player.action) {
        Some(action) => {
            trace!(character = ?player.character, from = player.action.0, to = action.0, "rewrote action");
            player.action = action;
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn doing(character: Character, action: ActionId) -> PlayerState {
        PlayerState {
            action,
            ..PlayerState::new(character, Vec2::ZERO)
        }
    }

    #[test]
    fn test_yoshi_shield_aliases() {
        for action in [
            ActionId::NEUTRAL_B_CHARGING,
            ActionId::NEUTRAL_B_FULL_CHARGE,
            ActionId::LASER_GUN_PULL,
        ] {
            let mut yoshi = doing(Character::Yoshi, action);
            assert!(normalize(&mut yoshi));
            assert_eq!(yoshi.action, ActionId::SHIELD);
        }
    }

    #[test]
    fn test_other_characters_untouched() {
        let mut fox = doing(Character::Fox, ActionId::LASER_GUN_PULL);
        assert!(!normalize(&mut fox));
        assert_eq!(fox.action, ActionId::LASER_GUN_PULL);

        let mut samus = doing(Character::Samus, ActionId::NEUTRAL_B_CHARGING);
        assert!(!normalize(&mut samus));
    }

    #[test]
    fn test_yoshi_other_actions_untouched() {
        let mut yoshi = doing(Character::Yoshi, ActionId::PLATFORM_DROP);
        assert!(!normalize(&mut yoshi));
        assert_eq!(yoshi.action, ActionId::PLATFORM_DROP);
    }
}
