use esagent_shared::*;
use tracing::trace;

/// Counter moves the engine doesn't flag as invulnerable.
fn has_counter_window(character: Character, action: ActionId) -> bool {
    match (character, action) {
        (
            Character::Marth | Character::Roy,
            ActionId::MARTH_COUNTER | ActionId::MARTH_COUNTER_FALLING,
        ) => true,
        (Character::Peach, ActionId::UP_B_GROUND | ActionId::DOWN_B_STUN) => true,
        _ => false,
    }
}

pub fn in_counter_window(player: &PlayerState) -> bool {
    has_counter_window(player.character, player.action)
        && (COUNTER_WINDOW_START..=COUNTER_WINDOW_END).contains(&player.action_frame)
}

/// Mark the player invulnerable while a counter is live. The remaining
/// invulnerability is only ever raised. Returns true if the window applied.
pub fn infer(player: &mut PlayerState) -> bool {
    if !in_counter_window(player) {
        return false;
    }
    player.invulnerable = true;
    player.invulnerability_left = player
        .invulnerability_left
        .max(COUNTER_INVULN_HORIZON - player.action_frame);
    trace!(
        character = ?player.character,
        action_frame = player.action_frame,
        left = player.invulnerability_left,
        "counter window"
    );
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn countering(character: Character, action: ActionId, action_frame: i32) -> PlayerState {
        PlayerState {
            action,
            action_frame,
            ..PlayerState::new(character, Vec2::ZERO)
        }
    }

    #[test]
    fn test_window_bounds() {
        for action_frame in 0..=40 {
            let mut marth = countering(Character::Marth, ActionId::MARTH_COUNTER, action_frame);
            let applied = infer(&mut marth);
            let expected = (4..=30).contains(&action_frame);
            assert_eq!(applied, expected, "action_frame {}", action_frame);
            assert_eq!(marth.invulnerable, expected);
            if expected {
                assert_eq!(marth.invulnerability_left, (29 - action_frame).max(0));
            } else {
                assert_eq!(marth.invulnerability_left, 0);
            }
        }
    }

    #[test]
    fn test_never_lowers_existing() {
        let mut roy = PlayerState {
            invulnerability_left: 50,
            ..countering(Character::Roy, ActionId::MARTH_COUNTER_FALLING, 10)
        };
        assert!(infer(&mut roy));
        assert_eq!(roy.invulnerability_left, 50);

        let mut roy = PlayerState {
            invulnerability_left: 3,
            ..countering(Character::Roy, ActionId::MARTH_COUNTER_FALLING, 10)
        };
        infer(&mut roy);
        assert_eq!(roy.invulnerability_left, 19);
    }

    #[test]
    fn test_peach_pair() {
        let mut peach = countering(Character::Peach, ActionId::DOWN_B_STUN, 4);
        assert!(infer(&mut peach));
        assert_eq!(peach.invulnerability_left, 25);

        let mut peach = countering(Character::Peach, ActionId::UP_B_GROUND, 30);
        assert!(infer(&mut peach));
        assert_eq!(peach.invulnerability_left, 0);
    }

    #[test]
    fn test_pairs_are_character_specific() {
        let mut peach = countering(Character::Peach, ActionId::MARTH_COUNTER, 10);
        assert!(!infer(&mut peach));
        assert!(!peach.invulnerable);

        let mut marth = countering(Character::Marth, ActionId::DOWN_B_STUN, 10);
        assert!(!infer(&mut marth));

        let mut fox = countering(Character::Fox, ActionId::MARTH_COUNTER, 10);
        assert!(!infer(&mut fox));
    }
}
