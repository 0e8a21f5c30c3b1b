use esagent_shared::*;

/// Next ledge-grab count given the (post-swap) opponent on this frame.
///
/// A catch is counted on its first action frame only. Landing or a fresh
/// match zeroes the count.
pub fn update(count: u8, opponent: &PlayerState, frame_index: i32) -> u8 {
    let mut count = count;
    if opponent.action == ActionId::EDGE_CATCHING && opponent.action_frame == LEDGE_CATCH_FRAME {
        count = count.saturating_add(1).min(LEDGE_GRAB_CAP);
    }
    if opponent.on_ground || frame_index == MATCH_START_FRAME {
        count = 0;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn airborne(action: ActionId, action_frame: i32) -> PlayerState {
        PlayerState {
            action,
            action_frame,
            on_ground: false,
            ..PlayerState::new(Character::Falco, Vec2::new(-70.0, -10.0))
        }
    }

    #[test]
    fn test_counts_first_catch_frame_only() {
        let mut count = 0;
        for action_frame in 1..=7 {
            count = update(count, &airborne(ActionId::EDGE_CATCHING, action_frame), 100);
        }
        assert_eq!(count, 1);
    }

    #[test]
    fn test_persists_across_airtime() {
        let mut count = 0;
        count = update(count, &airborne(ActionId::EDGE_CATCHING, 1), 100);
        for f in 0..30 {
            count = update(count, &airborne(ActionId::FALLING, f), 101 + f);
        }
        count = update(count, &airborne(ActionId::EDGE_CATCHING, 1), 140);
        assert_eq!(count, 2);
    }

    #[test]
    fn test_grounded_resets() {
        let grounded = PlayerState {
            on_ground: true,
            ..airborne(ActionId::STANDING, 3)
        };
        assert_eq!(update(5, &grounded, 200), 0);
    }

    #[test]
    fn test_match_start_resets() {
        assert_eq!(
            update(9, &airborne(ActionId::FALLING, 2), MATCH_START_FRAME),
            0
        );
        assert_eq!(
            update(9, &airborne(ActionId::EDGE_CATCHING, 1), MATCH_START_FRAME),
            0
        );
    }

    #[test]
    fn test_saturates() {
        assert_eq!(
            update(LEDGE_GRAB_CAP, &airborne(ActionId::EDGE_CATCHING, 1), 10),
            LEDGE_GRAB_CAP
        );
    }
}
