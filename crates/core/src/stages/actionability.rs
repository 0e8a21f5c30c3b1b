use esagent_shared::*;

/// Platform drop is fully actionable; clear any hitstun the engine still
/// reports for it. Returns true if hitstun was cleared.
pub fn correct(player: &mut PlayerState) -> bool {
    if player.action != ActionId::PLATFORM_DROP {
        return false;
    }
    let had_hitstun = player.hitstun_frames_left != 0;
    player.hitstun_frames_left = 0;
    had_hitstun
}
