use esagent_shared::*;
use glam::Vec2;
use tracing::{debug, warn};

/// Who the opponent is on this frame, and how far away.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    pub port: Port,
    pub distance: f32,
    /// The opponent's companion was nearer and now stands in as its primary.
    pub swapped: bool,
}

/// Pick the nearest hostile port and, if its companion is nearer still, make
/// the companion that port's primary entity for the rest of the frame.
///
/// Returns `None` only when `controlled` has no player on this frame.
pub fn resolve(frame: &mut Frame, controlled: Port) -> Option<Resolution> {
    let me = frame.players.get(&controlled)?;
    let origin = me.position;
    let my_team = me.team_id;
    let is_teams = frame.is_teams;

    let hostile = nearest(
        frame
            .players
            .iter()
            .filter(|(port, p)| **port != controlled && (!is_teams || p.team_id != my_team)),
        origin,
    );
    // Everybody on our team: fall back to anyone who isn't us.
    let nearest_port = hostile.or_else(|| {
        nearest(
            frame.players.iter().filter(|(port, _)| **port != controlled),
            origin,
        )
    });

    let (port, mut distance) = match nearest_port {
        Some(found) => found,
        None => {
            warn!(frame = frame.frame, controlled, "no other player on frame");
            (controlled, 0.0)
        }
    };

    let swapped = match frame.players.get_mut(&port) {
        Some(opponent) => swap_if_nearer(opponent, origin, &mut distance),
        None => false,
    };
    if swapped {
        debug!(frame = frame.frame, port, distance, "companion is nearer, swapping");
    }

    frame.distance = distance;
    Some(Resolution {
        port,
        distance,
        swapped,
    })
}

/// Strict `<` over ascending port order, so ties go to the lowest port.
fn nearest<'a>(
    players: impl Iterator<Item = (&'a Port, &'a PlayerState)>,
    origin: Vec2,
) -> Option<(Port, f32)> {
    let mut best: Option<(Port, f32)> = None;
    for (port, player) in players {
        let d = finite_or_max(player.distance_to(origin));
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((*port, d)),
        }
    }
    best
}

/// Exchange `primary` with its companion when the companion is strictly nearer
/// to `origin` than `distance`. The displaced primary moves into the companion
/// slot.
pub fn swap_if_nearer(primary: &mut PlayerState, origin: Vec2, distance: &mut f32) -> bool {
    let Some(mut companion) = primary.companion.take() else {
        return false;
    };
    let companion_distance = finite_or_max(companion.distance_to(origin));
    let swap = companion_distance < *distance;
    if swap {
        std::mem::swap(primary, &mut *companion);
        *distance = companion_distance;
    }
    // Companions never nest, so the promoted entity's own slot is empty.
    debug_assert!(primary.companion.is_none(), "nested companion would be dropped");
    primary.companion = Some(companion);
    swap
}

fn finite_or_max(d: f32) -> f32 {
    if d.is_finite() {
        d
    } else {
        f32::MAX
    }
}
