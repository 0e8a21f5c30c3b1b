use esagent_shared::*;
use tracing::trace;

/// Drop projectiles that can't hurt the controlled entity. Order is kept.
/// Returns how many were dropped.
pub fn filter(projectiles: &mut Vec<Projectile>, controlled: Port) -> usize {
    let before = projectiles.len();
    projectiles.retain(|p| is_threat(p, controlled));
    let dropped = before - projectiles.len();
    if dropped > 0 {
        trace!(dropped, kept = projectiles.len(), "filtered projectiles");
    }
    dropped
}

pub fn is_threat(projectile: &Projectile, controlled: Port) -> bool {
    !is_held(projectile)
        && !is_charging(projectile)
        && projectile.kind != ProjectileType::Pesticide
        && projectile.owner != Some(controlled)
        && is_known_threat(projectile.kind)
}

/// Turnips and bombs still in hand.
fn is_held(projectile: &Projectile) -> bool {
    matches!(
        projectile.kind,
        ProjectileType::Turnip | ProjectileType::LinkBomb | ProjectileType::YlinkBomb
    ) && HELD_ITEM_SUBTYPES.contains(&projectile.subtype)
}

/// Arrows drawn but not yet released.
fn is_charging(projectile: &Projectile) -> bool {
    matches!(
        projectile.kind,
        ProjectileType::YlinkArrow
            | ProjectileType::FireArrow
            | ProjectileType::LinkArrow
            | ProjectileType::Arrow
    ) && projectile.is_stationary()
}

fn is_known_threat(kind: ProjectileType) -> bool {
    match kind {
        ProjectileType::UnknownProjectile
        | ProjectileType::PeachParasol
        | ProjectileType::FoxLaser
        | ProjectileType::SheikChain
        | ProjectileType::SheikSmoke => false,
        ProjectileType::MarioFireball
        | ProjectileType::DrMarioCapsule
        | ProjectileType::LuigiFireball
        | ProjectileType::SamusChargeshot
        | ProjectileType::SamusMissile
        | ProjectileType::SamusBomb
        | ProjectileType::FalcoLaser
        | ProjectileType::LinkArrow
        | ProjectileType::YlinkArrow
        | ProjectileType::FireArrow
        | ProjectileType::Arrow
        | ProjectileType::LinkBomb
        | ProjectileType::YlinkBomb
        | ProjectileType::LinkBoomerang
        | ProjectileType::YlinkBoomerang
        | ProjectileType::LinkHookshot
        | ProjectileType::Turnip
        | ProjectileType::SheikNeedleThrown
        | ProjectileType::Pesticide
        | ProjectileType::PikachuThunderjolt
        | ProjectileType::PikachuThunder
        | ProjectileType::NessPkFire
        | ProjectileType::NessPkFlash
        | ProjectileType::NessPkThunderBall
        | ProjectileType::YoshiEggThrown
        | ProjectileType::YoshiStar
        | ProjectileType::IcicleClimbersIce
        | ProjectileType::MewtwoShadowball
        | ProjectileType::GnwSausage
        | ProjectileType::KirbyCutterBeam => true,
    }
}
