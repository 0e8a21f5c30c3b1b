//! Per-frame normalization stages, in the order `perceive` applies them.

pub mod opponent;
pub mod projectiles;
pub mod animation;
pub mod lockout;
pub mod ledge;
pub mod powershield;
pub mod invulnerability;
pub mod actionability;

pub use lockout::{Countdown, Lockouts};
pub use opponent::Resolution;
