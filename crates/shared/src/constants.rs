use crate::types::Port;

// Match
/// Frame index reported on the very first frame of a match.
pub const MATCH_START_FRAME: i32 = -123;
pub const MIN_PORT: Port = 1;
pub const MAX_PORT: Port = 4;

// Lockouts
pub const LOCKOUT_FRAMES: u8 = 40;
/// Raw vertical stick value (neutral 0.5) above which the stick counts as held up.
pub const STICK_UP_THRESHOLD: f32 = 0.8;

// Ledge grabs
pub const LEDGE_GRAB_CAP: u8 = 40;
/// Action frame on which a ledge catch is counted.
pub const LEDGE_CATCH_FRAME: i32 = 1;

// Counter moves (one frame of margin either side of the hit window)
pub const COUNTER_WINDOW_START: i32 = 4;
pub const COUNTER_WINDOW_END: i32 = 30;
pub const COUNTER_INVULN_HORIZON: i32 = 29;

// Projectiles
/// Subtypes reported for a turnip or bomb that is still held.
pub const HELD_ITEM_SUBTYPES: [u8; 3] = [0, 4, 5];

// Agent
pub const DEFAULT_DIFFICULTY: u8 = 4;
