use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::annotations::Annotations;
use crate::enums::{ActionId, Button, Character, ProjectileType};

/// Controller slot identifier, 1 through 4.
pub type Port = u8;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerState {
    pub pressed: BTreeSet<Button>,
    /// Raw axes, 0.0..=1.0 with 0.5 at rest.
    pub main_stick: Vec2,
    pub c_stick: Vec2,
    pub l_shoulder: f32,
    pub r_shoulder: f32,
}

impl ControllerState {
    pub fn neutral() -> Self {
        Self {
            pressed: BTreeSet::new(),
            main_stick: Vec2::splat(0.5),
            c_stick: Vec2::splat(0.5),
            l_shoulder: 0.0,
            r_shoulder: 0.0,
        }
    }

    pub fn is_pressed(&self, button: Button) -> bool {
        self.pressed.contains(&button)
    }

    pub fn with_button(mut self, button: Button) -> Self {
        self.pressed.insert(button);
        self
    }

    pub fn with_main_stick(mut self, x: f32, y: f32) -> Self {
        self.main_stick = Vec2::new(x, y);
        self
    }
}

impl Default for ControllerState {
    fn default() -> Self {
        Self::neutral()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerState {
    pub position: Vec2,
    pub character: Character,
    pub team_id: u8,
    pub action: ActionId,
    pub action_frame: i32,
    pub on_ground: bool,
    pub invulnerable: bool,
    pub invulnerability_left: i32,
    pub hitstun_frames_left: i32,
    pub hitlag_left: i32,
    pub is_powershield: bool,
    pub controller_state: ControllerState,
    /// Secondary entity driven from the same port (the partner climber).
    pub companion: Option<Box<PlayerState>>,
}

impl PlayerState {
    pub fn new(character: Character, position: Vec2) -> Self {
        Self {
            position,
            character,
            action: ActionId::STANDING,
            on_ground: true,
            ..Default::default()
        }
    }

    pub fn distance_to(&self, point: Vec2) -> f32 {
        self.position.distance(point)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Projectile {
    #[serde(rename = "type")]
    pub kind: ProjectileType,
    pub subtype: u8,
    pub owner: Option<Port>,
    pub position: Vec2,
    pub velocity: Vec2,
}

impl Projectile {
    pub fn new(kind: ProjectileType, owner: Option<Port>, velocity: Vec2) -> Self {
        Self {
            kind,
            owner,
            velocity,
            ..Default::default()
        }
    }

    pub fn is_stationary(&self) -> bool {
        self.velocity == Vec2::ZERO
    }
}

/// One simulation tick of captured game state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Frame {
    pub frame: i32,
    pub players: BTreeMap<Port, PlayerState>,
    pub projectiles: Vec<Projectile>,
    pub is_teams: bool,
    /// Distance from the controlled entity to the resolved opponent.
    pub distance: f32,
    pub annotations: Annotations,
}

impl Frame {
    pub fn new(frame: i32) -> Self {
        Self {
            frame,
            ..Default::default()
        }
    }

    pub fn with_player(mut self, port: Port, player: PlayerState) -> Self {
        self.players.insert(port, player);
        self
    }

    pub fn with_projectile(mut self, projectile: Projectile) -> Self {
        self.projectiles.push(projectile);
        self
    }

    pub fn player(&self, port: Port) -> Option<&PlayerState> {
        self.players.get(&port)
    }

    pub fn player_mut(&mut self, port: Port) -> Option<&mut PlayerState> {
        self.players.get_mut(&port)
    }
}
