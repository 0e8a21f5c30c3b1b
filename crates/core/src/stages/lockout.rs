use esagent_shared::*;
use serde::{Deserialize, Serialize};

/// Frames left before a suppressed behaviour may fire again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Countdown(u8);

impl Countdown {
    pub fn value(self) -> u8 {
        self.0
    }

    /// Reload to the full lockout when triggered, otherwise tick down to zero.
    pub fn update(&mut self, triggered: bool) {
        self.0 = if triggered {
            LOCKOUT_FRAMES
        } else {
            self.0.saturating_sub(1)
        };
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lockouts {
    pub tech: Countdown,
    pub meteor_jump: Countdown,
    pub meteor_ff: Countdown,
}

impl Lockouts {
    pub fn update(&mut self, controller: &ControllerState) {
        self.tech.update(tech_held(controller));
        self.meteor_jump.update(jump_held(controller));
        self.meteor_ff.update(firefox_held(controller));
    }

    pub fn max_value(&self) -> u8 {
        self.tech
            .value()
            .max(self.meteor_jump.value())
            .max(self.meteor_ff.value())
    }
}

fn stick_up(controller: &ControllerState) -> bool {
    controller.main_stick.y > STICK_UP_THRESHOLD
}

fn tech_held(controller: &ControllerState) -> bool {
    controller.is_pressed(Button::L)
}

fn jump_held(controller: &ControllerState) -> bool {
    controller.is_pressed(Button::Y) || stick_up(controller)
}

fn firefox_held(controller: &ControllerState) -> bool {
    controller.is_pressed(Button::B) && stick_up(controller)
}
