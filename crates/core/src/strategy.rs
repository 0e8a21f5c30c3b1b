use esagent_shared::*;

/// Downstream decision maker fed one normalized frame at a time.
pub trait Strategy: Send {
    fn name(&self) -> &str;
    fn step(&mut self, frame: &Frame, me: &PlayerState, opponent: &PlayerState);
}

/// Strategy that does nothing - useful for testing.
pub struct IdleStrategy;

impl Strategy for IdleStrategy {
    fn name(&self) -> &str {
        "idle"
    }

    fn step(&mut self, _frame: &Frame, _me: &PlayerState, _opponent: &PlayerState) {}
}

/// What a strategy was handed on one frame.
#[derive(Debug, Clone)]
pub struct StepRecord {
    pub frame: i32,
    pub distance: f32,
    pub me: PlayerState,
    pub opponent: PlayerState,
    pub annotations: Annotations,
}

/// Keeps every step it receives, for tests and replay inspection.
#[derive(Debug, Clone, Default)]
pub struct RecordingStrategy {
    pub difficulty: u8,
    pub steps: Vec<StepRecord>,
}

impl RecordingStrategy {
    pub fn new(difficulty: u8) -> Self {
        Self {
            difficulty,
            steps: Vec::new(),
        }
    }

    pub fn last(&self) -> Option<&StepRecord> {
        self.steps.last()
    }
}

impl Strategy for RecordingStrategy {
    fn name(&self) -> &str {
        "recording"
    }

    fn step(&mut self, frame: &Frame, me: &PlayerState, opponent: &PlayerState) {
        self.steps.push(StepRecord {
            frame: frame.frame,
            distance: frame.distance,
            me: me.clone(),
            opponent: opponent.clone(),
            annotations: frame.annotations.clone(),
        });
    }
}
