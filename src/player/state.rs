//! Jump-state and facing enums shared by the controller and its collaborators.

/// Longest time (seconds) a held jump keeps forcing the rise velocity.
pub const JUMP_TIME_MAX: f32 = 0.3;
/// Shortest jump window (seconds), applied even when the jump key is tapped.
pub const JUMP_TIME_MIN: f32 = 0.1;

/// Vertical motion phase of the player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum JumpState {
    /// Resting on a surface. Set from outside when ground contact is detected;
    /// the next motion update moves on to `Falling`.
    Grounded,
    /// Airborne without a jump (walked off an edge, spawned in the air).
    #[default]
    Falling,
    /// Ascending while the jump is held.
    JumpRising,
    /// Descending after the jump was released; keeps counting jump time.
    JumpFalling,
}

impl JumpState {
    /// States in which `time_jumping` carries meaning.
    pub fn tracks_jump_time(self) -> bool {
        matches!(self, JumpState::JumpRising | JumpState::JumpFalling)
    }

    pub fn label(self) -> &'static str {
        match self {
            JumpState::Grounded => "grounded",
            JumpState::Falling => "falling",
            JumpState::JumpRising => "jump_rising",
            JumpState::JumpFalling => "jump_falling",
        }
    }
}

/// Horizontal facing used by the renderer to flip the sprite.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ViewDirection {
    Left,
    #[default]
    Right,
}

impl ViewDirection {
    /// Facing implied by a horizontal velocity. Zero keeps `current`.
    pub fn from_velocity(current: ViewDirection, velocity_x: f32) -> ViewDirection {
        if velocity_x < 0.0 {
            ViewDirection::Left
        } else if velocity_x > 0.0 {
            ViewDirection::Right
        } else {
            current
        }
    }

    pub fn is_left(self) -> bool {
        self == ViewDirection::Left
    }
}

/// Jump timing windows for one controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JumpTiming {
    pub min: f32,
    pub max: f32,
}

impl Default for JumpTiming {
    fn default() -> Self {
        Self {
            min: JUMP_TIME_MIN,
            max: JUMP_TIME_MAX,
        }
    }
}
