//! Player state read by the dispatcher

use serde::{Deserialize, Serialize};

use crate::map::Position;
use crate::triggers::TravelMode;

/// The player's tile and travel mode for the current frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub position: Position,
    pub mode: TravelMode,
}

impl PlayerState {
    /// A player on foot
    pub fn walking(x: i32, y: i32) -> Self {
        Self {
            position: Position::new(x, y),
            mode: TravelMode::Walk,
        }
    }

    /// Change the travel mode
    pub fn with_mode(mut self, mode: TravelMode) -> Self {
        self.mode = mode;
        self
    }

    /// The tile the player stands on
    pub fn here(&self) -> Position {
        self.position
    }
}
