use serde::{Deserialize, Serialize};

use super::vector::Vector2D;

// Game rules, fixed by the server
pub const FIELD_SIZE: f64 = 800.0; // Width and height of the field
pub const FIELD_CENTER_Y: f64 = FIELD_SIZE / 2.0;
pub const BUMPER_FORCE_LIMIT: f64 = 8.0; // Max acceleration per turn
pub const BUMPER_SPEED_LIMIT: f64 = 24.0; // Max velocity
pub const SLED_TURN_LIMIT: f64 = 0.5; // Max turn angle per turn (radians)

// Bumper 0 looks after pucks above this line, bumper 1 below the next
const UPPER_ZONE_MAX_Y: f64 = 330.0;
const LOWER_ZONE_MIN_Y: f64 = 470.0;

/// Puck ownership color as sent by the server (we always play red)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PuckColor {
    Red,
    Blue,
    Grey,
}

impl PuckColor {
    /// Map the protocol's numeric color code
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(PuckColor::Red),
            1 => Some(PuckColor::Blue),
            2 => Some(PuckColor::Grey),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Puck {
    pub pos: Vector2D,
    pub vel: Vector2D,
    pub color: PuckColor,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bumper {
    pub pos: Vector2D,
    pub vel: Vector2D,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sled {
    pub pos: Vector2D,
    pub heading: f64,
}

/// Everything the server tells us at the start of a turn
///
/// Our two bumpers are always the first two entries of `bumpers`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub turn: u32,
    pub pucks: Vec<Puck>,
    pub bumpers: Vec<Bumper>,
    pub sleds: Vec<Sled>,
}

/// Our two bumpers: index 0 patrols the top, index 1 the bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BumperSide {
    Upper,
    Lower,
}

impl BumperSide {
    pub fn from_index(index: usize) -> Self {
        if index == 0 {
            BumperSide::Upper
        } else {
            BumperSide::Lower
        }
    }

    /// Unit vector pointing away from the center line, toward the owned edge
    pub fn up(&self) -> Vector2D {
        match self {
            BumperSide::Upper => Vector2D::new(0.0, -1.0),
            BumperSide::Lower => Vector2D::new(0.0, 1.0),
        }
    }

    /// True if a point lies in the zone this bumper is responsible for.
    /// The band between the zones belongs to nobody.
    pub fn owns(&self, pos: Vector2D) -> bool {
        match self {
            BumperSide::Upper => pos.y < UPPER_ZONE_MAX_Y,
            BumperSide::Lower => pos.y > LOWER_ZONE_MIN_Y,
        }
    }
}
