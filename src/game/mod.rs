pub mod physics;
pub mod state;
pub mod vector;

pub use state::{
    Bumper, BumperSide, Puck, PuckColor, Sled, Snapshot, BUMPER_FORCE_LIMIT, FIELD_CENTER_Y,
    SLED_TURN_LIMIT,
};
pub use vector::Vector2D;
