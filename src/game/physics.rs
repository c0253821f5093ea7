use super::state::BUMPER_SPEED_LIMIT;
#[cfg(test)]
use super::state::{Bumper, BUMPER_FORCE_LIMIT};
use super::vector::Vector2D;

/// Velocity a bumper will have after applying `force` for one turn.
/// The server caps bumper speed, so we do too.
pub fn next_velocity(vel: Vector2D, force: Vector2D) -> Vector2D {
    (vel + force).limit(BUMPER_SPEED_LIMIT)
}

/// Move a bumper one turn under `force`, ignoring collisions and walls
#[cfg(test)]
pub fn advance(bumper: &mut Bumper, force: Vector2D) {
    bumper.vel = next_velocity(bumper.vel, force.limit(BUMPER_FORCE_LIMIT));
    bumper.pos = bumper.pos + bumper.vel;
}
