// Force shaping to drive a bumper through a point

use crate::game::physics::next_velocity;
use crate::game::Vector2D;

/// Result of one interception step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interception {
    /// Force to apply this turn, never longer than the budget
    pub force: Vector2D,
    /// True when this turn's travel passes within epsilon of the target
    pub arrives: bool,
}

/// Compute a force that sends a bumper at `pos` moving with `vel` through
/// `target`.
///
/// Sideways drift relative to the target direction is cancelled first, then
/// a unit push straight at the target is added, shortened if less than that
/// is left of `budget`. The bumper's path
/// for this turn is then the segment from `pos` to `pos + nvel`, and we
/// report arrival if that segment passes within `epsilon` of the target.
///
/// `target` must differ from `pos`: a zero-length direction has no meaning
/// and yields a non-finite force.
pub fn run_to(
    pos: Vector2D,
    vel: Vector2D,
    target: Vector2D,
    budget: f64,
    epsilon: f64,
) -> Interception {
    debug_assert!(target != pos, "run_to target coincides with position");

    let offset = target - pos;
    let direction = offset.norm();
    let perp = direction.perp();

    // Kill lateral drift first, then nudge toward the target with what's left
    let lateral = (-(perp.dot(vel)) * perp).limit(budget);
    let remaining = (budget - lateral.mag()).max(0.0);
    let force = lateral + direction.limit(remaining);

    // Closest point to the target along this turn's straight-line travel
    let nvel = next_velocity(vel, force);
    let speed_sq = nvel.squared_mag();
    let t = if speed_sq > 0.0 {
        (offset.dot(nvel) / speed_sq).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let closest = pos + t * nvel;

    Interception {
        force,
        arrives: closest.distance(target) < epsilon,
    }
}
