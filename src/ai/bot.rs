// Bot trait for bumper controllers

use crate::game::{Snapshot, Vector2D};

/// Trait for bumper bot implementations
///
/// Bots keep whatever state they need between turns and decide a force for
/// each of our two bumpers from the turn's snapshot. The snapshot always
/// holds at least our two bumpers, at indices 0 and 1.
pub trait Bot {
    /// Decide the force to apply to each of our bumpers this turn
    ///
    /// # Arguments
    /// * `snapshot` - Positions and velocities of everything on the field
    ///
    /// # Returns
    /// Forces for bumper 0 and bumper 1. The server clamps anything longer
    /// than the bumper force limit.
    fn bumper_forces(&mut self, snapshot: &Snapshot) -> [Vector2D; 2];

    /// Reset bot internal state (called when a new match starts)
    fn reset(&mut self);

    /// Bot name for logging
    fn name(&self) -> &str;
}
