// Patrol phases for a sweeping bumper

use crate::config::PatrolConfig;
use crate::game::{Vector2D, FIELD_CENTER_Y};

/// Where a bumper is in its patrol loop
///
/// A bumper first runs out to its edge, then sweeps back and forth across
/// the field. Sweeping left into the home corner near the center line sends
/// it back out to the edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    MoveToEdge,
    SweepRight,
    SweepLeft,
}

impl Phase {
    /// Single transition out of this phase for a bumper at `pos`, if any
    pub fn transition(self, pos: Vector2D, cfg: &PatrolConfig) -> Option<Phase> {
        let from_center = (pos.y - FIELD_CENTER_Y).abs();
        match self {
            // The edge trigger is inclusive: exactly at the trigger counts as arrived
            Phase::MoveToEdge => (from_center >= cfg.edge_trigger).then_some(Phase::SweepRight),
            Phase::SweepRight => (pos.x > cfg.right_turn_x).then_some(Phase::SweepLeft),
            Phase::SweepLeft => {
                if pos.x >= cfg.left_turn_x {
                    None
                } else if from_center < cfg.home_band {
                    Some(Phase::MoveToEdge)
                } else {
                    Some(Phase::SweepRight)
                }
            }
        }
    }

    /// Apply transitions until none fires.
    ///
    /// The thresholds make a cycle impossible, so at most MoveToEdge →
    /// SweepRight → SweepLeft happens within one turn. Returns every phase
    /// entered, in order.
    pub fn settle(self, pos: Vector2D, cfg: &PatrolConfig) -> (Phase, Vec<Phase>) {
        let mut phase = self;
        let mut entered = Vec::new();
        // Bounded in case a config makes the thresholds overlap
        for _ in 0..3 {
            match phase.transition(pos, cfg) {
                Some(next) => {
                    phase = next;
                    entered.push(next);
                }
                None => break,
            }
        }
        (phase, entered)
    }

    /// Horizontal sweep direction, or None while heading for the edge
    pub fn across(self) -> Option<Vector2D> {
        match self {
            Phase::MoveToEdge => None,
            Phase::SweepRight => Some(Vector2D::new(1.0, 0.0)),
            Phase::SweepLeft => Some(Vector2D::new(-1.0, 0.0)),
        }
    }
}
