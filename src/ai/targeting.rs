// Target selection for a sweeping bumper

use crate::config::TargetingConfig;
use crate::game::{Bumper, BumperSide, Puck, PuckColor, Vector2D, FIELD_CENTER_Y};

/// A strike point the bumper is committed to for a while
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Target {
    pub point: Vector2D,
    pub turns_left: u32,
}

/// How directly ahead of the bumper a puck lies, if it is worth hitting.
///
/// Only grey pucks in our zone qualify, and only if they are slow, close,
/// mostly in the sweep direction, and not hugging the top or bottom wall.
fn alignment(
    side: BumperSide,
    bumper: &Bumper,
    across: Vector2D,
    puck: &Puck,
    cfg: &TargetingConfig,
) -> Option<f64> {
    if puck.color != PuckColor::Grey || !side.owns(puck.pos) {
        return None;
    }
    if puck.vel.mag() >= cfg.max_puck_speed {
        return None;
    }
    if (puck.pos.y - FIELD_CENTER_Y).abs() >= cfg.edge_exclusion {
        return None;
    }

    let offset = puck.pos - bumper.pos;
    let dist = offset.mag();
    if dist <= 0.0 || dist >= cfg.max_distance {
        return None;
    }

    let score = offset.norm().dot(across);
    (score > cfg.min_alignment).then_some(score)
}

/// Pick the best puck to hit while sweeping in direction `across`.
///
/// Among qualifying pucks the one most directly ahead wins. The strike point
/// sits behind the puck (against the sweep) and toward our edge, so the hit
/// knocks it back toward the center line.
pub fn select_target(
    side: BumperSide,
    bumper: &Bumper,
    across: Vector2D,
    pucks: &[Puck],
    cfg: &TargetingConfig,
) -> Option<Target> {
    let best = pucks
        .iter()
        .filter_map(|puck| alignment(side, bumper, across, puck, cfg).map(|score| (score, puck)))
        .max_by(|a, b| a.0.total_cmp(&b.0))?;

    let puck = best.1;
    Some(Target {
        point: puck.pos - across * cfg.back_offset + side.up() * cfg.up_offset,
        turns_left: cfg.hold_turns,
    })
}
