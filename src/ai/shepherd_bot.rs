// Shepherd bot - each bumper herds one grey puck at a time toward our sled's lane

use std::f64::consts::SQRT_2;

use crate::config::ShepherdConfig;
use crate::game::{Bumper, Puck, PuckColor, Snapshot, Vector2D, BUMPER_FORCE_LIMIT};
use tracing::debug;

use super::Bot;

/// Force we are willing to spend on each axis of the working frame
const ACCEL: f64 = BUMPER_FORCE_LIMIT / SQRT_2;

/// One-dimensional speed controller: the change in velocity that gets `pos`
/// to `target` as quickly as possible while still being able to stop there,
/// using at most `alim` per turn.
pub fn move_to(pos: f64, vel: f64, target: f64, alim: f64) -> f64 {
    let dist = target - pos;

    // Close enough, just stop
    if dist.abs() < 0.01 {
        return (-vel).clamp(-alim, alim);
    }

    // Fewest steps that cover the distance and stop again
    let steps = ((-1.0 + (1.0 + 8.0 * dist.abs() / alim).sqrt()) / 2.0)
        .ceil()
        .max(1.0);

    // Constant deceleration over those steps, and the speed we'd need now
    let accel = 2.0 * dist / ((steps + 1.0) * steps);
    let ideal_vel = accel * steps;

    (ideal_vel - vel).clamp(-alim, alim)
}

#[derive(Debug, Clone, Default)]
struct Herd {
    puck: Option<usize>,
    turns_left: i32,
}

/// Where bumper `index` herds pucks to
fn destination(index: usize) -> Vector2D {
    Vector2D::new(100.0, if index == 0 { 300.0 } else { 500.0 })
}

/// Bot that picks the nearest loose grey puck and pushes it at a
/// destination near the left edge, circling around it first if needed
pub struct ShepherdBot {
    name: String,
    cfg: ShepherdConfig,
    herds: [Herd; 2],
}

impl ShepherdBot {
    pub fn new(cfg: ShepherdConfig) -> Self {
        Self {
            name: "Shepherd".to_string(),
            cfg,
            herds: [Herd::default(), Herd::default()],
        }
    }

    /// Nearest grey puck worth herding for bumper `index`
    fn choose_puck(
        cfg: &ShepherdConfig,
        index: usize,
        bumper: &Bumper,
        pucks: &[Puck],
    ) -> Option<usize> {
        let dest = destination(index);
        pucks
            .iter()
            .enumerate()
            .filter(|(_, puck)| {
                puck.color == PuckColor::Grey
                    && puck.pos.distance(dest) > cfg.delivered_radius
                    && (puck.pos.x - 400.0).abs() < cfg.center_window
                    && (puck.pos.y - 400.0).abs() < cfg.center_window
            })
            .min_by(|a, b| {
                a.1.pos
                    .distance(bumper.pos)
                    .total_cmp(&b.1.pos.distance(bumper.pos))
            })
            .map(|(j, _)| j)
    }

    fn steer(&mut self, index: usize, bumper: &Bumper, pucks: &[Puck]) -> Vector2D {
        let herd = &mut self.herds[index];

        if herd.turns_left <= 0 {
            herd.puck = Self::choose_puck(&self.cfg, index, bumper, pucks);
            if let Some(j) = herd.puck {
                debug!(bumper = index, puck = j, "herding puck");
                herd.turns_left = self.cfg.hold_turns;
            }
        }

        let tpos = match herd.puck.and_then(|j| pucks.get(j)) {
            Some(puck) if herd.turns_left > 0 => puck.pos,
            _ => {
                herd.turns_left = 0;
                // Nothing to herd, just move to the right
                return Vector2D::new(BUMPER_FORCE_LIMIT, 0.0);
            }
        };

        let dist = tpos.distance(bumper.pos);
        if dist <= 0.0 {
            herd.turns_left = 0;
            return Vector2D::new(BUMPER_FORCE_LIMIT, 0.0);
        }

        let (force, contact) = herd_force(&self.cfg, bumper, tpos, dist, destination(index));
        if contact {
            // About to hit it, look for a new puck next turn
            herd.turns_left = 1;
        }
        herd.turns_left -= 1;
        force
    }
}

/// Force for a bumper herding the puck at `tpos` (at distance `dist`)
/// toward `dest`, and whether contact is imminent
fn herd_force(
    cfg: &ShepherdConfig,
    bumper: &Bumper,
    tpos: Vector2D,
    dist: f64,
    dest: Vector2D,
) -> (Vector2D, bool) {
    // Frame pointing from the bumper at the puck
    let mut a1 = (tpos - bumper.pos) * (1.0 / dist);
    let mut a2 = a1.perp();
    let mut v1 = a1.dot(bumper.vel);

    let tdir = dest - tpos;
    let dprod = a1.dot(tdir.norm());

    let f1;
    let f2;
    let mut contact = false;
    if dprod < cfg.lined_up {
        // Hold a moderate distance and circle around the short way
        f1 = if dist > cfg.orbit_far {
            ACCEL
        } else if dist < cfg.orbit_near {
            -ACCEL
        } else {
            (-v1).clamp(-ACCEL, ACCEL)
        };
        f2 = if tdir.cross(a1) > 0.0 { ACCEL } else { -ACCEL };
    } else {
        // Frame pointing from the puck at the destination
        a1 = tdir.norm();
        a2 = a1.perp();
        v1 = a1.dot(bumper.vel);
        let v2 = a2.dot(bumper.vel);

        let bdisp = bumper.pos - tpos;
        let p1 = a1.dot(bdisp);
        let p2 = a2.dot(bdisp);

        // Turns a puck needs to cover the distance, losing 1 speed per turn
        let steps = -0.5 + (0.25 + 2.0 * tdir.mag()).sqrt();
        let push_vel = steps * cfg.push_factor;

        // Match push speed along the track, line up across it
        f1 = (push_vel - v1).clamp(-ACCEL, ACCEL);
        f2 = move_to(p2, v2, 0.0, ACCEL);

        contact = p1 + v1 + f1 > cfg.contact_distance;
    }

    (a1 * f1 + a2 * f2, contact)
}

impl Default for ShepherdBot {
    fn default() -> Self {
        Self::new(ShepherdConfig::default())
    }
}

impl Bot for ShepherdBot {
    fn bumper_forces(&mut self, snapshot: &Snapshot) -> [Vector2D; 2] {
        [
            self.steer(0, &snapshot.bumpers[0], &snapshot.pucks),
            self.steer(1, &snapshot.bumpers[1], &snapshot.pucks),
        ]
    }

    fn reset(&mut self) {
        self.herds = [Herd::default(), Herd::default()];
    }

    fn name(&self) -> &str {
        &self.name
    }
}
