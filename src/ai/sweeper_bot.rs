// Sweeper bot - bumpers patrol their half and knock pucks toward the middle

use crate::config::{PatrolConfig, TargetingConfig};
use crate::game::{Bumper, BumperSide, Puck, Snapshot, Vector2D, BUMPER_FORCE_LIMIT};
use tracing::{debug, trace};

use super::intercept::run_to;
use super::patrol::Phase;
use super::targeting::{select_target, Target};
use super::Bot;

/// Per-bumper patrol state, carried from turn to turn
#[derive(Debug, Clone)]
pub struct BumperController {
    side: BumperSide,
    index: usize,
    phase: Phase,
    target: Option<Target>,
}

impl BumperController {
    pub fn new(index: usize) -> Self {
        Self {
            side: BumperSide::from_index(index),
            index,
            phase: Phase::MoveToEdge,
            target: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn target(&self) -> Option<Target> {
        self.target
    }

    /// Decide this turn's force for our bumper.
    ///
    /// Updates the patrol phase from the bumper position, then either heads
    /// for the edge or sweeps, chasing a strike point when one is live.
    pub fn steer(
        &mut self,
        bumper: &Bumper,
        pucks: &[Puck],
        patrol: &PatrolConfig,
        targeting: &TargetingConfig,
    ) -> Vector2D {
        let started = self.phase;
        let (phase, entered) = self.phase.settle(bumper.pos, patrol);
        if started == Phase::MoveToEdge && entered.first() == Some(&Phase::SweepRight) {
            // Fresh sweep, forget anything chased before heading out
            self.target = None;
        }
        for next in &entered {
            debug!(bumper = self.index, phase = ?next, "phase change");
        }
        self.phase = phase;

        let up = self.side.up();
        let Some(across) = self.phase.across() else {
            if started != Phase::MoveToEdge {
                // Just got home from a sweep; the climb starts next turn
                return Vector2D::ZERO;
            }
            // Scoot a little sideways so we never sit dead on a symmetric line
            return up * BUMPER_FORCE_LIMIT + Vector2D::new(patrol.edge_nudge, 0.0);
        };

        if self.target.is_none() {
            self.target = select_target(self.side, bumper, across, pucks, targeting);
            if let Some(target) = &self.target {
                debug!(
                    bumper = self.index,
                    x = target.point.x,
                    y = target.point.y,
                    "new target"
                );
            }
        }

        match self.target.as_mut() {
            Some(target) => {
                let result = run_to(
                    bumper.pos,
                    bumper.vel,
                    target.point,
                    BUMPER_FORCE_LIMIT,
                    targeting.arrival_epsilon,
                );
                if result.arrives {
                    debug!(bumper = self.index, "reached target");
                    self.target = None;
                } else {
                    target.turns_left = target.turns_left.saturating_sub(1);
                    if target.turns_left == 0 {
                        debug!(bumper = self.index, "gave up on target");
                        self.target = None;
                    }
                }
                result.force
            }
            // Nothing to hit: keep crossing, drifting toward the center line
            None => (across - up * patrol.center_bias).norm() * BUMPER_FORCE_LIMIT,
        }
    }
}

/// Bot running one patrol controller per bumper
pub struct SweeperBot {
    name: String,
    patrol: PatrolConfig,
    targeting: TargetingConfig,
    controllers: [BumperController; 2],
}

impl SweeperBot {
    pub fn new(patrol: PatrolConfig, targeting: TargetingConfig) -> Self {
        Self {
            name: "Sweeper".to_string(),
            patrol,
            targeting,
            controllers: [BumperController::new(0), BumperController::new(1)],
        }
    }
}

impl Bot for SweeperBot {
    fn bumper_forces(&mut self, snapshot: &Snapshot) -> [Vector2D; 2] {
        let mut forces = [Vector2D::ZERO; 2];
        for (i, controller) in self.controllers.iter_mut().enumerate() {
            forces[i] = controller.steer(
                &snapshot.bumpers[i],
                &snapshot.pucks,
                &self.patrol,
                &self.targeting,
            );
            trace!(
                bumper = i,
                phase = ?controller.phase(),
                target = ?controller.target().map(|t| t.point),
                "bumper state"
            );
        }
        forces
    }

    fn reset(&mut self) {
        self.controllers = [BumperController::new(0), BumperController::new(1)];
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::physics::advance;
    use crate::game::PuckColor;

    fn bumper_at(x: f64, y: f64) -> Bumper {
        Bumper {
            pos: Vector2D::new(x, y),
            vel: Vector2D::ZERO,
        }
    }

    fn grey(x: f64, y: f64) -> Puck {
        Puck {
            pos: Vector2D::new(x, y),
            vel: Vector2D::ZERO,
            color: PuckColor::Grey,
        }
    }

    fn sweeping(index: usize, phase: Phase) -> BumperController {
        let mut controller = BumperController::new(index);
        controller.phase = phase;
        controller
    }

    #[test]
    fn test_starts_heading_for_edge() {
        let mut controller = BumperController::new(0);
        assert_eq!(controller.phase(), Phase::MoveToEdge);

        let force = controller.steer(
            &bumper_at(400.0, 300.0),
            &[],
            &PatrolConfig::default(),
            &TargetingConfig::default(),
        );
        assert_eq!(force, Vector2D::new(0.01, -BUMPER_FORCE_LIMIT));

        let mut lower = BumperController::new(1);
        let force = lower.steer(
            &bumper_at(400.0, 500.0),
            &[],
            &PatrolConfig::default(),
            &TargetingConfig::default(),
        );
        assert_eq!(force, Vector2D::new(0.01, BUMPER_FORCE_LIMIT));
    }

    #[test]
    fn test_reaching_edge_starts_sweep() {
        let mut controller = BumperController::new(1);
        let force = controller.steer(
            &bumper_at(400.0, 780.0),
            &[],
            &PatrolConfig::default(),
            &TargetingConfig::default(),
        );
        assert_eq!(controller.phase(), Phase::SweepRight);
        // Sweeping right, angled back up toward the center line
        assert!(force.x > 7.9);
        assert!(force.y < 0.0);
    }

    #[test]
    fn test_sweep_force_without_target_is_stable() {
        let mut controller = sweeping(0, Phase::SweepRight);
        let bumper = bumper_at(300.0, 30.0);
        let patrol = PatrolConfig::default();
        let targeting = TargetingConfig::default();

        let first = controller.steer(&bumper, &[], &patrol, &targeting);
        for _ in 0..10 {
            assert_eq!(controller.steer(&bumper, &[], &patrol, &targeting), first);
        }
        assert!(controller.target().is_none());

        let expected = Vector2D::new(1.0, 0.05).norm() * BUMPER_FORCE_LIMIT;
        assert!((first - expected).mag() < 1e-12);
        assert!((first.mag() - BUMPER_FORCE_LIMIT).abs() < 1e-12);
    }

    #[test]
    fn test_picks_target_and_chases_it() {
        let mut controller = sweeping(0, Phase::SweepRight);
        let bumper = bumper_at(400.0, 100.0);
        let pucks = [grey(450.0, 150.0)];

        let force = controller.steer(
            &bumper,
            &pucks,
            &PatrolConfig::default(),
            &TargetingConfig::default(),
        );

        let target = controller.target().unwrap();
        assert!((target.point.x - 442.0).abs() < 1e-9);
        assert!((target.point.y - 139.0).abs() < 1e-9);
        // Chased this turn already
        assert_eq!(target.turns_left, 19);

        // From rest there is no drift to cancel, just a unit push at the strike point
        let toward = (target.point - bumper.pos).norm();
        assert!((force - toward).mag() < 1e-9);
        assert!((force.mag() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_live_target_is_kept_while_chasing() {
        let mut controller = sweeping(0, Phase::SweepRight);
        let patrol = PatrolConfig::default();
        let targeting = TargetingConfig::default();
        controller.steer(&bumper_at(400.0, 100.0), &[grey(450.0, 150.0)], &patrol, &targeting);
        let first = controller.target().unwrap();

        // A better puck shows up, but we stay committed
        controller.steer(&bumper_at(401.0, 101.0), &[grey(480.0, 101.0)], &patrol, &targeting);
        let second = controller.target().unwrap();
        assert_eq!(second.point, first.point);
        assert_eq!(second.turns_left, first.turns_left - 1);
    }

    #[test]
    fn test_gives_up_after_hold_expires() {
        let mut controller = sweeping(0, Phase::SweepRight);
        let patrol = PatrolConfig::default();
        let targeting = TargetingConfig::default();
        let bumper = bumper_at(400.0, 100.0);

        controller.steer(&bumper, &[grey(450.0, 150.0)], &patrol, &targeting);
        // Bumper never moves, so it never arrives
        for _ in 1..targeting.hold_turns {
            assert!(controller.target().is_some());
            controller.steer(&bumper, &[], &patrol, &targeting);
        }
        assert!(controller.target().is_none());
    }

    #[test]
    fn test_arrival_clears_target() {
        let mut controller = sweeping(0, Phase::SweepRight);
        controller.target = Some(Target {
            point: Vector2D::new(206.0, 100.0),
            turns_left: 5,
        });
        let bumper = Bumper {
            pos: Vector2D::new(200.0, 100.0),
            vel: Vector2D::new(10.0, 0.0),
        };
        controller.steer(&bumper, &[], &PatrolConfig::default(), &TargetingConfig::default());
        assert!(controller.target().is_none());
    }

    #[test]
    fn test_new_sweep_forgets_old_target() {
        let mut controller = BumperController::new(0);
        controller.target = Some(Target {
            point: Vector2D::new(600.0, 300.0),
            turns_left: 7,
        });
        controller.steer(
            &bumper_at(100.0, 10.0),
            &[],
            &PatrolConfig::default(),
            &TargetingConfig::default(),
        );
        assert_eq!(controller.phase(), Phase::SweepRight);
        assert!(controller.target().is_none());
    }

    #[test]
    fn test_sweep_left_home_and_bounce() {
        let patrol = PatrolConfig::default();
        let targeting = TargetingConfig::default();

        let mut home = sweeping(0, Phase::SweepLeft);
        let force = home.steer(&bumper_at(40.0, 405.0), &[], &patrol, &targeting);
        assert_eq!(home.phase(), Phase::MoveToEdge);
        // The turn we get home is spent idle, the climb starts on the next one
        assert_eq!(force, Vector2D::ZERO);
        let force = home.steer(&bumper_at(40.0, 405.0), &[], &patrol, &targeting);
        assert_eq!(force, Vector2D::new(0.01, -BUMPER_FORCE_LIMIT));

        let mut bounce = sweeping(0, Phase::SweepLeft);
        bounce.steer(&bumper_at(40.0, 200.0), &[], &patrol, &targeting);
        assert_eq!(bounce.phase(), Phase::SweepRight);
    }

    #[test]
    fn test_patrol_cycles_over_empty_field() {
        // Fly bumper 0 around with its own forces and watch the phases go by
        let mut controller = BumperController::new(0);
        let mut bumper = bumper_at(60.0, 390.0);
        let patrol = PatrolConfig::default();
        let targeting = TargetingConfig::default();

        let mut seen = vec![controller.phase()];
        for _ in 0..400 {
            let force = controller.steer(&bumper, &[], &patrol, &targeting);
            advance(&mut bumper, force);
            // Stay on the field like the walls would make us
            bumper.pos.x = bumper.pos.x.clamp(0.0, 800.0);
            bumper.pos.y = bumper.pos.y.clamp(0.0, 800.0);
            if seen.last() != Some(&controller.phase()) {
                seen.push(controller.phase());
            }
        }

        assert!(seen.len() >= 3);
        assert_eq!(
            &seen[..3],
            &[Phase::MoveToEdge, Phase::SweepRight, Phase::SweepLeft]
        );
    }

    #[test]
    fn test_bot_drives_both_bumpers() {
        let mut bot = SweeperBot::new(PatrolConfig::default(), TargetingConfig::default());
        let snapshot = Snapshot {
            turn: 0,
            pucks: vec![],
            bumpers: vec![bumper_at(100.0, 300.0), bumper_at(100.0, 500.0)],
            sleds: vec![],
        };
        let forces = bot.bumper_forces(&snapshot);
        assert!(forces[0].y < 0.0);
        assert!(forces[1].y > 0.0);
        assert_eq!(bot.name(), "Sweeper");

        bot.reset();
        assert_eq!(bot.controllers[0].phase(), Phase::MoveToEdge);
    }
}
