// Sled pilots - fixed looping paths, a pure function of the turn number

use std::f64::consts::PI;

use crate::config::{SledChoice, SledConfig};
use crate::game::SLED_TURN_LIMIT;

/// Steers the sled along a fixed looping path
#[derive(Debug, Clone)]
pub struct SledPilot {
    path: SledChoice,
    cfg: SledConfig,
}

impl SledPilot {
    pub fn new(path: SledChoice, cfg: SledConfig) -> Self {
        Self { path, cfg }
    }

    /// Turn angle for this turn, within the sled's turn limit
    pub fn turn_angle(&self, turn: u32) -> f64 {
        let angle = match self.path {
            SledChoice::Marching => self.marching(turn),
            SledChoice::FigureEight => self.figure_eight(turn),
        };
        angle.clamp(-SLED_TURN_LIMIT, SLED_TURN_LIMIT)
    }

    fn loop_rate(&self) -> f64 {
        2.0 * PI / self.cfg.loop_size.max(1) as f64
    }

    /// Wiggle off-center, then loop and step ahead, marching across the field
    fn marching(&self, turn: u32) -> f64 {
        let startup = self.cfg.startup;
        if turn < startup {
            // Swerve one way for the first half of the startup, then back
            return if turn < startup / 2 { -0.2 } else { 0.2 };
        }

        let cycle = self.cfg.loop_size.saturating_add(self.cfg.loop_gap);
        if cycle == 0 || (turn - startup) % cycle < self.cfg.loop_size {
            self.loop_rate()
        } else {
            // Move the loop ahead
            0.0
        }
    }

    /// Alternate loop direction every full loop
    fn figure_eight(&self, turn: u32) -> f64 {
        let size = self.cfg.loop_size.max(1);
        if turn % size.saturating_mul(2) < size {
            self.loop_rate()
        } else {
            -self.loop_rate()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marching() -> SledPilot {
        SledPilot::new(SledChoice::Marching, SledConfig::default())
    }

    #[test]
    fn test_marching_startup_wiggle() {
        let pilot = marching();
        for turn in 0..6 {
            assert_eq!(pilot.turn_angle(turn), -0.2);
        }
        for turn in 6..12 {
            assert_eq!(pilot.turn_angle(turn), 0.2);
        }
    }

    #[test]
    fn test_marching_loops_then_steps_ahead() {
        let pilot = marching();
        let rate = 2.0 * PI / 40.0;
        assert_eq!(pilot.turn_angle(12), rate);
        assert_eq!(pilot.turn_angle(12 + 39), rate);
        for turn in 12 + 40..12 + 45 {
            assert_eq!(pilot.turn_angle(turn), 0.0);
        }
        assert_eq!(pilot.turn_angle(12 + 45), rate);
    }

    #[test]
    fn test_full_loop_turns_all_the_way_round() {
        let pilot = marching();
        let total: f64 = (12..12 + 40).map(|t| pilot.turn_angle(t)).sum();
        assert!((total - 2.0 * PI).abs() < 1e-9);
    }

    #[test]
    fn test_figure_eight_alternates() {
        let pilot = SledPilot::new(SledChoice::FigureEight, SledConfig::default());
        let rate = 2.0 * PI / 40.0;
        assert_eq!(pilot.turn_angle(0), rate);
        assert_eq!(pilot.turn_angle(39), rate);
        assert_eq!(pilot.turn_angle(40), -rate);
        assert_eq!(pilot.turn_angle(79), -rate);
        assert_eq!(pilot.turn_angle(80), rate);
    }

    #[test]
    fn test_tight_loops_are_clamped() {
        let pilot = SledPilot::new(
            SledChoice::FigureEight,
            SledConfig {
                loop_size: 4,
                ..SledConfig::default()
            },
        );
        assert_eq!(pilot.turn_angle(0), SLED_TURN_LIMIT);
        assert_eq!(pilot.turn_angle(4), -SLED_TURN_LIMIT);
    }

    #[test]
    fn test_huge_loop_settings_do_not_overflow() {
        let cfg = SledConfig {
            loop_size: u32::MAX - 1,
            loop_gap: 10,
            startup: 0,
        };
        let eight = SledPilot::new(SledChoice::FigureEight, cfg.clone());
        assert!(eight.turn_angle(1_000).is_finite());
        assert!(eight.turn_angle(u32::MAX).is_finite());

        let marching = SledPilot::new(SledChoice::Marching, cfg);
        assert!(marching.turn_angle(1_000) > 0.0);
        assert!(marching.turn_angle(u32::MAX).is_finite());
    }
}
