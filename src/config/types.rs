// Capture player configuration types
// Every default reproduces the tuning the player shipped with

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub ai: AIConfig,
    #[serde(default)]
    pub patrol: PatrolConfig,
    #[serde(default)]
    pub targeting: TargetingConfig,
    #[serde(default)]
    pub shepherd: ShepherdConfig,
    #[serde(default)]
    pub sled: SledConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Which bumper bot drives the bumpers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum BotChoice {
    Sweeper,
    Shepherd,
}

/// Which looping path the sled follows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum SledChoice {
    Marching,
    FigureEight,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AIConfig {
    pub bumper_bot: BotChoice,
    pub sled_path: SledChoice,
}

impl Default for AIConfig {
    fn default() -> Self {
        Self {
            bumper_bot: BotChoice::Sweeper,
            sled_path: SledChoice::Marching,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PatrolConfig {
    // Distance from the center line that counts as "at the edge"
    pub edge_trigger: f64,

    // Sweep turns around past these x positions
    pub right_turn_x: f64,
    pub left_turn_x: f64,

    // Near the left edge, a bumper this close to the center line heads back out
    pub home_band: f64,

    // How much a sweeping bumper angles back toward the center line
    pub center_bias: f64,

    // Sideways push while heading for the edge
    pub edge_nudge: f64,
}

impl Default for PatrolConfig {
    fn default() -> Self {
        Self {
            edge_trigger: 380.0,
            right_turn_x: 750.0,
            left_turn_x: 50.0,
            home_band: 50.0,
            center_bias: 0.05,
            edge_nudge: 0.01,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TargetingConfig {
    // Turns a bumper chases a target before giving up
    pub hold_turns: u32,

    // Candidate filters
    pub max_puck_speed: f64,
    pub max_distance: f64,
    pub min_alignment: f64,
    pub edge_exclusion: f64,

    // Strike point offsets from the puck center
    pub back_offset: f64,
    pub up_offset: f64,

    // How close the bumper's path must pass to count as a hit
    pub arrival_epsilon: f64,
}

impl Default for TargetingConfig {
    fn default() -> Self {
        Self {
            hold_turns: 20,
            max_puck_speed: 1.0,
            max_distance: 150.0,
            min_alignment: 0.6,
            edge_exclusion: 360.0,
            back_offset: 8.0,
            up_offset: 11.0,
            arrival_epsilon: 0.1,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ShepherdConfig {
    // Turns spent on one puck before picking again
    pub hold_turns: i32,

    // Pucks this close to the destination count as delivered
    pub delivered_radius: f64,

    // Ignore pucks this far or more from the field center on either axis
    pub center_window: f64,

    // Orbit distance band while lining up behind a puck
    pub orbit_far: f64,
    pub orbit_near: f64,

    // How well lined up we must be before pushing
    pub lined_up: f64,

    // Fraction of the ideal launch speed to hit with
    pub push_factor: f64,

    // Along-track distance behind the puck at which contact is imminent
    pub contact_distance: f64,
}

impl Default for ShepherdConfig {
    fn default() -> Self {
        Self {
            hold_turns: 20,
            delivered_radius: 120.0,
            center_window: 340.0,
            orbit_far: 80.0,
            orbit_near: 40.0,
            lined_up: 0.8,
            push_factor: 0.7,
            contact_distance: -13.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SledConfig {
    // Turns per full loop
    pub loop_size: u32,

    // Straight turns between loops
    pub loop_gap: u32,

    // Opening wiggle before the first loop
    pub startup: u32,
}

impl Default for SledConfig {
    fn default() -> Self {
        Self {
            loop_size: 40,
            loop_gap: 5,
            startup: 12,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    // "error", "warn", "info", "debug" or "trace"
    pub level: String,

    // Log to this file instead of stderr
    pub file: Option<std::path::PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            file: None,
        }
    }
}
