// AI module for our bumpers and sled

mod bot;
mod intercept;
mod patrol;
mod shepherd_bot;
mod sled;
mod sweeper_bot;
mod targeting;

pub use bot::Bot;
pub use shepherd_bot::ShepherdBot;
pub use sled::SledPilot;
pub use sweeper_bot::SweeperBot;

use crate::config::{BotChoice, Config};

/// Create a bumper bot from the configured choice
pub fn create_bot(choice: BotChoice, config: &Config) -> Box<dyn Bot> {
    match choice {
        BotChoice::Sweeper => Box::new(SweeperBot::new(
            config.patrol.clone(),
            config.targeting.clone(),
        )),
        BotChoice::Shepherd => Box::new(ShepherdBot::new(config.shepherd.clone())),
    }
}
