// Turn loop: read a snapshot, decide, answer, repeat until the game ends

use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::{debug, info};

use crate::ai::{Bot, SledPilot};
use crate::game::Snapshot;
use crate::protocol::{write_commands, SnapshotReader, TurnCommands};
use crate::record::TurnRecorder;

/// Our side of the match: a bumper bot plus the sled's path
pub struct Player {
    bot: Box<dyn Bot>,
    sled: SledPilot,
}

impl Player {
    pub fn new(bot: Box<dyn Bot>, sled: SledPilot) -> Self {
        Self { bot, sled }
    }

    pub fn play_turn(&mut self, snapshot: &Snapshot) -> TurnCommands {
        TurnCommands {
            bumper_forces: self.bot.bumper_forces(snapshot),
            sled_turn: self.sled.turn_angle(snapshot.turn),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSummary {
    pub turns_played: u32,
}

/// Play a whole match over the given streams
pub fn run_match<R, W, L>(
    input: R,
    mut output: W,
    player: &mut Player,
    mut recorder: Option<&mut TurnRecorder<L>>,
) -> Result<MatchSummary>
where
    R: BufRead,
    W: Write,
    L: Write,
{
    player.bot.reset();
    info!(bot = player.bot.name(), "match started");

    let mut reader = SnapshotReader::new(input);
    let mut turns_played = 0;
    while let Some(snapshot) = reader.next_snapshot()? {
        let commands = player.play_turn(&snapshot);
        write_commands(&mut output, &commands)?;
        if let Some(recorder) = recorder.as_deref_mut() {
            recorder.record(&snapshot, &commands)?;
        }
        debug!(
            turn = snapshot.turn,
            pucks = snapshot.pucks.len(),
            "turn played"
        );
        turns_played += 1;
    }

    Ok(MatchSummary { turns_played })
}
