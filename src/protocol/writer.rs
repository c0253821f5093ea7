// Per-turn command output

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;

use crate::game::Vector2D;

/// Everything we send back for one turn
#[derive(Debug, Clone, Serialize)]
pub struct TurnCommands {
    pub bumper_forces: [Vector2D; 2],
    pub sled_turn: f64,
}

/// Write one turn's commands as a single line and flush it.
/// The server is waiting on the line, so it must not sit in a buffer.
pub fn write_commands<W: Write>(out: &mut W, commands: &TurnCommands) -> Result<()> {
    let [a, b] = commands.bumper_forces;
    writeln!(
        out,
        "{:.4} {:.4} {:.4} {:.4} {:.6}",
        a.x, a.y, b.x, b.y, commands.sled_turn
    )
    .context("writing commands")?;
    out.flush().context("flushing commands")?;
    Ok(())
}
