// Turn recorder - one JSON object per turn for reviewing a match afterwards

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::game::Snapshot;
use crate::protocol::TurnCommands;

#[derive(Debug, Serialize)]
pub struct TurnRecord<'a> {
    pub turn: u32,
    pub snapshot: &'a Snapshot,
    pub commands: &'a TurnCommands,
}

/// Appends turn records to a JSON-lines sink
pub struct TurnRecorder<W: Write> {
    out: W,
}

impl TurnRecorder<BufWriter<File>> {
    /// Record to a file, appending if it already exists
    pub fn create(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating record directory {}", parent.display()))?;
        }
        let file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening record file {}", path.display()))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> TurnRecorder<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn record(&mut self, snapshot: &Snapshot, commands: &TurnCommands) -> Result<()> {
        let record = TurnRecord {
            turn: snapshot.turn,
            snapshot,
            commands,
        };
        serde_json::to_writer(&mut self.out, &record).context("encoding turn record")?;
        self.out.write_all(b"\n").context("writing turn record")?;
        Ok(())
    }

    pub fn finish(mut self) -> Result<W> {
        self.out.flush().context("flushing turn records")?;
        Ok(self.out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Bumper, Puck, PuckColor, Vector2D};

    #[test]
    fn test_one_json_line_per_turn() {
        let snapshot = Snapshot {
            turn: 3,
            pucks: vec![Puck {
                pos: Vector2D::new(1.0, 2.0),
                vel: Vector2D::ZERO,
                color: PuckColor::Grey,
            }],
            bumpers: vec![
                Bumper {
                    pos: Vector2D::new(10.0, 20.0),
                    vel: Vector2D::ZERO,
                },
                Bumper {
                    pos: Vector2D::new(10.0, 700.0),
                    vel: Vector2D::ZERO,
                },
            ],
            sleds: vec![],
        };
        let commands = TurnCommands {
            bumper_forces: [Vector2D::new(8.0, 0.0), Vector2D::new(0.0, 8.0)],
            sled_turn: 0.1,
        };

        let mut recorder = TurnRecorder::new(Vec::new());
        recorder.record(&snapshot, &commands).unwrap();
        recorder.record(&snapshot, &commands).unwrap();
        let bytes = recorder.finish().unwrap();
        let text = String::from_utf8(bytes).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);

        let value: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(value["turn"], 3);
        assert_eq!(value["snapshot"]["pucks"][0]["color"], "grey");
        assert_eq!(value["commands"]["bumper_forces"][1]["y"], 8.0);
        assert_eq!(value["commands"]["sled_turn"], 0.1);
    }
}
