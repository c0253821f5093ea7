// Turn-by-turn text protocol with the game server
// Snapshots arrive on stdin, commands leave on stdout

pub mod reader;
pub mod writer;

pub use reader::SnapshotReader;
pub use writer::{write_commands, TurnCommands};
