// Turn snapshot parsing
//
// The server sends whitespace separated tokens; line breaks carry no meaning.
//
//   turn
//   npucks   then per puck:   x y vx vy color
//   nbumpers then per bumper: x y vx vy
//   nsleds   then per sled:   x y heading ntrail (x y)*ntrail

use anyhow::{anyhow, ensure, Context, Result};
use std::collections::VecDeque;
use std::io::BufRead;
use std::str::FromStr;

use crate::game::{Bumper, Puck, PuckColor, Sled, Snapshot, Vector2D};

/// Reads one turn snapshot at a time from the server
pub struct SnapshotReader<R> {
    input: R,
    tokens: VecDeque<String>,
}

impl<R: BufRead> SnapshotReader<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            tokens: VecDeque::new(),
        }
    }

    /// Next token, or None at end of input
    fn next_token(&mut self) -> Result<Option<String>> {
        while self.tokens.is_empty() {
            let mut line = String::new();
            if self.input.read_line(&mut line).context("reading from server")? == 0 {
                return Ok(None);
            }
            self.tokens
                .extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.tokens.pop_front())
    }

    fn expect<T>(&mut self, what: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        let token = self
            .next_token()?
            .ok_or_else(|| anyhow!("input ended while reading {what}"))?;
        token
            .parse()
            .with_context(|| format!("invalid {what} `{token}`"))
    }

    fn expect_vec(&mut self, what: &str) -> Result<Vector2D> {
        let x = self.expect(what)?;
        let y = self.expect(what)?;
        Ok(Vector2D::new(x, y))
    }

    /// Read the next turn.
    ///
    /// Returns None when the server signals the end of the game with a
    /// negative turn number, or closes the stream between turns.
    pub fn next_snapshot(&mut self) -> Result<Option<Snapshot>> {
        let Some(token) = self.next_token()? else {
            return Ok(None);
        };
        let turn: i64 = token
            .parse()
            .with_context(|| format!("invalid turn number `{token}`"))?;
        if turn < 0 {
            return Ok(None);
        }
        let turn = u32::try_from(turn).with_context(|| format!("turn number {turn} too large"))?;

        self.read_body(turn)
            .with_context(|| format!("malformed snapshot for turn {turn}"))
            .map(Some)
    }

    fn read_body(&mut self, turn: u32) -> Result<Snapshot> {
        let count: usize = self.expect("puck count")?;
        let mut pucks = Vec::with_capacity(count);
        for _ in 0..count {
            let pos = self.expect_vec("puck position")?;
            let vel = self.expect_vec("puck velocity")?;
            let code: i64 = self.expect("puck color")?;
            let color =
                PuckColor::from_code(code).ok_or_else(|| anyhow!("unknown puck color {code}"))?;
            pucks.push(Puck { pos, vel, color });
        }

        let count: usize = self.expect("bumper count")?;
        ensure!(count >= 2, "expected at least 2 bumpers, got {count}");
        let mut bumpers = Vec::with_capacity(count);
        for _ in 0..count {
            let pos = self.expect_vec("bumper position")?;
            let vel = self.expect_vec("bumper velocity")?;
            bumpers.push(Bumper { pos, vel });
        }

        let count: usize = self.expect("sled count")?;
        let mut sleds = Vec::with_capacity(count);
        for _ in 0..count {
            let pos = self.expect_vec("sled position")?;
            let heading = self.expect("sled heading")?;

            // Trail history is not used
            let trail: usize = self.expect("trail length")?;
            for _ in 0..trail {
                self.expect_vec("trail point")?;
            }
            sleds.push(Sled { pos, heading });
        }

        Ok(Snapshot {
            turn,
            pucks,
            bumpers,
            sleds,
        })
    }
}
