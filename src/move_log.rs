//! Plain-text move logs, one file per round.
//!
//! Logs live under a root directory as `game<N>/log.txt`, where `N` is one
//! past the highest session number already on disk.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, info};

use crate::game::Outcome;
use crate::player::Player;
use crate::tic_tac_toe::{Board, Position};

const SESSION_PREFIX: &str = "game";
const LOG_FILE: &str = "log.txt";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn timestamp() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Where round logs go. The game loop asks for one writer per round and
/// never touches the filesystem itself.
pub trait LogStore {
    type Writer: Write;

    fn open_round(&mut self) -> Result<GameLog<Self::Writer>>;
}

impl<S: LogStore + ?Sized> LogStore for &mut S {
    type Writer = S::Writer;

    fn open_round(&mut self) -> Result<GameLog<S::Writer>> {
        (**self).open_round()
    }
}

pub struct GameLog<W: Write> {
    game_number: u32,
    writer: W,
}

impl<W: Write> GameLog<W> {
    pub fn new(game_number: u32, writer: W) -> Self {
        Self {
            game_number,
            writer,
        }
    }

    pub fn game_number(&self) -> u32 {
        self.game_number
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    pub fn start(&mut self, first: &Player, second: &Player) -> Result<()> {
        writeln!(self.writer, "Game {} Log", self.game_number)?;
        writeln!(self.writer, "Started: {}\n", timestamp())?;
        writeln!(self.writer, "Players:")?;
        writeln!(self.writer, "- {} ({})", first.name(), first.marker())?;
        writeln!(self.writer, "- {} ({})\n", second.name(), second.marker())?;
        writeln!(self.writer, "First move: {}\n", first.name())?;
        writeln!(self.writer, "Moves:")?;
        self.writer.flush()?;
        Ok(())
    }

    pub fn record_move(
        &mut self,
        move_number: usize,
        player: &Player,
        position: Position,
        board: &Board,
    ) -> Result<()> {
        writeln!(
            self.writer,
            "Move {}: {} -> Position {}",
            move_number,
            player.name(),
            position
        )?;
        writeln!(self.writer, "Board After Move:")?;
        writeln!(self.writer, "{}", board)?;
        self.writer.flush()?;
        Ok(())
    }

    pub fn record_result(&mut self, outcome: &Outcome) -> Result<()> {
        writeln!(self.writer, "Result: {}", outcome)?;
        writeln!(self.writer, "Game ended: {}", timestamp())?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Session-numbered directories under `root`.
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn next_session_id(&self) -> Result<u32> {
        if !self.root.exists() {
            return Ok(1);
        }
        let entries = fs::read_dir(&self.root)
            .with_context(|| format!("failed to read log directory {}", self.root.display()))?;
        let mut highest = 0;
        for entry in entries {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            let name = entry.file_name();
            let number = name
                .to_str()
                .and_then(|name| name.strip_prefix(SESSION_PREFIX))
                .and_then(|suffix| suffix.parse::<u32>().ok());
            if let Some(number) = number {
                highest = highest.max(number);
            }
        }
        Ok(highest + 1)
    }
}

impl LogStore for DirectoryStore {
    type Writer = File;

    fn open_round(&mut self) -> Result<GameLog<File>> {
        fs::create_dir_all(&self.root)
            .with_context(|| format!("failed to create {}", self.root.display()))?;
        let game_number = self.next_session_id()?;
        let dir = self.root.join(format!("{}{}", SESSION_PREFIX, game_number));
        fs::create_dir_all(&dir).with_context(|| format!("failed to create {}", dir.display()))?;
        let path = dir.join(LOG_FILE);
        let file = File::create(&path).with_context(|| format!("failed to create {}", path.display()))?;
        info!("logging game {} to {}", game_number, path.display());
        Ok(GameLog::new(game_number, file))
    }
}

/// Drops every log line. Used when file logging is switched off.
#[derive(Default)]
pub struct NullStore {
    rounds: u32,
}

impl LogStore for NullStore {
    type Writer = io::Sink;

    fn open_round(&mut self) -> Result<GameLog<io::Sink>> {
        self.rounds += 1;
        debug!("move log disabled for game {}", self.rounds);
        Ok(GameLog::new(self.rounds, io::sink()))
    }
}
