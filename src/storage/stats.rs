use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use log::warn;

use crate::core::GameEngine;

/// First line of every statistics log.
pub const STATS_HEADER: &str = "Timestamp||Cards Played||Enemy Health||Hand||Outcome";
const DELIMITER: &str = "||";

/// Final result of a recorded game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Victory,
    Defeat,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Victory => write!(f, "Victory"),
            Outcome::Defeat => write!(f, "Defeat"),
        }
    }
}

impl FromStr for Outcome {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Victory" => Ok(Outcome::Victory),
            "Defeat" => Ok(Outcome::Defeat),
            other => Err(anyhow::anyhow!("unknown outcome '{}'", other)),
        }
    }
}

/// One line of the statistics log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsRecord {
    /// Seconds since the Unix epoch.
    pub timestamp: u64,
    pub cards_played: u32,
    /// Health of the last active enemy; negative after an overkill.
    pub enemy_health: i32,
    /// Hand at game end, as JSON.
    pub hand: String,
    pub outcome: Outcome,
}

impl StatsRecord {
    /// Capture the end-of-game record for `engine`.
    pub fn from_engine(engine: &GameEngine, timestamp: u64) -> anyhow::Result<Self> {
        Ok(Self {
            timestamp,
            cards_played: engine.cards_played(),
            enemy_health: engine.enemy_health(),
            hand: serde_json::to_string(engine.hand())?,
            outcome: if engine.is_victory() {
                Outcome::Victory
            } else {
                Outcome::Defeat
            },
        })
    }

    fn to_line(&self) -> String {
        [
            self.timestamp.to_string(),
            self.cards_played.to_string(),
            self.enemy_health.to_string(),
            self.hand.clone(),
            self.outcome.to_string(),
        ]
        .join(DELIMITER)
    }

    fn parse_line(line: &str) -> anyhow::Result<Self> {
        let parts: Vec<&str> = line.split(DELIMITER).collect();
        if parts.len() != 5 {
            anyhow::bail!("expected 5 fields, found {}", parts.len());
        }
        Ok(Self {
            timestamp: parts[0].trim().parse()?,
            cards_played: parts[1].trim().parse()?,
            enemy_health: parts[2].trim().parse()?,
            hand: parts[3].to_string(),
            outcome: parts[4].parse()?,
        })
    }
}

/// Current time as seconds since the Unix epoch.
pub fn now_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Render Unix seconds as `YYYY-MM-DD HH:MM:SS` (UTC).
pub fn format_timestamp(secs: u64) -> String {
    let days = (secs / 86_400) as i64;
    let rem = secs % 86_400;
    // proleptic Gregorian calendar from days since 1970-01-01
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + i64::from(month <= 2);
    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
        year,
        month,
        day,
        rem / 3_600,
        rem % 3_600 / 60,
        rem % 60
    )
}

/// Append-only log of finished games.
#[derive(Debug, Clone)]
pub struct StatsLog {
    path: PathBuf,
}

impl StatsLog {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a record, writing the header first if the log is new or empty.
    pub fn append(&self, record: &StatsRecord) -> anyhow::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        if file.metadata()?.len() == 0 {
            writeln!(file, "{}", STATS_HEADER)?;
        }
        writeln!(file, "{}", record.to_line())?;
        Ok(())
    }

    /// Read every well-formed record. A missing log is empty.
    pub fn read_all(&self) -> anyhow::Result<Vec<StatsRecord>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        let mut records = Vec::new();
        for (n, line) in contents.lines().enumerate() {
            if line.trim().is_empty() || line == STATS_HEADER {
                continue;
            }
            match StatsRecord::parse_line(line) {
                Ok(record) => records.push(record),
                Err(e) => warn!("Skipping malformed stats line {}: {}", n + 1, e),
            }
        }
        Ok(records)
    }
}
