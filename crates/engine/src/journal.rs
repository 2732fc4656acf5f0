//! Journal: append-only JSON-lines event log for a session.
//!
//! Every record carries `type` and `ts` (milliseconds since the Unix epoch).
//! If the log cannot be opened or written, one `[Journal]` line goes to stderr
//! and journaling switches off; the game itself is never interrupted.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::core::SessionSnapshot;
use crate::types::level_name;

/// Final progression, as written to the log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRecord {
    pub level: u32,
    pub level_name: String,
    pub total_points: u32,
    pub final_streak: u32,
    pub best_streak: u32,
    pub rounds_played: u32,
    pub rounds_won: u32,
}

impl From<&SessionSnapshot> for SummaryRecord {
    fn from(snap: &SessionSnapshot) -> Self {
        Self {
            level: snap.level,
            level_name: level_name(snap.level).to_string(),
            total_points: snap.total_points,
            final_streak: snap.consecutive_wins,
            best_streak: snap.best_streak,
            rounds_played: snap.rounds_played,
            rounds_won: snap.rounds_won,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum JournalEvent {
    SessionStarted {
        player: String,
        seed: Option<u32>,
    },
    RoundStarted {
        round: u32,
        level: u32,
    },
    Guess {
        round: u32,
        attempt: u32,
        value: u32,
        verdict: String,
    },
    InvalidInput {
        round: u32,
        reason: String,
    },
    RoundResolved {
        round: u32,
        solved: bool,
        attempts: u32,
        secret: u32,
        points: u32,
        level: u32,
        streak: u32,
    },
    RoundAbandoned {
        round: u32,
        attempts: u32,
        guesses: Vec<u32>,
    },
    SessionFinished {
        summary: SummaryRecord,
    },
}

#[derive(Serialize)]
struct Record<'a> {
    ts: u64,
    #[serde(flatten)]
    event: &'a JournalEvent,
}

pub struct Journal {
    sink: Option<BufWriter<File>>,
    buf: Vec<u8>,
}

impl Journal {
    /// A journal that drops every event.
    pub fn disabled() -> Self {
        Self {
            sink: None,
            buf: Vec::new(),
        }
    }

    /// Open (or create) `path` for appending.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("journal: open {} failed", path.display()))?;
        Ok(Self {
            sink: Some(BufWriter::new(file)),
            buf: Vec::with_capacity(256),
        })
    }

    /// Journal for the configured log path; disabled if none is set or it cannot be opened.
    pub fn from_config(config: &GameConfig) -> Self {
        let Some(path) = config.log_path.as_deref() else {
            return Self::disabled();
        };
        match Self::open(path) {
            Ok(journal) => journal,
            Err(e) => {
                eprintln!("[Journal] {:#}; event log disabled", e);
                Self::disabled()
            }
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    /// Append one event. Failures disable the journal instead of propagating.
    pub fn record(&mut self, event: &JournalEvent) {
        if self.sink.is_none() {
            return;
        }

        self.buf.clear();
        let record = Record {
            ts: now_ms(),
            event,
        };
        if let Err(e) = serde_json::to_writer(&mut self.buf, &record) {
            eprintln!("[Journal] encode failed: {}", e);
            return;
        }
        self.buf.push(b'\n');

        let written = match self.sink.as_mut() {
            Some(sink) => sink.write_all(&self.buf).and_then(|_| sink.flush()),
            None => Ok(()),
        };
        if let Err(e) = written {
            eprintln!("[Journal] write failed: {}; event log disabled", e);
            self.sink = None;
        }
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_log(name: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "mystery-journal-{}-{}.jsonl",
            std::process::id(),
            name
        ));
        let _ = std::fs::remove_file(&path);
        path
    }

    #[test]
    fn disabled_journal_ignores_events() {
        let mut journal = Journal::disabled();
        assert!(!journal.is_enabled());
        journal.record(&JournalEvent::RoundStarted { round: 1, level: 0 });
    }

    #[test]
    fn config_without_path_is_disabled() {
        let journal = Journal::from_config(&GameConfig::default());
        assert!(!journal.is_enabled());
    }

    #[test]
    fn unopenable_path_disables_journal() {
        let config = GameConfig {
            log_path: Some("/nonexistent-dir/mystery/log.jsonl".to_string()),
            ..GameConfig::default()
        };
        assert!(!Journal::from_config(&config).is_enabled());
    }

    #[test]
    fn records_are_tagged_json_lines() {
        let path = temp_log("tagged");
        let mut journal = Journal::open(&path).unwrap();
        journal.record(&JournalEvent::RoundStarted { round: 1, level: 2 });
        journal.record(&JournalEvent::Guess {
            round: 1,
            attempt: 1,
            value: 50,
            verdict: "too_high".to_string(),
        });
        drop(journal);

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["type"], "round_started");
        assert_eq!(first["level"], 2);
        assert!(first["ts"].as_u64().is_some());

        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["type"], "guess");
        assert_eq!(second["verdict"], "too_high");

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn events_round_trip_without_timestamp() {
        let event = JournalEvent::SessionFinished {
            summary: SummaryRecord::from(&SessionSnapshot {
                level: 1,
                total_points: 500,
                consecutive_wins: 1,
                best_streak: 1,
                rounds_played: 1,
                rounds_won: 1,
            }),
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: JournalEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
        assert!(json.contains("\"level_name\":\"Explorer\""));
    }

    #[test]
    fn open_appends_to_existing_log() {
        let path = temp_log("append");
        for _ in 0..2 {
            let mut journal = Journal::open(&path).unwrap();
            journal.record(&JournalEvent::RoundAbandoned {
                round: 1,
                attempts: 2,
                guesses: vec![50, 25],
            });
        }
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 2);
        let last: serde_json::Value = serde_json::from_str(text.lines().last().unwrap()).unwrap();
        assert_eq!(last["guesses"], serde_json::json!([50, 25]));
        let _ = std::fs::remove_file(&path);
    }
}
