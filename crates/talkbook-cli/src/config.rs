//! CLI configuration.
//!
//! All settings live in a single `config.toml` file at
//! `~/.config/talkbook/config.toml` by default. The only section is an
//! optional `[[rooms]]` array that replaces the built-in room tables, so a
//! new venue plan does not require a new binary:
//!
//! ```toml
//! [[rooms]]
//! name = "HS1 (ZHG 011)"
//! rank = 1
//! command = "\\abstractHSeins"   # omit to leave the room out of the command table
//! label = "HS1 (ZHG 011)"        # optional display label, defaults to name
//! ```

use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use talkbook_core::rooms::{RoomCommand, RoomTables};

/// Configuration for the talkbook CLI.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Room table entries replacing the built-in tables. Empty means the
    /// built-in tables stay in effect.
    pub rooms: Vec<RoomSetting>,
}

/// One configured room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomSetting {
    /// Room name as it appears in the export.
    pub name: String,

    /// Booklet ordering rank.
    pub rank: u32,

    /// LaTeX macro for the room's abstract header. Rooms without a command
    /// fall back to the default command at render time.
    pub command: Option<String>,

    /// Display label; defaults to `name`.
    pub label: Option<String>,
}

impl CliConfig {
    /// Loads configuration from the default path.
    pub fn load() -> Result<Self, String> {
        let path = Self::default_path();
        if path.exists() {
            let content = std::fs::read_to_string(&path)
                .map_err(|e| format!("failed to read config: {}", e))?;
            toml::from_str(&content).map_err(|e| format!("failed to parse config: {}", e))
        } else {
            Ok(Self::default())
        }
    }

    /// Loads configuration from a specific path.
    pub fn load_from(path: &PathBuf) -> Result<Self, String> {
        let content =
            std::fs::read_to_string(path).map_err(|e| format!("failed to read config: {}", e))?;
        toml::from_str(&content).map_err(|e| format!("failed to parse config: {}", e))
    }

    /// Returns the default configuration file path.
    pub fn default_path() -> PathBuf {
        Self::default_config_dir().join("config.toml")
    }

    /// Returns the default configuration directory.
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("talkbook")
    }

    /// Builds the room tables for this run.
    pub fn room_tables(&self) -> RoomTables {
        if self.rooms.is_empty() {
            return RoomTables::default();
        }

        let mut priority = HashMap::new();
        let mut commands = HashMap::new();
        for room in &self.rooms {
            priority.insert(room.name.clone(), room.rank);
            if let Some(ref command) = room.command {
                let label = room.label.clone().unwrap_or_else(|| room.name.clone());
                commands.insert(
                    room.name.clone(),
                    RoomCommand::new(label, command.clone()),
                );
            }
        }
        RoomTables::new(priority, commands)
    }
}
