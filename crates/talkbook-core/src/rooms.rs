//! Room lookup tables.
//!
//! Two independent tables drive room handling:
//!
//! - the **priority table** maps a room name to its booklet ordering rank.
//!   Every room in the export must have an entry; there is no fallback.
//! - the **command table** maps a room name to the LaTeX macro that typesets
//!   its abstract header, with a default used for rooms without an entry.
//!
//! The built-in entries mirror the venue plan as published, including its
//! spelling quirks ("BoF1" in the priority table, "Bof1" in the command
//! table), so lookups behave exactly like the published booklet. Both tables
//! are immutable once constructed; the CLI may substitute its own entries
//! from the configuration file.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A room's typesetting macro and display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomCommand {
    /// Display label for the room.
    pub name: String,
    /// LaTeX macro invoked for the room's abstract header.
    pub command: String,
}

impl RoomCommand {
    /// Creates a new room command descriptor.
    pub fn new(name: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            command: command.into(),
        }
    }
}

/// Immutable room priority and command tables.
#[derive(Debug, Clone)]
pub struct RoomTables {
    priority: HashMap<String, u32>,
    commands: HashMap<String, RoomCommand>,
    default_command: RoomCommand,
}

impl Default for RoomTables {
    fn default() -> Self {
        let priority = [
            ("HS1 (ZHG 011)", 1),
            ("HS2 (ZHG 010)", 2),
            ("HS3 (ZHG 009)", 3),
            ("HS4 (ZHG 008)", 4),
            ("BoF1 (ZHG 001)", 5),
            ("BoF2 (ZHG 005)", 6),
            ("Bof3/Expert:innen (ZHG 006)", 7),
            ("WS1 (VG 1.104)", 8),
            ("WS2 (VG 1.103)", 9),
            ("WS3 (VG 1.102)", 10),
            ("Opening OSM (MH 09)", 11),
            ("OSM1 (MH 11)", 12),
            ("OSM2 (MH 10)", 13),
            ("OSM3 (MH 13", 14),
            ("Poster (Zelt)", 15),
            ("FOSSGIS-Stand", 16),
        ]
        .into_iter()
        .map(|(name, rank)| (name.to_string(), rank))
        .collect();

        let commands = [
            ("HS1 (ZHG 011)", "HS1 (ZHG 011)", "\\abstractHSeins"),
            ("HS2 (ZHG 010)", "HS2 (ZHG 010)", "\\abstractHSzwei"),
            ("HS3 (ZHG 009)", "HS3 (ZHG 009)", "\\abstractHSdrei"),
            ("HS4 (ZHG 008)", "HS4 (ZHG 008)", "\\abstractHSvier"),
            ("Bof1 (ZHG 001)", "Bof1 (ZHG 001)", "\\abstractAnwBoFeins"),
            ("Bof2 (ZHG 005)", "BoF2 (ZHG 005)", "\\abstractAnwBoFzwei"),
            (
                "Bof3/Expert:innen (ZHG 006)",
                "BoF3/Expert:innen (ZHG 006)",
                "\\abstractAnwBoFdrei",
            ),
        ]
        .into_iter()
        .map(|(key, name, command)| (key.to_string(), RoomCommand::new(name, command)))
        .collect();

        Self::new(priority, commands)
    }
}

impl RoomTables {
    /// Creates tables from explicit entries, keeping the standard fallback
    /// command.
    pub fn new(priority: HashMap<String, u32>, commands: HashMap<String, RoomCommand>) -> Self {
        Self {
            priority,
            commands,
            default_command: RoomCommand::new("???", "\\abstractOther"),
        }
    }

    /// Returns the ordering rank of a room, if it has one.
    pub fn priority(&self, room: &str) -> Option<u32> {
        self.priority.get(room).copied()
    }

    /// Returns the typesetting command for a room, falling back to the
    /// default command for rooms without an entry.
    pub fn command(&self, room: &str) -> &RoomCommand {
        self.commands.get(room).unwrap_or(&self.default_command)
    }

    /// Returns the fallback command descriptor.
    pub fn default_command(&self) -> &RoomCommand {
        &self.default_command
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_priority_ranks() {
        let tables = RoomTables::default();
        assert_eq!(tables.priority("HS1 (ZHG 011)"), Some(1));
        assert_eq!(tables.priority("Poster (Zelt)"), Some(15));
        assert_eq!(tables.priority("FOSSGIS-Stand"), Some(16));
        assert_eq!(tables.priority("Kellerbar"), None);
    }

    #[test]
    fn builtin_commands_resolve() {
        let tables = RoomTables::default();
        let hs1 = tables.command("HS1 (ZHG 011)");
        assert_eq!(hs1.command, "\\abstractHSeins");
        assert_eq!(hs1.name, "HS1 (ZHG 011)");
    }

    #[test]
    fn unknown_room_gets_default_command() {
        let tables = RoomTables::default();
        let cmd = tables.command("Kellerbar");
        assert_eq!(cmd.name, "???");
        assert_eq!(cmd.command, "\\abstractOther");
    }

    #[test]
    fn table_spellings_differ_between_priority_and_commands() {
        let tables = RoomTables::default();
        // "BoF1" has a rank but no command entry; "Bof1" is the reverse.
        assert_eq!(tables.priority("BoF1 (ZHG 001)"), Some(5));
        assert_eq!(tables.command("BoF1 (ZHG 001)").name, "???");
        assert_eq!(tables.priority("Bof1 (ZHG 001)"), None);
        assert_eq!(tables.command("Bof1 (ZHG 001)").command, "\\abstractAnwBoFeins");
    }
}
