use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TrackerKind {
    Bug,
    Story,
    Task,
    Placeholder,
    Enhancement,
}

impl TrackerKind {
    pub const ALL: [TrackerKind; 5] = [
        TrackerKind::Bug,
        TrackerKind::Story,
        TrackerKind::Task,
        TrackerKind::Placeholder,
        TrackerKind::Enhancement,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TrackerKind::Bug => "bug",
            TrackerKind::Story => "story",
            TrackerKind::Task => "task",
            TrackerKind::Placeholder => "placeholder",
            TrackerKind::Enhancement => "enhancement",
        }
    }
}

impl fmt::Display for TrackerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mapping from tracker kind to the numeric id of a given Redmine instance.
/// Ids are assigned per installation, so this table lives in the settings file.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct TrackerIds {
    pub bug: u64,
    pub story: u64,
    pub task: u64,
    pub placeholder: u64,
    pub enhancement: u64,
}

impl Default for TrackerIds {
    fn default() -> Self {
        TrackerIds {
            bug: 1,
            story: 2,
            task: 7,
            placeholder: 10,
            enhancement: 11,
        }
    }
}

impl TrackerIds {
    pub fn id(&self, kind: TrackerKind) -> u64 {
        match kind {
            TrackerKind::Bug => self.bug,
            TrackerKind::Story => self.story,
            TrackerKind::Task => self.task,
            TrackerKind::Placeholder => self.placeholder,
            TrackerKind::Enhancement => self.enhancement,
        }
    }

    pub fn kind_of(&self, tracker_id: u64) -> Option<TrackerKind> {
        TrackerKind::ALL
            .into_iter()
            .find(|kind| self.id(*kind) == tracker_id)
    }
}
