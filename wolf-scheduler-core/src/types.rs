use serde::{Deserialize, Serialize};

use crate::activity::{LongDisplay, ShortDisplay};

/// Title given to a schedule until the user picks one.
pub const DEFAULT_SCHEDULE_TITLE: &str = "My Schedule";

/// Rows of name, section, title and meeting string.
pub type ShortTable = Vec<ShortDisplay>;
/// Rows of every display column, event details last.
pub type LongTable = Vec<LongDisplay>;

/// Scheduler construction options
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerOptions {
    /// Initial schedule title
    pub default_title: String,
}

impl Default for SchedulerOptions {
    fn default() -> Self {
        Self {
            default_title: DEFAULT_SCHEDULE_TITLE.to_string(),
        }
    }
}
