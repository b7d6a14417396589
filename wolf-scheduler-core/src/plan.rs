use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::Result;

/// A course picked from the catalog by name and section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseSelection {
    pub name: String,
    pub section: String,
}

/// An event to create on the schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventSpec {
    pub title: String,
    pub meeting_days: String,
    pub start_time: i32,
    pub end_time: i32,
    #[serde(default)]
    pub details: String,
}

/// Declarative schedule description, usually read from a JSON file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulePlan {
    pub title: Option<String>,
    pub courses: Vec<CourseSelection>,
    pub events: Vec<EventSpec>,
}

impl SchedulePlan {
    pub fn from_json(json_data: &str) -> Result<Self> {
        Ok(serde_json::from_str(json_data)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
