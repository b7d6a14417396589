//! Shared behaviour of everything that can sit on a schedule.
//!
//! Courses and events carry the same core fields (title, meeting days and a
//! military start/end time). [`ActivityCore`] owns those fields and their
//! base validation; the variants layer their own day-letter rules on top and
//! expose the common capability set through [`Schedulable`].

use std::fmt;

use chrono::NaiveTime;

use crate::{ConflictError, Course, Error, Event, Result};

/// Meeting-days sentinel for a course with no fixed meeting time.
pub const ARRANGED: &str = "A";

/// Number of columns in a short display row.
pub const SHORT_DISPLAY_LEN: usize = 4;
/// Number of columns in a long display row.
pub const LONG_DISPLAY_LEN: usize = 7;

const UPPER_HOUR: i32 = 24;
const UPPER_MINUTE: i32 = 60;

pub(crate) const INVALID_MEETING: &str = "Invalid meeting days and times.";

/// Row shape used by the short catalog/schedule tables.
pub type ShortDisplay = [String; SHORT_DISPLAY_LEN];
/// Row shape used by the full schedule table.
pub type LongDisplay = [String; LONG_DISPLAY_LEN];

/// Fields common to courses and events.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActivityCore {
    title: String,
    meeting_days: String,
    start_time: i32,
    end_time: i32,
}

impl ActivityCore {
    pub(crate) fn new(
        title: impl Into<String>,
        meeting_days: impl Into<String>,
        start_time: i32,
        end_time: i32,
    ) -> Result<Self> {
        let title = title.into();
        let meeting_days = meeting_days.into();
        validate_title(&title)?;
        validate_meeting_time(&meeting_days, start_time, end_time)?;
        Ok(Self {
            title,
            meeting_days,
            start_time,
            end_time,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn meeting_days(&self) -> &str {
        &self.meeting_days
    }

    pub fn start_time(&self) -> i32 {
        self.start_time
    }

    pub fn end_time(&self) -> i32 {
        self.end_time
    }

    pub fn is_arranged(&self) -> bool {
        self.meeting_days == ARRANGED
    }

    pub(crate) fn set_title(&mut self, title: impl Into<String>) -> Result<()> {
        let title = title.into();
        validate_title(&title)?;
        self.title = title;
        Ok(())
    }

    /// Base range check; callers validate the day letters first.
    pub(crate) fn set_meeting_days_and_time(
        &mut self,
        meeting_days: impl Into<String>,
        start_time: i32,
        end_time: i32,
    ) -> Result<()> {
        let meeting_days = meeting_days.into();
        validate_meeting_time(&meeting_days, start_time, end_time)?;
        self.meeting_days = meeting_days;
        self.start_time = start_time;
        self.end_time = end_time;
        Ok(())
    }

    /// Renders the meeting days and a 12-hour time range, e.g. `MW 1:30PM-2:45PM`.
    pub fn meeting_string(&self) -> String {
        if self.is_arranged() {
            return "Arranged".to_string();
        }
        format!(
            "{} {}-{}",
            self.meeting_days,
            format_military(self.start_time),
            format_military(self.end_time)
        )
    }

    /// Both activities meet on a common day and their inclusive time ranges touch.
    pub fn overlaps(&self, other: &ActivityCore) -> bool {
        if self.is_arranged() || other.is_arranged() {
            return false;
        }
        let shares_day = self
            .meeting_days
            .chars()
            .any(|day| other.meeting_days.contains(day));

        shares_day && self.start_time <= other.end_time && other.start_time <= self.end_time
    }
}

fn validate_title(title: &str) -> Result<()> {
    if title.is_empty() {
        return Err(Error::invalid("Invalid title."));
    }
    Ok(())
}

fn validate_meeting_time(meeting_days: &str, start_time: i32, end_time: i32) -> Result<()> {
    if meeting_days.trim().is_empty() {
        return Err(Error::invalid(INVALID_MEETING));
    }

    let in_range = |time: i32| {
        let (hour, minute) = (time / 100, time % 100);
        (0..UPPER_HOUR).contains(&hour) && (0..UPPER_MINUTE).contains(&minute)
    };
    if !in_range(start_time) || !in_range(end_time) || end_time < start_time {
        return Err(Error::invalid(INVALID_MEETING));
    }
    Ok(())
}

/// Accepts day letters drawn from `allowed`, each at most once.
pub(crate) fn validate_day_letters(meeting_days: &str, allowed: &[char]) -> Result<()> {
    let mut seen = Vec::with_capacity(allowed.len());
    for day in meeting_days.chars() {
        if !allowed.contains(&day) || seen.contains(&day) {
            return Err(Error::invalid(INVALID_MEETING));
        }
        seen.push(day);
    }
    Ok(())
}

fn format_military(time: i32) -> String {
    u32::try_from(time)
        .ok()
        .and_then(|time| NaiveTime::from_hms_opt(time / 100, time % 100, 0))
        .map(|time| time.format("%-I:%M%p").to_string())
        .unwrap_or_else(|| time.to_string())
}

/// Capability set shared by every schedule entry.
pub trait Schedulable {
    fn core(&self) -> &ActivityCore;

    fn title(&self) -> &str {
        self.core().title()
    }

    fn meeting_days(&self) -> &str {
        self.core().meeting_days()
    }

    fn start_time(&self) -> i32 {
        self.core().start_time()
    }

    fn end_time(&self) -> i32 {
        self.core().end_time()
    }

    fn meeting_string(&self) -> String {
        self.core().meeting_string()
    }

    /// Name, section, title and meeting string; blanks where a variant has no value.
    fn short_display(&self) -> ShortDisplay;

    /// Name, section, title, credits, instructor, meeting string and event details.
    fn long_display(&self) -> LongDisplay;

    /// Identity match used to block redundant schedule entries.
    fn is_duplicate(&self, other: &Activity) -> bool;
}

/// Day and time overlap check between two schedule entries.
pub trait Conflict {
    /// Fails when both activities share a day letter and their inclusive time
    /// ranges touch. An arranged course has no meeting time, so it never
    /// conflicts, not even with another arranged course.
    fn check_conflict<A: Schedulable + ?Sized>(
        &self,
        other: &A,
    ) -> std::result::Result<(), ConflictError>;
}

impl<T: Schedulable + ?Sized> Conflict for T {
    fn check_conflict<A: Schedulable + ?Sized>(
        &self,
        other: &A,
    ) -> std::result::Result<(), ConflictError> {
        if self.core().overlaps(other.core()) {
            return Err(ConflictError::default());
        }
        Ok(())
    }
}

/// A single schedule entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Activity {
    Course(Course),
    Event(Event),
}

impl Activity {
    pub fn as_course(&self) -> Option<&Course> {
        match self {
            Self::Course(course) => Some(course),
            Self::Event(_) => None,
        }
    }

    pub fn as_event(&self) -> Option<&Event> {
        match self {
            Self::Course(_) => None,
            Self::Event(event) => Some(event),
        }
    }

    /// Fields of the export record for either variant.
    pub fn record_fields(&self) -> Vec<String> {
        match self {
            Self::Course(course) => course.record_fields(),
            Self::Event(event) => event.record_fields(),
        }
    }
}

impl Schedulable for Activity {
    fn core(&self) -> &ActivityCore {
        match self {
            Self::Course(course) => course.core(),
            Self::Event(event) => event.core(),
        }
    }

    fn short_display(&self) -> ShortDisplay {
        match self {
            Self::Course(course) => course.short_display(),
            Self::Event(event) => event.short_display(),
        }
    }

    fn long_display(&self) -> LongDisplay {
        match self {
            Self::Course(course) => course.long_display(),
            Self::Event(event) => event.long_display(),
        }
    }

    fn is_duplicate(&self, other: &Activity) -> bool {
        match self {
            Self::Course(course) => course.is_duplicate(other),
            Self::Event(event) => event.is_duplicate(other),
        }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Course(course) => fmt::Display::fmt(course, f),
            Self::Event(event) => fmt::Display::fmt(event, f),
        }
    }
}

impl From<Course> for Activity {
    fn from(course: Course) -> Self {
        Self::Course(course)
    }
}

impl From<Event> for Activity {
    fn from(event: Event) -> Self {
        Self::Event(event)
    }
}
