use std::fmt;

use crate::{
    Result,
    activity::{
        Activity, ActivityCore, LongDisplay, Schedulable, ShortDisplay, validate_day_letters,
    },
};

/// Day letters an event may meet on, weekends included.
pub const EVENT_DAYS: [char; 7] = ['M', 'T', 'W', 'H', 'F', 'S', 'U'];

/// A user-created schedule entry such as a meeting or a workout.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Event {
    core: ActivityCore,
    details: String,
}

impl Event {
    pub fn new(
        title: impl Into<String>,
        meeting_days: impl Into<String>,
        start_time: i32,
        end_time: i32,
        details: impl Into<String>,
    ) -> Result<Self> {
        let core = ActivityCore::new(title, meeting_days, start_time, end_time)?;
        validate_day_letters(core.meeting_days(), &EVENT_DAYS)?;
        Ok(Self {
            core,
            details: details.into(),
        })
    }

    pub fn details(&self) -> &str {
        &self.details
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> Result<()> {
        self.core.set_title(title)
    }

    pub fn set_details(&mut self, details: impl Into<String>) {
        self.details = details.into();
    }

    /// Accepts distinct letters from [`EVENT_DAYS`]; there is no arranged form.
    pub fn set_meeting_days_and_time(
        &mut self,
        meeting_days: impl Into<String>,
        start_time: i32,
        end_time: i32,
    ) -> Result<()> {
        let meeting_days = meeting_days.into();
        validate_day_letters(&meeting_days, &EVENT_DAYS)?;
        self.core
            .set_meeting_days_and_time(meeting_days, start_time, end_time)
    }

    pub fn record_fields(&self) -> Vec<String> {
        vec![
            self.title().to_string(),
            self.meeting_days().to_string(),
            self.start_time().to_string(),
            self.end_time().to_string(),
            self.details.clone(),
        ]
    }
}

impl Schedulable for Event {
    fn core(&self) -> &ActivityCore {
        &self.core
    }

    fn short_display(&self) -> ShortDisplay {
        [
            String::new(),
            String::new(),
            self.title().to_string(),
            self.meeting_string(),
        ]
    }

    fn long_display(&self) -> LongDisplay {
        [
            String::new(),
            String::new(),
            self.title().to_string(),
            String::new(),
            String::new(),
            self.meeting_string(),
            self.details.clone(),
        ]
    }

    fn is_duplicate(&self, other: &Activity) -> bool {
        matches!(other, Activity::Event(event) if event.title() == self.title())
    }
}

/// Export record form: `title,days,start,end,details`.
impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.record_fields().join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Course;

    fn workout() -> Event {
        Event::new("Exercise", "MWF", 800, 850, "Carmichael gym").unwrap()
    }

    #[test]
    fn test_event_meeting_days() {
        let mut event = workout();
        for days in ["SU", "MTWHFSU", "U"] {
            assert!(event.set_meeting_days_and_time(days, 1000, 1100).is_ok());
        }
        for days in ["A", "", "SS", "MX", "m"] {
            let err = event.set_meeting_days_and_time(days, 0, 0).unwrap_err();
            assert!(err.is_invalid_argument());
            assert_eq!(err.to_string(), "Invalid meeting days and times.");
        }
        assert_eq!(event.meeting_days(), "U");
    }

    #[test]
    fn test_empty_details_allowed() {
        let mut event = Event::new("Lunch", "MTWHF", 1200, 1300, "").unwrap();
        assert_eq!(event.details(), "");
        event.set_details("with the team");
        assert_eq!(event.details(), "with the team");
    }

    #[test]
    fn test_display_arrays_and_record() {
        let event = workout();
        assert_eq!(event.short_display(), ["", "", "Exercise", "MWF 8:00AM-8:50AM"]);
        assert_eq!(
            event.long_display(),
            ["", "", "Exercise", "", "", "MWF 8:00AM-8:50AM", "Carmichael gym"]
        );
        assert_eq!(event.to_string(), "Exercise,MWF,800,850,Carmichael gym");
    }

    #[test]
    fn test_duplicate_by_title_only() {
        let event = workout();
        let same_title = Event::new("Exercise", "SU", 1000, 1130, "Lake Johnson").unwrap();
        let course = Course::arranged("CSC 290", "Exercise", "001", 1, "jdyoung2").unwrap();

        assert!(event.is_duplicate(&same_title.into()));
        assert!(!event.is_duplicate(&course.into()));
    }

    #[test]
    fn test_course_and_event_never_equal() {
        let event: Activity = Event::new("Lunch", "MW", 1200, 1300, "").unwrap().into();
        let course: Activity = Course::new("CSC 116", "Lunch", "001", 3, "jtking", "MW", 1200, 1300)
            .unwrap()
            .into();
        assert_ne!(event, course);
    }
}
