use std::{fmt, sync::LazyLock};

use regex::Regex;

use crate::{
    Error, Result,
    activity::{
        ARRANGED, Activity, ActivityCore, INVALID_MEETING, LongDisplay, Schedulable,
        ShortDisplay, validate_day_letters,
    },
};

const MIN_NAME_LENGTH: usize = 5;
const MAX_NAME_LENGTH: usize = 8;
const SECTION_LENGTH: usize = 3;
const MIN_CREDITS: i32 = 1;
const MAX_CREDITS: i32 = 5;

/// Weekday letters a course may meet on.
pub const COURSE_DAYS: [char; 5] = ['M', 'T', 'W', 'H', 'F'];

/// 1-4 letters, an optional single space, then exactly three digits.
static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\p{L}{1,4} ?[0-9]{3}$").expect("course name pattern is valid")
});

/// A catalog course section, e.g. `CSC 216-001`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Course {
    core: ActivityCore,
    name: String,
    section: String,
    credits: i32,
    instructor_id: String,
}

impl Course {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        section: impl Into<String>,
        credits: i32,
        instructor_id: impl Into<String>,
        meeting_days: impl Into<String>,
        start_time: i32,
        end_time: i32,
    ) -> Result<Self> {
        let core = ActivityCore::new(title, meeting_days, start_time, end_time)?;
        validate_course_days(core.meeting_days(), start_time, end_time)?;

        let name = name.into();
        let section = section.into();
        let instructor_id = instructor_id.into();
        validate_name(&name)?;
        validate_section(&section)?;
        validate_credits(credits)?;
        validate_instructor_id(&instructor_id)?;

        Ok(Self {
            core,
            name,
            section,
            credits,
            instructor_id,
        })
    }

    /// Builds a course with arranged meeting days and no meeting time.
    pub fn arranged(
        name: impl Into<String>,
        title: impl Into<String>,
        section: impl Into<String>,
        credits: i32,
        instructor_id: impl Into<String>,
    ) -> Result<Self> {
        Self::new(name, title, section, credits, instructor_id, ARRANGED, 0, 0)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn section(&self) -> &str {
        &self.section
    }

    pub fn credits(&self) -> i32 {
        self.credits
    }

    pub fn instructor_id(&self) -> &str {
        &self.instructor_id
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> Result<()> {
        self.core.set_title(title)
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        validate_name(&name)?;
        self.name = name;
        Ok(())
    }

    pub fn set_section(&mut self, section: impl Into<String>) -> Result<()> {
        let section = section.into();
        validate_section(&section)?;
        self.section = section;
        Ok(())
    }

    pub fn set_credits(&mut self, credits: i32) -> Result<()> {
        validate_credits(credits)?;
        self.credits = credits;
        Ok(())
    }

    pub fn set_instructor_id(&mut self, instructor_id: impl Into<String>) -> Result<()> {
        let instructor_id = instructor_id.into();
        validate_instructor_id(&instructor_id)?;
        self.instructor_id = instructor_id;
        Ok(())
    }

    /// Accepts `A` with a zero time range, or distinct letters from [`COURSE_DAYS`].
    pub fn set_meeting_days_and_time(
        &mut self,
        meeting_days: impl Into<String>,
        start_time: i32,
        end_time: i32,
    ) -> Result<()> {
        let meeting_days = meeting_days.into();
        validate_course_days(&meeting_days, start_time, end_time)?;
        self.core
            .set_meeting_days_and_time(meeting_days, start_time, end_time)
    }

    /// Catalog record fields; the time pair is left out when arranged.
    pub fn record_fields(&self) -> Vec<String> {
        let mut fields = vec![
            self.name.clone(),
            self.title().to_string(),
            self.section.clone(),
            self.credits.to_string(),
            self.instructor_id.clone(),
            self.meeting_days().to_string(),
        ];
        if !self.core.is_arranged() {
            fields.push(self.start_time().to_string());
            fields.push(self.end_time().to_string());
        }
        fields
    }
}

fn validate_course_days(meeting_days: &str, start_time: i32, end_time: i32) -> Result<()> {
    if meeting_days.starts_with(ARRANGED) {
        if meeting_days != ARRANGED || start_time != 0 || end_time != 0 {
            return Err(Error::invalid(INVALID_MEETING));
        }
        return Ok(());
    }
    validate_day_letters(meeting_days, &COURSE_DAYS)
}

fn validate_name(name: &str) -> Result<()> {
    let length = name.chars().count();
    if !(MIN_NAME_LENGTH..=MAX_NAME_LENGTH).contains(&length) || !NAME_PATTERN.is_match(name) {
        return Err(Error::invalid("Invalid course name."));
    }
    Ok(())
}

fn validate_section(section: &str) -> Result<()> {
    if section.len() != SECTION_LENGTH || !section.chars().all(|c| c.is_ascii_digit()) {
        return Err(Error::invalid("Invalid section."));
    }
    Ok(())
}

fn validate_credits(credits: i32) -> Result<()> {
    if !(MIN_CREDITS..=MAX_CREDITS).contains(&credits) {
        return Err(Error::invalid("Invalid credits."));
    }
    Ok(())
}

fn validate_instructor_id(instructor_id: &str) -> Result<()> {
    if instructor_id.is_empty() {
        return Err(Error::invalid("Invalid instructor id."));
    }
    Ok(())
}

impl Schedulable for Course {
    fn core(&self) -> &ActivityCore {
        &self.core
    }

    fn short_display(&self) -> ShortDisplay {
        [
            self.name.clone(),
            self.section.clone(),
            self.title().to_string(),
            self.meeting_string(),
        ]
    }

    fn long_display(&self) -> LongDisplay {
        [
            self.name.clone(),
            self.section.clone(),
            self.title().to_string(),
            self.credits.to_string(),
            self.instructor_id.clone(),
            self.meeting_string(),
            String::new(),
        ]
    }

    fn is_duplicate(&self, other: &Activity) -> bool {
        matches!(other, Activity::Course(course) if course.name == self.name)
    }
}

/// Catalog record form: `name,title,section,credits,instructor,days[,start,end]`.
impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.record_fields().join(","))
    }
}
