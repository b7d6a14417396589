//! Flat-file records for the course catalog and exported schedules.
//!
//! Catalog lines look like `name,title,section,credits,instructor,days,start,end`;
//! the trailing time pair is absent when the days are `A`. A line that is not
//! valid UTF-8 or does not describe a valid course is skipped without complaint.

use std::{fs::File, io, path::Path};

use csv::{QuoteStyle, ReaderBuilder, StringRecord, Terminator, WriterBuilder};

use crate::{
    Course, Error, Result,
    activity::{ARRANGED, Activity},
};

const MALFORMED: &str = "Malformed course record.";

/// Comma-separated, headerless, unquoted records of varying length.
fn record_reader<R: io::Read>(source: R) -> csv::Reader<R> {
    ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(source)
}

/// Reads every valid course in `path`, keeping the first of any repeated name/section pair.
pub fn read_course_records<P: AsRef<Path>>(path: P) -> Result<Vec<Course>> {
    let path = path.as_ref();
    let mut reader = record_reader(File::open(path)?);
    let mut courses: Vec<Course> = Vec::new();

    for record in reader.byte_records() {
        let Ok(record) = StringRecord::from_byte_record(record?) else {
            continue;
        };
        let Ok(course) = course_from_record(&record) else {
            continue;
        };
        let repeated = courses
            .iter()
            .any(|c| c.name() == course.name() && c.section() == course.section());
        if !repeated {
            courses.push(course);
        }
    }

    tracing::debug!("Read {} courses from {}", courses.len(), path.display());
    Ok(courses)
}

/// Parses a single catalog line into a course.
pub fn parse_course_record(line: &str) -> Result<Course> {
    let record = record_reader(line.as_bytes())
        .records()
        .next()
        .ok_or_else(|| Error::invalid(MALFORMED))??;
    course_from_record(&record)
}

fn course_from_record(record: &StringRecord) -> Result<Course> {
    let mut fields = record.iter();
    let mut next = || fields.next().ok_or_else(|| Error::invalid(MALFORMED));

    let name = next()?;
    let title = next()?;
    let section = next()?;
    let credits = parse_int(next()?)?;
    let instructor_id = next()?;
    let meeting_days = next()?;

    let course = if meeting_days == ARRANGED {
        Course::arranged(name, title, section, credits, instructor_id)?
    } else {
        let start_time = parse_int(next()?)?;
        let end_time = parse_int(next()?)?;
        Course::new(
            name,
            title,
            section,
            credits,
            instructor_id,
            meeting_days,
            start_time,
            end_time,
        )?
    };

    // A single trailing comma leaves one empty field behind.
    match (fields.next(), fields.next()) {
        (None, _) | (Some(""), None) => Ok(course),
        _ => Err(Error::invalid("Too many tokens.")),
    }
}

fn parse_int(token: &str) -> Result<i32> {
    token.parse().map_err(|_| Error::invalid(MALFORMED))
}

/// Writes one record per activity to `path`, replacing any existing file.
pub fn write_activity_records<P: AsRef<Path>>(path: P, activities: &[Activity]) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .flexible(true)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(File::create(path)?);
    for activity in activities {
        writer.write_record(activity.record_fields())?;
    }
    writer.flush()?;
    Ok(())
}
