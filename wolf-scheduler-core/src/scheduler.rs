//! The user's schedule, built against a read-only course catalog.

use std::path::Path;

use crate::{
    Activity, Conflict, Course, Error, Event, LongTable, Result, Schedulable, SchedulerOptions,
    ShortTable,
    plan::{CourseSelection, SchedulePlan},
    record_io,
};

/// Owns the course catalog and the activities the user has scheduled.
#[derive(Debug, Clone)]
pub struct Scheduler {
    title: String,
    catalog: Vec<Course>,
    schedule: Vec<Activity>,
}

impl Scheduler {
    /// Loads the catalog from `catalog_path` with default options.
    pub fn new<P: AsRef<Path>>(catalog_path: P) -> Result<Self> {
        Self::with_options(catalog_path, SchedulerOptions::default())
    }

    pub fn with_options<P: AsRef<Path>>(catalog_path: P, options: SchedulerOptions) -> Result<Self> {
        let catalog_path = catalog_path.as_ref();
        let catalog = record_io::read_course_records(catalog_path).map_err(|e| match e {
            Error::Io(source) => Error::invalid_io("Cannot find file.", source),
            other => other,
        })?;

        tracing::info!(
            "Loaded {} catalog courses from {}",
            catalog.len(),
            catalog_path.display()
        );

        Ok(Self {
            title: options.default_title,
            catalog,
            schedule: Vec::new(),
        })
    }

    pub fn catalog(&self) -> &[Course] {
        &self.catalog
    }

    pub fn schedule(&self) -> &[Activity] {
        &self.schedule
    }

    pub fn course_catalog(&self) -> ShortTable {
        self.catalog.iter().map(Schedulable::short_display).collect()
    }

    pub fn scheduled_activities(&self) -> ShortTable {
        self.schedule.iter().map(Schedulable::short_display).collect()
    }

    pub fn full_scheduled_activities(&self) -> LongTable {
        self.schedule.iter().map(Schedulable::long_display).collect()
    }

    pub fn course_from_catalog(&self, name: &str, section: &str) -> Option<&Course> {
        self.catalog
            .iter()
            .find(|course| course.name() == name && course.section() == section)
    }

    /// Adds the catalog course matching `name` and `section`.
    ///
    /// Returns `Ok(false)` when the catalog has no such course, and an error when a
    /// section of the same course is already on the schedule.
    pub fn add_course_to_schedule(&mut self, name: &str, section: &str) -> Result<bool> {
        let Some(course) = self.course_from_catalog(name, section) else {
            tracing::debug!("{}-{} is not in the catalog", name, section);
            return Ok(false);
        };
        let activity = Activity::Course(course.clone());

        if self.schedule.iter().any(|entry| activity.is_duplicate(entry)) {
            return Err(Error::invalid(format!("You are already enrolled in {name}")));
        }

        tracing::debug!("Scheduled course {}-{}", name, section);
        self.schedule.push(activity);
        Ok(true)
    }

    pub fn add_event_to_schedule(
        &mut self,
        title: &str,
        meeting_days: &str,
        start_time: i32,
        end_time: i32,
        details: &str,
    ) -> Result<()> {
        let activity = Activity::Event(Event::new(
            title,
            meeting_days,
            start_time,
            end_time,
            details,
        )?);

        if self.schedule.iter().any(|entry| activity.is_duplicate(entry)) {
            return Err(Error::invalid(format!(
                "You have already created an event called {title}"
            )));
        }

        tracing::debug!("Scheduled event {}", title);
        self.schedule.push(activity);
        Ok(())
    }

    /// Removes the activity at `index`; an out-of-range index is reported as `false`.
    pub fn remove_activity_from_schedule(&mut self, index: usize) -> bool {
        if index >= self.schedule.len() {
            return false;
        }
        let removed = self.schedule.remove(index);
        tracing::debug!("Removed {} from the schedule", removed.title());
        true
    }

    pub fn reset_schedule(&mut self) {
        self.schedule.clear();
    }

    pub fn schedule_title(&self) -> &str {
        &self.title
    }

    pub fn set_schedule_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Writes the schedule to `path`, one record per line.
    pub fn export_schedule<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        record_io::write_activity_records(path, &self.schedule).map_err(|e| match e {
            Error::Io(source) => Error::invalid_io("The file cannot be saved.", source),
            other => other,
        })?;

        tracing::info!(
            "Exported {} activities to {}",
            self.schedule.len(),
            path.display()
        );
        Ok(())
    }

    /// Index pairs `(i, j)` with `i < j` whose activities overlap in day and time.
    ///
    /// Purely a report: adding activities never consults it.
    pub fn conflicts(&self) -> Vec<(usize, usize)> {
        let mut pairs = Vec::new();
        for (i, first) in self.schedule.iter().enumerate() {
            for (j, second) in self.schedule.iter().enumerate().skip(i + 1) {
                if first.check_conflict(second).is_err() {
                    pairs.push((i, j));
                }
            }
        }
        pairs
    }

    /// Applies a plan on top of the current schedule.
    ///
    /// Selections the catalog does not know are returned instead of failing the
    /// whole plan. An invalid or duplicate entry fails the plan and leaves the
    /// title and schedule as they were before the call.
    pub fn apply_plan(&mut self, plan: &SchedulePlan) -> Result<Vec<CourseSelection>> {
        let title = self.title.clone();
        let scheduled = self.schedule.len();

        let result = self.apply_plan_entries(plan);
        if result.is_err() {
            self.title = title;
            self.schedule.truncate(scheduled);
        }
        result
    }

    fn apply_plan_entries(&mut self, plan: &SchedulePlan) -> Result<Vec<CourseSelection>> {
        if let Some(ref title) = plan.title {
            self.set_schedule_title(title.as_str());
        }

        let mut missing = Vec::new();
        for selection in &plan.courses {
            if !self.add_course_to_schedule(&selection.name, &selection.section)? {
                tracing::warn!(
                    "Course {}-{} is not in the catalog",
                    selection.name,
                    selection.section
                );
                missing.push(selection.clone());
            }
        }

        for event in &plan.events {
            self.add_event_to_schedule(
                &event.title,
                &event.meeting_days,
                event.start_time,
                event.end_time,
                &event.details,
            )?;
        }

        Ok(missing)
    }
}

#[cfg(test)]
mod tests;
