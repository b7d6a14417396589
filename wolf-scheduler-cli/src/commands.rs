use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Args;
use serde::Serialize;
use wolf_scheduler_core::{
    Schedulable, Scheduler,
    plan::{CourseSelection, EventSpec, SchedulePlan},
};

/// Where the schedule entries come from
#[derive(Args, Debug, Default)]
pub struct SelectionArgs {
    /// JSON plan file with title, courses and events
    #[arg(short, long)]
    pub plan: Option<PathBuf>,

    /// Course to add, as NAME:SECTION (e.g. "CSC 216:001")
    #[arg(long = "course")]
    pub courses: Vec<String>,

    /// Event to add, as TITLE,DAYS,START,END[,DETAILS]
    #[arg(long = "event")]
    pub events: Vec<String>,
}

/// Build command parameters
pub struct BuildParams {
    pub catalog: PathBuf,
    pub selection: SelectionArgs,
    pub title: Option<String>,
    pub output: Option<PathBuf>,
    pub full: bool,
    pub json: bool,
}

/// List catalog command
pub fn catalog_command(catalog: &Path, json: bool) -> Result<()> {
    let scheduler = load_scheduler(catalog)?;
    let table = scheduler.course_catalog();

    if json {
        print_json(&table)?;
    } else if table.is_empty() {
        println!("The catalog has no valid courses.");
    } else {
        print_table(&table);
    }
    Ok(())
}

/// Build schedule command
pub fn build_command(params: BuildParams) -> Result<()> {
    let mut scheduler = build_schedule(&params.catalog, &params.selection)?;
    if let Some(title) = params.title {
        scheduler.set_schedule_title(title);
    }

    if params.json {
        if params.full {
            print_json(&scheduler.full_scheduled_activities())?;
        } else {
            print_json(&scheduler.scheduled_activities())?;
        }
    } else {
        println!("{}", scheduler.schedule_title());
        if scheduler.schedule().is_empty() {
            println!("  (no activities)");
        } else if params.full {
            print_table(&scheduler.full_scheduled_activities());
        } else {
            print_table(&scheduler.scheduled_activities());
        }
    }

    if let Some(output) = params.output {
        scheduler
            .export_schedule(&output)
            .with_context(|| format!("failed to export schedule to {}", output.display()))?;
        eprintln!("✓ Schedule saved to {}", output.display());
    }
    Ok(())
}

/// Conflict report command
pub fn conflicts_command(catalog: &Path, selection: &SelectionArgs) -> Result<()> {
    let scheduler = build_schedule(catalog, selection)?;
    let conflicts = scheduler.conflicts();

    if conflicts.is_empty() {
        println!("No schedule conflicts.");
        return Ok(());
    }

    let schedule = scheduler.schedule();
    for (i, j) in conflicts {
        println!(
            "{} ({}) conflicts with {} ({})",
            schedule[i].title(),
            schedule[i].meeting_string(),
            schedule[j].title(),
            schedule[j].meeting_string()
        );
    }
    Ok(())
}

fn load_scheduler(catalog: &Path) -> Result<Scheduler> {
    Scheduler::new(catalog)
        .with_context(|| format!("failed to load catalog {}", catalog.display()))
}

fn build_schedule(catalog: &Path, selection: &SelectionArgs) -> Result<Scheduler> {
    let mut scheduler = load_scheduler(catalog)?;

    let mut plan = match selection.plan {
        Some(ref path) => SchedulePlan::load(path)
            .with_context(|| format!("failed to read plan {}", path.display()))?,
        None => SchedulePlan::default(),
    };
    for course in &selection.courses {
        plan.courses.push(parse_course_arg(course)?);
    }
    for event in &selection.events {
        plan.events.push(parse_event_arg(event)?);
    }

    tracing::info!(
        "Building schedule: {} courses, {} events",
        plan.courses.len(),
        plan.events.len()
    );

    let missing = scheduler.apply_plan(&plan)?;
    for course in missing {
        eprintln!("✗ {}-{} is not in the catalog", course.name, course.section);
    }
    Ok(scheduler)
}

fn parse_course_arg(arg: &str) -> Result<CourseSelection> {
    let Some((name, section)) = arg.rsplit_once(':') else {
        bail!("course '{arg}' must look like NAME:SECTION");
    };
    Ok(CourseSelection {
        name: name.to_string(),
        section: section.to_string(),
    })
}

fn parse_event_arg(arg: &str) -> Result<EventSpec> {
    let fields: Vec<&str> = arg.splitn(5, ',').collect();
    if fields.len() < 4 {
        bail!("event '{arg}' must look like TITLE,DAYS,START,END[,DETAILS]");
    }
    let time = |value: &str| {
        value
            .trim()
            .parse::<i32>()
            .with_context(|| format!("invalid time '{value}' in event '{arg}'"))
    };

    Ok(EventSpec {
        title: fields[0].to_string(),
        meeting_days: fields[1].to_string(),
        start_time: time(fields[2])?,
        end_time: time(fields[3])?,
        details: fields.get(4).map(|d| d.to_string()).unwrap_or_default(),
    })
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_table<const N: usize>(rows: &[[String; N]]) {
    let mut widths = [0usize; N];
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    for (index, row) in rows.iter().enumerate() {
        let cells: Vec<String> = row
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect();
        println!("{index:>3}  {}", cells.join("  ").trim_end());
    }
}
