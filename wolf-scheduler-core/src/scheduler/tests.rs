use std::fs;

use tempfile::TempDir;

use super::*;
use crate::plan::EventSpec;

const CATALOG: &str = "\
CSC 116,Intro to Programming - Java,001,3,jdyoung2,MW,910,1100
CSC 116,Intro to Programming - Java,002,3,spbalik,MW,1120,1310
CSC 216,Software Development Fundamentals,001,3,sesmith5,TH,1330,1445
CSC 216,Software Development Fundamentals,601,3,jctetter,A
CSC 226,Discrete Mathematics for Computer Scientists,001,3,tmbarnes,MWF,935,1025
CSC216,Software Development Fundamentals,001,3,sesmith5,MW,1330,1445
this line is not a course
";

fn scheduler(dir: &TempDir) -> Scheduler {
    let path = dir.path().join("courses.txt");
    fs::write(&path, CATALOG).unwrap();
    Scheduler::new(&path).unwrap()
}

#[test]
fn test_new_loads_catalog() {
    let dir = TempDir::new().unwrap();
    let scheduler = scheduler(&dir);

    assert_eq!(scheduler.schedule_title(), "My Schedule");
    assert!(scheduler.schedule().is_empty());
    assert_eq!(scheduler.catalog().len(), 6);

    let catalog = scheduler.course_catalog();
    assert_eq!(catalog.len(), 6);
    assert_eq!(
        catalog[0],
        ["CSC 116", "001", "Intro to Programming - Java", "MW 9:10AM-11:00AM"]
    );
    assert_eq!(catalog[3][3], "Arranged");
}

#[test]
fn test_new_with_missing_catalog() {
    let dir = TempDir::new().unwrap();
    let err = Scheduler::new(dir.path().join("missing.txt")).unwrap_err();
    assert!(err.is_invalid_argument());
    assert_eq!(err.to_string(), "Cannot find file.");
}

#[test]
fn test_with_options_sets_title() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("courses.txt");
    fs::write(&path, CATALOG).unwrap();

    let scheduler = Scheduler::with_options(
        &path,
        SchedulerOptions {
            default_title: "Spring".to_string(),
        },
    )
    .unwrap();
    assert_eq!(scheduler.schedule_title(), "Spring");
}

#[test]
fn test_empty_catalog_gives_empty_tables() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.txt");
    fs::write(&path, "").unwrap();

    let scheduler = Scheduler::new(&path).unwrap();
    assert!(scheduler.course_catalog().is_empty());
    assert!(scheduler.scheduled_activities().is_empty());
    assert!(scheduler.full_scheduled_activities().is_empty());
}

#[test]
fn test_course_from_catalog() {
    let dir = TempDir::new().unwrap();
    let scheduler = scheduler(&dir);

    let course = scheduler.course_from_catalog("CSC 216", "601").unwrap();
    assert_eq!(course.instructor_id(), "jctetter");
    assert!(scheduler.course_from_catalog("CSC 216", "002").is_none());
    assert!(scheduler.course_from_catalog("CSC 492", "001").is_none());
}

#[test]
fn test_add_course() {
    let dir = TempDir::new().unwrap();
    let mut scheduler = scheduler(&dir);

    assert!(!scheduler.add_course_to_schedule("CSC 492", "001").unwrap());
    assert!(scheduler.add_course_to_schedule("CSC216", "001").unwrap());

    let err = scheduler.add_course_to_schedule("CSC216", "001").unwrap_err();
    assert!(err.is_invalid_argument());
    assert!(err.to_string().contains("already enrolled"));
    assert_eq!(scheduler.schedule().len(), 1);
}

#[test]
fn test_add_other_section_of_same_course() {
    let dir = TempDir::new().unwrap();
    let mut scheduler = scheduler(&dir);

    assert!(scheduler.add_course_to_schedule("CSC 216", "001").unwrap());
    let err = scheduler.add_course_to_schedule("CSC 216", "601").unwrap_err();
    assert_eq!(err.to_string(), "You are already enrolled in CSC 216");
}

#[test]
fn test_add_event() {
    let dir = TempDir::new().unwrap();
    let mut scheduler = scheduler(&dir);

    scheduler
        .add_event_to_schedule("Exercise", "MWF", 800, 850, "Carmichael gym")
        .unwrap();
    let err = scheduler
        .add_event_to_schedule("Exercise", "SU", 1000, 1100, "")
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "You have already created an event called Exercise"
    );

    let err = scheduler
        .add_event_to_schedule("Brunch", "A", 0, 0, "")
        .unwrap_err();
    assert_eq!(err.to_string(), "Invalid meeting days and times.");
    assert_eq!(scheduler.schedule().len(), 1);
}

#[test]
fn test_event_and_course_with_same_title_coexist() {
    let dir = TempDir::new().unwrap();
    let mut scheduler = scheduler(&dir);

    scheduler.add_course_to_schedule("CSC 226", "001").unwrap();
    scheduler
        .add_event_to_schedule("Discrete Mathematics for Computer Scientists", "S", 1000, 1200, "")
        .unwrap();
    assert_eq!(scheduler.schedule().len(), 2);
}

#[test]
fn test_display_tables() {
    let dir = TempDir::new().unwrap();
    let mut scheduler = scheduler(&dir);
    scheduler.add_course_to_schedule("CSC 216", "001").unwrap();
    scheduler
        .add_event_to_schedule("Lunch", "MTWHF", 1200, 1300, "Talley")
        .unwrap();

    assert_eq!(
        scheduler.scheduled_activities(),
        vec![
            ["CSC 216", "001", "Software Development Fundamentals", "TH 1:30PM-2:45PM"],
            ["", "", "Lunch", "MTWHF 12:00PM-1:00PM"],
        ]
    );
    assert_eq!(
        scheduler.full_scheduled_activities(),
        vec![
            [
                "CSC 216",
                "001",
                "Software Development Fundamentals",
                "3",
                "sesmith5",
                "TH 1:30PM-2:45PM",
                ""
            ],
            ["", "", "Lunch", "", "", "MTWHF 12:00PM-1:00PM", "Talley"],
        ]
    );
}

#[test]
fn test_remove_and_reset() {
    let dir = TempDir::new().unwrap();
    let mut scheduler = scheduler(&dir);
    scheduler.add_course_to_schedule("CSC 116", "001").unwrap();
    scheduler.add_course_to_schedule("CSC 226", "001").unwrap();

    assert!(!scheduler.remove_activity_from_schedule(5));
    assert!(!scheduler.remove_activity_from_schedule(2));
    assert_eq!(scheduler.schedule().len(), 2);

    assert!(scheduler.remove_activity_from_schedule(0));
    assert_eq!(scheduler.scheduled_activities()[0][0], "CSC 226");

    scheduler.reset_schedule();
    assert!(scheduler.schedule().is_empty());
    assert!(!scheduler.remove_activity_from_schedule(0));
    assert_eq!(scheduler.catalog().len(), 6);
}

#[test]
fn test_schedule_title() {
    let dir = TempDir::new().unwrap();
    let mut scheduler = scheduler(&dir);
    scheduler.set_schedule_title("Fall 2026");
    assert_eq!(scheduler.schedule_title(), "Fall 2026");
    scheduler.set_schedule_title("");
    assert_eq!(scheduler.schedule_title(), "");
}

#[test]
fn test_export_schedule() {
    let dir = TempDir::new().unwrap();
    let mut scheduler = scheduler(&dir);
    scheduler.add_course_to_schedule("CSC 216", "601").unwrap();
    scheduler
        .add_event_to_schedule("Exercise", "MWF", 800, 850, "Carmichael gym")
        .unwrap();

    let out = dir.path().join("schedule.txt");
    scheduler.export_schedule(&out).unwrap();
    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        "CSC 216,Software Development Fundamentals,601,3,jctetter,A\n\
         Exercise,MWF,800,850,Carmichael gym\n"
    );

    let err = scheduler
        .export_schedule(dir.path().join("missing/schedule.txt"))
        .unwrap_err();
    assert!(err.is_invalid_argument());
    assert_eq!(err.to_string(), "The file cannot be saved.");
}

#[test]
fn test_exported_courses_reload_as_catalog() {
    let dir = TempDir::new().unwrap();
    let mut scheduler = scheduler(&dir);
    scheduler.add_course_to_schedule("CSC 116", "002").unwrap();
    scheduler.add_course_to_schedule("CSC 216", "601").unwrap();

    let out = dir.path().join("export.txt");
    scheduler.export_schedule(&out).unwrap();

    let reloaded = Scheduler::new(&out).unwrap();
    let originals: Vec<&Course> = scheduler
        .schedule()
        .iter()
        .filter_map(Activity::as_course)
        .collect();
    assert_eq!(reloaded.catalog().iter().collect::<Vec<_>>(), originals);
}

#[test]
fn test_conflicts_report_is_not_enforced() {
    let dir = TempDir::new().unwrap();
    let mut scheduler = scheduler(&dir);
    scheduler.add_course_to_schedule("CSC 116", "001").unwrap();
    scheduler.add_course_to_schedule("CSC 226", "001").unwrap();
    scheduler.add_course_to_schedule("CSC 216", "001").unwrap();
    scheduler
        .add_event_to_schedule("Office hours", "H", 1445, 1530, "")
        .unwrap();

    assert_eq!(scheduler.schedule().len(), 4);
    assert_eq!(scheduler.conflicts(), vec![(0, 1), (2, 3)]);
}

#[test]
fn test_apply_plan() {
    let dir = TempDir::new().unwrap();
    let mut scheduler = scheduler(&dir);
    let plan = SchedulePlan {
        title: Some("Fall".to_string()),
        courses: vec![
            CourseSelection {
                name: "CSC 216".to_string(),
                section: "001".to_string(),
            },
            CourseSelection {
                name: "CSC 492".to_string(),
                section: "001".to_string(),
            },
        ],
        events: vec![EventSpec {
            title: "Exercise".to_string(),
            meeting_days: "SU".to_string(),
            start_time: 900,
            end_time: 1000,
            details: String::new(),
        }],
    };

    let missing = scheduler.apply_plan(&plan).unwrap();
    assert_eq!(missing.len(), 1);
    assert_eq!(missing[0].name, "CSC 492");
    assert_eq!(scheduler.schedule_title(), "Fall");
    assert_eq!(scheduler.schedule().len(), 2);

    let err = scheduler.apply_plan(&plan).unwrap_err();
    assert!(err.to_string().contains("already enrolled"));
    assert_eq!(scheduler.schedule().len(), 2);
}

#[test]
fn test_failed_plan_leaves_schedule_untouched() {
    let dir = TempDir::new().unwrap();
    let mut scheduler = scheduler(&dir);
    scheduler
        .add_event_to_schedule("Lunch", "MTWHF", 1200, 1300, "")
        .unwrap();

    let plan = SchedulePlan {
        title: Some("Spring".to_string()),
        courses: vec![CourseSelection {
            name: "CSC 226".to_string(),
            section: "001".to_string(),
        }],
        events: vec![
            EventSpec {
                title: "Exercise".to_string(),
                meeting_days: "SU".to_string(),
                start_time: 900,
                end_time: 1000,
                details: String::new(),
            },
            EventSpec {
                title: "Lunch".to_string(),
                meeting_days: "SU".to_string(),
                start_time: 1200,
                end_time: 1300,
                details: String::new(),
            },
        ],
    };

    let err = scheduler.apply_plan(&plan).unwrap_err();
    assert_eq!(err.to_string(), "You have already created an event called Lunch");
    assert_eq!(scheduler.schedule_title(), "My Schedule");
    assert_eq!(scheduler.schedule().len(), 1);
    assert_eq!(scheduler.schedule()[0].title(), "Lunch");
}
