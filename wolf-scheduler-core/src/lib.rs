//! Wolf Scheduler Core Library
//!
//! This library maintains a course catalog loaded from a flat text file and
//! lets a user build a personal schedule of courses and events, check it for
//! day/time conflicts, and export it back to a text file.

pub mod activity;
pub mod course;
pub mod error;
pub mod event;
pub mod plan;
pub mod record_io;
pub mod scheduler;
pub mod types;

// Re-export core types and error handling
pub use activity::{Activity, ActivityCore, Conflict, Schedulable};
pub use course::Course;
pub use error::{ConflictError, Error, Result};
pub use event::Event;
pub use scheduler::Scheduler;
pub use types::*;

/// Commonly used items
pub mod prelude {
    pub use crate::{
        activity::*, course::*, event::*, plan::*, record_io::*, scheduler::*, types::*,
    };
}
