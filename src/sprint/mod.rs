//! Sprint template copying: date window, cadence check, sprint recreation
//! and cloning of stories, tasks and dividers into the new sprint.

pub mod cadence;
pub mod cloner;
pub mod dividers;
pub mod naming;
pub mod recreate;
pub mod report;
pub mod resolver;
pub mod run;
pub mod window;

pub use cadence::{days_elapsed, needs_to_run, parse_cadence_date};
pub use cloner::{CopiedStories, IssueCloner};
pub use dividers::DividerCloner;
pub use naming::long_sprint_name;
pub use recreate::{DeletedIssues, SprintRecreator};
pub use report::RunReport;
pub use resolver::find_sprint;
pub use run::{copy_sprint, CopyRequest, RunOutcome};
pub use window::{sprint_window, SprintWindow};
