pub mod projects;
pub mod sprints;
pub mod utils;

pub use projects::print_projects;
pub use sprints::{format_window, print_outcome};
pub use utils::truncate;
