pub mod copy;
pub mod projects;

pub use copy::handle_copy;
pub use projects::handle_projects;
