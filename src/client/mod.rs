pub mod redmine_client;
pub mod tracker;

pub use redmine_client::RedmineClient;
pub use tracker::Tracker;
