use colored::*;

use super::truncate;
use crate::models::Project;

pub fn print_projects(projects: &[Project]) {
    if projects.is_empty() {
        println!("{}", "No projects found.".dimmed());
        return;
    }

    for (idx, project) in projects.iter().enumerate() {
        println!(
            " {}. {} {}",
            idx + 1,
            project.name.bold(),
            format!("({})", project.identifier).dimmed()
        );

        if let Some(desc) = &project.description {
            let first_line = desc.lines().find(|line| !line.trim().is_empty()).unwrap_or("");
            if !first_line.is_empty() {
                println!("    {}", truncate(first_line.trim(), 70).dimmed());
            }
        }
    }
}
