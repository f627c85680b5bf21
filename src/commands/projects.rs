use clap::ArgMatches;

use crate::cli_context::CliContext;
use crate::client::Tracker;
use crate::error::RedmanResult;
use crate::formatting::print_projects;

pub async fn handle_projects(_matches: &ArgMatches, context: &mut CliContext) -> RedmanResult<()> {
    let client = context.client()?;

    let projects = client.list_projects().await?;

    if !projects.is_empty() {
        println!("Found {} projects:", projects.len());
    }
    print_projects(&projects);

    Ok(())
}
