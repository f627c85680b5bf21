use clap::builder::BoolishValueParser;
use clap::{value_parser, Arg, ArgAction, Command};

use crate::config::TemplateColor;
use crate::constants::CONFIG_DIR_ENV;

pub fn build_cli() -> Command {
    Command::new("redman")
        .about("Redman - recreate recurring Redmine sprints from template sprints")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("target")
                .long("target")
                .short('t')
                .value_name("NAME")
                .help("Deployment target whose settings to load (e.g. production, staging)")
                .required(true)
        )
        .arg(
            Arg::new("config-dir")
                .long("config-dir")
                .value_name("DIR")
                .help("Directory holding <target>.json settings files")
                .env(CONFIG_DIR_ENV)
                .global(true)
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log every request")
                .action(ArgAction::SetTrue)
                .global(true)
        )
        .subcommand(
            Command::new("projects")
                .about("List the projects in Redmine")
        )
        .subcommand(
            Command::new("copy")
                .about("Copy a template sprint into a new sprint")
                .arg(
                    Arg::new("template")
                        .value_name("TEMPLATE")
                        .help("Template to copy")
                        .value_parser(TemplateColor::NAMES)
                        .required(true)
                        .index(1)
                )
                .arg(
                    Arg::new("dry-run")
                        .long("dry-run")
                        .value_name("BOOL")
                        .help("Only report the dates of the sprint that would be created")
                        .value_parser(BoolishValueParser::new())
                        .num_args(0..=1)
                        .require_equals(true)
                        .default_value("true")
                        .default_missing_value("true")
                )
                .arg(
                    Arg::new("project")
                        .long("project")
                        .short('p')
                        .value_name("PROJECT_ID")
                        .help("Only copy the stories of this project")
                )
                .arg(
                    Arg::new("as-of")
                        .long("as-of")
                        .value_name("YYYY-MM-DD")
                        .help("Reference date used instead of today")
                )
                .arg(
                    Arg::new("start-date")
                        .long("start-date")
                        .value_name("DATE")
                        .help("Override the cadence start date from the settings")
                )
                .arg(
                    Arg::new("repeat-after")
                        .long("repeat-after")
                        .value_name("DAYS")
                        .help("Override the cadence interval from the settings")
                        .value_parser(value_parser!(i64))
                        .allow_negative_numbers(true)
                )
        )
}
