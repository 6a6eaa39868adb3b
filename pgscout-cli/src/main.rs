//! pgscout CLI — three entry points over the analysis pipeline.
//!
//! Exit codes: `nplusone` exits 1 when any warning-severity finding
//! exists; `indexes` and `config` always exit 0 on a successful run.
//! Fatal errors (missing root, schema, or configuration) exit 1 with a
//! diagnostic line on stderr.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use pgscout_analysis::analyzers::{self, nplusone, queries};
use pgscout_analysis::report::{ConsoleReporter, JsonReport};
use pgscout_analysis::scanner::{self, CONTROLLERS, MODELS_AND_CONTROLLERS, VIEWS};
use pgscout_analysis::FindingSet;
use pgscout_core::config::{DatabaseConfig, ScoutConfig};
use pgscout_core::errors::{PipelineError, ScanError};
use pgscout_core::project;

#[derive(Parser)]
#[command(
    name = "pgscout",
    about = "Static analysis for PostgreSQL performance risks in Rails applications",
    version
)]
struct Cli {
    /// Project root; discovered upward from the working directory when
    /// omitted.
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Report format.
    #[arg(long, global = true, value_enum, default_value_t = Format::Console)]
    format: Format,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Console,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Schema and query analysis: missing foreign-key indexes,
    /// partial-index and WHERE-clause opportunities.
    Indexes,
    /// Controller and view scan for potential N+1 query patterns.
    Nplusone,
    /// Connection-settings review of config/database.yml.
    Config,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("PGSCOUT_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode, PipelineError> {
    let root = match &cli.root {
        Some(root) => root.clone(),
        None => {
            let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            project::find_project_root(&cwd)?
        }
    };
    let config = ScoutConfig::load(&root)?;

    match cli.command {
        Command::Indexes => {
            let model = pgscout_analysis::load_schema(&project::schema_path(&root))?;
            let mut findings = analyzers::analyze_schema(&model);

            let outcome = scanner::scan(
                &root,
                MODELS_AND_CONTROLLERS,
                &[&queries::WhereClauseColumns],
            );
            findings.extend(outcome.data);
            report_skipped(&outcome.skipped);

            emit(cli, &config, &FindingSet::collect(findings))?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Nplusone => {
            let detector = nplusone::ControllerNPlusOne::from_config(&config.analysis);
            let controllers = scanner::scan(&root, CONTROLLERS, &[&detector]);
            let views = scanner::scan(&root, VIEWS, &[&nplusone::ViewAssociationAccess]);
            report_skipped(&controllers.skipped);
            report_skipped(&views.skipped);

            let mut findings = controllers.data;
            findings.extend(views.data);
            let set = FindingSet::collect(findings);
            emit(cli, &config, &set)?;

            // Warnings fail this entry point; the other entry points are
            // advisory regardless of findings.
            Ok(if set.has_warnings() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            })
        }
        Command::Config => {
            let database = DatabaseConfig::load(&project::database_config_path(&root))?;
            let findings = analyzers::analyze_database_config(&database);
            emit(cli, &config, &FindingSet::collect(findings))?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn emit(cli: &Cli, config: &ScoutConfig, set: &FindingSet) -> Result<(), PipelineError> {
    match cli.format {
        Format::Console => {
            let reporter = ConsoleReporter::from_config(&config.analysis);
            print!("{}", reporter.render(set));
        }
        Format::Json => {
            let json = JsonReport::from_set(set)
                .render()
                .map_err(|e| PipelineError::Report(e.to_string()))?;
            println!("{json}");
        }
    }
    Ok(())
}

fn report_skipped(skipped: &[ScanError]) {
    if skipped.is_empty() {
        return;
    }
    eprintln!("note: {} file(s) could not be read and were skipped:", skipped.len());
    for error in skipped {
        eprintln!("  {error}");
    }
}
