//! rulelint CLI binary entry point.
//! Delegates to the library for discovery, analysis, and rendering.

use clap::Parser;
use rulelint::cli::{Cli, Commands};
use rulelint::config::{self, Effective};
use rulelint::review::{self, RenderMode};
use rulelint::{lint, output, utils};
use std::fs;

/// Resolve config and report a broken config file without stopping.
fn effective(repo_root: Option<&str>, out: Option<&str>, fail_on: Option<&str>) -> Effective {
    let (eff, err) = config::resolve_effective(repo_root, out, fail_on);
    if let Some(e) = err {
        eprintln!("{} {} Using defaults.", utils::error_prefix(), e);
    }
    if let Some(f) = fail_on {
        if config::parse_fail_on(f).is_err() {
            eprintln!(
                "{} Unknown --fail-on '{}'; using critical.",
                utils::note_prefix(),
                f
            );
        }
    }
    eff
}

fn main() {
    utils::init_logging();
    let cli = Cli::parse();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Lint {
            repo_root,
            output,
            fail_on,
        } => {
            let eff = effective(repo_root.as_deref(), output.as_deref(), fail_on.as_deref());
            if eff.output != "json" {
                eprintln!(
                    "{} Scanning {}",
                    utils::info_prefix(),
                    eff.repo_root.to_string_lossy()
                );
            }
            let report = lint::run_lint(&eff);
            output::print_lint(&report, &eff.output);
            if let Some(threshold) = eff.fail_on {
                if report.has_at_least(threshold) {
                    std::process::exit(1);
                }
            }
        }
        Commands::Review { repo_root, out } => {
            let eff = effective(repo_root.as_deref(), None, None);
            let report = lint::run_lint(&eff);
            let md = review::render(&report, RenderMode::select(&report));
            match out {
                Some(path) => {
                    if let Err(e) = fs::write(&path, md) {
                        eprintln!(
                            "{} Failed to write review to '{}': {}",
                            utils::error_prefix(),
                            path,
                            e
                        );
                        std::process::exit(2);
                    }
                    eprintln!("{} Review written to {}", utils::info_prefix(), path);
                }
                None => print!("{}", md),
            }
        }
        Commands::Ls { repo_root, output } => {
            let eff = effective(repo_root.as_deref(), output.as_deref(), None);
            let report = lint::run_lint(&eff);
            if report.documents().is_empty() && eff.output != "json" {
                eprintln!("{} No rules files found.", utils::note_prefix());
            }
            output::print_documents(&report, &eff.output);
        }
        Commands::Rules { output } => {
            output::print_rules(output.as_deref().unwrap_or("human"));
        }
    }
}
