use std::path::Path;

use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use menu_matrix_rs::classifier::{analyze, MenuReport};
use menu_matrix_rs::cli::{Cli, Command};
use menu_matrix_rs::config::MenuConfig;
use menu_matrix_rs::error::Result;
use menu_matrix_rs::interface::{
    display_category_dishes, display_classified_table, display_dish_line, display_distribution,
    display_summary, display_thresholds, prompt_dish_lookup, prompt_explore_action,
    prompt_output_path, prompt_yes_no, ExploreAction,
};
use menu_matrix_rs::storage::{load_table, save_classified};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = MenuConfig::load_or_default(cli.config.as_deref())?;
    let command = cli.command.unwrap_or_default();

    let table = load_table(&cli.file)?;
    let report = analyze(table, &config.columns)?;

    match command {
        Command::Classify { output } => cmd_classify(&report, &config, output.as_deref()),
        Command::Summary { json } => cmd_summary(&report, &config, json),
        Command::Explore => cmd_explore(&report, &config),
    }
}

/// Print the full classification and optionally write the optimized menu.
fn cmd_classify(report: &MenuReport, config: &MenuConfig, output: Option<&Path>) -> Result<()> {
    println!("Loaded {} dishes", report.dataset.len());

    display_classified_table(report);
    display_distribution(&report.distribution);
    display_thresholds(&report.thresholds, &config.currency_symbol);
    display_summary(&report.summary, &config.currency_symbol);

    if let Some(path) = output {
        save_classified(path, &report.dataset, config)?;
        println!("Wrote optimized menu to {}", path.display());
    }

    Ok(())
}

/// Print the thresholds and per-category summary.
fn cmd_summary(report: &MenuReport, config: &MenuConfig, json: bool) -> Result<()> {
    if json {
        let out = serde_json::json!({
            "dishes": report.dataset.len(),
            "thresholds": report.thresholds,
            "summary": report.summary,
            "distribution": report.distribution,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    display_thresholds(&report.thresholds, &config.currency_symbol);
    display_summary(&report.summary, &config.currency_symbol);
    Ok(())
}

/// Browse the classified menu interactively.
fn cmd_explore(report: &MenuReport, config: &MenuConfig) -> Result<()> {
    println!("Loaded {} dishes", report.dataset.len());
    display_distribution(&report.distribution);

    let symbol = config.currency_symbol.as_str();

    loop {
        match prompt_explore_action(report)? {
            ExploreAction::Browse(category) => {
                let dishes = report.dishes_in(category);
                display_category_dishes(category, &dishes, symbol);
            }
            ExploreAction::FindDish => {
                let items: Vec<_> = report.dataset.iter().collect();
                match prompt_dish_lookup(&items)? {
                    Some(item) => display_dish_line(item, symbol),
                    None => println!("No dish selected."),
                }
            }
            ExploreAction::ShowSummary => {
                display_thresholds(&report.thresholds, symbol);
                display_summary(&report.summary, symbol);
            }
            ExploreAction::Save => {
                let path = prompt_output_path(&config.output)?;
                if path.exists() {
                    let overwrite =
                        prompt_yes_no(&format!("{} exists. Overwrite?", path.display()), false)?;
                    if !overwrite {
                        continue;
                    }
                }
                save_classified(&path, &report.dataset, config)?;
                println!("Wrote optimized menu to {}", path.display());
            }
            ExploreAction::Quit => break,
        }
    }

    Ok(())
}
