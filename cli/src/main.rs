//! CLI entrypoint for sensemaker
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow, bail};
use clap::Parser;
use sensemaker_application::AnalyzeCommentsUseCase;
use sensemaker_domain::{ConfigIssue, OutputFormat, Severity, SummarizationType};
use sensemaker_infrastructure::{ConfigLoader, FileConfig, JsonCommentSource};
use sensemaker_presentation::{Cli, ConsoleFormatter};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    // Logs go to stderr so JSON on stdout stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        println!("Configuration sources (in priority order):");
        for line in ConfigLoader::config_sources(cli.config.as_deref()) {
            println!("{}", line);
        }
        return Ok(());
    }

    // Load configuration
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    apply_overrides(&cli, &mut config);

    let issues = config.validate();
    for issue in &issues {
        match issue.severity {
            Severity::Error => error!("{}", issue.message),
            Severity::Warning => warn!("{}", issue.message),
        }
    }
    if ConfigIssue::has_errors(&issues) {
        bail!("Invalid configuration, see the errors above");
    }

    let Some(path) = cli.input.as_ref() else {
        bail!("An input file is required");
    };
    info!("Analyzing {}", path.display());

    // === Dependency Injection ===
    let use_case = AnalyzeCommentsUseCase::new(JsonCommentSource::new(path));
    let report = use_case.execute(config.analyze_input())?;

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    // Output results
    let format = cli
        .output
        .map(OutputFormat::from)
        .or(config.output.format)
        .unwrap_or_default();
    let output = match format {
        OutputFormat::Text => ConsoleFormatter::format(&report),
        OutputFormat::Json => ConsoleFormatter::format_json(&report),
    };

    println!("{}", output);

    Ok(())
}

/// Command-line flags take precedence over every configuration file
fn apply_overrides(cli: &Cli, config: &mut FileConfig) {
    if let Some(policy) = cli.policy {
        config.analysis.policy = SummarizationType::from(policy).as_str().to_string();
    }
    if let Some(size) = cli.sample_size {
        config.analysis.sample_size = Some(size);
    }
    if let Some(count) = cli.min_vote_count {
        config.grouped.min_vote_count = count;
        config.majority.min_vote_count = count;
    }
    if let Some(prob) = cli.min_common_ground_prob {
        config.grouped.min_common_ground_prob = prob;
        config.majority.min_common_ground_prob = prob;
    }
    if cli.no_topics {
        config.analysis.include_topics = false;
    }
}
