//! Cv screener: heuristic resume screening and job compatibility CLI

use clap::Parser;
use cv_screener::cli::{self, Cli, Commands, ConfigAction};
use cv_screener::config::Config;
use cv_screener::error::{Result, ScreenerError};
use cv_screener::output::formatter::OutputFormatter;
use cv_screener::{extract_text, ResumeAnalyzer};
use log::{error, info};
use std::path::Path;
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if !config.output.color_output {
        colored::control::set_override(false);
    }

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn build_analyzer(config: &Config) -> ResumeAnalyzer {
    match config.analysis.reference_year {
        Some(year) => ResumeAnalyzer::with_reference_year(year),
        None => ResumeAnalyzer::new(),
    }
}

fn display_name(path: &Path) -> &str {
    path.file_name().and_then(|n| n.to_str()).unwrap_or("resume.txt")
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            job,
            output,
            save,
            detailed,
        } => {
            cli::validate_file_extension(&resume, &["pdf", "doc", "docx", "txt"])
                .map_err(|e| ScreenerError::InvalidInput(format!("Resume file: {}", e)))?;

            let output_format =
                cli::parse_output_format(&output).map_err(ScreenerError::InvalidInput)?;

            let bytes = tokio::fs::read(&resume).await?;

            let job_text = match &job {
                Some(path) => {
                    let job_bytes = tokio::fs::read(path).await?;
                    Some(extract_text(&job_bytes, display_name(path)))
                }
                None => None,
            };

            info!("Analyzing resume: {}", resume.display());
            let analyzer = build_analyzer(&config);
            let report = analyzer.analyze(&bytes, display_name(&resume), job_text.as_deref())?;

            let formatter = OutputFormatter::new(detailed || config.output.detailed);
            let formatted = formatter.format_report(&report, &output_format)?;

            match save {
                Some(path) => {
                    tokio::fs::write(&path, formatted.as_bytes()).await?;
                    println!("Relatório salvo em {}", path.display());
                }
                None => println!("{}", formatted),
            }

            Ok(())
        }

        Commands::Assess { resume } => {
            let bytes = tokio::fs::read(&resume).await?;
            let text = extract_text(&bytes, display_name(&resume));

            let analyzer = build_analyzer(&config);
            let assessment = analyzer.quick_assess(&text);

            let formatter = OutputFormatter::new(false);
            println!("{}", formatter.format_assessment(&assessment));

            Ok(())
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Reset) => {
                let defaults = Config::default();
                defaults.save()?;
                println!("Configuration reset to defaults");
                Ok(())
            }
            Some(ConfigAction::Show) | None => {
                let content = toml::to_string_pretty(&config)
                    .map_err(|e| ScreenerError::Configuration(e.to_string()))?;
                println!("{}", content);
                Ok(())
            }
        },
    }
}
