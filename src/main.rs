//! Resume matcher: rank job postings against a resume

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, warn};
use resume_matcher::cli::{self, Cli, Commands, ConfigAction};
use resume_matcher::config::{Config, OutputFormat};
use resume_matcher::input::{InputManager, JobSourceManager};
use resume_matcher::matching::MatchEngine;
use resume_matcher::output::{
    resolve_save_path, save_report_to_file, ReportContext, ReportGenerator, ShortlistReport,
};
use resume_matcher::profile::{CandidateProfile, ProfileExtractor};
use resume_matcher::{Result, ResumeMatcherError};
use std::path::Path;
use std::process;
use std::time::Instant;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Profile { resume, output, save } => {
            let format = resolve_format(output.as_deref(), &config)?;
            let profile = load_profile(&resume, &config).await?;

            let generator = ReportGenerator::from_config(&config.output);
            let rendered = generator.generate_profile(&profile, format)?;
            emit(&rendered, save.as_deref(), format, &resume)
        }

        Commands::Match {
            resume,
            jobs,
            output,
            detailed,
            limit,
            all,
            save,
        } => {
            let started = Instant::now();
            let format = resolve_format(output.as_deref(), &config)?;
            let profile = load_profile(&resume, &config).await?;

            let progress = ProgressBar::new(jobs.len() as u64);
            let template = "{spinner} [{bar:30}] {pos}/{len} {msg}";
            if let Ok(style) = ProgressStyle::with_template(template) {
                progress.set_style(style);
            }
            progress.set_message("Loading job sources");
            let batch = JobSourceManager::new()
                .load_all_with(&jobs, |path| {
                    progress.set_message(path.display().to_string());
                    progress.inc(1);
                })
                .await;
            progress.finish_and_clear();

            if batch.is_empty() {
                warn!("No postings loaded from {} source(s)", jobs.len());
            }

            let results = MatchEngine::new().match_jobs(&profile, &batch.postings);

            let mut options = config.matching.clone();
            if let Some(limit) = limit {
                options.max_results = limit;
            }
            options.include_unranked |= all;

            let context = ReportContext {
                resume_file: resume.display().to_string(),
                job_sources: jobs.iter().map(|p| p.display().to_string()).collect(),
                failed_sources: batch.failed_sources,
                processing_time_ms: started.elapsed().as_millis() as u64,
            };
            let report = ShortlistReport::from_results(&profile, &results, &options, context);

            let mut output_config = config.output.clone();
            output_config.detailed |= detailed;
            let generator = ReportGenerator::from_config(&output_config);
            let rendered = generator.generate_report(&report, format)?;
            emit(&rendered, save.as_deref(), format, &resume)
        }

        Commands::Config { action } => match action.unwrap_or(ConfigAction::Show) {
            ConfigAction::Show => {
                println!("{}", config.to_toml()?);
                Ok(())
            }
            ConfigAction::Reset => {
                let defaults = Config::default();
                defaults.save()?;
                println!(
                    "Configuration reset to defaults at {}",
                    Config::config_path().display()
                );
                Ok(())
            }
            ConfigAction::Path => {
                println!("{}", Config::config_path().display());
                Ok(())
            }
        },
    }
}

fn resolve_format(requested: Option<&str>, config: &Config) -> Result<OutputFormat> {
    match requested {
        Some(format) => {
            cli::parse_output_format(format).map_err(ResumeMatcherError::InvalidInput)
        }
        None => Ok(config.output.format),
    }
}

/// Unsupported resume formats surface as `ParseError::UnsupportedFormat`
/// from the input manager.
async fn load_profile(resume: &Path, config: &Config) -> Result<CandidateProfile> {
    let mut input_manager = InputManager::new().with_cache(config.input.enable_caching);
    let text = input_manager.extract_text(resume).await?;
    info!("Read {} characters from {}", text.len(), resume.display());

    Ok(ProfileExtractor::new().extract(&text)?)
}

fn emit(rendered: &str, save: Option<&Path>, format: OutputFormat, resume: &Path) -> Result<()> {
    match save {
        Some(save) => {
            let path = resolve_save_path(save, format, resume);
            save_report_to_file(rendered, &path)?;
            info!("Saved output to {}", path.display());
        }
        None => println!("{}", rendered),
    }
    Ok(())
}
