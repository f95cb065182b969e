//! Command implementations.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;

use life_baseline::adapters::ai::build_provider;
use life_baseline::adapters::export::{JsonReportExporter, LocalReportStorage, MarkdownReportExporter};
use life_baseline::adapters::profile_file::{load_profile, ProfileFileError};
use life_baseline::adapters::terminal::{renderer, Wizard, WizardError};
use life_baseline::application::handlers::{
    ExportReportCommand, ExportReportError, ExportReportHandler, GenerateReportCommand,
    GenerateReportError, GenerateReportHandler, SummaryOptions,
};
use life_baseline::application::session::LifeSession;
use life_baseline::config::{AppConfig, ConfigError};
use life_baseline::domain::foundation::CommandMetadata;
use life_baseline::domain::reference::Dimension;
use life_baseline::ports::{AIError, ExportFormat};

/// Anything that ends a CLI command with a non-zero exit code.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Summary provider setup failed: {0}")]
    Provider(#[from] AIError),

    #[error(transparent)]
    Profile(#[from] ProfileFileError),

    #[error(transparent)]
    Report(#[from] GenerateReportError),

    #[error(transparent)]
    Export(#[from] ExportReportError),

    #[error(transparent)]
    Wizard(#[from] WizardError),
}

/// Export flags of the `report` command.
#[derive(Debug, Clone, Default)]
pub struct ReportExport {
    pub save: bool,
    pub format: Option<ExportFormat>,
    pub export_dir: Option<PathBuf>,
}

fn load_config() -> Result<AppConfig, CliError> {
    let config = AppConfig::load()?;
    config.validate().map_err(ConfigError::from)?;
    tracing::debug!(
        provider = %config.ai.provider,
        export_dir = %config.report.export_dir.display(),
        "configuration loaded"
    );
    Ok(config)
}

fn generate_handler(config: &AppConfig) -> Result<GenerateReportHandler, CliError> {
    let provider = build_provider(&config.ai)?;
    Ok(
        GenerateReportHandler::new(provider).with_options(SummaryOptions {
            timeout: config.ai.timeout(),
            max_tokens: config.ai.max_tokens,
            temperature: config.ai.temperature,
        }),
    )
}

fn export_handler(export_dir: &Path) -> ExportReportHandler {
    ExportReportHandler::new(Arc::new(LocalReportStorage::new(export_dir)))
        .with_exporter(Arc::new(MarkdownReportExporter::new()))
        .with_exporter(Arc::new(JsonReportExporter::new()))
}

/// Interactive wizard on stdin/stdout.
pub async fn cmd_wizard(profile: Option<PathBuf>) -> Result<(), CliError> {
    let config = load_config()?;

    let session = match profile {
        Some(path) => LifeSession::new(load_profile(&path).await?),
        None => LifeSession::default(),
    };

    let mut wizard = Wizard::new(
        generate_handler(&config)?,
        export_handler(&config.report.export_dir),
        std::io::stdout(),
    )
    .with_session(session)
    .with_default_format(config.report.default_format)
    .with_loading_interval(config.report.loading_interval());

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    wizard.run(stdin).await?;
    Ok(())
}

/// One-shot report from a profile file.
pub async fn cmd_report(
    profile_path: &Path,
    export: ReportExport,
    charts: bool,
) -> Result<(), CliError> {
    let config = load_config()?;
    let profile = load_profile(profile_path).await?;

    let result = generate_handler(&config)?
        .handle(
            GenerateReportCommand::new(profile),
            CommandMetadata::new().with_source("report-cli"),
        )
        .await?;
    let report = result.report;

    print!("{}", renderer::render_report(&report));
    if charts {
        for dimension in Dimension::REPORT_ORDER {
            for comparison in report.comparisons_for(dimension) {
                println!();
                print!("{}", renderer::render_distribution_chart(comparison));
            }
        }
    }

    if export.save {
        let dir = export.export_dir.unwrap_or(config.report.export_dir);
        let format = export.format.unwrap_or(config.report.default_format);
        let saved = export_handler(&dir)
            .handle(
                ExportReportCommand::new(report, format),
                CommandMetadata::new().with_source("report-cli"),
            )
            .await?;
        println!("\n已保存: {}", saved.saved);
    }

    Ok(())
}

/// Status option tables.
pub fn cmd_options(dimension: Option<Dimension>) -> Result<(), CliError> {
    let dimensions = match dimension {
        Some(d) => vec![d],
        None => Dimension::ALL.to_vec(),
    };
    for dimension in dimensions {
        print!("{}", renderer::render_options(dimension));
    }
    Ok(())
}
