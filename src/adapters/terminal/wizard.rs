//! Interactive line-based wizard.
//!
//! Reads commands from any `AsyncBufRead`, advances the `LifeSession`
//! through its reducer and writes screens to any `io::Write`. Report
//! generation runs under `tokio::select!` so Ctrl-C cancels it while the
//! loading message keeps cycling.

use std::io::Write;
use std::time::Duration;

use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;

use super::command::WizardCommand;
use super::loading::{LoadingTicker, DEFAULT_LOADING_INTERVAL};
use super::renderer;
use crate::application::handlers::{
    ExportReportCommand, ExportReportHandler, GenerateReportCommand, GenerateReportHandler,
};
use crate::application::session::{LifeSession, SessionAction, WizardStep};
use crate::domain::comparison::ComparisonData;
use crate::domain::foundation::CommandMetadata;
use crate::domain::reference::Dimension;
use crate::domain::report::LifeReport;
use crate::ports::ExportFormat;

const PROMPT: &str = "> ";
const SOURCE: &str = "wizard";

/// Failures that end the wizard. Everything else is shown and skipped.
#[derive(Debug, Error)]
pub enum WizardError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Terminal front end for one session.
pub struct Wizard<W: Write> {
    session: LifeSession,
    generator: GenerateReportHandler,
    exporter: ExportReportHandler,
    default_format: ExportFormat,
    loading_interval: Duration,
    out: W,
}

impl<W: Write> Wizard<W> {
    pub fn new(generator: GenerateReportHandler, exporter: ExportReportHandler, out: W) -> Self {
        Self {
            session: LifeSession::default(),
            generator,
            exporter,
            default_format: ExportFormat::default(),
            loading_interval: DEFAULT_LOADING_INTERVAL,
            out,
        }
    }

    /// Builder: Start from an existing session.
    pub fn with_session(mut self, session: LifeSession) -> Self {
        self.session = session;
        self
    }

    /// Builder: Format used by a bare `export`.
    pub fn with_default_format(mut self, format: ExportFormat) -> Self {
        self.default_format = format;
        self
    }

    /// Builder: How long each loading message is shown.
    pub fn with_loading_interval(mut self, interval: Duration) -> Self {
        self.loading_interval = interval;
        self
    }

    pub fn session(&self) -> &LifeSession {
        &self.session
    }

    /// Consumes the wizard, returning the writer.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Runs until `quit`, end of input or Ctrl-C.
    pub async fn run<R>(&mut self, input: R) -> Result<(), WizardError>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = input.lines();
        write!(self.out, "{}", renderer::render_input(&self.session))?;
        write!(self.out, "\n输入 help 查看命令。\n")?;

        loop {
            write!(self.out, "{}", PROMPT)?;
            self.out.flush()?;

            let line = tokio::select! {
                line = lines.next_line() => line?,
                _ = tokio::signal::ctrl_c() => None,
            };
            let Some(line) = line else { break };

            match line.parse::<WizardCommand>() {
                Ok(WizardCommand::Quit) => break,
                Ok(command) => self.execute(command).await?,
                Err(err) => writeln!(self.out, "{}", err)?,
            }
        }

        writeln!(self.out, "\n{}", renderer::FOOTER)?;
        self.out.flush()?;
        Ok(())
    }

    async fn execute(&mut self, command: WizardCommand) -> Result<(), WizardError> {
        match command {
            WizardCommand::Birth(date) => {
                self.apply(SessionAction::SetBirthDate(date))?;
            }
            WizardCommand::Tab(dimension) => {
                if self.apply(SessionAction::SwitchTab(dimension))? {
                    self.show_input()?;
                }
            }
            WizardCommand::Range(Some(label)) => {
                self.apply(SessionAction::SelectRange(label))?;
            }
            WizardCommand::Range(None) => {
                self.apply(SessionAction::ClearRange)?;
            }
            WizardCommand::Status(code) => {
                self.apply(SessionAction::SelectStatus(code))?;
            }
            WizardCommand::Commit => {
                if self.session.selected_range().is_none() {
                    writeln!(self.out, "请先选择年龄区间（range <区间>）")?;
                } else if self.apply(SessionAction::Commit)? {
                    let track = renderer::render_track(&self.session, self.session.active_tab());
                    write!(self.out, "{}", track)?;
                }
            }
            WizardCommand::Remove(position) => self.remove(position)?,
            WizardCommand::List => {
                for dimension in Dimension::ALL {
                    write!(self.out, "{}", renderer::render_track(&self.session, dimension))?;
                }
            }
            WizardCommand::Options => {
                let options = renderer::render_options(self.session.active_tab());
                write!(self.out, "{}", options)?;
            }
            WizardCommand::Show => match (self.session.step(), self.session.report()) {
                (WizardStep::Report, Some(report)) => {
                    write!(self.out, "{}", renderer::render_report(report))?;
                }
                _ => self.show_input()?,
            },
            WizardCommand::Report => self.generate().await?,
            WizardCommand::Chart(position) => self.chart(position)?,
            WizardCommand::Back => {
                if self.apply(SessionAction::BackToInput)? {
                    self.show_input()?;
                }
            }
            WizardCommand::Export(format) => self.export(format).await?,
            WizardCommand::Help => write!(self.out, "{}", renderer::render_help())?,
            WizardCommand::Quit => {}
        }
        Ok(())
    }

    /// Applies an action; a rejected action is shown and leaves the session as is.
    fn apply(&mut self, action: SessionAction) -> Result<bool, WizardError> {
        match self.session.reduce(action) {
            Ok(next) => {
                self.session = next;
                Ok(true)
            }
            Err(err) => {
                writeln!(self.out, "{}", err)?;
                Ok(false)
            }
        }
    }

    fn show_input(&mut self) -> Result<(), WizardError> {
        write!(self.out, "{}", renderer::render_input(&self.session))?;
        Ok(())
    }

    fn remove(&mut self, position: usize) -> Result<(), WizardError> {
        let dimension = self.session.active_tab();
        let Some(id) = self
            .session
            .profile()
            .milestones(dimension)
            .get(position - 1)
            .map(|m| m.id())
        else {
            writeln!(self.out, "当前维度没有第 {} 条记录", position)?;
            return Ok(());
        };

        if self.apply(SessionAction::Remove { dimension, id })? {
            write!(self.out, "{}", renderer::render_track(&self.session, dimension))?;
        }
        Ok(())
    }

    async fn generate(&mut self) -> Result<(), WizardError> {
        if !self.apply(SessionAction::BeginGeneration)? {
            return Ok(());
        }

        let (tx, mut messages) = mpsc::unbounded_channel();
        let ticker = LoadingTicker::start(self.loading_interval, move |message| {
            let _ = tx.send(message);
        });

        let command = GenerateReportCommand::new(self.session.profile().clone());
        let outcome = {
            let work = self
                .generator
                .handle(command, CommandMetadata::new().with_source(SOURCE));
            tokio::pin!(work);
            let interrupt = tokio::signal::ctrl_c();
            tokio::pin!(interrupt);

            loop {
                tokio::select! {
                    result = &mut work => break Some(result),
                    _ = &mut interrupt => break None,
                    Some(message) = messages.recv() => {
                        writeln!(self.out, "{}", message)?;
                        self.out.flush()?;
                    }
                }
            }
        };
        ticker.stop();

        match outcome {
            Some(Ok(result)) => {
                self.apply(SessionAction::FinishGeneration(result.report))?;
                if let Some(report) = self.session.report() {
                    write!(self.out, "\n{}", renderer::render_report(report))?;
                }
            }
            Some(Err(err)) => {
                writeln!(self.out, "{}", err)?;
                self.apply(SessionAction::CancelGeneration)?;
            }
            None => {
                tracing::info!("report generation cancelled");
                self.apply(SessionAction::CancelGeneration)?;
                writeln!(self.out, "\n已取消生成，记录保持不变。")?;
            }
        }
        Ok(())
    }

    fn current_report(&mut self) -> Result<Option<LifeReport>, WizardError> {
        match (self.session.step(), self.session.report()) {
            (WizardStep::Report, Some(report)) => Ok(Some(report.clone())),
            _ => {
                writeln!(self.out, "请先生成报告（report）")?;
                Ok(None)
            }
        }
    }

    fn chart(&mut self, position: usize) -> Result<(), WizardError> {
        let Some(report) = self.current_report()? else {
            return Ok(());
        };

        // Same order as the report screen.
        let comparison: Option<&ComparisonData> = Dimension::REPORT_ORDER
            .iter()
            .flat_map(|d| report.comparisons_for(*d))
            .nth(position - 1);

        match comparison {
            Some(comparison) => {
                write!(self.out, "{}", renderer::render_distribution_chart(comparison))?;
            }
            None => writeln!(self.out, "报告中没有第 {} 条记录", position)?,
        }
        Ok(())
    }

    async fn export(&mut self, format: Option<ExportFormat>) -> Result<(), WizardError> {
        let Some(report) = self.current_report()? else {
            return Ok(());
        };

        let command = ExportReportCommand::new(report, format.unwrap_or(self.default_format));
        match self
            .exporter
            .handle(command, CommandMetadata::new().with_source(SOURCE))
            .await
        {
            Ok(result) => writeln!(self.out, "已保存: {}", result.saved)?,
            Err(err) => writeln!(self.out, "保存失败: {}", err)?,
        }
        Ok(())
    }
}
