//! Workflow Orchestration
//!
//! ストアを開き、参照コマンドの結果を整形する

use anyhow::{Context, Result};
use log::info;
use std::fmt::Write as _;
use std::sync::Arc;

use crate::adapter::config::Settings;
use crate::adapter::document_store::DocumentStore;
use crate::adapter::repositories::tinydb_notification_repository::TinyDbNotificationRepository;
use crate::adapter::repositories::tinydb_validation_repository::TinyDbValidationRepository;
use crate::application::use_cases::inspect_store::InspectStoreUseCase;
use crate::domain::entities::{NotificationState, ValidationResult};
use crate::domain::services::timestamp::format_timestamp;

use super::cli::Command;

type StoreUseCase = InspectStoreUseCase<TinyDbValidationRepository, TinyDbNotificationRepository>;

/// Inspect Workflow
pub struct InspectWorkflow {
    store: Arc<DocumentStore>,
    use_case: StoreUseCase,
}

impl InspectWorkflow {
    /// Open the configured store and wire the repositories
    pub fn new(settings: &Settings) -> Result<Self> {
        let store = settings.open_store().with_context(|| {
            format!(
                "Failed to open database {}",
                settings.tinydb_location.display()
            )
        })?;

        let validation_repo = Arc::new(TinyDbValidationRepository::new(&store));
        let notification_repo = Arc::new(TinyDbNotificationRepository::new(&store));
        let use_case = InspectStoreUseCase::new(validation_repo, notification_repo);

        Ok(Self { store, use_case })
    }

    /// Execute a command and print its output
    pub fn execute(&self, command: &Command) -> Result<()> {
        info!("Inspecting {}", self.store.path().display());
        print!("{}", self.render(command)?);
        Ok(())
    }

    /// Render a command's output as text
    pub fn render(&self, command: &Command) -> Result<String> {
        let mut out = String::new();

        match command {
            Command::Validations => {
                let results = self.use_case.list_validations()?;
                if results.is_empty() {
                    writeln!(out, "No validation results stored")?;
                }
                for result in &results {
                    writeln!(
                        out,
                        "{}\t{}\t{}",
                        result.validation_name,
                        result.status,
                        result
                            .last_execution
                            .as_ref()
                            .map_or_else(|| "-".to_string(), format_timestamp)
                    )?;
                }
            }
            Command::Validation { name } => match self.use_case.show_validation(name)? {
                Some(result) => render_validation(&mut out, &result)?,
                None => writeln!(out, "No validation result stored for {}", name)?,
            },
            Command::Notification { name } => match self.use_case.show_notification(name)? {
                Some(state) => render_notification(&mut out, &state)?,
                None => writeln!(out, "No open notification for {}", name)?,
            },
            Command::Summary => {
                let summary = self.use_case.status_summary()?;
                writeln!(out, "total: {}", summary.total)?;
                for (status, count) in &summary.by_status {
                    writeln!(out, "  {}: {}", status, count)?;
                }
            }
        }

        Ok(out)
    }

    pub fn close(self) {
        self.store.close();
    }
}

fn render_validation(out: &mut String, result: &ValidationResult) -> Result<()> {
    writeln!(out, "validation_name: {}", result.validation_name)?;
    writeln!(out, "status: {}", result.status)?;
    writeln!(out, "details: {}", serde_json::to_string(&result.details)?)?;
    match &result.settings {
        Some(settings) => writeln!(out, "settings: {}", serde_json::to_string(settings)?)?,
        None => writeln!(out, "settings: null")?,
    }
    match &result.last_execution {
        Some(at) => writeln!(out, "last_execution: {}", format_timestamp(at))?,
        None => writeln!(out, "last_execution: null")?,
    }
    Ok(())
}

fn render_notification(out: &mut String, state: &NotificationState) -> Result<()> {
    writeln!(out, "validation_name: {}", state.validation_name)?;
    writeln!(out, "thread_ids: {}", serde_json::to_string(&state.thread_ids)?)?;
    writeln!(out, "is_opened: {}", state.is_opened)?;
    writeln!(out, "options: {}", serde_json::to_string(&state.options)?)?;
    match &state.last_notification {
        Some(at) => writeln!(out, "last_notification: {}", format_timestamp(at))?,
        None => writeln!(out, "last_notification: null")?,
    }
    Ok(())
}
