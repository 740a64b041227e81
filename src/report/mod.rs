//! The report pipeline: results log → samples → report → notification.
mod pipeline;
mod settings;

#[cfg(test)]
mod tests;

pub use pipeline::run_report;
pub use settings::{Delivery, ReportSettings};

use crate::error::AppResult;
use crate::notify::{StdoutNotifier, WebhookNotifier};

/// Runs the pipeline with the notifier selected by the settings.
///
/// # Errors
///
/// Returns an error when the results file cannot be read or the
/// notification cannot be delivered.
pub async fn run(settings: &ReportSettings) -> AppResult<()> {
    let report = match &settings.delivery {
        Delivery::DryRun => run_report(settings, &StdoutNotifier).await?,
        Delivery::Webhook(config) => {
            let notifier = WebhookNotifier::new(config)?;
            run_report(settings, &notifier).await?
        }
    };
    tracing::info!(
        "Reported '{}' ({}).",
        settings.test_plan,
        if report.passed() { "passed" } else { "failed" }
    );
    Ok(())
}
