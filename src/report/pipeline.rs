use std::io::Write;

use crate::error::{AppError, AppResult, SourceError};
use crate::jtl;
use crate::metrics::{self, Report};
use crate::notify::{Notification, NotifyPort, Outcome, render};

use super::settings::ReportSettings;

/// Reads the results log, aggregates it and delivers the notification.
///
/// Parse failures never abort the run; they degrade inside the aggregator.
/// An unreadable results file still produces a best-effort failure
/// notification before the source error is returned.
///
/// # Errors
///
/// Returns an error when the results file cannot be read, when the report
/// cannot be printed, or when delivery fails.
pub async fn run_report<N>(settings: &ReportSettings, notifier: &N) -> AppResult<Report>
where
    N: NotifyPort + ?Sized,
{
    let text = match tokio::fs::read_to_string(&settings.results).await {
        Ok(text) => text,
        Err(err) => {
            let error = SourceError::Unavailable {
                path: settings.results.clone(),
                source: err,
            };
            tracing::error!("{}", error);
            notify_source_failure(settings, notifier, &error).await;
            return Err(AppError::source(error));
        }
    };
    tracing::debug!(
        "Read {} bytes from {}",
        text.len(),
        settings.results.display()
    );

    let parsed = jtl::parse_samples(&text, settings.format);
    if let Ok(samples) = &parsed {
        tracing::info!("Extracted {} samples.", samples.len());
    }
    let report = metrics::aggregate(settings.mode, &parsed);

    if settings.print_summary {
        let rendered = serde_json::to_string_pretty(&report)?;
        writeln!(std::io::stdout().lock(), "{}", rendered)?;
    }

    let notification = Notification {
        test_plan: settings.test_plan.clone(),
        outcome: Outcome::Report(report),
        context: settings.context.clone(),
    };
    let payload = render(&notification, &settings.message)?;
    notifier.deliver(&payload).await?;
    Ok(report)
}

async fn notify_source_failure<N>(settings: &ReportSettings, notifier: &N, error: &SourceError)
where
    N: NotifyPort + ?Sized,
{
    let notification = Notification {
        test_plan: settings.test_plan.clone(),
        outcome: Outcome::SourceUnavailable {
            reason: error.to_string(),
        },
        context: settings.context.clone(),
    };
    let delivered = match render(&notification, &settings.message) {
        Ok(payload) => notifier.deliver(&payload).await,
        Err(err) => Err(err),
    };
    if let Err(err) = delivered {
        tracing::error!("Failed to send failure notification: {}", err);
    }
}
