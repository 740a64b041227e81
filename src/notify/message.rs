use std::fmt::Write as _;

use crate::context::RunContext;
use crate::error::{AppError, AppResult, NotifyError};
use crate::metrics::{MetricsSummary, Report, Verdict};

use super::payload::{ChatPayload, MessageOptions};

const STATUS_PASSED: &str = "PASSED";
const STATUS_FAILED: &str = "FAILED";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Report(Report),
    /// The results log could not be obtained at all.
    SourceUnavailable { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub test_plan: String,
    pub outcome: Outcome,
    pub context: Option<RunContext>,
}

/// Renders a notification into a chat payload.
///
/// # Errors
///
/// Returns an error if the message text cannot be formatted.
pub fn render(notification: &Notification, options: &MessageOptions) -> AppResult<ChatPayload> {
    let mut text = String::new();
    match &notification.outcome {
        Outcome::Report(Report::Metrics(summary)) => {
            write_metrics(&mut text, &notification.test_plan, summary)?;
        }
        Outcome::Report(Report::Verdict(verdict)) => {
            write_verdict(&mut text, &notification.test_plan, verdict)?;
        }
        Outcome::SourceUnavailable { reason } => {
            write_line(
                &mut text,
                &format!(
                    "Test Plan: {} - Status: {}",
                    notification.test_plan, STATUS_FAILED
                ),
            )?;
            write_line(&mut text, &format!("Results unavailable: {}", reason))?;
        }
    }

    if let Some(url) = notification.context.as_ref().and_then(RunContext::run_url) {
        write_line(&mut text, &format!("View run: {}", url))?;
    }

    Ok(ChatPayload {
        text: text.trim_end().to_owned(),
        channel: options.channel.clone(),
        username: options.username.clone(),
        icon_emoji: options.icon_emoji.clone(),
    })
}

fn write_line(output: &mut String, line: &str) -> AppResult<()> {
    writeln!(output, "{}", line)
        .map_err(|err| AppError::notify(NotifyError::WriteLine { source: err }))
}

const fn status(passed: bool) -> &'static str {
    if passed { STATUS_PASSED } else { STATUS_FAILED }
}

fn write_metrics(output: &mut String, test_plan: &str, summary: &MetricsSummary) -> AppResult<()> {
    write_line(output, &format!("*Load Test Report: {}*", test_plan))?;
    write_line(output, &format!("Status: {}", status(summary.all_passed())))?;
    write_line(output, &format!("Total Requests: {}", summary.total_requests))?;
    write_line(output, &format!("Failed Requests: {}", summary.failed_requests))?;
    write_line(output, &format!("Success Rate: {}%", summary.success_rate))?;
    write_line(
        output,
        &format!("Avg Response Time: {}ms", summary.avg_response_time),
    )?;
    write_line(
        output,
        &format!(
            "Min/Max Response Time: {}ms / {}ms",
            summary.min_time, summary.max_time
        ),
    )?;
    write_line(
        output,
        &format!("90th Percentile: {}ms", summary.percentile_90),
    )?;
    write_line(output, &format!("Duration: {}s", summary.duration_seconds))
}

fn write_verdict(output: &mut String, test_plan: &str, verdict: &Verdict) -> AppResult<()> {
    write_line(
        output,
        &format!(
            "Test Plan: {} - Status: {}",
            test_plan,
            status(verdict.test_passed)
        ),
    )?;
    write_line(output, &format!("Samples: {}", verdict.total_samples))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jtl::Sample;
    use crate::metrics::{SuccessRate, summarize};

    fn notification(outcome: Outcome, context: Option<RunContext>) -> Notification {
        Notification {
            test_plan: "checkout".to_owned(),
            outcome,
            context,
        }
    }

    #[test]
    fn metrics_message_lists_every_figure() -> AppResult<()> {
        let summary = summarize(&[
            Sample::new(true, 100, 1000),
            Sample::new(false, 200, 2000),
            Sample::new(true, 300, 5000),
        ]);
        let payload = render(
            &notification(Outcome::Report(Report::Metrics(summary)), None),
            &MessageOptions::default(),
        )?;
        let expected = "*Load Test Report: checkout*\n\
Status: FAILED\n\
Total Requests: 3\n\
Failed Requests: 1\n\
Success Rate: 66.67%\n\
Avg Response Time: 200ms\n\
Min/Max Response Time: 100ms / 300ms\n\
90th Percentile: 300ms\n\
Duration: 4s";
        if payload.text != expected {
            return Err(AppError::validation(format!(
                "Unexpected text: {}",
                payload.text
            )));
        }
        Ok(())
    }

    #[test]
    fn zero_summary_reads_as_passed() -> AppResult<()> {
        let payload = render(
            &notification(Outcome::Report(Report::Metrics(MetricsSummary::zero())), None),
            &MessageOptions::default(),
        )?;
        if !payload.text.contains("Status: PASSED") || !payload.text.contains("Success Rate: 0.00%")
        {
            return Err(AppError::validation(format!(
                "Unexpected text: {}",
                payload.text
            )));
        }
        let rate = SuccessRate::ZERO.to_string();
        if rate != "0.00" {
            return Err(AppError::validation(format!("Unexpected rate: {}", rate)));
        }
        Ok(())
    }

    #[test]
    fn verdict_message_with_run_link() -> AppResult<()> {
        let context = RunContext {
            run_id: Some("77".to_owned()),
            repository: Some("acme/perf".to_owned()),
            server_url: "https://github.com".to_owned(),
        };
        let verdict = Verdict {
            test_passed: true,
            total_samples: 12,
        };
        let payload = render(
            &notification(Outcome::Report(Report::Verdict(verdict)), Some(context)),
            &MessageOptions {
                channel: Some("#perf".to_owned()),
                username: None,
                icon_emoji: Some(":rocket:".to_owned()),
            },
        )?;
        let expected = "Test Plan: checkout - Status: PASSED\n\
Samples: 12\n\
View run: https://github.com/acme/perf/actions/runs/77";
        if payload.text != expected {
            return Err(AppError::validation(format!(
                "Unexpected text: {}",
                payload.text
            )));
        }
        if payload.channel.as_deref() != Some("#perf") || payload.username.is_some() {
            return Err(AppError::validation("Unexpected payload overrides"));
        }
        Ok(())
    }

    #[test]
    fn source_failure_message() -> AppResult<()> {
        let payload = render(
            &notification(
                Outcome::SourceUnavailable {
                    reason: "No such file".to_owned(),
                },
                None,
            ),
            &MessageOptions::default(),
        )?;
        if payload.text != "Test Plan: checkout - Status: FAILED\nResults unavailable: No such file" {
            return Err(AppError::validation(format!(
                "Unexpected text: {}",
                payload.text
            )));
        }
        Ok(())
    }

    #[test]
    fn payload_omits_unset_overrides() -> AppResult<()> {
        let payload = ChatPayload {
            text: "hi".to_owned(),
            channel: None,
            username: Some("perf-bot".to_owned()),
            icon_emoji: None,
        };
        let value = serde_json::to_value(&payload)?;
        if value != serde_json::json!({ "text": "hi", "username": "perf-bot" }) {
            return Err(AppError::validation(format!("Unexpected JSON: {}", value)));
        }
        Ok(())
    }
}
