use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use tempfile::tempdir;

use super::{Delivery, ReportSettings, run_report};
use crate::args::ReportArgs;
use crate::context::RunContext;
use crate::error::{AppError, AppResult, NotifyError, SourceError, ValidationError};
use crate::jtl::LogFormat;
use crate::metrics::{MetricsSummary, Report, ReportMode, Verdict};
use crate::notify::{ChatPayload, MessageOptions, NotifyPort};

const RESULTS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<testResults version="1.2">
<httpSample t="100" ts="1000" s="true" lb="a"/>
<httpSample t="200" ts="2000" s="false" lb="b"/>
<httpSample t="300" ts="5000" s="true" lb="c"/>
</testResults>
"#;

#[derive(Default)]
struct RecordingNotifier {
    payloads: Mutex<Vec<ChatPayload>>,
    fail: bool,
}

impl RecordingNotifier {
    fn failing() -> Self {
        Self {
            payloads: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    fn texts(&self) -> Vec<String> {
        self.payloads
            .lock()
            .map(|payloads| payloads.iter().map(|payload| payload.text.clone()).collect())
            .unwrap_or_default()
    }
}

#[async_trait]
impl NotifyPort for RecordingNotifier {
    async fn deliver(&self, payload: &ChatPayload) -> AppResult<()> {
        if let Ok(mut payloads) = self.payloads.lock() {
            payloads.push(payload.clone());
        }
        if self.fail {
            return Err(AppError::notify(NotifyError::Rejected {
                status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                body: "down".to_owned(),
            }));
        }
        Ok(())
    }
}

fn settings(results: &Path, mode: ReportMode) -> ReportSettings {
    ReportSettings {
        results: results.to_path_buf(),
        test_plan: "checkout".to_owned(),
        mode,
        format: LogFormat::Auto,
        delivery: Delivery::DryRun,
        message: MessageOptions::default(),
        print_summary: false,
        context: None,
    }
}

fn write_results(dir: &Path, content: &str) -> AppResult<PathBuf> {
    let path = dir.join("results.jtl");
    std::fs::write(&path, content)?;
    Ok(path)
}

#[tokio::test]
async fn full_report_is_delivered() -> AppResult<()> {
    let dir = tempdir()?;
    let path = write_results(dir.path(), RESULTS_XML)?;
    let notifier = RecordingNotifier::default();

    let report = run_report(&settings(&path, ReportMode::Full), &notifier).await?;
    let Report::Metrics(summary) = report else {
        return Err(AppError::validation("Expected metrics report"));
    };
    if summary.total_requests != 3 || summary.success_rate.to_string() != "66.67" {
        return Err(AppError::validation(format!("Unexpected summary: {:?}", summary)));
    }
    let texts = notifier.texts();
    let [text] = texts.as_slice() else {
        return Err(AppError::validation("Expected exactly one payload"));
    };
    if !text.starts_with("*Load Test Report: checkout*") || !text.contains("Success Rate: 66.67%") {
        return Err(AppError::validation(format!("Unexpected text: {}", text)));
    }
    Ok(())
}

#[tokio::test]
async fn pass_fail_report_is_delivered() -> AppResult<()> {
    let dir = tempdir()?;
    let path = write_results(dir.path(), RESULTS_XML)?;
    let notifier = RecordingNotifier::default();

    let report = run_report(&settings(&path, ReportMode::PassFail), &notifier).await?;
    let expected = Report::Verdict(Verdict {
        test_passed: false,
        total_samples: 3,
    });
    if report != expected {
        return Err(AppError::validation(format!("Unexpected report: {:?}", report)));
    }
    if notifier.texts() != vec!["Test Plan: checkout - Status: FAILED\nSamples: 3".to_owned()] {
        return Err(AppError::validation(format!("Unexpected texts: {:?}", notifier.texts())));
    }
    Ok(())
}

#[tokio::test]
async fn malformed_log_degrades_by_mode() -> AppResult<()> {
    let dir = tempdir()?;
    let path = write_results(dir.path(), "<testResults><httpSample t=\"1\"")?;

    let full = run_report(&settings(&path, ReportMode::Full), &RecordingNotifier::default()).await?;
    if full != Report::Metrics(MetricsSummary::zero()) {
        return Err(AppError::validation(format!("Expected zero summary, got {:?}", full)));
    }

    let pass_fail =
        run_report(&settings(&path, ReportMode::PassFail), &RecordingNotifier::default()).await?;
    if pass_fail != Report::Verdict(Verdict::failed_closed()) {
        return Err(AppError::validation(format!("Expected failed verdict, got {:?}", pass_fail)));
    }
    Ok(())
}

#[tokio::test]
async fn missing_results_still_notifies_failure() -> AppResult<()> {
    let dir = tempdir()?;
    let path = dir.path().join("missing.jtl");
    let notifier = RecordingNotifier::default();

    match run_report(&settings(&path, ReportMode::Full), &notifier).await {
        Err(AppError::Source(SourceError::Unavailable { path: failed, .. })) if failed == path => {}
        other => {
            return Err(AppError::validation(format!(
                "Expected source error, got {:?}",
                other
            )));
        }
    }
    let texts = notifier.texts();
    let [text] = texts.as_slice() else {
        return Err(AppError::validation("Expected a failure notification"));
    };
    if !text.starts_with("Test Plan: checkout - Status: FAILED\nResults unavailable:") {
        return Err(AppError::validation(format!("Unexpected text: {}", text)));
    }
    Ok(())
}

#[tokio::test]
async fn failing_failure_notification_keeps_source_error() -> AppResult<()> {
    let dir = tempdir()?;
    let path = dir.path().join("missing.jtl");
    let notifier = RecordingNotifier::failing();

    match run_report(&settings(&path, ReportMode::PassFail), &notifier).await {
        Err(AppError::Source(_)) => Ok(()),
        other => Err(AppError::validation(format!(
            "Expected source error, got {:?}",
            other
        ))),
    }
}

#[tokio::test]
async fn delivery_errors_propagate() -> AppResult<()> {
    let dir = tempdir()?;
    let path = write_results(dir.path(), RESULTS_XML)?;

    match run_report(&settings(&path, ReportMode::Full), &RecordingNotifier::failing()).await {
        Err(AppError::Notify(NotifyError::Rejected { .. })) => Ok(()),
        other => Err(AppError::validation(format!(
            "Expected delivery error, got {:?}",
            other
        ))),
    }
}

fn parse(argv: &[&str]) -> AppResult<ReportArgs> {
    use clap::Parser;
    ReportArgs::try_parse_from(argv).map_err(AppError::from)
}

#[test]
fn settings_require_results() -> AppResult<()> {
    let mut args = parse(&["jtl-report", "--dry-run"])?;
    args.results = None;
    match ReportSettings::from_args(&args, None) {
        Err(AppError::Validation(ValidationError::MissingResults)) => Ok(()),
        other => Err(AppError::validation(format!(
            "Expected missing results, got {:?}",
            other
        ))),
    }
}

#[test]
fn settings_require_webhook_unless_dry_run() -> AppResult<()> {
    let mut args = parse(&["jtl-report", "--results", "r.jtl"])?;
    args.webhook_url = None;
    match ReportSettings::from_args(&args, None) {
        Err(AppError::Validation(ValidationError::MissingWebhookUrl)) => {}
        other => {
            return Err(AppError::validation(format!(
                "Expected missing webhook, got {:?}",
                other
            )));
        }
    }

    args.dry_run = true;
    let settings = ReportSettings::from_args(&args, None)?;
    if !matches!(settings.delivery, Delivery::DryRun) {
        return Err(AppError::validation("Expected dry-run delivery"));
    }
    Ok(())
}

#[test]
fn settings_validate_webhook_url() -> AppResult<()> {
    let mut args = parse(&["jtl-report", "--results", "r.jtl"])?;
    args.webhook_url = Some("ftp://hooks.example.com/x".to_owned());
    if !matches!(
        ReportSettings::from_args(&args, None),
        Err(AppError::Validation(ValidationError::UnsupportedWebhookScheme { .. }))
    ) {
        return Err(AppError::validation("Expected unsupported scheme"));
    }

    args.webhook_url = Some("not a url".to_owned());
    if !matches!(
        ReportSettings::from_args(&args, None),
        Err(AppError::Validation(ValidationError::InvalidWebhookUrl { .. }))
    ) {
        return Err(AppError::validation("Expected invalid url"));
    }

    args.webhook_url = Some("https://hooks.example.com/services/T/B/x".to_owned());
    args.timeout = Duration::from_secs(3);
    let settings = ReportSettings::from_args(&args, None)?;
    match settings.delivery {
        Delivery::Webhook(config) if config.timeout == Duration::from_secs(3) => Ok(()),
        other => Err(AppError::validation(format!("Unexpected delivery: {:?}", other))),
    }
}

#[test]
fn settings_resolve_test_plan_name() -> AppResult<()> {
    let mut args = parse(&["jtl-report", "--results", "r.jtl", "--dry-run"])?;
    args.jmx = Some("jmeter/tests/testPlan01.jmx".to_owned());
    args.test_plan = None;
    let context = RunContext {
        run_id: Some("1".to_owned()),
        repository: Some("acme/perf".to_owned()),
        server_url: "https://github.com".to_owned(),
    };
    let settings = ReportSettings::from_args(&args, Some(context.clone()))?;
    if settings.test_plan != "testPlan01" || settings.context != Some(context) {
        return Err(AppError::validation(format!(
            "Unexpected test plan: {}",
            settings.test_plan
        )));
    }

    args.test_plan = Some("Release smoke".to_owned());
    let overridden = ReportSettings::from_args(&args, None)?;
    if overridden.test_plan != "Release smoke" {
        return Err(AppError::validation("Expected explicit test plan to win"));
    }
    Ok(())
}
