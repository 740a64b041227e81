use std::path::PathBuf;

use url::Url;

use crate::args::ReportArgs;
use crate::context::{RunContext, test_plan_name};
use crate::error::{AppError, AppResult, ValidationError};
use crate::jtl::LogFormat;
use crate::metrics::ReportMode;
use crate::notify::{MessageOptions, NotifierConfig};

const WEBHOOK_SCHEMES: [&str; 2] = ["http", "https"];

#[derive(Debug, Clone)]
pub enum Delivery {
    /// Print the payload to stdout.
    DryRun,
    Webhook(NotifierConfig),
}

/// Fully resolved inputs for one report run.
#[derive(Debug, Clone)]
pub struct ReportSettings {
    pub results: PathBuf,
    pub test_plan: String,
    pub mode: ReportMode,
    pub format: LogFormat,
    pub delivery: Delivery,
    pub message: MessageOptions,
    pub print_summary: bool,
    pub context: Option<RunContext>,
}

impl ReportSettings {
    /// Validates CLI/config values into run settings.
    ///
    /// # Errors
    ///
    /// Returns an error when the results path is missing, or when a
    /// webhook is needed and missing or invalid.
    pub fn from_args(args: &ReportArgs, context: Option<RunContext>) -> AppResult<Self> {
        let results = args
            .results
            .as_deref()
            .map(str::trim)
            .filter(|path| !path.is_empty())
            .map(PathBuf::from)
            .ok_or_else(|| AppError::validation(ValidationError::MissingResults))?;

        let delivery = if args.dry_run {
            Delivery::DryRun
        } else {
            Delivery::Webhook(NotifierConfig {
                webhook_url: parse_webhook_url(args.webhook_url.as_deref())?,
                timeout: args.timeout,
            })
        };

        let test_plan = args
            .test_plan
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map_or_else(|| test_plan_name(args.jmx.as_deref()), str::to_owned);

        Ok(Self {
            results,
            test_plan,
            mode: args.mode,
            format: args.format,
            delivery,
            message: MessageOptions {
                channel: args.channel.clone(),
                username: args.username.clone(),
                icon_emoji: args.icon_emoji.clone(),
            },
            print_summary: args.print_summary,
            context,
        })
    }
}

fn parse_webhook_url(value: Option<&str>) -> AppResult<Url> {
    let raw = value
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .ok_or_else(|| AppError::validation(ValidationError::MissingWebhookUrl))?;
    let url = Url::parse(raw)
        .map_err(|err| AppError::validation(ValidationError::InvalidWebhookUrl { source: err }))?;
    if !WEBHOOK_SCHEMES.contains(&url.scheme()) {
        return Err(AppError::validation(
            ValidationError::UnsupportedWebhookScheme {
                scheme: url.scheme().to_owned(),
            },
        ));
    }
    Ok(url)
}
