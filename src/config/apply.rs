use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::ReportArgs;
use crate::error::{AppError, AppResult};

use super::types::ConfigFile;

/// Command-line flags and environment variables both outrank the file.
fn is_explicit(matches: &ArgMatches, name: &str) -> bool {
    matches!(
        matches.value_source(name),
        Some(ValueSource::CommandLine | ValueSource::EnvVariable)
    )
}

/// Applies configuration values to CLI arguments.
///
/// # Errors
///
/// Returns an error when config values are invalid.
pub fn apply_config(
    args: &mut ReportArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<()> {
    if !is_explicit(matches, "results")
        && let Some(results) = config.results.clone()
    {
        args.results = Some(results);
    }

    if !is_explicit(matches, "jmx")
        && let Some(jmx) = config.jmx.clone()
    {
        args.jmx = Some(jmx);
    }

    if !is_explicit(matches, "test_plan")
        && let Some(test_plan) = config.test_plan.clone()
    {
        args.test_plan = Some(test_plan);
    }

    if !is_explicit(matches, "mode")
        && let Some(mode) = config.mode
    {
        args.mode = mode;
    }

    if !is_explicit(matches, "format")
        && let Some(format) = config.format
    {
        args.format = format;
    }

    if !is_explicit(matches, "webhook_url")
        && let Some(webhook_url) = config.webhook_url.clone()
    {
        args.webhook_url = Some(webhook_url);
    }

    if !is_explicit(matches, "timeout")
        && let Some(timeout) = config.timeout.as_ref()
    {
        args.timeout = timeout.to_duration("timeout").map_err(AppError::config)?;
    }

    if !is_explicit(matches, "dry_run")
        && let Some(dry_run) = config.dry_run
    {
        args.dry_run = dry_run;
    }

    if !is_explicit(matches, "print_summary")
        && let Some(print_summary) = config.print_summary
    {
        args.print_summary = print_summary;
    }

    if let Some(message) = config.message.as_ref() {
        if !is_explicit(matches, "channel") && message.channel.is_some() {
            args.channel.clone_from(&message.channel);
        }
        if !is_explicit(matches, "username") && message.username.is_some() {
            args.username.clone_from(&message.username);
        }
        if !is_explicit(matches, "icon_emoji") && message.icon_emoji.is_some() {
            args.icon_emoji.clone_from(&message.icon_emoji);
        }
    }

    Ok(())
}
