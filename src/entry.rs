use clap::{ArgMatches, CommandFactory, FromArgMatches};

use crate::args::ReportArgs;
use crate::context::RunContext;
use crate::error::AppResult;
use crate::report::{self, ReportSettings};

pub(crate) fn run() -> AppResult<()> {
    let (mut args, matches) = parse_args()?;

    crate::logger::init_logging(args.verbose, args.no_color);

    apply_config(&mut args, &matches)?;
    let settings = ReportSettings::from_args(&args, RunContext::from_env())?;
    tracing::debug!(
        "Reporting {} in {:?} mode as '{}'",
        settings.results.display(),
        settings.mode,
        settings.test_plan
    );

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let outcome = runtime.block_on(report::run(&settings));
    if let Err(err) = &outcome {
        tracing::error!("Report failed: {}", err);
    }
    outcome
}

fn parse_args() -> AppResult<(ReportArgs, ArgMatches)> {
    let matches = ReportArgs::command().get_matches();
    let args = ReportArgs::from_arg_matches(&matches)?;
    Ok((args, matches))
}

fn apply_config(args: &mut ReportArgs, matches: &ArgMatches) -> AppResult<()> {
    if let Some(config) = crate::config::load_config(args.config.as_deref())? {
        crate::config::apply_config(args, matches, &config)?;
    }
    Ok(())
}
