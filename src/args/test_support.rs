use clap::Parser;

use crate::error::{AppError, AppResult};

use super::ReportArgs;

pub(crate) fn parse_test_args<I, T>(args: I) -> AppResult<ReportArgs>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    ReportArgs::try_parse_from(args).map_err(AppError::from)
}
