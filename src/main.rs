mod args;
mod config;
mod context;
mod entry;
mod error;
mod jtl;
mod logger;
mod metrics;
mod notify;
mod report;

use error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
