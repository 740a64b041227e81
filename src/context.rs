//! Run metadata used to enrich notifications.
use std::path::Path;

use serde::Serialize;

pub const UNKNOWN_TEST_PLAN: &str = "Unknown Test Plan";
const TEST_PLAN_EXTENSION: &str = ".jmx";
const DEFAULT_SERVER_URL: &str = "https://github.com";

const ENV_ACTIONS: &str = "GITHUB_ACTIONS";
const ENV_RUN_ID: &str = "GITHUB_RUN_ID";
const ENV_REPOSITORY: &str = "GITHUB_REPOSITORY";
const ENV_SERVER_URL: &str = "GITHUB_SERVER_URL";

/// CI run that produced the results. Never used for computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunContext {
    pub run_id: Option<String>,
    pub repository: Option<String>,
    pub server_url: String,
}

impl RunContext {
    #[must_use]
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the context from an arbitrary variable lookup; `None` outside
    /// of a GitHub Actions run.
    pub fn from_lookup<F>(lookup: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        lookup(ENV_ACTIONS)?;
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        Some(Self {
            run_id: non_empty(ENV_RUN_ID),
            repository: non_empty(ENV_REPOSITORY),
            server_url: non_empty(ENV_SERVER_URL).unwrap_or_else(|| DEFAULT_SERVER_URL.to_owned()),
        })
    }

    #[must_use]
    pub fn run_url(&self) -> Option<String> {
        let run_id = self.run_id.as_deref()?;
        let repository = self.repository.as_deref()?;
        Some(format!(
            "{}/{}/actions/runs/{}",
            self.server_url.trim_end_matches('/'),
            repository,
            run_id
        ))
    }
}

/// Test plan name from a `.jmx` path: the file name without its extension.
#[must_use]
pub fn test_plan_name(jmx_path: Option<&str>) -> String {
    let Some(file_name) = jmx_path
        .map(str::trim)
        .filter(|path| !path.is_empty())
        .and_then(|path| Path::new(path).file_name())
        .and_then(|name| name.to_str())
    else {
        return UNKNOWN_TEST_PLAN.to_owned();
    };
    file_name
        .strip_suffix(TEST_PLAN_EXTENSION)
        .filter(|stem| !stem.is_empty())
        .unwrap_or(file_name)
        .to_owned()
}
