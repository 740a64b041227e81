use std::io::Write;

use async_trait::async_trait;

use crate::error::{AppError, AppResult, NotifyError};

use super::NotifyPort;
use super::payload::ChatPayload;

/// Prints payloads instead of sending them (`--dry-run`).
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutNotifier;

#[async_trait]
impl NotifyPort for StdoutNotifier {
    async fn deliver(&self, payload: &ChatPayload) -> AppResult<()> {
        let mut stdout = std::io::stdout().lock();
        write_payload(&mut stdout, payload)
    }
}

pub(super) fn write_payload<W>(writer: &mut W, payload: &ChatPayload) -> AppResult<()>
where
    W: Write,
{
    let rendered = serde_json::to_string_pretty(payload)
        .map_err(|err| AppError::notify(NotifyError::Serialize { source: err }))?;
    writeln!(writer, "{}", rendered)
        .map_err(|err| AppError::notify(NotifyError::Write { source: err }))
}
