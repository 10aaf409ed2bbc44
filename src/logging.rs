// src/logging.rs

use crate::config::Config;
use crate::errors::ChatResult;
use crate::models::ApiCallLog;
use flexi_logger::{FileSpec, Logger, LoggerHandle};
use log::info;

/// Starts the file logger. The terminal belongs to the UI, so nothing is
/// written to stdout or stderr. The returned handle must stay alive for
/// the lifetime of the program.
pub fn init_logger(config: &Config) -> ChatResult<LoggerHandle> {
    let handle = Logger::try_with_str(&config.log_level)?
        .log_to_file(
            FileSpec::default()
                .directory(&config.log_dir)
                .basename("chat-widget"),
        )
        .format(flexi_logger::detailed_format)
        .start()?;

    Ok(handle)
}

pub fn format_api_call(log: &ApiCallLog) -> String {
    format!(
        "[{}] {} - {} - Status: {} - Time: {}ms",
        log.timestamp.to_rfc3339(),
        log.endpoint,
        log.request_summary,
        log.response_status,
        log.response_time_ms
    )
}

/// Logs an API call through the `log` facade.
pub fn log_api_call(log: &ApiCallLog) {
    info!(target: "api_calls", "{}", format_api_call(log));
}
