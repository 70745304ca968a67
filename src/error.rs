use std::fmt::Display;

use tracing::log;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FetchFailure {
    #[error("upstream responded with status {0}")]
    Status(u16),
    #[error("upstream call failed: {0}")]
    Network(String),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StatsError {
    #[error(transparent)]
    Fetch(#[from] FetchFailure),
    #[error("no data: {0}")]
    NoData(String),
}

pub trait LogResult<T, E: Display> {
    fn ok_log(self, msg: &str) -> Option<T>;
}

impl<T, E: Display> LogResult<T, E> for Result<T, E> {
    fn ok_log(self, msg: &str) -> Option<T> {
        match self {
            Ok(o) => Some(o),
            Err(e) => {
                log::error!("{}: {}", msg, e);
                None
            }
        }
    }
}
