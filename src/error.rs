use thiserror::Error;

/// Everything that can sink a workload or the whole run.
///
/// Init-command failures are deliberately absent: they are warnings printed
/// to stderr, never errors.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{0}")]
    BadOption(String),

    #[error("bad pattern '{0}'")]
    BadPattern(String),

    #[error("bad template: {0}")]
    BadTemplate(String),

    #[error("cache I/O failed: {0}")]
    CacheIo(#[from] std::io::Error),

    #[error("failed to connect: {0}")]
    ConnectFail(sqlx::Error),

    #[error("query failed: {0}")]
    ServerQuery(sqlx::Error),

    #[error("drop table failed: {0}")]
    DropTable(sqlx::Error),

    #[error("cache generation interrupted")]
    Canceled,

    #[error("stop requested")]
    StopRequested,
}

impl LoadError {
    /// Interrupts are an accepted outcome: the process still exits 0 when
    /// every workload wound down cleanly after the stop flag was raised.
    pub fn is_clean_stop(&self) -> bool {
        matches!(self, LoadError::Canceled | LoadError::StopRequested)
    }
}
