use std::path::PathBuf;

mod worker;

pub use worker::{DEFAULT_SHUTDOWN_TIMEOUT, WorkerError, WorkerHandle, run, spawn_worker};

// Re-export types from library crates
pub use pdf_reorder::{ReorderOptions, ReorderStatistics};

/// Commands sent from the front end to the worker
#[derive(Debug)]
pub enum ReorderCommand {
    /// Reorder `options.input_file` into `options.output_path()`
    Process {
        options: ReorderOptions,
    },
    CalculateStats {
        input_path: PathBuf,
    },
    LoadConfig {
        path: PathBuf,
    },
}

/// Updates sent from the worker to the front end
#[derive(Debug, Clone)]
pub enum ReorderUpdate {
    Progress {
        message: String,
    },
    Complete {
        path: PathBuf,
        page_count: usize,
    },
    StatsCalculated {
        stats: ReorderStatistics,
    },
    ConfigLoaded {
        options: ReorderOptions,
    },
    Error {
        message: String,
    },
}

impl ReorderUpdate {
    /// The terminal outcome this update carries, if any
    pub fn outcome(&self) -> Option<ReorderOutcome> {
        match self {
            ReorderUpdate::Complete { page_count, .. } => Some(ReorderOutcome::Success {
                page_count: *page_count,
            }),
            ReorderUpdate::Error { message } => Some(ReorderOutcome::Failure {
                message: message.clone(),
            }),
            _ => None,
        }
    }
}

/// Result of one reorder run, as shown to a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReorderOutcome {
    Success { page_count: usize },
    Failure { message: String },
}

impl ReorderOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ReorderOutcome::Success { .. })
    }
}
