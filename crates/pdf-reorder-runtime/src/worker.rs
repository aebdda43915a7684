use crate::{ReorderCommand, ReorderOutcome, ReorderUpdate};
use pdf_reorder::{ReorderOptions, calculate_statistics, load_pdf, process_with_options};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// How long shutdown waits for a running job before abandoning it
pub const DEFAULT_SHUTDOWN_TIMEOUT: Duration = Duration::from_millis(2000);

#[derive(Error, Debug)]
pub enum WorkerError {
    #[error("Worker has stopped")]
    Closed,
}

/// Front-end side of a running worker
pub struct WorkerHandle {
    command_tx: mpsc::UnboundedSender<ReorderCommand>,
    task: JoinHandle<()>,
}

impl WorkerHandle {
    /// Queue a command for the worker
    pub fn send(&self, command: ReorderCommand) -> Result<(), WorkerError> {
        self.command_tx.send(command).map_err(|_| WorkerError::Closed)
    }

    /// Stop accepting commands and wait up to `timeout` for the worker.
    ///
    /// Returns `true` if the worker finished in time. Otherwise the task is
    /// aborted and teardown proceeds anyway.
    pub async fn shutdown(self, timeout: Duration) -> bool {
        let WorkerHandle { command_tx, task } = self;
        drop(command_tx);

        let abort = task.abort_handle();
        match tokio::time::timeout(timeout, task).await {
            Ok(_) => true,
            Err(_) => {
                log::warn!(
                    "Worker did not stop within {} ms, abandoning it",
                    timeout.as_millis()
                );
                abort.abort();
                false
            }
        }
    }
}

/// Spawn the worker on the current tokio runtime.
pub fn spawn_worker() -> (WorkerHandle, mpsc::UnboundedReceiver<ReorderUpdate>) {
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let (update_tx, update_rx) = mpsc::unbounded_channel();
    let task = tokio::spawn(worker_task(command_rx, update_tx));
    (WorkerHandle { command_tx, task }, update_rx)
}

/// Run one reorder and fold any error into a displayable outcome
pub async fn run(options: &ReorderOptions) -> ReorderOutcome {
    match process_with_options(options).await {
        Ok(page_count) => ReorderOutcome::Success { page_count },
        Err(e) => ReorderOutcome::Failure {
            message: e.to_string(),
        },
    }
}

/// Async worker task that processes commands and sends updates
async fn worker_task(
    mut command_rx: mpsc::UnboundedReceiver<ReorderCommand>,
    update_tx: mpsc::UnboundedSender<ReorderUpdate>,
) {
    while let Some(cmd) = command_rx.recv().await {
        process_command(cmd, &update_tx).await;
    }
    log::debug!("Command channel closed, worker exiting");
}

async fn process_command(cmd: ReorderCommand, update_tx: &mpsc::UnboundedSender<ReorderUpdate>) {
    match cmd {
        ReorderCommand::Process { options } => handle_process(options, update_tx).await,
        ReorderCommand::CalculateStats { input_path } => {
            handle_calculate_stats(input_path, update_tx).await
        }
        ReorderCommand::LoadConfig { path } => handle_load_config(path, update_tx).await,
    }
}

async fn handle_process(options: ReorderOptions, update_tx: &mpsc::UnboundedSender<ReorderUpdate>) {
    let _ = update_tx.send(ReorderUpdate::Progress {
        message: "Processing...".to_string(),
    });

    let update = match run(&options).await {
        ReorderOutcome::Success { page_count } => ReorderUpdate::Complete {
            path: options.output_path(),
            page_count,
        },
        ReorderOutcome::Failure { message } => {
            log::error!("Reorder failed: {}", message);
            ReorderUpdate::Error { message }
        }
    };
    let _ = update_tx.send(update);
}

async fn handle_calculate_stats(
    input_path: PathBuf,
    update_tx: &mpsc::UnboundedSender<ReorderUpdate>,
) {
    let result = load_pdf(&input_path)
        .await
        .and_then(|doc| calculate_statistics(&doc));

    let update = match result {
        Ok(stats) => ReorderUpdate::StatsCalculated { stats },
        Err(e) => ReorderUpdate::Error {
            message: format!("Failed to read {}: {e}", input_path.display()),
        },
    };
    let _ = update_tx.send(update);
}

async fn handle_load_config(path: PathBuf, update_tx: &mpsc::UnboundedSender<ReorderUpdate>) {
    let update = match ReorderOptions::load(&path).await {
        Ok(options) => ReorderUpdate::ConfigLoaded { options },
        Err(e) => ReorderUpdate::Error {
            message: format!("Failed to load config: {e}"),
        },
    };
    let _ = update_tx.send(update);
}
