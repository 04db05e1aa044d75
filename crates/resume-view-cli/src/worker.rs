//! Background worker thread for resume fetches

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};

use resume_view_core::ResumeClient;
use tracing::debug;

use crate::app::{AppMessage, WorkerMessage};

/// Background worker owning the HTTP client and its async runtime.
///
/// Fetches are processed one at a time; the UI's generation counter decides
/// which completion is still current.
pub struct Worker {
    handle: Option<JoinHandle<()>>,
    tx: Sender<WorkerMessage>,
}

impl Worker {
    /// Spawn a new worker thread
    pub fn spawn(app_tx: Sender<AppMessage>, client: ResumeClient) -> anyhow::Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        let (worker_tx, worker_rx) = mpsc::channel::<WorkerMessage>();

        let handle = thread::spawn(move || {
            run_worker(runtime, worker_rx, app_tx, client);
        });

        Ok(Self {
            handle: Some(handle),
            tx: worker_tx,
        })
    }

    /// Get a sender for sending messages to the worker
    pub fn sender(&self) -> Sender<WorkerMessage> {
        self.tx.clone()
    }

    /// Shutdown the worker and wait for it to finish
    pub fn shutdown(mut self) {
        let _ = self.tx.send(WorkerMessage::Shutdown);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn run_worker(
    runtime: tokio::runtime::Runtime,
    rx: Receiver<WorkerMessage>,
    app_tx: Sender<AppMessage>,
    client: ResumeClient,
) {
    loop {
        match rx.recv() {
            Ok(WorkerMessage::Fetch { name, generation }) => {
                debug!(%name, generation, "fetching resume");
                let result = runtime.block_on(client.fetch_resume(&name));
                let _ = app_tx.send(AppMessage::FetchComplete { generation, result });
            }
            Ok(WorkerMessage::Shutdown) | Err(_) => {
                break;
            }
        }
    }
}
