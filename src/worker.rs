// File: src/worker.rs
use crate::core::lexicon::Lexicon;
use crate::error::{Result, WordMakerError};
use crate::report::{build_report, Report};
use crossbeam_channel::{unbounded, Receiver, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Instant;

/// Runs lookups on a dedicated thread so the interactive loop never blocks
/// inside the exhaustive search itself. Requests are served one at a time,
/// in submission order.
pub struct LookupWorker {
    requests: Option<Sender<String>>,
    responses: Receiver<Report>,
    handle: Option<JoinHandle<()>>,
}

impl LookupWorker {
    pub fn spawn(lexicon: Arc<Lexicon>) -> Result<Self> {
        let (request_tx, request_rx) = unbounded::<String>();
        let (response_tx, response_rx) = unbounded::<Report>();

        let handle = thread::Builder::new()
            .name("word-lookup".to_string())
            .spawn(move || {
                for input in request_rx {
                    let started = Instant::now();
                    let report = build_report(&input, &lexicon);
                    log::debug!("Lookup for '{}' took {:?}", input.trim(), started.elapsed());
                    if response_tx.send(report).is_err() {
                        break;
                    }
                }
            })?;

        Ok(Self {
            requests: Some(request_tx),
            responses: response_rx,
            handle: Some(handle),
        })
    }

    pub fn submit(&self, input: String) -> Result<()> {
        self.requests
            .as_ref()
            .ok_or_else(|| WordMakerError::Worker("worker is shut down".to_string()))?
            .send(input)
            .map_err(|_| WordMakerError::Worker("lookup thread has stopped".to_string()))
    }

    /// Blocks until the next report is ready.
    pub fn recv(&self) -> Result<Report> {
        self.responses
            .recv()
            .map_err(|_| WordMakerError::Worker("lookup thread has stopped".to_string()))
    }

    pub fn lookup(&self, input: String) -> Result<Report> {
        self.submit(input)?;
        self.recv()
    }
}

impl Drop for LookupWorker {
    fn drop(&mut self) {
        // Closing the request channel ends the thread's loop.
        self.requests.take();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::error!("Lookup thread panicked");
            }
        }
    }
}
