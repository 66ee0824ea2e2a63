use std::path::PathBuf;
use std::sync::mpsc;
use std::sync::mpsc::{Receiver, Sender};
use std::thread;
use std::thread::JoinHandle;

use anyhow::{anyhow, Result};
use asset::{FileLoadable, LoadError};

use crate::kind::LoadedAsset;

/// Result of one queued load, handed back together with the entity.
pub struct LoadOutcome {
    pub path: PathBuf,
    pub asset: Box<dyn LoadedAsset>,
    pub result: Result<(), LoadError>,
}

/// Runs `load_from_path` on a worker thread. Loads complete in queue order.
pub struct BackgroundLoader {
    message_sender: Sender<Message>,
    outcome_receiver: Receiver<LoadOutcome>,
    thread_handle: Option<JoinHandle<()>>,
}

impl BackgroundLoader {
    pub fn new() -> Self {
        let (message_sender, message_receiver) = mpsc::channel();
        let (outcome_sender, outcome_receiver) = mpsc::channel();

        let thread_handle = Some(thread::spawn(move || {
            while let Ok(message) = message_receiver.recv() {
                match message {
                    Message::Load(path, mut asset) => {
                        log::info!("loading {}...", path.display());
                        let result = asset.load_from_path(&path);
                        match &result {
                            Ok(()) => log::info!("loaded {}", path.display()),
                            Err(error) => log::error!("failed to load {}: {}", path.display(), error),
                        }

                        let outcome = LoadOutcome {
                            path,
                            asset,
                            result,
                        };
                        if outcome_sender.send(outcome).is_err() {
                            break;
                        }
                    }
                    Message::Stop => break,
                }
            }
        }));

        Self {
            message_sender,
            outcome_receiver,
            thread_handle,
        }
    }

    pub fn load(&self, path: PathBuf, asset: Box<dyn LoadedAsset>) -> Result<()> {
        self.message_sender
            .send(Message::Load(path, asset))
            .map_err(|_| anyhow!("loader thread has stopped"))
    }

    pub fn try_recv(&self) -> Option<LoadOutcome> {
        self.outcome_receiver.try_recv().ok()
    }

    /// Blocks until the next queued load finishes.
    pub fn recv(&self) -> Result<LoadOutcome> {
        self.outcome_receiver
            .recv()
            .map_err(|_| anyhow!("loader thread has stopped"))
    }
}

impl Default for BackgroundLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for BackgroundLoader {
    fn drop(&mut self) {
        let _ = self.message_sender.send(Message::Stop);
        if let Some(handle) = self.thread_handle.take() {
            if handle.join().is_err() {
                log::error!("loader thread panicked");
            }
        }
        log::debug!("background loader stopped");
    }
}

enum Message {
    Load(PathBuf, Box<dyn LoadedAsset>),
    Stop,
}
