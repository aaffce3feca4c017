use crate::messages::{ResponseMessage, WorkerMessage};
use crate::tools::password;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::mpsc::{Receiver, Sender};
use std::thread;
use thiserror::Error;
use tracing::{debug, error, info};

#[derive(Error, Debug)]
pub enum WorkerError {
    #[error("Failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Runs file IO and bcrypt on one background thread so frames never block.
pub struct Worker {
    receiver: Receiver<WorkerMessage>,
    response_sender: Sender<ResponseMessage>,
}

impl Worker {
    pub fn new(receiver: Receiver<WorkerMessage>, response_sender: Sender<ResponseMessage>) -> Self {
        Self {
            receiver,
            response_sender,
        }
    }

    pub fn run(&self) {
        while let Ok(message) = self.receiver.recv() {
            let response = Self::handle(message);
            if let Err(e) = self.response_sender.send(response) {
                // UI side is gone
                debug!("Dropping worker response: {}", e);
                break;
            }
        }
        info!("Worker thread stopped");
    }

    fn handle(message: WorkerMessage) -> ResponseMessage {
        match message {
            WorkerMessage::LoadFile { pane, path } => {
                let result = fs::read_to_string(&path).map_err(|source| WorkerError::Read {
                    path: path.clone(),
                    source,
                });
                match &result {
                    Ok(content) => info!("Loaded {} bytes from {:?}", content.len(), path),
                    Err(e) => error!("{}", e),
                }
                ResponseMessage::FileLoaded { pane, path, result }
            }
            WorkerMessage::SaveFile { path, contents } => {
                let result = fs::write(&path, contents)
                    .map(|_| path.clone())
                    .map_err(|source| WorkerError::Write {
                        path: path.clone(),
                        source,
                    });
                match &result {
                    Ok(path) => info!("File saved successfully to {:?}", path),
                    Err(e) => error!("{}", e),
                }
                ResponseMessage::FileSaved(result)
            }
            WorkerMessage::HashPassword { password, cost } => {
                debug!("Hashing password with cost {}", cost);
                ResponseMessage::PasswordHashed(password::hash_password(&password, cost))
            }
            WorkerMessage::VerifyPassword { password, hash } => {
                ResponseMessage::PasswordVerified(password::verify_password(&password, &hash))
            }
        }
    }
}

pub fn spawn_worker() -> (Sender<WorkerMessage>, Receiver<ResponseMessage>) {
    let (sender, receiver) = std::sync::mpsc::channel();
    let (response_sender, response_receiver) = std::sync::mpsc::channel();
    thread::spawn(move || {
        let worker = Worker::new(receiver, response_sender);
        worker.run();
    });
    (sender, response_receiver)
}
