//! Command execution loop
//!
//! The runtime owns the model and performs the side effects `update` asks
//! for. File reads and writes run on worker threads and report back with a
//! message over a channel, so the model itself is only ever touched from the
//! thread that owns the runtime.

use std::sync::mpsc::{self, Receiver, Sender};

use crate::commands::Cmd;
use crate::csv::load_csv_file;
use crate::messages::Msg;
use crate::model::AppModel;
use crate::update::update;

pub struct Runtime {
    model: AppModel,
    msg_tx: Sender<Msg>,
    msg_rx: Receiver<Msg>,
    /// Worker jobs that have not reported back yet
    pending: usize,
    quit_requested: bool,
}

impl Runtime {
    pub fn new(model: AppModel) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        Self {
            model,
            msg_tx,
            msg_rx,
            pending: 0,
            quit_requested: false,
        }
    }

    /// Current model
    pub fn model(&self) -> &AppModel {
        &self.model
    }

    /// Check if a `Quit` command was processed
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Check if worker jobs are still in flight
    pub fn is_busy(&self) -> bool {
        self.pending > 0
    }

    /// Run one message through `update` and execute the resulting command.
    ///
    /// Returns true if the view should be redrawn.
    pub fn dispatch(&mut self, msg: Msg) -> bool {
        match update(&mut self.model, msg) {
            Some(cmd) => {
                let redraw = cmd.needs_redraw();
                self.pending += cmd.pending_replies();
                self.process_cmd(cmd);
                redraw
            }
            None => false,
        }
    }

    /// Block until every worker job has reported back.
    ///
    /// Returns true if any of the replies asked for a redraw.
    pub fn settle(&mut self) -> bool {
        let mut redraw = false;
        while self.pending > 0 {
            match self.msg_rx.recv() {
                Ok(msg) => {
                    self.pending -= 1;
                    redraw |= self.dispatch(msg);
                }
                Err(_) => break,
            }
        }
        redraw
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::Redraw => {}
            Cmd::LoadFile { path, delimiter } => {
                let tx = self.msg_tx.clone();
                std::thread::spawn(move || {
                    let result = load_csv_file(&path, delimiter).map_err(|e| e.to_string());
                    let _ = tx.send(Msg::FileLoaded { path, result });
                });
            }
            Cmd::WriteFile { path, content } => {
                let tx = self.msg_tx.clone();
                std::thread::spawn(move || {
                    let result = std::fs::write(&path, &content)
                        .map(|_| content.len())
                        .map_err(|e| e.to_string());
                    let _ = tx.send(Msg::ExportCompleted { path, result });
                });
            }
            Cmd::Quit => {
                self.quit_requested = true;
            }
        }
    }
}
