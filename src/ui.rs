//! egui adapter over [`crate::tools`].
//!
//! Panels own their input strings and last results; all computation is
//! delegated to the tool functions.

pub mod base64_panel;
pub mod case_panel;
pub mod color_panel;
pub mod counter;
pub mod diff_view;
pub mod json_panel;
pub mod lorem_panel;
pub mod markdown_panel;
pub mod nav;
pub mod password_panel;
pub mod qr_panel;
pub mod timestamp_panel;
pub mod title_bar;
pub mod uuid_panel;
pub mod viewport;

use crate::config::Settings;
use crate::messages::WorkerMessage;
use crate::status::{StatusLine, StatusMessage};
use egui::{RichText, Ui};
use std::sync::mpsc::Sender;

/// What a panel may touch besides its own state.
pub struct ToolContext<'a> {
    pub settings: &'a mut Settings,
    pub status: &'a mut StatusLine,
    pub worker: &'a Sender<WorkerMessage>,
}

impl ToolContext<'_> {
    pub fn notify(&mut self, message: StatusMessage) {
        self.status.set(message);
    }

    pub fn send(&mut self, message: WorkerMessage) {
        if let Err(e) = self.worker.send(message) {
            tracing::error!("Failed to reach worker: {}", e);
            self.status
                .set(StatusMessage::error("Background worker is not running"));
        }
    }
}

/// Copy `text` to the clipboard and confirm in the status line.
pub fn copy_to_clipboard(ui: &Ui, cx: &mut ToolContext<'_>, text: &str) {
    if text.is_empty() {
        return;
    }
    ui.ctx().copy_text(text.to_string());
    cx.notify(StatusMessage::success("Copied to clipboard!"));
}

pub fn section_heading(ui: &mut Ui, text: &str) {
    ui.label(RichText::new(text).strong().size(15.0));
}
