use crate::messages::WorkerMessage;
use crate::status::{StatusLine, StatusMessage};
use crate::style::{ERROR_COLOR, SUCCESS_COLOR};
use crate::tools::password::{COST_RANGE, PasswordError, hashed_message, verify_message};
use crate::ui::{ToolContext, copy_to_clipboard, section_heading};
use egui::{RichText, Ui};

#[derive(Default)]
pub struct PasswordPanel {
    password: String,
    hash: String,
    hash_pending: bool,
    /// Rounds of the request in flight
    hash_cost: u32,
    verify_password: String,
    verify_hash: String,
    verify_pending: bool,
    verified: Option<bool>,
}

impl PasswordPanel {
    pub fn show(&mut self, ui: &mut Ui, cx: &mut ToolContext<'_>) {
        section_heading(ui, "Generate hash");

        ui.horizontal(|ui| {
            ui.label("Password");
            ui.add(egui::TextEdit::singleline(&mut self.password).password(true));
        });
        ui.horizontal(|ui| {
            ui.label("Rounds");
            ui.add(egui::Slider::new(&mut cx.settings.bcrypt_cost, COST_RANGE));
        });
        ui.horizontal(|ui| {
            let button = ui.add_enabled(!self.hash_pending, egui::Button::new("Generate Hash"));
            if button.clicked() {
                if self.password.is_empty() {
                    cx.notify(StatusMessage::error(PasswordError::EmptyPassword.to_string()));
                } else {
                    self.hash_pending = true;
                    let cost = cx.settings.bcrypt_cost;
                    self.hash_cost = cost;
                    cx.send(WorkerMessage::HashPassword {
                        password: self.password.clone(),
                        cost,
                    });
                }
            }
            if self.hash_pending {
                ui.spinner();
                ui.label("Generating...");
            }
        });

        if !self.hash.is_empty() {
            ui.horizontal(|ui| {
                ui.label(RichText::new(&self.hash).monospace());
                if ui.small_button("📋 Copy").clicked() {
                    copy_to_clipboard(ui, cx, &self.hash);
                }
            });
        }

        ui.separator();
        section_heading(ui, "Verify password");

        egui::Grid::new("verify_inputs")
            .num_columns(2)
            .show(ui, |ui| {
                ui.label("Password");
                ui.add(egui::TextEdit::singleline(&mut self.verify_password).password(true));
                ui.end_row();
                ui.label("Hash");
                ui.add(
                    egui::TextEdit::singleline(&mut self.verify_hash)
                        .font(egui::TextStyle::Monospace)
                        .desired_width(460.0),
                );
                ui.end_row();
            });

        ui.horizontal(|ui| {
            let button = ui.add_enabled(!self.verify_pending, egui::Button::new("Verify"));
            if button.clicked() {
                if self.verify_password.is_empty() || self.verify_hash.trim().is_empty() {
                    cx.notify(StatusMessage::error(PasswordError::MissingInput.to_string()));
                } else {
                    self.verify_pending = true;
                    self.verified = None;
                    cx.send(WorkerMessage::VerifyPassword {
                        password: self.verify_password.clone(),
                        hash: self.verify_hash.clone(),
                    });
                }
            }
            if self.verify_pending {
                ui.spinner();
            }

            if let Some(matches) = self.verified {
                let color = if matches { SUCCESS_COLOR } else { ERROR_COLOR };
                ui.label(RichText::new(verify_message(matches)).color(color));
            }
        });
    }

    pub fn on_hashed(&mut self, result: Result<String, PasswordError>, status: &mut StatusLine) {
        self.hash_pending = false;
        match result {
            Ok(hash) => {
                self.hash = hash;
                status.set(StatusMessage::success(hashed_message(self.hash_cost)));
            }
            Err(e) => status.set(StatusMessage::error(e.to_string())),
        }
    }

    pub fn on_verified(&mut self, result: Result<bool, PasswordError>, status: &mut StatusLine) {
        self.verify_pending = false;
        match result {
            Ok(matches) => self.verified = Some(matches),
            Err(e) => {
                self.verified = None;
                status.set(StatusMessage::error(e.to_string()));
            }
        }
    }
}
