use crate::status::{StatusKind, StatusMessage};
use crate::style::{ERROR_COLOR, SUCCESS_COLOR};
use egui::{Align, Layout, RichText, Ui};
use std::path::PathBuf;

pub enum TitleBarAction {
    OpenRecent(PathBuf),
    ClearRecent,
}

pub struct TitleBar;

pub struct TitleBarState<'a> {
    pub title: &'a str,
    pub tool_title: &'a str,
    pub status: Option<&'a StatusMessage>,
    pub recent_files: &'a [PathBuf],
}

impl TitleBar {
    pub fn show(ui: &mut Ui, state: TitleBarState<'_>) -> Option<TitleBarAction> {
        let TitleBarState {
            title,
            tool_title,
            status,
            recent_files,
        } = state;

        let mut action = None;

        ui.horizontal(|ui| {
            ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                ui.label(RichText::new(title).strong());
                ui.label(RichText::new("/").weak());
                ui.label(tool_title);
                ui.add_space(16.0);

                ui.menu_button("📂 Recent", |ui| {
                    if recent_files.is_empty() {
                        ui.label(RichText::new("No recent files").weak());
                    }
                    for path in recent_files {
                        let file_name = path
                            .file_name()
                            .and_then(|n| n.to_str())
                            .unwrap_or("Unknown");
                        let path_str = path.to_string_lossy();
                        if ui
                            .button(file_name)
                            .on_hover_text(path_str.as_ref())
                            .clicked()
                        {
                            action = Some(TitleBarAction::OpenRecent(path.clone()));
                            ui.close();
                        }
                    }
                    if !recent_files.is_empty() {
                        ui.separator();
                        if ui.button("Clear list").clicked() {
                            action = Some(TitleBarAction::ClearRecent);
                            ui.close();
                        }
                    }
                })
                .response
                .on_hover_text("Load a recent file into the diff checker");
            });

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if let Some(message) = status {
                    let color = match message.kind {
                        StatusKind::Success => SUCCESS_COLOR,
                        StatusKind::Error => ERROR_COLOR,
                    };
                    ui.label(RichText::new(&message.text).color(color));
                }
            });
        });

        action
    }
}
