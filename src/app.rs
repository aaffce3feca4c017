use crate::config::Config;
use crate::constant::DEFAULT_WINDOW_TITLE;
use crate::messages::{DiffPane, ResponseMessage, WorkerMessage};
use crate::status::{StatusLine, StatusMessage};
use crate::style::configure_style;
use crate::tools::ToolKind;
use crate::ui::ToolContext;
use crate::ui::base64_panel::Base64Panel;
use crate::ui::case_panel::CasePanel;
use crate::ui::color_panel::ColorPanel;
use crate::ui::counter::CounterPanel;
use crate::ui::diff_view::DiffPanel;
use crate::ui::json_panel::JsonPanel;
use crate::ui::lorem_panel::LoremPanel;
use crate::ui::markdown_panel::MarkdownPanel;
use crate::ui::nav::Nav;
use crate::ui::password_panel::PasswordPanel;
use crate::ui::qr_panel::QrPanel;
use crate::ui::timestamp_panel::TimestampPanel;
use crate::ui::title_bar::{TitleBar, TitleBarAction, TitleBarState};
use crate::ui::uuid_panel::UuidPanel;
use crate::worker::spawn_worker;
use std::path::PathBuf;
use std::sync::mpsc::{Receiver, Sender};
use std::time::Instant;
use tracing::{error, info};

#[derive(Default)]
struct Panels {
    counter: CounterPanel,
    diff: DiffPanel,
    case: CasePanel,
    markdown: MarkdownPanel,
    json: JsonPanel,
    base64: Base64Panel,
    color: ColorPanel,
    uuid: UuidPanel,
    timestamp: TimestampPanel,
    password: PasswordPanel,
    lorem: LoremPanel,
    qr: QrPanel,
}

pub struct DevKitApp {
    config: Config,
    active: ToolKind,
    status: StatusLine,
    panels: Panels,
    worker_sender: Sender<WorkerMessage>,
    worker_receiver: Receiver<ResponseMessage>,
}

impl Default for DevKitApp {
    fn default() -> Self {
        let config = Config::default();
        let (sender, receiver) = spawn_worker();
        Self {
            active: config.settings.last_tool,
            config,
            status: StatusLine::default(),
            panels: Panels::default(),
            worker_sender: sender,
            worker_receiver: receiver,
        }
    }
}

impl DevKitApp {
    /// `initial_files` go to the original and modified diff panes, in that order.
    pub fn new(cc: &eframe::CreationContext<'_>, initial_files: Vec<PathBuf>) -> Self {
        configure_style(&cc.egui_ctx);
        let mut app = Self::default();

        if !initial_files.is_empty() {
            app.active = ToolKind::DiffChecker;
        }
        for (pane, path) in [DiffPane::Original, DiffPane::Modified]
            .into_iter()
            .zip(initial_files)
        {
            info!("Preloading {:?} into the {:?} pane", path, pane);
            app.load_file(pane, path);
        }

        app
    }

    fn load_file(&mut self, pane: DiffPane, path: PathBuf) {
        if let Err(e) = self
            .worker_sender
            .send(WorkerMessage::LoadFile { pane, path })
        {
            error!("Failed to send load message: {}", e);
            self.status
                .set(StatusMessage::error("Background worker is not running"));
        }
    }

    fn handle_response(&mut self, response: ResponseMessage) {
        match response {
            ResponseMessage::FileLoaded { pane, path, result } => match result {
                Ok(content) => {
                    let name = path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_else(|| path.to_string_lossy().into_owned());
                    self.panels
                        .diff
                        .set_pane(pane, content, self.config.settings.diff_mode);
                    self.config.add_recent_file(path);
                    self.active = ToolKind::DiffChecker;
                    self.status
                        .set(StatusMessage::success(format!("Loaded {}", name)));
                }
                Err(e) => self.status.set(StatusMessage::error(e.to_string())),
            },
            ResponseMessage::FileSaved(result) => {
                let message = match result {
                    Ok(path) => StatusMessage::success(format!("Saved to {}", path.display())),
                    Err(e) => StatusMessage::error(e.to_string()),
                };
                self.status.set(message);
            }
            ResponseMessage::PasswordHashed(result) => {
                self.panels.password.on_hashed(result, &mut self.status);
            }
            ResponseMessage::PasswordVerified(result) => {
                self.panels.password.on_verified(result, &mut self.status);
            }
        }
    }
}

impl eframe::App for DevKitApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        while let Ok(response) = self.worker_receiver.try_recv() {
            self.handle_response(response);
        }

        // Title Bar
        let now = Instant::now();
        let mut title_action = None;
        egui::TopBottomPanel::top("title_bar_panel").show(ctx, |ui| {
            let status = self.status.current(now);
            if let Some(message) = status {
                ctx.request_repaint_after(message.remaining(now));
            }
            title_action = TitleBar::show(
                ui,
                TitleBarState {
                    title: DEFAULT_WINDOW_TITLE,
                    tool_title: self.active.title(),
                    status,
                    recent_files: &self.config.settings.recent_files,
                },
            );
        });

        match title_action {
            Some(TitleBarAction::OpenRecent(path)) => {
                let pane = self.panels.diff.next_empty_pane();
                self.load_file(pane, path);
            }
            Some(TitleBarAction::ClearRecent) => {
                self.config.settings.recent_files.clear();
            }
            None => {}
        }

        // Tool list
        egui::SidePanel::left("nav_panel")
            .resizable(false)
            .default_width(190.0)
            .show(ctx, |ui| {
                if let Some(tool) = Nav::show(ui, self.active) {
                    info!("Switching to {}", tool.title());
                    self.active = tool;
                }
            });

        // Active tool
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut cx = ToolContext {
                settings: &mut self.config.settings,
                status: &mut self.status,
                worker: &self.worker_sender,
            };
            let panels = &mut self.panels;

            egui::ScrollArea::vertical()
                .id_salt("tool_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| match self.active {
                    ToolKind::CharacterCounter => panels.counter.show(ui),
                    ToolKind::DiffChecker => panels.diff.show(ui, &mut cx),
                    ToolKind::CaseConverter => panels.case.show(ui, &mut cx),
                    ToolKind::MarkdownPreview => panels.markdown.show(ui, &mut cx),
                    ToolKind::JsonFormatter => panels.json.show(ui, &mut cx),
                    ToolKind::Base64 => panels.base64.show(ui, &mut cx),
                    ToolKind::ColorPicker => panels.color.show(ui, &mut cx),
                    ToolKind::UuidGenerator => panels.uuid.show(ui, &mut cx),
                    ToolKind::TimestampConverter => panels.timestamp.show(ui, &mut cx),
                    ToolKind::PasswordHasher => panels.password.show(ui, &mut cx),
                    ToolKind::LoremIpsum => panels.lorem.show(ui, &mut cx),
                    ToolKind::QrCode => panels.qr.show(ui, &mut cx),
                });
        });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.config.settings.last_tool = self.active;
        if let Err(e) = self.config.save() {
            error!("Failed to save settings on exit: {}", e);
        }
    }
}
