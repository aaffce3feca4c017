use devkit::app::DevKitApp;
use devkit::constant;
use devkit::ui;
use std::path::PathBuf;

fn main() -> eframe::Result {
    tracing_subscriber::fmt::init();

    // `devkit [ORIGINAL MODIFIED]`
    let initial_files: Vec<PathBuf> = std::env::args().skip(1).take(2).map(PathBuf::from).collect();
    let options = ui::viewport::build_viewport();

    eframe::run_native(
        constant::DEFAULT_WINDOW_TITLE,
        options,
        Box::new(|cc| Ok(Box::new(DevKitApp::new(cc, initial_files)))),
    )
}
