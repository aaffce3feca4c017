// Window size constants
pub const DEFAULT_WINDOW_WIDTH: f32 = 1024.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 700.0;
pub const DEFAULT_WINDOW_TITLE: &str = "DevKit";

/// Application name and metadata constants
pub const APP_QUALIFIER: &str = "dev";
pub const APP_ORGANIZATION: &str = "DevKit";
pub const APP_NAME: &str = "DevKit";

/// App related Magic Numbers
pub const MAX_RECENT_FILES: usize = 10;
pub const STATUS_TIMEOUT_SECS: u64 = 3;
pub const CLOCK_REFRESH_SECS: u64 = 1;
