/// Browser-side constants: DOM hooks the page may provide and HUD timing.
///
/// The viewer works without any of these elements; when present they get
/// the status line and the latest toast text.
// Element receiving the "park_brake: N (mode: X)" line
pub const STATUS_ELEMENT_ID: &str = "status";

// Fallback toast element used when the host registered no sink
pub const TOAST_ELEMENT_ID: &str = "toast";

// How long the fallback toast stays visible
pub const TOAST_VISIBLE_MS: i32 = 2000;

// Console level used until the host changes it
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;
