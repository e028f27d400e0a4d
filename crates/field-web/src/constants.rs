// DOM wiring constants for the landing screen

// Element ids used when the page boots without a host framework
pub const CANVAS_ID: &str = "start-canvas";
pub const MAIN_CONTENT_ID: &str = "main-content";
pub const SCROLL_HINT_ID: &str = "scroll-hint";
pub const CURTAIN_LEFT_ID: &str = "curtain-left";
pub const CURTAIN_RIGHT_ID: &str = "curtain-right";

// Route the standalone page navigates to once the curtains close
pub const HOME_HASH: &str = "#/home";

// CSS classes toggled by the start screen
pub const HIDDEN_CLASS: &str = "hidden";
pub const VISIBLE_CLASS: &str = "visible";

// Wheel deltaMode normalization (DOM_DELTA_LINE / DOM_DELTA_PAGE)
pub const WHEEL_LINE_PX: f32 = 16.0;
