/// DOM-facing names and frame-loop tuning for the web front-end.
///
/// Physics and palette constants live in `core/constants.rs`.
// Element the start hook mounts onto when present
pub const CANVAS_ELEMENT_ID: &str = "ambient-canvas";

// Optional attributes on the canvas element
pub const VARIANT_ATTRIBUTE: &str = "data-variant";
pub const SEED_ATTRIBUTE: &str = "data-seed";

// How often the frame loop logs its average rate (seconds)
pub const FRAME_STATS_INTERVAL_SEC: u64 = 5;

// Pointer events that set the sample / clear it
pub const POINTER_SET_EVENTS: [&str; 2] = ["pointermove", "pointerdown"];
pub const POINTER_CLEAR_EVENTS: [&str; 3] = ["pointerup", "pointercancel", "pointerleave"];
