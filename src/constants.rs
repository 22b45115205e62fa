pub const WINDOW_WIDTH: i32 = 960;            // Initial window width
pub const WINDOW_HEIGHT: i32 = 720;           // Initial window height
pub const FPS: u32 = 60;                      // Frames per second

pub const MARGIN: f32 = 16.0;                 // Space around the image and controls (pixels)
pub const CONTROL_BAR_HEIGHT: f32 = 64.0;     // Height reserved under the image for the controls
pub const BUTTON_WIDTH: f32 = 140.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
pub const COUNTER_GAP: f32 = 20.0;            // Horizontal gap between counter text and a button
pub const FONT_SIZE: i32 = 20;

pub const IMAGE_WIDTH: &str = "100%";         // `width` attribute of the injected <img>
pub const PREVIOUS_LABEL: &str = "⬅️ Previous";
pub const NEXT_LABEL: &str = "Next ➡️";

pub const COUNTER_WIDTH: f32 = 220.0;         // Slot reserved for the counter between the buttons
pub const BUTTON_PREVIOUS_LABEL: &str = "< Previous"; // Default raylib font has no emoji
pub const BUTTON_NEXT_LABEL: &str = "Next >";
