/// Backdrop and page tuning constants shared by the web and native frontends.
///
/// These express intended behavior (smoothing rates, falloff radii, thresholds)
/// and keep magic numbers out of the renderer and controller code.

// Pointer smoothing: fraction of the remaining distance covered per frame
pub const POINTER_SMOOTHING: f32 = 0.05;

// Field animation
pub const TIME_SCALE: f32 = 0.4; // elapsed seconds -> shader time
pub const STRENGTH_RADIUS: f32 = 0.8; // pointer influence falloff (aspect-corrected NDC)
pub const WARP_BASE: f32 = 0.3; // warp amplitude far from the pointer
pub const WARP_STRENGTH_GAIN: f32 = 0.5; // extra amplitude at the pointer
pub const WARP_FREQUENCY: f32 = 3.0; // spatial frequency per octave index
pub const WARP_OCTAVES: u32 = 3;
pub const TINT_AMPLITUDE: f32 = 0.3; // max blend toward the third colour stop
pub const TINT_RATE: f32 = 0.2; // tint drift speed in shader-time units

// Default palette (sRGB hex) for the three colour stops
pub const DEFAULT_COLOR_STOPS_HEX: [&str; 3] = [
    "#0f172a", // slate-900
    "#1e40af", // blue-800
    "#065f46", // emerald-800
];

// CPU fallback renders at 1/N of the canvas backing size and lets CSS upscale
pub const CPU_FALLBACK_DOWNSCALE: u32 = 8;

// Page behavior
pub const SCROLL_TOP_THRESHOLD_PX: f64 = 400.0;

// Contact form identity expected by the static-site form handler
pub const CONTACT_FORM_NAME: &str = "portfolio-contact";
pub const CONTACT_ENDPOINT: &str = "/";
pub const CONTACT_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
