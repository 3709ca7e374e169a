use std::time::Duration;

/// Segment palette. Colors are assigned by index, wrapping around.
pub const SEGMENT_PALETTE: [&str; 8] = [
    "#879a39", // olive
    "#da702c", // orange
    "#8b7ec8", // purple
    "#d14d41", // red
    "#4385be", // blue
    "#3aa99f", // teal
    "#c437c2", // magenta
    "#d0a215", // ochre
];

/// Decimal places kept on segment proportions
pub const PROPORTION_DECIMAL_PRECISION: u32 = 2;

/// Decimal places for legend percentages
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Extra radial tolerance (px) around the ring for touch input
pub const TOUCH_PADDING: f64 = 10.0;

/// Label tag offset from the raw pointer position (px)
pub const LABEL_OFFSET_X: f64 = 12.0;
pub const LABEL_OFFSET_Y: f64 = -44.0;

/// Label tag size (px)
pub const LABEL_WIDTH: f64 = 120.0;
pub const LABEL_HEIGHT: f64 = 32.0;

/// Minimum distance between the label tag and the canvas edge (px)
pub const LABEL_MARGIN: f64 = 4.0;

/// Label fade in/out duration
pub const LABEL_FADE_DURATION: Duration = Duration::from_millis(200);

/// Legend row height beneath the ring (px)
pub const LEGEND_ROW_HEIGHT: f64 = 24.0;

/// Legend swatch side (px)
pub const LEGEND_SWATCH_SIZE: f64 = 12.0;

/// Opacity of the emphasis band drawn around the selected segment
pub const EMPHASIS_OPACITY: f64 = 0.35;

/// Default chart props
pub const DEFAULT_RADIUS: f64 = 100.0;
pub const DEFAULT_STROKE_WIDTH: f64 = 24.0;
pub const DEFAULT_OUTER_STROKE_WIDTH: f64 = 8.0;
pub const DEFAULT_GAP: f64 = 0.04;
pub const DEFAULT_VALUE_LABEL: &str = "Value: ";
