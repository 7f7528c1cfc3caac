/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Initial value of the max clusters field
    pub const DEFAULT_MAX_CLUSTERS: u32 = 4;

    /// Initial contents of the CSV text area
    pub const PLACEHOLDER_TEXT: &'static str =
        "Paste the contents you would like to have calculated in csv format";

    /// Width and height of the scatter plot in pixels
    pub const CHART_SIDE_PX: u32 = 300;

    /// How long a finished submission stays on screen before the status clears (5 seconds)
    pub const STATUS_RESET_MS: u32 = 5_000;
}
