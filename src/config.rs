pub const SENTINEL: &str = "exit";
pub const LATITUDE_PROMPT: &str = "Enter latitude : or 'exit' to stop ";
pub const LONGITUDE_PROMPT: &str = "Enter Longitude : ";
pub const INVALID_INPUT_NOTICE: &str = "invalid Character ";
pub const DECIMAL_PRECISION: usize = 4;
pub const SEPARATOR_WIDTH: usize = 50;

/// Protocol constants for a collector run.
#[derive(Debug, Clone)]
pub struct CollectorConfig {
    pub sentinel: String,
    pub latitude_prompt: String,
    pub longitude_prompt: String,
    pub invalid_input_notice: String,
    pub precision: usize,
    pub separator_width: usize,
    /// Write the final log as JSON once the collector terminates.
    pub export_json: bool,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            sentinel: SENTINEL.to_string(),
            latitude_prompt: LATITUDE_PROMPT.to_string(),
            longitude_prompt: LONGITUDE_PROMPT.to_string(),
            invalid_input_notice: INVALID_INPUT_NOTICE.to_string(),
            precision: DECIMAL_PRECISION,
            separator_width: SEPARATOR_WIDTH,
            export_json: false,
        }
    }
}
