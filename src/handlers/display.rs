use crate::models::coordinate_log::CoordinateLog;

/// Renders every entry of the log, each followed by a dash separator.
pub fn render_log(log: &CoordinateLog, precision: usize, separator_width: usize) -> String {
    let separator = "-".repeat(separator_width);
    let mut out = String::new();
    for (index, coordinate) in log.indexed() {
        out.push_str(&format!(
            "{index:02} ->  latitude :{}  longitude :{}\n",
            format_value(coordinate.lat, precision),
            format_value(coordinate.lon, precision),
        ));
        out.push_str(&separator);
        out.push('\n');
    }
    out
}

fn format_value(value: f64, precision: usize) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else {
        format!("{value:.precision$}")
    }
}
