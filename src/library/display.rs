use super::model::Track;

/// Format seconds as `m:ss`, truncating fractional seconds.
pub fn format_time(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    format!("{}:{:02}", total / 60, total % 60)
}

/// Window/document title for the track currently loaded.
pub fn document_title(track: &Track, app_name: &str) -> String {
    format!("{} - {} | {}", track.title, track.artist, app_name)
}
