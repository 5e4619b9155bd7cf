//! View count formatting.

/// Format a raw view count into a magnitude-abbreviated display string.
///
/// - `>= 1_000_000` → one decimal place with an "M" suffix (2_500_000 → "2.5M")
/// - `>= 1_000` → rounded to the nearest thousand with a "K" suffix
///   (45_000 → "45K"; the 999_999 → "1000K" boundary is kept as upstream
///   renders it)
/// - otherwise the plain integer ("500")
pub fn format_view_count(views: u64) -> String {
    if views >= 1_000_000 {
        format!("{:.1}M", views as f64 / 1_000_000.0)
    } else if views >= 1_000 {
        format!("{:.0}K", views as f64 / 1_000.0)
    } else {
        views.to_string()
    }
}
