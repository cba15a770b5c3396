use crate::models::DatasetStats;

/// Formats a count with comma thousands separators (`100836` → `100,836`)
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(c);
    }
    formatted
}

fn tile(value: &str, label: &str) -> String {
    format!(
        r#"<div class="stat bg-white rounded-lg shadow p-4 text-center"><div class="text-2xl font-bold">{}</div><div class="text-sm text-gray-500">{}</div></div>"#,
        value, label
    )
}

pub fn stats_panel(stats: &DatasetStats) -> String {
    let tiles = [
        tile(&format_count(stats.total_movies), "Movies"),
        tile(&format_count(stats.total_users), "Users"),
        tile(&format_count(stats.total_ratings), "Ratings"),
        tile(&format!("{:.1}", stats.avg_rating), "Avg Rating"),
        tile(&format_count(stats.unique_genres), "Genres"),
    ];

    format!(
        r#"<section class="stats mt-4 grid grid-cols-2 md:grid-cols-5 gap-4">{}</section>"#,
        tiles.concat()
    )
}
