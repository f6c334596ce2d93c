//! Synthetic UV index forecast.

use chrono::{Duration, Local};
use rand::Rng;

use crate::types::{UvEntry, UvResponse};

struct UvLevel {
    level: &'static str,
    category: &'static str,
    text: &'static str,
}

const UV_LEVELS: &[UvLevel] = &[
    UvLevel { level: "1", category: "Minimal", text: "UV intensity is minimal; outdoor activity is safe." },
    UvLevel { level: "2", category: "Low", text: "UV intensity is low; SPF 12-15 sunscreen is recommended." },
    UvLevel { level: "3", category: "Moderate", text: "UV intensity is moderate; use SPF 15+ sunscreen." },
    UvLevel { level: "4", category: "High", text: "UV intensity is high; use SPF 20+ sunscreen." },
    UvLevel { level: "5", category: "Very High", text: "UV intensity is very high; use SPF 30+ sunscreen." },
];

/// Three days of UV forecast starting today (matching the upstream's
/// 3-day limit for this index).
pub fn uv_index() -> UvResponse {
    uv_index_with(&mut rand::thread_rng())
}

pub(crate) fn uv_index_with(rng: &mut impl Rng) -> UvResponse {
    let today = Local::now().date_naive();

    let daily = (0..3)
        .map(|i| {
            let level = &UV_LEVELS[rng.gen_range(0..UV_LEVELS.len())];
            UvEntry {
                date: (today + Duration::days(i)).format("%Y-%m-%d").to_string(),
                kind: "5".to_string(),
                name: "UV index".to_string(),
                level: level.level.to_string(),
                category: level.category.to_string(),
                text: level.text.to_string(),
            }
        })
        .collect();

    UvResponse {
        code: "200".to_string(),
        daily,
    }
}
