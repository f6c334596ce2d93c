//! Synthetic air-quality data.
//!
//! The AQI level, category and color all come from one canonical bucket
//! table, and the drawn AQI value doubles as the primary pollutant's
//! sub-index, so every dependent field traces back to the same draw.

use chrono::Local;
use rand::Rng;

use crate::types::{
    AirResponse, AqiColor, AqiIndex, Concentration, HealthAdvice, HealthGuidance, Pollutant,
    PollutantRef, SubIndex,
};

const TIME_FMT: &str = "%Y-%m-%dT%H:%M%:z";

pub(crate) struct AqiBucket {
    pub min: u32,
    pub max: u32,
    pub category: &'static str,
    pub color: AqiColor,
    pub effect: &'static str,
    pub advice: &'static str,
}

const fn rgb(red: u8, green: u8, blue: u8) -> AqiColor {
    AqiColor { red, green, blue, alpha: 1.0 }
}

/// Canonical AQI buckets. Ascending, covering 0-500 with no gaps or
/// overlaps; the level reported upstream-style is the 1-based index.
pub(crate) const AQI_BUCKETS: &[AqiBucket] = &[
    AqiBucket {
        min: 0,
        max: 50,
        category: "Excellent",
        color: rgb(0, 228, 0),
        effect: "Air quality is satisfactory and poses little or no risk.",
        advice: "Enjoy outdoor activities as usual.",
    },
    AqiBucket {
        min: 51,
        max: 100,
        category: "Good",
        color: rgb(255, 255, 0),
        effect: "Air quality is acceptable; a few unusually sensitive people may be affected.",
        advice: "Unusually sensitive people should consider reducing prolonged outdoor exertion.",
    },
    AqiBucket {
        min: 101,
        max: 150,
        category: "Lightly Polluted",
        color: rgb(255, 126, 0),
        effect: "Members of sensitive groups may experience health effects.",
        advice: "Sensitive groups should reduce outdoor exertion.",
    },
    AqiBucket {
        min: 151,
        max: 200,
        category: "Moderately Polluted",
        color: rgb(255, 0, 0),
        effect: "Everyone may begin to experience health effects.",
        advice: "Avoid prolonged outdoor exertion; sensitive groups should stay indoors.",
    },
    AqiBucket {
        min: 201,
        max: 300,
        category: "Heavily Polluted",
        color: rgb(143, 63, 151),
        effect: "Health warnings of emergency conditions; everyone is affected.",
        advice: "Avoid outdoor activity; keep windows closed.",
    },
    AqiBucket {
        min: 301,
        max: 500,
        category: "Severely Polluted",
        color: rgb(126, 0, 35),
        effect: "Serious risk of health effects for the entire population.",
        advice: "Stay indoors and keep activity levels low.",
    },
];

/// The unique bucket whose inclusive range contains `aqi`, with its
/// 0-based index. Falls back to the first bucket when nothing matches; the
/// fallback is unreachable for values in 0-500 and exists purely as a
/// defensive default.
pub(crate) fn bucket_for(aqi: u32) -> (usize, &'static AqiBucket) {
    AQI_BUCKETS
        .iter()
        .enumerate()
        .find(|(_, b)| aqi >= b.min && aqi <= b.max)
        .unwrap_or((0, &AQI_BUCKETS[0]))
}

struct PollutantSpec {
    code: &'static str,
    name: &'static str,
    full_name: &'static str,
    min: f64,
    max: f64,
    decimals: i32,
}

/// Fixed pollutant table. Carbon monoxide is the only pollutant measured
/// in mg/m³; everything else is µg/m³.
const POLLUTANTS: &[PollutantSpec] = &[
    PollutantSpec { code: "pm2p5", name: "PM2.5", full_name: "Fine particulate matter", min: 35.0, max: 75.0, decimals: 0 },
    PollutantSpec { code: "pm10", name: "PM10", full_name: "Inhalable particulate matter", min: 50.0, max: 150.0, decimals: 0 },
    PollutantSpec { code: "o3", name: "O3", full_name: "Ozone", min: 100.0, max: 160.0, decimals: 0 },
    PollutantSpec { code: "no2", name: "NO2", full_name: "Nitrogen dioxide", min: 40.0, max: 80.0, decimals: 0 },
    PollutantSpec { code: "so2", name: "SO2", full_name: "Sulfur dioxide", min: 20.0, max: 50.0, decimals: 0 },
    PollutantSpec { code: "co", name: "CO", full_name: "Carbon monoxide", min: 0.5, max: 2.0, decimals: 1 },
];

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Current air quality.
pub fn air_quality() -> AirResponse {
    air_quality_with(&mut rand::thread_rng())
}

pub(crate) fn air_quality_with(rng: &mut impl Rng) -> AirResponse {
    let aqi = rng.gen_range(20..=170);
    let (index, bucket) = bucket_for(aqi);
    let primary = &POLLUTANTS[rng.gen_range(0..POLLUTANTS.len())];

    let pollutants = POLLUTANTS
        .iter()
        .map(|spec| {
            // The primary pollutant's sub-index is the AQI itself; its
            // contribution is what defines the overall value.
            let sub_index = if spec.code == primary.code {
                aqi
            } else {
                rng.gen_range(20..aqi.max(21))
            };
            Pollutant {
                code: spec.code.to_string(),
                name: spec.name.to_string(),
                full_name: spec.full_name.to_string(),
                concentration: Concentration {
                    value: round_to(rng.gen_range(spec.min..spec.max), spec.decimals),
                    unit: if spec.code == "co" { "mg/m³" } else { "µg/m³" }.to_string(),
                },
                sub_index: SubIndex {
                    value: sub_index,
                    value_display: sub_index.to_string(),
                },
            }
        })
        .collect();

    AirResponse {
        code: "200".to_string(),
        update_time: Local::now().format(TIME_FMT).to_string(),
        indexes: vec![AqiIndex {
            aqi,
            aqi_display: aqi.to_string(),
            level: (index + 1).to_string(),
            category: bucket.category.to_string(),
            code: "cn-mee".to_string(),
            name: "AQI (CN)".to_string(),
            color: bucket.color,
            primary_pollutant: PollutantRef {
                code: primary.code.to_string(),
                name: primary.name.to_string(),
                full_name: primary.full_name.to_string(),
            },
            health: HealthGuidance {
                effect: bucket.effect.to_string(),
                advice: HealthAdvice {
                    general_population: bucket.advice.to_string(),
                    sensitive_population: bucket.advice.to_string(),
                },
            },
        }],
        pollutants,
        sources: vec!["China National Environmental Monitoring Centre".to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_buckets_partition_zero_to_five_hundred() {
        assert_eq!(AQI_BUCKETS[0].min, 0);
        assert_eq!(AQI_BUCKETS.last().unwrap().max, 500);
        for pair in AQI_BUCKETS.windows(2) {
            assert_eq!(pair[1].min, pair[0].max + 1);
        }
    }

    #[test]
    fn test_every_value_hits_exactly_one_bucket() {
        for v in 0..=500 {
            let matches = AQI_BUCKETS
                .iter()
                .filter(|b| v >= b.min && v <= b.max)
                .count();
            assert_eq!(matches, 1, "aqi {}", v);
        }
    }

    // The fallback arm of bucket_for is dead code unless the draw bounds
    // change: every value in 0-500 matches a bucket, and the generator
    // draws in 20-170. Exercised here only with an out-of-table value.
    #[test]
    fn test_fallback_defaults_to_first_bucket() {
        let (index, bucket) = bucket_for(501);
        assert_eq!(index, 0);
        assert_eq!(bucket.category, "Excellent");
    }

    #[test]
    fn test_level_category_color_are_consistent() {
        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            let resp = air_quality_with(&mut rng);
            let index = &resp.indexes[0];

            let (bucket_index, bucket) = bucket_for(index.aqi);
            assert_eq!(index.level, (bucket_index + 1).to_string());
            assert_eq!(index.category, bucket.category);
            assert_eq!(index.color, bucket.color);
            assert_eq!(index.aqi_display, index.aqi.to_string());
        }
    }

    #[test]
    fn test_primary_pollutant_consistency() {
        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            let resp = air_quality_with(&mut rng);
            let index = &resp.indexes[0];

            let primary = resp
                .pollutants
                .iter()
                .find(|p| p.code == index.primary_pollutant.code)
                .expect("primary pollutant listed");
            assert_eq!(primary.full_name, index.primary_pollutant.full_name);
            // Its sub-index carries the overall AQI value.
            assert_eq!(primary.sub_index.value, index.aqi);
        }
    }

    #[test]
    fn test_units_follow_pollutant_table() {
        let mut rng = StdRng::seed_from_u64(0);
        let resp = air_quality_with(&mut rng);
        for pollutant in &resp.pollutants {
            if pollutant.code == "co" {
                assert_eq!(pollutant.concentration.unit, "mg/m³");
            } else {
                assert_eq!(pollutant.concentration.unit, "µg/m³");
            }
        }
    }

    #[test]
    fn test_aqi_draw_within_bounds() {
        for seed in 0..64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let resp = air_quality_with(&mut rng);
            let aqi = resp.indexes[0].aqi;
            assert!((20..=170).contains(&aqi));
        }
    }
}
