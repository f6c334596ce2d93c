//! Synthetic current conditions, hourly and daily forecasts, and
//! sunrise/sunset times.
//!
//! Hourly temperatures follow a diurnal curve (trough near 06:00, peak
//! near 18:00) around a base temperature drawn once per generation call,
//! so downstream charts look physically plausible rather than like noise.

use chrono::{Duration, Local, NaiveDate, Timelike};
use rand::Rng;

use crate::types::{
    DailyEntry, DailyResponse, HourlyEntry, HourlyResponse, NowResponse, SunResponse, WeatherNow,
};

const TIME_FMT: &str = "%Y-%m-%dT%H:%M%:z";
const DATE_FMT: &str = "%Y-%m-%d";

/// Half the peak-to-trough swing of the diurnal curve, in degrees.
const DIURNAL_AMPLITUDE: f64 = 6.0;

const BASE_TEMP_MIN: i32 = 18;
const BASE_TEMP_MAX: i32 = 28;

struct Condition {
    icon: &'static str,
    text: &'static str,
    rainy: bool,
}

/// Condition table using upstream icon codes. Rain-bearing entries are the
/// only ones that may produce non-zero precipitation.
const CONDITIONS: &[Condition] = &[
    Condition { icon: "100", text: "Sunny", rainy: false },
    Condition { icon: "101", text: "Cloudy", rainy: false },
    Condition { icon: "102", text: "Few Clouds", rainy: false },
    Condition { icon: "104", text: "Overcast", rainy: false },
    Condition { icon: "305", text: "Light Rain", rainy: true },
    Condition { icon: "306", text: "Moderate Rain", rainy: true },
];

/// Temperature at a given hour of day: base + diurnal swing + jitter.
fn diurnal_temp(base: i32, hour: u32, rng: &mut impl Rng) -> i32 {
    let phase = (f64::from(hour) - 12.0) / 24.0 * std::f64::consts::TAU;
    let swing = (DIURNAL_AMPLITUDE * phase.sin()).round() as i32;
    base + swing + rng.gen_range(0..=1)
}

fn compass(degrees: u32) -> &'static str {
    match ((f64::from(degrees) + 22.5) / 45.0) as u32 % 8 {
        0 => "N",
        1 => "NE",
        2 => "E",
        3 => "SE",
        4 => "S",
        5 => "SW",
        6 => "W",
        _ => "NW",
    }
}

fn pick_condition(rng: &mut impl Rng) -> &'static Condition {
    &CONDITIONS[rng.gen_range(0..CONDITIONS.len())]
}

/// Precipitation fields for a condition: rain-bearing conditions draw a
/// probability and amount, everything else is deterministically dry.
fn precipitation(condition: &Condition, rng: &mut impl Rng) -> (String, String) {
    if condition.rainy {
        let pop = rng.gen_range(40..=90);
        let amount: f64 = rng.gen_range(0.1..5.0);
        (pop.to_string(), format!("{:.1}", amount))
    } else {
        ("0".to_string(), "0.0".to_string())
    }
}

/// Current conditions.
pub fn current() -> NowResponse {
    current_with(&mut rand::thread_rng())
}

pub(crate) fn current_with(rng: &mut impl Rng) -> NowResponse {
    let now = Local::now();
    let base = rng.gen_range(BASE_TEMP_MIN..=BASE_TEMP_MAX);
    let condition = pick_condition(rng);
    let temp = diurnal_temp(base, now.hour(), rng);
    let (_, precip) = precipitation(condition, rng);
    let wind360 = rng.gen_range(0..360);
    let humidity = if condition.rainy {
        rng.gen_range(65..=95)
    } else {
        rng.gen_range(30..=70)
    };

    NowResponse {
        code: "200".to_string(),
        update_time: now.format(TIME_FMT).to_string(),
        now: WeatherNow {
            obs_time: now.format(TIME_FMT).to_string(),
            temp: temp.to_string(),
            feels_like: (temp - rng.gen_range(0..=2)).to_string(),
            icon: condition.icon.to_string(),
            text: condition.text.to_string(),
            wind360: wind360.to_string(),
            wind_dir: compass(wind360).to_string(),
            wind_scale: rng.gen_range(1..=4).to_string(),
            wind_speed: rng.gen_range(5..=30).to_string(),
            humidity: humidity.to_string(),
            precip,
            pressure: rng.gen_range(995..=1025).to_string(),
            vis: if condition.rainy {
                rng.gen_range(5..=15)
            } else {
                rng.gen_range(15..=30)
            }
            .to_string(),
            cloud: if condition.rainy {
                rng.gen_range(70..=100)
            } else {
                rng.gen_range(0..=60)
            }
            .to_string(),
            dew: (temp - rng.gen_range(4..=10)).to_string(),
        },
    }
}

/// Hourly forecast for the next `hours` hours (24 or 168).
///
/// The horizon is partitioned into contiguous 24-hour days; each day gets
/// one dominant condition, and every hour of that day shares it.
pub fn hourly(hours: usize) -> HourlyResponse {
    hourly_with(hours, &mut rand::thread_rng())
}

pub(crate) fn hourly_with(hours: usize, rng: &mut impl Rng) -> HourlyResponse {
    let start = Local::now();
    let base = rng.gen_range(BASE_TEMP_MIN..=BASE_TEMP_MAX);

    let mut entries = Vec::with_capacity(hours);
    let mut condition = pick_condition(rng);
    for offset in 0..hours {
        if offset % 24 == 0 && offset > 0 {
            condition = pick_condition(rng);
        }
        let time = start + Duration::hours(offset as i64 + 1);
        let temp = diurnal_temp(base, time.hour(), rng);
        let (pop, precip) = precipitation(condition, rng);
        let wind360 = rng.gen_range(0..360);

        entries.push(HourlyEntry {
            fx_time: time.format(TIME_FMT).to_string(),
            temp: temp.to_string(),
            icon: condition.icon.to_string(),
            text: condition.text.to_string(),
            wind360: wind360.to_string(),
            wind_dir: compass(wind360).to_string(),
            wind_scale: rng.gen_range(1..=4).to_string(),
            wind_speed: rng.gen_range(5..=30).to_string(),
            humidity: rng.gen_range(30..=90).to_string(),
            pop,
            precip,
            pressure: rng.gen_range(995..=1025).to_string(),
            cloud: rng.gen_range(0..=100).to_string(),
            dew: (temp - rng.gen_range(4..=10)).to_string(),
        });
    }

    HourlyResponse {
        code: "200".to_string(),
        update_time: start.format(TIME_FMT).to_string(),
        hourly: entries,
    }
}

/// 7-day daily forecast starting today.
pub fn daily_7d() -> DailyResponse {
    daily_7d_with(&mut rand::thread_rng())
}

pub(crate) fn daily_7d_with(rng: &mut impl Rng) -> DailyResponse {
    let now = Local::now();
    let today = now.date_naive();
    let base = rng.gen_range(BASE_TEMP_MIN..=BASE_TEMP_MAX);

    let daily = (0..7)
        .map(|i| {
            let date = today + Duration::days(i);
            let day = pick_condition(rng);
            let night = pick_condition(rng);
            let (_, precip) = precipitation(day, rng);
            let wind360 = rng.gen_range(0..360);

            DailyEntry {
                fx_date: date.format(DATE_FMT).to_string(),
                sunrise: format!("06:{:02}", rng.gen_range(0..30)),
                sunset: format!("18:{:02}", rng.gen_range(0..60)),
                temp_max: (base + rng.gen_range(3..=6)).to_string(),
                temp_min: (base - rng.gen_range(4..=8)).to_string(),
                icon_day: day.icon.to_string(),
                text_day: day.text.to_string(),
                icon_night: night.icon.to_string(),
                text_night: night.text.to_string(),
                wind360_day: wind360.to_string(),
                wind_dir_day: compass(wind360).to_string(),
                wind_scale_day: rng.gen_range(1..=4).to_string(),
                wind_speed_day: rng.gen_range(5..=30).to_string(),
                humidity: rng.gen_range(30..=90).to_string(),
                precip,
                pressure: rng.gen_range(995..=1025).to_string(),
                vis: rng.gen_range(10..=30).to_string(),
                cloud: rng.gen_range(0..=100).to_string(),
                uv_index: rng.gen_range(1..=10).to_string(),
            }
        })
        .collect();

    DailyResponse {
        code: "200".to_string(),
        update_time: now.format(TIME_FMT).to_string(),
        daily,
    }
}

/// Sunrise/sunset for a date (defaults to today).
pub fn sun_times(date: Option<NaiveDate>) -> SunResponse {
    sun_times_with(date, &mut rand::thread_rng())
}

pub(crate) fn sun_times_with(date: Option<NaiveDate>, rng: &mut impl Rng) -> SunResponse {
    let date = date.unwrap_or_else(|| Local::now().date_naive());
    let offset = Local::now().format("%:z").to_string();

    SunResponse {
        code: "200".to_string(),
        sunrise: format!("{}T06:{:02}{}", date.format(DATE_FMT), rng.gen_range(0..30), offset),
        sunset: format!("{}T18:{:02}{}", date.format(DATE_FMT), rng.gen_range(0..60), offset),
    }
}
