//! Synthetic city lookup over a small fixed table.

use crate::types::{CityLocation, CityResponse};

struct CitySpec {
    name: &'static str,
    id: &'static str,
    lat: &'static str,
    lon: &'static str,
    adm2: &'static str,
    adm1: &'static str,
    rank: &'static str,
    slug: &'static str,
}

const CITIES: &[CitySpec] = &[
    CitySpec { name: "Beijing", id: "101010100", lat: "39.90499", lon: "116.40529", adm2: "Beijing", adm1: "Beijing", rank: "10", slug: "beijing" },
    CitySpec { name: "Shanghai", id: "101020100", lat: "31.23171", lon: "121.47264", adm2: "Shanghai", adm1: "Shanghai", rank: "11", slug: "shanghai" },
    CitySpec { name: "Guangzhou", id: "101280101", lat: "23.12908", lon: "113.26436", adm2: "Guangzhou", adm1: "Guangdong", rank: "13", slug: "guangzhou" },
    CitySpec { name: "Shenzhen", id: "101280601", lat: "22.54700", lon: "114.08595", adm2: "Shenzhen", adm1: "Guangdong", rank: "15", slug: "shenzhen" },
    CitySpec { name: "Hangzhou", id: "101210101", lat: "30.28745", lon: "120.15358", adm2: "Hangzhou", adm1: "Zhejiang", rank: "14", slug: "hangzhou" },
];

impl CitySpec {
    fn to_location(&self) -> CityLocation {
        CityLocation {
            name: self.name.to_string(),
            id: self.id.to_string(),
            lat: self.lat.to_string(),
            lon: self.lon.to_string(),
            adm2: self.adm2.to_string(),
            adm1: self.adm1.to_string(),
            country: "China".to_string(),
            tz: "Asia/Shanghai".to_string(),
            utc_offset: "+08:00".to_string(),
            is_dst: "0".to_string(),
            kind: "city".to_string(),
            rank: self.rank.to_string(),
            fx_link: format!("https://www.qweather.com/weather/{}-{}.html", self.slug, self.id),
        }
    }

    fn matches(&self, keyword: &str) -> bool {
        let keyword = keyword.to_lowercase();
        self.name.to_lowercase().contains(&keyword)
            || self.adm1.to_lowercase().contains(&keyword)
            || self.adm2.to_lowercase().contains(&keyword)
    }
}

/// Keyword search over city name and administrative divisions.
pub fn search(keyword: &str) -> CityResponse {
    let location = CITIES
        .iter()
        .filter(|c| c.matches(keyword))
        .map(CitySpec::to_location)
        .collect();

    CityResponse {
        code: "200".to_string(),
        location,
    }
}

/// The `number` top-ranked cities, most prominent (lowest rank value)
/// first.
pub fn top(number: usize) -> CityResponse {
    let mut specs: Vec<&CitySpec> = CITIES.iter().collect();
    specs.sort_by_key(|c| c.rank.parse::<u32>().unwrap_or(u32::MAX));

    CityResponse {
        code: "200".to_string(),
        location: specs
            .into_iter()
            .take(number)
            .map(CitySpec::to_location)
            .collect(),
    }
}

/// Reverse geocode: the table entry closest to the given coordinates.
pub fn by_coords(lon: f64, lat: f64) -> CityResponse {
    let nearest = CITIES.iter().min_by(|a, b| {
        let da = distance_sq(a, lon, lat);
        let db = distance_sq(b, lon, lat);
        da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
    });

    CityResponse {
        code: "200".to_string(),
        location: nearest.map(CitySpec::to_location).into_iter().collect(),
    }
}

fn distance_sq(city: &CitySpec, lon: f64, lat: f64) -> f64 {
    let clat: f64 = city.lat.parse().unwrap_or(0.0);
    let clon: f64 = city.lon.parse().unwrap_or(0.0);
    (clat - lat).powi(2) + (clon - lon).powi(2)
}
