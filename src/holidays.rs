//! Public holiday lookup.
//!
//! Uses <https://date.nager.at> by default. Holiday coloring is a best-effort
//! feature: every failure here ends up as an empty [`HolidaySet`] and a log line,
//! never as an error for the caller.

use std::collections::{BTreeSet, HashMap};

use chrono::NaiveDate;
use log::{info, warn};
use serde::Deserialize;
use thiserror::Error;

/// Country to fetch holidays for unless told otherwise
pub const TARGET_COUNTRY: &str = "JP";

/// Public holidays of one year. Empty is a valid value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidaySet(BTreeSet<NaiveDate>);

impl HolidaySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, date: NaiveDate) -> bool {
        self.0.insert(date)
    }

    pub fn contains(&self, date: &NaiveDate) -> bool {
        self.0.contains(date)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NaiveDate> {
        self.0.iter()
    }
}

impl FromIterator<NaiveDate> for HolidaySet {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Result of a holiday fetch.
///
/// `degraded` tells "the year has no holidays" apart from "the fetch failed";
/// rendering treats both the same.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayFetch {
    pub holidays: HolidaySet,
    pub degraded: bool,
}

impl HolidayFetch {
    pub fn degraded() -> Self {
        Self {
            holidays: HolidaySet::new(),
            degraded: true,
        }
    }
}

#[derive(Debug, Error)]
pub enum HolidayFetchError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("unexpected status code: {0}")]
    Status(u16),
}

/// Where holiday data comes from. Implementations do one attempt and hand back
/// the raw JSON body.
pub trait HolidayProvider {
    fn fetch_raw(&self, year: i32) -> Result<String, HolidayFetchError>;
}

impl<P: HolidayProvider + ?Sized> HolidayProvider for &P {
    fn fetch_raw(&self, year: i32) -> Result<String, HolidayFetchError> {
        (**self).fetch_raw(year)
    }
}

#[derive(Deserialize)]
struct PublicHoliday {
    date: String,
}

/// Parses a `PublicHolidays` response body.
///
/// Returns `None` when the body is not a JSON array. Items without a usable
/// `YYYY-MM-DD` date are skipped one by one.
pub fn parse_holidays(body: &str) -> Option<HolidaySet> {
    let items: Vec<serde_json::Value> = serde_json::from_str(body).ok()?;
    let holidays = items
        .into_iter()
        .filter_map(|item| serde_json::from_value::<PublicHoliday>(item).ok())
        .filter_map(|item| NaiveDate::parse_from_str(&item.date, "%Y-%m-%d").ok())
        .collect();
    Some(holidays)
}

/// Whether `date` gets holiday coloring
pub fn is_holiday(date: NaiveDate, holidays: &HolidaySet, holiday_color_enabled: bool) -> bool {
    if !holiday_color_enabled {
        return false;
    }
    holidays.contains(&date)
}

pub struct HolidayOracle<P> {
    provider: P,
}

impl<P: HolidayProvider> HolidayOracle<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn fetch(&self, year: i32) -> HolidayFetch {
        let body = match self.provider.fetch_raw(year) {
            Ok(body) => body,
            Err(e) => {
                warn!("Failed to fetch holidays for {year}, rendering without holidays: {e}");
                return HolidayFetch::degraded();
            }
        };
        match parse_holidays(&body) {
            Some(holidays) => {
                info!("Fetched {} holidays for {year}", holidays.len());
                HolidayFetch {
                    holidays,
                    degraded: false,
                }
            }
            None => {
                warn!("Malformed holiday response for {year}, rendering without holidays");
                HolidayFetch::degraded()
            }
        }
    }
}

/// Memoizes one fetch per year
pub struct HolidayCache<P> {
    oracle: HolidayOracle<P>,
    years: HashMap<i32, HolidayFetch>,
}

impl<P: HolidayProvider> HolidayCache<P> {
    pub fn new(oracle: HolidayOracle<P>) -> Self {
        Self {
            oracle,
            years: HashMap::new(),
        }
    }

    pub fn get_or_fetch(&mut self, year: i32) -> &HolidayFetch {
        let oracle = &self.oracle;
        self.years.entry(year).or_insert_with(|| oracle.fetch(year))
    }
}

#[cfg(feature = "nager")]
pub use nager::NagerDateProvider;

#[cfg(feature = "nager")]
mod nager {
    use std::time::Duration;

    use log::debug;
    use reqwest::blocking::Client;
    use reqwest::StatusCode;

    use super::{HolidayFetchError, HolidayProvider, TARGET_COUNTRY};

    const API_BASE: &str = "https://date.nager.at/api/v3/PublicHolidays";
    const TIMEOUT: Duration = Duration::from_secs(10);

    pub struct NagerDateProvider {
        client: Client,
        country_code: String,
    }

    impl NagerDateProvider {
        pub fn new() -> Result<Self, HolidayFetchError> {
            Self::for_country(TARGET_COUNTRY)
        }

        pub fn for_country(country_code: &str) -> Result<Self, HolidayFetchError> {
            let client = Client::builder()
                .timeout(TIMEOUT)
                .build()
                .map_err(|e| HolidayFetchError::Transport(e.to_string()))?;
            Ok(Self {
                client,
                country_code: country_code.to_owned(),
            })
        }

        pub fn url(&self, year: i32) -> String {
            format!("{API_BASE}/{year}/{}", self.country_code)
        }
    }

    impl HolidayProvider for NagerDateProvider {
        fn fetch_raw(&self, year: i32) -> Result<String, HolidayFetchError> {
            let url = self.url(year);
            debug!("Fetching holidays from {url}");
            let response = self
                .client
                .get(&url)
                .send()
                .map_err(|e| HolidayFetchError::Transport(e.to_string()))?;

            match response.status() {
                StatusCode::OK => response
                    .text()
                    .map_err(|e| HolidayFetchError::Transport(e.to_string())),
                status => Err(HolidayFetchError::Status(status.as_u16())),
            }
        }
    }
}
