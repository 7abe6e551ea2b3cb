//! Returns Math
//!
//! CAGR and NAV-history lookups used to compute a fund's trailing returns.
//! NAV history arrives newest first with `DD-MM-YYYY` dates. The catalog ships
//! with these figures precomputed; a NAV refresh job fetches the history and
//! writes fresh values back with [`TrailingReturns::apply_to`].

use chrono::{Months, NaiveDate};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::{AdvisorError, Result};
use crate::model::Fund;

/// How far a NAV date may be from the requested date (weekends, holidays)
const TOLERANCE_DAYS: i64 = 5;

/// Youngest scheme that gets a since-inception figure
const MIN_INCEPTION_YEARS: f64 = 0.5;

const DAYS_PER_YEAR: f64 = 365.25;

const NAV_DATE_FORMAT: &str = "%d-%m-%Y";

/// One row of a NAV history feed
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEntry {
    /// `DD-MM-YYYY`
    pub date: String,

    pub nav: String,
}

impl NavEntry {
    pub fn new(date: impl Into<String>, nav: impl Into<String>) -> Self {
        Self { date: date.into(), nav: nav.into() }
    }

    pub fn parse_date(&self) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, NAV_DATE_FORMAT)
            .map_err(|_| AdvisorError::InvalidDate(self.date.clone()))
    }

    pub fn parse_nav(&self) -> Option<Decimal> {
        self.nav.trim().parse().ok()
    }
}

/// A resolved NAV observation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NavPoint {
    pub date: NaiveDate,
    pub nav: Decimal,
}

/// Trailing CAGR figures in percent, rounded to 2dp
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TrailingReturns {
    pub return_1y: Option<Decimal>,
    pub return_3y: Option<Decimal>,
    pub return_5y: Option<Decimal>,
    pub return_10y: Option<Decimal>,
    pub return_since_inception: Option<Decimal>,
}

impl TrailingReturns {
    /// Overwrite a fund's return fields and stamp the as-of date
    pub fn apply_to(self, fund: &mut Fund, as_of: NaiveDate) {
        fund.return_1y = self.return_1y;
        fund.return_3y = self.return_3y;
        fund.return_5y = self.return_5y;
        fund.return_10y = self.return_10y;
        fund.return_since_inception = self.return_since_inception;
        fund.as_of_date = Some(as_of);
        tracing::debug!(fund_id = %fund.id, %as_of, "Refreshed trailing returns");
    }
}

/// Compound annual growth rate in percent; 0 for non-positive inputs
pub fn cagr(start_nav: f64, end_nav: f64, years: f64) -> f64 {
    if start_nav <= 0.0 || end_nav <= 0.0 || years <= 0.0 {
        return 0.0;
    }
    ((end_nav / start_nav).powf(1.0 / years) - 1.0) * 100.0
}

/// Closest NAV within the tolerance window of `target`
///
/// Stops scanning once entries are older than the window.
pub fn nav_on_date(history: &[NavEntry], target: NaiveDate) -> Option<NavPoint> {
    let mut closest: Option<(NavPoint, i64)> = None;

    for entry in history {
        let Ok(date) = entry.parse_date() else {
            tracing::debug!(date = %entry.date, "Skipping NAV entry with bad date");
            continue;
        };

        let diff = (date - target).num_days().abs();
        if diff <= TOLERANCE_DAYS && closest.is_none_or(|(_, best)| diff < best) {
            if let Some(nav) = entry.parse_nav() {
                closest = Some((NavPoint { date, nav }, diff));
            }
        }

        if (target - date).num_days() > TOLERANCE_DAYS {
            break;
        }
    }

    closest.map(|(point, _)| point)
}

fn rounded_cagr(start: Decimal, end: Decimal, years: f64) -> Option<Decimal> {
    let value = cagr(start.to_f64()?, end.to_f64()?, years);
    Decimal::from_f64(value)
        .map(|d| d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}

/// Trailing 1/3/5/10-year and since-inception returns as of `today`
pub fn trailing_returns(
    history: &[NavEntry],
    latest_nav: Decimal,
    inception: NaiveDate,
    today: NaiveDate,
) -> TrailingReturns {
    let over = |years: u32| {
        let target = today.checked_sub_months(Months::new(12 * years))?;
        let start = nav_on_date(history, target)?;
        rounded_cagr(start.nav, latest_nav, f64::from(years))
    };

    let age_years = (today - inception).num_days() as f64 / DAYS_PER_YEAR;
    let since_inception = if age_years >= MIN_INCEPTION_YEARS {
        nav_on_date(history, inception)
            .and_then(|start| rounded_cagr(start.nav, latest_nav, age_years))
    } else {
        None
    };

    TrailingReturns {
        return_1y: over(1),
        return_3y: over(3),
        return_5y: over(5),
        return_10y: over(10),
        return_since_inception: since_inception,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn history() -> Vec<NavEntry> {
        vec![
            NavEntry::new("31-01-2025", "150.0000"),
            NavEntry::new("30-01-2025", "149.5000"),
            NavEntry::new("31-01-2024", "120.0000"),
            NavEntry::new("29-01-2022", "100.0000"),
            NavEntry::new("01-06-2021", "90.0000"),
        ]
    }

    #[test]
    fn test_cagr() {
        assert!((cagr(100.0, 200.0, 1.0) - 100.0).abs() < 1e-9);
        assert!((cagr(100.0, 121.0, 2.0) - 10.0).abs() < 1e-9);
        assert!(cagr(0.0, 121.0, 2.0).abs() < f64::EPSILON);
        assert!(cagr(100.0, 121.0, 0.0).abs() < f64::EPSILON);
        assert!(cagr(100.0, -1.0, 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_nav_on_date_within_tolerance() {
        // Target falls on a weekend; 29-01 is two days off
        let point = nav_on_date(&history(), date(2022, 1, 31)).unwrap();
        assert_eq!(point.date, date(2022, 1, 29));
        assert_eq!(point.nav, dec!(100));
    }

    #[test]
    fn test_nav_on_date_prefers_closest() {
        let point = nav_on_date(&history(), date(2025, 1, 30)).unwrap();
        assert_eq!(point.nav, dec!(149.5));
    }

    #[test]
    fn test_nav_on_date_outside_tolerance() {
        assert!(nav_on_date(&history(), date(2023, 1, 31)).is_none());
        assert!(nav_on_date(&history(), date(2019, 1, 31)).is_none());
    }

    #[test]
    fn test_nav_on_date_skips_bad_rows() {
        let rows = vec![
            NavEntry::new("2025-01-31", "150"),
            NavEntry::new("31-01-2025", "n/a"),
            NavEntry::new("30-01-2025", "149"),
        ];
        let point = nav_on_date(&rows, date(2025, 1, 31)).unwrap();
        assert_eq!(point.nav, dec!(149));
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(NavEntry::new("05-03-2024", "1").parse_date(), Ok(date(2024, 3, 5)));
        assert_eq!(
            NavEntry::new("2024-03-05", "1").parse_date(),
            Err(AdvisorError::InvalidDate("2024-03-05".into()))
        );
    }

    #[test]
    fn test_trailing_returns() {
        let returns = trailing_returns(&history(), dec!(150), date(2021, 6, 1), date(2025, 1, 31));

        assert_eq!(returns.return_1y, Some(dec!(25.00)));
        assert_eq!(returns.return_3y, Some(dec!(14.47)));
        assert_eq!(returns.return_5y, None);
        assert_eq!(returns.return_10y, None);

        let si = returns.return_since_inception.unwrap();
        assert!(si > dec!(14.5) && si < dec!(15.5), "{si}");
    }

    #[test]
    fn test_apply_refreshed_returns_to_catalog_fund() {
        let mut fund = crate::catalog::find("hdfc-flexi-cap").unwrap().clone();
        let today = date(2025, 1, 31);
        let returns = trailing_returns(&history(), dec!(150), date(2021, 6, 1), today);

        returns.apply_to(&mut fund, today);
        assert_eq!(fund.return_1y, Some(dec!(25.00)));
        assert_eq!(fund.return_3y, Some(dec!(14.47)));
        assert_eq!(fund.return_5y, None);
        assert_eq!(fund.as_of_date, Some(today));
        assert!(fund.has_track_record());
    }

    #[test]
    fn test_young_scheme_has_no_since_inception() {
        let rows = vec![NavEntry::new("31-01-2025", "11"), NavEntry::new("01-11-2024", "10")];
        let returns = trailing_returns(&rows, dec!(11), date(2024, 11, 1), date(2025, 1, 31));
        assert_eq!(returns, TrailingReturns::default());
    }
}
