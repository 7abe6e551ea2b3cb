//! Fund Screener
//!
//! Filtering and sorting over the catalog, plus side-by-side comparison.

use std::cmp::Ordering;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::error::{AdvisorError, Result};
use crate::model::{Fund, FundCategory, RiskLevel};

/// Most funds that can be compared at once
pub const MAX_COMPARE: usize = 4;

/// Catalog filter; unset fields match everything
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct FundFilter {
    pub category: Option<FundCategory>,

    pub risk_level: Option<RiskLevel>,

    /// Case-insensitive match on name, sub-category, category or manager
    pub search: Option<String>,
}

impl FundFilter {
    pub fn matches(&self, fund: &Fund) -> bool {
        if self.category.is_some_and(|c| c != fund.category) {
            return false;
        }
        if self.risk_level.is_some_and(|r| r != fund.risk_level) {
            return false;
        }

        match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(term) => {
                let term = term.to_lowercase();
                [
                    fund.name.as_str(),
                    fund.sub_category.label(),
                    fund.category.as_str(),
                    fund.fund_manager.as_str(),
                ]
                .iter()
                .any(|field| field.to_lowercase().contains(&term))
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortField {
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "category")]
    Category,
    #[serde(rename = "sub_category")]
    SubCategory,
    #[serde(rename = "risk_level")]
    RiskLevel,
    #[serde(rename = "aum")]
    Aum,
    #[serde(rename = "expense_ratio")]
    ExpenseRatio,
    #[serde(rename = "return_1y")]
    Return1y,
    #[serde(rename = "return_3y")]
    Return3y,
    #[serde(rename = "return_5y")]
    Return5y,
    #[serde(rename = "return_10y")]
    Return10y,
    #[serde(rename = "return_since_inception")]
    ReturnSinceInception,
}

impl SortField {
    pub const ALL: [Self; 11] = [
        Self::Name,
        Self::Category,
        Self::SubCategory,
        Self::RiskLevel,
        Self::Aum,
        Self::ExpenseRatio,
        Self::Return1y,
        Self::Return3y,
        Self::Return5y,
        Self::Return10y,
        Self::ReturnSinceInception,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Category => "category",
            Self::SubCategory => "sub_category",
            Self::RiskLevel => "risk_level",
            Self::Aum => "aum",
            Self::ExpenseRatio => "expense_ratio",
            Self::Return1y => "return_1y",
            Self::Return3y => "return_3y",
            Self::Return5y => "return_5y",
            Self::Return10y => "return_10y",
            Self::ReturnSinceInception => "return_since_inception",
        }
    }

    /// Optional numeric value for return columns
    const fn optional_value(self, fund: &Fund) -> Option<Option<Decimal>> {
        match self {
            Self::Return1y => Some(fund.return_1y),
            Self::Return3y => Some(fund.return_3y),
            Self::Return5y => Some(fund.return_5y),
            Self::Return10y => Some(fund.return_10y),
            Self::ReturnSinceInception => Some(fund.return_since_inception),
            _ => None,
        }
    }
}

impl FromStr for SortField {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| AdvisorError::UnknownSortField(s.to_string()))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

/// Missing values sort last in either direction
fn cmp_optional(a: Option<Decimal>, b: Option<Decimal>, direction: SortDirection) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => direction.apply(x.cmp(&y)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn cmp_funds(a: &Fund, b: &Fund, field: SortField, direction: SortDirection) -> Ordering {
    if let (Some(x), Some(y)) = (field.optional_value(a), field.optional_value(b)) {
        return cmp_optional(x, y, direction);
    }

    let ordering = match field {
        SortField::Name => a.name.cmp(&b.name),
        SortField::Category => a.category.as_str().cmp(b.category.as_str()),
        SortField::SubCategory => a.sub_category.label().cmp(b.sub_category.label()),
        SortField::RiskLevel => a.risk_level.cmp(&b.risk_level),
        SortField::Aum => a.aum_crores.cmp(&b.aum_crores),
        SortField::ExpenseRatio => a.expense_ratio.cmp(&b.expense_ratio),
        _ => Ordering::Equal,
    };
    direction.apply(ordering)
}

/// Stable sort in place
pub fn sort_funds(funds: &mut [&Fund], field: SortField, direction: SortDirection) {
    funds.sort_by(|a, b| cmp_funds(a, b, field, direction));
}

/// Filter and optionally sort a fund list
pub fn screen<'a>(
    funds: &'a [Fund],
    filter: &FundFilter,
    sort: Option<(SortField, SortDirection)>,
) -> Vec<&'a Fund> {
    let mut matched: Vec<&Fund> = funds.iter().filter(|f| filter.matches(f)).collect();
    if let Some((field, direction)) = sort {
        sort_funds(&mut matched, field, direction);
    }
    tracing::debug!(?filter, ?sort, matched = matched.len(), "Screened funds");
    matched
}

/// Id of the best fund per metric; `None` when no fund has a value
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BestInRow {
    pub expense_ratio: Option<String>,
    pub aum: Option<String>,
    pub return_1y: Option<String>,
    pub return_3y: Option<String>,
    pub return_5y: Option<String>,
    pub return_10y: Option<String>,
    pub return_since_inception: Option<String>,
}

/// Side-by-side view of up to four funds
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Comparison<'a> {
    pub funds: Vec<&'a Fund>,
    pub best: BestInRow,
}

/// First fund with the strictly best value wins
fn best_by(
    funds: &[&Fund],
    value: impl Fn(&Fund) -> Option<Decimal>,
    better: impl Fn(Decimal, Decimal) -> bool,
) -> Option<String> {
    let mut best: Option<(&Fund, Decimal)> = None;
    for &fund in funds {
        let Some(v) = value(fund) else { continue };
        match best {
            Some((_, current)) if !better(v, current) => {}
            _ => best = Some((fund, v)),
        }
    }
    best.map(|(f, _)| f.id.clone())
}

/// Compare funds already resolved from the catalog
pub fn compare<'a>(funds: &[&'a Fund]) -> Result<Comparison<'a>> {
    if funds.len() > MAX_COMPARE {
        return Err(AdvisorError::TooManyFunds {
            requested: funds.len(),
            max: MAX_COMPARE,
        });
    }

    let highest = |a: Decimal, b: Decimal| a > b;
    let best = BestInRow {
        expense_ratio: best_by(funds, |f| Some(f.expense_ratio), |a, b| a < b),
        aum: best_by(funds, |f| Some(f.aum_crores), highest),
        return_1y: best_by(funds, |f| f.return_1y, highest),
        return_3y: best_by(funds, |f| f.return_3y, highest),
        return_5y: best_by(funds, |f| f.return_5y, highest),
        return_10y: best_by(funds, |f| f.return_10y, highest),
        return_since_inception: best_by(funds, |f| f.return_since_inception, highest),
    };

    Ok(Comparison { funds: funds.to_vec(), best })
}

/// Resolve ids against a catalog and compare them
pub fn compare_ids<'a, S: AsRef<str>>(funds: &'a [Fund], ids: &[S]) -> Result<Comparison<'a>> {
    if ids.len() > MAX_COMPARE {
        return Err(AdvisorError::TooManyFunds {
            requested: ids.len(),
            max: MAX_COMPARE,
        });
    }

    let resolved = ids
        .iter()
        .map(|id| {
            let id = id.as_ref();
            catalog::find_in(funds, id).ok_or_else(|| AdvisorError::FundNotFound(id.to_string()))
        })
        .collect::<Result<Vec<_>>>()?;

    compare(&resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn ids(funds: &[&Fund]) -> Vec<String> {
        funds.iter().map(|f| f.id.clone()).collect()
    }

    #[test]
    fn test_filter_by_category_and_risk() {
        let filter = FundFilter {
            category: Some(FundCategory::Debt),
            risk_level: Some(RiskLevel::Moderate),
            search: None,
        };
        let funds = screen(catalog::funds(), &filter, None);
        assert!(!funds.is_empty());
        assert!(funds
            .iter()
            .all(|f| f.category == FundCategory::Debt && f.risk_level == RiskLevel::Moderate));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let filter = FundFilter { search: Some("CHIRAG".into()), ..FundFilter::default() };
        let found = ids(&screen(catalog::funds(), &filter, None));
        assert!(found.contains(&"hdfc-mid-cap".to_string()));
        assert!(found.contains(&"hdfc-small-cap".to_string()));

        let filter = FundFilter { search: Some("elss".into()), ..FundFilter::default() };
        assert_eq!(ids(&screen(catalog::funds(), &filter, None)), ["hdfc-elss"]);

        let filter = FundFilter { search: Some("   ".into()), ..FundFilter::default() };
        assert_eq!(screen(catalog::funds(), &filter, None).len(), catalog::funds().len());
    }

    #[test]
    fn test_sort_missing_values_last() {
        let all = FundFilter::default();
        for direction in [SortDirection::Asc, SortDirection::Desc] {
            let funds = screen(catalog::funds(), &all, Some((SortField::Return5y, direction)));
            let first_missing = funds.iter().position(|f| f.return_5y.is_none()).unwrap();
            assert!(funds[first_missing..].iter().all(|f| f.return_5y.is_none()));
            assert!(funds[..first_missing].iter().all(|f| f.return_5y.is_some()));
        }
    }

    #[test]
    fn test_sort_direction() {
        let all = FundFilter::default();
        let asc = screen(catalog::funds(), &all, Some((SortField::ExpenseRatio, SortDirection::Asc)));
        assert!(asc.windows(2).all(|w| w[0].expense_ratio <= w[1].expense_ratio));

        let desc = screen(catalog::funds(), &all, Some((SortField::Aum, SortDirection::Desc)));
        assert_eq!(desc[0].id, "hdfc-balanced-advantage");
    }

    #[test]
    fn test_sort_field_parse() {
        assert_eq!("return_since_inception".parse::<SortField>(), Ok(SortField::ReturnSinceInception));
        assert_eq!(
            "popularity".parse::<SortField>(),
            Err(AdvisorError::UnknownSortField("popularity".into()))
        );
    }

    #[test]
    fn test_compare_best_in_row() {
        let cmp = compare_ids(
            catalog::funds(),
            &["hdfc-flexi-cap", "hdfc-nifty-50-index", "hdfc-manufacturing"],
        )
        .unwrap();

        assert_eq!(cmp.funds.len(), 3);
        assert_eq!(cmp.best.expense_ratio.as_deref(), Some("hdfc-nifty-50-index"));
        assert_eq!(cmp.best.aum.as_deref(), Some("hdfc-flexi-cap"));
        assert_eq!(cmp.best.return_5y.as_deref(), Some("hdfc-flexi-cap"));
    }

    #[test]
    fn test_compare_ties_keep_first() {
        let mut a = catalog::find("hdfc-gilt").unwrap().clone();
        let mut b = a.clone();
        a.id = "a".into();
        b.id = "b".into();
        a.return_1y = Some(dec!(9));
        b.return_1y = Some(dec!(9));
        a.return_3y = None;

        let cmp = compare(&[&a, &b]).unwrap();
        assert_eq!(cmp.best.return_1y.as_deref(), Some("a"));
        assert_eq!(cmp.best.return_3y.as_deref(), Some("b"));
    }

    #[test]
    fn test_compare_limits() {
        let err = compare_ids(
            catalog::funds(),
            &["hdfc-gilt", "hdfc-liquid", "hdfc-elss", "hdfc-defence", "hdfc-mid-cap"],
        )
        .unwrap_err();
        assert_eq!(err, AdvisorError::TooManyFunds { requested: 5, max: 4 });

        let err = compare_ids(catalog::funds(), &["hdfc-gilt", "nope"]).unwrap_err();
        assert_eq!(err, AdvisorError::FundNotFound("nope".into()));

        let none = compare_ids::<&str>(catalog::funds(), &[]).unwrap();
        assert_eq!(none.best, BestInRow::default());
    }
}
