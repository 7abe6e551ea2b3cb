//! Domain Models
//!
//! Core data types for the fund catalog. Monetary and percentage figures use
//! `rust_decimal`; scores derived from them are plain `f64` in `[0, 1]`.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{AdvisorError, Result};

/// SEBI riskometer level, ordered from safest to riskiest
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    #[serde(rename = "Low")]
    Low,
    #[serde(rename = "Low to Moderate")]
    LowToModerate,
    #[serde(rename = "Moderate")]
    Moderate,
    #[serde(rename = "Moderately High")]
    ModeratelyHigh,
    #[serde(rename = "High")]
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl RiskLevel {
    pub const ALL: [Self; 6] = [
        Self::Low,
        Self::LowToModerate,
        Self::Moderate,
        Self::ModeratelyHigh,
        Self::High,
        Self::VeryHigh,
    ];

    /// Position on the riskometer (0 = Low, 5 = Very High)
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Number of riskometer steps between two levels
    pub const fn distance(self, other: Self) -> usize {
        self.index().abs_diff(other.index())
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::LowToModerate => "Low to Moderate",
            Self::Moderate => "Moderate",
            Self::ModeratelyHigh => "Moderately High",
            Self::High => "High",
            Self::VeryHigh => "Very High",
        }
    }

    /// Bucket a summed questionnaire score into a risk level
    pub const fn from_total_score(total: i32) -> Self {
        match total {
            i32::MIN..=8 => Self::Low,
            9..=12 => Self::LowToModerate,
            13..=16 => Self::Moderate,
            17..=20 => Self::ModeratelyHigh,
            21..=24 => Self::High,
            _ => Self::VeryHigh,
        }
    }

    /// Riskometer caption shown next to a fund
    pub const fn principal_description(self) -> &'static str {
        match self {
            Self::Low => "Principal at low risk",
            Self::LowToModerate => "Principal at low to moderate risk",
            Self::Moderate => "Principal at moderate risk",
            Self::ModeratelyHigh => "Principal at moderately high risk",
            Self::High => "Principal at high risk",
            Self::VeryHigh => "Principal at very high risk",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| AdvisorError::InvalidRiskLevel(s.to_string()))
    }
}

/// Top-level scheme category as published by the AMC
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FundCategory {
    Equity,
    Debt,
    Hybrid,
    Index,
    Solution,
    Fof,
}

impl FundCategory {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Equity => "equity",
            Self::Debt => "debt",
            Self::Hybrid => "hybrid",
            Self::Index => "index",
            Self::Solution => "solution",
            Self::Fof => "fof",
        }
    }
}

impl fmt::Display for FundCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FundCategory {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "equity" => Ok(Self::Equity),
            "debt" => Ok(Self::Debt),
            "hybrid" => Ok(Self::Hybrid),
            "index" => Ok(Self::Index),
            "solution" => Ok(Self::Solution),
            "fof" => Ok(Self::Fof),
            _ => Err(AdvisorError::UnknownCategory(s.to_string())),
        }
    }
}

/// Scheme sub-category, the diversification key of a basket
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubCategory {
    // Equity
    #[serde(rename = "Large Cap")]
    LargeCap,
    #[serde(rename = "Mid Cap")]
    MidCap,
    #[serde(rename = "Small Cap")]
    SmallCap,
    #[serde(rename = "Large & Mid Cap")]
    LargeAndMidCap,
    #[serde(rename = "Flexi Cap")]
    FlexiCap,
    #[serde(rename = "Multi Cap")]
    MultiCap,
    #[serde(rename = "Focused")]
    Focused,
    #[serde(rename = "Value")]
    Value,
    #[serde(rename = "Dividend Yield")]
    DividendYield,
    #[serde(rename = "ELSS")]
    Elss,
    #[serde(rename = "Sectoral - Banking & Financial Services")]
    SectoralBanking,
    #[serde(rename = "Sectoral - Pharma & Healthcare")]
    SectoralPharma,
    #[serde(rename = "Sectoral - Technology")]
    SectoralTechnology,
    #[serde(rename = "Thematic - Infrastructure")]
    ThematicInfrastructure,
    #[serde(rename = "Thematic - Defence")]
    ThematicDefence,
    #[serde(rename = "Thematic - Manufacturing")]
    ThematicManufacturing,

    // Index
    #[serde(rename = "Large Cap Index")]
    LargeCapIndex,
    #[serde(rename = "Next 50 Index")]
    NextFiftyIndex,
    #[serde(rename = "Mid Cap Index")]
    MidCapIndex,
    #[serde(rename = "Small Cap Index")]
    SmallCapIndex,

    // Solution oriented
    #[serde(rename = "Retirement")]
    Retirement,
    #[serde(rename = "Children's")]
    Children,

    // Fund of funds
    #[serde(rename = "Gold FoF")]
    GoldFof,
    #[serde(rename = "Silver FoF")]
    SilverFof,

    // Hybrid
    #[serde(rename = "Balanced Advantage")]
    BalancedAdvantage,
    #[serde(rename = "Aggressive Hybrid")]
    AggressiveHybrid,
    #[serde(rename = "Conservative Hybrid")]
    ConservativeHybrid,
    #[serde(rename = "Equity Savings")]
    EquitySavings,
    #[serde(rename = "Arbitrage")]
    Arbitrage,
    #[serde(rename = "Multi Asset Allocation")]
    MultiAssetAllocation,

    // Debt
    #[serde(rename = "Overnight")]
    Overnight,
    #[serde(rename = "Liquid")]
    Liquid,
    #[serde(rename = "Ultra Short Duration")]
    UltraShortDuration,
    #[serde(rename = "Money Market")]
    MoneyMarket,
    #[serde(rename = "Low Duration")]
    LowDuration,
    #[serde(rename = "Short Duration")]
    ShortDuration,
    #[serde(rename = "Medium Duration")]
    MediumDuration,
    #[serde(rename = "Corporate Bond")]
    CorporateBond,
    #[serde(rename = "Banking and PSU")]
    BankingAndPsu,
    #[serde(rename = "Floater")]
    Floater,
    #[serde(rename = "Gilt")]
    Gilt,
    #[serde(rename = "Dynamic Bond")]
    DynamicBond,
    #[serde(rename = "Credit Risk")]
    CreditRisk,
}

impl SubCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::LargeCap => "Large Cap",
            Self::MidCap => "Mid Cap",
            Self::SmallCap => "Small Cap",
            Self::LargeAndMidCap => "Large & Mid Cap",
            Self::FlexiCap => "Flexi Cap",
            Self::MultiCap => "Multi Cap",
            Self::Focused => "Focused",
            Self::Value => "Value",
            Self::DividendYield => "Dividend Yield",
            Self::Elss => "ELSS",
            Self::SectoralBanking => "Sectoral - Banking & Financial Services",
            Self::SectoralPharma => "Sectoral - Pharma & Healthcare",
            Self::SectoralTechnology => "Sectoral - Technology",
            Self::ThematicInfrastructure => "Thematic - Infrastructure",
            Self::ThematicDefence => "Thematic - Defence",
            Self::ThematicManufacturing => "Thematic - Manufacturing",
            Self::LargeCapIndex => "Large Cap Index",
            Self::NextFiftyIndex => "Next 50 Index",
            Self::MidCapIndex => "Mid Cap Index",
            Self::SmallCapIndex => "Small Cap Index",
            Self::Retirement => "Retirement",
            Self::Children => "Children's",
            Self::GoldFof => "Gold FoF",
            Self::SilverFof => "Silver FoF",
            Self::BalancedAdvantage => "Balanced Advantage",
            Self::AggressiveHybrid => "Aggressive Hybrid",
            Self::ConservativeHybrid => "Conservative Hybrid",
            Self::EquitySavings => "Equity Savings",
            Self::Arbitrage => "Arbitrage",
            Self::MultiAssetAllocation => "Multi Asset Allocation",
            Self::Overnight => "Overnight",
            Self::Liquid => "Liquid",
            Self::UltraShortDuration => "Ultra Short Duration",
            Self::MoneyMarket => "Money Market",
            Self::LowDuration => "Low Duration",
            Self::ShortDuration => "Short Duration",
            Self::MediumDuration => "Medium Duration",
            Self::CorporateBond => "Corporate Bond",
            Self::BankingAndPsu => "Banking and PSU",
            Self::Floater => "Floater",
            Self::Gilt => "Gilt",
            Self::DynamicBond => "Dynamic Bond",
            Self::CreditRisk => "Credit Risk",
        }
    }

    /// Debt sub-categories that behave like cash
    pub const fn is_cash_like(self) -> bool {
        matches!(
            self,
            Self::Liquid | Self::Overnight | Self::UltraShortDuration | Self::MoneyMarket
        )
    }

    pub const fn is_index(self) -> bool {
        matches!(
            self,
            Self::LargeCapIndex | Self::NextFiftyIndex | Self::MidCapIndex | Self::SmallCapIndex
        )
    }

    pub const fn is_small_cap(self) -> bool {
        matches!(self, Self::SmallCap | Self::SmallCapIndex)
    }

    pub const fn is_sectoral_or_thematic(self) -> bool {
        matches!(
            self,
            Self::SectoralBanking
                | Self::SectoralPharma
                | Self::SectoralTechnology
                | Self::ThematicInfrastructure
                | Self::ThematicDefence
                | Self::ThematicManufacturing
        )
    }
}

impl fmt::Display for SubCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Coarse asset class used for allocation targets
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
    Equity,
    Debt,
    Hybrid,
    Liquid,
}

impl Bucket {
    /// Order in which baskets are filled
    pub const ALL: [Self; 4] = [Self::Equity, Self::Debt, Self::Hybrid, Self::Liquid];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Equity => "equity",
            Self::Debt => "debt",
            Self::Hybrid => "hybrid",
            Self::Liquid => "liquid",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Equity => "Equity",
            Self::Debt => "Debt",
            Self::Hybrid => "Hybrid",
            Self::Liquid => "Liquid",
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A mutual fund scheme from the catalog
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Fund {
    /// Stable slug (e.g., "hdfc-flexi-cap")
    pub id: String,

    pub name: String,

    pub category: FundCategory,

    pub sub_category: SubCategory,

    /// Riskometer level printed in the scheme document
    pub risk_level: RiskLevel,

    /// Assets under management in crores
    pub aum_crores: Decimal,

    /// Total expense ratio (percent, direct plan)
    pub expense_ratio: Decimal,

    /// Minimum lump-sum investment in rupees
    pub min_investment: Decimal,

    pub inception_date: NaiveDate,

    pub fund_manager: String,

    pub objective: String,

    pub suitable_for: String,

    pub min_horizon_months: u32,

    /// AMFI scheme code, used by the NAV refresh job
    pub amfi_scheme_code: u32,

    // Trailing CAGR in percent. `None` when the scheme is too young or the
    // history could not be fetched.
    pub return_1y: Option<Decimal>,
    pub return_3y: Option<Decimal>,
    pub return_5y: Option<Decimal>,
    pub return_10y: Option<Decimal>,
    pub return_since_inception: Option<Decimal>,

    /// NAV date the returns were computed against
    pub as_of_date: Option<NaiveDate>,
}

impl Fund {
    /// Natural allocation bucket, independent of any target
    pub const fn bucket(&self) -> Bucket {
        match self.category {
            FundCategory::Debt if self.sub_category.is_cash_like() => Bucket::Liquid,
            FundCategory::Debt => Bucket::Debt,
            FundCategory::Hybrid => Bucket::Hybrid,
            FundCategory::Equity
            | FundCategory::Index
            | FundCategory::Solution
            | FundCategory::Fof => Bucket::Equity,
        }
    }

    pub const fn is_index_fund(&self) -> bool {
        matches!(self.category, FundCategory::Index) || self.sub_category.is_index()
    }

    /// Whether the fund has any trailing return on record
    pub const fn has_track_record(&self) -> bool {
        self.return_1y.is_some()
            || self.return_3y.is_some()
            || self.return_5y.is_some()
            || self.return_10y.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_level_thresholds() {
        assert_eq!(RiskLevel::from_total_score(6), RiskLevel::Low);
        assert_eq!(RiskLevel::from_total_score(8), RiskLevel::Low);
        assert_eq!(RiskLevel::from_total_score(9), RiskLevel::LowToModerate);
        assert_eq!(RiskLevel::from_total_score(12), RiskLevel::LowToModerate);
        assert_eq!(RiskLevel::from_total_score(16), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_total_score(20), RiskLevel::ModeratelyHigh);
        assert_eq!(RiskLevel::from_total_score(24), RiskLevel::High);
        assert_eq!(RiskLevel::from_total_score(25), RiskLevel::VeryHigh);
        assert_eq!(RiskLevel::from_total_score(-3), RiskLevel::Low);
    }

    #[test]
    fn test_risk_level_parse_is_exact() {
        assert_eq!("Moderately High".parse::<RiskLevel>(), Ok(RiskLevel::ModeratelyHigh));
        assert!("moderate".parse::<RiskLevel>().is_err());
        assert!("Extreme".parse::<RiskLevel>().is_err());
    }

    #[test]
    fn test_risk_level_serde_labels() {
        let json = serde_json::to_string(&RiskLevel::LowToModerate).unwrap();
        assert_eq!(json, "\"Low to Moderate\"");

        let back: RiskLevel = serde_json::from_str("\"Very High\"").unwrap();
        assert_eq!(back, RiskLevel::VeryHigh);
    }

    #[test]
    fn test_risk_distance() {
        assert_eq!(RiskLevel::Low.distance(RiskLevel::VeryHigh), 5);
        assert_eq!(RiskLevel::High.distance(RiskLevel::Moderate), 2);
        assert_eq!(RiskLevel::High.distance(RiskLevel::High), 0);
    }

    #[test]
    fn test_sub_category_labels_match_serde() {
        for sub in [SubCategory::Elss, SubCategory::LargeAndMidCap, SubCategory::Children] {
            let json = serde_json::to_string(&sub).unwrap();
            assert_eq!(json, format!("\"{}\"", sub.label()));
        }
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("FoF".parse::<FundCategory>(), Ok(FundCategory::Fof));
        assert!("crypto".parse::<FundCategory>().is_err());
    }
}
