//! Fund Scoring
//!
//! Ranks catalog funds against a profile and allocation target.
//!
//! ```text
//! score = 0.30 category + 0.20 risk + 0.20 track + 0.15 cost + 0.15 goal
//! ```

use std::fmt;

use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

use crate::model::{Bucket, Fund, SubCategory};
use crate::profile::{Experience, InvestorProfile};
use crate::strategy::{AllocationHints, AllocationResult};

const W_CATEGORY: f64 = 0.30;
const W_RISK: f64 = 0.20;
const W_TRACK: f64 = 0.20;
const W_COST: f64 = 0.15;
const W_GOAL: f64 = 0.15;

/// Track-record score for a fund with no return history
const NO_HISTORY_SCORE: f64 = 0.1;

/// Weighted CAGR that maps to a full track-record score
const TRACK_CEILING: f64 = 25.0;

/// Why a fund scored well on a component
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ScoreReason {
    #[serde(rename = "Category match")]
    CategoryMatch,
    #[serde(rename = "Risk aligned")]
    RiskAligned,
    #[serde(rename = "Strong track record")]
    StrongTrackRecord,
    #[serde(rename = "Cost efficient")]
    CostEfficient,
    #[serde(rename = "Goal aligned")]
    GoalAligned,
}

impl ScoreReason {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CategoryMatch => "Category match",
            Self::RiskAligned => "Risk aligned",
            Self::StrongTrackRecord => "Strong track record",
            Self::CostEfficient => "Cost efficient",
            Self::GoalAligned => "Goal aligned",
        }
    }
}

impl fmt::Display for ScoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-component scores, each in `[0, 1]`
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub category: f64,
    pub risk: f64,
    pub track: f64,
    pub cost: f64,
    pub goal: f64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f64 {
        W_CATEGORY * self.category
            + W_RISK * self.risk
            + W_TRACK * self.track
            + W_COST * self.cost
            + W_GOAL * self.goal
    }

    pub fn reasons(&self) -> Vec<ScoreReason> {
        [
            (self.category > 0.5, ScoreReason::CategoryMatch),
            (self.risk > 0.5, ScoreReason::RiskAligned),
            (self.track > 0.5, ScoreReason::StrongTrackRecord),
            (self.cost > 0.7, ScoreReason::CostEfficient),
            (self.goal > 0.6, ScoreReason::GoalAligned),
        ]
        .into_iter()
        .filter_map(|(hit, reason)| hit.then_some(reason))
        .collect()
    }
}

/// A catalog fund with its score against the current target
#[derive(Clone, Debug, Serialize)]
pub struct ScoredFund<'a> {
    pub fund: &'a Fund,

    pub score: f64,

    pub bucket: Bucket,

    pub breakdown: ScoreBreakdown,

    pub reasons: Vec<ScoreReason>,
}

impl ScoredFund<'_> {
    pub fn has_reason(&self, reason: ScoreReason) -> bool {
        self.reasons.contains(&reason)
    }
}

fn to_f64(value: rust_decimal::Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

fn category_fit(fund: &Fund, target: Bucket) -> f64 {
    if fund.bucket() == target { 1.0 } else { 0.0 }
}

fn risk_alignment(fund: &Fund, profile: &InvestorProfile) -> f64 {
    match fund.risk_level.distance(profile.risk_level) {
        0 => 1.0,
        1 => 0.7,
        2 => 0.3,
        _ => 0.0,
    }
}

/// Weighted mean of available trailing returns, normalised against 25%
pub fn track_record(fund: &Fund) -> f64 {
    let weighted = [
        (fund.return_5y, 0.4),
        (fund.return_3y, 0.3),
        (fund.return_10y, 0.2),
        (fund.return_1y, 0.1),
    ];

    let (sum, weights) = weighted
        .iter()
        .filter_map(|(ret, w)| ret.map(|r| (to_f64(r) * w, *w)))
        .fold((0.0, 0.0), |(s, ws), (v, w)| (s + v, ws + w));

    if weights == 0.0 {
        return NO_HISTORY_SCORE;
    }

    (sum / weights / TRACK_CEILING).clamp(0.0, 1.0)
}

fn cost_efficiency(fund: &Fund) -> f64 {
    (1.0 - to_f64(fund.expense_ratio) / 2.0).max(0.0)
}

fn goal_alignment(fund: &Fund, profile: &InvestorProfile, hints: &AllocationHints) -> f64 {
    let sub = fund.sub_category;
    let mut bonus: f64 = 0.0;

    if hints.boost_tax_saver && sub == SubCategory::Elss {
        bonus += 0.5;
    }

    if hints.income_oriented
        && matches!(
            sub,
            SubCategory::DividendYield | SubCategory::ConservativeHybrid | SubCategory::EquitySavings
        )
    {
        bonus += 0.4;
    }

    if hints.needs_liquidity && (sub.is_cash_like() || sub == SubCategory::LowDuration) {
        bonus += 0.4;
    }

    if hints.prefer_index && fund.is_index_fund() {
        bonus += 0.3;
    }

    if sub.is_small_cap() {
        bonus += if hints.allow_small_cap { 0.3 } else { -0.5 };
    }

    if profile.experience != Experience::Advanced && sub.is_sectoral_or_thematic() {
        bonus -= 0.3;
    }

    (0.5 + bonus).clamp(0.0, 1.0)
}

/// Score one fund against its natural bucket
pub fn score_fund<'a>(
    fund: &'a Fund,
    profile: &InvestorProfile,
    allocation: &AllocationResult,
) -> ScoredFund<'a> {
    let bucket = fund.bucket();
    let breakdown = ScoreBreakdown {
        category: category_fit(fund, bucket),
        risk: risk_alignment(fund, profile),
        track: track_record(fund),
        cost: cost_efficiency(fund),
        goal: goal_alignment(fund, profile, &allocation.hints),
    };

    ScoredFund {
        fund,
        score: breakdown.total(),
        bucket,
        reasons: breakdown.reasons(),
        breakdown,
    }
}

/// Score every fund whose bucket has a non-zero target, best first
///
/// The sort is stable: equal scores keep catalog order.
pub fn score_funds<'a>(
    funds: &'a [Fund],
    profile: &InvestorProfile,
    allocation: &AllocationResult,
) -> Vec<ScoredFund<'a>> {
    let mut scored: Vec<_> = funds
        .iter()
        .filter(|f| allocation.target(f.bucket()) > 0)
        .map(|f| score_fund(f, profile, allocation))
        .collect();

    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));

    tracing::debug!(
        candidates = scored.len(),
        top = scored.first().map(|s| s.fund.id.as_str()),
        "Scored funds"
    );
    scored
}
