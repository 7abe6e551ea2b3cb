//! Basket Builder
//!
//! Picks funds bucket by bucket from the scored list and splits each bucket's
//! target between core and satellite holdings.
//!
//! ```text
//! Moderately High, 8 slots:
//!   Equity 55%  -> 4 picks   core 36% (3 x 12)   satellite 19%
//!   Debt   20%  -> 2 picks   core 13% (2 x 7)
//!   Hybrid 20%  -> 2 picks   core 13% (2 x 7)
//!   Liquid  5%  -> no slots left, skipped
//!   floor 5% per pick, remainder to the largest pick
//! ```

use std::collections::HashSet;

use rust_decimal::RoundingStrategy;
use serde::Serialize;

use crate::model::{Bucket, Fund, FundCategory, SubCategory};
use crate::profile::{Experience, Goal, InvestorProfile};
use crate::scoring::{ScoreReason, ScoredFund};
use crate::strategy::AllocationResult;

/// Basket size for beginners and capital preservers
const SIMPLE_MAX_FUNDS: usize = 5;

const MAX_FUNDS: usize = 8;

/// Smallest allocation any pick may carry
const MIN_ALLOCATION: u32 = 5;

/// Share of a bucket (by count and by weight) held as core
const CORE_PERCENT: usize = 65;

/// A fund chosen for the basket
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FundPick<'a> {
    pub fund: &'a Fund,

    /// Percent of the portfolio
    pub allocation: u32,

    /// e.g., "Core - Diversified", "Stability - Corporate Bond"
    pub role: String,

    pub rationale: String,
}

/// `a / b` rounded half up
const fn round_div(a: usize, b: usize) -> usize {
    (2 * a + b) / (2 * b)
}

const fn max_funds(profile: &InvestorProfile) -> usize {
    if matches!(profile.experience, Experience::Beginner)
        || matches!(profile.goal, Goal::Preservation)
    {
        SIMPLE_MAX_FUNDS
    } else {
        MAX_FUNDS
    }
}

fn role_for(scored: &ScoredFund<'_>, is_core: bool) -> String {
    let prefix = if is_core { "Core" } else { "Satellite" };
    let sub = scored.fund.sub_category;

    match scored.bucket {
        Bucket::Liquid => return "Liquidity".into(),
        Bucket::Debt => return format!("Stability - {sub}"),
        Bucket::Equity | Bucket::Hybrid => {}
    }

    if scored.fund.category == FundCategory::Index {
        return format!("{prefix} - Passive");
    }

    match sub {
        SubCategory::Elss => format!("{prefix} - Tax Efficient"),
        SubCategory::BalancedAdvantage => "Tactical - Dynamic".into(),
        SubCategory::LargeCap => format!("{prefix} - Stability"),
        SubCategory::FlexiCap | SubCategory::MultiCap => format!("{prefix} - Diversified"),
        SubCategory::MidCap | SubCategory::LargeAndMidCap => format!("{prefix} - Growth"),
        SubCategory::SmallCap | SubCategory::SmallCapIndex => format!("{prefix} - High Growth"),
        SubCategory::EquitySavings => "Moderate - Hybrid".into(),
        SubCategory::ConservativeHybrid => "Conservative - Hybrid".into(),
        SubCategory::AggressiveHybrid => format!("{prefix} - Hybrid"),
        s if s.is_sectoral_or_thematic() => format!("{prefix} - Thematic"),
        _ => format!("{prefix} - {}", scored.bucket.title()),
    }
}

fn rationale_for(scored: &ScoredFund<'_>, profile: &InvestorProfile) -> String {
    let fund = scored.fund;
    let mut parts = Vec::new();

    if scored.has_reason(ScoreReason::StrongTrackRecord) {
        if let Some(r5) = fund.return_5y {
            let r5 = r5.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
            parts.push(format!(
                "{r5:.1}% 5-year CAGR demonstrates consistent long-term performance."
            ));
        }
    }

    if scored.has_reason(ScoreReason::CostEfficient) {
        parts.push(format!(
            "Low expense ratio of {}% keeps more returns in your pocket.",
            fund.expense_ratio.normalize()
        ));
    }

    if scored.has_reason(ScoreReason::RiskAligned) {
        parts.push(format!("Risk level matches your {} profile.", profile.risk_level));
    }

    if scored.has_reason(ScoreReason::GoalAligned) {
        let note = match fund.sub_category {
            SubCategory::Elss => Some("Tax saving under Section 80C with equity growth potential."),
            SubCategory::DividendYield => {
                Some("Focused on dividend-yielding companies for income generation.")
            }
            SubCategory::Liquid | SubCategory::Overnight => {
                Some("High liquidity for easy access when you need funds.")
            }
            _ if fund.category == FundCategory::Index => {
                Some("Simple, low-cost index approach ideal for building a core position.")
            }
            _ => None,
        };
        parts.extend(note.map(String::from));
    }

    if parts.is_empty() {
        parts.push(format!(
            "{} fund providing {} exposure in your portfolio.",
            fund.sub_category, scored.bucket
        ));
    }

    parts.join(" ")
}

/// Split a bucket target across `n` picks, core picks first
fn bucket_shares(target: u32, n: usize) -> Vec<u32> {
    if n <= 1 {
        return vec![target; n];
    }

    let core_count = (n * CORE_PERCENT).div_ceil(100);
    let core_pct = round_div(target as usize * CORE_PERCENT, 100);
    let sat_pct = target as usize - core_pct;
    let core_share = round_div(core_pct, core_count);
    // Two picks are both core; the satellite remainder is left to normalization
    let sat_share = match n - core_count {
        0 => 0,
        sats => round_div(sat_pct, sats),
    };

    (0..n)
        .map(|i| if i < core_count { core_share } else { sat_share })
        .map(|s| u32::try_from(s).unwrap_or(u32::MAX))
        .collect()
}

/// Floor every pick and push the rounding remainder onto the first largest pick
fn normalize(picks: &mut [FundPick<'_>]) {
    for pick in picks.iter_mut() {
        pick.allocation = pick.allocation.max(MIN_ALLOCATION);
    }

    let total: u32 = picks.iter().map(|p| p.allocation).sum();
    if total == 100 {
        return;
    }

    let Some(max) = picks.iter().map(|p| p.allocation).max() else {
        return;
    };
    if let Some(top) = picks.iter_mut().find(|p| p.allocation == max) {
        let diff = 100_i64 - i64::from(total);
        top.allocation = u32::try_from(i64::from(top.allocation) + diff).unwrap_or(0);
    }
}

/// Assemble the basket from scored funds
///
/// Returns an empty basket when nothing is selectable.
pub fn build_basket<'a>(
    scored: &[ScoredFund<'a>],
    allocation: &AllocationResult,
    profile: &InvestorProfile,
) -> Vec<FundPick<'a>> {
    let max = max_funds(profile);
    let mut picks: Vec<FundPick<'a>> = Vec::new();
    let mut used: HashSet<SubCategory> = HashSet::new();

    for bucket in Bucket::ALL {
        let target = allocation.target(bucket);
        if target == 0 {
            continue;
        }

        let candidates: Vec<&ScoredFund<'a>> =
            scored.iter().filter(|s| s.bucket == bucket).collect();
        let available = candidates
            .iter()
            .map(|s| s.fund.sub_category)
            .filter(|sub| !used.contains(sub))
            .collect::<HashSet<_>>()
            .len();

        let planned = round_div(target as usize * max, 100)
            .max(1)
            .min(max - picks.len())
            .min(available);
        if planned == 0 {
            tracing::debug!(%bucket, target, "Skipping bucket");
            continue;
        }

        let core_slots = (planned * CORE_PERCENT).div_ceil(100);
        let mut selected = Vec::with_capacity(planned);

        for sf in candidates {
            if selected.len() >= planned {
                break;
            }
            if !used.insert(sf.fund.sub_category) {
                continue;
            }
            let is_core = selected.len() < core_slots;
            selected.push(FundPick {
                fund: sf.fund,
                allocation: 0,
                role: role_for(sf, is_core),
                rationale: rationale_for(sf, profile),
            });
        }

        let shares = bucket_shares(target, selected.len());
        for (pick, share) in selected.iter_mut().zip(shares) {
            pick.allocation = share;
        }

        tracing::debug!(%bucket, target, picked = selected.len(), "Filled bucket");
        picks.extend(selected);
    }

    normalize(&mut picks);
    picks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::model::RiskLevel;
    use crate::profile::{AgeGroup, Horizon, Level};
    use crate::scoring::{score_fund, score_funds};
    use crate::strategy::compute_allocation;

    fn profile(level: RiskLevel) -> InvestorProfile {
        InvestorProfile {
            risk_level: level,
            age_group: AgeGroup::Mid,
            horizon: Horizon::Long,
            income_stability: Level::High,
            loss_tolerance: Level::High,
            goal: Goal::Growth,
            experience: Experience::Intermediate,
            needs_tax_saving: false,
            needs_liquidity: false,
        }
    }

    fn basket_for(p: &InvestorProfile) -> Vec<FundPick<'static>> {
        let allocation = compute_allocation(p);
        let scored = score_funds(catalog::funds(), p, &allocation);
        build_basket(&scored, &allocation, p)
    }

    fn assert_well_formed(picks: &[FundPick<'_>]) {
        let total: u32 = picks.iter().map(|p| p.allocation).sum();
        assert_eq!(total, 100);
        assert!(picks.iter().all(|p| p.allocation >= MIN_ALLOCATION));

        let subs: HashSet<_> = picks.iter().map(|p| p.fund.sub_category).collect();
        assert_eq!(subs.len(), picks.len());
    }

    #[test]
    fn test_round_div() {
        assert_eq!(round_div(350, 100), 4);
        assert_eq!(round_div(349, 100), 3);
        assert_eq!(round_div(59, 5), 12);
        assert_eq!(round_div(31, 2), 16);
    }

    #[test]
    fn test_bucket_shares() {
        assert_eq!(bucket_shares(40, 1), vec![40]);
        assert_eq!(bucket_shares(90, 7), vec![12, 12, 12, 12, 12, 16, 16]);
        assert_eq!(bucket_shares(70, 4), vec![15, 15, 15, 24]);
        assert_eq!(bucket_shares(20, 2), vec![7, 7]);
        assert!(bucket_shares(10, 0).is_empty());
    }

    #[test]
    fn test_empty_input_gives_empty_basket() {
        let p = profile(RiskLevel::Moderate);
        let allocation = compute_allocation(&p);
        assert!(build_basket(&[], &allocation, &p).is_empty());
    }

    #[test]
    fn test_baskets_are_well_formed_for_every_level() {
        for level in RiskLevel::ALL {
            let picks = basket_for(&profile(level));
            assert!(!picks.is_empty(), "{level}");
            assert!(picks.len() <= MAX_FUNDS);
            assert_well_formed(&picks);
        }
    }

    #[test]
    fn test_beginner_capped_at_five() {
        let p = InvestorProfile { experience: Experience::Beginner, ..profile(RiskLevel::High) };
        let picks = basket_for(&p);
        assert!(picks.len() <= SIMPLE_MAX_FUNDS);
        assert_well_formed(&picks);
    }

    #[test]
    fn test_remainder_goes_to_largest_pick() {
        // 0/75/15/10 with five slots: four debt, one hybrid, liquid skipped
        let p = InvestorProfile {
            goal: Goal::Preservation,
            experience: Experience::Beginner,
            ..profile(RiskLevel::Low)
        };
        let allocation = compute_allocation(&p);
        let picks = basket_for(&p);

        assert_eq!(allocation.split.liquid, 10);
        assert_eq!(picks.len(), 5);
        assert_well_formed(&picks);
        assert!(picks.iter().all(|p| p.fund.bucket() != Bucket::Liquid));
    }

    #[test]
    fn test_core_then_satellite_within_bucket() {
        // Very High, 8 slots: 7 equity (5 core, 2 satellite), 1 debt, hybrid gets none
        let picks = basket_for(&profile(RiskLevel::VeryHigh));
        assert_well_formed(&picks);

        let equity: Vec<_> = picks.iter().filter(|p| p.fund.bucket() == Bucket::Equity).collect();
        assert_eq!(equity.len(), 7);
        for (i, pick) in equity.iter().enumerate() {
            let prefix = if i < 5 { "Core - " } else { "Satellite - " };
            assert!(pick.role.starts_with(prefix), "{i}: {}", pick.role);
        }

        // bucket_shares(90, 7) gives 12 x 5 and 16 x 2; the missing 3 lands on the first 16
        let shares: Vec<u32> = equity.iter().map(|p| p.allocation).collect();
        assert_eq!(shares, vec![12, 12, 12, 12, 12, 19, 16]);

        let rest: Vec<_> = picks.iter().filter(|p| p.fund.bucket() != Bucket::Equity).collect();
        assert_eq!(rest.len(), 1);
        assert_eq!(rest[0].fund.bucket(), Bucket::Debt);
        assert_eq!(rest[0].allocation, 5);
    }

    #[test]
    fn test_roles() {
        let p = profile(RiskLevel::VeryHigh);
        let allocation = compute_allocation(&p);
        let role = |id: &str, core: bool| {
            let sf = score_fund(catalog::find(id).unwrap(), &p, &allocation);
            role_for(&sf, core)
        };

        assert_eq!(role("hdfc-liquid", true), "Liquidity");
        assert_eq!(role("hdfc-corporate-bond", true), "Stability - Corporate Bond");
        assert_eq!(role("hdfc-nifty-smallcap-250-index", true), "Core - Passive");
        assert_eq!(role("hdfc-small-cap", false), "Satellite - High Growth");
        assert_eq!(role("hdfc-balanced-advantage", false), "Tactical - Dynamic");
        assert_eq!(role("hdfc-multi-cap", true), "Core - Diversified");
        assert_eq!(role("hdfc-defence", false), "Satellite - Thematic");
        assert_eq!(role("hdfc-gold-etf-fof", true), "Core - Equity");
        assert_eq!(role("hdfc-multi-asset", true), "Core - Hybrid");
    }

    #[test]
    fn test_rationale_fallback() {
        // No history, mid-range cost, far from a Low profile
        let p = profile(RiskLevel::Low);
        let allocation = compute_allocation(&profile(RiskLevel::VeryHigh));
        let sf = score_fund(catalog::find("hdfc-manufacturing").unwrap(), &p, &allocation);
        assert_eq!(sf.reasons, vec![ScoreReason::CategoryMatch]);
        assert_eq!(
            rationale_for(&sf, &p),
            "Thematic - Manufacturing fund providing equity exposure in your portfolio."
        );
    }

    #[test]
    fn test_rationale_sentences() {
        let p = profile(RiskLevel::VeryHigh);
        let allocation = compute_allocation(&p);
        let sf = score_fund(catalog::find("hdfc-mid-cap").unwrap(), &p, &allocation);
        assert_eq!(
            rationale_for(&sf, &p),
            "28.9% 5-year CAGR demonstrates consistent long-term performance. \
             Risk level matches your Very High profile."
        );

        let sf = score_fund(catalog::find("hdfc-nifty-50-index").unwrap(), &p, &allocation);
        assert!(rationale_for(&sf, &p).contains("Low expense ratio of 0.2% keeps"));
    }
}
