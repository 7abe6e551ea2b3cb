//! Asset Allocation
//!
//! Turns an investor profile into equity/debt/hybrid/liquid targets. A base
//! split per risk level is adjusted by a fixed sequence of rules; the order of
//! the rules is policy.

use serde::{Deserialize, Serialize};

use crate::model::{Bucket, RiskLevel};
use crate::profile::{AgeGroup, Experience, Goal, Horizon, InvestorProfile, Level};

/// Minimum debt share for investors nearing or in retirement
const RETIREMENT_DEBT_FLOOR: u32 = 25;

/// Equity ceiling when the goal is capital preservation
const PRESERVATION_EQUITY_CAP: u32 = 20;

/// Integer percentage split across the four buckets
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Split {
    pub equity: u32,
    pub debt: u32,
    pub hybrid: u32,
    pub liquid: u32,
}

impl Split {
    pub const fn new(equity: u32, debt: u32, hybrid: u32, liquid: u32) -> Self {
        Self { equity, debt, hybrid, liquid }
    }

    /// Base split for a risk level before any adjustment
    pub const fn base(level: RiskLevel) -> Self {
        match level {
            RiskLevel::Low => Self::new(0, 75, 15, 10),
            RiskLevel::LowToModerate => Self::new(15, 55, 20, 10),
            RiskLevel::Moderate => Self::new(35, 35, 25, 5),
            RiskLevel::ModeratelyHigh => Self::new(55, 20, 20, 5),
            RiskLevel::High => Self::new(75, 10, 15, 0),
            RiskLevel::VeryHigh => Self::new(90, 5, 5, 0),
        }
    }

    pub const fn total(&self) -> u32 {
        self.equity + self.debt + self.hybrid + self.liquid
    }

    pub const fn get(&self, bucket: Bucket) -> u32 {
        match bucket {
            Bucket::Equity => self.equity,
            Bucket::Debt => self.debt,
            Bucket::Hybrid => self.hybrid,
            Bucket::Liquid => self.liquid,
        }
    }

    /// Rescale to 100 with rounding; liquid absorbs the remainder
    fn normalized(self) -> Self {
        let total = self.total();
        if total == 100 || total == 0 {
            return self;
        }

        let scale = |v: u32| (f64::from(v) * 100.0 / f64::from(total)).round() as u32;
        let equity = scale(self.equity).min(100);
        let debt = scale(self.debt).min(100 - equity);
        let hybrid = scale(self.hybrid).min(100 - equity - debt);

        Self::new(equity, debt, hybrid, 100 - equity - debt - hybrid)
    }
}

/// Selection hints passed to the scorer and basket builder
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationHints {
    pub allow_small_cap: bool,
    pub prefer_index: bool,
    pub boost_tax_saver: bool,
    pub needs_liquidity: bool,
    pub income_oriented: bool,
}

/// Target split plus selection hints
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationResult {
    #[serde(flatten)]
    pub split: Split,

    #[serde(flatten)]
    pub hints: AllocationHints,
}

impl AllocationResult {
    pub const fn target(&self, bucket: Bucket) -> u32 {
        self.split.get(bucket)
    }
}

/// Move up to `amount` from one bucket to another, bounded by the source
fn shift(from: &mut u32, to: &mut u32, amount: u32) {
    let moved = amount.min(*from);
    *from -= moved;
    *to += moved;
}

/// Compute the target allocation for a profile
pub fn compute_allocation(profile: &InvestorProfile) -> AllocationResult {
    let Split {
        mut equity,
        mut debt,
        mut hybrid,
        mut liquid,
    } = Split::base(profile.risk_level);

    match profile.horizon {
        Horizon::Short => shift(&mut equity, &mut debt, 10),
        Horizon::Medium => shift(&mut equity, &mut debt, 5),
        Horizon::Long | Horizon::VeryLong => {}
    }

    match profile.goal {
        Goal::Income => shift(&mut equity, &mut hybrid, 5),
        Goal::Preservation if equity > PRESERVATION_EQUITY_CAP => {
            debt += equity - PRESERVATION_EQUITY_CAP;
            equity = PRESERVATION_EQUITY_CAP;
        }
        _ => {}
    }

    if profile.income_stability == Level::Low {
        shift(&mut debt, &mut liquid, 5);
    }

    if profile.age_group.is_near_retirement() && debt < RETIREMENT_DEBT_FLOOR {
        let needed = RETIREMENT_DEBT_FLOOR - debt;
        shift(&mut equity, &mut debt, needed);
    }

    let split = Split::new(equity, debt, hybrid, liquid).normalized();

    let hints = AllocationHints {
        allow_small_cap: (profile.age_group == AgeGroup::Young
            && profile.goal == Goal::AggressiveGrowth)
            || profile.risk_level == RiskLevel::VeryHigh,
        prefer_index: profile.experience == Experience::Beginner,
        boost_tax_saver: profile.needs_tax_saving,
        needs_liquidity: profile.needs_liquidity,
        income_oriented: profile.goal == Goal::Income,
    };

    tracing::debug!(?split, ?hints, "Computed allocation");
    AllocationResult { split, hints }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questionnaire::{Answers, Question};

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

    #[test]
    fn test_base_table_untouched_for_neutral_profile() {
        for level in RiskLevel::ALL {
            let result = compute_allocation(&profile(level));
            assert_eq!(result.split, Split::base(level));
            assert_eq!(result.split.total(), 100);
        }
    }

    #[test]
    fn test_short_horizon_shifts_ten() {
        let p = InvestorProfile { horizon: Horizon::Short, ..profile(RiskLevel::High) };
        assert_eq!(compute_allocation(&p).split, Split::new(65, 20, 15, 0));
    }

    #[test]
    fn test_shift_bounded_by_available_equity() {
        let p = InvestorProfile { horizon: Horizon::Short, ..profile(RiskLevel::Low) };
        assert_eq!(compute_allocation(&p).split, Split::base(RiskLevel::Low));
    }

    #[test]
    fn test_income_goal_moves_equity_to_hybrid() {
        let p = InvestorProfile { goal: Goal::Income, ..profile(RiskLevel::Moderate) };
        let result = compute_allocation(&p);
        assert_eq!(result.split, Split::new(30, 35, 30, 5));
        assert!(result.hints.income_oriented);
    }

    #[test]
    fn test_preservation_caps_equity() {
        let p = InvestorProfile { goal: Goal::Preservation, ..profile(RiskLevel::VeryHigh) };
        assert_eq!(compute_allocation(&p).split, Split::new(20, 75, 5, 0));
    }

    #[test]
    fn test_low_stability_moves_debt_to_liquid() {
        let p = InvestorProfile { income_stability: Level::Low, ..profile(RiskLevel::Moderate) };
        assert_eq!(compute_allocation(&p).split, Split::new(35, 30, 25, 10));
    }

    #[test]
    fn test_retirement_floor_applies_after_liquidity_shift() {
        // 90/5/5/0 -> debt 0 after the liquidity rule -> floor pulls 25 from equity
        let p = InvestorProfile {
            age_group: AgeGroup::Retired,
            income_stability: Level::Low,
            ..profile(RiskLevel::VeryHigh)
        };
        assert_eq!(compute_allocation(&p).split, Split::new(65, 25, 5, 5));
    }

    #[test]
    fn test_rules_apply_in_order() {
        // short: 75/10 -> 65/20; preservation: 20/65; low stability: 20/60/15/5
        let p = InvestorProfile {
            horizon: Horizon::Short,
            goal: Goal::Preservation,
            income_stability: Level::Low,
            age_group: AgeGroup::PreRetirement,
            ..profile(RiskLevel::High)
        };
        assert_eq!(compute_allocation(&p).split, Split::new(20, 60, 15, 5));
    }

    #[test]
    fn test_hints() {
        let young = InvestorProfile {
            age_group: AgeGroup::Young,
            goal: Goal::AggressiveGrowth,
            experience: Experience::Beginner,
            needs_tax_saving: true,
            ..profile(RiskLevel::High)
        };
        let hints = compute_allocation(&young).hints;
        assert!(hints.allow_small_cap);
        assert!(hints.prefer_index);
        assert!(hints.boost_tax_saver);

        let hints = compute_allocation(&profile(RiskLevel::High)).hints;
        assert!(!hints.allow_small_cap);
        assert!(compute_allocation(&profile(RiskLevel::VeryHigh)).hints.allow_small_cap);
    }

    #[test]
    fn test_normalization() {
        assert_eq!(Split::new(30, 30, 30, 0).normalized(), Split::new(33, 33, 33, 1));
        assert_eq!(Split::new(60, 60, 0, 0).normalized(), Split::new(50, 50, 0, 0));
        assert_eq!(Split::default().normalized(), Split::default());
    }

    #[test]
    fn test_invariants_across_all_answer_combinations() {
        for age in 1..=5 {
            for horizon in 1..=5 {
                for income in 1..=4 {
                    for loss in 1..=5 {
                        for goal in 1..=5 {
                            for exp in 1..=5 {
                                let answers = Answers::new()
                                    .with(Question::Age, age)
                                    .with(Question::Horizon, horizon)
                                    .with(Question::IncomeStability, income)
                                    .with(Question::LossTolerance, loss)
                                    .with(Question::Goal, goal)
                                    .with(Question::Experience, exp);
                                let p = InvestorProfile::from_answers(&answers, None);
                                let split = compute_allocation(&p).split;

                                assert_eq!(split.total(), 100, "{answers:?}");
                                if p.age_group.is_near_retirement() {
                                    assert!(split.debt >= 25, "{answers:?}");
                                }
                                if p.goal == Goal::Preservation {
                                    assert!(split.equity <= 20, "{answers:?}");
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
