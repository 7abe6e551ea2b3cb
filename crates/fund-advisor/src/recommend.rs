//! Recommender
//!
//! Chooses between the legacy and personalized strategies and assembles the
//! final recommendation.
//!
//! ```text
//! answers ──► InvestorProfile ──► AllocationResult ──► score_funds ──► build_basket
//!    │
//!    └─ empty ──► legacy basket for the risk level (default Very High)
//! ```

use serde::Serialize;

use crate::basket::{build_basket, FundPick};
use crate::catalog;
use crate::model::{Fund, RiskLevel};
use crate::profile::{Experience, InvestorProfile};
use crate::questionnaire::Answers;
use crate::scoring::score_funds;
use crate::strategy::{compute_allocation, legacy_basket, AllocationResult, LegacyAllocation};

/// Risk level used when neither answers nor an override are given
pub const DEFAULT_RISK_LEVEL: RiskLevel = RiskLevel::VeryHigh;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    Legacy,
    Personalized,
}

/// Headline split shown with a recommendation
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AssetAllocation {
    pub equity: u32,
    pub debt: u32,
    pub hybrid: u32,
    pub liquid: u32,
    pub description: &'static str,
    pub investor_profile: &'static str,
}

impl AssetAllocation {
    fn legacy(level: RiskLevel) -> Self {
        let table = LegacyAllocation::for_level(level);
        Self {
            equity: table.equity,
            debt: table.debt,
            hybrid: table.hybrid,
            liquid: 0,
            description: table.description,
            investor_profile: table.investor_profile,
        }
    }

    fn personalized(level: RiskLevel, allocation: &AllocationResult) -> Self {
        let narrative = LegacyAllocation::for_level(level);
        let split = allocation.split;
        Self {
            equity: split.equity,
            debt: split.debt,
            hybrid: split.hybrid,
            liquid: split.liquid,
            description: narrative.description,
            investor_profile: narrative.investor_profile,
        }
    }
}

/// Labels and tags describing how a basket was tailored
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PersonalizationSignals {
    pub goal_label: String,
    pub horizon_label: String,
    pub tags: Vec<String>,
}

impl PersonalizationSignals {
    fn from_profile(profile: &InvestorProfile) -> Self {
        let goal_label = profile.goal.label().to_string();
        let horizon_label = profile.horizon.label().to_string();

        let mut tags = vec![goal_label.clone(), format!("Horizon: {horizon_label}")];
        if profile.needs_tax_saving {
            tags.push("Tax Saving Included".into());
        }
        if profile.needs_liquidity {
            tags.push("Liquidity Focused".into());
        }
        if profile.experience == Experience::Beginner {
            tags.push("Beginner Friendly".into());
        }

        Self { goal_label, horizon_label, tags }
    }
}

/// Complete recommendation returned to callers
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RecommendationResult<'a> {
    pub strategy: StrategyKind,

    pub risk_level: RiskLevel,

    pub asset_allocation: AssetAllocation,

    /// Picks in basket order
    pub recommendations: Vec<FundPick<'a>>,

    pub total_funds: usize,

    pub wisdom_note: &'static str,

    pub profile_summary: String,

    pub personalization: PersonalizationSignals,
}

impl RecommendationResult<'_> {
    pub fn total_allocation(&self) -> u32 {
        self.recommendations.iter().map(|p| p.allocation).sum()
    }
}

/// Closing note for a risk level
pub const fn wisdom_note(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::VeryHigh => {
            "\"The stock market is a device for transferring money from the impatient \
             to the patient.\" — Warren Buffett. Your aggressive allocation will \
             reward patience. Stay invested through market cycles, add via SIP, and \
             let compounding do its magic over 10+ years."
        }
        RiskLevel::High => {
            "\"Risk comes from not knowing what you are doing.\" — Warren Buffett. \
             Your high-growth portfolio is well-diversified. The key is to stay \
             disciplined with SIPs and avoid timing the market. Time in the market \
             beats timing the market."
        }
        RiskLevel::ModeratelyHigh => {
            "\"Be fearful when others are greedy and greedy when others are \
             fearful.\" — Warren Buffett. Your balanced-growth portfolio is designed \
             for steady wealth creation. Rebalance annually and increase equity SIPs \
             during market corrections."
        }
        RiskLevel::Moderate => {
            "\"The first rule of investing is don't lose money. The second rule is \
             don't forget rule one.\" — Warren Buffett. Your balanced portfolio \
             protects capital while capturing reasonable growth. Perfect for those \
             building long-term wealth carefully."
        }
        RiskLevel::LowToModerate => {
            "\"Price is what you pay. Value is what you get.\" — Warren Buffett. Your \
             conservative portfolio is designed for capital preservation with modest \
             growth. Consider gradually increasing equity exposure as you build \
             confidence."
        }
        RiskLevel::Low => {
            "\"Do not save what is left after spending, but spend what is left after \
             saving.\" — Warren Buffett. Your safe portfolio ensures capital \
             protection. As you build your savings habit, consider gradually moving \
             towards more growth-oriented investments."
        }
    }
}

fn profile_summary(profile: &InvestorProfile, allocation: &AllocationResult) -> String {
    let split = allocation.split;
    let liquid = if split.liquid > 0 {
        format!(", and {}% liquid", split.liquid)
    } else {
        String::new()
    };

    let mut parts = vec![
        format!(
            "Based on your {} risk profile, we've built a personalized basket targeting {}.",
            profile.risk_level,
            profile.goal.label().to_lowercase()
        ),
        format!(
            "Your {} investment horizon and {} experience level shaped the fund selection.",
            profile.horizon.label().to_lowercase(),
            profile.experience.as_str()
        ),
        format!(
            "The allocation is {}% equity, {}% debt, {}% hybrid{liquid}.",
            split.equity, split.debt, split.hybrid
        ),
    ];

    if profile.needs_tax_saving {
        parts.push("We've included tax-saving options aligned with your salaried income profile.".into());
    }
    if profile.needs_liquidity {
        parts.push("Liquidity has been prioritized given your needs for accessible funds.".into());
    }

    parts.join(" ")
}

/// A way of turning inputs into a recommendation over a fund catalog
pub trait RecommendationStrategy {
    fn kind(&self) -> StrategyKind;

    fn recommend<'c>(&self, funds: &'c [Fund]) -> RecommendationResult<'c>;
}

/// Hand-picked basket keyed only by risk level
#[derive(Clone, Copy, Debug)]
pub struct LegacyStrategy {
    risk_level: RiskLevel,
}

impl LegacyStrategy {
    pub const fn new(risk_level: RiskLevel) -> Self {
        Self { risk_level }
    }
}

impl RecommendationStrategy for LegacyStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Legacy
    }

    fn recommend<'c>(&self, funds: &'c [Fund]) -> RecommendationResult<'c> {
        let level = self.risk_level;
        let asset_allocation = AssetAllocation::legacy(level);
        let recommendations = legacy_basket(funds, level);

        RecommendationResult {
            strategy: self.kind(),
            risk_level: level,
            profile_summary: asset_allocation.investor_profile.to_string(),
            asset_allocation,
            total_funds: recommendations.len(),
            recommendations,
            wisdom_note: wisdom_note(level),
            personalization: PersonalizationSignals::default(),
        }
    }
}

/// Scored basket built from a full investor profile
#[derive(Clone, Copy, Debug)]
pub struct PersonalizedStrategy {
    profile: InvestorProfile,
}

impl PersonalizedStrategy {
    pub const fn new(profile: InvestorProfile) -> Self {
        Self { profile }
    }

    pub const fn profile(&self) -> &InvestorProfile {
        &self.profile
    }
}

impl RecommendationStrategy for PersonalizedStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Personalized
    }

    fn recommend<'c>(&self, funds: &'c [Fund]) -> RecommendationResult<'c> {
        let profile = &self.profile;
        let allocation = compute_allocation(profile);
        let scored = score_funds(funds, profile, &allocation);
        let recommendations = build_basket(&scored, &allocation, profile);

        RecommendationResult {
            strategy: self.kind(),
            risk_level: profile.risk_level,
            asset_allocation: AssetAllocation::personalized(profile.risk_level, &allocation),
            total_funds: recommendations.len(),
            recommendations,
            wisdom_note: wisdom_note(profile.risk_level),
            profile_summary: profile_summary(profile, &allocation),
            personalization: PersonalizationSignals::from_profile(profile),
        }
    }
}

/// Strategy chosen for a request
#[derive(Clone, Copy, Debug)]
pub enum Strategy {
    Legacy(LegacyStrategy),
    Personalized(PersonalizedStrategy),
}

impl Strategy {
    /// Legacy when there are no answers, personalized otherwise
    pub fn select(answers: &Answers, risk_override: Option<RiskLevel>) -> Self {
        if answers.is_empty() {
            Self::Legacy(LegacyStrategy::new(risk_override.unwrap_or(DEFAULT_RISK_LEVEL)))
        } else {
            Self::Personalized(PersonalizedStrategy::new(InvestorProfile::from_answers(
                answers,
                risk_override,
            )))
        }
    }
}

impl RecommendationStrategy for Strategy {
    fn kind(&self) -> StrategyKind {
        match self {
            Self::Legacy(s) => s.kind(),
            Self::Personalized(s) => s.kind(),
        }
    }

    fn recommend<'c>(&self, funds: &'c [Fund]) -> RecommendationResult<'c> {
        match self {
            Self::Legacy(s) => s.recommend(funds),
            Self::Personalized(s) => s.recommend(funds),
        }
    }
}

/// Recommendation engine over a fund catalog
#[derive(Clone, Copy, Debug)]
pub struct Recommender<'c> {
    funds: &'c [Fund],
}

impl<'c> Recommender<'c> {
    pub const fn new(funds: &'c [Fund]) -> Self {
        Self { funds }
    }

    pub fn recommend(
        &self,
        answers: &Answers,
        risk_override: Option<RiskLevel>,
    ) -> RecommendationResult<'c> {
        let strategy = Strategy::select(answers, risk_override);
        let result = strategy.recommend(self.funds);

        tracing::info!(
            strategy = ?result.strategy,
            risk_level = %result.risk_level,
            funds = result.total_funds,
            "Built recommendation"
        );
        result
    }
}

impl Default for Recommender<'static> {
    fn default() -> Self {
        Self::new(catalog::funds())
    }
}

/// Recommend against the built-in catalog
pub fn build_recommendation(
    answers: &Answers,
    risk_override: Option<RiskLevel>,
) -> RecommendationResult<'static> {
    Recommender::default().recommend(answers, risk_override)
}
