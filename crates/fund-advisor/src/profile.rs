//! Investor Profile
//!
//! Derives categorical investor traits from questionnaire answers.

use serde::{Deserialize, Serialize};

use crate::model::RiskLevel;
use crate::questionnaire::{Answers, Question};

/// Score assumed for an unanswered question
const NEUTRAL_SCORE: i32 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AgeGroup {
    Young,
    Mid,
    PreRetirement,
    Retired,
}

impl AgeGroup {
    pub const fn from_score(score: i32) -> Self {
        match score {
            5.. => Self::Young,
            3..=4 => Self::Mid,
            2 => Self::PreRetirement,
            _ => Self::Retired,
        }
    }

    pub const fn is_near_retirement(self) -> bool {
        matches!(self, Self::PreRetirement | Self::Retired)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Horizon {
    Short,
    Medium,
    Long,
    VeryLong,
}

impl Horizon {
    pub const fn from_score(score: i32) -> Self {
        match score {
            ..=1 => Self::Short,
            2 => Self::Medium,
            3..=4 => Self::Long,
            _ => Self::VeryLong,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Short => "Less than 3 years",
            Self::Medium => "3-5 years",
            Self::Long => "5-10 years",
            Self::VeryLong => "10+ years",
        }
    }
}

/// Three-step scale shared by income stability and loss tolerance
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Level {
    Low,
    Medium,
    High,
}

impl Level {
    pub const fn from_score(score: i32) -> Self {
        match score {
            ..=1 => Self::Low,
            2 => Self::Medium,
            _ => Self::High,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Goal {
    Preservation,
    Income,
    Growth,
    AggressiveGrowth,
}

impl Goal {
    pub const fn from_score(score: i32) -> Self {
        match score {
            ..=1 => Self::Preservation,
            2 => Self::Income,
            3 => Self::Growth,
            _ => Self::AggressiveGrowth,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Preservation => "Capital Preservation",
            Self::Income => "Regular Income",
            Self::Growth => "Wealth Growth",
            Self::AggressiveGrowth => "Aggressive Growth",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Experience {
    Beginner,
    Intermediate,
    Advanced,
}

impl Experience {
    pub const fn from_score(score: i32) -> Self {
        match score {
            ..=2 => Self::Beginner,
            3 => Self::Intermediate,
            _ => Self::Advanced,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

/// Categorical investor traits, built once per request
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvestorProfile {
    pub risk_level: RiskLevel,

    pub age_group: AgeGroup,

    pub horizon: Horizon,

    pub income_stability: Level,

    pub loss_tolerance: Level,

    pub goal: Goal,

    pub experience: Experience,

    /// Young salaried investor who can use Section 80C
    pub needs_tax_saving: bool,

    /// Short horizon or unstable income
    pub needs_liquidity: bool,
}

impl InvestorProfile {
    /// Build a profile from answers, optionally pinning the risk level
    pub fn from_answers(answers: &Answers, risk_override: Option<RiskLevel>) -> Self {
        let score = |q: Question| answers.get(q).unwrap_or(NEUTRAL_SCORE);

        let risk_level =
            risk_override.unwrap_or_else(|| RiskLevel::from_total_score(answers.total_score()));

        let age_group = AgeGroup::from_score(score(Question::Age));
        let horizon = Horizon::from_score(score(Question::Horizon));
        let income_stability = Level::from_score(score(Question::IncomeStability));
        let loss_tolerance = Level::from_score(score(Question::LossTolerance));
        let goal = Goal::from_score(score(Question::Goal));
        let experience = Experience::from_score(score(Question::Experience));

        // Unanswered income counts as not salaried here
        let salaried = answers.raw(Question::IncomeStability).unwrap_or(0) >= 4;

        let profile = Self {
            risk_level,
            age_group,
            horizon,
            income_stability,
            loss_tolerance,
            goal,
            experience,
            needs_tax_saving: age_group == AgeGroup::Young && salaried,
            needs_liquidity: horizon == Horizon::Short || income_stability == Level::Low,
        };

        tracing::debug!(?profile, "Built investor profile");
        profile
    }
}
