//! Legacy Baskets
//!
//! Hand-picked baskets keyed only by risk level. Used when no questionnaire
//! answers are available. Allocations here are independent of the
//! personalized allocation table.

use serde::Serialize;

use crate::basket::FundPick;
use crate::catalog;
use crate::model::{Fund, RiskLevel};

/// Headline split and narrative for a risk level
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct LegacyAllocation {
    pub equity: u32,
    pub debt: u32,
    pub hybrid: u32,
    pub description: &'static str,
    pub investor_profile: &'static str,
}

impl LegacyAllocation {
    pub const fn for_level(level: RiskLevel) -> Self {
        match level {
            RiskLevel::Low => Self {
                equity: 0,
                debt: 85,
                hybrid: 15,
                description: "Capital preservation is the priority. Your portfolio is built around \
                    stable debt instruments with minimal market risk.",
                investor_profile: "Conservative investor seeking safety of capital. You prefer certainty \
                    over high returns and want to avoid any significant portfolio \
                    fluctuations.",
            },
            RiskLevel::LowToModerate => Self {
                equity: 15,
                debt: 65,
                hybrid: 20,
                description: "Primarily debt-focused with a small equity allocation for modest growth. \
                    A careful balance of safety and returns.",
                investor_profile: "Cautious investor who wants slightly better returns than fixed deposits \
                    but with limited risk exposure. Ideal for parking emergency funds or \
                    short-term goals.",
            },
            RiskLevel::Moderate => Self {
                equity: 35,
                debt: 40,
                hybrid: 25,
                description: "Balanced between growth and stability. Equity provides upside while debt \
                    anchors the portfolio.",
                investor_profile: "Balanced investor comfortable with moderate market fluctuations in \
                    exchange for better returns. Typically someone with a 3-5 year horizon.",
            },
            RiskLevel::ModeratelyHigh => Self {
                equity: 55,
                debt: 25,
                hybrid: 20,
                description: "Growth-oriented with meaningful equity exposure. Debt provides a cushion \
                    during market downturns.",
                investor_profile: "Growth-focused investor with a medium-term horizon (5+ years). You \
                    understand that markets can be volatile but believe in the long-term \
                    growth story of India.",
            },
            RiskLevel::High => Self {
                equity: 75,
                debt: 10,
                hybrid: 15,
                description: "Aggressively tilted towards equity for maximum capital appreciation. \
                    Minimal debt allocation for tactical purposes.",
                investor_profile: "Aggressive investor with a long-term horizon (7+ years). You are \
                    comfortable with significant short-term volatility and are focused on \
                    wealth creation.",
            },
            RiskLevel::VeryHigh => Self {
                equity: 90,
                debt: 5,
                hybrid: 5,
                description: "Maximum equity exposure for those seeking the highest possible long-term \
                    returns. As Warren Buffett says, \"The stock market is a device for \
                    transferring money from the impatient to the patient.\"",
                investor_profile: "Highly aggressive investor with a very long-term horizon (10+ years). \
                    You have the temperament to stay invested through market cycles and \
                    focus purely on long-term wealth creation.",
            },
        }
    }
}

struct Entry {
    id: &'static str,
    allocation: u32,
    role: &'static str,
    rationale: &'static str,
}

const fn entry(id: &'static str, allocation: u32, role: &'static str, rationale: &'static str) -> Entry {
    Entry { id, allocation, role, rationale }
}

const VERY_HIGH: &[Entry] = &[
    entry(
        "hdfc-flexi-cap",
        25,
        "Core - Diversified",
        "Flagship diversified fund with 30-year track record. Invests across \
         market caps, providing the flexibility to navigate different market \
         conditions. A true all-weather fund.",
    ),
    entry(
        "hdfc-mid-cap",
        20,
        "Core - Growth",
        "India's largest mid-cap fund with a stellar long-term track record. \
         Mid-caps offer the sweet spot of growth potential with reasonable \
         liquidity.",
    ),
    entry(
        "hdfc-small-cap",
        15,
        "Satellite - High Growth",
        "Small caps provide the highest long-term return potential. This fund is \
         well-managed with disciplined stock selection. Requires patience through \
         volatility.",
    ),
    entry(
        "hdfc-elss",
        10,
        "Core - Tax Efficient",
        "Tax saving under Section 80C with equity growth. The 3-year lock-in \
         actually enforces the discipline of long-term investing — a feature, not \
         a bug.",
    ),
    entry(
        "hdfc-large-cap",
        10,
        "Core - Stability",
        "Large-cap exposure provides stability and lower volatility. These are \
         market leaders with strong moats — businesses that Buffett would call \
         \"wonderful companies.\"",
    ),
    entry(
        "hdfc-balanced-advantage",
        10,
        "Tactical - Dynamic",
        "Dynamic asset allocation automatically reduces equity when markets are \
         expensive and increases when cheap. Built-in discipline that removes \
         emotion from investing.",
    ),
    entry(
        "hdfc-nifty-50-index",
        5,
        "Core - Passive",
        "Low-cost index fund tracking the Nifty 50. As Buffett advises, a \
         low-cost index fund is the most sensible equity investment for most \
         people.",
    ),
    entry(
        "hdfc-corporate-bond",
        5,
        "Stability - Debt",
        "Small debt allocation for rebalancing and stability. High-quality \
         corporate bonds provide steady income with capital protection.",
    ),
];

const HIGH: &[Entry] = &[
    entry(
        "hdfc-flexi-cap",
        25,
        "Core - Diversified",
        "Flagship all-cap fund providing diversification across market \
         capitalizations with a proven long-term track record.",
    ),
    entry(
        "hdfc-mid-cap",
        15,
        "Core - Growth",
        "Leading mid-cap fund for growth. Mid-caps balance growth potential with \
         manageable risk for the aggressive investor.",
    ),
    entry(
        "hdfc-large-cap",
        15,
        "Core - Stability",
        "Large-cap anchor for portfolio stability. Blue-chip companies with \
         strong competitive advantages.",
    ),
    entry(
        "hdfc-balanced-advantage",
        15,
        "Tactical - Dynamic",
        "Dynamic allocation acts as an automatic risk manager, reducing equity \
         exposure when valuations are stretched.",
    ),
    entry(
        "hdfc-elss",
        10,
        "Core - Tax Efficient",
        "Tax savings with equity growth. Smart way to invest in equities while \
         optimizing tax efficiency.",
    ),
    entry(
        "hdfc-nifty-50-index",
        5,
        "Core - Passive",
        "Low-cost passive allocation ensuring you capture the broad market \
         returns at minimal cost.",
    ),
    entry(
        "hdfc-short-term-debt",
        10,
        "Stability - Debt",
        "Debt anchor for the portfolio providing steady income and rebalancing \
         opportunities during market corrections.",
    ),
    entry(
        "hdfc-corporate-bond",
        5,
        "Stability - Debt",
        "Quality corporate bonds for additional debt exposure with reasonable \
         yield enhancement over government securities.",
    ),
];

const MODERATELY_HIGH: &[Entry] = &[
    entry(
        "hdfc-flexi-cap",
        20,
        "Core - Diversified",
        "Diversified equity exposure across market caps. Provides the flexibility \
         to adapt to market conditions.",
    ),
    entry(
        "hdfc-large-cap",
        15,
        "Core - Stability",
        "Large-cap foundation for the equity portion. Lower volatility than \
         mid/small caps while still participating in equity growth.",
    ),
    entry(
        "hdfc-balanced-advantage",
        20,
        "Core - Dynamic",
        "Dynamic asset allocation is perfect at this risk level — it \
         automatically adjusts equity-debt mix based on market valuations.",
    ),
    entry(
        "hdfc-equity-savings",
        10,
        "Moderate - Hybrid",
        "Blends equity, arbitrage, and debt for reduced volatility. Good for \
         investors transitioning from fixed deposits to market-linked products.",
    ),
    entry(
        "hdfc-short-term-debt",
        15,
        "Stability - Debt",
        "Short duration debt provides stability and liquidity. Acts as the \
         ballast in your portfolio during market turbulence.",
    ),
    entry(
        "hdfc-corporate-bond",
        10,
        "Stability - Debt",
        "High-quality corporate bonds for enhanced yield over government \
         securities with controlled credit risk.",
    ),
    entry(
        "hdfc-floating-rate",
        10,
        "Stability - Debt",
        "Floating rate instruments protect against interest rate rises. Smart \
         debt allocation for the current rate environment.",
    ),
];

const MODERATE: &[Entry] = &[
    entry(
        "hdfc-balanced-advantage",
        20,
        "Core - Dynamic",
        "Dynamic allocation is ideal for moderate risk — it gives equity exposure \
         while automatically managing downside.",
    ),
    entry(
        "hdfc-large-cap",
        10,
        "Core - Equity",
        "Conservative equity exposure through large-cap blue chips. These \
         companies have survived multiple market cycles.",
    ),
    entry(
        "hdfc-equity-savings",
        10,
        "Moderate - Hybrid",
        "Equity-arbitrage-debt blend provides equity taxation benefits with \
         significantly lower volatility than pure equity.",
    ),
    entry(
        "hdfc-hybrid-debt",
        15,
        "Conservative - Hybrid",
        "Predominantly debt with modest equity. Aims to beat fixed deposit \
         returns while limiting downside risk.",
    ),
    entry(
        "hdfc-short-term-debt",
        15,
        "Stability - Debt",
        "Short duration debt for stability. Lower interest rate risk compared to \
         longer duration funds.",
    ),
    entry(
        "hdfc-corporate-bond",
        15,
        "Stability - Debt",
        "Quality corporate bonds as a core debt holding. AA+ rated instruments \
         provide safety with yield.",
    ),
    entry(
        "hdfc-floating-rate",
        15,
        "Stability - Debt",
        "Floating rate debt adapts to changing interest rate scenarios, providing \
         natural protection.",
    ),
];

const LOW_TO_MODERATE: &[Entry] = &[
    entry(
        "hdfc-equity-savings",
        10,
        "Growth - Conservative",
        "Minimal equity exposure through an equity savings structure. \
         Tax-efficient way to get some market participation.",
    ),
    entry(
        "hdfc-hybrid-debt",
        15,
        "Conservative - Hybrid",
        "Debt-heavy hybrid for capital protection with modest growth. Perfect \
         stepping stone from pure debt.",
    ),
    entry(
        "hdfc-short-term-debt",
        20,
        "Core - Debt",
        "Core debt holding with controlled duration risk. Steady returns \
         exceeding savings account rates.",
    ),
    entry(
        "hdfc-corporate-bond",
        20,
        "Core - Debt",
        "High-quality corporate bonds for yield enhancement. Safety-focused with \
         AA+ rated portfolio.",
    ),
    entry(
        "hdfc-banking-psu-debt",
        15,
        "Stability - Debt",
        "Banking and PSU paper offers sovereign-like safety. Ideal for \
         conservative investors seeking debt returns.",
    ),
    entry(
        "hdfc-floating-rate",
        10,
        "Stability - Debt",
        "Floating rate exposure for interest rate protection. Adaptable to \
         changing monetary policy.",
    ),
    entry(
        "hdfc-arbitrage",
        10,
        "Low Risk - Tax Efficient",
        "Tax-efficient alternative to liquid funds. Equity taxation benefits with \
         debt-like returns and minimal risk.",
    ),
];

const LOW: &[Entry] = &[
    entry(
        "hdfc-liquid",
        20,
        "Core - Liquidity",
        "Highest liquidity with next-day redemption. Park your emergency fund \
         here for instant access with better returns than savings accounts.",
    ),
    entry(
        "hdfc-low-duration",
        20,
        "Core - Short Term",
        "Low duration instruments for capital safety. Marginally better returns \
         than liquid fund with minimal additional risk.",
    ),
    entry(
        "hdfc-short-term-debt",
        15,
        "Core - Debt",
        "Short duration debt for steady accrual income. Suitable for 6-12 month \
         investment horizon.",
    ),
    entry(
        "hdfc-corporate-bond",
        15,
        "Core - Debt",
        "Quality corporate bonds for slightly higher yields while maintaining \
         capital safety.",
    ),
    entry(
        "hdfc-banking-psu-debt",
        15,
        "Stability - Debt",
        "Near-sovereign safety with banking and PSU debt instruments. Maximum \
         safety for the conservative investor.",
    ),
    entry(
        "hdfc-arbitrage",
        15,
        "Low Risk - Tax Efficient",
        "Tax-efficient returns with virtually no market risk. Ideal for parking \
         funds with equity taxation advantages.",
    ),
];

const fn entries(level: RiskLevel) -> &'static [Entry] {
    match level {
        RiskLevel::VeryHigh => VERY_HIGH,
        RiskLevel::High => HIGH,
        RiskLevel::ModeratelyHigh => MODERATELY_HIGH,
        RiskLevel::Moderate => MODERATE,
        RiskLevel::LowToModerate => LOW_TO_MODERATE,
        RiskLevel::Low => LOW,
    }
}

/// Resolve the hand-picked basket for a risk level against a catalog
///
/// Ids missing from the catalog are dropped.
pub fn legacy_basket(funds: &[Fund], level: RiskLevel) -> Vec<FundPick<'_>> {
    entries(level)
        .iter()
        .filter_map(|e| {
            let Some(fund) = catalog::find_in(funds, e.id) else {
                tracing::warn!(fund_id = e.id, risk_level = %level, "Legacy basket fund missing from catalog");
                return None;
            };
            Some(FundPick {
                fund,
                allocation: e.allocation,
                role: e.role.to_string(),
                rationale: e.rationale.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocations_sum_to_100() {
        for level in RiskLevel::ALL {
            let alloc = LegacyAllocation::for_level(level);
            assert_eq!(alloc.equity + alloc.debt + alloc.hybrid, 100, "{level}");

            let total: u32 = entries(level).iter().map(|e| e.allocation).sum();
            assert_eq!(total, 100, "{level}");
        }
    }

    #[test]
    fn test_every_legacy_id_resolves() {
        for level in RiskLevel::ALL {
            let basket = legacy_basket(catalog::funds(), level);
            assert_eq!(basket.len(), entries(level).len(), "{level}");
        }
    }

    #[test]
    fn test_moderate_basket() {
        let basket = legacy_basket(catalog::funds(), RiskLevel::Moderate);
        assert_eq!(basket.len(), 7);
        assert_eq!(basket[0].fund.id, "hdfc-balanced-advantage");
        assert_eq!(basket[0].allocation, 20);
        assert_eq!(basket[0].role, "Core - Dynamic");

        let elss = &legacy_basket(catalog::funds(), RiskLevel::VeryHigh)[3];
        assert_eq!(elss.fund.id, "hdfc-elss");
        assert_eq!(
            elss.rationale,
            "Tax saving under Section 80C with equity growth. The 3-year lock-in actually \
             enforces the discipline of long-term investing — a feature, not a bug."
        );
    }

    #[test]
    fn test_missing_ids_are_dropped() {
        let funds: Vec<Fund> = catalog::funds()
            .iter()
            .filter(|f| f.id != "hdfc-liquid")
            .cloned()
            .collect();
        let basket = legacy_basket(&funds, RiskLevel::Low);
        assert_eq!(basket.len(), 5);
        assert!(basket.iter().all(|p| p.fund.id != "hdfc-liquid"));
    }
}
