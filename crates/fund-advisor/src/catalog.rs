//! Fund Catalog
//!
//! Static, read-only scheme table. Built once on first access and shared by
//! `&'static` reference; nothing in the crate mutates it. Return figures are
//! refreshed out of band by the NAV job and baked in at build time.

use std::sync::LazyLock;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::model::{Fund, FundCategory, RiskLevel, SubCategory};

/// NAV date of the baked-in return figures
const AS_OF: (i32, u32, u32) = (2025, 1, 31);

static FUNDS: LazyLock<Vec<Fund>> = LazyLock::new(|| SEEDS.iter().map(Seed::to_fund).collect());

/// All funds, in catalog order
pub fn funds() -> &'static [Fund] {
    &FUNDS
}

/// Look up a fund by id in the built-in catalog
pub fn find(id: &str) -> Option<&'static Fund> {
    find_in(funds(), id)
}

/// Look up a fund by id in any fund slice
pub fn find_in<'a>(funds: &'a [Fund], id: &str) -> Option<&'a Fund> {
    funds.iter().find(|f| f.id == id)
}

struct Seed {
    id: &'static str,
    name: &'static str,
    category: FundCategory,
    sub: SubCategory,
    risk: RiskLevel,
    aum: Decimal,
    ter: Decimal,
    min: Decimal,
    inception: (i32, u32, u32),
    manager: &'static str,
    objective: &'static str,
    suitable_for: &'static str,
    horizon: u32,
    code: u32,
    /// 1y, 3y, 5y, 10y, since inception
    returns: [Option<Decimal>; 5],
}

impl Seed {
    fn to_fund(&self) -> Fund {
        let (y, m, d) = self.inception;
        let [r1, r3, r5, r10, rsi] = self.returns;
        let (ay, am, ad) = AS_OF;

        Fund {
            id: self.id.into(),
            name: self.name.into(),
            category: self.category,
            sub_category: self.sub,
            risk_level: self.risk,
            aum_crores: self.aum,
            expense_ratio: self.ter,
            min_investment: self.min,
            inception_date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN),
            fund_manager: self.manager.into(),
            objective: self.objective.into(),
            suitable_for: self.suitable_for.into(),
            min_horizon_months: self.horizon,
            amfi_scheme_code: self.code,
            return_1y: r1,
            return_3y: r3,
            return_5y: r5,
            return_10y: r10,
            return_since_inception: rsi,
            as_of_date: NaiveDate::from_ymd_opt(ay, am, ad),
        }
    }
}

const SEEDS: &[Seed] = &[
    // ── Equity ────────────────────────────────────────────────────────────
    Seed {
        id: "hdfc-flexi-cap",
        name: "HDFC Flexi Cap Fund",
        category: FundCategory::Equity,
        sub: SubCategory::FlexiCap,
        risk: RiskLevel::VeryHigh,
        aum: dec!(69639),
        ter: dec!(0.77),
        min: dec!(100),
        inception: (1995, 1, 1),
        manager: "Roshi Jain",
        objective: "Long-term capital appreciation from a diversified portfolio across market capitalisations.",
        suitable_for: "Investors seeking all-weather equity exposure over 5+ years.",
        horizon: 60,
        code: 118955,
        returns: [Some(dec!(18.2)), Some(dec!(21.4)), Some(dec!(22.9)), Some(dec!(15.6)), Some(dec!(18.9))],
    },
    Seed {
        id: "hdfc-large-cap",
        name: "HDFC Large Cap Fund",
        category: FundCategory::Equity,
        sub: SubCategory::LargeCap,
        risk: RiskLevel::VeryHigh,
        aum: dec!(36587),
        ter: dec!(0.98),
        min: dec!(100),
        inception: (1996, 10, 11),
        manager: "Rahul Baijal",
        objective: "Capital appreciation by investing predominantly in large-cap companies.",
        suitable_for: "First-time equity investors wanting blue-chip stability.",
        horizon: 60,
        code: 119018,
        returns: [Some(dec!(9.8)), Some(dec!(14.1)), Some(dec!(16.2)), Some(dec!(12.4)), Some(dec!(18.7))],
    },
    Seed {
        id: "hdfc-mid-cap",
        name: "HDFC Mid-Cap Opportunities Fund",
        category: FundCategory::Equity,
        sub: SubCategory::MidCap,
        risk: RiskLevel::VeryHigh,
        aum: dec!(75675),
        ter: dec!(0.74),
        min: dec!(100),
        inception: (2007, 6, 25),
        manager: "Chirag Setalvad",
        objective: "Long-term growth from a portfolio of mid-cap companies.",
        suitable_for: "Growth investors comfortable with higher volatility.",
        horizon: 84,
        code: 118989,
        returns: [Some(dec!(21.5)), Some(dec!(25.8)), Some(dec!(28.9)), Some(dec!(18.6)), Some(dec!(17.9))],
    },
    Seed {
        id: "hdfc-small-cap",
        name: "HDFC Small Cap Fund",
        category: FundCategory::Equity,
        sub: SubCategory::SmallCap,
        risk: RiskLevel::VeryHigh,
        aum: dec!(32471),
        ter: dec!(0.67),
        min: dec!(100),
        inception: (2008, 4, 3),
        manager: "Chirag Setalvad",
        objective: "Long-term capital appreciation from small-cap companies.",
        suitable_for: "Aggressive investors with a 7+ year horizon.",
        horizon: 84,
        code: 130503,
        returns: [Some(dec!(14.9)), Some(dec!(22.6)), Some(dec!(30.4)), Some(dec!(19.8)), Some(dec!(17.2))],
    },
    Seed {
        id: "hdfc-large-and-mid-cap",
        name: "HDFC Large and Mid Cap Fund",
        category: FundCategory::Equity,
        sub: SubCategory::LargeAndMidCap,
        risk: RiskLevel::VeryHigh,
        aum: dec!(23475),
        ter: dec!(0.88),
        min: dec!(100),
        inception: (1994, 2, 18),
        manager: "Gopal Agrawal",
        objective: "Growth from a blend of large-cap and mid-cap companies.",
        suitable_for: "Investors wanting mid-cap upside with a large-cap anchor.",
        horizon: 60,
        code: 130498,
        returns: [Some(dec!(16.1)), Some(dec!(20.9)), Some(dec!(24.1)), Some(dec!(14.2)), Some(dec!(14.5))],
    },
    Seed {
        id: "hdfc-multi-cap",
        name: "HDFC Multi Cap Fund",
        category: FundCategory::Equity,
        sub: SubCategory::MultiCap,
        risk: RiskLevel::VeryHigh,
        aum: dec!(15824),
        ter: dec!(0.79),
        min: dec!(100),
        inception: (2021, 12, 10),
        manager: "Gopal Agrawal",
        objective: "Capital appreciation with at least 25% each in large, mid and small caps.",
        suitable_for: "Investors seeking balanced exposure across market caps.",
        horizon: 60,
        code: 149368,
        returns: [Some(dec!(17.4)), Some(dec!(22.3)), None, None, Some(dec!(19.6))],
    },
    Seed {
        id: "hdfc-elss",
        name: "HDFC ELSS Tax Saver",
        category: FundCategory::Equity,
        sub: SubCategory::Elss,
        risk: RiskLevel::VeryHigh,
        aum: dec!(16003),
        ter: dec!(1.08),
        min: dec!(500),
        inception: (1996, 3, 31),
        manager: "Roshi Jain",
        objective: "Equity growth with tax deduction under Section 80C and a 3-year lock-in.",
        suitable_for: "Salaried investors looking to save tax through equity.",
        horizon: 36,
        code: 119060,
        returns: [Some(dec!(16.7)), Some(dec!(21.0)), Some(dec!(21.9)), Some(dec!(14.1)), Some(dec!(22.8))],
    },
    Seed {
        id: "hdfc-focused",
        name: "HDFC Focused Fund",
        category: FundCategory::Equity,
        sub: SubCategory::Focused,
        risk: RiskLevel::VeryHigh,
        aum: dec!(17577),
        ter: dec!(0.65),
        min: dec!(100),
        inception: (2004, 9, 17),
        manager: "Roshi Jain",
        objective: "Capital appreciation from a concentrated portfolio of up to 30 stocks.",
        suitable_for: "Investors comfortable with concentrated high-conviction bets.",
        horizon: 60,
        code: 118950,
        returns: [Some(dec!(17.6)), Some(dec!(22.5)), Some(dec!(23.7)), Some(dec!(14.9)), Some(dec!(16.3))],
    },
    Seed {
        id: "hdfc-capital-builder-value",
        name: "HDFC Capital Builder Value Fund",
        category: FundCategory::Equity,
        sub: SubCategory::Value,
        risk: RiskLevel::VeryHigh,
        aum: dec!(7471),
        ter: dec!(1.02),
        min: dec!(100),
        inception: (1993, 2, 1),
        manager: "Anand Laddha",
        objective: "Long-term growth by investing in undervalued companies.",
        suitable_for: "Patient investors following a value style.",
        horizon: 60,
        code: 119108,
        returns: [Some(dec!(15.3)), Some(dec!(19.2)), Some(dec!(20.1)), Some(dec!(13.4)), Some(dec!(15.6))],
    },
    Seed {
        id: "hdfc-dividend-yield",
        name: "HDFC Dividend Yield Fund",
        category: FundCategory::Equity,
        sub: SubCategory::DividendYield,
        risk: RiskLevel::VeryHigh,
        aum: dec!(6180),
        ter: dec!(0.58),
        min: dec!(100),
        inception: (2020, 12, 18),
        manager: "Gopal Agrawal",
        objective: "Capital appreciation and income from dividend-yielding companies.",
        suitable_for: "Investors wanting equity exposure with an income tilt.",
        horizon: 60,
        code: 148402,
        returns: [Some(dec!(14.2)), Some(dec!(19.8)), None, None, Some(dec!(22.1))],
    },
    Seed {
        id: "hdfc-banking-financial-services",
        name: "HDFC Banking and Financial Services Fund",
        category: FundCategory::Equity,
        sub: SubCategory::SectoralBanking,
        risk: RiskLevel::VeryHigh,
        aum: dec!(3965),
        ter: dec!(0.82),
        min: dec!(100),
        inception: (2021, 7, 1),
        manager: "Anand Laddha",
        objective: "Growth from banking and financial services companies.",
        suitable_for: "Experienced investors taking a sector view.",
        horizon: 60,
        code: 148978,
        returns: [Some(dec!(12.3)), Some(dec!(14.6)), None, None, Some(dec!(14.0))],
    },
    Seed {
        id: "hdfc-pharma-healthcare",
        name: "HDFC Pharma and Healthcare Fund",
        category: FundCategory::Equity,
        sub: SubCategory::SectoralPharma,
        risk: RiskLevel::VeryHigh,
        aum: dec!(1469),
        ter: dec!(0.85),
        min: dec!(100),
        inception: (2023, 10, 4),
        manager: "Nikhil Mathur",
        objective: "Growth from pharmaceutical and healthcare companies.",
        suitable_for: "Experienced investors taking a sector view.",
        horizon: 60,
        code: 152212,
        returns: [Some(dec!(35.6)), None, None, None, Some(dec!(40.2))],
    },
    Seed {
        id: "hdfc-technology",
        name: "HDFC Technology Fund",
        category: FundCategory::Equity,
        sub: SubCategory::SectoralTechnology,
        risk: RiskLevel::VeryHigh,
        aum: dec!(1380),
        ter: dec!(0.79),
        min: dec!(100),
        inception: (2023, 9, 8),
        manager: "Balakumar B",
        objective: "Growth from technology and technology-related companies.",
        suitable_for: "Experienced investors taking a sector view.",
        horizon: 60,
        code: 152158,
        returns: [Some(dec!(22.8)), None, None, None, Some(dec!(31.5))],
    },
    Seed {
        id: "hdfc-infrastructure",
        name: "HDFC Infrastructure Fund",
        category: FundCategory::Equity,
        sub: SubCategory::ThematicInfrastructure,
        risk: RiskLevel::VeryHigh,
        aum: dec!(2493),
        ter: dec!(1.25),
        min: dec!(100),
        inception: (2008, 3, 10),
        manager: "Srinivasan Ramamurthy",
        objective: "Growth from companies engaged in infrastructure development.",
        suitable_for: "Experienced investors with a thematic conviction.",
        horizon: 84,
        code: 119228,
        returns: [Some(dec!(20.4)), Some(dec!(29.8)), Some(dec!(26.1)), Some(dec!(10.5)), Some(dec!(9.8))],
    },
    Seed {
        id: "hdfc-defence",
        name: "HDFC Defence Fund",
        category: FundCategory::Equity,
        sub: SubCategory::ThematicDefence,
        risk: RiskLevel::VeryHigh,
        aum: dec!(4802),
        ter: dec!(0.77),
        min: dec!(100),
        inception: (2023, 6, 2),
        manager: "Abhishek Poddar",
        objective: "Growth from defence and allied sector companies.",
        suitable_for: "Experienced investors with a thematic conviction.",
        horizon: 84,
        code: 151750,
        returns: [Some(dec!(41.5)), None, None, None, Some(dec!(58.6))],
    },
    Seed {
        id: "hdfc-manufacturing",
        name: "HDFC Manufacturing Fund",
        category: FundCategory::Equity,
        sub: SubCategory::ThematicManufacturing,
        risk: RiskLevel::VeryHigh,
        aum: dec!(12104),
        ter: dec!(0.85),
        min: dec!(100),
        inception: (2024, 5, 16),
        manager: "Rakesh Sethia",
        objective: "Growth from companies following the manufacturing theme.",
        suitable_for: "Experienced investors with a thematic conviction.",
        horizon: 84,
        code: 153478,
        returns: [None, None, None, None, None],
    },
    // ── Index ─────────────────────────────────────────────────────────────
    Seed {
        id: "hdfc-nifty-50-index",
        name: "HDFC Nifty 50 Index Fund",
        category: FundCategory::Index,
        sub: SubCategory::LargeCapIndex,
        risk: RiskLevel::VeryHigh,
        aum: dec!(18562),
        ter: dec!(0.2),
        min: dec!(100),
        inception: (2002, 7, 17),
        manager: "Nirman Morakhia",
        objective: "Returns that track the Nifty 50 index, subject to tracking error.",
        suitable_for: "Cost-conscious investors wanting broad market exposure.",
        horizon: 60,
        code: 119063,
        returns: [Some(dec!(8.9)), Some(dec!(11.8)), Some(dec!(15.1)), Some(dec!(11.9)), Some(dec!(13.6))],
    },
    Seed {
        id: "hdfc-nifty-next-50-index",
        name: "HDFC Nifty Next 50 Index Fund",
        category: FundCategory::Index,
        sub: SubCategory::NextFiftyIndex,
        risk: RiskLevel::VeryHigh,
        aum: dec!(1485),
        ter: dec!(0.3),
        min: dec!(100),
        inception: (2021, 11, 3),
        manager: "Nirman Morakhia",
        objective: "Returns that track the Nifty Next 50 index, subject to tracking error.",
        suitable_for: "Passive investors wanting emerging large-cap exposure.",
        horizon: 60,
        code: 149288,
        returns: [Some(dec!(6.2)), Some(dec!(16.8)), None, None, Some(dec!(12.5))],
    },
    Seed {
        id: "hdfc-nifty-midcap-150-index",
        name: "HDFC NIFTY Midcap 150 Index Fund",
        category: FundCategory::Index,
        sub: SubCategory::MidCapIndex,
        risk: RiskLevel::VeryHigh,
        aum: dec!(342),
        ter: dec!(0.3),
        min: dec!(100),
        inception: (2022, 4, 5),
        manager: "Nirman Morakhia",
        objective: "Returns that track the Nifty Midcap 150 index, subject to tracking error.",
        suitable_for: "Passive investors wanting mid-cap exposure at low cost.",
        horizon: 84,
        code: 150288,
        returns: [Some(dec!(19.1)), None, None, None, Some(dec!(22.4))],
    },
    Seed {
        id: "hdfc-nifty-smallcap-250-index",
        name: "HDFC NIFTY Smallcap 250 Index Fund",
        category: FundCategory::Index,
        sub: SubCategory::SmallCapIndex,
        risk: RiskLevel::VeryHigh,
        aum: dec!(796),
        ter: dec!(0.35),
        min: dec!(100),
        inception: (2022, 4, 5),
        manager: "Nirman Morakhia",
        objective: "Returns that track the Nifty Smallcap 250 index, subject to tracking error.",
        suitable_for: "Passive investors wanting small-cap exposure at low cost.",
        horizon: 84,
        code: 150290,
        returns: [Some(dec!(16.4)), None, None, None, Some(dec!(24.8))],
    },
    // ── Solution oriented ────────────────────────────────────────────────
    Seed {
        id: "hdfc-retirement-savings-equity",
        name: "HDFC Retirement Savings Fund - Equity Plan",
        category: FundCategory::Solution,
        sub: SubCategory::Retirement,
        risk: RiskLevel::VeryHigh,
        aum: dec!(6360),
        ter: dec!(0.87),
        min: dec!(5000),
        inception: (2016, 2, 25),
        manager: "Shobhit Mehrotra",
        objective: "Retirement corpus building through equity, with a 5-year lock-in.",
        suitable_for: "Investors saving for retirement over 10+ years.",
        horizon: 60,
        code: 119758,
        returns: [Some(dec!(16.2)), Some(dec!(20.7)), Some(dec!(24.0)), None, Some(dec!(18.1))],
    },
    Seed {
        id: "hdfc-childrens-gift",
        name: "HDFC Children's Fund",
        category: FundCategory::Solution,
        sub: SubCategory::Children,
        risk: RiskLevel::VeryHigh,
        aum: dec!(9890),
        ter: dec!(0.92),
        min: dec!(5000),
        inception: (2001, 3, 2),
        manager: "Chirag Dagli",
        objective: "Long-term capital appreciation for children's goals, with a 5-year lock-in.",
        suitable_for: "Parents saving for education or marriage expenses.",
        horizon: 60,
        code: 119091,
        returns: [Some(dec!(14.1)), Some(dec!(17.3)), Some(dec!(19.6)), Some(dec!(14.8)), Some(dec!(16.9))],
    },
    // ── Fund of funds ────────────────────────────────────────────────────
    Seed {
        id: "hdfc-gold-etf-fof",
        name: "HDFC Gold ETF Fund of Fund",
        category: FundCategory::Fof,
        sub: SubCategory::GoldFof,
        risk: RiskLevel::High,
        aum: dec!(3390),
        ter: dec!(0.17),
        min: dec!(100),
        inception: (2011, 11, 1),
        manager: "Arun Agarwal",
        objective: "Returns in line with domestic gold prices via the HDFC Gold ETF.",
        suitable_for: "Investors wanting a gold hedge without physical storage.",
        horizon: 36,
        code: 119132,
        returns: [Some(dec!(28.3)), Some(dec!(16.9)), Some(dec!(13.6)), Some(dec!(9.4)), Some(dec!(8.1))],
    },
    Seed {
        id: "hdfc-silver-etf-fof",
        name: "HDFC Silver ETF Fund of Fund",
        category: FundCategory::Fof,
        sub: SubCategory::SilverFof,
        risk: RiskLevel::VeryHigh,
        aum: dec!(429),
        ter: dec!(0.2),
        min: dec!(100),
        inception: (2022, 10, 28),
        manager: "Arun Agarwal",
        objective: "Returns in line with domestic silver prices via the HDFC Silver ETF.",
        suitable_for: "Investors wanting precious-metal diversification.",
        horizon: 36,
        code: 151049,
        returns: [Some(dec!(31.2)), None, None, None, Some(dec!(19.7))],
    },
    // ── Hybrid ────────────────────────────────────────────────────────────
    Seed {
        id: "hdfc-balanced-advantage",
        name: "HDFC Balanced Advantage Fund",
        category: FundCategory::Hybrid,
        sub: SubCategory::BalancedAdvantage,
        risk: RiskLevel::VeryHigh,
        aum: dec!(96536),
        ter: dec!(0.77),
        min: dec!(100),
        inception: (2000, 9, 11),
        manager: "Gopal Agrawal",
        objective: "Capital appreciation with dynamic allocation between equity and debt.",
        suitable_for: "Investors wanting equity participation with automatic rebalancing.",
        horizon: 36,
        code: 118968,
        returns: [Some(dec!(12.7)), Some(dec!(20.4)), Some(dec!(20.3)), Some(dec!(14.1)), Some(dec!(18.3))],
    },
    Seed {
        id: "hdfc-hybrid-equity",
        name: "HDFC Hybrid Equity Fund",
        category: FundCategory::Hybrid,
        sub: SubCategory::AggressiveHybrid,
        risk: RiskLevel::VeryHigh,
        aum: dec!(24228),
        ter: dec!(1.03),
        min: dec!(100),
        inception: (2000, 4, 6),
        manager: "Chirag Setalvad",
        objective: "Growth and income from a 65-80% equity and 20-35% debt mix.",
        suitable_for: "Investors wanting equity growth with a debt cushion.",
        horizon: 36,
        code: 119062,
        returns: [Some(dec!(10.5)), Some(dec!(13.8)), Some(dec!(15.2)), Some(dec!(11.6)), Some(dec!(15.9))],
    },
    Seed {
        id: "hdfc-equity-savings",
        name: "HDFC Equity Savings Fund",
        category: FundCategory::Hybrid,
        sub: SubCategory::EquitySavings,
        risk: RiskLevel::ModeratelyHigh,
        aum: dec!(5561),
        ter: dec!(0.98),
        min: dec!(100),
        inception: (2004, 9, 17),
        manager: "Anil Bamboli",
        objective: "Income and moderate growth from equity, arbitrage and debt.",
        suitable_for: "Investors moving from fixed deposits to market-linked products.",
        horizon: 24,
        code: 119133,
        returns: [Some(dec!(9.4)), Some(dec!(11.3)), Some(dec!(11.9)), Some(dec!(9.6)), Some(dec!(9.5))],
    },
    Seed {
        id: "hdfc-hybrid-debt",
        name: "HDFC Hybrid Debt Fund",
        category: FundCategory::Hybrid,
        sub: SubCategory::ConservativeHybrid,
        risk: RiskLevel::ModeratelyHigh,
        aum: dec!(3366),
        ter: dec!(0.85),
        min: dec!(100),
        inception: (2003, 12, 26),
        manager: "Shobhit Mehrotra",
        objective: "Regular income from debt with a modest equity component.",
        suitable_for: "Conservative investors wanting returns above fixed deposits.",
        horizon: 24,
        code: 119118,
        returns: [Some(dec!(10.1)), Some(dec!(10.4)), Some(dec!(10.8)), Some(dec!(9.3)), Some(dec!(10.2))],
    },
    Seed {
        id: "hdfc-arbitrage",
        name: "HDFC Arbitrage Fund",
        category: FundCategory::Hybrid,
        sub: SubCategory::Arbitrage,
        risk: RiskLevel::Low,
        aum: dec!(17985),
        ter: dec!(0.4),
        min: dec!(100),
        inception: (2007, 10, 23),
        manager: "Anil Bamboli",
        objective: "Income from cash-futures arbitrage with equity taxation.",
        suitable_for: "Short-term parking with tax efficiency.",
        horizon: 3,
        code: 119098,
        returns: [Some(dec!(7.5)), Some(dec!(7.0)), Some(dec!(5.9)), Some(dec!(6.4)), Some(dec!(6.9))],
    },
    Seed {
        id: "hdfc-multi-asset",
        name: "HDFC Multi-Asset Fund",
        category: FundCategory::Hybrid,
        sub: SubCategory::MultiAssetAllocation,
        risk: RiskLevel::VeryHigh,
        aum: dec!(3934),
        ter: dec!(0.67),
        min: dec!(100),
        inception: (2005, 8, 17),
        manager: "Anil Bamboli",
        objective: "Growth from equity, debt and gold in a single portfolio.",
        suitable_for: "Investors wanting one-stop asset diversification.",
        horizon: 36,
        code: 119105,
        returns: [Some(dec!(13.9)), Some(dec!(14.2)), Some(dec!(16.8)), Some(dec!(11.1)), Some(dec!(10.0))],
    },
    // ── Debt ──────────────────────────────────────────────────────────────
    Seed {
        id: "hdfc-overnight",
        name: "HDFC Overnight Fund",
        category: FundCategory::Debt,
        sub: SubCategory::Overnight,
        risk: RiskLevel::Low,
        aum: dec!(12020),
        ter: dec!(0.1),
        min: dec!(100),
        inception: (2002, 2, 6),
        manager: "Anil Bamboli",
        objective: "Returns from overnight securities with very high liquidity.",
        suitable_for: "Parking surplus cash for a few days.",
        horizon: 1,
        code: 119122,
        returns: [Some(dec!(6.6)), Some(dec!(6.3)), Some(dec!(5.0)), Some(dec!(5.7)), Some(dec!(5.9))],
    },
    Seed {
        id: "hdfc-liquid",
        name: "HDFC Liquid Fund",
        category: FundCategory::Debt,
        sub: SubCategory::Liquid,
        risk: RiskLevel::LowToModerate,
        aum: dec!(64283),
        ter: dec!(0.2),
        min: dec!(100),
        inception: (2000, 10, 17),
        manager: "Anupam Joshi",
        objective: "Income from money market and debt instruments maturing within 91 days.",
        suitable_for: "Emergency funds and short-term surplus.",
        horizon: 1,
        code: 119120,
        returns: [Some(dec!(7.4)), Some(dec!(6.7)), Some(dec!(5.4)), Some(dec!(6.3)), Some(dec!(6.8))],
    },
    Seed {
        id: "hdfc-ultra-short-term",
        name: "HDFC Ultra Short Term Fund",
        category: FundCategory::Debt,
        sub: SubCategory::UltraShortDuration,
        risk: RiskLevel::LowToModerate,
        aum: dec!(16143),
        ter: dec!(0.39),
        min: dec!(100),
        inception: (2018, 9, 24),
        manager: "Anupam Joshi",
        objective: "Income from debt with a Macaulay duration of 3 to 6 months.",
        suitable_for: "Investors with a 3-6 month horizon.",
        horizon: 3,
        code: 143248,
        returns: [Some(dec!(7.8)), Some(dec!(6.9)), Some(dec!(6.1)), None, Some(dec!(6.6))],
    },
    Seed {
        id: "hdfc-money-market",
        name: "HDFC Money Market Fund",
        category: FundCategory::Debt,
        sub: SubCategory::MoneyMarket,
        risk: RiskLevel::LowToModerate,
        aum: dec!(32500),
        ter: dec!(0.23),
        min: dec!(100),
        inception: (1999, 11, 18),
        manager: "Anupam Joshi",
        objective: "Income from money market instruments maturing within one year.",
        suitable_for: "Investors with a horizon of up to one year.",
        horizon: 3,
        code: 119092,
        returns: [Some(dec!(7.8)), Some(dec!(7.0)), Some(dec!(6.2)), Some(dec!(7.0)), Some(dec!(7.0))],
    },
    Seed {
        id: "hdfc-low-duration",
        name: "HDFC Low Duration Fund",
        category: FundCategory::Debt,
        sub: SubCategory::LowDuration,
        risk: RiskLevel::LowToModerate,
        aum: dec!(20580),
        ter: dec!(0.45),
        min: dec!(100),
        inception: (2000, 11, 18),
        manager: "Anupam Joshi",
        objective: "Income from debt with a Macaulay duration of 6 to 12 months.",
        suitable_for: "Investors with a 6-12 month horizon.",
        horizon: 6,
        code: 119093,
        returns: [Some(dec!(8.0)), Some(dec!(7.1)), Some(dec!(6.5)), Some(dec!(7.2)), Some(dec!(7.6))],
    },
    Seed {
        id: "hdfc-short-term-debt",
        name: "HDFC Short Term Debt Fund",
        category: FundCategory::Debt,
        sub: SubCategory::ShortDuration,
        risk: RiskLevel::Moderate,
        aum: dec!(14370),
        ter: dec!(0.4),
        min: dec!(100),
        inception: (2010, 6, 25),
        manager: "Anil Bamboli",
        objective: "Income from debt with a Macaulay duration of 1 to 3 years.",
        suitable_for: "Investors with a 1-3 year horizon.",
        horizon: 12,
        code: 119016,
        returns: [Some(dec!(8.4)), Some(dec!(7.0)), Some(dec!(6.9)), Some(dec!(7.7)), Some(dec!(8.1))],
    },
    Seed {
        id: "hdfc-medium-term-debt",
        name: "HDFC Medium Term Debt Fund",
        category: FundCategory::Debt,
        sub: SubCategory::MediumDuration,
        risk: RiskLevel::ModeratelyHigh,
        aum: dec!(3947),
        ter: dec!(0.62),
        min: dec!(100),
        inception: (2002, 2, 6),
        manager: "Shobhit Mehrotra",
        objective: "Income from debt with a Macaulay duration of 3 to 4 years.",
        suitable_for: "Investors with a 3-4 year horizon.",
        horizon: 36,
        code: 119117,
        returns: [Some(dec!(8.5)), Some(dec!(7.1)), Some(dec!(7.2)), Some(dec!(7.6)), Some(dec!(8.0))],
    },
    Seed {
        id: "hdfc-corporate-bond",
        name: "HDFC Corporate Bond Fund",
        category: FundCategory::Debt,
        sub: SubCategory::CorporateBond,
        risk: RiskLevel::Moderate,
        aum: dec!(32528),
        ter: dec!(0.36),
        min: dec!(100),
        inception: (2010, 6, 29),
        manager: "Anupam Joshi",
        objective: "Income from AA+ and above rated corporate bonds.",
        suitable_for: "Investors seeking quality debt with a 2-3 year horizon.",
        horizon: 24,
        code: 118987,
        returns: [Some(dec!(8.6)), Some(dec!(7.2)), Some(dec!(7.0)), Some(dec!(7.8)), Some(dec!(8.3))],
    },
    Seed {
        id: "hdfc-banking-psu-debt",
        name: "HDFC Banking and PSU Debt Fund",
        category: FundCategory::Debt,
        sub: SubCategory::BankingAndPsu,
        risk: RiskLevel::Moderate,
        aum: dec!(5922),
        ter: dec!(0.39),
        min: dec!(100),
        inception: (2014, 3, 26),
        manager: "Anil Bamboli",
        objective: "Income from debt issued by banks, PSUs and public financial institutions.",
        suitable_for: "Conservative investors wanting near-sovereign safety.",
        horizon: 24,
        code: 128628,
        returns: [Some(dec!(8.1)), Some(dec!(6.9)), Some(dec!(6.7)), Some(dec!(7.6)), Some(dec!(7.8))],
    },
    Seed {
        id: "hdfc-floating-rate",
        name: "HDFC Floating Rate Debt Fund",
        category: FundCategory::Debt,
        sub: SubCategory::Floater,
        risk: RiskLevel::LowToModerate,
        aum: dec!(15198),
        ter: dec!(0.26),
        min: dec!(100),
        inception: (2007, 10, 23),
        manager: "Shobhit Mehrotra",
        objective: "Income from floating rate instruments and swapped fixed-rate debt.",
        suitable_for: "Investors wanting protection against rising rates.",
        horizon: 12,
        code: 119094,
        returns: [Some(dec!(8.5)), Some(dec!(7.3)), Some(dec!(7.0)), Some(dec!(7.7)), Some(dec!(7.9))],
    },
    Seed {
        id: "hdfc-gilt",
        name: "HDFC Gilt Fund",
        category: FundCategory::Debt,
        sub: SubCategory::Gilt,
        risk: RiskLevel::Moderate,
        aum: dec!(2950),
        ter: dec!(0.47),
        min: dec!(100),
        inception: (2001, 7, 25),
        manager: "Anil Bamboli",
        objective: "Credit-risk-free returns from central and state government securities.",
        suitable_for: "Investors wanting sovereign debt with duration exposure.",
        horizon: 36,
        code: 119116,
        returns: [Some(dec!(9.1)), Some(dec!(6.9)), Some(dec!(6.2)), Some(dec!(7.3)), Some(dec!(8.4))],
    },
    Seed {
        id: "hdfc-dynamic-debt",
        name: "HDFC Dynamic Debt Fund",
        category: FundCategory::Debt,
        sub: SubCategory::DynamicBond,
        risk: RiskLevel::Moderate,
        aum: dec!(788),
        ter: dec!(0.7),
        min: dec!(100),
        inception: (1997, 4, 28),
        manager: "Shobhit Mehrotra",
        objective: "Income from actively managed duration across the yield curve.",
        suitable_for: "Investors comfortable with interest-rate calls.",
        horizon: 36,
        code: 119114,
        returns: [Some(dec!(8.9)), Some(dec!(7.0)), Some(dec!(7.1)), Some(dec!(6.9)), Some(dec!(7.9))],
    },
    Seed {
        id: "hdfc-credit-risk",
        name: "HDFC Credit Risk Debt Fund",
        category: FundCategory::Debt,
        sub: SubCategory::CreditRisk,
        risk: RiskLevel::ModeratelyHigh,
        aum: dec!(7500),
        ter: dec!(1.0),
        min: dec!(100),
        inception: (2014, 3, 25),
        manager: "Shobhit Mehrotra",
        objective: "Higher accrual from at least 65% in below-AA rated corporate bonds.",
        suitable_for: "Investors accepting credit risk for yield.",
        horizon: 36,
        code: 128053,
        returns: [Some(dec!(8.0)), Some(dec!(6.9)), Some(dec!(7.5)), None, Some(dec!(8.0))],
    },
];
