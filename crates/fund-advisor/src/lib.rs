//! # fund-advisor
//!
//! Rule-based mutual fund recommendations driven by a six-question risk
//! questionnaire over a curated catalog of Indian mutual funds.
//!
//! ## Pipeline
//!
//! - **Questionnaire** - six scored answers, summed into a risk level
//! - **Profile** - answers decoded into age, horizon, goal and experience
//! - **Allocation** - equity/debt/hybrid/liquid targets adjusted per profile
//! - **Scoring** - every eligible fund ranked on five weighted components
//! - **Basket** - core and satellite picks per bucket, allocations sum to 100
//!
//! ## Example: Moderate Investor, 10-year Horizon
//!
//! ```text
//! Equity  ██████████████████████████        50%  core + satellite
//! Debt    ████████████████                  30%  short term, corporate bond
//! Hybrid  ████████                          15%  balanced advantage
//! Liquid  ██                                 5%  liquid fund
//! ```
//!
//! Without answers the engine falls back to a fixed basket per risk level.

pub mod basket;
pub mod catalog;
pub mod error;
pub mod model;
pub mod profile;
pub mod questionnaire;
pub mod recommend;
pub mod returns;
pub mod scoring;
pub mod screener;
pub mod strategy;

pub use basket::{build_basket, FundPick};
pub use error::{AdvisorError, Result};
pub use model::{Bucket, Fund, FundCategory, RiskLevel, SubCategory};
pub use profile::InvestorProfile;
pub use questionnaire::{questionnaire, Answers, Question};
pub use recommend::{build_recommendation, RecommendationResult, Recommender, StrategyKind};
pub use returns::{trailing_returns, NavEntry, TrailingReturns};
pub use screener::{compare_ids, screen, Comparison, FundFilter, SortDirection, SortField};
pub use strategy::{compute_allocation, AllocationResult};
