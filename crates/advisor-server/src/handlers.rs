//! HTTP Handlers

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use fund_advisor::{
    compare_ids, questionnaire::QuestionView, screen, AdvisorError, Answers, Comparison, Fund,
    FundCategory, FundFilter, RecommendationResult, RiskLevel, SortDirection, SortField,
};

use crate::state::AppState;

// ============================================================================
// Request / Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub funds: usize,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

#[derive(Debug, Default, Deserialize)]
pub struct RecommendRequest {
    #[serde(default)]
    pub answers: Answers,
    #[serde(default)]
    pub risk_level: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FundsQuery {
    pub category: Option<String>,
    pub risk_level: Option<String>,
    pub search: Option<String>,
    pub sort: Option<String>,
    pub direction: Option<SortDirection>,
}

#[derive(Debug, Serialize)]
pub struct FundsResponse {
    pub funds: Vec<&'static Fund>,
    pub total: usize,
}

#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    pub ids: Vec<String>,
}

fn api_error(err: &AdvisorError) -> ApiError {
    let (status, code) = match err {
        AdvisorError::FundNotFound(_) => (StatusCode::NOT_FOUND, "FUND_NOT_FOUND"),
        AdvisorError::InvalidRiskLevel(_) => (StatusCode::BAD_REQUEST, "INVALID_RISK_LEVEL"),
        AdvisorError::UnknownCategory(_) => (StatusCode::BAD_REQUEST, "UNKNOWN_CATEGORY"),
        AdvisorError::UnknownSortField(_) => (StatusCode::BAD_REQUEST, "UNKNOWN_SORT_FIELD"),
        AdvisorError::TooManyFunds { .. } => (StatusCode::BAD_REQUEST, "TOO_MANY_FUNDS"),
        AdvisorError::InvalidDate(_) => (StatusCode::BAD_REQUEST, "INVALID_DATE"),
        AdvisorError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "CONFIG_ERROR"),
    };

    tracing::warn!(%status, error = %err, "Request rejected");
    (
        status,
        Json(ErrorResponse {
            error: err.user_message(),
            code: code.into(),
        }),
    )
}

fn parse_optional<T>(raw: Option<&str>) -> Result<Option<T>, ApiError>
where
    T: std::str::FromStr<Err = AdvisorError>,
{
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .transpose()
        .map_err(|e| api_error(&e))
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        funds: state.funds.len(),
    })
}

/// The risk questionnaire
pub async fn list_questions() -> Json<Vec<QuestionView>> {
    Json(fund_advisor::questionnaire())
}

/// Build a recommendation from questionnaire answers and/or a risk level
pub async fn recommend(
    State(state): State<AppState>,
    Json(payload): Json<RecommendRequest>,
) -> Result<Json<RecommendationResult<'static>>, ApiError> {
    let risk_level: Option<RiskLevel> = parse_optional(payload.risk_level.as_deref())?;
    Ok(Json(state.recommender.recommend(&payload.answers, risk_level)))
}

/// Filter and sort the catalog
pub async fn list_funds(
    State(state): State<AppState>,
    Query(query): Query<FundsQuery>,
) -> Result<Json<FundsResponse>, ApiError> {
    let filter = FundFilter {
        category: parse_optional::<FundCategory>(query.category.as_deref())?,
        risk_level: parse_optional::<RiskLevel>(query.risk_level.as_deref())?,
        search: query.search,
    };
    let sort = parse_optional::<SortField>(query.sort.as_deref())?
        .map(|field| (field, query.direction.unwrap_or_default()));

    let funds = screen(state.funds, &filter, sort);
    Ok(Json(FundsResponse { total: funds.len(), funds }))
}

/// Side-by-side comparison of up to four funds
pub async fn compare_funds(
    State(state): State<AppState>,
    Json(payload): Json<CompareRequest>,
) -> Result<Json<Comparison<'static>>, ApiError> {
    compare_ids(state.funds, &payload.ids)
        .map(Json)
        .map_err(|e| api_error(&e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use fund_advisor::StrategyKind;

    fn state() -> State<AppState> {
        State(AppState::default())
    }

    #[tokio::test]
    async fn test_health() {
        let Json(health) = health_check(state()).await;
        assert_eq!(health.status, "healthy");
        assert!(health.funds > 0);
    }

    #[tokio::test]
    async fn test_questions() {
        let Json(questions) = list_questions().await;
        assert_eq!(questions.len(), 6);
    }

    #[tokio::test]
    async fn test_recommend_without_answers_uses_legacy() {
        let Json(result) = recommend(state(), Json(RecommendRequest::default()))
            .await
            .unwrap();
        assert_eq!(result.strategy, StrategyKind::Legacy);
        assert_eq!(result.risk_level, RiskLevel::VeryHigh);
        assert_eq!(result.total_allocation(), 100);
    }

    #[tokio::test]
    async fn test_recommend_rejects_unknown_risk_level() {
        let request = RecommendRequest {
            risk_level: Some("Reckless".into()),
            ..Default::default()
        };
        let (status, Json(body)) = recommend(state(), Json(request)).await.unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.code, "INVALID_RISK_LEVEL");
    }

    #[tokio::test]
    async fn test_recommend_from_json_answers() {
        let request: RecommendRequest = serde_json::from_str(
            r#"{"answers": {"age": 3, "horizon": 4, "income_stability": 3,
                "loss_tolerance": 3, "goal": 3, "experience": 3}}"#,
        )
        .unwrap();
        let Json(result) = recommend(state(), Json(request)).await.unwrap();
        assert_eq!(result.strategy, StrategyKind::Personalized);
        assert_eq!(result.total_allocation(), 100);
    }

    #[tokio::test]
    async fn test_list_funds_filters_and_sorts() {
        let query = FundsQuery {
            category: Some("Debt".into()),
            sort: Some("expense_ratio".into()),
            direction: Some(SortDirection::Asc),
            ..Default::default()
        };
        let Json(body) = list_funds(state(), Query(query)).await.unwrap();
        assert_eq!(body.total, body.funds.len());
        assert!(body.funds.iter().all(|f| f.category == FundCategory::Debt));
        assert!(body.funds.windows(2).all(|w| w[0].expense_ratio <= w[1].expense_ratio));
    }

    #[tokio::test]
    async fn test_list_funds_rejects_bad_params() {
        let query = FundsQuery {
            sort: Some("popularity".into()),
            ..Default::default()
        };
        let (status, Json(body)) = list_funds(state(), Query(query)).await.unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.code, "UNKNOWN_SORT_FIELD");

        let query = FundsQuery {
            category: Some("crypto".into()),
            ..Default::default()
        };
        let (status, _) = list_funds(state(), Query(query)).await.unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_compare_errors() {
        let request = CompareRequest {
            ids: vec!["hdfc-gilt".into(), "missing-fund".into()],
        };
        let (status, Json(body)) = compare_funds(state(), Json(request)).await.unwrap_err();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.code, "FUND_NOT_FOUND");

        let request = CompareRequest {
            ids: ["a", "b", "c", "d", "e"].map(String::from).to_vec(),
        };
        let (status, _) = compare_funds(state(), Json(request)).await.unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_compare_funds() {
        let request = CompareRequest {
            ids: vec!["hdfc-liquid".into(), "hdfc-overnight".into()],
        };
        let Json(cmp) = compare_funds(state(), Json(request)).await.unwrap();
        assert_eq!(cmp.funds.len(), 2);
    }
}
