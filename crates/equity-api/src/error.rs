//! 통합 API 에러 응답 타입.
//!
//! 모든 API 엔드포인트에서 일관된 에러 형식을 제공합니다.

use serde::{Deserialize, Serialize};

/// 통합 API 에러 응답.
///
/// 모든 에러는 단일 `detail` 필드로 직렬화됩니다.
///
/// # 예시
///
/// ```json
/// {"detail": "Error fetching stock data"}
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// 사람이 읽을 수 있는 에러 메시지
    pub detail: String,
}

impl ErrorDetail {
    /// 에러 생성.
    ///
    /// # Example
    ///
    /// ```
    /// use equity_api::error::ErrorDetail;
    ///
    /// let error = ErrorDetail::new("Error fetching stock data");
    /// ```
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

impl std::fmt::Display for ErrorDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.detail)
    }
}

impl std::error::Error for ErrorDetail {}

/// API 핸들러 Result 타입 별칭.
///
/// # Example
///
/// ```ignore
/// async fn get_stock_data(
///     State(state): State<Arc<AppState>>,
///     Path(symbol): Path<String>,
/// ) -> ApiResult<Response> {
///     let body = state
///         .chart_client
///         .fetch_chart(&symbol)
///         .await
///         .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorDetail::new(e.to_string()))))?;
///
///     Ok(body.into_response())
/// }
/// ```
pub type ApiResult<T> = Result<T, (axum::http::StatusCode, axum::Json<ErrorDetail>)>;
