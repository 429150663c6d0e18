//! 주식 차트 데이터 relay 엔드포인트.
//!
//! Yahoo Finance 차트 API로 요청을 전달하고 응답 본문을 그대로 반환합니다.
//! 캐싱, 페이로드 검증, 심볼 유효성 검사는 수행하지 않습니다.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tracing::{info, warn};

use equity_upstream::UpstreamError;

use crate::error::{ApiResult, ErrorDetail};
use crate::state::AppState;

/// 업스트림 에러 상태에 사용되는 고정 메시지.
///
/// 업스트림의 에러 본문은 버려지고 이 메시지로 대체됩니다.
pub const UPSTREAM_ERROR_DETAIL: &str = "Error fetching stock data";

/// 심볼의 차트 데이터 조회.
///
/// GET /api/stock/{symbol}
///
/// 업스트림이 2xx를 반환하면 본문을 200으로 그대로 전달합니다.
/// 업스트림 에러 상태는 같은 상태 코드와 고정 메시지로 변환되고,
/// 그 외 실패는 500과 실패 설명으로 변환됩니다.
pub async fn get_stock_data(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
) -> ApiResult<Response> {
    match state.chart_client.fetch_chart(&symbol).await {
        Ok(body) => {
            info!(symbol = %symbol, "차트 데이터 조회 성공");
            Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
        }
        Err(UpstreamError::Status { status }) => {
            warn!(symbol = %symbol, status, "업스트림 에러 상태 전달");
            let status_code =
                StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            Err((status_code, Json(ErrorDetail::new(UPSTREAM_ERROR_DETAIL))))
        }
        Err(e) => {
            warn!(symbol = %symbol, error = %e, "업스트림 호출 실패");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorDetail::new(e.to_string())),
            ))
        }
    }
}

/// 주식 차트 라우터 생성.
pub fn stock_router() -> Router<Arc<AppState>> {
    Router::new().route("/{symbol}", get(get_stock_data))
}
