//! API 라우트.
//!
//! 모든 REST API 엔드포인트를 정의하고 라우터를 구성합니다.
//!
//! # 라우트 구조
//!
//! - `/health` - 헬스 체크 (liveness)
//! - `/health/ready` - 상세 헬스 체크 (readiness)
//! - `/api/stock/{symbol}` - 주식 차트 데이터 relay

pub mod health;
pub mod stock;

pub use health::{health_router, HealthResponse};
pub use stock::{stock_router, UPSTREAM_ERROR_DETAIL};

use axum::Router;
use std::sync::Arc;

use crate::state::AppState;

/// 전체 API 라우터 생성.
///
/// 모든 서브 라우터를 조합하여 하나의 라우터로 반환합니다.
pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        // 헬스 체크 엔드포인트
        .nest("/health", health_router())
        // 주식 차트 relay 엔드포인트
        .nest("/api/stock", stock_router())
}
