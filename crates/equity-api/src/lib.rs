//! 주식 차트 relay REST API.
//!
//! 이 크레이트는 다음을 제공합니다:
//! - Axum 기반 REST API
//! - Yahoo Finance 차트 데이터 relay 엔드포인트
//! - 헬스 체크 엔드포인트
//! - CORS 미들웨어
//!
//! # 모듈 구성
//!
//! - [`state`]: 애플리케이션 공유 상태 (AppState)
//! - [`routes`]: REST API 엔드포인트
//! - [`error`]: 통합 에러 응답 타입
//! - [`middleware`]: HTTP 미들웨어 (CORS)

pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

pub use error::{ApiResult, ErrorDetail};
pub use middleware::cors_layer;
pub use routes::*;
pub use state::AppState;

#[cfg(any(test, feature = "test-utils"))]
pub use state::create_test_state;
