//! CORS 미들웨어 구성.
//!
//! 브라우저 기반 프론트엔드에서의 요청을 허용하기 위한 CORS 설정을
//! 제공합니다. 허용 origin 목록에 포함된 origin만 자격 증명을 포함한
//! 요청을 보낼 수 있습니다.

use std::time::Duration;

use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tracing::{info, warn};

/// 기본 허용 origin 목록.
///
/// 로컬 개발 origin과 프론트엔드 배포 origin을 허용합니다.
pub const DEFAULT_CORS_ORIGINS: &[&str] = &[
    "http://localhost:3000",
    "http://equitycats.netlify.app",
    "https://equitycats.netlify.app",
];

/// CORS 미들웨어 구성.
///
/// CORS_ORIGINS 환경변수가 설정되어 있으면 해당 origin만 허용합니다.
/// 설정되지 않으면 기본 origin 목록을 사용합니다.
///
/// 자격 증명을 허용하는 경우 와일드카드 메서드/헤더는 사용할 수 없으므로
/// preflight 요청이 보낸 값을 미러링합니다.
///
/// # 환경변수
///
/// - `CORS_ORIGINS`: 쉼표로 구분된 허용 origin 목록
///   예: `https://dashboard.example.com,https://admin.example.com`
pub fn cors_layer() -> CorsLayer {
    let origins: Vec<HeaderValue> = match std::env::var("CORS_ORIGINS") {
        Ok(configured) if !configured.is_empty() => {
            let parsed: Vec<HeaderValue> = configured
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();

            if parsed.is_empty() {
                warn!("CORS_ORIGINS is set but contains no valid origins, using defaults");
                default_origins()
            } else {
                parsed
            }
        }
        _ => default_origins(),
    };

    info!("CORS configured with {} allowed origins", origins.len());

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        // 허용 origin에 대해 모든 메서드/헤더 허용 (요청 값 미러링)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        // 자격 증명 포함 허용
        .allow_credentials(true)
        // preflight 요청 캐시 시간
        .max_age(Duration::from_secs(3600))
}

/// 기본 origin 목록 파싱.
fn default_origins() -> Vec<HeaderValue> {
    DEFAULT_CORS_ORIGINS
        .iter()
        .filter_map(|s| s.parse().ok())
        .collect()
}
