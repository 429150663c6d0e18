//! Yahoo Finance 차트 API 클라이언트.
//!
//! 심볼 하나에 대한 차트 JSON을 조회합니다. 응답 구조는 해석하지 않고
//! 본문 문자열을 그대로 반환합니다.
//!
//! # 심볼 형식
//!
//! 모든 심볼은 Yahoo Finance 형식으로 전달되어야 합니다:
//! - 미국 주식: "AAPL", "GOOGL"
//! - 한국 주식: "005930.KS" (코스피) 또는 "124560.KQ" (코스닥)
//! - ETF: "SPY", "QQQ"

use reqwest::Client;
use tracing::{debug, error};

use crate::UpstreamError;

/// Yahoo Finance 차트 API 기본 URL.
pub const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";

/// Yahoo Finance 차트 API 클라이언트.
///
/// 호출마다 단일 GET만 수행합니다. 커스텀 헤더, 타임아웃, 재시도는
/// 설정하지 않으며 reqwest 기본 커넥션 풀을 그대로 사용합니다.
#[derive(Clone)]
pub struct ChartClient {
    client: Client,
    base_url: String,
}

impl ChartClient {
    /// 새로운 클라이언트 생성 (기본 URL 사용).
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// 지정한 기본 URL로 클라이언트 생성.
    ///
    /// 테스트에서 mock 서버를 업스트림으로 사용할 때 필요합니다.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// 심볼의 차트 데이터 조회.
    ///
    /// 업스트림이 2xx를 반환하면 본문을 그대로 반환합니다.
    /// 그 외 상태 코드는 `UpstreamError::Status`로 변환되며, 이때
    /// 업스트림 에러 본문은 로그로만 남기고 버립니다.
    ///
    /// # 인자
    /// * `symbol` - 티커 심볼 (예: "AAPL", "005930.KS")
    pub async fn fetch_chart(&self, symbol: &str) -> Result<String, UpstreamError> {
        let url = format!("{}/v8/finance/chart/{}", self.base_url, symbol);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            error!("chart request failed: {} - {}", status, body);
            return Err(UpstreamError::Status {
                status: status.as_u16(),
            });
        }

        debug!(symbol = %symbol, bytes = body.len(), "chart response received");

        Ok(body)
    }
}

impl Default for ChartClient {
    fn default() -> Self {
        Self::new()
    }
}
