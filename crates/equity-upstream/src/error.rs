//! 업스트림 에러 타입.

use thiserror::Error;

/// 업스트림 호출 관련 에러.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// 업스트림이 비정상 HTTP 상태를 반환함
    #[error("Upstream returned status {status}")]
    Status { status: u16 },

    /// 네트워크/연결 에러
    #[error("Network error: {0}")]
    Network(String),

    /// 타임아웃
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// 알 수 없는 에러
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl UpstreamError {
    /// 업스트림 HTTP 상태 코드 반환 (상태 에러인 경우).
    pub fn status(&self) -> Option<u16> {
        match self {
            UpstreamError::Status { status } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            UpstreamError::Timeout(err.to_string())
        } else if err.is_connect() {
            UpstreamError::Network(err.to_string())
        } else {
            UpstreamError::Unknown(err.to_string())
        }
    }
}
