use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum GasError {
    #[error("GAS request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("응답 코드 {0}")]
    Status(StatusCode),

    #[error("GAS response was not JSON: {body}")]
    NotJson { body: String },

    /// The web app answered with an `error` field.
    #[error("{0}")]
    Remote(String),

    #[error("unexpected GAS response shape: {0}")]
    Shape(serde_json::Error),
}

impl GasError {
    /// Text shown in the channel when a read request fails.
    pub(crate) fn user_message(&self) -> String {
        match self {
            GasError::Request(err) => format!("🚨 서버에 연결하지 못했습니다.\n오류: {err}"),
            GasError::Status(status) => {
                format!("🚨 서버 응답 오류로 요청을 처리할 수 없습니다. (응답 코드 {status})")
            }
            GasError::NotJson { body } => {
                format!("🚨 오류: GAS 응답이 JSON 형식이 아닙니다.\n🔍 응답 내용: `{body}`")
            }
            GasError::Remote(message) => format!("🚨 {message}"),
            GasError::Shape(err) => format!("🚨 오류: 예상하지 못한 GAS 응답입니다.\n🔍 {err}"),
        }
    }
}
