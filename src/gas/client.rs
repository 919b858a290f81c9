use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use super::model::text_of;
use super::{Action, GasError};

/// Talks to the Apps Script web app that owns the ladder spreadsheet.
#[derive(Clone, Debug)]
pub(crate) struct GasClient {
    client: reqwest::Client,
    url: String,
}

impl GasClient {
    pub(crate) fn new(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    /// POST `action` and return the raw body of a successful response.
    pub(crate) async fn post(&self, action: &Action) -> Result<String, GasError> {
        debug!(?action, "sending GAS request");

        let response = self.client.post(&self.url).json(action).send().await?;
        let status = response.status();
        let body = response.text().await?;

        debug!(%status, %body, "GAS responded");

        if !status.is_success() {
            return Err(GasError::Status(status));
        }
        Ok(body)
    }

    /// POST `action` for a write. The body may be plain text; a JSON body with
    /// an `error` field still counts as a failure.
    pub(crate) async fn submit(&self, action: &Action) -> Result<String, GasError> {
        let body = self.post(action).await?;
        accept_submit(body)
    }

    /// POST `action` for a read and decode the JSON answer.
    pub(crate) async fn query<T: DeserializeOwned>(&self, action: &Action) -> Result<T, GasError> {
        let body = self.post(action).await?;
        decode(&body)
    }
}

fn remote_error(value: &Value) -> Result<(), GasError> {
    match value.get("error") {
        Some(err) => Err(GasError::Remote(text_of(err))),
        None => Ok(()),
    }
}

pub(crate) fn accept_submit(body: String) -> Result<String, GasError> {
    if let Ok(value) = serde_json::from_str::<Value>(body.trim()) {
        remote_error(&value)?;
    }
    Ok(body)
}

pub(crate) fn decode<T: DeserializeOwned>(body: &str) -> Result<T, GasError> {
    let value: Value = serde_json::from_str(body.trim()).map_err(|_| GasError::NotJson {
        body: body.to_owned(),
    })?;
    remote_error(&value)?;
    serde_json::from_value(value).map_err(GasError::Shape)
}
