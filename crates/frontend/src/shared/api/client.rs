use super::error::ApiError;
use contracts::domain::common::{MasterRecord, RecordId};
use contracts::shared::envelope::extract_collection;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde_json::Value;
use std::marker::PhantomData;

/// HTTP client for one master collection (`{api_base}/api/{collection}`)
#[derive(Debug)]
pub struct RecordClient<T> {
    base: String,
    _record: PhantomData<fn() -> T>,
}

impl<T> Clone for RecordClient<T> {
    fn clone(&self) -> Self {
        Self {
            base: self.base.clone(),
            _record: PhantomData,
        }
    }
}

impl<T: MasterRecord> RecordClient<T> {
    pub fn new(api_base: &str) -> Self {
        Self {
            base: format!("{}{}", api_base.trim_end_matches('/'), T::api_path()),
            _record: PhantomData,
        }
    }

    pub fn collection_url(&self) -> &str {
        &self.base
    }

    pub fn record_url(&self, id: RecordId) -> String {
        format!("{}/{}", self.base, id)
    }

    /// `GET {base}`: bare array or enveloped array
    pub async fn fetch_all(&self) -> Result<Vec<T>, ApiError> {
        let text = send(Request::get(&self.base)).await?;
        let value = parse_json(&text)?;
        extract_collection(value, T::envelope_field()).map_err(ApiError::Decode)
    }

    /// `GET {base}/{id}`
    pub async fn fetch_one(&self, id: RecordId) -> Result<T, ApiError> {
        let text = send(Request::get(&self.record_url(id))).await?;
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// `POST {base}` with the full record; the response body is not needed
    pub async fn create(&self, record: &T) -> Result<(), ApiError> {
        send_json(Request::post(&self.base), record).await.map(|_| ())
    }

    /// `PUT {base}/{id}` with the full record
    pub async fn update(&self, id: RecordId, record: &T) -> Result<(), ApiError> {
        send_json(Request::put(&self.record_url(id)), record)
            .await
            .map(|_| ())
    }

    /// `DELETE {base}/{id}`
    pub async fn delete(&self, id: RecordId) -> Result<(), ApiError> {
        send(Request::delete(&self.record_url(id))).await.map(|_| ())
    }
}

async fn send(builder: RequestBuilder) -> Result<String, ApiError> {
    let response = builder
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    read_body(response).await
}

async fn send_json<B: serde::Serialize>(
    builder: RequestBuilder,
    body: &B,
) -> Result<String, ApiError> {
    let request = builder
        .header("Accept", "application/json")
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    read_body(response).await
}

/// Body text of a 2xx response; any other status becomes an [`ApiError`]
async fn read_body(response: Response) -> Result<String, ApiError> {
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    if !(200..300).contains(&status) {
        return Err(ApiError::from_status(status, &text));
    }
    Ok(text)
}

/// Empty bodies read as `null`
fn parse_json(text: &str) -> Result<Value, ApiError> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_role::aggregate::Role;

    #[test]
    fn test_empty_body_is_null() {
        assert_eq!(parse_json("  ").unwrap(), Value::Null);
        assert!(matches!(parse_json("<html>"), Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_urls() {
        let client = RecordClient::<Role>::new("http://localhost:3000/");
        assert_eq!(client.collection_url(), "http://localhost:3000/api/roles");
        assert_eq!(client.record_url(42), "http://localhost:3000/api/roles/42");
    }
}
