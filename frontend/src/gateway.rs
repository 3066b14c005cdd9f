//! REST access for the console screens.
//!
//! Every call goes to the same origin; the console host forwards `/api/*`
//! to the training API. A response only counts as success when its status
//! is 2xx. List bodies are decoded leniently (see
//! [`decode_list`](common::model::decode_list)).

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::Serialize;
use thiserror::Error;

use common::model::{decode_list, Entity, Record};
use common::requests::disposition_file_name;
use common::screen::{Method, Submission};

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("request failed: {0}")]
    Transport(#[from] gloo_net::Error),

    #[error("{path} answered {status}: {body}")]
    Status {
        path: String,
        status: u16,
        body: String,
    },

    #[error("unreadable response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not encode request body: {0}")]
    Encode(#[from] serde_json::Error),
}

/// A file returned by the host, ready to be saved.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

async fn checked(path: &str, response: Response) -> Result<Response, GatewayError> {
    if response.ok() {
        return Ok(response);
    }
    Err(GatewayError::Status {
        path: path.to_string(),
        status: response.status(),
        body: response.text().await.unwrap_or_default(),
    })
}

async fn send_json<T: Serialize + ?Sized>(
    builder: RequestBuilder,
    path: &str,
    body: &T,
) -> Result<Response, GatewayError> {
    let payload = serde_json::to_string(body)?;
    let response = builder
        .header("Content-Type", "application/json")
        .body(payload)?
        .send()
        .await?;
    checked(path, response).await
}

/// Fetches `path` and returns the raw body of a 2xx response.
pub async fn fetch_text(path: &str) -> Result<String, GatewayError> {
    let response = Request::get(path).send().await?;
    let response = checked(path, response).await?;
    Ok(response.text().await?)
}

/// Lists every record of `E`, in server order.
pub async fn list<E: Entity>() -> Result<Vec<Record<E>>, GatewayError> {
    let body = fetch_text(E::RESOURCE).await?;
    decode_list::<E>(&body).map_err(|source| GatewayError::Decode {
        path: E::RESOURCE.to_string(),
        source,
    })
}

/// Sends a create or update. The response body is ignored; the caller
/// refetches.
pub async fn submit<E: Entity>(submission: &Submission<E>) -> Result<(), GatewayError> {
    let path = submission.path();
    let builder = match submission.method() {
        Method::Post => Request::post(&path),
        Method::Put => Request::put(&path),
    };
    send_json(builder, &path, submission.body()).await?;
    Ok(())
}

pub async fn delete(path: &str) -> Result<(), GatewayError> {
    let response = Request::delete(path).send().await?;
    checked(path, response).await?;
    Ok(())
}

/// Creates all `records` in one request.
pub async fn bulk_create<E: Entity>(path: &str, records: &[E]) -> Result<(), GatewayError> {
    send_json(Request::post(path), path, records).await?;
    Ok(())
}

/// Posts `record` to a document endpoint and collects the returned file.
pub async fn download<E: Entity>(path: &str, record: &Record<E>) -> Result<Document, GatewayError> {
    let response = send_json(Request::post(path), path, record).await?;
    let file_name = response
        .headers()
        .get("content-disposition")
        .and_then(|value| disposition_file_name(&value))
        .unwrap_or_else(|| "document.pdf".to_string());
    let bytes = response.binary().await?;
    Ok(Document { file_name, bytes })
}
