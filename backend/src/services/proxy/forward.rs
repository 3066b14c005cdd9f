use actix_web::http::{header, StatusCode};
use actix_web::{web, HttpRequest, HttpResponse};
use log::{debug, warn};

use common::requests::ErrorBody;

use super::Upstream;

/// Replays the incoming request against the upstream API.
pub async fn process(
    req: HttpRequest,
    body: web::Bytes,
    upstream: web::Data<Upstream>,
) -> HttpResponse {
    let url = upstream.url_for(req.path(), req.query_string());
    let method = match reqwest::Method::from_bytes(req.method().as_str().as_bytes()) {
        Ok(method) => method,
        Err(_) => return HttpResponse::MethodNotAllowed().finish(),
    };

    let mut request = upstream.client.request(method.clone(), &url);
    if let Some(content_type) = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    {
        request = request.header(reqwest::header::CONTENT_TYPE, content_type);
    }
    if !body.is_empty() {
        request = request.body(body.to_vec());
    }

    let response = match request.send().await {
        Ok(response) => response,
        Err(err) => {
            warn!("{} {} failed: {}", method, url, err);
            return HttpResponse::BadGateway().json(ErrorBody {
                message: "The training API is unreachable.".to_string(),
            });
        }
    };

    let status = StatusCode::from_u16(response.status().as_u16())
        .unwrap_or(StatusCode::BAD_GATEWAY);
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let bytes = match response.bytes().await {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!("{} {}: unreadable response body: {}", method, url, err);
            return HttpResponse::BadGateway().json(ErrorBody {
                message: "The training API sent an unreadable response.".to_string(),
            });
        }
    };
    debug!("{} {} -> {}", method, url, status);

    let mut reply = HttpResponse::build(status);
    if let Some(content_type) = content_type {
        reply.content_type(content_type);
    }
    reply.body(bytes.to_vec())
}
