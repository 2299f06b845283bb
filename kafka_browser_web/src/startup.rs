use crate::app_config::AppConfig;
use crate::browse::{fetch_browse_result, render_page};
use crate::query_string::BrowsePageParams;
use anyhow::Context;
use http_body_util::Full;
use hyper::body::{Bytes, Incoming};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Method, Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

pub async fn run_until_stopped(config: AppConfig) -> Result<(), anyhow::Error> {
    let address: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("While parsing socket address")?;

    let listener = TcpListener::bind(address)
        .await
        .context("While binding tcp listener")?;
    info!("Listening {address}");

    let config = Arc::new(config);
    loop {
        let (stream, remote_addr) = listener
            .accept()
            .await
            .context("While accepting connection")?;

        let io = TokioIo::new(stream);
        let config = config.clone();
        tokio::task::spawn(async move {
            let service = service_fn(move |request: Request<Incoming>| {
                let config = config.clone();
                async move { Ok::<_, Infallible>(handle_request(request, &config).await) }
            });

            if let Err(e) = http1::Builder::new().serve_connection(io, service).await {
                warn!("Http connection error from {}: {}", remote_addr, e);
            }
        });
    }
}

async fn handle_request(request: Request<Incoming>, config: &AppConfig) -> Response<Full<Bytes>> {
    match (request.method(), request.uri().path()) {
        (&Method::GET, "/") => {
            let params = BrowsePageParams::parse(request.uri().query().unwrap_or(""));
            let result = fetch_browse_result(&params, config).await;

            match render_page(&result) {
                Ok(page) => html_response(StatusCode::OK, page),
                Err(e) => {
                    error!("Error while rendering browse page: {:?}", e);
                    text_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal error")
                }
            }
        }
        (&Method::GET, "/health") => json_response(StatusCode::OK, "{\"status\":\"ok\"}"),
        _ => text_response(StatusCode::NOT_FOUND, "Not found"),
    }
}

fn html_response(status: StatusCode, body: String) -> Response<Full<Bytes>> {
    response_with_content_type(status, "text/html; charset=utf-8", Bytes::from(body))
}

fn json_response(status: StatusCode, body: &'static str) -> Response<Full<Bytes>> {
    response_with_content_type(status, "application/json", Bytes::from_static(body.as_bytes()))
}

fn text_response(status: StatusCode, body: &'static str) -> Response<Full<Bytes>> {
    response_with_content_type(status, "text/plain", Bytes::from_static(body.as_bytes()))
}

fn response_with_content_type(
    status: StatusCode,
    content_type: &'static str,
    body: Bytes,
) -> Response<Full<Bytes>> {
    Response::builder()
        .status(status)
        .header("Content-Type", content_type)
        .body(Full::new(body))
        .unwrap_or_else(|_| Response::new(Full::new(Bytes::from_static(b"Failed to build response"))))
}
