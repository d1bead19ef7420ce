use std::net::SocketAddr;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::Router;
use axum::routing::get;
use spendlens_client::contracts::envelope::{ApiResponse, api_failure};
use spendlens_client::query::params::ParamIssue;
use spendlens_client::{ClientError, RawQueryParams, TransactionQueryService};
use tracing::{debug, error, info};

#[derive(Clone)]
pub struct ServerState {
    pub service: TransactionQueryService,
}

pub fn router(service: TransactionQueryService) -> Router {
    Router::new()
        .route("/api", get(query_transactions))
        .with_state(ServerState { service })
}

pub async fn query_transactions(
    State(state): State<ServerState>,
    query: Result<Query<RawQueryParams>, QueryRejection>,
) -> Response {
    // Undecodable query strings still get the JSON 400 body.
    let params = match query {
        Ok(Query(params)) => params,
        Err(rejection) => {
            let detail = rejection.body_text();
            debug!(%detail, "rejected query string");
            let issue = ParamIssue::new("query", &detail);
            return into_http(api_failure(&ClientError::invalid_parameters(&[issue])));
        }
    };

    let service = state.service.clone();
    let outcome = tokio::task::spawn_blocking(move || service.respond(&params)).await;

    let response = match outcome {
        Ok(response) => response,
        Err(join_error) => {
            error!("query task did not complete: {join_error}");
            api_failure(&ClientError::new(
                "internal_task_failed",
                "query task did not complete",
                Vec::new(),
            ))
        }
    };

    into_http(response)
}

pub async fn serve(addr: SocketAddr, service: TransactionQueryService) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let bound = listener.local_addr()?;
    info!(
        addr = %bound,
        data = %service.source_description(),
        "serving GET /api"
    );

    axum::serve(listener, router(service))
        .with_graceful_shutdown(wait_for_shutdown(tokio::signal::ctrl_c()))
        .await
}

/// Resolves once `signal` fires. If the handler could not be installed the
/// server keeps running until it is stopped from outside.
async fn wait_for_shutdown<F>(signal: F)
where
    F: Future<Output = std::io::Result<()>>,
{
    if let Err(signal_error) = signal.await {
        error!("could not listen for ctrl-c: {signal_error}");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}

fn into_http(response: ApiResponse) -> Response {
    let status = StatusCode::from_u16(response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(response.body)).into_response()
}
