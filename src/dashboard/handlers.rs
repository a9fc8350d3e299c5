use super::{page, SharedState, SERVICE_NAME};
use crate::catalog::{self, certifications_policy, core_pm_policy};
use crate::charts::{build_chart, ChartKind};
use crate::dataset::TabularDataset;
use crate::error::RenderError;
use crate::provision::{Origin, Resolution};
use crate::report::{DocumentKind, PortfolioInputs};
use serde::Serialize;
use std::time::Instant;
use tracing::{info, warn};
use warp::{
    http::{header, StatusCode},
    reject::Rejection,
    reply::{Reply, Response},
};

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    details: Option<String>,
}

#[derive(Serialize)]
struct DatasetResponse<'a> {
    name: &'a str,
    source: &'a str,
    origin: &'a Origin,
    #[serde(flatten)]
    dataset: &'a TabularDataset,
}

pub async fn health_check() -> Result<impl Reply, Rejection> {
    Ok(warp::reply::json(&serde_json::json!({
        "status": "healthy",
        "service": SERVICE_NAME
    })))
}

async fn resolve_core_pm(state: &SharedState) -> Resolution {
    state
        .provisioner
        .resolve_policy(&core_pm_policy(&state.settings))
        .await
}

async fn resolve_certifications(state: &SharedState) -> Resolution {
    state
        .provisioner
        .resolve_policy(&certifications_policy(&state.settings))
        .await
}

pub async fn index(state: SharedState) -> Result<impl Reply, Rejection> {
    let core_pm = resolve_core_pm(&state).await;
    let certifications = resolve_certifications(&state).await;

    let charts = ChartKind::ALL
        .into_iter()
        .map(|kind| {
            let json = build_chart(kind)
                .and_then(|spec| spec.to_json())
                .map_err(|e| {
                    warn!(chart = %kind, error = %e, "chart unavailable");
                    e.to_string()
                });
            (kind, json)
        })
        .collect();

    let view = page::PageView {
        profile: &state.profile,
        core_pm: &core_pm,
        certifications: &certifications,
        pathway: catalog::career_pathway(),
        charts,
    };
    Ok(warp::reply::html(page::render(&view).into_string()))
}

/// Inline, user-visible failure for a document that could not be assembled.
pub fn artifact_failure(kind: DocumentKind, err: &RenderError) -> Response {
    warn!(document = %kind, error = %err, "document generation failed");
    let body = page::render_error(kind, &err.to_string()).into_string();
    warp::reply::with_status(warp::reply::html(body), StatusCode::INTERNAL_SERVER_ERROR)
        .into_response()
}

pub async fn download(slug: String, state: SharedState) -> Result<Response, Rejection> {
    let kind: DocumentKind = slug.parse().map_err(|_| warp::reject::not_found())?;
    let start = Instant::now();

    let certifications = resolve_certifications(&state).await;
    let inputs = PortfolioInputs::with_certifications(certifications.dataset);

    match kind.render(&inputs, &state.profile) {
        Ok(bytes) => {
            let filename = kind.filename(&state.profile);
            info!(
                document = %kind,
                %filename,
                bytes = bytes.len(),
                elapsed_ms = start.elapsed().as_millis() as u64,
                "serving document"
            );
            let reply = warp::reply::with_header(bytes, header::CONTENT_TYPE, kind.mime());
            let reply = warp::reply::with_header(
                reply,
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            );
            Ok(reply.into_response())
        }
        Err(e) => Ok(artifact_failure(kind, &e)),
    }
}

pub async fn chart(slug: String) -> Result<Response, Rejection> {
    let kind: ChartKind = slug.parse().map_err(|_| warp::reject::not_found())?;
    match build_chart(kind).and_then(|spec| spec.to_value()) {
        Ok(figure) => Ok(warp::reply::json(&figure).into_response()),
        Err(e) => {
            warn!(chart = %kind, error = %e, "chart build failed");
            Ok(warp::reply::with_status(
                warp::reply::json(&ErrorResponse {
                    error: "Chart unavailable".to_string(),
                    details: Some(e.to_string()),
                }),
                StatusCode::INTERNAL_SERVER_ERROR,
            )
            .into_response())
        }
    }
}

pub async fn dataset(slug: String, state: SharedState) -> Result<Response, Rejection> {
    let policy = match slug.as_str() {
        "core-pm" => core_pm_policy(&state.settings),
        "certifications" => certifications_policy(&state.settings),
        _ => return Err(warp::reject::not_found()),
    };
    let resolution = state.provisioner.resolve_policy(&policy).await;
    Ok(warp::reply::json(&DatasetResponse {
        name: policy.name,
        source: &policy.source,
        origin: &resolution.origin,
        dataset: &resolution.dataset,
    })
    .into_response())
}
