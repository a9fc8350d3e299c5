//! HTTP surface: the dashboard page, document downloads and JSON endpoints.

pub mod handlers;
pub mod page;

use crate::config::{PortfolioProfile, Settings};
use crate::provision::{DatasetCache, Provisioner};
use reqwest::Client;
use std::{convert::Infallible, sync::Arc};
use warp::{reject::Rejection, reply::Reply, Filter};

pub const SERVICE_NAME: &str = "careerboard";

/// Everything a request needs. Only the dataset cache inside the provisioner
/// is shared mutable state.
pub struct AppState {
    pub settings: Settings,
    pub profile: PortfolioProfile,
    pub provisioner: Provisioner,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(settings: Settings, profile: PortfolioProfile, client: Client) -> Self {
        let cache = Arc::new(DatasetCache::new(settings.cache_ttl));
        Self {
            settings,
            profile,
            provisioner: Provisioner::new(client, cache),
        }
    }
}

fn with_state(state: SharedState) -> impl Filter<Extract = (SharedState,), Error = Infallible> + Clone {
    warp::any().map(move || Arc::clone(&state))
}

/// All routes, ready for `warp::serve`.
pub fn routes(state: SharedState) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let index = warp::path::end()
        .and(warp::get())
        .and(with_state(state.clone()))
        .and_then(handlers::index);

    let health = warp::path("health")
        .and(warp::path::end())
        .and(warp::get())
        .and_then(handlers::health_check);

    let download = warp::path!("download" / String)
        .and(warp::get())
        .and(with_state(state.clone()))
        .and_then(handlers::download);

    let chart = warp::path!("api" / "charts" / String)
        .and(warp::get())
        .and_then(handlers::chart);

    let dataset = warp::path!("api" / "datasets" / String)
        .and(warp::get())
        .and(with_state(state))
        .and_then(handlers::dataset);

    index
        .or(health)
        .or(download)
        .or(chart)
        .or(dataset)
        .with(warp::trace::request())
}
