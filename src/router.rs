use crate::assets;
use crate::catalog::{Catalog, ContinentCounts};
use crate::domain::{City, CityStats, FilterCategory, FilterState};
use crate::errors::ServerError;
use crate::responses::{html_response, json_response, ResultResp};
use crate::templates::pages::{home_page, HomeVm};
use astra::Request;
use serde::Serialize;
use std::path::PathBuf;

/// Shared, read-only state handed to every request.
pub struct AppState {
    pub catalog: Catalog,
    pub counts: ContinentCounts,
    pub public_dir: PathBuf,
}

impl AppState {
    pub fn new(catalog: Catalog, public_dir: impl Into<PathBuf>) -> Self {
        Self {
            counts: catalog.continent_counts(),
            catalog,
            public_dir: public_dir.into(),
        }
    }
}

#[derive(Serialize)]
struct CitiesResponse<'a> {
    continent: &'static str,
    filters: &'a [FilterCategory],
    count: usize,
    cities: &'a [City],
    stats: Option<CityStats>,
}

pub fn handle(req: Request, app: &AppState) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    let query = req.uri().query().unwrap_or("");

    match (method, path) {
        ("GET", "/") => home(app, query),
        ("GET", "/api/cities") => api_cities(app, query),
        ("GET", "/api/continents") => json_response(&app.counts),
        ("GET", _) => assets::serve(&app.public_dir, path),
        _ => Err(ServerError::NotFound),
    }
}

fn home(app: &AppState, query: &str) -> ResultResp {
    let state = FilterState::from_query(query)?;
    let cities = state.apply(app.catalog.all());
    let stats = CityStats::from_cities(&cities);

    html_response(home_page(&HomeVm {
        state: &state,
        cities: &cities,
        counts: &app.counts,
        stats,
    }))
}

fn api_cities(app: &AppState, query: &str) -> ResultResp {
    let state = FilterState::from_query(query)?;
    let cities = state.apply(app.catalog.all());

    json_response(&CitiesResponse {
        continent: state.continent().name(),
        filters: state.active(),
        count: cities.len(),
        stats: CityStats::from_cities(&cities),
        cities: &cities,
    })
}
