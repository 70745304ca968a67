use std::{net::SocketAddr, sync::Arc};

use axum::{Router, extract::{Query, State}, http::StatusCode, response::{IntoResponse, Response}, Json};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};
use tracing::log;

use crate::{
    chart::{parse_metric, ChartSeries},
    config_handler::Config,
    formatting::PlayerTable,
    models_api::{player::{PlayerField, PlayerRecord}, team::TeamSummary},
    player_stats_service::PlayerStatsService,
    rest_client::RestClient,
    sort::{SortDirection, SortState},
    team_stats_service::TeamStatsService,
    view_state::{PlayersView, TeamView},
};

#[derive(Clone)]
pub struct ApiState {
    pub player_service: PlayerStatsService,
    pub team_service: TeamStatsService,
}

impl ApiState {
    pub fn new(config: Arc<Config>) -> ApiState {
        let client = RestClient::new(config);
        ApiState {
            player_service: PlayerStatsService::new(client.clone()),
            team_service: TeamStatsService::new(client),
        }
    }
}

pub struct Api;
impl Api {
    pub async fn serve(port: u16, state: ApiState) {
        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        log::info!("[API] Listening on {}", addr);
        if let Err(e) = axum::Server::bind(&addr)
            .serve(Api::router(state).into_make_service())
            .await {
            log::error!("[API] Server stopped: {e}");
        }
    }

    pub fn router(state: ApiState) -> Router {
        Router::new()
            .route("/api/stats", axum::routing::get(Api::get_raw_players))
            .route("/api/player-stats", axum::routing::get(Api::get_raw_players))
            .route("/api/team-stats", axum::routing::get(Api::get_raw_team))

            .route("/players", axum::routing::get(Api::get_players))
            .route("/players/table", axum::routing::get(Api::get_player_table))
            .route("/players/chart", axum::routing::get(Api::get_player_chart))
            .route("/team", axum::routing::get(Api::get_team))

            .route("/", axum::routing::get(Api::root))
            .with_state(state)
            .layer(ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
            )
    }

    async fn root() -> &'static str {
        "Puck puck puck"
    }

    async fn get_raw_players(State(state): State<ApiState>) -> Response {
        match state.player_service.read_raw().await {
            Ok(rsp) => Json(rsp).into_response(),
            Err(e) => {
                log::error!("[API] Error fetching Pro Clubs data: {e}");
                error_rsp(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch Pro Clubs data")
            }
        }
    }

    async fn get_raw_team(State(state): State<ApiState>) -> Response {
        match state.team_service.read_raw().await {
            Ok(rsp) => Json(rsp).into_response(),
            Err(e) => {
                log::error!("[API] Error fetching Team stats: {e}");
                error_rsp(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch team stats")
            }
        }
    }

    async fn load_players(state: &ApiState, sort: SortState) -> PlayersView {
        let mut view = PlayersView::new(sort);
        let ticket = view.view.begin_fetch();
        let result = state.player_service.read().await;
        view.view.complete(ticket, result);
        view
    }

    async fn get_players(State(state): State<ApiState>, Query(query): Query<SortQuery>) -> Response {
        let sort = match query.to_sort_state() {
            Ok(sort) => sort,
            Err(msg) => return error_rsp(StatusCode::BAD_REQUEST, &msg),
        };
        let view = Api::load_players(&state, sort).await;
        match (view.sorted(), view.view.error()) {
            (Some(players), _) => Json(PlayersRsp { sort, empty: view.empty_message(), players }).into_response(),
            (None, error) => error_rsp(StatusCode::INTERNAL_SERVER_ERROR, error.unwrap_or("Failed to load data")),
        }
    }

    async fn get_player_table(State(state): State<ApiState>, Query(query): Query<SortQuery>) -> Response {
        let sort = match query.to_sort_state() {
            Ok(sort) => sort,
            Err(msg) => return error_rsp(StatusCode::BAD_REQUEST, &msg),
        };
        let view = Api::load_players(&state, sort).await;
        match (view.table(), view.view.error()) {
            (Some(table), _) => Json(TableRsp { empty: view.empty_message(), table }).into_response(),
            (None, error) => error_rsp(StatusCode::INTERNAL_SERVER_ERROR, error.unwrap_or("Failed to load data")),
        }
    }

    async fn get_player_chart(State(state): State<ApiState>, Query(query): Query<ChartQuery>) -> Response {
        let metric = match query.metric.as_deref().map(parse_metric).unwrap_or(Ok(PlayerField::Points)) {
            Ok(metric) => metric,
            Err(msg) => return error_rsp(StatusCode::BAD_REQUEST, &msg),
        };
        let view = Api::load_players(&state, SortState::default()).await;
        match (view.view.data(), view.view.error()) {
            (Some(players), _) => Json(ChartRsp { empty: view.empty_message(), chart: ChartSeries::new(players, metric) }).into_response(),
            (None, error) => error_rsp(StatusCode::INTERNAL_SERVER_ERROR, error.unwrap_or("Failed to load data")),
        }
    }

    async fn get_team(State(state): State<ApiState>) -> Response {
        let mut view = TeamView::default();
        let ticket = view.view.begin_fetch();
        let result = state.team_service.read().await;
        view.complete(ticket, result);
        match (view.view.data(), view.view.error()) {
            (Some(team), _) => Json(TeamRsp { empty: view.empty_message(), team: team.clone().map(TeamSummary::from) }).into_response(),
            (None, error) => error_rsp(StatusCode::INTERNAL_SERVER_ERROR, error.unwrap_or("Failed to load data")),
        }
    }
}

fn error_rsp(status: StatusCode, msg: &str) -> Response {
    (status, Json(json!({ "error": msg }))).into_response()
}

#[derive(Deserialize, Default)]
pub struct SortQuery {
    pub sort: Option<String>,
    pub dir: Option<String>,
}

impl SortQuery {
    fn to_sort_state(&self) -> Result<SortState, String> {
        let mut state = SortState::default();
        if let Some(sort) = &self.sort {
            state.field = sort.parse::<PlayerField>().map_err(|e| e.to_string())?;
        }
        if let Some(dir) = &self.dir {
            state.direction = dir.parse::<SortDirection>()?;
        }
        Ok(state)
    }
}

#[derive(Deserialize)]
pub struct ChartQuery {
    pub metric: Option<String>,
}

#[derive(Serialize, Debug)]
pub struct PlayersRsp {
    pub sort: SortState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty: Option<&'static str>,
    pub players: Vec<PlayerRecord>,
}

#[derive(Serialize)]
struct TableRsp {
    #[serde(skip_serializing_if = "Option::is_none")]
    empty: Option<&'static str>,
    #[serde(flatten)]
    table: PlayerTable,
}

#[derive(Serialize)]
struct ChartRsp {
    #[serde(skip_serializing_if = "Option::is_none")]
    empty: Option<&'static str>,
    #[serde(flatten)]
    chart: ChartSeries,
}

#[derive(Serialize)]
struct TeamRsp {
    #[serde(skip_serializing_if = "Option::is_none")]
    empty: Option<&'static str>,
    team: Option<TeamSummary>,
}
