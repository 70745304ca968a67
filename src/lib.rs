pub mod config_handler;
pub mod error;
pub mod db;
pub mod rest_client;
pub mod models;
pub mod models_external;
pub mod models_api;
pub mod player_stats_service;
pub mod team_stats_service;
pub mod sort;
pub mod formatting;
pub mod chart;
pub mod view_state;
pub mod api;
