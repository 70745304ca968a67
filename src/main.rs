use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use lazy_static::lazy_static;
use proclubs_stats_rs::api::{Api, ApiState};
use proclubs_stats_rs::config_handler::{self, Config};
use proclubs_stats_rs::error::LogResult;
use proclubs_stats_rs::rest_client::RestClient;
use tracing::log;

lazy_static! {
    static ref CONFIG: Arc<Config> = Arc::new(config_handler::get_config()
        .unwrap_or_else(|e| panic!("[CONFIG] {e}")));
}

#[tokio::main]
async fn main() {
    if std::env::var_os("RUST_LOG").is_none() {
        // Set the RUST_LOG, if it hasn't been explicitly defined
        std::env::set_var("RUST_LOG", "info,hyper=info")
    }

    // Configure a custom event formatter
    let format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_target(false)
        .with_ansi(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .compact();
    tracing_subscriber::fmt()
        .event_format(format)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = CONFIG.clone();
    let mut handles = vec![];

    let h1 = {
        let state = ApiState::new(config.clone());
        let port = config.port;
        tokio::spawn(async move { Api::serve(port, state).await })
    };
    handles.push(h1);

    if let Some(interval) = config.poll_interval() {
        let client = RestClient::new(config.clone());
        handles.push(tokio::spawn(async move { handle_poll(client, interval).await }));
    }

    join_all(handles).await;
}

async fn handle_poll(client: RestClient, interval: Duration) {
    loop {
        log::info!("[LOOP] Refresh upstream stats");
        client.refresh().await.ok_log("[LOOP] Refresh failed");
        tokio::time::sleep(interval).await;
    }
}
