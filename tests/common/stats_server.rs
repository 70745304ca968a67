use std::{net::SocketAddr, process::{Child, Command}, sync::Arc};

use assert_cmd::prelude::CommandCargoExt;
use predicates::Predicate;
use proclubs_stats_rs::{api::{Api, ApiState}, config_handler::Config};
use reqwest::Response;
use tokio::task::JoinHandle;

pub fn get_config(external_url: &str, db_path: &str) -> Config {
    Config {
        api_url: external_url.to_string(),
        db_path: db_path.to_string(),
        ..Default::default()
    }
}

/// The api served in-process on a free port.
pub struct StatsServer {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl Drop for StatsServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

impl StatsServer {
    pub fn start(config: Config) -> StatsServer {
        let app = Api::router(ApiState::new(Arc::new(config)));
        let server = axum::Server::bind(&SocketAddr::from(([127, 0, 0, 1], 0)))
            .serve(app.into_make_service());
        let addr = server.local_addr();
        let handle = tokio::spawn(async move {
            server.await.expect("api to run");
        });
        StatsServer { addr, handle }
    }

    pub async fn get(&self, path: &str) -> Result<Response, Box<dyn std::error::Error>> {
        Ok(reqwest::get(format!("http://{}{}", self.addr, path)).await?)
    }
}

/// The real binary, configured through CONFIG_PATH.
pub struct StatsBinary {
    port: u16,
    child_process: Option<Child>,
}

impl Drop for StatsBinary {
    fn drop(&mut self) {
        if let Some(child) = self.child_process.as_mut() {
            child.kill().expect("Should kill");
        }
    }
}

impl StatsBinary {
    pub fn new(port: u16) -> StatsBinary {
        StatsBinary { port, child_process: None }
    }

    pub fn start(&mut self, path: &str, config: Config) {
        let config = Config { port: self.port, ..config };
        let config_str = serde_json::to_string(&config).unwrap();
        let config_path = format!("{path}/config.json");
        std::fs::write(config_path.clone(), config_str).unwrap();
        let child_process = Command::cargo_bin("proclubs-stats-rs")
            .unwrap()
            .env("CONFIG_PATH", config_path)
            .spawn()
            .expect("should start");

        self.child_process = Some(child_process);
    }

    pub async fn retry_until<P>(&self, path: &str, predicate: P, retry_ms: u64) -> String
    where
        P: Predicate<str>,
    {
        let mut nr_loops = 0;
        loop {
            if let Ok(rsp) = reqwest::get(format!("http://localhost:{}{}", self.port, path)).await {
                if let Ok(body) = rsp.text().await {
                    if predicate.eval(body.as_str()) {
                        return body;
                    }
                }
            }
            tokio::time::sleep(std::time::Duration::from_millis(retry_ms)).await;
            nr_loops += 1;
            if nr_loops > 100 {
                panic!("retry failed");
            }
        }
    }
}
