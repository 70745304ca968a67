#![allow(dead_code)]
pub mod external_server;
pub mod stats_server;
