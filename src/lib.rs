//! Library behind the upwatch status board: the paginated UptimeRobot
//! client, the freshness-bounded cache, the cache-aside service, and the
//! pure projection functions the viewer renders from.

pub mod cache;
pub mod client;
pub mod config;
pub mod service;
pub mod status;
pub mod view;
pub mod viewer;

use serde::{Deserialize, Serialize};

/// One monitored endpoint as reported by the UptimeRobot API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Monitor {
    pub id: u64,
    #[serde(rename = "friendly_name")]
    pub name: String,
    pub url: String,
    pub status: i64,
    #[serde(rename = "all_time_uptime_ratio", default)]
    pub uptime_ratio: String,
}
