//! Wire types for the UptimeRobot `getMonitors` endpoint

use serde::Deserialize;

use crate::Monitor;

/// One page of the `getMonitors` response envelope
///
/// `monitors` defaults to empty because rejection envelopes
/// (`stat: "fail"`) carry no monitor array at all.
#[derive(Debug, Clone, Deserialize)]
pub struct MonitorsPage {
    /// `"ok"` on success, `"fail"` when the API rejects the request
    pub stat: String,

    /// Present when the account has more monitors than one page holds
    pub pagination: Option<Pagination>,

    #[serde(default)]
    pub monitors: Vec<Monitor>,
}

/// Pagination metadata reported alongside each page
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
    pub total: usize,
}
