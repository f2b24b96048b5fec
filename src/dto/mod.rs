//! DTOs exchanged with HTTP clients.

use serde::{Deserialize, Serialize};

/// Paging parameters accepted by every list endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    /// 1-based page index. Defaults to the first page.
    pub page: Option<usize>,
    /// Rows per page. Defaults to the configured page size.
    pub page_size: Option<usize>,
}

/// Body of the health probe.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}
