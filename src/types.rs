use serde::Serialize;

/// Liveness payload returned by the root healthcheck
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

/// Placeholder payload returned by a route group's ping handler
#[derive(Debug, Clone, Serialize)]
pub struct PingResponse {
    pub ok: bool,
    pub module: &'static str,
}
