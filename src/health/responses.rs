use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, PartialEq, Serialize)]
pub struct HealthCheckResponse {
    pub error: bool,
}
