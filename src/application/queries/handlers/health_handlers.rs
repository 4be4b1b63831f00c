//! Health Query Handlers

use crate::application::queries::GetHealth;

/// 服务版本，固定随 crate 版本发布
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// 健康状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthReport {
    pub status: &'static str,
    pub message: String,
    pub version: &'static str,
}

/// GetHealth Handler
///
/// 没有外部依赖，也没有失败分支。
pub struct GetHealthHandler {
    service_name: String,
}

impl GetHealthHandler {
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
        }
    }

    pub fn handle(&self, _query: GetHealth) -> HealthReport {
        HealthReport {
            status: "healthy",
            message: format!("{} is running", self.service_name),
            version: SERVICE_VERSION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_report() {
        let handler = GetHealthHandler::new("Datatap REST API");
        let report = handler.handle(GetHealth);

        assert_eq!(report.status, "healthy");
        assert_eq!(report.message, "Datatap REST API is running");
        assert_eq!(report.version, "1.0.0");
    }
}
