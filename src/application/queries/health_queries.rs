//! Health Queries

/// 查询服务健康状态
#[derive(Debug, Clone, Copy, Default)]
pub struct GetHealth;
