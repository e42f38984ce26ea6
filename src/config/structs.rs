use serde::{Deserialize, Serialize};

/// 应用配置结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub storage: StorageConfig,
    pub session: SessionConfig,
}

/// 应用设置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub system_name: String,
    pub environment: String,
    pub log_level: String,
}

/// 存储配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(rename = "type")]
    pub storage_type: String,
}

/// 会话配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    pub seed_on_startup: bool,        // 启动时是否载入示例数据
    pub file_placeholder_url: String, // 文件提交的占位链接
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed_on_startup: true,
            file_placeholder_url: "#".to_string(),
        }
    }
}
