//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_homework_hub_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone, PartialEq)]
        pub enum HomeworkHubError {
            $($variant(String),)*
        }

        impl HomeworkHubError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(HomeworkHubError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(HomeworkHubError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(HomeworkHubError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl HomeworkHubError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        HomeworkHubError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_homework_hub_errors! {
    NotFound("E001", "Resource Not Found"),
    InvalidState("E002", "Invalid State"),
    Validation("E003", "Validation Error"),
    PermissionDenied("E004", "Permission Denied"),
    Configuration("E005", "Configuration Error"),
    StoragePluginNotFound("E006", "Storage Plugin Not Found"),
    Serialization("E007", "Serialization Error"),
}

impl HomeworkHubError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for HomeworkHubError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for HomeworkHubError {}

// 日期格式错误属于输入校验失败
impl From<chrono::ParseError> for HomeworkHubError {
    fn from(err: chrono::ParseError) -> Self {
        HomeworkHubError::Validation(format!("日期格式无效: {err}"))
    }
}

impl From<serde_json::Error> for HomeworkHubError {
    fn from(err: serde_json::Error) -> Self {
        HomeworkHubError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for HomeworkHubError {
    fn from(err: config::ConfigError) -> Self {
        HomeworkHubError::Configuration(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, HomeworkHubError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(HomeworkHubError::not_found("test").code(), "E001");
        assert_eq!(HomeworkHubError::invalid_state("test").code(), "E002");
        assert_eq!(HomeworkHubError::validation("test").code(), "E003");
        assert_eq!(HomeworkHubError::permission_denied("test").code(), "E004");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            HomeworkHubError::invalid_state("test").error_type(),
            "Invalid State"
        );
        assert_eq!(
            HomeworkHubError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = HomeworkHubError::not_found("作业不存在");
        assert_eq!(err.message(), "作业不存在");
    }

    #[test]
    fn test_format_simple() {
        let err = HomeworkHubError::validation("Invalid URL");
        let formatted = err.format_simple();
        assert!(formatted.contains("Validation Error"));
        assert!(formatted.contains("Invalid URL"));
    }

    #[test]
    fn test_chrono_parse_error_maps_to_validation() {
        let parse_err = chrono::NaiveDate::parse_from_str("2024-13-45", "%Y-%m-%d").unwrap_err();
        let err: HomeworkHubError = parse_err.into();
        assert_eq!(err.code(), "E003");
    }
}
