use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::{HomeworkHubError, Result};
use crate::utils::validate::validate_link;

/// 提交方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub enum SubmissionKind {
    File,
    Link,
}

/// 提交内容：文件引用或链接
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub enum SubmissionContent {
    File { name: String, url: String },
    Link { url: String },
}

impl SubmissionContent {
    pub fn file(name: impl Into<String>, url: impl Into<String>) -> Self {
        SubmissionContent::File {
            name: name.into(),
            url: url.into(),
        }
    }

    pub fn link(url: impl Into<String>) -> Self {
        SubmissionContent::Link { url: url.into() }
    }

    pub fn kind(&self) -> SubmissionKind {
        match self {
            SubmissionContent::File { .. } => SubmissionKind::File,
            SubmissionContent::Link { .. } => SubmissionKind::Link,
        }
    }

    /// 解析教师代交时输入的文本
    ///
    /// 以 `http` 开头且是完整 URL 时视为链接，其余视为文件名，文件地址使用占位链接。
    pub fn from_teacher_input(raw: &str, placeholder_url: &str) -> Result<Self> {
        let input = raw.trim();
        if input.is_empty() {
            return Err(HomeworkHubError::validation("代交内容不能为空"));
        }
        if input.starts_with("http") && validate_link(input).is_ok() {
            Ok(SubmissionContent::link(input))
        } else {
            Ok(SubmissionContent::file(input, placeholder_url))
        }
    }
}

/// 提交状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub enum SubmissionStatus {
    Submitted,     // 已提交，待批改
    Approved,      // 通过（终态）
    NeedsRevision, // 需要修改
}

impl SubmissionStatus {
    pub const SUBMITTED: &'static str = "submitted";
    pub const APPROVED: &'static str = "approved";
    pub const NEEDS_REVISION: &'static str = "needs_revision";

    /// 已批改（通过或需修改）
    pub fn is_graded(&self) -> bool {
        matches!(self, SubmissionStatus::Approved | SubmissionStatus::NeedsRevision)
    }

    /// 展示用标签
    pub fn label(&self) -> &'static str {
        match self {
            SubmissionStatus::Submitted => "Submitted",
            SubmissionStatus::Approved => "Approved",
            SubmissionStatus::NeedsRevision => "Needs Revision",
        }
    }
}

impl<'de> Deserialize<'de> for SubmissionStatus {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<SubmissionStatus>().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的提交状态: '{s}'. 支持的状态: submitted, approved, needs_revision"
            ))
        })
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionStatus::Submitted => write!(f, "{}", SubmissionStatus::SUBMITTED),
            SubmissionStatus::Approved => write!(f, "{}", SubmissionStatus::APPROVED),
            SubmissionStatus::NeedsRevision => write!(f, "{}", SubmissionStatus::NEEDS_REVISION),
        }
    }
}

impl std::str::FromStr for SubmissionStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            SubmissionStatus::SUBMITTED => Ok(SubmissionStatus::Submitted),
            SubmissionStatus::APPROVED => Ok(SubmissionStatus::Approved),
            SubmissionStatus::NEEDS_REVISION => Ok(SubmissionStatus::NeedsRevision),
            _ => Err(format!("Invalid submission status: {s}")),
        }
    }
}

/// 提交记录，(assignment_id, student_id) 唯一，重新提交会覆盖
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct Submission {
    pub assignment_id: i64,
    pub student_id: i64,
    pub content: SubmissionContent,
    pub submitted_at: DateTime<Utc>,
    pub status: SubmissionStatus,
    pub teacher_comment: Option<String>,
}

impl Submission {
    pub fn key(&self) -> (i64, i64) {
        (self.assignment_id, self.student_id)
    }

    pub fn kind(&self) -> SubmissionKind {
        self.content.kind()
    }

    pub fn is_approved(&self) -> bool {
        self.status == SubmissionStatus::Approved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_teacher_input_http_becomes_link() {
        let content =
            SubmissionContent::from_teacher_input(" https://example.com/essay ", "#").unwrap();
        assert_eq!(content, SubmissionContent::link("https://example.com/essay"));
        assert_eq!(content.kind(), SubmissionKind::Link);
    }

    #[test]
    fn test_teacher_input_plain_text_becomes_file() {
        let content = SubmissionContent::from_teacher_input("essay.docx", "#").unwrap();
        assert_eq!(content, SubmissionContent::file("essay.docx", "#"));
        assert_eq!(content.kind(), SubmissionKind::File);
    }

    #[test]
    fn test_teacher_input_http_prefix_without_scheme_is_file() {
        for name in ["http_notes.pdf", "httpd.conf", "https-guide.txt"] {
            let content = SubmissionContent::from_teacher_input(name, "#").unwrap();
            assert_eq!(content, SubmissionContent::file(name, "#"));
        }
    }

    #[test]
    fn test_teacher_input_empty_is_rejected() {
        let err = SubmissionContent::from_teacher_input("   ", "#").unwrap_err();
        assert_eq!(err.code(), "E003");
    }

    #[test]
    fn test_content_serializes_with_kind_tag() {
        let json = serde_json::to_value(SubmissionContent::link("https://a.b")).unwrap();
        assert_eq!(json["kind"], "link");
        assert_eq!(json["url"], "https://a.b");
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(SubmissionStatus::NeedsRevision.label(), "Needs Revision");
        assert!(SubmissionStatus::NeedsRevision.is_graded());
        assert!(!SubmissionStatus::Submitted.is_graded());
        assert_eq!(
            "needs_revision".parse::<SubmissionStatus>(),
            Ok(SubmissionStatus::NeedsRevision)
        );
    }
}
