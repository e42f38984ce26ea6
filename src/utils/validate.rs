use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{HomeworkHubError, Result};
use crate::models::submissions::entities::SubmissionContent;

static LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.-]*://\S+$").expect("Invalid link regex"));

/// 截止日期格式，与日期输入框的值一致
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// 必填文本校验，返回去除首尾空白后的值
pub fn validate_required(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(HomeworkHubError::validation(format!("{field} 不能为空")));
    }
    Ok(trimmed.to_string())
}

pub fn validate_due_date(value: &str) -> Result<NaiveDate> {
    let value = validate_required("due_date", value)?;
    Ok(NaiveDate::parse_from_str(&value, DUE_DATE_FORMAT)?)
}

pub fn validate_link(url: &str) -> std::result::Result<(), &'static str> {
    if url.trim().is_empty() {
        return Err("Link must not be empty");
    }
    if !LINK_RE.is_match(url.trim()) {
        return Err("Link must be an absolute URL");
    }
    Ok(())
}

/// 校验提交内容并规范化（去除首尾空白）
pub fn validate_submission_content(content: SubmissionContent) -> Result<SubmissionContent> {
    match content {
        SubmissionContent::File { name, url } => {
            let name = validate_required("file name", &name)?;
            Ok(SubmissionContent::File { name, url })
        }
        SubmissionContent::Link { url } => {
            validate_link(&url).map_err(HomeworkHubError::validation)?;
            Ok(SubmissionContent::Link {
                url: url.trim().to_string(),
            })
        }
    }
}
