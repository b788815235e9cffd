use thiserror::Error;

pub type Result<T> = std::result::Result<T, DdlError>;

/// DDL 解析的致命错误
///
/// 输入本身的问题（无法识别的行、找不到表的注释）不会产生错误，
/// 只会被忽略或记录为诊断信息。这里只包含内部错误。
#[derive(Error, Debug)]
pub enum DdlError {
    #[error("解析器内部状态错误: {0}")]
    InvalidState(String),

    #[error("正则表达式编译失败: {0}")]
    Pattern(#[from] regex::Error),

    #[error("序列化错误: {0}")]
    Serde(#[from] serde_json::Error),
}

impl DdlError {
    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }
}
