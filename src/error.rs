use async_openai::error::OpenAIError;
use thiserror::Error;

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 必需的环境变量不存在或为空
    #[error("环境变量 {var_name} 不存在或为空")]
    EnvVarNotFound { var_name: String },
}

/// 文档读取错误
#[derive(Debug, Error)]
pub enum DocumentError {
    /// PDF 加载失败
    #[error("PDF 加载失败: {0}")]
    Load(String),

    /// 单页文本提取失败
    #[error("第 {page} 页文本提取失败: {message}")]
    Extraction { page: u32, message: String },
}

/// 判卷错误
///
/// 仅在评估器内部流转，边界处统一转换为兜底判定，绝不外传
#[derive(Debug, Error)]
pub enum EvalError {
    /// LLM API 调用失败
    #[error("LLM API 调用失败: {0}")]
    Api(#[from] OpenAIError),

    /// LLM 返回内容为空
    #[error("LLM 返回内容为空")]
    EmptyContent,

    /// 判定结果不是合法的 JSON 对象
    #[error("判定结果解析失败: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
