use crate::error::ConfigError;

/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// OpenAI API Key（必需，无默认值）
    pub openai_api_key: String,
    // --- LLM 配置 ---
    pub llm_api_base_url: String,
    pub llm_model_name: String,
    /// 判卷解释使用的语言
    pub explanation_language: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            openai_api_key: String::new(),
            llm_api_base_url: "https://api.openai.com/v1".to_string(),
            llm_model_name: "gpt-4".to_string(),
            explanation_language: "Deutsch".to_string(),
        }
    }
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// `OPENAI_API_KEY` 缺失或为空时返回错误，程序必须拒绝启动；
    /// 其余变量缺失时使用默认值
    pub fn from_env() -> Result<Self, ConfigError> {
        let default = Self::default();
        let config = Self {
            openai_api_key: std::env::var("OPENAI_API_KEY").unwrap_or(default.openai_api_key),
            llm_api_base_url: std::env::var("LLM_API_BASE_URL").unwrap_or(default.llm_api_base_url),
            llm_model_name: std::env::var("LLM_MODEL_NAME").unwrap_or(default.llm_model_name),
            explanation_language: std::env::var("EXPLANATION_LANGUAGE")
                .unwrap_or(default.explanation_language),
        };

        if config.openai_api_key.trim().is_empty() {
            return Err(ConfigError::EnvVarNotFound {
                var_name: "OPENAI_API_KEY".to_string(),
            });
        }

        Ok(config)
    }
}
