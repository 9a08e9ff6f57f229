//! LLM 判卷 - 业务能力层
//!
//! 只负责"判定一对问答"能力，不关心题目来源和会话流程
//!
//! ## 技术栈
//! - 使用 `async-openai` crate 进行 API 调用
//! - 支持自定义 API 端点和模型
//! - 兼容 OpenAI API 的服务

use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
    },
    Client,
};
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::EvalError;
use crate::models::Verdict;

/// LLM 判卷服务
///
/// 职责：
/// - 对单个"题目 + 回答"组合调用一次 LLM 判卷
/// - 校验返回结果的结构
/// - 把一切失败收敛为兜底判定，调用方永远拿到合法的 Verdict
/// - 不重试，不缓存，每次调用相互独立
pub struct AnswerEvaluator {
    client: Client<OpenAIConfig>,
    model_name: String,
    explanation_language: String,
}

impl AnswerEvaluator {
    /// 创建新的判卷服务
    pub fn new(config: &Config) -> Self {
        // 配置 OpenAI 客户端（兼容 OpenAI API 的服务）
        let openai_config = OpenAIConfig::new()
            .with_api_key(&config.openai_api_key)
            .with_api_base(&config.llm_api_base_url);

        let client = Client::with_config(openai_config);

        Self {
            client,
            model_name: config.llm_model_name.clone(),
            explanation_language: config.explanation_language.clone(),
        }
    }

    /// 判定一条回答
    ///
    /// 本函数永远不会失败：网络错误、返回内容不是合法 JSON、缺少必需字段，
    /// 都会得到兜底判定（`is_correct = false`，固定说明文本）。
    ///
    /// # 参数
    /// - `question`: 题目文本
    /// - `answer`: 用户的自由文本回答
    /// - `simplify`: 是否要求用明显更简单的语言解释
    ///
    /// # 示例
    /// ```no_run
    /// # use fragen_trainer::services::AnswerEvaluator;
    /// # async fn example(evaluator: &AnswerEvaluator) {
    /// let verdict = evaluator.evaluate("Was ist ein Byte?", "8 Bit", false).await;
    /// println!("richtig: {}", verdict.is_correct);
    /// # }
    /// ```
    pub async fn evaluate(&self, question: &str, answer: &str, simplify: bool) -> Verdict {
        match self.evaluate_inner(question, answer, simplify).await {
            Ok(verdict) => verdict,
            Err(e) => {
                warn!("⚠️ 判卷失败，使用兜底判定: {}", e);
                Verdict::fallback()
            }
        }
    }

    /// 判卷的完整内部流程：构建提示词 → 调用 LLM → 解析判定
    async fn evaluate_inner(
        &self,
        question: &str,
        answer: &str,
        simplify: bool,
    ) -> Result<Verdict, EvalError> {
        let (user_message, system_message) = self.build_eval_messages(question, answer, simplify);

        let content = self.send_to_llm(&user_message, &system_message).await?;

        self.parse_verdict(&content)
    }

    /// 调用 LLM API，返回响应文本
    async fn send_to_llm(
        &self,
        user_message: &str,
        system_message: &str,
    ) -> Result<String, EvalError> {
        debug!("调用 LLM API，模型: {}", self.model_name);
        debug!("用户消息长度: {} 字符", user_message.len());

        // 构建消息列表
        let system_msg = ChatCompletionRequestSystemMessageArgs::default()
            .content(system_message)
            .build()?;
        let user_msg = ChatCompletionRequestUserMessageArgs::default()
            .content(user_message)
            .build()?;
        let messages = vec![
            ChatCompletionRequestMessage::System(system_msg),
            ChatCompletionRequestMessage::User(user_msg),
        ];

        // 构建请求（低温以获得稳定的判定）
        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model_name)
            .messages(messages)
            .temperature(0.3)
            .max_tokens(1024u32)
            .build()?;

        // 调用 API，单次尝试，不重试
        let response = self.client.chat().create(request).await.map_err(|e| {
            warn!("LLM API 调用失败: {}", e);
            EvalError::Api(e)
        })?;

        debug!("LLM API 调用成功");

        // 提取响应内容
        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or(EvalError::EmptyContent)?;

        Ok(content.trim().to_string())
    }

    /// 构建判卷用的消息
    ///
    /// 返回 (user_message, system_message)
    fn build_eval_messages(
        &self,
        question: &str,
        answer: &str,
        simplify: bool,
    ) -> (String, String) {
        let system_message = format!(
            "Du bist ein hilfreicher Lehrassistent und bewertest die Antworten von Lernenden. \
             Antworte immer nur mit einem einzigen gültigen JSON-Objekt, ohne weiteren Text. \
             Alle Erklärungen schreibst du auf {}. \
             Bei einer falschen Antwort lieferst du zusätzlich die richtige Antwort und eine Eselsbrücke. \
             Wenn einfache Sprache verlangt ist, formulierst du die Erklärung deutlich einfacher.",
            self.explanation_language
        );

        let user_message = format!(
            r#"Frage: {}
Antwort: {}
Einfache Sprache: {}

Bewerte die Antwort und liefere:
1. Ob sie richtig ist
2. Eine ausführliche Erklärung
3. Die richtige Antwort, falls die Antwort falsch war
4. Eine Eselsbrücke, falls die Antwort falsch war

Gib genau dieses JSON-Objekt zurück:
{{
    "is_correct": true/false,
    "explanation": "deine Erklärung",
    "correct_answer": "die richtige Antwort, sonst leer",
    "eselsbruecke": "deine Eselsbrücke, sonst leer"
}}"#,
            question,
            answer,
            if simplify { "ja" } else { "nein" }
        );

        (user_message, system_message)
    }

    /// 解析 LLM 返回的判定 JSON
    ///
    /// 必须是单个 JSON 对象，且包含 `is_correct` 和 `explanation`；
    /// 其余字段缺失时自动取空字符串，多余字段忽略
    fn parse_verdict(&self, content: &str) -> Result<Verdict, EvalError> {
        let verdict: Verdict = serde_json::from_str(content.trim())?;
        Ok(verdict)
    }
}
