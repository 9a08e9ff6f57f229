use serde::{Deserialize, Serialize};

/// 从 PDF 中提取出的复习题
///
/// 由提取器创建后不再修改，顺序即文档阅读顺序
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewQuestion {
    /// 题目文本（编号前缀已去除）
    pub text: String,

    /// 来源页码（从 1 开始）
    pub page: u32,
}

impl ReviewQuestion {
    pub fn new(text: impl Into<String>, page: u32) -> Self {
        Self {
            text: text.into(),
            page,
        }
    }
}

impl std::fmt::Display for ReviewQuestion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // 截断题目内容以便显示（最多80个字符）
        let text_preview = if self.text.chars().count() > 80 {
            self.text.chars().take(80).collect::<String>() + "..."
        } else {
            self.text.clone()
        };
        write!(f, "[第 {} 页] {}", self.page, text_preview)
    }
}

/// 判卷失败时兜底判定中使用的固定说明文本
pub const FALLBACK_EXPLANATION: &str = "Fehler bei der Auswertung";

/// LLM 判卷结果
///
/// 必需字段为 `is_correct` 和 `explanation`，其余字段缺失时取空字符串。
/// 线上服务可能用 `eselsbruecke` 作为记忆口诀的字段名，反序列化两种皆可。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    /// 回答是否正确
    pub is_correct: bool,

    /// 判定说明
    pub explanation: String,

    /// 参考答案（仅在回答错误时有意义）
    #[serde(default)]
    pub correct_answer: String,

    /// 记忆口诀（仅在回答错误时有意义）
    #[serde(default, alias = "eselsbruecke")]
    pub mnemonic: String,
}

impl Verdict {
    /// 判卷失败时的兜底判定
    pub fn fallback() -> Self {
        Self {
            is_correct: false,
            explanation: FALLBACK_EXPLANATION.to_string(),
            correct_answer: String::new(),
            mnemonic: String::new(),
        }
    }
}
