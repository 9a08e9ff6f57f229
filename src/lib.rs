//! # Fragen Trainer
//!
//! 一个从 PDF 中提取复习题（Wiederholungsfragen）并交互式问答判卷的 Rust 应用程序
//!
//! ## 架构设计
//!
//! 本系统采用分层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `pdf/` - PDF 页面文本来源，只暴露"按页取文本"能力
//!
//! ### ② 业务能力层（Services）
//! - `services/extractor` - 复习题提取能力（纯函数状态机）
//! - `services/evaluator` - LLM 判卷能力
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/session` - 单次答题会话的状态与导航
//!
//! ### ④ 编排层（Orchestration）
//! - `app` - 交互式问答循环，串联提取、展示、作答、判卷
//!
//! ## 模块结构

pub mod app;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod pdf;
pub mod services;
pub mod workflow;

// 重新导出常用类型
pub use app::App;
pub use config::Config;
pub use error::{ConfigError, DocumentError, EvalError};
pub use models::{ReviewQuestion, Verdict};
pub use pdf::{PageText, PdfPageSource};
pub use services::{extract_review_questions, AnswerEvaluator};
pub use workflow::QuizSession;
