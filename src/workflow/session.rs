//! 答题会话 - 流程层
//!
//! 持有一次会话的全部状态：题目序列、当前位置、判定展示标志。
//! 导航在序列两端是空操作，位置永远停留在合法范围内。

use crate::models::{ReviewQuestion, Verdict};

/// 答题会话
#[derive(Debug)]
pub struct QuizSession {
    /// 提取出的题目序列，创建后不再变化
    questions: Vec<ReviewQuestion>,

    /// 当前位置（从 0 开始）
    position: usize,

    /// 当前题目是否有展示中的判定
    show_evaluation: bool,

    /// 最近一次判定，仅在当前题目上短暂保留
    last_verdict: Option<Verdict>,

    /// 是否要求简化解释
    simplify: bool,
}

impl QuizSession {
    /// 以提取出的题目序列开始新会话，从第一题开始
    pub fn new(questions: Vec<ReviewQuestion>) -> Self {
        Self {
            questions,
            position: 0,
            show_evaluation: false,
            last_verdict: None,
            simplify: false,
        }
    }

    /// 当前题目（空会话时为 None）
    pub fn current(&self) -> Option<&ReviewQuestion> {
        self.questions.get(self.position)
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// 前进到下一题；已在最后一题时不动
    ///
    /// 返回位置是否发生变化，实际移动会同时清除展示中的判定
    pub fn advance(&mut self) -> bool {
        if self.position + 1 < self.questions.len() {
            self.position += 1;
            self.clear_evaluation();
            true
        } else {
            false
        }
    }

    /// 退回到上一题；已在第一题时不动
    pub fn retreat(&mut self) -> bool {
        if self.position > 0 {
            self.position -= 1;
            self.clear_evaluation();
            true
        } else {
            false
        }
    }

    /// 记录当前题目的判定并标记为展示中
    pub fn record_verdict(&mut self, verdict: Verdict) {
        self.last_verdict = Some(verdict);
        self.show_evaluation = true;
    }

    pub fn show_evaluation(&self) -> bool {
        self.show_evaluation
    }

    pub fn last_verdict(&self) -> Option<&Verdict> {
        self.last_verdict.as_ref()
    }

    /// 切换简化解释，返回新状态
    pub fn toggle_simplify(&mut self) -> bool {
        self.simplify = !self.simplify;
        self.simplify
    }

    pub fn simplify(&self) -> bool {
        self.simplify
    }

    fn clear_evaluation(&mut self) {
        self.show_evaluation = false;
        self.last_verdict = None;
    }
}
