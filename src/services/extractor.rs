//! 复习题提取 - 业务能力层
//!
//! 只负责"从页面文本中切出编号复习题"能力，不关心文本来源和题目去向
//!
//! ## 提取规则
//! - 只扫描包含标记 `Wiederholungsfragen` 的页面，其余页面一律跳过
//! - 以 "1." 到 "19." 开头的行视为新题目的起始行
//! - 其余非空行作为当前题目的续行，用单个空格拼接
//! - 题目边界和页面结束时冲刷缓冲区，编号前缀在此时去除
//! - 逐页独立处理，缓冲区不会跨页存活

use tracing::debug;

use crate::models::ReviewQuestion;
use crate::pdf::PageText;

/// 复习题小节的标记文本，决定页面是否参与提取
pub const QUESTION_SECTION_MARKER: &str = "Wiederholungsfragen";

/// 可识别的最大题目编号
///
/// 固定策略：只有 "1." 到 "19." 开头的行算作题目起始行，
/// "20." 及以上一律当作续行处理
const MAX_QUESTION_NUMBER: u32 = 19;

/// 从全部页面文本中提取复习题
///
/// 纯函数，对任何输入都不会失败：没有标记页或没有编号行时返回空序列。
/// 题目顺序与文档阅读顺序一致（页序，页内出现顺序）。
pub fn extract_review_questions(pages: &[PageText]) -> Vec<ReviewQuestion> {
    let mut questions = Vec::new();

    for page in pages {
        if !page.text.contains(QUESTION_SECTION_MARKER) {
            continue;
        }
        extract_from_page(page, &mut questions);
    }

    debug!("从 {} 页中共提取 {} 道复习题", pages.len(), questions.len());
    questions
}

/// 提取单个页面中的复习题
fn extract_from_page(page: &PageText, questions: &mut Vec<ReviewQuestion>) {
    let mut buffer = String::new();

    for raw_line in page.text.lines() {
        let line = raw_line.trim();

        if is_question_boundary(line) {
            if !buffer.is_empty() {
                push_question(&buffer, page.number, questions);
            }
            buffer = line.to_string();
        } else if !buffer.is_empty() && !line.is_empty() {
            buffer.push(' ');
            buffer.push_str(line);
        }
    }

    // 页面结束：冲刷最后一道题
    if !buffer.is_empty() {
        push_question(&buffer, page.number, questions);
    }
}

/// 冲刷缓冲区：去掉编号前缀后收入结果序列
fn push_question(buffer: &str, page: u32, questions: &mut Vec<ReviewQuestion>) {
    let text = strip_numbering_prefix(buffer);
    questions.push(ReviewQuestion::new(text, page));
}

/// 判断一行是否是新题目的起始行
///
/// 起始行以一到两位数字（值 1 到 19，无前导零）加一个 "." 开头
fn is_question_boundary(line: &str) -> bool {
    let digit_count = line.bytes().take_while(|b| b.is_ascii_digit()).count();
    if !(1..=2).contains(&digit_count) || line.starts_with('0') {
        return false;
    }
    if line.as_bytes().get(digit_count) != Some(&b'.') {
        return false;
    }
    matches!(line[..digit_count].parse::<u32>(), Ok(1..=MAX_QUESTION_NUMBER))
}

/// 去掉行首的编号前缀（任意位数字 + "." + 任意空白）
///
/// 只处理字符串开头，没有编号前缀时原样返回
fn strip_numbering_prefix(text: &str) -> &str {
    let digit_count = text.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digit_count == 0 {
        return text;
    }
    match text[digit_count..].strip_prefix('.') {
        Some(rest) => rest.trim_start(),
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(number: u32, text: &str) -> PageText {
        PageText {
            number,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_page_without_marker_yields_nothing() {
        let pages = vec![page(1, "Einleitung\n1. Irrelevant")];

        assert!(extract_review_questions(&pages).is_empty());
    }

    #[test]
    fn test_no_pages_yields_nothing() {
        assert!(extract_review_questions(&[]).is_empty());
    }

    #[test]
    fn test_single_page_with_two_questions() {
        let pages = vec![page(
            1,
            "Wiederholungsfragen\n1. Was ist X?\nmehr Kontext\n2. Was ist Y?",
        )];

        let questions = extract_review_questions(&pages);

        assert_eq!(
            questions,
            vec![
                ReviewQuestion::new("Was ist X? mehr Kontext", 1),
                ReviewQuestion::new("Was ist Y?", 1),
            ]
        );
    }

    #[test]
    fn test_continuation_lines_joined_in_order() {
        let pages = vec![page(
            2,
            "Wiederholungsfragen\n3. Nenne die Schichten\ndes OSI-Modells\nund ihre Aufgaben.",
        )];

        let questions = extract_review_questions(&pages);

        assert_eq!(questions.len(), 1);
        assert_eq!(
            questions[0].text,
            "Nenne die Schichten des OSI-Modells und ihre Aufgaben."
        );
        assert_eq!(questions[0].page, 2);
    }

    #[test]
    fn test_high_numbering_is_continuation() {
        // "21." 超出编号上限，归入第 5 题的续行
        let pages = vec![page(1, "Wiederholungsfragen\n5. Nenne einen\n21. Sonderfall")];

        let questions = extract_review_questions(&pages);

        assert_eq!(questions, vec![ReviewQuestion::new("Nenne einen 21. Sonderfall", 1)]);
    }

    #[test]
    fn test_twenty_is_not_a_boundary() {
        let pages = vec![page(
            1,
            "Wiederholungsfragen\n19. Letzte Frage\n20. Kein neuer Anfang",
        )];

        let questions = extract_review_questions(&pages);

        assert_eq!(
            questions,
            vec![ReviewQuestion::new("Letzte Frage 20. Kein neuer Anfang", 1)]
        );
    }

    #[test]
    fn test_boundary_detection() {
        assert!(is_question_boundary("1."));
        assert!(is_question_boundary("1. Was ist X?"));
        assert!(is_question_boundary("9.Direkt ohne Leerzeichen"));
        assert!(is_question_boundary("19. Frage"));
        assert!(is_question_boundary("1.5 Liter oder mehr?"));

        assert!(!is_question_boundary(""));
        assert!(!is_question_boundary("0."));
        assert!(!is_question_boundary("01. Frage"));
        assert!(!is_question_boundary("20."));
        assert!(!is_question_boundary("99. Frage"));
        assert!(!is_question_boundary("012. Frage"));
        assert!(!is_question_boundary("123. Frage"));
        assert!(!is_question_boundary("1"));
        assert!(!is_question_boundary("1:"));
        assert!(!is_question_boundary("Frage 1."));
    }

    #[test]
    fn test_strip_numbering_prefix() {
        assert_eq!(strip_numbering_prefix("12. Was ist Y?"), "Was ist Y?");
        assert_eq!(strip_numbering_prefix("1.Ohne Leerzeichen"), "Ohne Leerzeichen");
        assert_eq!(strip_numbering_prefix("123. Lange Nummer"), "Lange Nummer");
        assert_eq!(strip_numbering_prefix("Keine Nummer"), "Keine Nummer");
        assert_eq!(strip_numbering_prefix("7."), "");
        assert_eq!(strip_numbering_prefix(""), "");
    }

    #[test]
    fn test_strip_is_idempotent() {
        for input in ["12. Was ist Y?", "Was ist X?", "7.", "Nenne 3 Beispiele"] {
            let once = strip_numbering_prefix(input);
            assert_eq!(strip_numbering_prefix(once), once);
        }
    }

    #[test]
    fn test_marker_page_without_numbered_lines() {
        let pages = vec![page(1, "Wiederholungsfragen\nnur Prosa\nweiter Prosa")];

        assert!(extract_review_questions(&pages).is_empty());
    }

    #[test]
    fn test_text_before_first_boundary_is_discarded() {
        let pages = vec![page(
            4,
            "Kapitel 3\nWiederholungsfragen\nzur Auffrischung\n1. Frage eins",
        )];

        let questions = extract_review_questions(&pages);

        assert_eq!(questions, vec![ReviewQuestion::new("Frage eins", 4)]);
    }

    #[test]
    fn test_blank_lines_never_extend_or_flush() {
        let pages = vec![page(
            1,
            "Wiederholungsfragen\n1. Erster Teil\n   \n\nzweiter Teil",
        )];

        let questions = extract_review_questions(&pages);

        assert_eq!(questions, vec![ReviewQuestion::new("Erster Teil zweiter Teil", 1)]);
    }

    #[test]
    fn test_order_follows_pages_and_appearance() {
        let pages = vec![
            page(1, "Wiederholungsfragen\n1. Frage A\n2. Frage B"),
            page(2, "Zwischenseite ohne Fragen"),
            page(3, "Wiederholungsfragen\n1. Frage C"),
        ];

        let questions = extract_review_questions(&pages);

        assert_eq!(
            questions,
            vec![
                ReviewQuestion::new("Frage A", 1),
                ReviewQuestion::new("Frage B", 1),
                ReviewQuestion::new("Frage C", 3),
            ]
        );
    }

    #[test]
    fn test_continuation_on_unmarked_page_is_dropped() {
        // 缓冲区不跨页：后一页缺少标记，续行丢失
        let pages = vec![
            page(1, "Wiederholungsfragen\n2. Frage mit Fortsetzung"),
            page(2, "auf der naechsten Seite"),
        ];

        let questions = extract_review_questions(&pages);

        assert_eq!(questions, vec![ReviewQuestion::new("Frage mit Fortsetzung", 1)]);
    }

    #[test]
    fn test_duplicate_questions_are_kept() {
        let pages = vec![
            page(1, "Wiederholungsfragen\n1. Was ist ein Byte?"),
            page(5, "Wiederholungsfragen\n1. Was ist ein Byte?"),
        ];

        let questions = extract_review_questions(&pages);

        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].page, 1);
        assert_eq!(questions[1].page, 5);
        assert_eq!(questions[0].text, questions[1].text);
    }

    #[test]
    fn test_bare_numbering_line_flushes_empty_text() {
        let pages = vec![page(1, "Wiederholungsfragen\n7.")];

        let questions = extract_review_questions(&pages);

        assert_eq!(questions, vec![ReviewQuestion::new("", 1)]);
    }
}
