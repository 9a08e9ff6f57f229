use anyhow::{Context, Result};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::{info, warn};

use crate::config::Config;
use crate::models::{ReviewQuestion, Verdict};
use crate::pdf::PdfPageSource;
use crate::services::{extract_review_questions, AnswerEvaluator};
use crate::workflow::QuizSession;

/// 应用主结构
pub struct App {
    config: Config,
    evaluator: AnswerEvaluator,
}

impl App {
    /// 初始化应用
    pub fn new(config: Config) -> Self {
        let evaluator = AnswerEvaluator::new(&config);
        Self { config, evaluator }
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<()> {
        log_startup(&self.config);

        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        // 加载 PDF
        let path = resolve_document_path(&mut lines).await?;
        info!("📄 正在加载 PDF: {}", path);
        let source = PdfPageSource::from_path(&path)
            .with_context(|| format!("无法加载文档 {}", path))?;
        info!("✓ 已读取 {} 页", source.page_count());

        // 提取复习题
        let questions = extract_review_questions(source.pages());
        if questions.is_empty() {
            warn!("⚠️ 未找到任何复习题，程序结束");
            println!("Keine Wiederholungsfragen im Dokument gefunden.");
            return Ok(());
        }
        info!("✓ 共提取 {} 道复习题", questions.len());

        // 进入问答循环
        let mut session = QuizSession::new(questions);
        println!("{} Fragen gefunden. :hilfe zeigt alle Befehle.", session.len());
        let stats = self.run_quiz_loop(&mut session, &mut lines).await?;

        print_final_stats(&stats);
        Ok(())
    }

    /// 问答主循环：展示 → 作答 → 判卷 → 导航
    async fn run_quiz_loop(
        &self,
        session: &mut QuizSession,
        lines: &mut Lines<BufReader<Stdin>>,
    ) -> Result<SessionStats> {
        let mut stats = SessionStats::default();

        loop {
            let Some(question) = session.current().cloned() else {
                break;
            };
            print_question(&question, session.position(), session.len());
            if session.show_evaluation() {
                if let Some(verdict) = session.last_verdict() {
                    print_verdict(verdict);
                }
            }

            print!("> ");
            std::io::stdout().flush()?;
            let Some(line) = lines.next_line().await? else {
                break;
            };

            let input = line.trim();
            if input.is_empty() {
                // 空输入不触发判卷
                continue;
            }

            match input {
                ":ende" => break,
                ":hilfe" => print_help(),
                ":weiter" => {
                    if !session.advance() {
                        println!("Bereits bei der letzten Frage.");
                    }
                }
                ":zurueck" => {
                    if !session.retreat() {
                        println!("Bereits bei der ersten Frage.");
                    }
                }
                ":einfach" => {
                    let simplify = session.toggle_simplify();
                    println!(
                        "Einfache Erklärungen: {}",
                        if simplify { "EIN" } else { "AUS" }
                    );
                }
                cmd if cmd.starts_with(':') => {
                    println!("Unbekannter Befehl: {}. :hilfe zeigt alle Befehle.", cmd);
                }
                answer => {
                    info!("📝 判卷: {}", question);
                    println!("Antwort wird ausgewertet, bitte warten...");

                    let verdict = self
                        .evaluator
                        .evaluate(&question.text, answer, session.simplify())
                        .await;

                    stats.answered += 1;
                    if verdict.is_correct {
                        stats.correct += 1;
                    }

                    // 判定存入会话，由下一轮展示在题目下方
                    session.record_verdict(verdict);
                }
            }
        }

        Ok(stats)
    }
}

/// 会话统计
#[derive(Debug, Default)]
struct SessionStats {
    answered: usize,
    correct: usize,
}

/// 确定 PDF 文件路径：优先取命令行参数，否则交互式询问
async fn resolve_document_path(lines: &mut Lines<BufReader<Stdin>>) -> Result<String> {
    if let Some(path) = std::env::args().nth(1) {
        return Ok(path);
    }

    print!("Pfad zur PDF-Datei: ");
    std::io::stdout().flush()?;
    match lines.next_line().await? {
        Some(line) if !line.trim().is_empty() => Ok(line.trim().to_string()),
        _ => anyhow::bail!("Kein Dokumentpfad angegeben"),
    }
}

// ========== 日志辅助函数 ==========

fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 交互式复习题问答模式");
    info!("🤖 模型: {}", config.llm_model_name);
    info!("🌐 API 地址: {}", config.llm_api_base_url);
    info!("{}", "=".repeat(60));
}

// ========== 终端输出辅助函数 ==========

fn print_question(question: &ReviewQuestion, position: usize, total: usize) {
    println!("\n{}", "─".repeat(60));
    println!(
        "Frage {} von {} (Seite {})",
        position + 1,
        total,
        question.page
    );
    println!("{}", question.text);
}

fn print_verdict(verdict: &Verdict) {
    if verdict.is_correct {
        println!("✅ Richtig!");
    } else {
        println!("❌ Leider nicht richtig.");
    }
    println!("Erklärung: {}", verdict.explanation);
    if !verdict.is_correct {
        if !verdict.correct_answer.is_empty() {
            println!("Richtige Antwort: {}", verdict.correct_answer);
        }
        if !verdict.mnemonic.is_empty() {
            println!("Eselsbrücke: {}", verdict.mnemonic);
        }
    }
}

fn print_help() {
    println!("Befehle:");
    println!("  :weiter    nächste Frage");
    println!("  :zurueck   vorherige Frage");
    println!("  :einfach   einfache Erklärungen ein/aus");
    println!("  :hilfe     diese Übersicht");
    println!("  :ende      Sitzung beenden");
    println!("Jede andere Eingabe wird als Antwort auf die aktuelle Frage gewertet.");
}

fn print_final_stats(stats: &SessionStats) {
    println!("\n{}", "=".repeat(60));
    println!(
        "Sitzung beendet: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    println!("Beantwortete Fragen: {}", stats.answered);
    println!("Davon richtig: {}", stats.correct);
    println!("Davon falsch: {}", stats.answered - stats.correct);
    println!("{}", "=".repeat(60));
}
