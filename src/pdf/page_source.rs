//! PDF 页面文本来源 - 基础设施层
//!
//! 加载 PDF 后立即把全部页面文本物化出来，只暴露"按页取文本"能力
//!
//! ## 技术栈
//! - 使用 `lopdf` crate 解析 PDF
//! - 页码从 1 开始，与阅读器显示一致

use std::path::Path;

use lopdf::Document;
use tracing::debug;

use crate::error::DocumentError;

/// 单页文本
#[derive(Debug, Clone)]
pub struct PageText {
    /// 页码（从 1 开始）
    pub number: u32,

    /// 该页的全部文本
    pub text: String,
}

/// PDF 页面文本来源
pub struct PdfPageSource {
    pages: Vec<PageText>,
}

impl PdfPageSource {
    /// 从文件路径加载 PDF
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let document =
            Document::load(path.as_ref()).map_err(|e| DocumentError::Load(e.to_string()))?;
        Self::from_document(document)
    }

    /// 从内存中的字节加载 PDF
    ///
    /// 不落盘，因此也没有任何需要清理的临时文件
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DocumentError> {
        let document = Document::load_mem(bytes).map_err(|e| DocumentError::Load(e.to_string()))?;
        Self::from_document(document)
    }

    /// 按页序提取全部页面文本
    fn from_document(document: Document) -> Result<Self, DocumentError> {
        let mut pages = Vec::new();

        for (page_number, _page_id) in document.get_pages() {
            let text = document
                .extract_text(&[page_number])
                .map_err(|e| DocumentError::Extraction {
                    page: page_number,
                    message: e.to_string(),
                })?;

            debug!("第 {} 页: {} 字符", page_number, text.chars().count());
            pages.push(PageText {
                number: page_number,
                text,
            });
        }

        Ok(Self { pages })
    }

    /// 全部页面文本，按页序排列
    pub fn pages(&self) -> &[PageText] {
        &self.pages
    }

    /// 文档页数
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}
