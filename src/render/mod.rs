//! Report rendering.
//!
//! Renderers only lay out already-grouped [`HighlightedBook`]s; grouping,
//! filtering and text shaping happen in [`crate::aggregate`] and
//! [`crate::format`].

mod html;
mod mindmap;

pub use html::render_html;
pub use mindmap::render_mindmap;

use crate::model::HighlightedBook;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Html,
    MindMap,
}

impl ReportFormat {
    pub fn default_file_name(self) -> &'static str {
        match self {
            Self::Html => "output.html",
            Self::MindMap => "output.xml",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub disable_toc: bool,
    pub disable_style_framework: bool,
    /// Export date, printed in the report header.
    pub date: String,
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("format error: {source}")]
    Fmt { source: std::fmt::Error },
    #[error("xml error: {source}")]
    Xml { source: quick_xml::Error },
    #[error("rendered output is not utf-8: {source}")]
    Utf8 { source: std::string::FromUtf8Error },
    #[error("mind map needs exactly one book, got {count}")]
    MindMapBookCount { count: usize },
}

impl From<std::fmt::Error> for RenderError {
    fn from(source: std::fmt::Error) -> Self {
        Self::Fmt { source }
    }
}

impl From<quick_xml::Error> for RenderError {
    fn from(source: quick_xml::Error) -> Self {
        Self::Xml { source }
    }
}

impl From<std::string::FromUtf8Error> for RenderError {
    fn from(source: std::string::FromUtf8Error) -> Self {
        Self::Utf8 { source }
    }
}

pub fn render(
    books: &[HighlightedBook],
    format: ReportFormat,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    match format {
        ReportFormat::Html => render_html(books, options),
        ReportFormat::MindMap => match books {
            [book] => render_mindmap(book, options),
            _ => Err(RenderError::MindMapBookCount { count: books.len() }),
        },
    }
}
