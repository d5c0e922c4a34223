//! Renderable trait and CodeFragment for decoupled code generation.
//!
//! Printer nodes describe themselves as fragments; [`CodeBuilder`](crate::CodeBuilder)
//! turns fragments into indented text.

/// Represents a fragment of generated code.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line of code. Embedded line breaks are split and each
    /// resulting line is indented on its own.
    Line(String),
    /// A blank line.
    Blank,
    /// A block with header, body fragments, and optional closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    /// A NatSpec comment line (`/// text`).
    NatSpec(String),
    /// A plain line comment (`// text`).
    Comment(String),
}

impl CodeFragment {
    /// Create a line fragment.
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    /// Create a block fragment closed by `}`.
    pub fn braced(header: impl Into<String>, body: Vec<CodeFragment>) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close: Some("}".to_string()),
        }
    }

    /// Create a NatSpec comment fragment.
    pub fn natspec(s: impl Into<String>) -> Self {
        Self::NatSpec(s.into())
    }

    /// Create a line comment fragment.
    pub fn comment(s: impl Into<String>) -> Self {
        Self::Comment(s.into())
    }

    /// Join groups of fragments with a single blank line between
    /// non-empty groups.
    pub fn spaced(groups: impl IntoIterator<Item = Vec<CodeFragment>>) -> Vec<CodeFragment> {
        let mut out = Vec::new();
        for group in groups.into_iter().filter(|g| !g.is_empty()) {
            if !out.is_empty() {
                out.push(Self::Blank);
            }
            out.extend(group);
        }
        out
    }
}

/// Trait for types that can be rendered to code fragments.
pub trait Renderable {
    /// Convert this node to a sequence of code fragments.
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl Renderable for Vec<CodeFragment> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.clone()
    }
}
