//! Line-oriented text buffer that tracks indentation depth.

use super::{CodeFragment, Indent, Renderable};

/// Accumulates indented lines of source.
///
/// ```
/// use superwizard_codegen::{CodeBuilder, CodeFragment};
///
/// let mut builder = CodeBuilder::solidity();
/// builder.apply_fragment(CodeFragment::braced(
///     "function f() public {",
///     vec![CodeFragment::line("x = 1;")],
/// ));
/// assert_eq!(builder.build(), "function f() public {\n    x = 1;\n}\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    depth: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            depth: 0,
            indent,
            buffer: String::new(),
        }
    }

    pub fn solidity() -> Self {
        Self::new(Indent::SOLIDITY)
    }

    /// Add a line at the current depth.
    ///
    /// Text containing line breaks is split; every piece is indented and
    /// whitespace-only pieces become empty lines.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        for piece in s.split('\n') {
            if !piece.trim().is_empty() {
                self.indent.write(&mut self.buffer, self.depth);
                self.buffer.push_str(piece);
            }
            self.buffer.push('\n');
        }
        self
    }

    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.depth += 1;
        self
    }

    pub fn push_dedent(&mut self) -> &mut Self {
        self.depth = self.depth.saturating_sub(1);
        self
    }

    /// Add a comment line with the given marker, e.g. `//` or `///`.
    pub fn push_comment(&mut self, marker: &str, text: &str) -> &mut Self {
        self.push_line(&format!("{} {}", marker, text))
    }

    /// Emit every fragment of a renderable node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header).push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::NatSpec(text) => {
                self.push_comment("///", &text);
            }
            CodeFragment::Comment(text) => {
                self.push_comment("//", &text);
            }
        }
    }

    /// Consume the builder and return the text.
    pub fn build(self) -> String {
        self.buffer
    }
}
