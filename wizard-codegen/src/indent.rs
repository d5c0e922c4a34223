//! Indentation unit.

/// One level of indentation, as a number of spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent(pub usize);

impl Indent {
    /// Four spaces, as in the Solidity style guide.
    pub const SOLIDITY: Self = Self(4);

    /// Append `depth` levels of indentation to `buf`.
    pub fn write(&self, buf: &mut String, depth: usize) {
        buf.extend(std::iter::repeat_n(' ', self.0 * depth));
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::SOLIDITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_depth() {
        let mut buf = String::new();
        Indent(2).write(&mut buf, 3);
        assert_eq!(buf, "      ");

        buf.clear();
        Indent::SOLIDITY.write(&mut buf, 0);
        assert!(buf.is_empty());
    }
}
