//! Generate report data structures.

use std::path::PathBuf;

use superwizard_options::Kind;

use super::output::{Output, Report};

/// Generated contract source.
#[derive(Debug)]
pub struct GenerateReport {
    pub kind: Kind,
    /// Contract name after overrides.
    pub name: String,
    pub source: String,
    /// Flags that had no effect.
    pub warnings: Vec<String>,
    /// Set once the source has been written to a file.
    pub written_to: Option<PathBuf>,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.written_to {
            Some(path) => out.added_item(&format!(
                "{} ({} {}, {} lines)",
                path.display(),
                self.kind,
                self.name,
                self.source.lines().count()
            )),
            None => out.source(&self.source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::testing::RecordingOutput;

    fn report(written_to: Option<PathBuf>) -> GenerateReport {
        GenerateReport {
            kind: Kind::Custom,
            name: "Box".to_string(),
            source: "contract Box {\n}\n".to_string(),
            warnings: vec!["--symbol ignored, Custom has no symbol".to_string()],
            written_to,
        }
    }

    #[test]
    fn test_render_to_stdout_emits_source() {
        let mut out = RecordingOutput::default();
        report(None).render(&mut out);
        assert_eq!(
            out.lines,
            vec![
                "warning --symbol ignored, Custom has no symbol",
                "contract Box {\n}\n"
            ]
        );
    }

    #[test]
    fn test_render_written_file_summarizes() {
        let mut out = RecordingOutput::default();
        report(Some(PathBuf::from("Box.sol"))).render(&mut out);
        assert_eq!(out.lines[1], "+ Box.sol (Custom Box, 2 lines)");
    }
}
