//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod compile;
mod generate;
mod kinds;
mod networks;
mod output;

pub use compile::CompileReport;
pub use generate::GenerateReport;
pub use kinds::{KindInfo, KindsReport};
pub use networks::{NetworkInfo, NetworksReport};
pub use output::{Report, TerminalOutput};

#[cfg(test)]
pub(crate) mod testing {
    use super::output::Output;

    /// Collects rendered lines, tagged by the method that produced them.
    #[derive(Default)]
    pub struct RecordingOutput {
        pub lines: Vec<String>,
    }

    impl Output for RecordingOutput {
        fn section(&mut self, name: &str) {
            self.lines.push(format!("section {}", name));
        }

        fn key_value(&mut self, key: &str, value: &str) {
            self.lines.push(format!("{} = {}", key, value));
        }

        fn list_item(&mut self, text: &str) {
            self.lines.push(format!("- {}", text));
        }

        fn added_item(&mut self, text: &str) {
            self.lines.push(format!("+ {}", text));
        }

        fn warning(&mut self, msg: &str) {
            self.lines.push(format!("warning {}", msg));
        }

        fn source(&mut self, text: &str) {
            self.lines.push(text.to_string());
        }
    }
}
