//! Compile report data structures.

use superwizard_deploy::CompileOutcome;

use super::output::{Output, Report};

/// Result of submitting a contract to the compile service.
#[derive(Debug)]
pub struct CompileReport {
    pub name: String,
    pub endpoint: String,
    pub outcome: CompileOutcome,
}

impl CompileReport {
    pub fn is_success(&self) -> bool {
        self.outcome.success
    }

    /// Number of ABI entries, zero when the ABI is not an array.
    pub fn abi_entries(&self) -> usize {
        self.outcome.abi.as_array().map_or(0, Vec::len)
    }

    /// Bytecode size in bytes, ignoring any `0x` prefix.
    pub fn bytecode_bytes(&self) -> usize {
        let hex = self.outcome.bytecode.trim_start_matches("0x");
        hex.len() / 2
    }
}

impl Report for CompileReport {
    fn render(&self, out: &mut dyn Output) {
        out.key_value("Contract", &self.name);
        out.key_value("Endpoint", &self.endpoint);

        if self.is_success() {
            out.key_value("ABI", &format!("{} entries", self.abi_entries()));
            out.key_value("Bytecode", &format!("{} bytes", self.bytecode_bytes()));
        } else {
            let error = self.outcome.error.as_deref().unwrap_or("unknown error");
            out.warning(&format!("compilation failed: {}", error));
        }
    }
}
