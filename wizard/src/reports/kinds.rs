//! Kinds report data structures.

use superwizard_options::Kind;

use super::output::{Output, Report};

/// Every supported contract kind.
#[derive(Debug)]
pub struct KindsReport {
    pub kinds: Vec<KindInfo>,
}

#[derive(Debug)]
pub struct KindInfo {
    pub kind: Kind,
    pub default_name: String,
    /// Whether the kind's defaults need access control.
    pub access_required: bool,
}

impl Report for KindsReport {
    fn render(&self, out: &mut dyn Output) {
        out.section("Kinds");
        for info in &self.kinds {
            let access = if info.access_required {
                "  (access control)"
            } else {
                ""
            };
            out.list_item(&format!("{:<13} {}{}", info.kind, info.default_name, access));
        }
    }
}
