//! Kinds operation - supported contract kinds.

use superwizard_options::{GenericOptions, Kind};

use crate::reports::{KindInfo, KindsReport};

/// Execute the kinds operation.
pub fn kinds() -> KindsReport {
    let kinds = Kind::ALL
        .into_iter()
        .map(|kind| {
            let defaults = GenericOptions::defaults(kind);
            KindInfo {
                kind,
                default_name: defaults.name().to_string(),
                access_required: defaults.access_control_required(),
            }
        })
        .collect();

    KindsReport { kinds }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds_lists_every_kind_in_order() {
        let report = kinds();
        let listed: Vec<Kind> = report.kinds.iter().map(|k| k.kind).collect();
        assert_eq!(listed, Kind::ALL.to_vec());
    }

    #[test]
    fn test_default_pure_token_needs_no_access_control() {
        let report = kinds();
        let pure = &report.kinds[0];
        assert_eq!(pure.default_name, "MyToken");
        assert!(!pure.access_required);
    }
}
