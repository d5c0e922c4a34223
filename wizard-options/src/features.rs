//! Feature fragments used by more than one contract kind.

use superwizard_contract::{Contract, FunctionDescriptor, FunctionKind, ParentReference};

use crate::{Access, RoleGrant, require_access_control};

/// Make the contract pausable and guard `hooks` with `whenNotPaused`.
pub fn add_pausable(c: &mut Contract, access: Access, grant: RoleGrant, hooks: &[FunctionDescriptor]) {
    c.add_parent(ParentReference::new(
        "Pausable",
        "@openzeppelin/contracts/security/Pausable.sol",
    ));

    let pause = FunctionDescriptor::new("pause", FunctionKind::Public);
    let unpause = FunctionDescriptor::new("unpause", FunctionKind::Public);
    require_access_control(c, &pause, access, "PAUSER", grant);
    c.add_function_code("_pause();", &pause);
    require_access_control(c, &unpause, access, "PAUSER", grant);
    c.add_function_code("_unpause();", &unpause);

    for hook in hooks {
        c.add_modifier("whenNotPaused", hook);
    }
}

/// Register the UUPS proxy bases.
///
/// Returns the `_authorizeUpgrade` descriptor so the caller can attach the
/// guard that fits its kind.
pub fn add_upgradeable(c: &mut Contract) -> FunctionDescriptor {
    c.add_parent(ParentReference::new(
        "Initializable",
        "@openzeppelin/contracts-upgradeable/proxy/utils/Initializable.sol",
    ));
    c.add_parent(ParentReference::new(
        "UUPSUpgradeable",
        "@openzeppelin/contracts-upgradeable/proxy/utils/UUPSUpgradeable.sol",
    ));

    let authorize = FunctionDescriptor::new("_authorizeUpgrade", FunctionKind::Internal)
        .arg("address", "newImplementation");
    c.mark_override(&authorize);
    authorize
}

/// UUPS bases plus an `UPGRADER` guard on `_authorizeUpgrade`.
pub fn add_guarded_upgradeable(c: &mut Contract, access: Access, grant: RoleGrant) {
    let authorize = add_upgradeable(c);
    require_access_control(c, &authorize, access, "UPGRADER", grant);
}

#[cfg(test)]
mod tests {
    use super::*;
    use superwizard_contract::print_contract;

    #[test]
    fn test_pausable_functions() {
        let hook = FunctionDescriptor::new("_beforeTokenTransfer", FunctionKind::Internal);
        let mut c = Contract::new("T");
        add_pausable(&mut c, Access::Ownable, RoleGrant::GrantRole, &[hook.clone()]);

        let names: Vec<&str> = c.functions().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["pause", "unpause", "_beforeTokenTransfer"]);
        assert_eq!(
            c.function(&hook.key()).unwrap().modifiers,
            vec!["whenNotPaused".to_string()]
        );
    }

    #[test]
    fn test_upgradeable_guard() {
        let mut c = Contract::new("T");
        add_guarded_upgradeable(&mut c, Access::Roles, RoleGrant::GrantRole);

        let printed = print_contract(&c);
        assert!(printed.contains("contract T is Initializable, UUPSUpgradeable, AccessControl {"));
        assert!(printed.contains(
            "function _authorizeUpgrade(address newImplementation) internal override onlyRole(UPGRADER_ROLE) {}"
        ));
    }
}
