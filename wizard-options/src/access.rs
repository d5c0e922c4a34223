//! Access-control fragments shared by the option builders.

use superwizard_contract::{Contract, FunctionDescriptor, ParentReference};

use crate::Access;

const OWNABLE_PATH: &str = "@openzeppelin/contracts/access/Ownable.sol";
const ACCESS_CONTROL_PATH: &str = "@openzeppelin/contracts/access/AccessControl.sol";

/// The function used to hand a role to the deployer.
///
/// OpenZeppelin-based kinds use `_grantRole`; the Superfluid kinds keep the
/// older `_setupRole`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleGrant {
    GrantRole,
    SetupRole,
}

impl RoleGrant {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleGrant::GrantRole => "_grantRole",
            RoleGrant::SetupRole => "_setupRole",
        }
    }

    fn statement(&self, role: &str) -> String {
        format!("{}({}, msg.sender);", self.as_str(), role)
    }
}

/// Register the base contract for `access`.
///
/// For roles, the admin grant is added only the first time `AccessControl`
/// is registered.
pub fn set_access_control(c: &mut Contract, access: Access, grant: RoleGrant) {
    match access {
        Access::None => {}
        Access::Ownable => {
            c.add_parent(ParentReference::new("Ownable", OWNABLE_PATH));
        }
        Access::Roles => {
            if c.add_parent(ParentReference::new("AccessControl", ACCESS_CONTROL_PATH)) {
                c.add_constructor_code(grant.statement("DEFAULT_ADMIN_ROLE"));
            }
        }
    }
}

/// Restrict `function` to the owner, or to holders of `<role>_ROLE`.
///
/// `Access::None` falls back to ownable: a feature that needs access control
/// never ships unguarded.
pub fn require_access_control(
    c: &mut Contract,
    function: &FunctionDescriptor,
    access: Access,
    role: &str,
    grant: RoleGrant,
) {
    let access = access.or_ownable();
    set_access_control(c, access, grant);

    match access {
        Access::Roles => {
            let role_id = declare_role(c, role, grant);
            c.add_modifier(format!("onlyRole({})", role_id), function);
        }
        Access::Ownable | Access::None => {
            c.add_modifier("onlyOwner", function);
        }
    }
}

/// Declare `<role>_ROLE` and grant it to the deployer, once.
///
/// Returns the role identifier.
pub fn declare_role(c: &mut Contract, role: &str, grant: RoleGrant) -> String {
    let role_id = format!("{}_ROLE", role);
    let declaration = format!(
        "bytes32 public constant {id} = keccak256(\"{id}\");",
        id = role_id
    );
    if !c.has_variable(&declaration) {
        c.add_variable(declaration);
        c.add_constructor_code(grant.statement(&role_id));
    }
    role_id
}

#[cfg(test)]
mod tests {
    use super::*;
    use superwizard_contract::FunctionKind;

    fn mint() -> FunctionDescriptor {
        FunctionDescriptor::new("mint", FunctionKind::Public)
    }

    #[test]
    fn test_none_falls_back_to_ownable() {
        let mut c = Contract::new("T");
        require_access_control(&mut c, &mint(), Access::None, "MINTER", RoleGrant::GrantRole);

        assert!(c.has_parent("Ownable"));
        let f = c.function(&mint().key()).unwrap();
        assert_eq!(f.modifiers, vec!["onlyOwner".to_string()]);
    }

    #[test]
    fn test_roles_declared_once() {
        let mut c = Contract::new("T");
        let burn = FunctionDescriptor::new("burn", FunctionKind::Public);
        require_access_control(&mut c, &mint(), Access::Roles, "MINTER", RoleGrant::SetupRole);
        require_access_control(&mut c, &burn, Access::Roles, "MINTER", RoleGrant::SetupRole);

        assert_eq!(c.variables().len(), 1);
        assert_eq!(
            c.constructor_code(),
            [
                "_setupRole(DEFAULT_ADMIN_ROLE, msg.sender);",
                "_setupRole(MINTER_ROLE, msg.sender);",
            ]
        );
        let f = c.function(&burn.key()).unwrap();
        assert_eq!(f.modifiers, vec!["onlyRole(MINTER_ROLE)".to_string()]);
    }

    #[test]
    fn test_set_access_none_is_noop() {
        let mut c = Contract::new("T");
        set_access_control(&mut c, Access::None, RoleGrant::GrantRole);
        assert!(c.parents().is_empty());
    }
}
