//! The contract model and its builder operations.
//!
//! Every operation is total and either idempotent or monotonic: nothing is
//! ever removed or reordered once added, so option handlers can call them
//! conditionally, in any order, and redundantly.

use std::collections::HashSet;

use indexmap::{IndexMap, IndexSet};
use tracing::{debug, trace};

use crate::{
    ContractError, Function, FunctionArgument, FunctionDescriptor, FunctionKey, Info,
};

/// A base contract the generated contract inherits from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentReference {
    pub name: String,
    /// Import path of the source file declaring the parent.
    pub path: String,
    /// Expressions passed to the parent's constructor, already rendered.
    pub constructor_args: Vec<String>,
}

impl ParentReference {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            constructor_args: Vec::new(),
        }
    }

    /// Set the parent's constructor arguments.
    pub fn with_args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.constructor_args = args.into_iter().map(Into::into).collect();
        self
    }
}

/// A `using <library> for <type>;` directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Using {
    pub library: String,
    pub for_type: String,
    pub path: String,
}

impl Using {
    pub fn new(
        library: impl Into<String>,
        for_type: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            library: library.into(),
            for_type: for_type.into(),
            path: path.into(),
        }
    }
}

/// In-memory model of one generated contract.
#[derive(Debug, Clone)]
pub struct Contract {
    name: String,
    info: Info,
    parents: Vec<ParentReference>,
    usings: Vec<Using>,
    variables: Vec<String>,
    constructor_args: Vec<FunctionArgument>,
    constructor_code: Vec<String>,
    functions: IndexMap<FunctionKey, Function>,
    overrides: Vec<(FunctionKey, String)>,
    conflicts: IndexSet<FunctionKey>,
    omitted: Option<String>,
}

impl Contract {
    /// Create an empty contract with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            info: Info::default(),
            parents: Vec::new(),
            usings: Vec::new(),
            variables: Vec::new(),
            constructor_args: Vec::new(),
            constructor_code: Vec::new(),
            functions: IndexMap::new(),
            overrides: Vec::new(),
            conflicts: IndexSet::new(),
            omitted: None,
        }
    }

    // =========================================================================
    // Builder operations
    // =========================================================================

    /// Register a parent. Returns `false` (and changes nothing) when a parent
    /// with the same name is already registered.
    pub fn add_parent(&mut self, parent: ParentReference) -> bool {
        if self.parents.iter().any(|p| p.name == parent.name) {
            debug!(parent = %parent.name, contract = %self.name, "parent already registered");
            return false;
        }
        self.parents.push(parent);
        true
    }

    /// Append a raw state variable declaration.
    pub fn add_variable(&mut self, text: impl Into<String>) {
        self.variables.push(text.into());
    }

    /// Append a `using` directive unless an identical one exists.
    pub fn add_using(&mut self, using: Using) {
        if !self.usings.contains(&using) {
            self.usings.push(using);
        }
    }

    /// Append a constructor parameter. Uniqueness is the caller's
    /// responsibility and is checked by [`Contract::validate`].
    pub fn add_constructor_argument(&mut self, arg: FunctionArgument) {
        self.constructor_args.push(arg);
    }

    /// Append a constructor statement.
    pub fn add_constructor_code(&mut self, line: impl Into<String>) {
        self.constructor_code.push(line.into());
    }

    /// Append a statement to the function described by `descriptor`,
    /// creating the function on first reference.
    pub fn add_function_code(&mut self, line: impl Into<String>, descriptor: &FunctionDescriptor) {
        self.function_mut(descriptor).code.push(line.into());
    }

    /// Apply a modifier to a function. Applying the same modifier twice is a
    /// no-op.
    pub fn add_modifier(&mut self, modifier: impl Into<String>, descriptor: &FunctionDescriptor) {
        let modifier = modifier.into();
        let function = self.function_mut(descriptor);
        if !function.modifiers.contains(&modifier) {
            function.modifiers.push(modifier);
        }
    }

    /// Mark a function as overriding and append `line` to its body.
    pub fn add_override(&mut self, line: impl Into<String>, descriptor: &FunctionDescriptor) {
        let line = line.into();
        let function = self.function_mut(descriptor);
        function.is_override = true;
        function.code.push(line.clone());
        self.overrides.push((descriptor.key(), line));
    }

    /// Mark a function as overriding `parent` without adding code.
    pub fn add_override_parent(
        &mut self,
        parent: impl Into<String>,
        descriptor: &FunctionDescriptor,
    ) {
        let function = self.function_mut(descriptor);
        function.is_override = true;
        function.override_parents.insert(parent.into());
    }

    /// Mark a function as overriding without adding code or naming a base.
    pub fn mark_override(&mut self, descriptor: &FunctionDescriptor) {
        self.function_mut(descriptor).is_override = true;
    }

    pub fn set_info(&mut self, info: Info) {
        self.info = info;
    }

    /// Switch the contract to emit `source` verbatim.
    ///
    /// Structured operations stay legal afterwards but no longer affect the
    /// printed output.
    pub fn set_omit_all(&mut self, source: impl Into<String>) {
        debug!(contract = %self.name, "switching to pre-rendered source");
        self.omitted = Some(source.into());
    }

    fn function_mut(&mut self, descriptor: &FunctionDescriptor) -> &mut Function {
        let key = descriptor.key();
        if let Some(existing) = self.functions.get(&key) {
            if !descriptor.same_signature(existing) {
                debug!(function = %key, "descriptor differs from first registration");
                self.conflicts.insert(key.clone());
            }
        } else {
            trace!(function = %key, contract = %self.name, "creating function");
        }
        self.functions
            .entry(key)
            .or_insert_with(|| Function::from_descriptor(descriptor))
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn info(&self) -> &Info {
        &self.info
    }

    pub fn parents(&self) -> &[ParentReference] {
        &self.parents
    }

    pub fn has_parent(&self, name: &str) -> bool {
        self.parents.iter().any(|p| p.name == name)
    }

    pub fn usings(&self) -> &[Using] {
        &self.usings
    }

    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    pub fn has_variable(&self, text: &str) -> bool {
        self.variables.iter().any(|v| v == text)
    }

    pub fn constructor_args(&self) -> &[FunctionArgument] {
        &self.constructor_args
    }

    pub fn constructor_code(&self) -> &[String] {
        &self.constructor_code
    }

    /// Functions in the order they were first referenced.
    pub fn functions(&self) -> impl Iterator<Item = &Function> {
        self.functions.values()
    }

    pub fn function(&self, key: &FunctionKey) -> Option<&Function> {
        self.functions.get(key)
    }

    /// Override registrations in call order.
    pub fn overrides(&self) -> &[(FunctionKey, String)] {
        &self.overrides
    }

    /// Import paths in first-seen order: parents first, then `using` libraries.
    pub fn import_paths(&self) -> IndexSet<&str> {
        self.parents
            .iter()
            .map(|p| p.path.as_str())
            .chain(self.usings.iter().map(|u| u.path.as_str()))
            .collect()
    }

    pub fn is_omit_all(&self) -> bool {
        self.omitted.is_some()
    }

    /// The pre-rendered source, when the contract is in omit-all mode.
    pub fn omitted_source(&self) -> Option<&str> {
        self.omitted.as_deref()
    }

    /// Check the caller-contract rules the builder operations do not enforce.
    pub fn validate(&self) -> Result<(), ContractError> {
        if !is_identifier(&self.name) {
            return Err(ContractError::InvalidName {
                name: self.name.clone(),
            });
        }
        if self.is_omit_all() {
            return Ok(());
        }

        let mut seen = HashSet::new();
        for arg in &self.constructor_args {
            if !seen.insert(arg.name.as_str()) {
                return Err(ContractError::DuplicateConstructorArgument {
                    name: arg.name.clone(),
                });
            }
        }

        if let Some(key) = self.conflicts.first() {
            return Err(ContractError::InconsistentFunction { key: key.clone() });
        }
        Ok(())
    }
}

/// Whether `s` is a valid Solidity identifier.
fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Render `s` as a Solidity string literal.
pub fn string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FunctionKind;

    fn mint() -> FunctionDescriptor {
        FunctionDescriptor::new("mint", FunctionKind::Public)
            .arg("address", "to")
            .arg("uint256", "amount")
    }

    #[test]
    fn test_add_parent_is_idempotent_by_name() {
        let mut c = Contract::new("Token");
        assert!(c.add_parent(ParentReference::new("ERC20", "a/ERC20.sol")));
        assert!(c.add_parent(ParentReference::new("Ownable", "a/Ownable.sol")));
        assert!(!c.add_parent(ParentReference::new("ERC20", "b/Other.sol").with_args(["1"])));

        let names: Vec<_> = c.parents().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["ERC20", "Ownable"]);
        assert_eq!(c.parents()[0].path, "a/ERC20.sol");
        assert!(c.parents()[0].constructor_args.is_empty());
    }

    #[test]
    fn test_variables_keep_duplicates() {
        let mut c = Contract::new("Token");
        c.add_variable("uint256 a;");
        c.add_variable("uint256 a;");
        assert_eq!(c.variables().len(), 2);
        assert!(c.has_variable("uint256 a;"));
        assert!(!c.has_variable("uint256 b;"));
    }

    #[test]
    fn test_function_created_lazily_with_first_args() {
        let mut c = Contract::new("Token");
        c.add_modifier("onlyOwner", &mint());
        c.add_function_code(
            "_mint(to, amount);",
            &FunctionDescriptor::new("mint", FunctionKind::Public).arg("uint256", "x"),
        );

        let f = c.function(&mint().key()).unwrap();
        assert_eq!(f.args, mint().args);
        assert_eq!(f.code, ["_mint(to, amount);"]);
        assert_eq!(f.modifiers, ["onlyOwner"]);
    }

    #[test]
    fn test_modifiers_dedup() {
        let mut c = Contract::new("Token");
        c.add_modifier("onlyOwner", &mint());
        c.add_modifier("whenNotPaused", &mint());
        c.add_modifier("onlyOwner", &mint());
        let f = c.function(&mint().key()).unwrap();
        assert_eq!(f.modifiers, ["onlyOwner", "whenNotPaused"]);
    }

    #[test]
    fn test_code_and_overrides_interleave_in_call_order() {
        let mut c = Contract::new("Token");
        c.add_function_code("a();", &mint());
        c.add_override("b();", &mint());
        c.add_function_code("c();", &mint());
        c.add_override("d();", &mint());

        let f = c.function(&mint().key()).unwrap();
        assert_eq!(f.code, ["a();", "b();", "c();", "d();"]);
        assert!(f.is_override);
        let registered: Vec<_> = c.overrides().iter().map(|(_, l)| l.as_str()).collect();
        assert_eq!(registered, ["b();", "d();"]);
    }

    #[test]
    fn test_functions_keep_insertion_order() {
        let mut c = Contract::new("Token");
        let pause = FunctionDescriptor::new("pause", FunctionKind::Public);
        c.add_function_code("_pause();", &pause);
        c.add_function_code("_mint(to, amount);", &mint());
        c.add_modifier("onlyOwner", &pause);

        let names: Vec<_> = c.functions().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["pause", "mint"]);
    }

    #[test]
    fn test_import_paths_are_distinct() {
        let mut c = Contract::new("Token");
        c.add_parent(ParentReference::new("SuperTokenBase", "base/SuperTokenBase.sol"));
        c.add_parent(ParentReference::new("ISuperToken", "base/SuperTokenBase.sol"));
        c.add_using(Using::new("Counters", "Counters.Counter", "utils/Counters.sol"));
        c.add_using(Using::new("Counters", "Counters.Counter", "utils/Counters.sol"));

        let paths: Vec<_> = c.import_paths().into_iter().collect();
        assert_eq!(paths, ["base/SuperTokenBase.sol", "utils/Counters.sol"]);
        assert_eq!(c.usings().len(), 1);
    }

    #[test]
    fn test_validate_accepts_well_formed_contract() {
        let mut c = Contract::new("MyToken");
        c.add_constructor_argument(FunctionArgument::new("address", "factory"));
        c.add_function_code("_mint(to, amount);", &mint());
        c.add_modifier("onlyOwner", &mint());
        assert_eq!(c.validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_bad_name() {
        assert!(matches!(
            Contract::new("My Token").validate(),
            Err(ContractError::InvalidName { .. })
        ));
        assert!(matches!(
            Contract::new("").validate(),
            Err(ContractError::InvalidName { .. })
        ));
        assert!(matches!(
            Contract::new("1Token").validate(),
            Err(ContractError::InvalidName { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_duplicate_constructor_argument() {
        let mut c = Contract::new("MyToken");
        c.add_constructor_argument(FunctionArgument::new("address", "factory"));
        c.add_constructor_argument(FunctionArgument::new("uint256", "factory"));
        assert_eq!(
            c.validate(),
            Err(ContractError::DuplicateConstructorArgument {
                name: "factory".to_string()
            })
        );
    }

    #[test]
    fn test_validate_rejects_inconsistent_descriptor() {
        let mut c = Contract::new("MyToken");
        c.add_function_code("_mint(to, amount);", &mint());
        c.add_modifier(
            "onlyOwner",
            &FunctionDescriptor::new("mint", FunctionKind::Public),
        );
        assert_eq!(
            c.validate(),
            Err(ContractError::InconsistentFunction { key: mint().key() })
        );
    }

    #[test]
    fn test_validate_ignores_structure_in_omit_all_mode() {
        let mut c = Contract::new("MyToken");
        c.add_constructor_argument(FunctionArgument::new("address", "a"));
        c.add_constructor_argument(FunctionArgument::new("address", "a"));
        c.set_omit_all("contract MyToken {}");
        assert_eq!(c.validate(), Ok(()));
    }

    #[test]
    fn test_string_literal_escapes() {
        assert_eq!(string_literal("MyToken"), "\"MyToken\"");
        assert_eq!(string_literal("a\"b\\c"), "\"a\\\"b\\\\c\"");
    }
}
