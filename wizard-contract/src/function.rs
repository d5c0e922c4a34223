//! Function descriptors and the accumulated function records they key.

use std::fmt;

use indexmap::IndexSet;

/// Visibility of a generated function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionKind {
    Internal,
    Private,
    Public,
    External,
}

impl FunctionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Internal => "internal",
            Self::Private => "private",
            Self::Public => "public",
            Self::External => "external",
        }
    }
}

impl fmt::Display for FunctionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State mutability of a generated function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mutability {
    Pure,
    View,
    Payable,
}

impl Mutability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pure => "pure",
            Self::View => "view",
            Self::Payable => "payable",
        }
    }
}

/// A typed parameter, used for both function and constructor arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionArgument {
    /// Solidity type including any data location, e.g. `string memory`.
    pub ty: String,
    pub name: String,
}

impl FunctionArgument {
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for FunctionArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.ty, self.name)
    }
}

/// Stable identity of a function inside a contract: name plus kind.
///
/// The argument list is deliberately not part of the key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionKey {
    pub name: String,
    pub kind: FunctionKind,
}

impl fmt::Display for FunctionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' ({})", self.name, self.kind)
    }
}

/// Declarative description of a function, passed to every builder operation
/// that touches a function.
///
/// The first operation referencing a key creates the [`Function`] from its
/// descriptor; later descriptors with the same key only contribute code,
/// modifiers and override markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDescriptor {
    pub name: String,
    pub kind: FunctionKind,
    pub args: Vec<FunctionArgument>,
    pub returns: Vec<String>,
    pub mutability: Option<Mutability>,
}

impl FunctionDescriptor {
    pub fn new(name: impl Into<String>, kind: FunctionKind) -> Self {
        Self {
            name: name.into(),
            kind,
            args: Vec::new(),
            returns: Vec::new(),
            mutability: None,
        }
    }

    /// Add an argument.
    pub fn arg(mut self, ty: impl Into<String>, name: impl Into<String>) -> Self {
        self.args.push(FunctionArgument::new(ty, name));
        self
    }

    /// Add a return type.
    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.returns.push(ty.into());
        self
    }

    pub fn mutability(mut self, mutability: Mutability) -> Self {
        self.mutability = Some(mutability);
        self
    }

    pub fn key(&self) -> FunctionKey {
        FunctionKey {
            name: self.name.clone(),
            kind: self.kind,
        }
    }

    /// Whether another descriptor declares the same signature details.
    pub(crate) fn same_signature(&self, function: &Function) -> bool {
        self.args == function.args
            && self.returns == function.returns
            && self.mutability == function.mutability
    }
}

/// A function record accumulated by the builder operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    pub name: String,
    pub kind: FunctionKind,
    pub args: Vec<FunctionArgument>,
    pub returns: Vec<String>,
    pub mutability: Option<Mutability>,
    /// Body statements in the order they were appended.
    pub code: Vec<String>,
    /// Modifier applications, deduplicated by exact text.
    pub modifiers: Vec<String>,
    /// Whether the signature carries the `override` keyword.
    pub is_override: bool,
    /// Bases named in `override(...)`.
    pub override_parents: IndexSet<String>,
}

impl Function {
    pub(crate) fn from_descriptor(descriptor: &FunctionDescriptor) -> Self {
        Self {
            name: descriptor.name.clone(),
            kind: descriptor.kind,
            args: descriptor.args.clone(),
            returns: descriptor.returns.clone(),
            mutability: descriptor.mutability,
            code: Vec::new(),
            modifiers: Vec::new(),
            is_override: false,
            override_parents: IndexSet::new(),
        }
    }

    pub fn key(&self) -> FunctionKey {
        FunctionKey {
            name: self.name.clone(),
            kind: self.kind,
        }
    }
}
