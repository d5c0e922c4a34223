//! Linearizes a finished [`Contract`] into Solidity source.
//!
//! Output depends only on the model's final state; every section is emitted
//! in insertion order.

use superwizard_codegen::{CodeBuilder, CodeFragment, Renderable};

use crate::{Contract, Function};

/// Render a contract to source text.
///
/// In omit-all mode the stored source is returned verbatim and nothing else
/// in the model is consulted.
pub fn print_contract(contract: &Contract) -> String {
    if let Some(source) = contract.omitted_source() {
        return source.to_string();
    }

    let mut builder = CodeBuilder::solidity();
    builder.emit(&contract_file(contract));
    builder.build()
}

fn contract_file(contract: &Contract) -> Vec<CodeFragment> {
    let imports: Vec<CodeFragment> = contract
        .import_paths()
        .into_iter()
        .map(|path| CodeFragment::line(format!("import \"{}\";", path)))
        .collect();

    let mut declaration: Vec<CodeFragment> = contract.info().contact_tag().into_iter().collect();
    declaration.push(CodeFragment::Block {
        header: declaration_header(contract),
        body: contract_body(contract),
        close: Some("}".to_string()),
    });

    CodeFragment::spaced([contract.info().header(), imports, declaration])
}

fn declaration_header(contract: &Contract) -> String {
    let parents: Vec<&str> = contract.parents().iter().map(|p| p.name.as_str()).collect();
    if parents.is_empty() {
        format!("contract {} {{", contract.name())
    } else {
        format!("contract {} is {} {{", contract.name(), parents.join(", "))
    }
}

fn contract_body(contract: &Contract) -> Vec<CodeFragment> {
    let usings: Vec<CodeFragment> = contract
        .usings()
        .iter()
        .map(|u| CodeFragment::line(format!("using {} for {};", u.library, u.for_type)))
        .collect();
    let variables: Vec<CodeFragment> = contract
        .variables()
        .iter()
        .map(CodeFragment::line)
        .collect();

    let mut groups: Vec<Vec<CodeFragment>> = vec![usings, variables, constructor(contract)];
    groups.extend(contract.functions().map(Renderable::to_fragments));
    CodeFragment::spaced(groups)
}

fn constructor(contract: &Contract) -> Vec<CodeFragment> {
    let parent_calls: Vec<String> = contract
        .parents()
        .iter()
        .filter(|p| !p.constructor_args.is_empty())
        .map(|p| format!("{}({})", p.name, p.constructor_args.join(", ")))
        .collect();

    if contract.constructor_args().is_empty()
        && contract.constructor_code().is_empty()
        && parent_calls.is_empty()
    {
        return Vec::new();
    }

    let args: Vec<String> = contract
        .constructor_args()
        .iter()
        .map(ToString::to_string)
        .collect();
    let mut header = format!("constructor({})", args.join(", "));
    for call in &parent_calls {
        header.push(' ');
        header.push_str(call);
    }

    vec![body_block(header, contract.constructor_code())]
}

/// A `{ ... }` block, or `{}` on the header line when there is no body.
fn body_block(header: String, code: &[String]) -> CodeFragment {
    if code.is_empty() {
        CodeFragment::line(format!("{} {{}}", header))
    } else {
        CodeFragment::braced(format!("{} {{", header), code.iter().map(CodeFragment::line).collect())
    }
}

impl Function {
    fn signature(&self) -> String {
        let args: Vec<String> = self.args.iter().map(ToString::to_string).collect();
        let mut parts = vec![
            format!("function {}({})", self.name, args.join(", ")),
            self.kind.as_str().to_string(),
        ];
        if let Some(mutability) = self.mutability {
            parts.push(mutability.as_str().to_string());
        }
        if self.is_override {
            if self.override_parents.len() > 1 {
                let bases: Vec<&str> = self.override_parents.iter().map(String::as_str).collect();
                parts.push(format!("override({})", bases.join(", ")));
            } else {
                parts.push("override".to_string());
            }
        }
        parts.extend(self.modifiers.iter().cloned());
        if !self.returns.is_empty() {
            parts.push(format!("returns ({})", self.returns.join(", ")));
        }
        parts.join(" ")
    }

    /// Body for an override that only resolves ambiguity between bases.
    fn forward_to_super(&self) -> String {
        let names: Vec<&str> = self.args.iter().map(|a| a.name.as_str()).collect();
        let call = format!("super.{}({});", self.name, names.join(", "));
        if self.returns.is_empty() {
            call
        } else {
            format!("return {}", call)
        }
    }
}

impl Renderable for Function {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let code = if self.code.is_empty() && !self.override_parents.is_empty() {
            vec![self.forward_to_super()]
        } else {
            self.code.clone()
        };
        vec![body_block(self.signature(), &code)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FunctionDescriptor, FunctionKind, Mutability};

    fn render(function: &Function) -> String {
        let mut b = CodeBuilder::solidity();
        b.emit(function);
        b.build()
    }

    #[test]
    fn test_signature_ordering() {
        let fd = FunctionDescriptor::new("votingDelay", FunctionKind::Public)
            .mutability(Mutability::Pure)
            .returns("uint256");
        let mut c = Contract::new("G");
        c.add_override("return 7200; // 1 day", &fd);
        c.add_modifier("onlyGovernance", &fd);

        let f = c.function(&fd.key()).unwrap();
        assert_eq!(
            f.signature(),
            "function votingDelay() public pure override onlyGovernance returns (uint256)"
        );
    }

    #[test]
    fn test_override_with_several_bases() {
        let fd = FunctionDescriptor::new("_afterTokenTransfer", FunctionKind::Internal)
            .arg("address", "from")
            .arg("address", "to")
            .arg("uint256", "amount");
        let mut c = Contract::new("T");
        c.add_override_parent("ERC20", &fd);
        c.add_override_parent("ERC20Votes", &fd);

        let f = c.function(&fd.key()).unwrap();
        assert_eq!(
            render(f),
            "function _afterTokenTransfer(address from, address to, uint256 amount) internal override(ERC20, ERC20Votes) {\n    super._afterTokenTransfer(from, to, amount);\n}\n"
        );
    }

    #[test]
    fn test_override_forwarding_returns() {
        let fd = FunctionDescriptor::new("supportsInterface", FunctionKind::Public)
            .arg("bytes4", "interfaceId")
            .mutability(Mutability::View)
            .returns("bool");
        let mut c = Contract::new("T");
        c.add_override_parent("ERC721", &fd);

        let f = c.function(&fd.key()).unwrap();
        assert!(render(f).contains("    return super.supportsInterface(interfaceId);\n"));
    }

    #[test]
    fn test_empty_function_prints_inline_braces() {
        let fd = FunctionDescriptor::new("mint", FunctionKind::External);
        let mut c = Contract::new("T");
        c.add_modifier("onlyOwner", &fd);

        let f = c.function(&fd.key()).unwrap();
        assert_eq!(render(f), "function mint() external onlyOwner {}\n");
    }

    #[test]
    fn test_marked_override_without_bases_has_empty_body() {
        let fd = FunctionDescriptor::new("_authorizeUpgrade", FunctionKind::Internal)
            .arg("address", "newImplementation");
        let mut c = Contract::new("T");
        c.add_modifier("onlyOwner", &fd);
        c.mark_override(&fd);

        let f = c.function(&fd.key()).unwrap();
        assert_eq!(
            render(f),
            "function _authorizeUpgrade(address newImplementation) internal override onlyOwner {}\n"
        );
    }

    #[test]
    fn test_omit_all_returns_raw_source() {
        let mut c = Contract::new("T");
        c.add_variable("uint256 x;");
        c.set_omit_all("raw text\n");
        c.add_variable("uint256 y;");
        assert_eq!(print_contract(&c), "raw text\n");
    }
}
