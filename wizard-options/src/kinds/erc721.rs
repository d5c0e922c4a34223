//! ERC721 non-fungible token.

use serde::{Deserialize, Serialize};
use superwizard_contract::{
    Contract, FunctionDescriptor, FunctionKind, Mutability, ParentReference, Using,
    string_literal,
};

use super::{ContractKind, Kind};
use crate::{
    Access, CommonOptions, Result, RoleGrant, features, require_access_control,
    set_access_control,
};

const GRANT: RoleGrant = RoleGrant::GrantRole;
const EXTENSIONS: &str = "@openzeppelin/contracts/token/ERC721/extensions";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Erc721Options {
    pub name: String,
    pub symbol: String,
    pub base_uri: String,
    pub enumerable: bool,
    pub uri_storage: bool,
    pub burnable: bool,
    pub pausable: bool,
    pub mintable: bool,
    /// Assign token ids from a counter; only meaningful with `mintable`.
    pub incremental: bool,
    pub votes: bool,
    #[serde(flatten)]
    pub common: CommonOptions,
}

impl Default for Erc721Options {
    fn default() -> Self {
        Self {
            name: "MyToken".to_string(),
            symbol: "MTK".to_string(),
            base_uri: String::new(),
            enumerable: false,
            uri_storage: false,
            burnable: false,
            pausable: false,
            mintable: false,
            incremental: false,
            votes: false,
            common: CommonOptions::default(),
        }
    }
}

pub struct Erc721;

impl ContractKind for Erc721 {
    type Options = Erc721Options;

    const KIND: Kind = Kind::Erc721;

    fn build(opts: &Erc721Options) -> Result<Contract> {
        let access = opts
            .common
            .effective_access(Self::access_control_required(opts));

        let mut c = Contract::new(&opts.name);
        c.set_info(opts.common.info.clone());

        c.add_parent(
            ParentReference::new("ERC721", "@openzeppelin/contracts/token/ERC721/ERC721.sol")
                .with_args([string_literal(&opts.name), string_literal(&opts.symbol)]),
        );

        if !opts.base_uri.is_empty() {
            c.add_override(
                format!("return {};", string_literal(&opts.base_uri)),
                &functions::base_uri(),
            );
        }

        if opts.enumerable {
            c.add_parent(extension("ERC721Enumerable"));
            for f in [functions::before_token_transfer(), functions::supports_interface()] {
                c.add_override_parent("ERC721", &f);
                c.add_override_parent("ERC721Enumerable", &f);
            }
        }

        if opts.uri_storage {
            c.add_parent(extension("ERC721URIStorage"));
            for f in [functions::burn(), functions::token_uri()] {
                c.add_override_parent("ERC721", &f);
                c.add_override_parent("ERC721URIStorage", &f);
            }
        }

        if opts.burnable {
            c.add_parent(extension("ERC721Burnable"));
        }

        if opts.pausable {
            let hook = functions::before_token_transfer();
            c.add_override_parent("ERC721", &hook);
            features::add_pausable(&mut c, access, GRANT, &[hook]);
        }

        if opts.mintable {
            add_mintable(&mut c, access, opts.incremental, opts.uri_storage);
        }

        if opts.votes {
            c.add_parent(
                ParentReference::new(
                    "EIP712",
                    "@openzeppelin/contracts/utils/cryptography/draft-EIP712.sol",
                )
                .with_args([string_literal(&opts.name), string_literal("1")]),
            );
            c.add_parent(ParentReference::new(
                "ERC721Votes",
                format!("{}/draft-ERC721Votes.sol", EXTENSIONS),
            ));
            let hook = functions::after_token_transfer();
            c.add_override_parent("ERC721", &hook);
            c.add_override_parent("ERC721Votes", &hook);
        }

        set_access_control(&mut c, access, GRANT);
        if opts.common.upgradeable {
            features::add_guarded_upgradeable(&mut c, access, GRANT);
        }

        Ok(c)
    }

    fn access_control_required(opts: &Erc721Options) -> bool {
        opts.mintable || opts.pausable || opts.common.upgradeable
    }
}

fn extension(name: &str) -> ParentReference {
    ParentReference::new(name, format!("{}/{}.sol", EXTENSIONS, name))
}

fn add_mintable(c: &mut Contract, access: Access, incremental: bool, uri_storage: bool) {
    let safe_mint = functions::safe_mint(incremental, uri_storage);
    require_access_control(c, &safe_mint, access, "MINTER", GRANT);

    if incremental {
        c.add_using(Using::new(
            "Counters",
            "Counters.Counter",
            "@openzeppelin/contracts/utils/Counters.sol",
        ));
        c.add_variable("Counters.Counter private _tokenIdCounter;");
        c.add_function_code("uint256 tokenId = _tokenIdCounter.current();", &safe_mint);
        c.add_function_code("_tokenIdCounter.increment();", &safe_mint);
    }
    c.add_function_code("_safeMint(to, tokenId);", &safe_mint);
    if uri_storage {
        c.add_function_code("_setTokenURI(tokenId, uri);", &safe_mint);
    }
}

mod functions {
    use super::*;

    fn transfer_hook(name: &str) -> FunctionDescriptor {
        FunctionDescriptor::new(name, FunctionKind::Internal)
            .arg("address", "from")
            .arg("address", "to")
            .arg("uint256", "tokenId")
    }

    pub fn before_token_transfer() -> FunctionDescriptor {
        transfer_hook("_beforeTokenTransfer")
    }

    pub fn after_token_transfer() -> FunctionDescriptor {
        transfer_hook("_afterTokenTransfer")
    }

    pub fn base_uri() -> FunctionDescriptor {
        FunctionDescriptor::new("_baseURI", FunctionKind::Internal)
            .mutability(Mutability::Pure)
            .returns("string memory")
    }

    pub fn burn() -> FunctionDescriptor {
        FunctionDescriptor::new("_burn", FunctionKind::Internal).arg("uint256", "tokenId")
    }

    pub fn token_uri() -> FunctionDescriptor {
        FunctionDescriptor::new("tokenURI", FunctionKind::Public)
            .arg("uint256", "tokenId")
            .mutability(Mutability::View)
            .returns("string memory")
    }

    pub fn supports_interface() -> FunctionDescriptor {
        FunctionDescriptor::new("supportsInterface", FunctionKind::Public)
            .arg("bytes4", "interfaceId")
            .mutability(Mutability::View)
            .returns("bool")
    }

    pub fn safe_mint(incremental: bool, uri_storage: bool) -> FunctionDescriptor {
        let mut fd = FunctionDescriptor::new("safeMint", FunctionKind::Public).arg("address", "to");
        if !incremental {
            fd = fd.arg("uint256", "tokenId");
        }
        if uri_storage {
            fd = fd.arg("string memory", "uri");
        }
        fd
    }
}
