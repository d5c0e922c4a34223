//! Networks with a deployed super token factory.

/// A network and its Superfluid super token factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Network {
    pub chain_id: u64,
    pub name: &'static str,
    /// Factory contract address, or a placeholder for unknown networks.
    pub contract: &'static str,
    pub block_explorer: &'static str,
}

pub const NETWORKS: [Network; 3] = [
    Network {
        chain_id: 1,
        name: "Mainnet",
        contract: "0x0422689cc4087b6B7280e0a7e7F655200ec86Ae1",
        block_explorer: "https://etherscan.io",
    },
    Network {
        chain_id: 100,
        name: "Gnosis Chain",
        contract: "0x23410e2659380784498509698ed70E414D384880",
        block_explorer: "https://gnosisscan.io",
    },
    Network {
        chain_id: 137,
        name: "Polygon",
        contract: "0x2C90719f25B10Fc5646c82DA3240C76Fa5BcCF34",
        block_explorer: "https://polygonscan.com",
    },
];

/// Look up a chain id, falling back to an "unknown network" entry.
pub fn network_data(chain_id: u64) -> Network {
    NETWORKS
        .into_iter()
        .find(|n| n.chain_id == chain_id)
        .unwrap_or(Network {
            chain_id,
            name: "Unknown Network",
            contract: "No Contract Found for Network",
            block_explorer: "https://etherscan.io",
        })
}

/// `0x1234...abcdef` style abbreviation: the first six characters and the
/// last `gap`.
pub fn shorten_address(address: &str, gap: usize) -> String {
    if address.is_empty() {
        return String::new();
    }
    let chars: Vec<char> = address.chars().collect();
    let head: String = chars.iter().take(6).collect();
    // A zero gap keeps the whole address, as slicing from -0 does.
    let tail: String = if gap == 0 {
        address.to_string()
    } else {
        chars[chars.len().saturating_sub(gap)..].iter().collect()
    };
    format!("{}...{}", head, tail)
}
