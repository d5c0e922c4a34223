//! Networks operation - super token factory deployments.

use superwizard_deploy::{NETWORKS, shorten_address};

use crate::reports::{NetworkInfo, NetworksReport};

const ADDRESS_TAIL: usize = 4;

/// Execute the networks operation.
///
/// With `full` unset factory addresses are abbreviated.
pub fn networks(full: bool) -> NetworksReport {
    let networks = NETWORKS
        .iter()
        .map(|n| NetworkInfo {
            chain_id: n.chain_id,
            name: n.name.to_string(),
            factory: if full {
                n.contract.to_string()
            } else {
                shorten_address(n.contract, ADDRESS_TAIL)
            },
            explorer: n.block_explorer.to_string(),
        })
        .collect();

    NetworksReport { networks }
}
