//! Networks report data structures.

use super::output::{Output, Report};

#[derive(Debug)]
pub struct NetworksReport {
    pub networks: Vec<NetworkInfo>,
}

#[derive(Debug)]
pub struct NetworkInfo {
    pub chain_id: u64,
    pub name: String,
    /// Super token factory address, possibly abbreviated.
    pub factory: String,
    pub explorer: String,
}

impl Report for NetworksReport {
    fn render(&self, out: &mut dyn Output) {
        out.section("Networks");
        for n in &self.networks {
            out.list_item(&format!(
                "{:>4}  {:<13} {}  {}",
                n.chain_id, n.name, n.factory, n.explorer
            ));
        }
    }
}
