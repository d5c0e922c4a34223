//! Compile operation - submit generated source to the compile service.

use superwizard_deploy::CompileClient;
use superwizard_options::{GenericOptions, print_generic};
use tracing::info;

use crate::reports::CompileReport;

/// Execute the compile operation.
///
/// The client adjusts the source itself, so the plain printout is sent.
/// Service failures end up in the report, never as an error.
pub fn compile(
    options: &GenericOptions,
    client: &CompileClient,
) -> superwizard_options::Result<CompileReport> {
    let source = print_generic(options)?;
    let name = options.name().to_string();

    info!(contract = %name, endpoint = %client.endpoint(), "compiling");
    let outcome = client.compile(&name, &source);

    Ok(CompileReport {
        name,
        endpoint: client.endpoint(),
        outcome,
    })
}

