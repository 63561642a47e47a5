// Rust guideline compliant 2026-10-19

//! Implementation of the `folsync serve` command.

use crate::terminal::print_info;
use anyhow::Result;
use folsync_app::AppContext;
use folsync_server::ServerOptions;

/// Executes the serve command.
///
/// # Arguments
///
/// * `context` - Loaded application context
/// * `bind` - Bind address overriding the configured one
/// * `port` - Port overriding the configured one
///
/// # Errors
///
/// Returns an error if the server cannot start or fails while running.
pub fn execute(context: &AppContext, bind: Option<String>, port: Option<u16>) -> Result<()> {
    let mut options = ServerOptions::from_context(context);
    if let Some(bind) = bind {
        options.bind_addr = bind;
    }
    if let Some(port) = port {
        if port == 0 {
            anyhow::bail!("Port must be greater than 0");
        }
        options.port = port;
    }

    print_info(&format!(
        "Serving {} on http://{}:{}",
        options.dataset_path.display(),
        options.bind_addr,
        options.port
    ));
    folsync_server::run(options)?;
    Ok(())
}
