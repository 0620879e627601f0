//! postsync — push a local API collection into a remote workspace.
//!
//! # Usage
//!
//! ```text
//! postsync --api-key <key> --workspace-id <id> --collection-path <file>
//! ```
//!
//! The collection is created when the workspace has no collection with the
//! same name, and replaced in place when it does.

mod client;
mod logging;
mod sync;

use std::process::ExitCode;

use clap::Parser;

use sync::SyncArgs;

#[derive(Parser, Debug)]
#[command(
    name = "postsync",
    version,
    about = "Create or update a collection in a remote workspace",
    long_about = None,
)]
struct Cli {
    #[command(flatten)]
    sync: SyncArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_tracing();

    match cli.sync.run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            logging::report_failure(&err);
            ExitCode::FAILURE
        }
    }
}
