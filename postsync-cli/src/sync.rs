//! Run parameters and the `postsync` entrypoint.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use postsync_engine::{pipeline, SyncInputs, Upserted};

use crate::client::{PostmanClient, DEFAULT_API_URL};

/// Parameters for a sync run. Each may also come from the environment; the
/// `INPUT_*` names are what a CI action runner exports for action inputs.
#[derive(Args, Debug)]
pub struct SyncArgs {
    /// API key for the collection service.
    #[arg(long, env = "INPUT_API-KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Id of the workspace to write the collection into.
    #[arg(long, env = "INPUT_WORKSPACE-ID")]
    pub workspace_id: Option<String>,

    /// Path to the collection JSON file.
    #[arg(long, env = "INPUT_COLLECTION-PATH")]
    pub collection_path: Option<String>,

    /// Base URL of the collection service API.
    #[arg(long, env = "POSTMAN_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Per-request timeout in seconds.
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: u64,
}

impl SyncArgs {
    pub fn run(self) -> Result<Upserted> {
        let api_key = self
            .api_key
            .or_else(|| std::env::var("POSTMAN_API_KEY").ok());
        let inputs = SyncInputs::new(api_key, self.workspace_id, self.collection_path)?;

        let client = PostmanClient::new(
            &self.api_url,
            inputs.api_key().clone(),
            Duration::from_secs(self.timeout_secs),
        );
        let upserted = pipeline::run(&client, &inputs).with_context(|| {
            format!("sync failed for '{}'", inputs.collection_path().display())
        })?;
        print_result(&upserted);
        Ok(upserted)
    }
}

fn print_result(upserted: &Upserted) {
    println!(
        "{} {} collection '{}' in workspace '{}'",
        "✓".green(),
        upserted.action,
        upserted.collection.name,
        upserted.workspace.name
    );
    if !upserted.collection.uid.is_empty() {
        println!("  uid: {}", upserted.collection.uid);
    }
}
