//! Publish and unpublish command handlers.

use crate::cli::{CallerArgs, PublishArgs};
use crate::config::AppConfig;
use crate::log;
use crate::publish::{self, FsEdgeStore, FsProjectStore, PublishOptions};
use anyhow::Result;

/// Publish named slugs, or the whole store with `--all`.
pub fn run_publish(args: &PublishArgs, config: &AppConfig) -> Result<()> {
    let projects = FsProjectStore::from_config(config);
    let edge = FsEdgeStore::from_config(config);
    let caller = args.caller.caller();
    let opts = PublishOptions {
        password: args.password.clone(),
        minify: args.minify.unwrap_or(config.publish.minify),
    };

    if args.all {
        let results = publish::publish_all(&projects, &edge, config, &caller, &opts)?;
        let failures = results.iter().filter(|(_, r)| r.is_err()).count();
        for (slug, result) in &results {
            if let Err(err) = result {
                log!("error"; "{slug}: {err}");
            }
        }
        if failures > 0 {
            anyhow::bail!("{failures} of {} publish(es) failed", results.len());
        }
        return Ok(());
    }

    for slug in &args.slugs {
        publish::publish(&projects, &edge, config, &caller, slug, &opts)?;
    }
    Ok(())
}

/// Take one project offline.
pub fn run_unpublish(slug: &str, caller: &CallerArgs, config: &AppConfig) -> Result<()> {
    let projects = FsProjectStore::from_config(config);
    let edge = FsEdgeStore::from_config(config);
    publish::unpublish(&projects, &edge, &caller.caller(), slug)?;
    Ok(())
}
