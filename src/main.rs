use std::path::PathBuf;

use anyhow::{Context, Result};

use vecdist_bench::bench::{Blackhole, DistanceCase, Operation};
use vecdist_bench::config::RunConfig;
use vecdist_bench::data;
use vecdist_bench::runner::run_case;

fn main() -> Result<()> {
    env_logger::init();

    // Optional single argument: path to a JSON run config.
    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => RunConfig::from_file(&path)
            .with_context(|| format!("loading run config {}", path.display()))?,
        None => RunConfig::default(),
    };
    log::info!("run config: {config:?}");

    let registry = data::load_embedded().context("loading embedded dataset")?;

    let mut sink = Blackhole;
    for &size in &config.sizes {
        let case = DistanceCase::setup(&registry, size);
        for op in Operation::ALL {
            let report = run_case(&case, op, &config, &mut sink);
            println!(
                "{}",
                serde_json::to_string(&report).context("serializing report")?
            );
        }
    }

    Ok(())
}
