use anyhow::{Context, Result};
use gem_cli::batch::{BatchJob, BatchOptions, BatchResult, default_jobs, run_batch};
use gem_map::GemEngine;
use gem_model::CodeFamily;
use gem_standards::{GemSources, tables_root};
use tracing::{info, warn};

use crate::cli::{BatchArgs, LookupArgs, QueryArgs, TableArgs};
use crate::summary::{print_lookup, print_query, print_tables};

/// Resolves table locations and loads every table.
pub fn load_engine(args: &TableArgs) -> Result<GemEngine> {
    let sources = match &args.manifest {
        Some(manifest) => GemSources::from_manifest(manifest)
            .with_context(|| format!("read table manifest {}", manifest.display()))?,
        None => {
            let dir = args
                .tables_dir
                .clone()
                .unwrap_or_else(|| tables_root(&args.release));
            GemSources::from_dir(&dir, &args.release)
        }
    };
    GemEngine::load(&sources).context("load GEM tables")
}

pub fn run_batch_command(args: &BatchArgs, tables: &TableArgs) -> Result<Vec<BatchResult>> {
    let jobs = if args.roots.is_empty() {
        if args.mode.is_some() {
            warn!("--mode applies only to explicit roots; using default roots");
        }
        default_jobs()
    } else {
        let mode = args.mode.clone().unwrap_or_default();
        args.roots
            .iter()
            .map(|root| BatchJob::new(root, mode.as_str()))
            .collect()
    };
    if jobs.is_empty() {
        warn!("no batch roots to process");
        return Ok(Vec::new());
    }

    let engine = load_engine(tables)?;
    let options = BatchOptions {
        output_dir: args.output_dir.clone(),
        pipeline: args.pipeline.into(),
    };
    info!(jobs = jobs.len(), pipeline = %options.pipeline, "start mapping");
    jobs.iter()
        .map(|job| run_batch(&engine, job, &options))
        .collect()
}

pub fn run_query(args: &QueryArgs, tables: &TableArgs) -> Result<()> {
    let engine = load_engine(tables)?;
    let family = CodeFamily::from(args.mode);
    let pipeline = args.pipeline.into();
    let outcome = engine.crosswalk(family).run(pipeline, &args.codes);
    if args.json {
        let json = serde_json::to_string_pretty(&outcome).context("serialize result")?;
        println!("{json}");
    } else {
        print_query(family, pipeline, &outcome);
    }
    Ok(())
}

pub fn run_lookup(args: &LookupArgs, tables: &TableArgs) -> Result<()> {
    let engine = load_engine(tables)?;
    let family = CodeFamily::from(args.mode);
    print_lookup(engine.crosswalk(family), &args.code);
    Ok(())
}

pub fn run_tables(tables: &TableArgs) -> Result<()> {
    let engine = load_engine(tables)?;
    print_tables(&engine);
    Ok(())
}
