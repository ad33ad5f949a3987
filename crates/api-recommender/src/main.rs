mod cli;
mod config;
mod display;
mod error;
mod prompt;

use std::io::{self, Write};

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use apis_common::parser;
use apis_common::profiles::ProfileRegistry;
use apis_common::recommend::{Recommender, UniformJitter};

use cli::Cli;
use config::Config;
use display::JsonReport;
use prompt::Prompt;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries the prompts and results.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();
    let registry = ProfileRegistry::builtin();

    if cli.list_profiles {
        display::profiles(&mut io::stdout().lock(), &registry)?;
        return Ok(());
    }

    // 1. Locate and load the directory document
    let config = Config::resolve(cli.readme.clone())?;
    let content = config.load_document()?;
    info!(path = %config.readme_path.display(), bytes = content.len(), "loaded README");

    // 2. Parse it once
    let catalog = parser::parse_catalog(&content);
    info!(
        categories = catalog.category_count(),
        entries = catalog.entry_count(),
        sha256 = catalog.fingerprint(),
        "catalog parsed"
    );

    let mut recommender = Recommender::new(&registry, UniformJitter::from_thread_rng());

    // 3. Scripted request, or ask
    let Some(request) = cli.request(&registry)? else {
        let stdin = io::stdin();
        let mut prompt = Prompt::new(stdin.lock(), io::stdout().lock());
        prompt.run(&catalog, &registry, &mut recommender)?;
        return Ok(());
    };

    info!(interests = ?request.interests, auth = %request.auth, limit = request.limit, "scripted request");
    let results = recommender.recommend(&catalog, &request.interests, request.auth, request.limit);

    let mut out = io::stdout().lock();
    if cli.json {
        let report = JsonReport {
            interests: &request.interests,
            auth: request.auth,
            limit: request.limit,
            document_sha256: catalog.fingerprint(),
            results: &results,
        };
        display::json(&mut out, &report)?;
    } else {
        display::results(
            &mut out,
            &format!("Top {} Personalized API Recommendations", request.limit),
            &results,
        )?;
        writeln!(out)?;
    }
    Ok(())
}
