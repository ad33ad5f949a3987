/// Text and JSON rendering of recommendation results.
///
/// All functions write to any `io::Write`, so stdout in production and a
/// `Vec<u8>` in tests.
use std::io::{self, Write};

use serde::Serialize;

use apis_common::model::{AuthPreference, Catalog, ScoredApi};
use apis_common::profiles::ProfileRegistry;

const RULE_WIDTH: usize = 60;

pub fn header<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(out, "\n{rule}")?;
    writeln!(out, "  {title}")?;
    writeln!(out, "{rule}")
}

pub fn entry<W: Write>(out: &mut W, rank: usize, scored: &ScoredApi<'_>) -> io::Result<()> {
    let api = scored.entry;
    let auth = if api.requires_auth() {
        api.auth.as_str()
    } else {
        "None (free)"
    };
    let https = if api.supports_https() { "Yes" } else { "No" };

    writeln!(out, "\n  #{rank} {}", api.name)?;
    writeln!(out, "      {}", api.description)?;
    writeln!(out, "      Category: {}", api.category)?;
    writeln!(out, "      Auth: {auth} | HTTPS: {https} | CORS: {}", api.cors)?;
    writeln!(out, "      URL: {}", api.url)?;
    writeln!(out, "      Match score: {:.1}", scored.score)
}

/// Header plus ranked entries, or a notice when nothing came back.
pub fn results<W: Write>(out: &mut W, title: &str, results: &[ScoredApi<'_>]) -> io::Result<()> {
    header(out, title)?;
    if results.is_empty() {
        writeln!(out, "\n  No matching APIs found.")?;
    }
    for (i, scored) in results.iter().enumerate() {
        entry(out, i + 1, scored)?;
    }
    Ok(())
}

/// Closing block of the interactive flow.
pub fn summary<W: Write>(out: &mut W, catalog: &Catalog, labels: &[&str]) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(out, "\n{rule}")?;
    writeln!(
        out,
        "  Scored {} APIs across {} categories",
        catalog.entry_count(),
        catalog.category_count()
    )?;
    writeln!(out, "  Based on interests: {}", labels.join(", "))?;
    writeln!(out, "{rule}\n")
}

pub fn profiles<W: Write>(out: &mut W, registry: &ProfileRegistry) -> io::Result<()> {
    for (tag, profile) in registry.iter() {
        writeln!(out, "{tag:<14} {}", profile.label)?;
        writeln!(out, "{:<14} {}", "", profile.categories.join(", "))?;
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub interests: &'a [&'static str],
    pub auth: AuthPreference,
    pub limit: usize,
    pub document_sha256: &'a str,
    pub results: &'a [ScoredApi<'a>],
}

pub fn json<W: Write>(out: &mut W, report: &JsonReport<'_>) -> Result<(), serde_json::Error> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out).map_err(serde_json::Error::io)
}
