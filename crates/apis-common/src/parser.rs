/// Parser for the public-apis style README.
///
/// The document is hand-maintained markdown with a loose structure:
/// - Category headers: `### Category Name`
/// - Table rows: `| [Name](https://url) | Description | Auth | HTTPS | CORS |`
/// - Separator rows: `|---|---|...`
/// - Everything else (prose, other heading levels, blank lines) is noise
///
/// Parser approach: classify each line, then drive a tiny state machine whose
/// only state is the current category. Rows that do not fit are dropped with a
/// debug log; the parser never fails.
use regex::Regex;
use tracing::debug;

use crate::model::{ApiEntry, Catalog};

/// Number of cells a data row needs: link, description, auth, https, cors.
const MIN_ROW_CELLS: usize = 5;

/// What a single line of the document is, as far as the parser cares.
#[derive(Debug, PartialEq, Eq)]
enum LineKind<'a> {
    /// `### Title`, with the title trimmed
    Heading(&'a str),
    /// Table separator such as `|---|---|`
    Separator,
    /// Any other line starting with `|`
    Row(&'a str),
    Ignored,
}

struct LinePatterns {
    heading: Regex,
    link: Regex,
}

impl LinePatterns {
    fn new() -> Self {
        Self {
            heading: Regex::new(r"^###\s+(.+)").expect("valid regex"),
            link: Regex::new(r"^\[(.+?)\]\((https?://[^)]+)\)").expect("valid regex"),
        }
    }

    fn classify<'a>(&self, line: &'a str) -> LineKind<'a> {
        if let Some(caps) = self.heading.captures(line) {
            let title = caps.get(1).map_or("", |m| m.as_str()).trim();
            return LineKind::Heading(title);
        }
        match line.strip_prefix('|') {
            Some(rest) if rest.starts_with("---") => LineKind::Separator,
            Some(_) => LineKind::Row(line),
            None => LineKind::Ignored,
        }
    }
}

/// Parse the README content into an ordered category mapping.
///
/// Rows before the first `###` heading, rows with fewer than five cells, and
/// rows whose first cell is not an `http(s)` markdown link are skipped.
pub fn parse_catalog(content: &str) -> Catalog {
    let patterns = LinePatterns::new();
    let mut catalog = Catalog::new(content);
    let mut current: Option<(usize, String)> = None;

    for (i, raw) in content.lines().enumerate() {
        let line_number = i + 1;
        let line = raw.trim_end();

        match patterns.classify(line) {
            LineKind::Heading(title) => {
                let idx = catalog.open_category(title);
                current = Some((idx, title.to_string()));
            }
            LineKind::Separator | LineKind::Ignored => {}
            LineKind::Row(row) => {
                let Some((idx, category)) = current.as_ref() else {
                    debug!(line_number, "table row before first category heading, skipping");
                    continue;
                };
                match parse_row(&patterns.link, row, category) {
                    Ok(entry) => catalog.push_entry(*idx, entry),
                    Err(reason) => debug!(line_number, reason, "skipping table row"),
                }
            }
        }
    }

    catalog
}

/// Split a table row into trimmed cells, dropping the segments outside the
/// outer pipes.
fn split_cells(row: &str) -> Vec<&str> {
    let segments: Vec<&str> = row.split('|').collect();
    if segments.len() < 2 {
        return Vec::new();
    }
    segments[1..segments.len() - 1]
        .iter()
        .map(|s| s.trim())
        .collect()
}

fn parse_row(link_re: &Regex, row: &str, category: &str) -> Result<ApiEntry, &'static str> {
    let cells = split_cells(row);
    if cells.len() < MIN_ROW_CELLS {
        return Err("too few cells");
    }

    let caps = link_re.captures(cells[0]).ok_or("first cell is not a link")?;

    Ok(ApiEntry {
        name: caps[1].to_string(),
        url: caps[2].to_string(),
        description: cells[1].to_string(),
        auth: cells[2].replace('`', ""),
        https: cells[3].to_string(),
        cors: cells[4].to_string(),
        category: category.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_lines() {
        let p = LinePatterns::new();
        assert_eq!(p.classify("### Animals "), LineKind::Heading("Animals"));
        assert_eq!(p.classify("###   Art & Design"), LineKind::Heading("Art & Design"));
        assert_eq!(p.classify("|---|---|"), LineKind::Separator);
        assert_eq!(p.classify("|:---|:---|"), LineKind::Row("|:---|:---|"));
        assert_eq!(p.classify("| a | b |"), LineKind::Row("| a | b |"));
        assert_eq!(p.classify("## Index"), LineKind::Ignored);
        assert_eq!(p.classify("#### Deeper"), LineKind::Ignored);
        assert_eq!(p.classify("###NoSpace"), LineKind::Ignored);
        assert_eq!(p.classify(""), LineKind::Ignored);
        assert_eq!(p.classify("Some prose | with a pipe"), LineKind::Ignored);
    }

    #[test]
    fn test_single_row() {
        let content = "### Animals\n\
                       | [Cat Facts](https://catfact.ninja) | Daily cat facts | No | Yes | Yes |\n";
        let catalog = parse_catalog(content);

        assert_eq!(catalog.category_count(), 1);
        let animals = catalog.get("Animals").unwrap();
        assert_eq!(animals.entries.len(), 1);

        let e = &animals.entries[0];
        assert_eq!(e.name, "Cat Facts");
        assert_eq!(e.url, "https://catfact.ninja");
        assert_eq!(e.description, "Daily cat facts");
        assert_eq!(e.auth, "No");
        assert_eq!(e.https, "Yes");
        assert_eq!(e.cors, "Yes");
        assert_eq!(e.category, "Animals");
    }

    #[test]
    fn test_full_table_section() {
        let content = r#"# Public APIs

A collective list of free APIs.

## Index

* [Animals](#animals)

### Animals
API | Description | Auth | HTTPS | CORS |
|---|---|---|---|---|
| [Dog CEO](https://dog.ceo/dog-api/) | Random pictures of dogs | No | Yes | Yes |
| [IUCN](http://apiv3.iucnredlist.org/api/v3/docs) | IUCN Red List of Threatened Species | `apiKey` | No | Unknown |

**[⬆ Back to Index](#index)**
### Anime
| API | Description | Auth | HTTPS | CORS |
|:---|:---|:---|:---|:---|
| [Jikan](https://jikan.moe) | Unofficial MyAnimeList API | No | Yes | Yes |
"#;
        let catalog = parse_catalog(content);

        let names: Vec<&str> = catalog.categories().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Animals", "Anime"]);

        let animals = &catalog.get("Animals").unwrap().entries;
        assert_eq!(animals.len(), 2);
        assert_eq!(animals[1].name, "IUCN");
        assert_eq!(animals[1].auth, "apiKey");
        assert_eq!(animals[1].url, "http://apiv3.iucnredlist.org/api/v3/docs");
        assert_eq!(animals[1].cors, "Unknown");

        assert_eq!(catalog.get("Anime").unwrap().entries.len(), 1);
        assert_eq!(catalog.entry_count(), 3);
    }

    #[test]
    fn test_malformed_rows_are_dropped() {
        let content = "### Test\n\
                       | [Short](https://a.io) | Only four | No | Yes |\n\
                       | Plain name | Not a link | No | Yes | Yes |\n\
                       | [FTP](ftp://files.example) | Wrong scheme | No | Yes | Yes |\n\
                       | [Good](https://good.io) | Kept | No | Yes | Yes |\n";
        let catalog = parse_catalog(content);
        let entries = &catalog.get("Test").unwrap().entries;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "Good");
    }

    #[test]
    fn test_rows_before_first_heading_are_dropped() {
        let content = "| [Orphan](https://orphan.io) | No home | No | Yes | Yes |\n\
                       ### Home\n\
                       | [Kept](https://kept.io) | Has a home | No | Yes | Yes |\n";
        let catalog = parse_catalog(content);
        assert_eq!(catalog.entry_count(), 1);
        assert_eq!(catalog.entries().next().unwrap().name, "Kept");
    }

    #[test]
    fn test_extra_cells_and_missing_trailing_pipe() {
        let content = "### Extra\n\
                       | [Six](https://six.io) | Desc | No | Yes | Yes | extra |\n\
                       | [Open](https://open.io) | Desc | No | Yes | Yes\n";
        let catalog = parse_catalog(content);
        let entries = &catalog.get("Extra").unwrap().entries;
        // The second row loses its last cell to the outer-pipe trim and has four.
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "Six");
        assert_eq!(entries[0].cors, "Yes");
    }

    #[test]
    fn test_empty_description_is_kept() {
        let content = "### Misc\n| [Blank](https://blank.io) |  | OAuth | No | No |\n";
        let catalog = parse_catalog(content);
        let e = catalog.entries().next().unwrap();
        assert_eq!(e.description, "");
        assert_eq!(e.auth, "OAuth");
    }

    #[test]
    fn test_repeated_heading_resets_category() {
        let content = "### Dup\n\
                       | [First](https://first.io) | a | No | Yes | Yes |\n\
                       ### Other\n\
                       | [Mid](https://mid.io) | b | No | Yes | Yes |\n\
                       ### Dup\n\
                       | [Second](https://second.io) | c | No | Yes | Yes |\n";
        let catalog = parse_catalog(content);
        let names: Vec<&str> = catalog.categories().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Dup", "Other"]);
        let dup = &catalog.get("Dup").unwrap().entries;
        assert_eq!(dup.len(), 1);
        assert_eq!(dup[0].name, "Second");
    }

    #[test]
    fn test_empty_heading_section_is_kept() {
        let catalog = parse_catalog("### Empty\n\nNothing here.\n### Full\n| [X](https://x.io) | d | No | No | No |\n");
        assert_eq!(catalog.category_count(), 2);
        assert!(catalog.get("Empty").unwrap().entries.is_empty());
    }

    #[test]
    fn test_crlf_line_endings() {
        let content = "### Win\r\n| [Crlf](https://crlf.io) | d | No | Yes | Yes |\r\n";
        let catalog = parse_catalog(content);
        let e = catalog.entries().next().unwrap();
        assert_eq!(e.category, "Win");
        assert_eq!(e.cors, "Yes");
    }

    #[test]
    fn test_every_entry_belongs_to_its_category() {
        let content = "### A\n| [a](https://a.io) | d | No | Yes | Yes |\n\
                       ### B\n| [b](https://b.io) | d | No | Yes | Yes |\n\
                       | [b2](https://b2.io) | d | No | Yes | Yes |\n";
        let catalog = parse_catalog(content);
        for category in catalog.categories() {
            for entry in &category.entries {
                assert_eq!(entry.category, category.name);
            }
        }
    }

    #[test]
    fn test_empty_document() {
        let catalog = parse_catalog("");
        assert!(catalog.is_empty());
        assert_eq!(catalog.category_count(), 0);
    }

    /// Parses a real public-apis README when `PUBLIC_APIS_README` points at one.
    #[test]
    fn test_parse_real_readme() {
        let Ok(path) = std::env::var("PUBLIC_APIS_README") else {
            eprintln!("skipping test_parse_real_readme: PUBLIC_APIS_README not set");
            return;
        };
        let Ok(content) = std::fs::read_to_string(&path) else {
            eprintln!("skipping test_parse_real_readme: {path} not readable");
            return;
        };

        let catalog = parse_catalog(&content);
        assert!(catalog.category_count() > 30, "expected >30 categories");
        assert!(catalog.entry_count() > 500, "expected >500 entries");
        assert!(catalog.get("Animals").is_some());
        eprintln!(
            "Parsed {} entries across {} categories",
            catalog.entry_count(),
            catalog.category_count()
        );
    }
}
