/// Interactive question-and-answer flow.
///
/// Asks for interests, an auth preference and a result count, re-asking on
/// bad input, then renders the ranked list. Generic over the input and output
/// streams so the whole conversation can be driven from a test.
use std::io::{self, BufRead, Write};

use tracing::info;

use apis_common::model::{AuthPreference, Catalog};
use apis_common::profiles::ProfileRegistry;
use apis_common::recommend::{Recommender, TieBreaker};

use crate::cli::DEFAULT_LIMIT;
use crate::display;
use crate::error::AppError;

pub const MIN_LIMIT: usize = 5;
pub const MAX_LIMIT: usize = 30;

/// Categories shown next to each menu entry.
const MENU_PREVIEW: usize = 3;

/// Outcome of parsing the comma-separated interest menu answer.
#[derive(Debug, PartialEq, Eq)]
enum Selection {
    Empty,
    NotNumeric,
    NothingInRange,
    /// Zero-based menu positions, first occurrence order, no duplicates
    Picked(Vec<usize>),
}

fn parse_selection(raw: &str, menu_len: usize) -> Selection {
    if raw.is_empty() {
        return Selection::Empty;
    }

    let mut picked = Vec::new();
    for part in raw.split(',') {
        let Ok(n) = part.trim().parse::<usize>() else {
            return Selection::NotNumeric;
        };
        if (1..=menu_len).contains(&n) && !picked.contains(&(n - 1)) {
            picked.push(n - 1);
        }
    }

    if picked.is_empty() {
        Selection::NothingInRange
    } else {
        Selection::Picked(picked)
    }
}

pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn ask(&mut self, question: &str) -> io::Result<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before an answer was given",
            ));
        }
        Ok(line.trim().to_string())
    }

    fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    pub fn choose_interests(&mut self, registry: &ProfileRegistry) -> io::Result<Vec<&'static str>> {
        self.say("  What are you interested in? (select numbers, comma-separated)\n")?;
        for (i, (_, profile)) in registry.iter().enumerate() {
            self.say(&format!("    {}. {}", i + 1, profile.label))?;
            self.say(&format!(
                "       ({}, ...)",
                profile.category_preview(MENU_PREVIEW).join(", ")
            ))?;
        }
        self.say("")?;

        let tags: Vec<&'static str> = registry.tags().collect();
        loop {
            let raw = self.ask("  Your choices (e.g. 1,3,5): ")?;
            match parse_selection(&raw, tags.len()) {
                Selection::Picked(positions) => {
                    return Ok(positions.into_iter().map(|i| tags[i]).collect());
                }
                Selection::Empty => self.say("  Please enter at least one choice.")?,
                Selection::NothingInRange => self.say("  Invalid selection. Please try again.")?,
                Selection::NotNumeric => {
                    self.say("  Invalid input. Please enter numbers separated by commas.")?
                }
            }
        }
    }

    pub fn choose_auth(&mut self) -> io::Result<AuthPreference> {
        self.say("\n  Authentication preference?\n")?;
        self.say("    1. No auth required (easiest to start)")?;
        self.say("    2. API key is fine (free signup)")?;
        self.say("    3. Any (include OAuth, etc.)")?;
        self.say("")?;

        loop {
            let raw = self.ask("  Your choice (1-3) [default: 2]: ")?;
            if raw.is_empty() {
                return Ok(AuthPreference::ApiKey);
            }
            match raw.parse::<u32>() {
                Ok(1) => return Ok(AuthPreference::None),
                Ok(2) => return Ok(AuthPreference::ApiKey),
                Ok(3) => return Ok(AuthPreference::Any),
                Ok(_) => self.say("  Please enter 1, 2, or 3.")?,
                Err(_) => self.say("  Please enter a number.")?,
            }
        }
    }

    pub fn choose_limit(&mut self) -> io::Result<usize> {
        self.say("")?;
        let question =
            format!("  How many recommendations? ({MIN_LIMIT}-{MAX_LIMIT}) [default: {DEFAULT_LIMIT}]: ");
        loop {
            let raw = self.ask(&question)?;
            if raw.is_empty() {
                return Ok(DEFAULT_LIMIT);
            }
            match raw.parse::<usize>() {
                Ok(n) if (MIN_LIMIT..=MAX_LIMIT).contains(&n) => return Ok(n),
                Ok(_) => self.say(&format!(
                    "  Please enter a number between {MIN_LIMIT} and {MAX_LIMIT}."
                ))?,
                Err(_) => self.say("  Please enter a number.")?,
            }
        }
    }

    /// Run the whole conversation and print the recommendations.
    pub fn run<T: TieBreaker>(
        &mut self,
        catalog: &Catalog,
        registry: &ProfileRegistry,
        recommender: &mut Recommender<'_, T>,
    ) -> Result<(), AppError> {
        display::header(&mut self.output, "Personalized API Recommendations")?;
        self.say(&format!(
            "\n  Discover APIs from {} public APIs tailored to your interests!\n",
            catalog.entry_count()
        ))?;

        let interests = self.choose_interests(registry)?;
        let labels = interests
            .iter()
            .map(|tag| registry.require(tag).map(|p| p.label))
            .collect::<Result<Vec<_>, _>>()?;
        self.say(&format!("\n  Selected: {}", labels.join(", ")))?;

        let auth = self.choose_auth()?;
        let limit = self.choose_limit()?;
        info!(?interests, %auth, limit, "interactive request");

        let results = recommender.recommend(catalog, &interests, auth, limit);
        display::results(
            &mut self.output,
            &format!("Top {limit} API Recommendations for You"),
            &results,
        )?;
        display::summary(&mut self.output, catalog, &labels)?;
        Ok(())
    }
}
