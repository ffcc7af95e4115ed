//! CLI for exploring morphquery matching and verbalization.
//!
//! Useful for trying romanization conventions against a word list and for
//! checking what a query JSON payload reads like in English.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use morphquery::prelude::*;

#[derive(Parser)]
#[command(name = "morphquery")]
#[command(about = "Transliteration-aware matching and query verbalization", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Match a romanized query against a word list
    Match {
        /// Word list file (one form per line)
        #[arg(short, long)]
        forms: PathBuf,

        /// The (romanized or Greek) query to match
        term: String,

        /// Maximum number of matches
        #[arg(short, long, default_value = "8")]
        limit: usize,
    },

    /// Verbalize a query JSON document as English text
    Verbalize {
        /// Query JSON file; reads stdin when omitted
        #[arg(short, long)]
        query: Option<PathBuf>,
    },

    /// Show the attribute schema, with enabled/disabled state for a word
    Attributes {
        /// Attribute assignments as id=value pairs, e.g. -w class=noun
        #[arg(short, long)]
        word: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Match { forms, term, limit } => run_match(&forms, &term, limit),
        Commands::Verbalize { query } => run_verbalize(query.as_deref()),
        Commands::Attributes { word } => run_attributes(&word),
    }
}

fn load_forms(path: &std::path::Path) -> Result<Vec<String>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open word list: {}", path.display()))?;
    let reader = BufReader::new(file);
    let mut forms = Vec::new();
    for line in reader.lines() {
        let line = line.context("Failed to read word list")?;
        let form = line.trim();
        if !form.is_empty() {
            forms.push(form.to_string());
        }
    }
    Ok(forms)
}

fn run_match(forms_path: &std::path::Path, term: &str, limit: usize) -> Result<()> {
    let forms = load_forms(forms_path)?;
    let table = TransliterationTable::koine_greek();
    let matcher = TransliteratedMatcher::new(&table);

    let matches = matcher.matches(&forms, term, limit);
    if matches.is_empty() {
        println!("No matches for '{}' among {} forms", term, forms.len());
    } else {
        for form in matches {
            println!("{}", form);
        }
    }
    Ok(())
}

fn run_verbalize(query_path: Option<&std::path::Path>) -> Result<()> {
    let json = match query_path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read query: {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read query from stdin")?;
            buffer
        }
    };

    let query: Query = serde_json::from_str(&json).context("Failed to parse query JSON")?;
    let schema = TextSchema::koine_greek_nt();
    let spans = verbalize_query(&schema, &query);

    if spans.is_empty() {
        println!("an empty query");
    } else {
        println!("{}", spans_to_string(&spans));
    }
    Ok(())
}

fn run_attributes(assignments: &[String]) -> Result<()> {
    let mut attributes = AttributeMap::default();
    for assignment in assignments {
        let (id, value) = assignment
            .split_once('=')
            .with_context(|| format!("Expected id=value, got '{}'", assignment))?;
        attributes.insert(id.to_string(), value.to_string());
    }
    let attributes = (!attributes.is_empty()).then_some(&attributes);

    let schema = TextSchema::koine_greek_nt();
    for rule in schema.rules() {
        let state = if schema.is_enabled(&rule.id, attributes) {
            "enabled"
        } else {
            "disabled"
        };
        println!("{:<12} {:<18} {}", rule.id, rule.display_name, state);
    }
    Ok(())
}
