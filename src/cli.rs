// src/cli.rs
use std::{error::Error, path::PathBuf};

use clap::Parser;

use crate::{
    card::Card,
    config::{consts::CONFIG_FILE, options::AppOptions},
    filter::{Dimension, FilterController, RangeSelector},
    loader,
    progress::Progress,
};

/// Filter the trip pages of a travel showcase site from the terminal.
#[derive(Debug, Parser)]
#[command(name = "trip_finder_cli", version, about)]
pub struct Args {
    /// Config file (TOML); missing file means defaults
    #[arg(long, default_value = CONFIG_FILE)]
    pub config: PathBuf,

    /// Site root: a local directory or http://host[:port]/prefix
    #[arg(long)]
    pub base: Option<String>,

    /// Trip page to load, relative to the base (repeatable; replaces the configured list)
    #[arg(long = "page", value_name = "PAGE")]
    pub pages: Vec<String>,

    /// Continent to keep (repeatable, substring match, any case)
    #[arg(long = "continent", value_name = "NAME")]
    pub continents: Vec<String>,

    /// Comma-separated country query, e.g. "japán, norvégia"
    #[arg(long)]
    pub country: Option<String>,

    /// Day range LOW-HIGH; either side may be omitted ("3-", "-10")
    #[arg(long, value_parser = parse_range, allow_hyphen_values = true)]
    pub days: Option<(Option<u64>, Option<u64>)>,

    /// Budget range LOW-HIGH in Ft; either side may be omitted
    #[arg(long, value_parser = parse_range, allow_hyphen_values = true)]
    pub budget: Option<(Option<u64>, Option<u64>)>,

    /// Print the continent list and exit
    #[arg(long)]
    pub list_continents: bool,

    /// Print the known countries and exit
    #[arg(long)]
    pub list_countries: bool,

    /// Print autocomplete suggestions for TOKEN and exit
    #[arg(long, value_name = "TOKEN")]
    pub suggest: Option<String>,

    /// Log to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn run() -> Result<(), Box<dyn Error>> {
    run_with(Args::parse())
}

pub fn run_with(args: Args) -> Result<(), Box<dyn Error>> {
    if args.verbose {
        crate::log::init_stderr();
    }

    let mut opts = AppOptions::load_or_default(&args.config);
    if let Some(base) = &args.base {
        opts.source.base = base.clone();
    }
    if !args.pages.is_empty() {
        opts.source.pages = args.pages.clone();
    }

    let mut prog = CliProgress { verbose: args.verbose };
    let store = loader::load_records(&opts.source, Some(&mut prog));
    let mut ctl = FilterController::new(store, &opts.sliders);

    if args.list_continents {
        for c in ctl.continents() { println!("{c}"); }
        return Ok(());
    }
    if args.list_countries {
        for c in ctl.countries().names() { println!("{c}"); }
        return Ok(());
    }
    if let Some(token) = &args.suggest {
        for c in ctl.countries().suggestions_for(token) { println!("{c}"); }
        return Ok(());
    }

    let mut visible: Vec<bool> = Vec::new();
    ctl.set_continents(args.continents.iter().cloned(), &mut visible);
    if let Some(q) = &args.country {
        ctl.on_country_text_change(q, &mut visible);
    }
    if let Some(r) = args.days {
        let (lo, hi) = fill_range(ctl.selector(Dimension::Days), r);
        ctl.on_range_change(Dimension::Days, lo, hi, &mut visible);
    }
    if let Some(r) = args.budget {
        let (lo, hi) = fill_range(ctl.selector(Dimension::Budget), r);
        ctl.on_range_change(Dimension::Budget, lo, hi, &mut visible);
    }
    let lines = visible_lines(&ctl);
    for line in &lines {
        println!("{line}");
    }

    let (dl, dh) = ctl.labels(Dimension::Days);
    let (bl, bh) = ctl.labels(Dimension::Budget);
    eprintln!(
        "{}/{} trips (days {dl}–{dh}, budget {bl}–{bh})",
        lines.len(),
        ctl.store().len()
    );
    Ok(())
}

/// `"3-14"`, `"3-"`, `"-14"`, `"7"` (exactly 7).
pub fn parse_range(s: &str) -> Result<(Option<u64>, Option<u64>), String> {
    let s = s.trim();
    let num = |p: &str| -> Result<Option<u64>, String> {
        let p = p.trim();
        if p.is_empty() {
            return Ok(None);
        }
        p.replace([' ', '_'], "")
            .parse::<u64>()
            .map(Some)
            .map_err(|e| format!("invalid number '{p}': {e}"))
    };
    match s.split_once('-') {
        Some((a, b)) => {
            let (lo, hi) = (num(a)?, num(b)?);
            if let (Some(l), Some(h)) = (lo, hi) {
                if l > h {
                    return Err(format!("invalid range: {s}"));
                }
            }
            Ok((lo, hi))
        }
        None => {
            let v = num(s)?.ok_or_else(|| s!("empty range"))?;
            Ok((Some(v), Some(v)))
        }
    }
}

/// Omitted sides fall back to the selector's domain ends.
fn fill_range(sel: &RangeSelector, (lo, hi): (Option<u64>, Option<u64>)) -> (u64, u64) {
    let (min, max) = sel.domain();
    (lo.unwrap_or(min), hi.unwrap_or(max))
}

/// One output line per record passing the current selection, in store order.
pub fn visible_lines(ctl: &FilterController) -> Vec<String> {
    ctl.visible_indices()
        .into_iter()
        .filter_map(|i| ctl.store().get(i).map(|r| render_line(&Card::from_record(i, r))))
        .collect()
}

fn render_line(card: &Card) -> String {
    let mut line = format!("{} | {}", card.title, card.meta);
    if !card.countries.is_empty() {
        line.push_str(" | ");
        line.push_str(&card.countries);
    }
    if !card.tags.is_empty() {
        line.push_str(" | ");
        line.push_str(&card.tags);
    }
    if let Some(url) = &card.url {
        line.push_str(" | ");
        line.push_str(url);
    }
    line
}

struct CliProgress {
    verbose: bool,
}

impl Progress for CliProgress {
    fn item_failed(&mut self, index: usize, location: &str) {
        if self.verbose {
            eprintln!("skipped #{index}: {location}");
        }
    }
}
