// SPDX-License-Identifier: MIT
//
// sculpt — a terminal explorer for sculpture color palettes.
//
// This is the presentation shell around the sculpt-palette engine: it
// parses two selections (palette name, distribution name), asks the
// engine for a grid, and prints the 25 circles as a 5×5 block of
// truecolor swatches, each labeled through the vocabulary's reverse
// lookup. All the interesting logic lives in crates/sculpt-palette;
// this binary only enumerates names, calls generate, and renders.
//
// Direct ANSI escape output, no TUI framework — one shot, no raw mode.
//
// Usage:
//   sculpt                          # warm palette, random distribution
//   sculpt sunset waves             # explicit selections
//   sculpt oneOff random --seed 7   # reproducible output
//   sculpt --list                   # enumerate selectable names

use std::env;
use std::process;

use sculpt_palette::{
    ColorName, DEFAULT_DISTRIBUTION, DEFAULT_PALETTE, DistributionKind,
    RecipeKind, SwatchGrid,
};

/// Circles per rendered row.
const ROW_WIDTH: usize = 5;

/// Width of one swatch cell: "● " plus the longest label ("darkPurple")
/// plus two spaces of gutter.
const CELL_WIDTH: usize = 14;

// ─── Command line ───────────────────────────────────────────────────────────

/// Parsed command-line selections.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Cli {
    palette: String,
    distribution: String,
    seed: Option<u32>,
    list: bool,
    help: bool,
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            palette: DEFAULT_PALETTE.to_string(),
            distribution: DEFAULT_DISTRIBUTION.to_string(),
            seed: None,
            list: false,
            help: false,
        }
    }
}

/// Parse arguments: up to two positionals (palette, distribution) plus
/// `--seed <u32>`, `--list`, `--help`.
fn parse_args(args: &[String]) -> Result<Cli, String> {
    let mut cli = Cli::default();
    let mut positionals = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => cli.help = true,
            "--list" | "-l" => cli.list = true,
            "--seed" | "-s" => {
                let value = iter
                    .next()
                    .ok_or_else(|| "--seed needs a value".to_string())?;
                let seed = value
                    .parse::<u32>()
                    .map_err(|_| format!("invalid seed '{value}'"))?;
                cli.seed = Some(seed);
            }
            other if other.starts_with('-') => {
                return Err(format!("unknown flag '{other}'"));
            }
            other => positionals.push(other.to_string()),
        }
    }

    match positionals.len() {
        0 => {}
        1 => cli.palette = positionals.remove(0),
        2 => {
            cli.palette = positionals.remove(0);
            cli.distribution = positionals.remove(0);
        }
        n => return Err(format!("expected at most 2 names, got {n}")),
    }

    Ok(cli)
}

// ─── Rendering ──────────────────────────────────────────────────────────────

/// A filled circle in the given vocabulary color (24-bit foreground).
fn circle(color: ColorName) -> String {
    let (r, g, b) = color.rgb8();
    format!("\x1b[38;2;{r};{g};{b}m\u{25cf}\x1b[0m")
}

/// The swatch label, recovered from the display value. A color outside
/// the vocabulary would render as "unknown" rather than crash the shell.
fn label_of(color: ColorName) -> &'static str {
    ColorName::from_hex(color.hex()).map_or("unknown", ColorName::label)
}

/// Render the grid as ROW_WIDTH swatches per line.
fn render(grid: &SwatchGrid) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} \u{00b7} {} (seed {})\n\n",
        grid.palette,
        grid.distribution.name(),
        grid.seed,
    ));

    for row in grid.colors.chunks(ROW_WIDTH) {
        for &color in row {
            let cell = format!("{} {}", circle(color), label_of(color));
            out.push_str(&cell);
            // The escape codes don't occupy columns; pad by visible width.
            let visible = 2 + label_of(color).len();
            out.push_str(&" ".repeat(CELL_WIDTH.saturating_sub(visible)));
        }
        out.push('\n');
    }
    out
}

/// The `--list` output: every selectable name, in presentation order.
fn render_list() -> String {
    let mut out = String::from("palettes:\n");
    for recipe in RecipeKind::all() {
        out.push_str(&format!("  {}\n", recipe.name()));
    }
    out.push_str("distributions:\n");
    for dist in DistributionKind::all() {
        out.push_str(&format!("  {}\n", dist.name()));
    }
    out
}

const USAGE: &str = "\
Usage: sculpt [PALETTE] [DISTRIBUTION] [--seed N] [--list]

  PALETTE        palette name (default: warm; unknown names fall back
                 to solid blue)
  DISTRIBUTION   distribution name (default: random)
  -s, --seed N   fixed seed for reproducible output
  -l, --list     list selectable palette and distribution names
  -h, --help     show this help
";

// ─── Entry point ────────────────────────────────────────────────────────────

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let cli = parse_args(&args).unwrap_or_else(|e| {
        eprintln!("sculpt: {e}");
        process::exit(2);
    });

    if cli.help {
        print!("{USAGE}");
        return;
    }
    if cli.list {
        print!("{}", render_list());
        return;
    }

    let result = match cli.seed {
        Some(seed) => SwatchGrid::generate(&cli.palette, &cli.distribution, seed),
        None => SwatchGrid::generate_random(&cli.palette, &cli.distribution),
    };

    match result {
        Ok(grid) => print!("{}", render(&grid)),
        Err(e) => {
            eprintln!("sculpt: {e}");
            process::exit(1);
        }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
