#![deny(unsafe_code)]
//! CLI binary for rulegrid.
//!
//! Subcommands:
//! - `generate` — expand a seed row under a rule, print the grid, write SVG/PNG
//! - `table` — print a rule's eight pattern bindings

mod error;

use clap::{Args, Parser, Subcommand};
use error::CliError;
use rulegrid_core::{Recipe, Rule, SeedSpec};
use rulegrid_export::{to_vector_document, write_svg};
use std::path::{Path, PathBuf};
use std::process;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Rule used when neither `--rule` nor a recipe gives one.
const DEFAULT_RULE: u8 = 30;
/// Row and column count used when neither flags nor a recipe give one.
const DEFAULT_SIZE: usize = 20;

#[derive(Parser)]
#[command(name = "rulegrid", about = "Elementary cellular automaton art generator")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Log at debug level (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a grid from a rule and seed row, optionally exporting it.
    Generate(GenerateArgs),
    /// Print the pattern -> output bindings of a rule.
    Table {
        /// Rule index (0-255).
        #[arg(short, long)]
        rule: u32,
    },
}

#[derive(Args, Default)]
struct GenerateArgs {
    /// Recipe JSON file supplying defaults; explicit flags override it.
    #[arg(long)]
    recipe: Option<PathBuf>,

    /// Rule index (0-255).
    #[arg(short, long)]
    rule: Option<u32>,

    /// Number of rows (5-50), seed row included.
    #[arg(short = 'R', long)]
    rows: Option<usize>,

    /// Number of columns (5-50).
    #[arg(short = 'C', long)]
    cols: Option<usize>,

    /// Seed row pattern of 0/1 or ./# characters, one per column.
    #[arg(long, conflicts_with = "random")]
    seed_row: Option<String>,

    /// Fill the seed row randomly from this PRNG seed.
    #[arg(long)]
    random: Option<u64>,

    /// Cell edge length in pixels (8-32).
    #[arg(long)]
    cell_size: Option<u32>,

    /// Corner radius in pixels (0-10); non-zero merges connected cells.
    #[arg(long)]
    radius: Option<u32>,

    /// Write SVG to this path.
    #[arg(long)]
    svg: Option<PathBuf>,

    /// Write a PNG snapshot to this path.
    #[arg(long)]
    png: Option<PathBuf>,

    /// Write the effective recipe as JSON to this path.
    #[arg(long)]
    save_recipe: Option<PathBuf>,
}

/// Loads a recipe file. Unreadable files are I/O errors, malformed JSON is an
/// input error.
fn load_recipe(path: &Path) -> Result<Recipe, CliError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| CliError::Io(format!("cannot read {}: {e}", path.display())))?;
    serde_json::from_str(&text)
        .map_err(|e| CliError::Input(format!("invalid recipe {}: {e}", path.display())))
}

/// Merges the recipe file (if any) with explicit flags and validates the result.
fn build_recipe(args: &GenerateArgs) -> Result<Recipe, CliError> {
    let mut recipe = match &args.recipe {
        Some(path) => load_recipe(path)?,
        None => Recipe::new(Rule::from(DEFAULT_RULE), DEFAULT_SIZE, DEFAULT_SIZE),
    };

    if let Some(index) = args.rule {
        recipe.rule = Rule::new(index)?;
    }
    if let Some(rows) = args.rows {
        recipe.rows = rows;
    }
    if let Some(cols) = args.cols {
        recipe.cols = cols;
    }
    if let Some(pattern) = &args.seed_row {
        recipe.seed = SeedSpec::Pattern {
            pattern: pattern.clone(),
        };
    }
    if let Some(seed) = args.random {
        recipe.seed = SeedSpec::Random { seed };
    }
    if let Some(cell_size) = args.cell_size {
        recipe.cell_size = cell_size;
    }
    if let Some(radius) = args.radius {
        recipe.corner_radius = radius;
    }

    recipe.validate()?;
    Ok(recipe)
}

fn generate(args: GenerateArgs, json: bool) -> Result<(), CliError> {
    let recipe = build_recipe(&args)?;
    debug!(?recipe, "effective recipe");

    let grid = recipe.generate()?;
    let doc = to_vector_document(&grid, recipe.cell_size, recipe.corner_radius)?;

    if let Some(path) = &args.svg {
        write_svg(&doc, path)?;
        info!(path = %path.display(), rects = doc.rects.len(), "svg written");
    }
    if let Some(path) = &args.png {
        rulegrid_export::snapshot::write_png(&grid, recipe.cell_size, path)?;
        info!(path = %path.display(), "png written");
    }
    if let Some(path) = &args.save_recipe {
        let text = serde_json::to_string_pretty(&recipe)?;
        std::fs::write(path, text)
            .map_err(|e| CliError::Io(format!("cannot write {}: {e}", path.display())))?;
    }

    if json {
        let lines: Vec<String> = grid.to_text().lines().map(String::from).collect();
        let info = serde_json::json!({
            "rule": recipe.rule.index(),
            "rows": recipe.rows,
            "cols": recipe.cols,
            "cell_size": recipe.cell_size,
            "corner_radius": recipe.corner_radius,
            "filled": grid.filled_count(),
            "rects": doc.rects.len(),
            "grid": lines,
            "svg": args.svg.as_ref().map(|p| p.display().to_string()),
            "png": args.png.as_ref().map(|p| p.display().to_string()),
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        print!("{grid}");
        eprintln!(
            "rule {} ({}x{}, {} filled, {} rects)",
            recipe.rule,
            recipe.rows,
            recipe.cols,
            grid.filled_count(),
            doc.rects.len()
        );
    }
    Ok(())
}

fn table(index: u32, json: bool) -> Result<(), CliError> {
    let rule = Rule::new(index)?;
    let table = rule.table();
    if json {
        let bindings: Vec<serde_json::Value> = table
            .bindings()
            .iter()
            .map(|&(pattern, out)| serde_json::json!({"pattern": pattern, "output": u8::from(out)}))
            .collect();
        let info = serde_json::json!({
            "rule": rule.index(),
            "bits": table.bits(),
            "bindings": bindings,
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("rule {rule} ({})", table.bits());
        for (pattern, out) in table.bindings() {
            println!("  {pattern} -> {}", u8::from(out));
        }
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Generate(args) => generate(args, cli.json),
        Command::Table { rule } => table(rule, cli.json),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "rulegrid=debug" } else { "rulegrid=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rulegrid_core::GridError;

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_generate_flags() {
        let cli = Cli::try_parse_from([
            "rulegrid", "--json", "generate", "-r", "90", "-R", "8", "-C", "15", "--radius", "3",
        ])
        .unwrap();
        assert!(cli.json);
        match cli.command {
            Command::Generate(args) => {
                assert_eq!(args.rule, Some(90));
                assert_eq!(args.rows, Some(8));
                assert_eq!(args.cols, Some(15));
                assert_eq!(args.radius, Some(3));
            }
            Command::Table { .. } => panic!("expected generate"),
        }
    }

    #[test]
    fn seed_row_conflicts_with_random() {
        let result = Cli::try_parse_from([
            "rulegrid", "generate", "--seed-row", "..#..", "--random", "4",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn build_recipe_defaults() {
        let recipe = build_recipe(&GenerateArgs::default()).unwrap();
        assert_eq!(
            recipe,
            Recipe::new(Rule::from(DEFAULT_RULE), DEFAULT_SIZE, DEFAULT_SIZE)
        );
    }

    #[test]
    fn build_recipe_rejects_bad_rule() {
        let args = GenerateArgs {
            rule: Some(256),
            ..Default::default()
        };
        match build_recipe(&args) {
            Err(CliError::Grid(GridError::InvalidRuleIndex(256))) => {}
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn build_recipe_checks_seed_length_against_cols() {
        let args = GenerateArgs {
            cols: Some(6),
            seed_row: Some("..#..".into()),
            ..Default::default()
        };
        let err = build_recipe(&args).unwrap_err();
        assert_eq!(err.exit_code(), 10);
    }

    #[test]
    fn flags_override_recipe_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recipe.json");
        std::fs::write(
            &path,
            r#"{"rule": 90, "rows": 8, "cols": 15, "corner_radius": 2}"#,
        )
        .unwrap();
        let args = GenerateArgs {
            recipe: Some(path),
            rows: Some(10),
            ..Default::default()
        };
        let recipe = build_recipe(&args).unwrap();
        assert_eq!(recipe.rule, Rule::from(90));
        assert_eq!(recipe.rows, 10);
        assert_eq!(recipe.cols, 15);
        assert_eq!(recipe.corner_radius, 2);
    }

    #[test]
    fn malformed_recipe_is_input_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recipe.json");
        std::fs::write(&path, "{not json").unwrap();
        let args = GenerateArgs {
            recipe: Some(path),
            ..Default::default()
        };
        assert_eq!(build_recipe(&args).unwrap_err().exit_code(), 12);
    }

    #[test]
    fn missing_recipe_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let args = GenerateArgs {
            recipe: Some(dir.path().join("absent.json")),
            ..Default::default()
        };
        assert_eq!(build_recipe(&args).unwrap_err().exit_code(), 11);
    }

    #[test]
    fn generate_writes_requested_files() {
        let dir = tempfile::tempdir().unwrap();
        let svg = dir.path().join("out.svg");
        let png = dir.path().join("out.png");
        let saved = dir.path().join("saved.json");
        let args = GenerateArgs {
            rule: Some(30),
            rows: Some(14),
            cols: Some(14),
            seed_row: Some("......#.......".into()),
            radius: Some(3),
            svg: Some(svg.clone()),
            png: Some(png.clone()),
            save_recipe: Some(saved.clone()),
            ..Default::default()
        };
        generate(args, true).unwrap();
        let markup = std::fs::read_to_string(&svg).unwrap();
        assert!(markup.starts_with("<svg width=\"140\" height=\"140\""));
        assert!(markup.contains("rx=\"3\" ry=\"3\""));
        assert!(png.exists());
        let restored: Recipe =
            serde_json::from_str(&std::fs::read_to_string(&saved).unwrap()).unwrap();
        assert_eq!(restored.rule, Rule::from(30));
        assert_eq!(restored.corner_radius, 3);
    }

    #[test]
    fn table_rejects_out_of_range_rule() {
        assert_eq!(table(1000, false).unwrap_err().exit_code(), 10);
        assert!(table(110, true).is_ok());
    }
}
