//! decltree: assemble introspected declarations into a documentation tree.
//!
//! Supports two modes:
//!
//! - **stdin mode**: `decltree < records.json` prints the tree to stdout
//! - **file mode**: `decltree -o build/docs 'records/*.json'` writes the tree,
//!   `search.json` and `undocumented.json` into the output directory

use anyhow::{Context, Result};
use clap::Parser;
use decltree::abstracts::{AbstractLookup, GlobAbstracts, NoAbstracts};
use decltree::pages::{self, EnglishPluralizer};
use decltree::{coverage, render, search, AccessLevel, Config, DocTree, Record};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "decltree",
    about = "Classify declaration records and assemble them into a documentation tree"
)]
struct Cli {
    /// Record files (JSON arrays, glob patterns supported). If omitted, reads from stdin.
    files: Vec<String>,

    /// Output directory (required when files are given)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// JSON configuration file. Flags below override its values.
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Minimum access level to document (private ... open)
    #[arg(long)]
    min_acl: Option<AccessLevel>,

    /// Documented module, in presentation order. Can be specified multiple times.
    #[arg(long = "module")]
    modules: Vec<String>,

    /// Give global declarations their own pages
    #[arg(long)]
    separate_global_declarations: bool,

    /// Hide Objective-C declarations
    #[arg(long, conflicts_with = "hide_swift")]
    hide_objc: bool,

    /// Hide Swift declarations
    #[arg(long)]
    hide_swift: bool,

    /// Glob for per-type abstract files. Can be specified multiple times.
    #[arg(long = "abstract")]
    abstracts: Vec<String>,

    /// Output format: json (default), outline
    #[arg(short = 'f', long, default_value = "json")]
    format: String,

    /// More logging on stderr (-v info, -vv debug)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = resolve_config(&cli)?;

    if cli.files.is_empty() {
        return stdin_mode(&cli, &config);
    }

    file_mode(&cli, &config)
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Load the optional config file, then apply command-line overrides.
fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::from_path(path)
            .with_context(|| format!("failed to load config: {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(level) = cli.min_acl {
        config.min_acl = level;
    }
    if !cli.modules.is_empty() {
        config.documented_modules = cli.modules.clone();
    }
    if !cli.abstracts.is_empty() {
        config.abstract_glob = cli.abstracts.clone();
    }
    config.separate_global_declarations |= cli.separate_global_declarations;
    config.hide_objc |= cli.hide_objc;
    config.hide_swift |= cli.hide_swift;
    if config.hide_objc && config.hide_swift {
        anyhow::bail!("cannot hide both Objective-C and Swift declarations");
    }
    Ok(config)
}

/// stdin mode: read one record array, print the rendered tree to stdout.
fn stdin_mode(cli: &Cli, config: &Config) -> Result<()> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;
    let records: Vec<Record> =
        serde_json::from_str(&input).context("stdin is not a JSON array of records")?;

    let tree = decltree::document(records, config).context("failed to assemble tree")?;
    let renderer = renderer_for(&cli.format)?;
    let pages = pages::assign(&tree, &EnglishPluralizer);
    print!("{}", renderer.render(&tree, &pages)?);
    Ok(())
}

/// file mode: concatenate all record files, write every artifact to the output directory.
fn file_mode(cli: &Cli, config: &Config) -> Result<()> {
    let output_dir = cli
        .output
        .as_deref()
        .context("--output is required when files are given")?;

    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory: {}", output_dir.display()))?;

    let input_files = expand_globs(&cli.files)?;
    let mut records = Vec::new();
    for path in &input_files {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let file_records: Vec<Record> = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        debug!("{}: {} records", path.display(), file_records.len());
        append_records(&mut records, file_records);
    }
    info!("{} records from {} files", records.len(), input_files.len());

    let tree = decltree::document(records, config).context("failed to assemble tree")?;
    let renderer = renderer_for(&cli.format)?;
    let pages = pages::assign(&tree, &EnglishPluralizer);

    let tree_path = output_dir.join(format!("tree.{}", renderer.file_extension()));
    write(&tree_path, &renderer.render(&tree, &pages)?)?;

    let index = search::build(&tree, &pages);
    write(
        &output_dir.join("search.json"),
        &serde_json::to_string_pretty(&index)?,
    )?;

    write_coverage(&tree, config, output_dir)?;
    Ok(())
}

fn write_coverage(tree: &DocTree, config: &Config, output_dir: &Path) -> Result<()> {
    let lookup: Box<dyn AbstractLookup> = if config.abstract_glob.is_empty() {
        Box::new(NoAbstracts)
    } else {
        Box::new(GlobAbstracts::new(&config.abstract_glob))
    };
    let report = coverage::report(tree, lookup.as_ref());
    info!(
        "{}% documented ({}/{})",
        report.percent, report.documented, report.total
    );
    write(
        &output_dir.join("undocumented.json"),
        &serde_json::to_string_pretty(&report)?,
    )
}

fn renderer_for(format: &str) -> Result<Box<dyn render::Renderer>> {
    render::create_renderer(format).with_context(|| format!("unknown format: {}", format))
}

fn write(path: &Path, text: &str) -> Result<()> {
    let mut text = text.to_string();
    if !text.ends_with('\n') {
        text.push('\n');
    }
    fs::write(path, text).with_context(|| format!("failed to write {}", path.display()))
}

/// Append one file's records, shifting its file-local parent indices past
/// the records already collected.
fn append_records(all: &mut Vec<Record>, file_records: Vec<Record>) {
    let offset = all.len();
    all.extend(file_records.into_iter().map(|mut record| {
        record.parent = record.parent.map(|p| p + offset);
        record
    }));
}

/// Expand glob patterns into a list of real file paths.
/// Also handles bare directory paths by scanning for `.json` files.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        // Directories are scanned non-recursively
        if path.is_dir() {
            let entries = fs::read_dir(path)
                .with_context(|| format!("failed to read directory: {}", path.display()))?;
            for entry in entries.flatten() {
                let p = entry.path();
                if p.is_file() && p.extension().and_then(|e| e.to_str()) == Some("json") {
                    files.push(p);
                }
            }
            continue;
        }
        let matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            warn!("no files matched: {}", pattern);
        }
        files.extend(matches);
    }
    // Sort for deterministic output
    files.sort();
    files.dedup();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn record(name: &str, parent: Option<usize>) -> Record {
        Record {
            kind: "source.lang.swift.decl.struct".into(),
            name: name.into(),
            parent,
            ..Default::default()
        }
    }

    #[test]
    fn parent_indices_are_offset_per_file() {
        let mut all = Vec::new();
        append_records(&mut all, vec![record("A", None), record("B", Some(0))]);
        append_records(&mut all, vec![record("C", None), record("D", Some(0))]);
        let parents: Vec<_> = all.iter().map(|r| r.parent).collect();
        assert_eq!(parents, vec![None, Some(0), None, Some(2)]);
    }

    #[test]
    fn directories_expand_to_sorted_json_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.json"), "[]").unwrap();
        fs::write(dir.path().join("a.json"), "[]").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();

        let files = expand_globs(&[dir.path().to_string_lossy().to_string()]).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.json", "b.json"]);
    }

    #[test]
    fn flags_override_config_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"min_acl": "public", "documented_modules": ["A"]}"#).unwrap();

        let cli = Cli::parse_from([
            "decltree",
            "--config",
            path.to_str().unwrap(),
            "--min-acl",
            "internal",
            "--hide-objc",
        ]);
        let config = resolve_config(&cli).unwrap();
        assert_eq!(config.min_acl, AccessLevel::Internal);
        assert_eq!(config.documented_modules, vec!["A"]);
        assert!(config.hide_objc);
    }
}
