use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use iflry_config::SiteConfig;
use iflry_core::{Document, Settings, StaticMember};
use schemars::{Schema, schema_for};

#[derive(Debug, Parser)]
#[command(
    name = "iflry-schema-gen",
    about = "Emit JSON Schemas for iflry documents, membership datasets and config."
)]
struct Args {
    /// Output directory for schema files.
    #[arg(short = 'o', long = "out", default_value = "schemas")]
    out: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();
    run(args.out)
}

/// File name and schema of every generated file.
fn schemas() -> Vec<(&'static str, Schema)> {
    vec![
        ("document.schema.json", schema_for!(Document)),
        ("settings.schema.json", schema_for!(Settings)),
        ("dataset.schema.json", schema_for!(Vec<StaticMember>)),
        ("config.schema.json", schema_for!(SiteConfig)),
    ]
}

fn write_schema(out: &Path, file: &str, schema: &Schema) -> Result<PathBuf> {
    let path = out.join(file);
    let json = serde_json::to_string_pretty(schema).with_context(|| format!("serialize {file}"))?;
    fs::write(&path, json).with_context(|| format!("write {}", path.display()))?;
    Ok(path)
}

fn run(out: PathBuf) -> Result<()> {
    if !out.exists() {
        fs::create_dir_all(&out).with_context(|| format!("create dir {}", out.display()))?;
    }

    let written = schemas()
        .iter()
        .map(|(file, schema)| write_schema(&out, file, schema))
        .collect::<Result<Vec<_>>>()?;

    println!("Wrote schemas:");
    for path in written {
        println!("  {}", path.display());
    }
    Ok(())
}
