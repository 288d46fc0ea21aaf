//! Precache command - hash the site for offline use
//!
//! Writes the manifest the service worker imports, and optionally reports
//! which cached URLs the new build supersedes.

use anyhow::{Context, Result};
use clap::Args;
use std::path::{Path, PathBuf};

use gbweb_shared::{MAX_MANIFEST_BYTES, PrecacheManifest, read_file_with_limit};

/// Default manifest file name, relative to the site directory.
pub const DEFAULT_MANIFEST_NAME: &str = "precache-manifest.js";

/// Arguments for the precache command
#[derive(Args)]
pub struct PrecacheArgs {
    /// Site directory to precache
    pub dir: PathBuf,

    /// Output file (defaults to <DIR>/precache-manifest.js, or .json with --json)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Previous manifest (JSON) to diff against
    #[arg(long)]
    pub previous: Option<PathBuf>,

    /// Write a bare JSON array instead of the worker script
    #[arg(long)]
    pub json: bool,

    /// Extra URLs to leave out (e.g. the service worker itself)
    #[arg(long = "exclude")]
    pub exclude: Vec<String>,
}

/// Execute the precache command
pub fn execute(args: PrecacheArgs) -> Result<()> {
    let out = args.out.clone().unwrap_or_else(|| {
        let name = if args.json {
            Path::new(DEFAULT_MANIFEST_NAME).with_extension("json")
        } else {
            PathBuf::from(DEFAULT_MANIFEST_NAME)
        };
        args.dir.join(name)
    });

    let own_url = url_within(&args.dir, &out);
    let mut exclude: Vec<&str> = args.exclude.iter().map(String::as_str).collect();
    if let Some(url) = &own_url {
        exclude.push(url.as_str());
    }

    let manifest = PrecacheManifest::from_dir(&args.dir, &exclude)
        .with_context(|| format!("Failed to scan {}", args.dir.display()))?;

    let content = if args.json {
        manifest.to_json()?
    } else {
        manifest.to_worker_script()?
    };
    std::fs::write(&out, content)
        .with_context(|| format!("Failed to write {}", out.display()))?;
    tracing::info!(
        "Precached {} files -> {}",
        manifest.entries.len(),
        out.display()
    );

    if let Some(previous) = &args.previous {
        for url in superseded(previous, &manifest)? {
            println!("superseded: {url}");
        }
    }
    Ok(())
}

/// URL of `file` relative to `dir`, if it lies inside the site.
///
/// Both sides are canonicalized, so `./site/m.js` or `site/js/../m.js` still
/// match `site`. `file` itself need not exist yet.
fn url_within(dir: &Path, file: &Path) -> Option<String> {
    let dir = dir.canonicalize().ok()?;
    let parent = match file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file = parent.canonicalize().ok()?.join(file.file_name()?);
    let rel = file.strip_prefix(&dir).ok()?;
    Some(rel.to_str()?.replace('\\', "/"))
}

/// URLs of `previous` that `manifest` replaces or drops.
fn superseded(previous: &Path, manifest: &PrecacheManifest) -> Result<Vec<String>> {
    let bytes = read_file_with_limit(previous, MAX_MANIFEST_BYTES)?;
    let json = String::from_utf8(bytes)
        .with_context(|| format!("Manifest is not UTF-8: {}", previous.display()))?;
    let old = PrecacheManifest::from_json(&json)
        .with_context(|| format!("Failed to parse manifest: {}", previous.display()))?;
    Ok(old.superseded_by(manifest))
}
