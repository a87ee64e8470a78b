use crate::commands::render::load_spec;
use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use polaris_components::render_spec;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Args)]
pub struct BuildArgs {
    /// Project directory (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,
}

/// Outcome of building a directory of component specs
#[derive(Debug, Default)]
pub struct BuildReport {
    pub written: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, String)>,
}

pub fn build(args: BuildArgs, cwd: &Path) -> Result<()> {
    let root = cwd.join(&args.path);
    let config = Config::load(&root)?;
    let src_dir = config.get_src_dir(&root);
    let out_dir = match args.out_dir {
        Some(out) => root.join(out),
        None => config.get_out_dir(&root),
    };

    if !src_dir.exists() {
        return Err(anyhow!("Source directory does not exist: {:?}", src_dir));
    }

    println!("{}", "🔨 Rendering component specs...".bright_blue().bold());

    let report = build_directory(&src_dir, &out_dir)?;

    for path in &report.written {
        println!("  {} {}", "✓".green(), path.display());
    }
    for (path, error) in &report.failed {
        eprintln!("  {} {} - {}", "✗".red(), path.display(), error.red());
    }

    println!();
    if report.failed.is_empty() {
        println!("{} Rendered {} files successfully", "✅".green(), report.written.len());
        Ok(())
    } else {
        Err(anyhow!(
            "Rendered {} files, {} errors",
            report.written.len(),
            report.failed.len()
        ))
    }
}

/// Render every `*.json` spec under `src_dir` into a mirrored `.html` file under `out_dir`.
///
/// A failing spec is recorded and never written; the rest still render.
pub fn build_directory(src_dir: &Path, out_dir: &Path) -> Result<BuildReport> {
    let mut report = BuildReport::default();

    for spec_file in find_spec_files(src_dir) {
        let relative_path = spec_file.strip_prefix(src_dir).unwrap_or(&spec_file).to_path_buf();

        let rendered = load_spec(&spec_file).and_then(|spec| Ok(render_spec(&spec)?));
        match rendered {
            Ok(html) => {
                let output_file = out_dir.join(&relative_path).with_extension("html");
                if let Some(parent) = output_file.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::write(&output_file, html)?;
                report.written.push(output_file);
            }
            Err(err) => {
                tracing::debug!(file = %relative_path.display(), "Spec failed to render");
                report.failed.push((relative_path, format!("{:#}", err)));
            }
        }
    }

    Ok(report)
}

fn find_spec_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|entry| entry.into_path())
        .filter(|path| path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("json"))
        .collect();
    files.sort();
    files
}
