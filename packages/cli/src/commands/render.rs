use anyhow::{anyhow, Context, Result};
use clap::Args;
use colored::Colorize;
use polaris_components::{render_spec, ComponentSpec};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Component spec file (JSON)
    pub input: PathBuf,

    /// Write the markup to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print validation failures as a JSON field map
    #[arg(long)]
    pub json_errors: bool,
}

pub fn render(args: RenderArgs, cwd: &Path) -> Result<()> {
    let input = cwd.join(&args.input);
    let spec = load_spec(&input)?;

    let html = match render_spec(&spec) {
        Ok(html) => html,
        Err(err) => {
            if let (true, Some(errors)) = (args.json_errors, err.validation_errors()) {
                println!("{}", serde_json::to_string_pretty(errors)?);
            }
            return Err(anyhow!(err).context(format!("Failed to render {}", input.display())));
        }
    };

    match args.output {
        Some(output) => {
            let output = cwd.join(output);
            if let Some(parent) = output.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&output, html)?;
            println!("  {} {} → {}", "✓".green(), args.input.display(), output.display());
        }
        None => println!("{}", html),
    }

    Ok(())
}

/// Read and deserialize a component spec file
pub fn load_spec(path: &Path) -> Result<ComponentSpec> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Cannot read {}", path.display()))?;
    serde_json::from_str(&source).with_context(|| format!("Invalid component spec {}", path.display()))
}
