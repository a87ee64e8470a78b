use crate::config::Config;
use anyhow::{anyhow, Context, Result};
use clap::Args;
use polaris_components::{wrap_children, WrapRule};
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct WrapArgs {
    /// HTML fragment file, or `-` for stdin
    #[arg(default_value = "-")]
    pub input: PathBuf,

    /// Class of the container each child is wrapped in
    #[arg(short, long, conflicts_with = "rule")]
    pub class: Option<String>,

    /// Extra classes for new containers
    #[arg(short, long = "additional")]
    pub additional: Vec<String>,

    /// CSS selector for children that stay unwrapped
    #[arg(short, long)]
    pub exclude: Option<String>,

    /// Named rule from polaris.config.json
    #[arg(short, long)]
    pub rule: Option<String>,
}

pub fn wrap(args: WrapArgs, cwd: &Path) -> Result<()> {
    let rule = resolve_rule(&args, cwd)?;

    let fragment = if args.input.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        let path = cwd.join(&args.input);
        std::fs::read_to_string(&path).with_context(|| format!("Cannot read {}", path.display()))?
    };

    println!("{}", wrap_children(&fragment, &rule)?);
    Ok(())
}

fn resolve_rule(args: &WrapArgs, cwd: &Path) -> Result<WrapRule> {
    let mut rule = match (&args.rule, &args.class) {
        (Some(name), _) => {
            let config = Config::load(cwd)?;
            config
                .wrap_rules
                .get(name)
                .cloned()
                .ok_or_else(|| anyhow!("Unknown wrap rule: {}", name))?
        }
        (None, Some(class)) => WrapRule::new(class.clone()),
        (None, None) => return Err(anyhow!("Either --class or --rule is required")),
    };

    rule.additional_classes.extend(args.additional.iter().cloned());
    if let Some(exclude) = &args.exclude {
        rule.exclusion = Some(exclude.clone());
    }

    Ok(rule)
}
