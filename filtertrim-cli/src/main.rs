use anyhow::{Context, Result};
use clap::Parser;

use filtertrim_cli::{logging, Args};
use filtertrim_core::{ListTrimmer, TrimConfig};

fn main() -> Result<()> {
    // Usage and argument errors exit 1 rather than clap's default 2
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    logging::init(args.verbose);
    if !args.ignored.is_empty() {
        log::debug!("Ignoring extra arguments: {:?}", args.ignored);
    }

    let mut config = TrimConfig::load_with_fallback(args.config.as_deref());
    if let Some(config_path) = &args.config {
        log::debug!("Loaded config from: {}", config_path.display());
    }

    // Positional argument overrides the config file
    if let Some(max_rules) = &args.max_rules {
        config.max_rules = max_rules.clone();
    }

    let output = args.output_path();
    let trimmer = ListTrimmer::new(config);
    trimmer
        .trim_file(&args.path, output)
        .with_context(|| format!("Failed to trim {}", args.path.display()))?;

    Ok(())
}
