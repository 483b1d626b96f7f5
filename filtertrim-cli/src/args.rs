use clap::Parser;
use filtertrim_core::RuleLimit;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "trim", version)]
#[command(about = "Trim a filter list to a maximum number of rules, keeping its comment header")]
pub struct Args {
    /// Path to the filter list (rewritten in place unless --output is given)
    pub path: PathBuf,

    /// Maximum number of rules to keep; negative keeps all but the last N
    /// [default: 800, or max_rules from --config]
    #[arg(value_parser = parse_max_rules, allow_negative_numbers = true)]
    pub max_rules: Option<RuleLimit>,

    /// Further positional arguments are accepted and ignored
    #[arg(hide = true)]
    pub ignored: Vec<String>,

    /// Path to config file (YAML format)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write the trimmed list here instead of overwriting the input
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Log more to stderr (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Where the trimmed list is written
    pub fn output_path(&self) -> &PathBuf {
        self.output.as_ref().unwrap_or(&self.path)
    }
}

fn parse_max_rules(value: &str) -> Result<RuleLimit, String> {
    value.parse::<RuleLimit>().map_err(|e| e.to_string())
}
