use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Csv,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "cloud-audit",
    version,
    about = "Security posture auditor for cloud account snapshots",
    long_about = "cloud-audit checks an account snapshot for overly permissive roles, users \
                  without MFA, security groups open to the internet, and unused key pairs, \
                  then emits a flat findings report."
)]
pub struct Cli {
    /// Account snapshot to audit (JSON or YAML)
    pub snapshot: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Terminal)]
    pub format: OutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Policy name to treat as full access (repeatable, overrides config)
    #[arg(long = "admin-policy", value_name = "NAME")]
    pub admin_policies: Vec<String>,

    /// Configuration file (default: .cloud-audit.yaml next to the snapshot)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Verbose output (per-resource warnings, debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}
