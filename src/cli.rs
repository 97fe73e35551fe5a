use clap::{Parser, ValueEnum};
use hf_hub::RepoType;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "roundscore",
    version,
    about = "Round-by-round episode success rates for a Hugging Face repo"
)]
pub struct Cli {
    /// Repository id, e.g. someone/eval-results-20260204022222
    pub repo_id: String,

    /// Repository kind on the hub
    #[arg(long, value_enum, default_value_t = RepoKind::Dataset)]
    pub repo_type: RepoKind,

    /// Branch, tag or commit to read (default: config value, then "main")
    #[arg(long)]
    pub revision: Option<String>,

    /// Read the repository layout from a local directory instead of the hub
    #[arg(long)]
    pub local: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RepoKind {
    Dataset,
    Model,
    Space,
}

impl From<RepoKind> for RepoType {
    fn from(kind: RepoKind) -> Self {
        match kind {
            RepoKind::Dataset => RepoType::Dataset,
            RepoKind::Model => RepoType::Model,
            RepoKind::Space => RepoType::Space,
        }
    }
}
