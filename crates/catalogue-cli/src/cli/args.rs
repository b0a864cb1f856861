use clap::Args;

#[derive(Debug, Args)]
pub struct WebArgs {
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,
    #[arg(long, default_value_t = 8787)]
    pub port: u16,
}

#[derive(Debug, Args)]
pub struct CategoryArgs {
    /// Category id, display name or storage path.
    pub key: String,
}

#[derive(Debug, Args)]
pub struct ThinkerArgs {
    pub category: String,
    pub name: String,
    /// List subjects without loading works.
    #[arg(long)]
    pub metadata_only: bool,
}

#[derive(Debug, Args)]
pub struct SubjectArgs {
    pub category: String,
    pub name: String,
    pub subject: String,
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    #[arg(long, short = 'q', allow_hyphen_values = true)]
    pub query: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
}

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Comma-separated thinker names.
    pub names: String,
}

#[derive(Debug, Args)]
pub struct RandomArgs {
    #[arg(long)]
    pub category: Option<String>,
}
