use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// List starships, optionally filtered by name or uid.
    List(ListArgs),
    /// Show the full record for one starship.
    Show(ShowArgs),
    /// Compare up to three starships side by side.
    Compare(CompareArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ListArgs {
    /// Case-insensitive substring matched against name and uid.
    #[arg(short, long)]
    pub search: Option<String>,

    /// 1-based page number.
    #[arg(long)]
    pub page: Option<usize>,

    /// Rows per page (defaults to `general.page_size`).
    #[arg(long)]
    pub page_size: Option<usize>,

    /// URL-style location, e.g. "search=wing&page=2". Explicit flags win.
    #[arg(long)]
    pub query: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ShowArgs {
    /// Catalog uid of the starship.
    pub uid: String,
}

#[derive(Clone, Debug, Args)]
pub struct CompareArgs {
    /// Catalog uids, in display order.
    #[arg(required = true, num_args = 1..)]
    pub uids: Vec<String>,
}
