use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "shelf", about = concat!("shelf v", env!("CARGO_PKG_VERSION"), " - tasks, sorted into categories"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Use a different data directory
    #[arg(short = 'C', long = "data-dir", global = true)]
    pub data_dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Board overview: task totals and per-category counts
    Overview,
    /// List categories
    Categories,
    /// Category management
    Category(CategoryCmd),
    /// Focus a category (resets the status filter)
    Select(SelectArgs),
    /// Clear the category selection
    Unselect,
    /// Show all, completed, or pending tasks (clears the selection)
    Filter(FilterArgs),
    /// Show the visible tasks with a header and summary
    List,
    /// Add a task to the selected category
    Add(AddArgs),
    /// Change a task's description
    Edit(EditArgs),
    /// Delete a task
    Rm(TaskIdArgs),
    /// Toggle a task between completed and pending
    Toggle(TaskIdArgs),
    /// Show which category a task belongs to
    Whose(TaskIdArgs),
}

// ---------------------------------------------------------------------------
// Category args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct CategoryCmd {
    #[command(subcommand)]
    pub action: CategoryAction,
}

#[derive(Subcommand)]
pub enum CategoryAction {
    /// Create a category, optionally with initial tasks
    Add(CategoryAddArgs),
    /// Rename a category
    Rename(CategoryRenameArgs),
    /// Delete a category and all of its tasks
    Rm(CategoryIdArgs),
}

#[derive(Args)]
pub struct CategoryAddArgs {
    /// Category title
    pub title: String,
    /// Initial task (repeatable)
    #[arg(long = "task", short = 't')]
    pub tasks: Vec<String>,
}

#[derive(Args)]
pub struct CategoryRenameArgs {
    /// Category ID
    pub id: i64,
    /// New title
    pub title: String,
}

#[derive(Args)]
pub struct CategoryIdArgs {
    /// Category ID
    pub id: i64,
}

#[derive(Args)]
pub struct SelectArgs {
    /// Category ID
    pub id: i64,
}

#[derive(Args)]
pub struct FilterArgs {
    /// Status filter (all, completed, pending)
    pub status: String,
}

// ---------------------------------------------------------------------------
// Task args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct AddArgs {
    /// Task description
    pub description: String,
}

#[derive(Args)]
pub struct EditArgs {
    /// Task ID
    pub id: i64,
    /// New description
    pub description: String,
}

#[derive(Args)]
pub struct TaskIdArgs {
    /// Task ID
    pub id: i64,
}
