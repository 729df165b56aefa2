use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "taskmaster")]
#[command(about = "Manage tasks, categories and settings from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory holding storage.json (or set TASKMASTER_DATA_DIR env var)
    #[arg(long, value_name = "DIR", env = "TASKMASTER_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Task operations
    Task(TaskCommand),
    /// Category operations
    Category(CategoryCommand),
    /// Settings operations
    Settings(SettingsCommand),
    /// Statistics, upcoming and high-priority tasks
    Dashboard(DashboardArgs),
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// Task commands
#[derive(Args)]
pub struct TaskCommand {
    #[command(subcommand)]
    pub action: TaskAction,
}

#[derive(Subcommand)]
pub enum TaskAction {
    /// Create a new task
    Add(TaskAddArgs),
    /// List tasks with optional filters
    List(TaskListArgs),
    /// Get a specific task
    Get {
        #[arg(long)]
        id: Uuid,
    },
    /// Edit a task
    Edit(TaskEditArgs),
    /// Flip a task between open and completed
    Toggle {
        #[arg(long)]
        id: Uuid,
    },
    /// Permanently delete a task
    Delete {
        #[arg(long)]
        id: Uuid,
    },
    /// Move a task to the archive
    Archive {
        #[arg(long)]
        id: Uuid,
    },
    /// Move an archived task back to the list
    Restore {
        #[arg(long)]
        id: Uuid,
    },
    /// List archived tasks
    Archived,
}

#[derive(Args)]
pub struct TaskAddArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub description: Option<String>,
    /// YYYY-MM-DD or RFC 3339
    #[arg(long)]
    pub due_date: Option<String>,
    /// low, medium or high (defaults to the configured default priority)
    #[arg(long)]
    pub priority: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
}

#[derive(Args)]
pub struct TaskListArgs {
    /// all, active or completed. Without it the show-completed setting applies.
    #[arg(long)]
    pub status: Option<String>,
    /// Category name, or "all"
    #[arg(long)]
    pub category: Option<String>,
}

#[derive(Args)]
pub struct TaskEditArgs {
    #[arg(long)]
    pub id: Uuid,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long, conflicts_with = "description")]
    pub clear_description: bool,
    #[arg(long)]
    pub due_date: Option<String>,
    #[arg(long, conflicts_with = "due_date")]
    pub clear_due_date: bool,
    #[arg(long)]
    pub priority: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long, conflicts_with = "category")]
    pub clear_category: bool,
}

// Category commands
#[derive(Args)]
pub struct CategoryCommand {
    #[command(subcommand)]
    pub action: CategoryAction,
}

#[derive(Subcommand)]
pub enum CategoryAction {
    /// Create a new category
    Add {
        #[arg(long)]
        name: String,
        /// Hex colour, #RGB or #RRGGBB
        #[arg(long)]
        color: String,
    },
    /// List all categories
    List,
    /// Rename or recolour a category
    Edit {
        #[arg(long)]
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        color: Option<String>,
    },
    /// Delete a category. Tasks filed under it keep the name.
    Delete {
        #[arg(long)]
        id: String,
    },
}

// Settings commands
#[derive(Args)]
pub struct SettingsCommand {
    #[command(subcommand)]
    pub action: SettingsAction,
}

#[derive(Subcommand)]
pub enum SettingsAction {
    /// Show current settings
    Show,
    /// Change one or more settings
    Set(SettingsSetArgs),
    /// Restore task preferences to their defaults
    Reset,
    /// Delete every task and category
    ClearData {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Args)]
pub struct SettingsSetArgs {
    #[arg(long)]
    pub show_completed: Option<bool>,
    #[arg(long)]
    pub auto_archive: Option<bool>,
    /// low, medium or high
    #[arg(long)]
    pub default_priority: Option<String>,
    /// light or dark
    #[arg(long)]
    pub theme: Option<String>,
}

#[derive(Args)]
pub struct DashboardArgs {
    /// Upcoming window in days (defaults to the config file value, then 7)
    #[arg(long)]
    pub days: Option<u32>,
    /// Maximum high-priority tasks shown (defaults to the config file value, then 3)
    #[arg(long)]
    pub limit: Option<usize>,
}
