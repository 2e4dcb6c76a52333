//! CLI entry point for taskio.

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

use taskio_app::{AppConfig, Session, Theme};
use taskio_client::TaskClient;
use taskio_core::status::TaskStatus;
use taskio_core::view::{SortKey, ViewOptions};

use palette::Painter;

mod commands;
mod palette;
mod render;

/// Task management from the terminal, backed by a remote task service.
#[derive(Parser, Debug)]
#[command(
    name = "taskio",
    version,
    about = "taskio: manage tasks on a remote task service"
)]
struct Cli {
    /// Base URL of the task service (overrides config and TASKIO_API_URL).
    #[arg(long)]
    api_url: Option<String>,

    /// Disable colored output.
    #[arg(long)]
    no_color: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all tasks.
    Ls {
        #[command(flatten)]
        view: ViewArgs,
    },

    /// Search and filter tasks on the server.
    Search {
        /// Free text matched against title and description.
        query: Option<String>,
        /// Restrict to a workflow status (todo, in_progress, done).
        #[arg(long)]
        status: Option<TaskStatus>,
        /// Restrict to a category label.
        #[arg(long)]
        category: Option<String>,
        /// Inclusive due-date lower bound (YYYY-MM-DD).
        #[arg(long)]
        from: Option<String>,
        /// Inclusive due-date upper bound (YYYY-MM-DD).
        #[arg(long)]
        to: Option<String>,
        #[command(flatten)]
        view: ViewArgs,
    },

    /// Show a single task in full.
    Show {
        /// Task identifier.
        id: u64,
    },

    /// Create a new task.
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long, default_value = "todo")]
        status: TaskStatus,
        /// Due date (YYYY-MM-DD).
        #[arg(long)]
        due: Option<String>,
        #[arg(long)]
        category: Option<String>,
    },

    /// Edit an existing task; omitted fields keep their current value.
    Edit {
        /// Task identifier.
        id: u64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        status: Option<TaskStatus>,
        /// Due date (YYYY-MM-DD).
        #[arg(long)]
        due: Option<String>,
        #[arg(long)]
        category: Option<String>,
    },

    /// Delete a task (succeeds even when it is already gone).
    Rm {
        /// Task identifier.
        id: u64,
    },

    /// List the category labels currently in use.
    Categories,

    /// Switch the color theme, or toggle it when no theme is given.
    Theme {
        /// Theme to switch to (light or dark).
        mode: Option<Theme>,
    },
}

/// Sorting and grouping options shared by the listing commands.
#[derive(Args, Debug)]
struct ViewArgs {
    /// Sort key for the listing.
    #[arg(long, value_enum, default_value_t = SortArg::None)]
    sort: SortArg,

    /// Group tasks by category.
    #[arg(long)]
    group: bool,
}

impl ViewArgs {
    const fn to_options(&self) -> ViewOptions {
        ViewOptions {
            sort: self.sort.to_key(),
            group_by_category: self.group,
        }
    }
}

/// Sort keys accepted by `--sort`.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
enum SortArg {
    /// Keep server order.
    #[default]
    None,
    /// Status rank: todo, in progress, done.
    Status,
    /// Due date, earliest first.
    Due,
    /// Category label, alphabetical.
    Category,
}

impl SortArg {
    const fn to_key(self) -> SortKey {
        match self {
            Self::None => SortKey::None,
            Self::Status => SortKey::Status,
            Self::Due => SortKey::DueDate,
            Self::Category => SortKey::Category,
        }
    }
}

fn main() -> Result<()> {
    install_tracing();
    let cli = Cli::parse();

    let config = AppConfig::load()?;
    let base_url = config.base_url(cli.api_url.as_deref());
    let session = Session::new(TaskClient::new(base_url));
    let painter = if cli.no_color {
        Painter::plain()
    } else {
        Painter::themed(config.ui.theme)
    };

    tokio::runtime::Runtime::new()?.block_on(commands::run(cli.cmd, session, config, painter))
}

fn install_tracing() {
    let filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_span_events(FmtSpan::NONE)
        .compact()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ls_with_view_options() {
        let cli = Cli::parse_from(["taskio", "ls", "--sort", "due", "--group"]);
        match cli.cmd {
            Command::Ls { view } => {
                let options = view.to_options();
                assert_eq!(options.sort, SortKey::DueDate);
                assert!(options.group_by_category);
            }
            _ => panic!("expected ls command"),
        }
    }

    #[test]
    fn parse_search_with_filters() {
        let cli = Cli::parse_from([
            "taskio",
            "search",
            "release notes",
            "--status",
            "in_progress",
            "--category",
            "Work",
            "--from",
            "2026-08-01",
        ]);
        match cli.cmd {
            Command::Search {
                query,
                status,
                category,
                from,
                to,
                ..
            } => {
                assert_eq!(query.as_deref(), Some("release notes"));
                assert_eq!(status, Some(TaskStatus::InProgress));
                assert_eq!(category.as_deref(), Some("Work"));
                assert_eq!(from.as_deref(), Some("2026-08-01"));
                assert!(to.is_none());
            }
            _ => panic!("expected search command"),
        }
    }

    #[test]
    fn parse_add_defaults_to_todo() {
        let cli = Cli::parse_from(["taskio", "add", "--title", "Write release notes"]);
        match cli.cmd {
            Command::Add { title, status, .. } => {
                assert_eq!(title, "Write release notes");
                assert_eq!(status, TaskStatus::Todo);
            }
            _ => panic!("expected add command"),
        }
    }

    #[test]
    fn parse_theme_toggle_and_explicit_mode() {
        let cli = Cli::parse_from(["taskio", "theme"]);
        match cli.cmd {
            Command::Theme { mode } => assert!(mode.is_none()),
            _ => panic!("expected theme command"),
        }

        let cli = Cli::parse_from(["taskio", "theme", "dark"]);
        match cli.cmd {
            Command::Theme { mode } => assert_eq!(mode, Some(Theme::Dark)),
            _ => panic!("expected theme command"),
        }
    }

    #[test]
    fn parse_global_api_url_flag() {
        let cli = Cli::parse_from(["taskio", "--api-url", "http://staging:8080/api", "categories"]);
        assert_eq!(cli.api_url.as_deref(), Some("http://staging:8080/api"));
        assert!(matches!(cli.cmd, Command::Categories));
    }
}
