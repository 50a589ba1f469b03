use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

pub mod commands;
pub mod print;

pub use commands::run;

/// Environment variable holding a `tracing` filter directive
pub const LOG_ENV: &str = "KANTAN_LOG";

#[derive(Parser, Debug)]
#[command(name = "kantan", version)]
#[command(about = "Personal kanban boards in flat JSON files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new board
    Init {
        /// Name of the board (prompted for when omitted)
        #[arg(short = 'n', long = "name")]
        name: Option<String>,
    },

    /// Add a new card with a title
    Add {
        /// Title words, joined with single spaces
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,

        /// Board to add to
        #[arg(short = 'n', long = "name")]
        board: Option<String>,

        /// Tags as a single string, comma separated by convention
        #[arg(long, default_value = "")]
        tags: String,
    },

    /// Move a card from one board to another
    Mv {
        /// Board the card is taken from
        #[arg(short = 's', long = "src")]
        src: Option<String>,

        /// Board the card is appended to
        #[arg(short = 'd', long = "dst")]
        dst: Option<String>,

        /// Card ID, as shown by `list`
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },

    /// List all cards on a board
    #[command(alias = "ls")]
    List {
        #[arg(short = 'n', long = "name")]
        board: Option<String>,

        /// Show each card's creation date
        #[arg(short = 'd', long)]
        show_date: bool,

        /// Show each card's tags
        #[arg(short = 't', long)]
        show_tags: bool,
    },

    /// Remove a card using its ID
    #[command(alias = "rm")]
    Remove {
        #[arg(short = 'n', long = "name")]
        board: Option<String>,

        /// Card ID, as shown by `list`
        #[arg(allow_negative_numbers = true)]
        id: i64,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Remove all cards from a board
    Clear {
        #[arg(short = 'n', long = "name")]
        board: Option<String>,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// List known boards
    Boards,
}

/// Installs the stderr log subscriber.
///
/// `--verbose` forces debug output for this crate; otherwise `KANTAN_LOG`
/// is used, defaulting to warnings only.
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("kantan=debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_collects_title_words() {
        let cli = Cli::parse_from(["kantan", "add", "Buy", "milk", "-n", "home", "--tags", "shop"]);
        match cli.command {
            Commands::Add { title, board, tags } => {
                assert_eq!(title, vec!["Buy", "milk"]);
                assert_eq!(board.as_deref(), Some("home"));
                assert_eq!(tags, "shop");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_remove_accepts_negative_id() {
        let cli = Cli::parse_from(["kantan", "remove", "-f", "-1"]);
        match cli.command {
            Commands::Remove { id, force, board } => {
                assert_eq!(id, -1);
                assert!(force);
                assert!(board.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_mv_flags() {
        let cli = Cli::parse_from(["kantan", "mv", "-s", "todo", "-d", "done", "2"]);
        match cli.command {
            Commands::Mv { src, dst, id } => {
                assert_eq!(src.as_deref(), Some("todo"));
                assert_eq!(dst.as_deref(), Some("done"));
                assert_eq!(id, 2);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_add_requires_title() {
        assert!(Cli::try_parse_from(["kantan", "add"]).is_err());
    }
}
