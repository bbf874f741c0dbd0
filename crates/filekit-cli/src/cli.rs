//! CLI argument parsing using clap.

use clap::Parser;
use clap::Subcommand;
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "filekit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Pack every file of a directory tree into a flat zip archive
    Zip(ZipArgs),
    /// Read or edit a whole file as text
    Text(TextArgs),
    /// Read or edit a file as a list of lines
    Lines(LinesArgs),
    /// Create, clear, delete, list or copy directories
    Dir(DirArgs),
    /// Inspect, touch or delete single files
    File(FileArgs),
    /// Generate shell completions
    Completion(CompletionArgs),
}

impl Commands {
    /// Name reported in JSON envelopes.
    pub const fn operation(&self) -> &'static str {
        match self {
            Self::Zip(_) => "zip",
            Self::Text(_) => "text",
            Self::Lines(_) => "lines",
            Self::Dir(_) => "dir",
            Self::File(_) => "file",
            Self::Completion(_) => "completion",
        }
    }
}

#[derive(clap::Args)]
pub struct ZipArgs {
    /// Directory whose files are packed
    #[arg(value_name = "SOURCE_DIR")]
    pub source: PathBuf,

    /// Output archive file path
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Compression level (0 stores, 1-9 deflate)
    #[arg(short = 'l', long, value_parser = clap::value_parser!(u8).range(0..=9))]
    pub compression_level: Option<u8>,

    /// Follow symbolic links
    #[arg(long)]
    pub follow_symlinks: bool,

    /// Do not store unix permission bits
    #[arg(long)]
    pub no_permissions: bool,
}

#[derive(clap::Args)]
pub struct TextArgs {
    #[command(subcommand)]
    pub action: TextAction,
}

#[derive(Subcommand)]
pub enum TextAction {
    /// Print the file content
    Read {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Replace the file content
    Write {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        #[arg(value_name = "TEXT")]
        text: String,
    },
    /// Append text to the file
    Append {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        #[arg(value_name = "TEXT")]
        text: String,
    },
    /// Remove every occurrence of text from the file
    Remove {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        #[arg(value_name = "TEXT")]
        text: String,
    },
    /// Exit 0 if the file contains text, 1 otherwise
    Contains {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        #[arg(value_name = "TEXT")]
        text: String,
    },
}

#[derive(clap::Args)]
pub struct LinesArgs {
    #[command(subcommand)]
    pub action: LinesAction,
}

#[derive(Subcommand)]
pub enum LinesAction {
    /// Print the lines of the file
    Read {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Replace the file with the given lines
    Write {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        #[arg(value_name = "LINE")]
        lines: Vec<String>,
    },
    /// Append lines to the file
    Add {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        #[arg(value_name = "LINE", required = true)]
        lines: Vec<String>,
    },
    /// Remove the first occurrence of each line
    Remove {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        #[arg(value_name = "LINE", required = true)]
        lines: Vec<String>,

        /// Remove every occurrence instead of the first
        #[arg(short, long)]
        all: bool,
    },
    /// Exit 0 if every line is present, 1 otherwise
    Contains {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        #[arg(value_name = "LINE", required = true)]
        lines: Vec<String>,
    },
}

#[derive(clap::Args)]
pub struct DirArgs {
    #[command(subcommand)]
    pub action: DirAction,
}

#[derive(Subcommand)]
pub enum DirAction {
    /// Create a directory and its parents
    Create {
        #[arg(value_name = "DIR")]
        dir: PathBuf,
    },
    /// Remove everything inside a directory
    Clear {
        #[arg(value_name = "DIR")]
        dir: PathBuf,
    },
    /// Delete a directory recursively
    Delete {
        #[arg(value_name = "DIR")]
        dir: PathBuf,
    },
    /// List the names of all files below a directory
    List {
        #[arg(value_name = "DIR")]
        dir: PathBuf,
    },
    /// Copy the contents of one directory into another
    Copy {
        #[arg(value_name = "FROM")]
        from: PathBuf,
        #[arg(value_name = "TO")]
        to: PathBuf,
    },
}

#[derive(clap::Args)]
pub struct FileArgs {
    #[command(subcommand)]
    pub action: FileAction,
}

#[derive(Subcommand)]
pub enum FileAction {
    /// Create the file if missing, or update its modification time
    Touch {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Delete a file
    Delete {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Show size, type and modification time
    Info {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Exit 0 if the path exists, 1 otherwise
    Exists {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Exit 0 if the file is empty or missing, 1 otherwise
    IsEmpty {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

#[derive(clap::Args)]
pub struct CompletionArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,
}
