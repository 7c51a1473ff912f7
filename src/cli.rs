use crate::input::Delimiter;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
pub enum OutputMode {
    /// Unicode tree on a terminal, ASCII tree otherwise
    Auto,
    /// Unicode tree branches
    Tree,
    /// ASCII tree branches
    Plain,
    /// Nested Markdown bullet list
    Md,
    /// The forest as JSON, in the same shape it is stored
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
pub enum IconsMode {
    /// Icons on a terminal only
    Auto,
    On,
    Off,
}

#[derive(Debug, Clone, Copy, PartialEq, ValueEnum, Default)]
pub enum LogLevel {
    Debug,
    Info,
    #[default]
    Warn,
    Error,
    Silent,
}

impl LogLevel {
    pub fn to_tracing_level(self) -> Option<tracing::Level> {
        match self {
            LogLevel::Debug => Some(tracing::Level::DEBUG),
            LogLevel::Info => Some(tracing::Level::INFO),
            LogLevel::Warn => Some(tracing::Level::WARN),
            LogLevel::Error => Some(tracing::Level::ERROR),
            LogLevel::Silent => None,
        }
    }
}

/// A `TARGET=NAME` edit: create `NAME` inside the directory at `TARGET`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub target: String,
    pub name: String,
}

/// Split at the last `=`, so targets may contain `=` but names may not
pub fn parse_edit(arg: &str) -> Result<Edit, String> {
    let (target, name) = arg
        .rsplit_once('=')
        .ok_or_else(|| format!("expected TARGET=NAME, got '{}'", arg))?;
    if target.is_empty() {
        return Err(format!("missing target directory in '{}'", arg));
    }
    Ok(Edit {
        target: target.to_string(),
        name: name.to_string(),
    })
}

#[derive(Parser, Debug, Clone)]
#[command(name = "pathtree")]
#[command(version = VERSION)]
#[command(about = "Turns slash-delimited paths into an editable file-explorer tree")]
#[command(
    long_about = "Turns slash-delimited paths into an editable file-explorer tree.\n\nEdits are applied in this order: --add-dir, --add-file, --delete.\nUse --save to keep the result in the key-value store and --load to start from it."
)]
pub struct Args {
    /// Paths to structure (e.g. src/main.rs docs/guide.md)
    pub paths: Vec<String>,

    /// Read paths from stdin (newline-delimited)
    #[arg(long = "stdin")]
    pub stdin: bool,

    /// Paths on stdin are NUL-delimited
    #[arg(short = '0', long = "null", requires = "stdin")]
    pub null: bool,

    /// Read a {"name", "filepaths"} JSON listing
    #[arg(long = "from-json", value_name = "FILE", conflicts_with = "stdin")]
    pub from_json: Option<PathBuf>,

    /// Start from the tree kept in the store
    #[arg(long = "load", conflicts_with_all = ["stdin", "from_json", "paths"])]
    pub load: bool,

    /// Add an empty directory NAME inside TARGET
    #[arg(long = "add-dir", value_name = "TARGET=NAME", value_parser = parse_edit)]
    pub add_dir: Vec<Edit>,

    /// Add a file NAME inside TARGET
    #[arg(long = "add-file", value_name = "TARGET=NAME", value_parser = parse_edit)]
    pub add_file: Vec<Edit>,

    /// Delete the node at PATH, with everything below it
    #[arg(long = "delete", value_name = "PATH")]
    pub delete: Vec<String>,

    /// Write the resulting tree to the store
    #[arg(long = "save")]
    pub save: bool,

    /// Store file (default: config [store] path, then the user data directory)
    #[arg(long = "store", value_name = "FILE")]
    pub store: Option<PathBuf>,

    /// Key the tree is stored under (default: fileTree)
    #[arg(long = "key")]
    pub key: Option<String>,

    /// Output format
    #[arg(short = 'o', long = "output", value_enum, default_value = "auto")]
    pub output: OutputMode,

    /// Show file and directory icons
    #[arg(long = "icons", value_enum, default_value = "auto")]
    pub icons: IconsMode,

    /// Icon override: '.ext=GLYPH' or 'name=GLYPH' (repeatable)
    #[arg(long = "icon", value_name = "KEY=GLYPH")]
    pub icon: Vec<String>,

    /// Show the directory at PATH collapsed (repeatable)
    #[arg(long = "collapse", value_name = "PATH")]
    pub collapse: Vec<String>,

    /// Label printed above the tree
    #[arg(long = "root-label")]
    pub root_label: Option<String>,

    /// Config file (default: <config dir>/pathtree/config.toml when present)
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Diagnostics written to stderr
    #[arg(long = "log-level", value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

impl Args {
    pub fn delimiter(&self) -> Delimiter {
        if self.null {
            Delimiter::Null
        } else {
            Delimiter::Newline
        }
    }

    /// `auto` follows whether the terminal can show icons
    pub fn is_icons_enabled(&self, terminal_supports: bool) -> bool {
        match self.icons {
            IconsMode::On => true,
            IconsMode::Off => false,
            IconsMode::Auto => terminal_supports,
        }
    }

    pub fn has_edits(&self) -> bool {
        !self.add_dir.is_empty() || !self.add_file.is_empty() || !self.delete.is_empty()
    }
}
