use once_cell::sync::Lazy;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconKind {
    // Defaults
    DirectoryClosed,
    DirectoryOpen,
    File,

    // Expand/collapse chevrons
    RightArrow,
    DownArrow,

    // Special names
    SourceFolder,
    Binary,
    Config,
    GitIgnore,
    Prettier,
    ReadMe,
    Json,
    TsConfig,
    Yarn,

    // Extensions
    JavaScript,
    TypeScript,
    Cmd,
    Xml,
    Html,
    Css,
}

/// Icons picked by exact node name
static BUILTIN_NAMES: Lazy<HashMap<&'static str, IconKind>> = Lazy::new(|| {
    HashMap::from([
        (".editorconfig", IconKind::Config),
        (".gitignore", IconKind::GitIgnore),
        (".prettierrc", IconKind::Prettier),
        ("README.md", IconKind::ReadMe),
        ("package.json", IconKind::Json),
        ("src", IconKind::SourceFolder),
        ("bin", IconKind::Binary),
        ("tsconfig.json", IconKind::TsConfig),
        ("tsconfig.tsbuildinfo", IconKind::TsConfig),
        ("yarn-error.log", IconKind::Yarn),
        ("yarn.lock", IconKind::Yarn),
    ])
});

/// Icons picked by file extension (without the dot)
static BUILTIN_EXTENSIONS: Lazy<HashMap<&'static str, IconKind>> = Lazy::new(|| {
    HashMap::from([
        ("js", IconKind::JavaScript),
        ("ts", IconKind::TypeScript),
        ("cmd", IconKind::Cmd),
        ("xml", IconKind::Xml),
        ("html", IconKind::Html),
        ("css", IconKind::Css),
    ])
});

impl IconKind {
    pub fn for_name(name: &str) -> Option<IconKind> {
        BUILTIN_NAMES.get(name).copied()
    }

    pub fn for_extension(ext: &str) -> Option<IconKind> {
        BUILTIN_EXTENSIONS.get(ext).copied()
    }

    /// Get the default glyph for this icon
    pub fn default_glyph(&self) -> &str {
        match self {
            IconKind::DirectoryClosed => "📁",
            IconKind::DirectoryOpen => "📂",
            IconKind::File => "📄",

            IconKind::RightArrow => "▸",
            IconKind::DownArrow => "▾",

            IconKind::SourceFolder => "🗃",
            IconKind::Binary => "🔢",
            IconKind::Config => "⚙️",
            IconKind::GitIgnore => "🙈",
            IconKind::Prettier => "💅",
            IconKind::ReadMe => "📘",
            IconKind::Json => "🧾",
            IconKind::TsConfig => "🛠",
            IconKind::Yarn => "🧶",

            IconKind::JavaScript => "✨",
            IconKind::TypeScript => "🔷",
            IconKind::Cmd => "🐚",
            IconKind::Xml => "📰",
            IconKind::Html => "🌐",
            IconKind::Css => "🎨",
        }
    }
}
