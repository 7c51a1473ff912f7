use crate::config::IconConfig;
use crate::icon::IconKind;
use crate::tree::FileNode;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Resolves display glyphs for explorer nodes
pub struct IconMapper {
    /// Custom glyphs by exact node name
    name_overrides: HashMap<String, String>,

    /// Custom glyphs by extension, stored without the dot
    extension_overrides: HashMap<String, String>,

    /// Whether icons are enabled
    enabled: bool,
}

fn extension_of(name: &str) -> Option<&str> {
    Path::new(name).extension().and_then(|ext| ext.to_str())
}

impl IconMapper {
    pub fn new(enabled: bool) -> Self {
        Self {
            name_overrides: HashMap::new(),
            extension_overrides: HashMap::new(),
            enabled,
        }
    }

    pub fn add_name_override(&mut self, name: String, glyph: String) {
        self.name_overrides.insert(name, glyph);
    }

    pub fn add_extension_override(&mut self, extension: String, glyph: String) {
        self.extension_overrides
            .insert(extension.trim_start_matches('.').to_string(), glyph);
    }

    /// Merge the `[icons]` tables of a config file
    pub fn apply_config(&mut self, config: &IconConfig) {
        for (name, glyph) in &config.names {
            self.add_name_override(name.clone(), glyph.clone());
        }
        for (ext, glyph) in &config.extensions {
            self.add_extension_override(ext.clone(), glyph.clone());
        }
    }

    /// Parse a CLI override (format: ".ext=glyph" or "name=glyph").
    /// Malformed arguments are ignored.
    pub fn parse_cli_icon(&mut self, arg: &str) {
        let Some((key, glyph)) = arg.split_once('=') else {
            debug!(arg, "ignoring icon override without '='");
            return;
        };
        if key.is_empty() || glyph.is_empty() {
            debug!(arg, "ignoring incomplete icon override");
            return;
        }

        match key.strip_prefix('.') {
            // ".gitignore" style dotfiles are names, not extensions
            Some(ext) if !ext.is_empty() && IconKind::for_name(key).is_none() => {
                self.add_extension_override(ext.to_string(), glyph.to_string())
            }
            _ => self.add_name_override(key.to_string(), glyph.to_string()),
        }
    }

    /// Builtin icon for a node, ignoring user overrides
    pub fn resolve(&self, node: &FileNode, expanded: bool) -> IconKind {
        if let Some(kind) = IconKind::for_name(node.name()) {
            return kind;
        }

        if node.is_dir() {
            return if expanded {
                IconKind::DirectoryOpen
            } else {
                IconKind::DirectoryClosed
            };
        }

        extension_of(node.name())
            .and_then(IconKind::for_extension)
            .unwrap_or(IconKind::File)
    }

    /// Glyph for a node. `expanded` only matters for directories.
    pub fn get_icon(&self, node: &FileNode, expanded: bool) -> String {
        if !self.enabled {
            return String::new();
        }

        if let Some(glyph) = self.name_overrides.get(node.name()) {
            return glyph.clone();
        }

        if !node.is_dir() {
            if let Some(glyph) = extension_of(node.name()).and_then(|ext| self.extension_overrides.get(ext)) {
                return glyph.clone();
            }
        }

        self.resolve(node, expanded).default_glyph().to_string()
    }

    /// Chevron shown in front of a directory row
    pub fn get_chevron(&self, expanded: bool) -> String {
        if !self.enabled {
            return String::new();
        }
        let kind = if expanded {
            IconKind::DownArrow
        } else {
            IconKind::RightArrow
        };
        kind.default_glyph().to_string()
    }
}

impl Default for IconMapper {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_mapper_disabled() {
        let mapper = IconMapper::new(false);
        assert_eq!(mapper.get_icon(&FileNode::file("app.js"), false), "");
        assert_eq!(mapper.get_icon(&FileNode::directory("src"), true), "");
        assert_eq!(mapper.get_chevron(true), "");
    }

    #[test]
    fn test_resolve_by_name_then_extension() {
        let mapper = IconMapper::default();
        assert_eq!(mapper.resolve(&FileNode::file("README.md"), false), IconKind::ReadMe);
        assert_eq!(mapper.resolve(&FileNode::file("index.html"), false), IconKind::Html);
        assert_eq!(mapper.resolve(&FileNode::file(".gitignore"), false), IconKind::GitIgnore);
        assert_eq!(mapper.resolve(&FileNode::file("notes.md"), false), IconKind::File);
        assert_eq!(mapper.resolve(&FileNode::file("Makefile"), false), IconKind::File);
    }

    #[test]
    fn test_resolve_directories() {
        let mapper = IconMapper::default();
        assert_eq!(mapper.resolve(&FileNode::directory("src"), false), IconKind::SourceFolder);
        assert_eq!(mapper.resolve(&FileNode::directory("docs"), true), IconKind::DirectoryOpen);
        assert_eq!(mapper.resolve(&FileNode::directory("docs"), false), IconKind::DirectoryClosed);
        // extensions never apply to directories
        assert_eq!(mapper.resolve(&FileNode::directory("site.css"), false), IconKind::DirectoryClosed);
    }

    #[test]
    fn test_override_by_extension() {
        let mut mapper = IconMapper::default();
        mapper.add_extension_override(".js".to_string(), "🚀".to_string());

        assert_eq!(mapper.get_icon(&FileNode::file("main.js"), false), "🚀");
        assert_eq!(mapper.get_icon(&FileNode::file("main.ts"), false), "🔷");
    }

    #[test]
    fn test_override_by_name_wins() {
        let mut mapper = IconMapper::default();
        mapper.add_extension_override("json".to_string(), "🔧".to_string());
        mapper.add_name_override("package.json".to_string(), "📦".to_string());

        assert_eq!(mapper.get_icon(&FileNode::file("package.json"), false), "📦");
        assert_eq!(mapper.get_icon(&FileNode::file("data.json"), false), "🔧");
    }

    #[test]
    fn test_parse_cli_icon() {
        let mut mapper = IconMapper::default();
        mapper.parse_cli_icon(".rs=🦀");
        mapper.parse_cli_icon("Cargo.toml=📦");
        mapper.parse_cli_icon(".gitignore=👻");

        assert_eq!(mapper.get_icon(&FileNode::file("main.rs"), false), "🦀");
        assert_eq!(mapper.get_icon(&FileNode::file("Cargo.toml"), false), "📦");
        assert_eq!(mapper.get_icon(&FileNode::file(".gitignore"), false), "👻");
    }

    #[test]
    fn test_parse_cli_icon_invalid() {
        let mut mapper = IconMapper::default();
        mapper.parse_cli_icon("invalid");
        mapper.parse_cli_icon("=glyph");
        mapper.parse_cli_icon("name=");

        assert_eq!(mapper.get_icon(&FileNode::file("app.js"), false), "✨");
        assert_eq!(mapper.get_icon(&FileNode::file("name"), false), "📄");
    }

    #[test]
    fn test_apply_config() {
        let mut config = IconConfig::default();
        config.extensions.insert(".py".to_string(), "🐍".to_string());
        config.names.insert("docs".to_string(), "📚".to_string());

        let mut mapper = IconMapper::default();
        mapper.apply_config(&config);

        assert_eq!(mapper.get_icon(&FileNode::file("run.py"), false), "🐍");
        assert_eq!(mapper.get_icon(&FileNode::directory("docs"), true), "📚");
    }

    #[test]
    fn test_chevrons() {
        let mapper = IconMapper::default();
        assert_eq!(mapper.get_chevron(true), "▾");
        assert_eq!(mapper.get_chevron(false), "▸");
    }
}
