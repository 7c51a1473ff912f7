use crate::icon::IconMapper;
use crate::tree::{join_path, FileNode};
use std::collections::HashSet;

/// Output format for the renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputFormat {
    /// Branches drawn with box characters (ASCII when unicode is unavailable)
    Tree,
    /// Nested Markdown bullet lists
    Markdown,
}

/// Which directories show their children.
/// Everything is expanded unless its path was collapsed.
#[derive(Debug, Clone, Default)]
pub struct Expansion {
    collapsed: HashSet<String>,
}

impl Expansion {
    pub fn collapsing<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            collapsed: paths.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_expanded(&self, path: &str) -> bool {
        !self.collapsed.contains(path)
    }
}

/// Configuration shared by all renderers
pub struct RenderConfig {
    pub icons: IconMapper,
    pub expansion: Expansion,
    pub root_label: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            icons: IconMapper::new(false),
            expansion: Expansion::default(),
            root_label: None,
        }
    }
}

/// Trait for rendering a forest in different formats
pub trait Renderer {
    fn render_tree(&mut self, forest: &[FileNode]) -> String;

    fn output_format(&self) -> OutputFormat;
}

/// One visible row, computed once and shared by renderers
pub struct Row<'n> {
    pub node: &'n FileNode,
    pub path: String,
    pub expanded: bool,
    /// Chevron and icon, joined and followed by a space, or empty
    pub decoration: String,
}

impl<'n> Row<'n> {
    pub fn new(node: &'n FileNode, parent_path: &str, config: &RenderConfig) -> Self {
        let path = join_path(parent_path, node.name());
        let expanded = node.is_dir() && config.expansion.is_expanded(&path);

        let mut parts = Vec::new();
        if node.is_dir() {
            parts.push(config.icons.get_chevron(expanded));
        }
        parts.push(config.icons.get_icon(node, expanded));
        parts.retain(|part| !part.is_empty());

        let decoration = if parts.is_empty() {
            String::new()
        } else {
            format!("{} ", parts.join(" "))
        };

        Self {
            node,
            path,
            expanded,
            decoration,
        }
    }

    /// Name with a trailing `/` for directories
    pub fn label(&self) -> String {
        if self.node.is_dir() {
            format!("{}/", self.node.name())
        } else {
            self.node.name().to_string()
        }
    }

    /// Children to descend into; collapsed directories and files have none
    pub fn visible_children(&self) -> &'n [FileNode] {
        if self.expanded {
            self.node.children()
        } else {
            &[]
        }
    }
}
