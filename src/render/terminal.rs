use crate::render::renderer::{OutputFormat, RenderConfig, Renderer, Row};
use crate::terminal::TreeChars;
use crate::tree::FileNode;

/// Renders the forest with tree branches, one node per line
pub struct TerminalRenderer {
    config: RenderConfig,
    tree_chars: TreeChars,
    output: String,
}

impl TerminalRenderer {
    pub fn new(config: RenderConfig, tree_chars: TreeChars) -> Self {
        Self {
            config,
            tree_chars,
            output: String::new(),
        }
    }

    fn render_level(&mut self, nodes: &[FileNode], parent_path: &str, prefix: &str) {
        for (i, node) in nodes.iter().enumerate() {
            let is_last = i == nodes.len() - 1;
            let row = Row::new(node, parent_path, &self.config);

            let branch = if is_last {
                self.tree_chars.last_branch
            } else {
                self.tree_chars.branch
            };
            self.output.push_str(&format!(
                "{}{}{}{}\n",
                prefix,
                branch,
                row.decoration,
                row.label()
            ));

            let continuation = if is_last {
                self.tree_chars.empty
            } else {
                self.tree_chars.vertical
            };
            let new_prefix = format!("{}{}", prefix, continuation);
            self.render_level(row.visible_children(), &row.path, &new_prefix);
        }
    }
}

impl Renderer for TerminalRenderer {
    fn render_tree(&mut self, forest: &[FileNode]) -> String {
        self.output.clear();

        if let Some(label) = &self.config.root_label {
            self.output.push_str(&format!("{}/\n", label));
        }
        self.render_level(forest, "", "");

        self.output.clone()
    }

    fn output_format(&self) -> OutputFormat {
        OutputFormat::Tree
    }
}
