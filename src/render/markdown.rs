use crate::render::renderer::{OutputFormat, RenderConfig, Renderer, Row};
use crate::tree::FileNode;

/// Pure Markdown renderer with bullet lists
pub struct MarkdownRenderer {
    config: RenderConfig,
    output: String,
}

impl MarkdownRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self {
            config,
            output: String::new(),
        }
    }

    fn render_level(&mut self, nodes: &[FileNode], parent_path: &str, indent: usize) {
        let indent_str = "  ".repeat(indent);

        for node in nodes {
            let row = Row::new(node, parent_path, &self.config);
            self.output.push_str(&format!(
                "{}- {}{}\n",
                indent_str,
                row.decoration,
                row.label()
            ));
            self.render_level(row.visible_children(), &row.path, indent + 1);
        }
    }
}

impl Renderer for MarkdownRenderer {
    fn render_tree(&mut self, forest: &[FileNode]) -> String {
        self.output.clear();

        if let Some(label) = &self.config.root_label {
            self.output.push_str(&format!("## {}\n\n", label));
        }
        self.render_level(forest, "", 0);

        self.output.clone()
    }

    fn output_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::IconMapper;
    use crate::tree::{insert_directory, structure_paths};

    #[test]
    fn test_markdown_nesting() {
        let forest = insert_directory("a", &structure_paths(["a/b.txt", "c.txt"]), "empty");
        let mut renderer = MarkdownRenderer::new(RenderConfig::default());

        assert_eq!(
            renderer.render_tree(&forest),
            "- a/\n  - b.txt\n  - empty/\n- c.txt\n"
        );
        assert_eq!(renderer.output_format(), OutputFormat::Markdown);
    }

    #[test]
    fn test_markdown_heading_and_icons() {
        let config = RenderConfig {
            icons: IconMapper::new(true),
            root_label: Some("web".to_string()),
            ..RenderConfig::default()
        };
        let mut renderer = MarkdownRenderer::new(config);
        let output = renderer.render_tree(&structure_paths(["package.json"]));

        assert_eq!(output, "## web\n\n- 🧾 package.json\n");
    }
}
