pub mod markdown;
pub mod renderer;
pub mod terminal;

pub use markdown::MarkdownRenderer;
pub use renderer::{Expansion, OutputFormat, RenderConfig, Renderer};
pub use terminal::TerminalRenderer;

use crate::terminal::TreeChars;

/// Create the renderer for a resolved output format
pub fn create_renderer(
    format: OutputFormat,
    config: RenderConfig,
    tree_chars: TreeChars,
) -> Box<dyn Renderer> {
    match format {
        OutputFormat::Tree => Box::new(TerminalRenderer::new(config, tree_chars)),
        OutputFormat::Markdown => Box::new(MarkdownRenderer::new(config)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::structure_paths;

    #[test]
    fn test_create_renderer() {
        let renderer = create_renderer(
            OutputFormat::Markdown,
            RenderConfig::default(),
            TreeChars::ascii(),
        );
        assert_eq!(renderer.output_format(), OutputFormat::Markdown);

        let mut renderer =
            create_renderer(OutputFormat::Tree, RenderConfig::default(), TreeChars::ascii());
        assert_eq!(renderer.output_format(), OutputFormat::Tree);
        assert_eq!(renderer.render_tree(&structure_paths(["a.txt"])), "`-- a.txt\n");
    }
}
