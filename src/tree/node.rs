use serde::{Deserialize, Serialize};

/// A single entry of the explorer tree.
///
/// Serialized as `{"type": "file", "name": ...}` or
/// `{"type": "directory", "name": ..., "children": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FileNode {
    File {
        name: String,
    },
    Directory {
        name: String,
        #[serde(default)]
        children: Vec<FileNode>,
    },
}

impl FileNode {
    pub fn file(name: impl Into<String>) -> Self {
        FileNode::File { name: name.into() }
    }

    /// An empty directory
    pub fn directory(name: impl Into<String>) -> Self {
        FileNode::Directory {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn with_children(name: impl Into<String>, children: Vec<FileNode>) -> Self {
        FileNode::Directory {
            name: name.into(),
            children,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            FileNode::File { name } | FileNode::Directory { name, .. } => name,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, FileNode::Directory { .. })
    }

    /// Children of a directory; files always report none
    pub fn children(&self) -> &[FileNode] {
        match self {
            FileNode::File { .. } => &[],
            FileNode::Directory { children, .. } => children.as_slice(),
        }
    }

    /// Total number of nodes in this subtree, including itself
    pub fn count(&self) -> usize {
        1 + self.children().iter().map(FileNode::count).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let dir = FileNode::with_children("src", vec![FileNode::file("main.rs")]);
        assert_eq!(dir.name(), "src");
        assert!(dir.is_dir());
        assert_eq!(dir.children().len(), 1);
        assert_eq!(dir.count(), 2);

        let file = FileNode::file("main.rs");
        assert!(!file.is_dir());
        assert!(file.children().is_empty());
    }

    #[test]
    fn test_serialized_shape() {
        let dir = FileNode::with_children("a", vec![FileNode::file("b.txt")]);
        let json = serde_json::to_value(&dir).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "directory",
                "name": "a",
                "children": [{ "type": "file", "name": "b.txt" }]
            })
        );
    }

    #[test]
    fn test_directory_without_children_field() {
        let node: FileNode = serde_json::from_str(r#"{"type":"directory","name":"empty"}"#).unwrap();
        assert_eq!(node, FileNode::directory("empty"));
    }

    #[test]
    fn test_unknown_type_rejected() {
        let result: Result<FileNode, _> = serde_json::from_str(r#"{"type":"symlink","name":"x"}"#);
        assert!(result.is_err());
    }
}
