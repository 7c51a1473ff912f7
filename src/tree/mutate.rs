//! Copy-on-write edits over a forest.
//!
//! Every function borrows its input and returns a freshly built forest. Node
//! paths are computed while walking, with [`join_path`] from the top level.
//! A target that matches nothing leaves the result equal to the input.

use super::join_path;
use super::node::FileNode;

/// Append an empty directory `new_name` to every directory whose path is `target_path`
pub fn insert_directory(target_path: &str, forest: &[FileNode], new_name: &str) -> Vec<FileNode> {
    insert_child(forest, target_path, "", &|| FileNode::directory(new_name))
}

/// Append a file `new_name` to every directory whose path is `target_path`
pub fn insert_file(target_path: &str, forest: &[FileNode], new_name: &str) -> Vec<FileNode> {
    insert_child(forest, target_path, "", &|| FileNode::file(new_name))
}

fn insert_child(
    nodes: &[FileNode],
    target_path: &str,
    parent_path: &str,
    make: &dyn Fn() -> FileNode,
) -> Vec<FileNode> {
    nodes
        .iter()
        .map(|node| match node {
            FileNode::Directory { name, children } => {
                let full_path = join_path(parent_path, name);
                let children = if full_path == target_path {
                    let mut appended = children.clone();
                    appended.push(make());
                    appended
                } else {
                    insert_child(children, target_path, &full_path, make)
                };
                FileNode::with_children(name.clone(), children)
            }
            FileNode::File { .. } => node.clone(),
        })
        .collect()
}

/// Drop every node whose path is `path_to_delete`, along with its subtree.
///
/// Matching is by path only, so files and directories are removed alike.
pub fn delete_node(forest: &[FileNode], path_to_delete: &str) -> Vec<FileNode> {
    delete_under(forest, path_to_delete, "")
}

fn delete_under(nodes: &[FileNode], path_to_delete: &str, parent_path: &str) -> Vec<FileNode> {
    nodes
        .iter()
        .filter_map(|node| {
            let full_path = join_path(parent_path, node.name());
            if full_path == path_to_delete {
                return None;
            }
            Some(match node {
                FileNode::Directory { name, children } => FileNode::with_children(
                    name.clone(),
                    delete_under(children, path_to_delete, &full_path),
                ),
                FileNode::File { .. } => node.clone(),
            })
        })
        .collect()
}

/// Whether any node in the forest has the given path
pub fn contains_path(forest: &[FileNode], path: &str) -> bool {
    contains_under(forest, path, "")
}

fn contains_under(nodes: &[FileNode], path: &str, parent_path: &str) -> bool {
    nodes.iter().any(|node| {
        let full_path = join_path(parent_path, node.name());
        full_path == path || contains_under(node.children(), path, &full_path)
    })
}
