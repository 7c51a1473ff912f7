pub mod mutate;
pub mod node;
pub mod structure;

pub use mutate::{contains_path, delete_node, insert_directory, insert_file};
pub use node::FileNode;
pub use structure::structure_paths;

/// Join a parent path and a segment the way node paths are computed.
/// Top-level nodes have no parent, so their path is the bare name.
pub fn join_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", parent, name)
    }
}
