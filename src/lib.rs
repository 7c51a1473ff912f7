//! Build a file-explorer tree from slash-delimited paths, edit it
//! copy-on-write, render it with icons and keep it in a key-value store.

pub mod cli;
pub mod config;
pub mod errors;
pub mod explorer;
pub mod icon;
pub mod input;
pub mod render;
pub mod store;
pub mod terminal;
pub mod tree;

pub use explorer::Explorer;
pub use tree::{delete_node, insert_directory, insert_file, structure_paths, FileNode};
