use super::node::FileNode;

/// Build a forest from `/`-delimited paths.
///
/// Every segment but the last becomes a directory, reused when a directory
/// with the same name already exists at that level. The last segment is
/// always appended as a new file, so repeated paths yield repeated files.
/// Sibling order follows input order.
pub fn structure_paths<I, S>(paths: I) -> Vec<FileNode>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut forest = Vec::new();
    for path in paths {
        insert_path_into_tree(&mut forest, path.as_ref());
    }
    forest
}

/// Insert one path into an in-progress forest
pub fn insert_path_into_tree(level: &mut Vec<FileNode>, path: &str) {
    let segments: Vec<&str> = path.split('/').collect();
    insert_segments(level, &segments);
}

fn insert_segments(level: &mut Vec<FileNode>, segments: &[&str]) {
    match segments {
        [] => {}
        [file_name] => level.push(FileNode::file(*file_name)),
        [dir_name, rest @ ..] => {
            let index = match level
                .iter()
                .position(|node| node.is_dir() && node.name() == *dir_name)
            {
                Some(index) => index,
                None => {
                    level.push(FileNode::directory(*dir_name));
                    level.len() - 1
                }
            };
            // the node at `index` was matched or created as a directory
            if let FileNode::Directory { children, .. } = &mut level[index] {
                insert_segments(children, rest);
            }
        }
    }
}
