//! Folder path resolution.
//!
//! Turns a flat folder list (a forest, in any order) into a map from folder
//! id to its slash-joined path, e.g. `Work/Scripts/Bash`.

use std::collections::{HashMap, HashSet, VecDeque};

use masscode_api_rs::models::Folder;
use thiserror::Error;

/// Errors for folder graphs that cannot be resolved.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FolderPathError {
    /// A folder points at a parent id that is not in the list.
    #[error("folder '{id}' references missing parent '{parent_id}'")]
    DanglingParent {
        /// The folder with the broken link.
        id: String,
        /// The parent id that does not exist.
        parent_id: String,
    },

    /// The remaining folders' parent chains loop back on themselves.
    #[error("folders form a parent cycle: {}", ids.join(", "))]
    Cycle {
        /// Ids of every folder that could not be resolved, sorted.
        ids: Vec<String>,
    },
}

/// Resolves every folder's full path.
///
/// Root folders (no parent, or an empty parent id) map to their own name.
/// Other folders wait in a FIFO worklist until their parent is resolved and
/// then map to `parent_path/name`.
///
/// # Errors
///
/// Resolution stops once a full pass over the worklist makes no progress:
/// - `FolderPathError::DanglingParent` if a pending folder's parent is absent.
/// - `FolderPathError::Cycle` otherwise.
///
/// # Example
///
/// ```
/// use masscode_api_rs::models::Folder;
/// use masscode_cache_rs::resolve_folder_paths;
///
/// let folders: Vec<Folder> = serde_json::from_value(serde_json::json!([
///     {"id": "2", "name": "b", "parentId": "1"},
///     {"id": "1", "name": "a", "parentId": null},
/// ])).unwrap();
///
/// let paths = resolve_folder_paths(&folders).unwrap();
/// assert_eq!(paths["2"], "a/b");
/// ```
pub fn resolve_folder_paths(folders: &[Folder]) -> Result<HashMap<String, String>, FolderPathError> {
    let mut paths: HashMap<String, String> = HashMap::with_capacity(folders.len());
    let mut pending: VecDeque<&Folder> = VecDeque::new();

    for folder in folders {
        if folder.is_root() {
            paths.insert(folder.id.clone(), folder.name.clone());
        } else {
            pending.push_back(folder);
        }
    }

    // Consecutive requeues since the last successful resolution.
    let mut stalled = 0;

    while let Some(folder) = pending.pop_front() {
        let parent_path = folder.parent().and_then(|parent| paths.get(parent));

        match parent_path {
            Some(parent_path) => {
                let path = format!("{}/{}", parent_path, folder.name);
                paths.insert(folder.id.clone(), path);
                stalled = 0;
            }
            None => {
                pending.push_back(folder);
                stalled += 1;
                if stalled > pending.len() {
                    return Err(unresolvable(folders, &pending));
                }
            }
        }
    }

    Ok(paths)
}

/// Classifies why the remaining folders cannot be resolved.
fn unresolvable(folders: &[Folder], pending: &VecDeque<&Folder>) -> FolderPathError {
    let known: HashSet<&str> = folders.iter().map(|f| f.id.as_str()).collect();

    let dangling = pending.iter().find_map(|folder| {
        folder
            .parent()
            .filter(|parent| !known.contains(parent))
            .map(|parent| (folder.id.clone(), parent.to_string()))
    });

    match dangling {
        Some((id, parent_id)) => FolderPathError::DanglingParent { id, parent_id },
        None => {
            let mut ids: Vec<String> = pending.iter().map(|f| f.id.clone()).collect();
            ids.sort();
            FolderPathError::Cycle { ids }
        }
    }
}
