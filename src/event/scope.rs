//! Folder scoping for record queries.

use std::collections::{HashMap, HashSet};

use super::model::Folder;

/// A record that lives in a storage folder.
pub trait Scoped {
    fn folder_id(&self) -> i64;
}

/// Decides whether a record's containing folder is in scope.
pub trait RecordScope: Send + Sync {
    fn contains_folder(&self, folder_id: i64) -> bool;

    fn matches(&self, record: &dyn Scoped) -> bool {
        self.contains_folder(record.folder_id())
    }
}

/// Children index over the folder records.
#[derive(Debug, Clone, Default)]
pub struct FolderTree {
    children: HashMap<i64, Vec<i64>>,
}

impl FolderTree {
    pub fn new(folders: &[Folder]) -> Self {
        let mut children: HashMap<i64, Vec<i64>> = HashMap::new();
        for folder in folders {
            children.entry(folder.pid).or_default().push(folder.uid);
        }
        Self { children }
    }

    pub fn children_of(&self, folder_id: i64) -> &[i64] {
        self.children
            .get(&folder_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// A set of root folders, optionally including everything below them.
#[derive(Debug, Clone)]
pub struct FolderScope {
    // None means "every folder".
    folders: Option<HashSet<i64>>,
}

impl FolderScope {
    pub fn everywhere() -> Self {
        Self { folders: None }
    }

    pub fn new(roots: &[i64], recursive: bool, tree: &FolderTree) -> Self {
        if roots.is_empty() {
            return Self::everywhere();
        }

        let mut folders: HashSet<i64> = HashSet::new();
        let mut pending: Vec<i64> = roots.to_vec();

        while let Some(folder_id) = pending.pop() {
            // The visited check also stops cycles in broken folder data.
            if !folders.insert(folder_id) {
                continue;
            }
            if recursive {
                pending.extend_from_slice(tree.children_of(folder_id));
            }
        }

        Self {
            folders: Some(folders),
        }
    }
}

impl RecordScope for FolderScope {
    fn contains_folder(&self, folder_id: i64) -> bool {
        match &self.folders {
            Some(folders) => folders.contains(&folder_id),
            None => true,
        }
    }
}
