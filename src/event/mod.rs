//! Events, their time frames, and folder scoping.

pub mod filter;
pub mod handlers;
pub mod list;
pub mod model;
pub mod scope;

use crate::store::{RecordStore, StoreError};
use scope::{FolderScope, FolderTree};

/// Build the scope for `pages`. The folder tree is only loaded when the
/// scope has to descend into sub-folders.
pub async fn load_scope(
    store: &dyn RecordStore,
    pages: &[i64],
    recursive: bool,
) -> Result<FolderScope, StoreError> {
    if pages.is_empty() {
        return Ok(FolderScope::everywhere());
    }

    let tree = if recursive {
        FolderTree::new(&store.find_folders().await?)
    } else {
        FolderTree::default()
    };
    Ok(FolderScope::new(pages, recursive, &tree))
}
