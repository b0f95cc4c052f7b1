//! Record types served by the massCode json-server API.
//!
//! Only the fields this client reasons about are typed. Everything else the
//! server sends is kept in each record's `extra` map, so a record that is
//! fetched, modified and sent back loses nothing.

mod folder;
mod snippet;
mod tag;

pub use folder::{Folder, FolderPatch};
pub use snippet::{Snippet, SnippetContent, SnippetPatch};
pub use tag::{Tag, TagPatch};

/// Unknown JSON fields carried alongside a typed record.
pub type Extra = serde_json::Map<String, serde_json::Value>;

/// A record with a stable id and a display name.
///
/// Implemented by [`Tag`] and [`Folder`] so name/id maps and name matching
/// can be written once.
pub trait Named {
    /// The record id.
    fn id(&self) -> &str;
    /// The display name.
    fn name(&self) -> &str;
}
