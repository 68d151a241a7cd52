// linemarks state managers
// The bookmark collection and the per-root folders it is made of.

pub mod bookmark_collection;
pub mod bookmark_folder;
