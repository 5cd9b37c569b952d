use std::collections::HashSet;

use crate::api::{Comment, CommentId};

/// Depth at which the reply affordance stops being offered. The data model
/// itself nests without bound, this only caps what the renderer proposes.
pub const MAX_REPLY_DEPTH: usize = 5;

/// Interaction state of one document's comment panel.
///
/// Kept as an explicit value owned by the caller instead of ambient UI
/// state: the renderer passes it alongside the threaded comments and
/// mutates it through these methods only.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ThreadView {
    collapsed: HashSet<CommentId>,
    editing: Option<CommentId>,
}

impl ThreadView {
    pub fn new() -> ThreadView {
        ThreadView::default()
    }

    pub fn is_collapsed(&self, id: &CommentId) -> bool {
        self.collapsed.contains(id)
    }

    pub fn toggle_collapsed(&mut self, id: CommentId) {
        if !self.collapsed.remove(&id) {
            self.collapsed.insert(id);
        }
    }

    /// At most one comment is in edit mode at a time
    pub fn start_editing(&mut self, id: CommentId) {
        self.editing = Some(id);
    }

    pub fn stop_editing(&mut self) {
        self.editing = None;
    }

    pub fn editing(&self) -> Option<CommentId> {
        self.editing
    }

    /// Top-level comments are at depth 0
    pub fn can_reply_at(depth: usize) -> bool {
        depth < MAX_REPLY_DEPTH
    }

    /// Number of comments the renderer will actually show, skipping the
    /// subtrees of collapsed comments
    pub fn visible_count(&self, comments: &[Comment]) -> usize {
        comments
            .iter()
            .map(|c| {
                if self.is_collapsed(&c.id) {
                    1
                } else {
                    1 + self.visible_count(&c.replies)
                }
            })
            .sum()
    }
}
