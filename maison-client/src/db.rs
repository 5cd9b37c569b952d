use std::{collections::HashMap, sync::Arc};

use anyhow::anyhow;

use crate::{
    api::{Comment, CommentId, Document, DocumentId, User, UserId},
    thread,
};

/// Client-side snapshot of everything fetched from the backend so far.
///
/// Comment lists are replaced wholesale on every refetch, there is no
/// incremental patching: create and delete both go through a full refetch
/// of the document's comments followed by [`DbDump::set_comments`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DbDump {
    pub owner: UserId,
    pub users: Arc<HashMap<UserId, User>>,
    pub documents: Arc<HashMap<DocumentId, Document>>,
    pub comments: Arc<HashMap<DocumentId, Vec<Comment>>>,
}

impl DbDump {
    pub fn stub() -> DbDump {
        DbDump {
            owner: UserId::stub(),
            users: Arc::new(HashMap::new()),
            documents: Arc::new(HashMap::new()),
            comments: Arc::new(HashMap::new()),
        }
    }

    pub fn add_users(&mut self, users: Vec<User>) {
        Arc::make_mut(&mut self.users).extend(users.into_iter().map(|u| (u.id, u)));
    }

    pub fn add_documents(&mut self, documents: Vec<Document>) {
        Arc::make_mut(&mut self.documents).extend(documents.into_iter().map(|d| (d.id, d)));
    }

    /// Replaces the comment set for `doc` with its threaded form
    pub fn set_comments(&mut self, doc: DocumentId, comments: Vec<Comment>) {
        Arc::make_mut(&mut self.comments).insert(doc, thread::build_thread(comments));
    }

    pub fn document(&self, id: &DocumentId) -> Option<&Document> {
        self.documents.get(id)
    }

    /// Threaded comments for `doc`, empty if never fetched
    pub fn comments(&self, doc: &DocumentId) -> &[Comment] {
        self.comments.get(doc).map(|c| &c[..]).unwrap_or(&[])
    }

    pub fn comment(&self, doc: &DocumentId, id: &CommentId) -> Option<&Comment> {
        thread::find_in(self.comments(doc), id)
    }

    pub fn user_name(&self, id: &UserId) -> Option<String> {
        self.users.get(id).map(|u| u.full_name())
    }

    pub fn author(&self, c: &Comment) -> anyhow::Result<&User> {
        self.users.get(&c.from_user).ok_or_else(|| {
            anyhow!(
                "comment {:?} references author {:?} that is not in db",
                c.id,
                c.from_user
            )
        })
    }
}
