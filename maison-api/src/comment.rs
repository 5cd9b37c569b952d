use uuid::Uuid;

use crate::{Error, Time, UserId, STUB_UUID};

#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
pub struct CommentId(pub Uuid);

impl CommentId {
    pub fn stub() -> CommentId {
        CommentId(STUB_UUID)
    }
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Comment {
    pub id: CommentId,

    /// Author, resolved against the user list of the same fetch
    pub from_user: UserId,

    /// Used only for ordering within a thread
    pub created_at: Time,

    pub content: String,

    /// None marks a top-level comment
    #[serde(default)]
    pub parent_id: Option<CommentId>,

    /// Users @-mentioned in `content`, in order of appearance
    #[serde(default)]
    pub mentioned_users: Vec<UserId>,

    /// Child comments; the backend may send these pre-populated, or leave
    /// them empty and let the client rebuild the tree from `parent_id` links
    #[serde(default)]
    pub replies: Vec<Comment>,
}

impl Comment {
    // See comments on other `validate` functions throughout maison-api
    pub fn validate(&self) -> Result<(), Error> {
        crate::validate_time(&self.created_at)?;
        crate::validate_string(&self.content)
    }
}
