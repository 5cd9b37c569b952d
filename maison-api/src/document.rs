use uuid::Uuid;

use crate::{Error, Time, UserId, STUB_UUID};

#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
pub struct DocumentId(pub Uuid);

impl DocumentId {
    pub fn stub() -> DocumentId {
        DocumentId(STUB_UUID)
    }
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Document {
    pub id: DocumentId,
    pub owner_id: UserId,
    pub date: Time,

    pub title: String,
}

impl Document {
    // See comments on other `validate` functions throughout maison-api
    pub fn validate(&self) -> Result<(), Error> {
        crate::validate_time(&self.date)?;
        crate::validate_string(&self.title)
    }
}
