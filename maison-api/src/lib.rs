use chrono::{Datelike, Utc};

pub use uuid::{uuid, Uuid};
pub type Time = chrono::DateTime<Utc>;

pub const STUB_UUID: Uuid = uuid!("ffffffff-ffff-ffff-ffff-ffffffffffff");

mod comment;
mod document;
mod error;
mod user;

pub use comment::{Comment, CommentId};
pub use document::{Document, DocumentId};
pub use error::Error;
pub use user::{User, UserId};

// See comments on the `validate` functions of the individual types: anything
// that crosses the wire gets checked with these before being trusted.

pub fn validate_string(s: &str) -> Result<(), Error> {
    if s.contains('\0') {
        return Err(Error::NullByteInString(s.to_string()));
    }
    Ok(())
}

pub fn validate_time(t: &Time) -> Result<(), Error> {
    // Four-digit ISO-8601 years only, the backend refuses anything else
    match t.year() {
        0..=9999 => Ok(()),
        _ => Err(Error::InvalidTime(*t)),
    }
}
