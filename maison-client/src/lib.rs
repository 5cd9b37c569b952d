mod db;
pub use db::DbDump;

pub mod thread;
pub use thread::build_thread;

mod view;
pub use view::{ThreadView, MAX_REPLY_DEPTH};

pub mod api {
    pub use maison_api::*;
}
