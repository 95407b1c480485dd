pub mod book;
pub mod config;
pub mod error;
pub mod host;
pub mod nav;
pub mod scroll;
pub mod search;

pub use book::content::BookContent;
pub use book::{Chapter, ChapterRegistry};
pub use config::ReaderConfig;
pub use error::BookError;
