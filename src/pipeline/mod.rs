pub mod fetcher;
pub mod filters;
pub mod handler;
pub mod images;
pub mod report;

pub use filters::PreferenceSet;
pub use handler::MatchHandler;
pub use images::ImageCatalog;
pub use report::{MatchReport, Notice, NoticeLevel};
