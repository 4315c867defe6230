pub mod config;
pub mod labels;
pub mod rows;

pub use config::AppConfig;
pub use labels::{Partisanship, PoliticalLabel};
pub use rows::{AuthorRow, PostRow};
