pub mod authors;
pub mod posts;
pub mod stats;

pub use authors::AuthorPipeline;
pub use posts::PostPipeline;
pub use stats::{AuthorRunStats, PostRunStats};
