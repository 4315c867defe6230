pub mod partisanship;
pub mod post;

pub use partisanship::PartisanshipClassifier;
pub use post::PostClassifier;
