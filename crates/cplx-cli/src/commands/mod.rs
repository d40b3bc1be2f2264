pub mod merge;
pub mod query;
pub mod translate;
