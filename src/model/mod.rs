pub mod profile;
pub mod scores;
