pub mod aggregate;
pub mod histogram;
pub mod rank;
pub mod score;
