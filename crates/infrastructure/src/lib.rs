pub mod dns;
pub mod persistence;
