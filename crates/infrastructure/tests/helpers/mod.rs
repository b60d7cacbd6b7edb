#![allow(dead_code)]

mod fake_upstream;
mod wire;

pub use fake_upstream::*;
pub use wire::*;
