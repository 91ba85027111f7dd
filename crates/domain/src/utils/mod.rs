//! Domain utility helpers

pub mod duration;
