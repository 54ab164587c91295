//! Utility modules for the publish pipeline.

pub mod hash;
pub mod html;
pub mod time;
