#![allow(dead_code)]

mod client;
mod common;

pub use client::{run_app, ConsentDialog, ConsentState};
pub use common::{
    display_points, privacy_bullets, Config, DisplayPoint, Icon, Inline, PointText, CONFIG,
};
