//! A moodboard of image pins: filter them by aesthetic, search titles and
//! tags, and save them to boards. State is two JSON documents in a
//! key-value store, loaded with fallbacks and rewritten after every change.

pub mod cli;
pub mod io;
pub mod model;
pub mod ops;
pub mod util;
