//! Utilities shared by the cursor and transform modules.

mod log;

pub(crate) use log::{debug, trace};
