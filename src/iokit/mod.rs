#[macro_use]
pub(crate) mod errors;
mod display;
mod wrappers;

pub(crate) use display::*;
pub(crate) use wrappers::*;
