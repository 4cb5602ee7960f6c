//! Pack Sizes

mod handlers;

pub(crate) use handlers::*;
