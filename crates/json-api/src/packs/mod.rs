//! Packs

mod handlers;

pub(crate) use handlers::*;
