//! Pack Size Handlers

pub(crate) mod get;
pub(crate) mod set;
