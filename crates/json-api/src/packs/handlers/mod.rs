//! Pack Handlers

pub(crate) mod correct;
pub(crate) mod incorrect;
