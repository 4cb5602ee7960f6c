//! Packing
//!
//! Packing works out how to fulfil an ordered quantity of items from a catalog
//! of fixed-size packs, using as few packs as possible and, among those, as few
//! surplus items as possible. It never ships fewer items than were ordered.
//!
//! ```
//! use packing::prelude::*;
//!
//! let packer = Packer::default();
//!
//! assert_eq!(packer.correct(750), PackSelection::from([(500, 1), (250, 1)]));
//! ```

pub mod catalog;
pub mod engine;
pub mod packer;
pub mod plan;
pub mod prelude;
pub mod selection;
pub mod utils;
