//! Library model: normalized tracks and their artist/album grouping.
//!
//! Raw tag values go through `normalize` to become a [`Track`]; `group`
//! collects tracks into a [`LibraryIndex`] keyed by the snake case form of
//! their ASCII artist and album.

mod index;
mod model;
mod normalize;
mod snake;

pub use index::*;
pub use model::*;
pub use normalize::*;
pub use snake::*;
