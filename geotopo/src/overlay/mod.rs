//! Overlay operations built on top of the relate engine.

mod union;

pub(crate) use union::union;
