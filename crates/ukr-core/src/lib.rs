//! Shared types for Ukrainian number inflection.
//!
//! - [`tag`] -- grammeme vocabulary and the [`Tag`](tag::Tag) set type
//! - [`parse`] -- the [`Parse`](parse::Parse) value produced by analyzers
//! - [`character`] -- script detection and word normalisation

pub mod character;
pub mod parse;
pub mod tag;

pub use parse::{LexemeRef, Parse};
pub use tag::Tag;
