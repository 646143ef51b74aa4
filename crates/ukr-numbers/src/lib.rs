//! Ukrainian numbers that agree with a sample word.
//!
//! Given a number and a sample word, [`Numbers::convert_to_auto`] renders the
//! number as an ordinal or cardinal word in the sample's case, gender and
//! number: `2` with "тридцятому" gives "другому", `3` with "пʼятьма" gives
//! "трьома".
//!
//! - [`engine`] -- the [`Numbers`] engine
//! - [`disambiguate`] -- parse selection and pure parse adjustments
//! - [`metadata`] -- [`NumberMetadata`]
//! - [`error`] -- [`InflectError`]
//! - [`options`] -- [`NumbersOptions`]
//!
//! The engine talks to a morphological analyzer through
//! [`ukr_morph::Analyzer`] and to a number speller through
//! [`ukr_num2words::NumberSpeller`]; both default to the built-in Ukrainian
//! implementations.

pub mod disambiguate;
pub mod engine;
pub mod error;
pub mod metadata;
pub mod options;

pub use engine::{DiagnosticHook, Numbers};
pub use error::{ErrorKind, InflectError};
pub use metadata::NumberMetadata;
pub use options::NumbersOptions;
