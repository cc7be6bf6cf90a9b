#![doc = include_str!("../README.md")]
#![no_std]
#![deny(
    unsafe_code,
    unused_imports,
    unused_variables,
    unused_must_use,
    missing_docs,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::dbg_macro,
    clippy::todo,
    clippy::unimplemented
)]
#![allow(clippy::just_underscores_and_digits, clippy::len_without_is_empty)]

#[macro_use]
extern crate alloc;

pub(crate) type Kbn<T> = compensated_summation::KahanBabuskaNeumaier<T>;

mod utils;
pub(crate) use utils::helper;

mod error;
pub use error::{Statistic, StatsError};

mod parser;
pub use parser::parse_values;

mod frequency;
pub use frequency::FrequencyTable;

mod series;
pub use series::{Modes, Series};

mod summary;
pub use summary::Summary;

mod report;
pub use report::{DEFAULT_PRECISION, DEFAULT_WIDTH, Report, wrap_line};
