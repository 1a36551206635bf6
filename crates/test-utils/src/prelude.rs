//! Re-exports of the most commonly used generators.

pub use crate::{bitcoin::*, deposit::*};
