//! Holiday table transformations.
//!
//! - **variants**: locale copies of the validated table (column renames and
//!   value translations driven by [`VARIANTS`](feriados_model::VARIANTS))
//! - **encoding**: export-ready date forms of a variant (calendar date or
//!   unix seconds)

pub mod encoding;
pub mod error;
pub mod variants;

pub use encoding::{DateEncoding, encode_dates};
pub use error::TransformError;
pub use variants::{Variant, derive_variant, derive_variants, derive_with};
