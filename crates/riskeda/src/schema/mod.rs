//! Column definitions for the maternal health risk dataset.

mod feature;
mod record;

pub use feature::{Feature, LABEL_COLUMN};
pub use record::Record;

/// All column names a dataset must provide, features first.
pub fn required_columns() -> impl Iterator<Item = &'static str> {
    Feature::ALL
        .iter()
        .map(|f| f.column_name())
        .chain(std::iter::once(LABEL_COLUMN))
}
