//! Per-kind record generators and the lookup tables they cycle through.

mod case;
mod news;
mod policy;
/// Fixed lookup tables (regions, categories, keywords).
pub mod tables;

pub use case::generate_case;
pub use news::generate_news;
pub use policy::generate_policy;

/// Zero-pad `index` to at least `width` digits; wider values are kept whole.
pub fn padded(index: usize, width: usize) -> String {
    format!("{index:0width$}")
}
