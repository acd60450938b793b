/// User interface module
///
/// This module contains the detail window:
/// - Layout, thumbnail lifecycle, and window metadata (detail.rs)

pub mod detail;

pub use detail::DetailView;
