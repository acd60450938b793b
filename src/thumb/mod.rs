/// Thumbnail resolution module
///
/// This module turns a record's optional thumbnail URL into something the
/// view can draw:
/// - URL gating, the bounded fetch, decode and scale (resolver.rs)

pub mod resolver;

pub use resolver::{ResolvedImage, ScaledBitmap};
