//! Chart aggregate: theme registry, typed Vega-Lite spec, the pure
//! plot builder, and the embeddable HTML document.

pub mod builder;
pub mod embed;
pub mod spec;
pub mod theme;

pub use builder::*;
pub use embed::*;
pub use spec::*;
pub use theme::{registry, Theme, ThemeRegistry};
