//! Domain layer: the field catalog, the theme registry, and the pure
//! chart construction pipeline. Nothing in here touches the DOM or
//! logs, so every module is exercised by native tests.

pub mod chart;
pub mod dataset;
pub mod errors;
pub mod logging;
