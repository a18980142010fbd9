//! Output helpers.
//!
//! ## SVG Visualization
//!
//! ```rust,ignore
//! use disha_frontier::io::{SvgConfig, render_frontiers, save_svg};
//! use std::path::Path;
//!
//! let svg = render_frontiers(&view, &result, &SvgConfig::default())?;
//! save_svg(Path::new("frontiers.svg"), &svg)?;
//! ```

pub mod svg;

pub use svg::{SvgColorScheme, SvgConfig, render_frontiers, save_svg};
