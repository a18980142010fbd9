//! SVG visualization of detected frontiers.
//!
//! Renders the occupancy grid, the frontier cell overlay (colored per
//! cluster) and one marker per frontier with an arrow along its heading.

use std::fmt::{self, Write};
use std::path::Path;

use crate::core::{CellState, WorldPoint};
use crate::error::{FrontierError, Result};
use crate::frontier::{FrontierLayer, FrontierResult};
use crate::grid::GridView;

/// Per-cluster fill colors, cycled by cluster id.
const CLUSTER_PALETTE: [&str; 8] = [
    "#E6194B", "#3CB44B", "#4363D8", "#F58231", "#911EB4", "#42D4F4", "#F032E6", "#9A6324",
];

const LEGEND_HEIGHT: f32 = 60.0;

/// SVG color scheme for visualization
#[derive(Clone, Debug, PartialEq)]
pub struct SvgColorScheme {
    /// Occupied cell color
    pub occupied: &'static str,
    /// Free cell color
    pub free: &'static str,
    /// Unknown cell color
    pub unknown: &'static str,
    /// Frontier cells never assigned to a cluster (truncated run)
    pub unassigned: &'static str,
    /// Frontier marker color
    pub frontier: &'static str,
}

impl Default for SvgColorScheme {
    fn default() -> Self {
        Self {
            occupied: "#333333",
            free: "#FFFFFF",
            unknown: "#CCCCCC",
            unassigned: "#888888",
            frontier: "#00AA00",
        }
    }
}

/// Configuration for SVG rendering
#[derive(Clone, Debug, PartialEq)]
pub struct SvgConfig {
    /// Pixels per meter
    pub scale: f32,
    /// Padding around the map in pixels
    pub padding: f32,
    /// Frontier marker radius in pixels
    pub marker_radius: f32,
    /// Color scheme
    pub colors: SvgColorScheme,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            scale: 50.0,
            padding: 20.0,
            marker_radius: 6.0,
            colors: SvgColorScheme::default(),
        }
    }
}

impl SvgConfig {
    /// Reject non-positive scale or negative padding.
    pub fn validate(&self) -> Result<()> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(FrontierError::config(format!(
                "svg_scale must be > 0, got {}",
                self.scale
            )));
        }
        if !self.padding.is_finite() || self.padding < 0.0 {
            return Err(FrontierError::config(format!(
                "svg_padding must be >= 0, got {}",
                self.padding
            )));
        }
        Ok(())
    }
}

/// Render a grid and its frontiers to an SVG document.
pub fn render_frontiers(
    view: &GridView<'_>,
    result: &FrontierResult,
    config: &SvgConfig,
) -> Result<String> {
    config.validate()?;
    let layer = FrontierLayer::from_marks(view, &result.marks)?;

    let mut svg = String::new();
    FrontierSvg {
        view,
        result,
        layer: &layer,
        config,
    }
    .write_document(&mut svg)
    .map_err(|e| FrontierError::Parse(format!("SVG formatting failed: {}", e)))?;

    Ok(svg)
}

/// Write an SVG document to disk.
pub fn save_svg(path: &Path, svg: &str) -> Result<()> {
    std::fs::write(path, svg)?;
    log::info!("Wrote SVG to {}", path.display());
    Ok(())
}

struct FrontierSvg<'a> {
    view: &'a GridView<'a>,
    result: &'a FrontierResult,
    layer: &'a FrontierLayer,
    config: &'a SvgConfig,
}

impl FrontierSvg<'_> {
    fn map_size_px(&self) -> (f32, f32) {
        let cell = self.cell_px();
        (
            self.view.width() as f32 * cell,
            self.view.height() as f32 * cell,
        )
    }

    #[inline]
    fn cell_px(&self) -> f32 {
        self.view.resolution() * self.config.scale
    }

    /// World point to map-group pixels (SVG Y axis points down).
    fn to_px(&self, p: WorldPoint, height_px: f32) -> (f32, f32) {
        let origin = self.view.origin();
        (
            (p.x - origin.x) * self.config.scale,
            height_px - (p.y - origin.y) * self.config.scale,
        )
    }

    fn write_document(&self, svg: &mut String) -> fmt::Result {
        let (map_w, map_h) = self.map_size_px();
        let padding = self.config.padding;
        let width = map_w + 2.0 * padding;
        let height = map_h + 2.0 * padding + LEGEND_HEIGHT;

        writeln!(svg, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{:.0}" height="{:.0}" viewBox="0 0 {:.0} {:.0}">"#,
            width, height, width, height
        )?;
        writeln!(svg, r##"  <rect width="100%" height="100%" fill="#F8F8F8"/>"##)?;

        writeln!(svg, r#"  <g transform="translate({:.0}, {:.0})">"#, padding, padding)?;
        self.write_grid(svg, map_h)?;
        self.write_layer(svg, map_h)?;
        self.write_frontiers(svg, map_h)?;
        writeln!(svg, "  </g>")?;

        self.write_legend(svg, map_h + 2.0 * padding)?;
        writeln!(svg, "</svg>")
    }

    fn write_grid(&self, svg: &mut String, height_px: f32) -> fmt::Result {
        let cell = self.cell_px();
        let (map_w, map_h) = self.map_size_px();
        let colors = &self.config.colors;

        writeln!(svg, r#"    <g id="grid">"#)?;
        writeln!(
            svg,
            r#"      <rect width="{:.1}" height="{:.1}" fill="{}"/>"#,
            map_w, map_h, colors.unknown
        )?;

        for (idx, &state) in self.view.cells().iter().enumerate() {
            let color = match state {
                CellState::Unknown => continue,
                CellState::Free => colors.free,
                CellState::Occupied => colors.occupied,
            };
            let coord = self.view.index_to_coord(idx);
            let px_x = coord.x as f32 * cell;
            let px_y = height_px - (coord.y + 1) as f32 * cell;
            writeln!(
                svg,
                r#"      <rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}"/>"#,
                px_x, px_y, cell, cell, color
            )?;
        }

        writeln!(svg, "    </g>")
    }

    fn write_layer(&self, svg: &mut String, height_px: f32) -> fmt::Result {
        if self.layer.is_empty() {
            return Ok(());
        }

        let size = self.layer.cell_size * self.config.scale;
        let half = self.layer.cell_size * 0.5;

        writeln!(svg, r#"    <g id="frontier-cells" opacity="0.7">"#)?;
        for cell in &self.layer.cells {
            let color = match cell.cluster {
                Some(id) => CLUSTER_PALETTE[id.get() as usize % CLUSTER_PALETTE.len()],
                None => self.config.colors.unassigned,
            };
            // Top-left corner of the cell
            let corner = WorldPoint::new(cell.position.x - half, cell.position.y + half);
            let (px, py) = self.to_px(corner, height_px);
            writeln!(
                svg,
                r#"      <rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}"/>"#,
                px, py, size, size, color
            )?;
        }
        writeln!(svg, "    </g>")
    }

    fn write_frontiers(&self, svg: &mut String, height_px: f32) -> fmt::Result {
        if self.result.is_empty() {
            return Ok(());
        }

        let color = self.config.colors.frontier;
        let radius = self.config.marker_radius;
        let arrow_len = radius * 3.0;

        writeln!(svg, r#"    <g id="frontiers">"#)?;
        for (i, wf) in self.result.weighted.iter().enumerate() {
            let (px, py) = self.to_px(wf.frontier.position, height_px);
            let dx = arrow_len * wf.frontier.heading.cos();
            let dy = -arrow_len * wf.frontier.heading.sin();

            writeln!(
                svg,
                r#"      <line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-width="2"/>"#,
                px,
                py,
                px + dx,
                py + dy,
                color
            )?;
            writeln!(
                svg,
                r#"      <circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}" stroke="white" stroke-width="1"/>"#,
                px, py, radius, color
            )?;
            writeln!(
                svg,
                r#"      <text x="{:.1}" y="{:.1}" font-family="sans-serif" font-size="10" fill="{}" text-anchor="middle" dy="-8">F{} ({})</text>"#,
                px,
                py,
                color,
                i + 1,
                wf.weight
            )?;
        }
        writeln!(svg, "    </g>")
    }

    fn write_legend(&self, svg: &mut String, y_offset: f32) -> fmt::Result {
        let result = self.result;
        writeln!(
            svg,
            r#"  <g id="legend" font-family="sans-serif" font-size="12" transform="translate(0, {:.0})">"#,
            y_offset
        )?;
        writeln!(
            svg,
            r##"    <circle cx="25" cy="15" r="6" fill="{}" stroke="white" stroke-width="1"/>"##,
            self.config.colors.frontier
        )?;
        writeln!(
            svg,
            r##"    <text x="40" y="19" fill="#333">{} frontiers, {} clusters ({} too narrow)</text>"##,
            result.len(),
            result.clusters_found,
            result.clusters_discarded
        )?;
        if result.truncated {
            writeln!(
                svg,
                r##"    <text x="40" y="39" fill="#AA2222">Truncated: {} frontier cells unassigned</text>"##,
                result.marks.seed_count()
            )?;
        }
        writeln!(svg, "  </g>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontier::{FinderConfig, find_frontiers};
    use crate::grid::OccupancyGrid;

    fn sample() -> (OccupancyGrid, FinderConfig) {
        let grid = OccupancyGrid::from_ascii(
            &["#######", "#?????#", "#.....#", "#######"],
            0.1,
            WorldPoint::ZERO,
        )
        .unwrap();
        (grid, FinderConfig::with_robot_radius(0.2))
    }

    #[test]
    fn test_render_contains_frontier_marker() {
        let (grid, config) = sample();
        let view = grid.view().unwrap();
        let result = find_frontiers(&view, &config).unwrap();

        let svg = render_frontiers(&view, &result, &SvgConfig::default()).unwrap();
        assert!(svg.starts_with("<?xml"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains(r#"id="frontier-cells""#));
        assert!(svg.contains("F1 (5)"));
        assert!(svg.contains("1 frontiers, 1 clusters (0 too narrow)"));
        assert!(!svg.contains("Truncated"));
    }

    #[test]
    fn test_render_without_frontiers() {
        let grid =
            OccupancyGrid::from_ascii(&["###", "#.#", "###"], 0.1, WorldPoint::ZERO).unwrap();
        let view = grid.view().unwrap();
        let result = find_frontiers(&view, &FinderConfig::default()).unwrap();

        let svg = render_frontiers(&view, &result, &SvgConfig::default()).unwrap();
        assert!(!svg.contains(r#"id="frontiers""#));
        assert!(svg.contains("0 frontiers"));
    }

    #[test]
    fn test_invalid_scale_rejected() {
        let (grid, config) = sample();
        let view = grid.view().unwrap();
        let result = find_frontiers(&view, &config).unwrap();
        let svg_config = SvgConfig {
            scale: 0.0,
            ..Default::default()
        };
        assert!(render_frontiers(&view, &result, &svg_config).is_err());
    }

    #[test]
    fn test_save_svg() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frontiers.svg");
        save_svg(&path, "<svg/>").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<svg/>");
    }
}
