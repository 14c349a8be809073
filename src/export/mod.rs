//! PNG and SVG export of a grid snapshot, one unit per cell.

use crate::editor::{Color, Grid};
use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage};
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("failed to write export file\n{0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode image\n{0}")]
    Image(#[from] image::ImageError),
}

/// Files written by one export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPaths {
    pub png: PathBuf,
    pub svg: PathBuf,
    pub scaled_png: Option<PathBuf>,
}

pub fn to_image(grid: &Grid) -> RgbImage {
    let size = grid.size() as u32;
    let mut img = RgbImage::new(size, size);
    for (x, y, c) in grid.iter() {
        img.put_pixel(x as u32, y as u32, Rgb([c.r, c.g, c.b]));
    }
    img
}

/// Nearest-neighbor upscale, each cell becomes `scale x scale` pixels.
pub fn to_scaled_image(grid: &Grid, scale: u32) -> RgbImage {
    let img = to_image(grid);
    let scale = scale.max(1);
    imageops::resize(&img, img.width() * scale, img.height() * scale, FilterType::Nearest)
}

/// SVG with one `rect` per horizontal run of equal cells.
pub fn to_svg(grid: &Grid) -> String {
    let size = grid.size();
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}" shape-rendering="crispEdges">"#
    );
    for y in 0..size {
        let Some(row) = grid.row(y) else { continue };
        for (x, len, color) in runs(row) {
            let _ = writeln!(
                out,
                r#"  <rect x="{x}" y="{y}" width="{len}" height="1" fill="{color}"/>"#
            );
        }
    }
    out.push_str("</svg>\n");
    out
}

fn runs(row: &[Color]) -> Vec<(usize, usize, Color)> {
    let mut out: Vec<(usize, usize, Color)> = Vec::new();
    for (x, &c) in row.iter().enumerate() {
        match out.last_mut() {
            Some((_, len, last)) if *last == c => *len += 1,
            _ => out.push((x, 1, c)),
        }
    }
    out
}

pub fn write_png(grid: &Grid, path: &Path) -> Result<(), ExportError> {
    to_image(grid).save(path)?;
    Ok(())
}

pub fn write_svg(grid: &Grid, path: &Path) -> Result<(), ExportError> {
    fs::write(path, to_svg(grid))?;
    Ok(())
}

/// Write `<stem>.png`, `<stem>.svg` and, when `scale > 1`, `<stem>@<scale>x.png`.
///
/// Existing files are never overwritten: a taken stem gets a `-2`, `-3`, ...
/// suffix.
pub fn export_all(
    grid: &Grid,
    dir: &Path,
    stem: &str,
    scale: Option<u32>,
) -> Result<ExportPaths, ExportError> {
    fs::create_dir_all(dir)?;
    let stem = free_stem(dir, stem, scale);

    let png = dir.join(format!("{stem}.png"));
    let svg = dir.join(format!("{stem}.svg"));
    write_png(grid, &png)?;
    write_svg(grid, &svg)?;

    let scaled_png = match scale {
        Some(s) if s > 1 => {
            let path = dir.join(format!("{stem}@{s}x.png"));
            to_scaled_image(grid, s).save(&path)?;
            Some(path)
        }
        _ => None,
    };

    Ok(ExportPaths {
        png,
        svg,
        scaled_png,
    })
}

/// First of `base`, `base-2`, `base-3`, ... with none of its files in `dir`.
fn free_stem(dir: &Path, base: &str, scale: Option<u32>) -> String {
    let taken = |stem: &str| {
        let mut names = vec![format!("{stem}.png"), format!("{stem}.svg")];
        if let Some(s) = scale.filter(|s| *s > 1) {
            names.push(format!("{stem}@{s}x.png"));
        }
        names.iter().any(|name| dir.join(name).exists())
    };

    if !taken(base) {
        return base.to_string();
    }
    (2u32..)
        .map(|n| format!("{base}-{n}"))
        .find(|stem| !taken(stem))
        .unwrap_or_else(|| base.to_string())
}

/// `pixel-YYYYMMDD-HHMMSS` in UTC.
pub fn timestamped_stem() -> String {
    let now = time::OffsetDateTime::now_utc();
    format!(
        "pixel-{:04}{:02}{:02}-{:02}{:02}{:02}",
        now.year(),
        u8::from(now.month()),
        now.day(),
        now.hour(),
        now.minute(),
        now.second()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::rgb(255, 0, 0);

    fn sample_grid() -> Grid {
        let mut grid = Grid::new(6).unwrap();
        grid.set(0, 0, RED).unwrap();
        grid.set(1, 0, RED).unwrap();
        grid.set(5, 5, Color::BLACK).unwrap();
        grid
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("tinypix-test-{name}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_image_is_one_pixel_per_cell() {
        let img = to_image(&sample_grid());
        assert_eq!(img.dimensions(), (6, 6));
        assert_eq!(img.get_pixel(1, 0), &Rgb([255, 0, 0]));
        assert_eq!(img.get_pixel(2, 0), &Rgb([255, 255, 255]));
        assert_eq!(img.get_pixel(5, 5), &Rgb([0, 0, 0]));
    }

    #[test]
    fn test_scaled_image_has_no_smoothing() {
        let img = to_scaled_image(&sample_grid(), 4);
        assert_eq!(img.dimensions(), (24, 24));
        assert_eq!(img.get_pixel(7, 3), &Rgb([255, 0, 0]));
        assert_eq!(img.get_pixel(8, 0), &Rgb([255, 255, 255]));
        assert_eq!(img.get_pixel(23, 23), &Rgb([0, 0, 0]));
        assert_eq!(img.get_pixel(19, 19), &Rgb([255, 255, 255]));
    }

    #[test]
    fn test_svg_merges_runs() {
        let svg = to_svg(&sample_grid());
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"viewBox="0 0 6 6""#));
        assert!(svg.contains(r##"<rect x="0" y="0" width="2" height="1" fill="#ff0000"/>"##));
        assert!(svg.contains(r##"<rect x="2" y="0" width="4" height="1" fill="#ffffff"/>"##));
        assert!(svg.contains(r##"<rect x="5" y="5" width="1" height="1" fill="#000000"/>"##));
        // Rows 1..=4 are a single white run each.
        assert_eq!(svg.matches("<rect").count(), 2 + 4 + 2);
    }

    #[test]
    fn test_export_all_writes_files() {
        let dir = scratch_dir("export-all");
        let paths = export_all(&sample_grid(), &dir, "art", Some(3)).unwrap();

        assert_eq!(paths.png, dir.join("art.png"));
        assert_eq!(paths.svg, dir.join("art.svg"));
        assert_eq!(paths.scaled_png, Some(dir.join("art@3x.png")));

        let png = image::open(&paths.png).unwrap().to_rgb8();
        assert_eq!(png.dimensions(), (6, 6));
        assert_eq!(png.get_pixel(0, 0), &Rgb([255, 0, 0]));

        let scaled = image::open(dir.join("art@3x.png")).unwrap().to_rgb8();
        assert_eq!(scaled.dimensions(), (18, 18));

        let svg = fs::read_to_string(&paths.svg).unwrap();
        assert!(svg.trim_end().ends_with("</svg>"));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_export_all_without_scale() {
        let dir = scratch_dir("export-plain");
        let paths = export_all(&sample_grid(), &dir, "art", Some(1)).unwrap();
        assert!(paths.scaled_png.is_none());
        assert!(paths.png.exists());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_export_never_overwrites_same_stem() {
        let dir = scratch_dir("export-twice");
        let first = export_all(&sample_grid(), &dir, "art", Some(2)).unwrap();

        let mut repainted = sample_grid();
        repainted.set(3, 3, RED).unwrap();
        let second = export_all(&repainted, &dir, "art", Some(2)).unwrap();
        let third = export_all(&repainted, &dir, "art", Some(2)).unwrap();

        assert_eq!(first.png, dir.join("art.png"));
        assert_eq!(second.png, dir.join("art-2.png"));
        assert_eq!(second.svg, dir.join("art-2.svg"));
        assert_eq!(second.scaled_png, Some(dir.join("art-2@2x.png")));
        assert_eq!(third.png, dir.join("art-3.png"));

        let kept = image::open(&first.png).unwrap().to_rgb8();
        assert_eq!(kept.get_pixel(3, 3), &Rgb([255, 255, 255]));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_timestamped_stem_shape() {
        let stem = timestamped_stem();
        assert!(stem.starts_with("pixel-"));
        assert_eq!(stem.len(), "pixel-YYYYMMDD-HHMMSS".len());
    }
}
