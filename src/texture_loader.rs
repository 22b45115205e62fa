use std::collections::BTreeSet;
use std::fs;
use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use exif::{In, Reader, Tag, Value};
use raylib::prelude::*;
use tracing::{debug, warn};

use crate::source::ImageSource;

// --- Helper: Find the slide range on disk ---
/// Scans the directory of `base` for `{prefix}{n}.{ext}` files and returns
/// the lowest and highest `n`.
pub fn detect_range(base: &str, ext: &str) -> Result<(i64, i64)> {
    let (dir, prefix) = split_base(base);
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory {}", dir.display()))?;

    let mut range: Option<(i64, i64)> = None;
    for entry in entries {
        let entry = entry.context("Failed to read directory entry")?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|s| s.to_str()) else {
            continue;
        };
        let Some(index) = slide_index(name, prefix, ext) else {
            continue;
        };
        range = Some(match range {
            Some((lo, hi)) => (lo.min(index), hi.max(index)),
            None => (index, index),
        });
    }

    match range {
        Some(range) => Ok(range),
        None => bail!("No {}*.{} files found in directory {}", prefix, ext, dir.display()),
    }
}

/// Slides in a range that have no image file.
#[derive(Debug, PartialEq, Eq)]
pub struct MissingSlides {
    pub count: u128,
    /// The lowest missing indices, at most `limit` of them.
    pub sample: Vec<i64>,
}

/// Compares `first..=last` against the files actually present in the
/// directory, so the cost follows the directory size, not the range size.
pub fn missing_slides(source: &ImageSource, first: i64, last: i64, limit: usize) -> Result<MissingSlides> {
    let (dir, prefix) = split_base(&source.base_uri);
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory {}", dir.display()))?;

    let mut present = BTreeSet::new();
    for entry in entries {
        let path = entry.context("Failed to read directory entry")?.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|s| s.to_str()) else {
            continue;
        };
        let Some(index) = slide_index(name, prefix, &source.ext) else {
            continue;
        };
        // `m1.png` is not `m01.png` when padding is on
        let expected = source.uri_for(index);
        let matches = Path::new(&expected).file_name().and_then(|s| s.to_str()) == Some(name);
        if matches && (first..=last).contains(&index) {
            present.insert(index);
        }
    }

    let total = u128::from(last.abs_diff(first)) + 1;
    let sample = (first..=last)
        .filter(|index| !present.contains(index))
        .take(limit)
        .collect();
    Ok(MissingSlides { count: total - present.len() as u128, sample })
}

fn split_base(base: &str) -> (&Path, &str) {
    if base.is_empty() {
        return (Path::new("."), "");
    }
    if base.ends_with('/') || base.ends_with(std::path::MAIN_SEPARATOR) {
        return (Path::new(base), "");
    }
    let path = Path::new(base);
    let prefix = path.file_name().and_then(|s| s.to_str()).unwrap_or("");
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => (parent, prefix),
        _ => (Path::new("."), prefix),
    }
}

fn slide_index(name: &str, prefix: &str, ext: &str) -> Option<i64> {
    let (stem, file_ext) = name.strip_prefix(prefix)?.rsplit_once('.')?;
    if !file_ext.eq_ignore_ascii_case(ext) || stem.is_empty() {
        return None;
    }
    if !stem.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    stem.parse().ok()
}

// --- Load Image, Apply EXIF Rotation, Create Texture ---
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D> {
    let file_bytes = fs::read(image_path)
        .with_context(|| format!("Failed to read file {:?}", image_path))?;

    let extension = image_path.extension().and_then(|s| s.to_str()).unwrap_or("").to_lowercase();
    let orientation = if extension == "jpg" || extension == "jpeg" {
        read_orientation(image_path, &file_bytes)
    } else {
        1
    };

    // Extension hint for loading from memory
    let mut image = Image::load_image_from_mem(&(".".to_string() + &extension), &file_bytes)
        .map_err(|e| anyhow!("Failed to load image data for {:?}: {}", image_path, e))?;

    // 1 = Top-left (Normal)
    // 3 = Bottom-right (180 deg)
    // 6 = Top-right (90 deg clockwise)
    // 8 = Bottom-left (90 deg counter-clockwise)
    // Others involve flips, ignored.
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
            debug!(?image_path, "applied 180 deg rotation");
        }
        6 => {
            image.rotate_cw();
            debug!(?image_path, "applied 90 deg CW rotation");
        }
        8 => {
            image.rotate_ccw();
            debug!(?image_path, "applied 90 deg CCW rotation");
        }
        _ => {}
    }

    let texture = rl
        .load_texture_from_image(thread, &image)
        .map_err(|e| anyhow!("Failed to create texture for {:?}: {}", image_path, e))?;

    Ok(texture)
}

fn read_orientation(image_path: &Path, file_bytes: &[u8]) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(file_bytes)) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| match &field.value {
                Value::Short(values) => values.first().copied(),
                _ => None,
            })
            .unwrap_or(1),
        Err(e) => {
            // Not fatal, the image is shown unrotated
            warn!(?image_path, "could not read EXIF data: {}", e);
            1
        }
    }
}
