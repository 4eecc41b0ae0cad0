//! Boundary collaborators: depth map loading, stereogram saving and
//! interactive display. The core never touches the filesystem itself.

use std::path::Path;

use image::GrayImage;
use log::debug;

use crate::{RdsError, RdsResult};

/// Load an image from disk and convert it to 8-bit greyscale.
pub fn load_depth_map<P: AsRef<Path>>(path: P) -> RdsResult<GrayImage> {
    let path = path.as_ref();
    debug!("loading depth map from {}", path.display());
    Ok(image::open(path)?.into_luma8())
}

/// Save a stereogram to `path`, picking the format from the extension.
pub fn save_stereogram<P: AsRef<Path>>(stereogram: &GrayImage, path: P) -> RdsResult<()> {
    let path = path.as_ref();
    debug!("saving stereogram to {}", path.display());
    stereogram.save(path)?;
    Ok(())
}

/// Hand an image file to the platform viewer without waiting on it.
pub fn display_file<P: AsRef<Path>>(path: P) -> RdsResult<()> {
    duct::cmd!(viewer_command(), path.as_ref()).start()?;
    Ok(())
}

/// Show a stereogram interactively by writing it to a temporary PNG and
/// opening that in the platform viewer. The file is left behind for the
/// viewer, which may load it lazily.
pub fn display_stereogram(stereogram: &GrayImage) -> RdsResult<()> {
    let path = tempfile::Builder::new()
        .prefix("rds-")
        .suffix(".png")
        .tempfile()?
        .into_temp_path()
        .keep()
        .map_err(|e| RdsError::Io(e.error))?;
    stereogram.save(&path)?;
    display_file(&path)
}

fn viewer_command() -> &'static str {
    if cfg!(target_os = "macos") {
        "open"
    } else if cfg!(target_os = "windows") {
        "explorer"
    } else {
        "xdg-open"
    }
}
