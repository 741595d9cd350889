// src/naming.rs
//! Output file naming
//!
//! Output bands are named after the scene they were derived from: the scene
//! identifier is everything in the reference band's file name before the
//! first underscore.
//!
//! ```
//! use cfmask_rs::naming::derive_file_name;
//!
//! assert_eq!(derive_file_name("LC08_L1TP_123.dat", "cfmask"), "LC08_cfmask.img");
//! ```

/// Extension of raw binary image files
pub const IMAGE_EXTENSION: &str = "img";

/// Extension of ENVI header files
pub const HEADER_EXTENSION: &str = "hdr";

/// Text before the first `_`, or the whole name if there is none
pub fn scene_identifier(file_name: &str) -> &str {
    match file_name.find('_') {
        Some(pos) => &file_name[..pos],
        None => file_name,
    }
}

/// `{scene}_{band}.img`
pub fn derive_file_name(reference_file_name: &str, band_name: &str) -> String {
    format!(
        "{}_{}.{}",
        scene_identifier(reference_file_name),
        band_name,
        IMAGE_EXTENSION
    )
}

/// Header file name that accompanies an image file name
pub fn header_file_name(image_file_name: &str) -> String {
    let suffix = format!(".{IMAGE_EXTENSION}");
    match image_file_name.strip_suffix(&suffix) {
        Some(stem) => format!("{stem}.{HEADER_EXTENSION}"),
        None => format!("{image_file_name}.{HEADER_EXTENSION}"),
    }
}
