//! Animation frame decoding
//!
//! Frames ship as a ZIP archive of PNG images played in entry-name order.
//! Entries are decoded to RGBA once at load; an entry that fails to decode
//! is skipped, and the load only fails when nothing decodes at all.

use std::io::{Cursor, Read};

use tracing::debug;
use zip::ZipArchive;

use crate::error::FrameLoadError;

/// One decoded animation frame
#[derive(Clone)]
pub struct FrameImage {
    /// RGBA pixel data (width * height * 4 bytes)
    pub rgba: Vec<u8>,
    /// Frame width in pixels
    pub width: u32,
    /// Frame height in pixels
    pub height: u32,
}

/// Ordered, immutable frame sequence
pub struct FrameSequence {
    frames: Vec<FrameImage>,
}

impl FrameSequence {
    /// Decode every PNG entry of `bytes`, sorted by entry name.
    pub fn from_zip_bytes(bytes: &[u8]) -> Result<Self, FrameLoadError> {
        let mut archive = ZipArchive::new(Cursor::new(bytes))?;

        let mut names: Vec<String> = archive
            .file_names()
            .filter(|name| name.to_ascii_lowercase().ends_with(".png"))
            .map(String::from)
            .collect();
        names.sort();

        let mut frames = Vec::with_capacity(names.len());
        for name in &names {
            let mut entry = archive.by_name(name)?;
            let mut png_data = Vec::new();
            entry
                .read_to_end(&mut png_data)
                .map_err(|source| FrameLoadError::Entry {
                    name: name.clone(),
                    source,
                })?;

            match decode_frame(&png_data) {
                Some(frame) => frames.push(frame),
                None => debug!(entry = %name, "Skipping undecodable frame"),
            }
        }

        if frames.is_empty() {
            return Err(FrameLoadError::NoFrames);
        }
        Ok(Self { frames })
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Index of the final frame. Sequences are never empty once loaded.
    pub fn last_index(&self) -> usize {
        self.frames.len() - 1
    }

    pub fn frame(&self, index: usize) -> Option<&FrameImage> {
        self.frames.get(index)
    }
}

/// Decode PNG bytes to an RGBA frame
fn decode_frame(data: &[u8]) -> Option<FrameImage> {
    let decoder = png::Decoder::new(data);
    let mut reader = decoder.read_info().ok()?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).ok()?;
    let pixels = &buf[..info.buffer_size()];

    let rgba = expand_to_rgba(info.color_type, pixels)?;
    Some(FrameImage {
        rgba,
        width: info.width,
        height: info.height,
    })
}

/// Expand decoded pixel data to 4-byte RGBA
fn expand_to_rgba(color_type: png::ColorType, pixels: &[u8]) -> Option<Vec<u8>> {
    match color_type {
        png::ColorType::Rgba => Some(pixels.to_vec()),
        png::ColorType::Rgb => {
            let mut rgba = Vec::with_capacity(pixels.len() / 3 * 4);
            for chunk in pixels.chunks(3) {
                rgba.extend_from_slice(chunk);
                rgba.push(255);
            }
            Some(rgba)
        }
        png::ColorType::GrayscaleAlpha => {
            let mut rgba = Vec::with_capacity(pixels.len() * 2);
            for chunk in pixels.chunks(2) {
                let (gray, alpha) = (chunk[0], chunk[1]);
                rgba.extend_from_slice(&[gray, gray, gray, alpha]);
            }
            Some(rgba)
        }
        png::ColorType::Grayscale => {
            let mut rgba = Vec::with_capacity(pixels.len() * 4);
            for &gray in pixels {
                rgba.extend_from_slice(&[gray, gray, gray, 255]);
            }
            Some(rgba)
        }
        // Palette expansion needs the PLTE chunk; bundled frames never use it
        png::ColorType::Indexed => None,
    }
}
