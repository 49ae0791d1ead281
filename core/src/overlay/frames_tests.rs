//! Frame archive decoding tests
//!
//! Covers entry-name ordering, color type expansion to RGBA, skipping of
//! undecodable entries, and the empty-archive failure.

use super::frames::FrameSequence;
use crate::error::FrameLoadError;
use crate::test_support::{encode_png, encode_png_as, make_archive};

#[test]
fn test_frames_decode_in_entry_name_order() {
    let first = encode_png(10, 2);
    let second = encode_png(20, 2);
    let third = encode_png(30, 2);
    let archive = make_archive(&[
        ("frame_002.png", third.as_slice()),
        ("frame_000.png", first.as_slice()),
        ("frame_001.png", second.as_slice()),
    ]);

    let frames = FrameSequence::from_zip_bytes(&archive).unwrap();

    assert_eq!(frames.len(), 3);
    assert_eq!(frames.last_index(), 2);
    let widths: Vec<u32> = (0..frames.len())
        .map(|index| frames.frame(index).unwrap().width)
        .collect();
    assert_eq!(widths, vec![10, 20, 30]);
}

#[test]
fn test_non_png_entries_are_ignored() {
    let frame = encode_png(10, 2);
    let archive = make_archive(&[
        ("readme.txt", b"not an image".as_slice()),
        ("frame_000.png", frame.as_slice()),
    ]);

    let frames = FrameSequence::from_zip_bytes(&archive).unwrap();

    assert_eq!(frames.len(), 1);
    assert_eq!(frames.frame(0).unwrap().width, 10);
}

#[test]
fn test_undecodable_entry_is_skipped() {
    let good = encode_png(10, 2);
    let archive = make_archive(&[
        ("frame_000.png", good.as_slice()),
        ("frame_001.png", b"garbage".as_slice()),
    ]);

    let frames = FrameSequence::from_zip_bytes(&archive).unwrap();

    assert_eq!(frames.len(), 1);
    assert_eq!(frames.frame(0).unwrap().width, 10);
}

#[test]
fn test_archive_without_frames_fails() {
    let no_pngs = make_archive(&[("readme.txt", b"no frames here".as_slice())]);
    assert!(matches!(
        FrameSequence::from_zip_bytes(&no_pngs),
        Err(FrameLoadError::NoFrames)
    ));

    let all_garbage = make_archive(&[("frame_000.png", b"garbage".as_slice())]);
    assert!(matches!(
        FrameSequence::from_zip_bytes(&all_garbage),
        Err(FrameLoadError::NoFrames)
    ));
}

#[test]
fn test_corrupt_archive_is_an_error() {
    let result = FrameSequence::from_zip_bytes(b"definitely not a zip");
    assert!(matches!(result, Err(FrameLoadError::Archive(_))));
}

#[test]
fn test_rgb_frames_gain_opaque_alpha() {
    let rgb = encode_png_as(png::ColorType::Rgb, 4, 2);
    let archive = make_archive(&[("frame_000.png", rgb.as_slice())]);

    let frames = FrameSequence::from_zip_bytes(&archive).unwrap();
    let frame = frames.frame(0).unwrap();

    assert_eq!((frame.width, frame.height), (4, 2));
    assert_eq!(frame.rgba.len(), 4 * 2 * 4);
    assert!(frame.rgba.chunks(4).all(|px| px == [0x7f, 0x7f, 0x7f, 0xff]));
}

#[test]
fn test_grayscale_frames_expand_to_rgba() {
    let gray = encode_png_as(png::ColorType::Grayscale, 4, 2);
    let gray_alpha = encode_png_as(png::ColorType::GrayscaleAlpha, 4, 2);
    let archive = make_archive(&[
        ("frame_000.png", gray.as_slice()),
        ("frame_001.png", gray_alpha.as_slice()),
    ]);

    let frames = FrameSequence::from_zip_bytes(&archive).unwrap();
    assert_eq!(frames.len(), 2);

    let opaque = frames.frame(0).unwrap();
    assert_eq!(opaque.rgba.len(), 4 * 2 * 4);
    assert!(opaque.rgba.chunks(4).all(|px| px == [0x7f, 0x7f, 0x7f, 0xff]));

    let translucent = frames.frame(1).unwrap();
    assert!(
        translucent
            .rgba
            .chunks(4)
            .all(|px| px == [0x7f, 0x7f, 0x7f, 0x7f])
    );
}
