use crate::error::Error;
use crate::white_noise::STRIDE_LEN;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct Frame {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl Frame {
    /// Creates an opaque black frame. The pixel count must be divisible by 64.
    pub fn new(width: usize, height: usize) -> Result<Self, Error> {
        let len = width
            .checked_mul(height)
            .and_then(|pixels| pixels.checked_mul(4))
            .ok_or(Error::FrameTooLarge { width, height })?;
        if len % STRIDE_LEN != 0 {
            return Err(Error::UnalignedFrame { width, height });
        }

        let mut pixels = vec![0u8; len];
        for pixel in pixels.chunks_exact_mut(4) {
            pixel[3] = 0xFF;
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// Packs the frame as `0x00RRGGBB` words, the layout minifb presents.
    pub fn to_argb(&self, out: &mut [u32]) {
        assert_eq!(out.len(), self.width * self.height);

        for (word, pixel) in out.iter_mut().zip(self.pixels.chunks_exact(4)) {
            *word = u32::from_be_bytes([0, pixel[0], pixel[1], pixel[2]]);
        }
    }

    pub fn write_png<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let too_large = || Error::FrameTooLarge {
            width: self.width,
            height: self.height,
        };
        let width = u32::try_from(self.width).map_err(|_| too_large())?;
        let height = u32::try_from(self.height).map_err(|_| too_large())?;

        let file = File::create(path)?;
        let mut file_writer = BufWriter::new(file);

        let mut encoder = png::Encoder::new(&mut file_writer, width, height);

        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut png_writer = encoder.write_header()?;

        png_writer.write_image_data(&self.pixels)?;
        png_writer.finish()?;
        file_writer.flush()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_frame_is_opaque_black() {
        let frame = Frame::new(16, 4).unwrap();
        assert_eq!(frame.pixels().len(), 256);
        assert!(frame.pixels().chunks_exact(4).all(|p| p == [0, 0, 0, 0xFF]));
    }

    #[test]
    fn rejects_partial_strides() {
        assert!(matches!(
            Frame::new(10, 10),
            Err(Error::UnalignedFrame {
                width: 10,
                height: 10
            })
        ));
        assert!(Frame::new(0, 0).is_ok());
        assert!(Frame::new(256, 256).is_ok());
        assert!(Frame::new(640, 360).is_ok());
    }

    #[test]
    fn oversized_dimensions_are_rejected() {
        assert!(matches!(
            Frame::new(usize::MAX, 2),
            Err(Error::FrameTooLarge { .. })
        ));
        assert!(matches!(
            Frame::new(usize::MAX / 2, 4),
            Err(Error::FrameTooLarge { .. })
        ));
    }

    #[test]
    fn dimensions_are_kept() {
        let frame = Frame::new(64, 2).unwrap();
        assert_eq!((frame.width(), frame.height()), (64, 2));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn png_write_failure_is_reported() {
        let frame = Frame::new(8, 8).unwrap();
        // every write to /dev/full fails with ENOSPC
        assert!(frame.write_png("/dev/full").is_err());
    }

    #[test]
    fn argb_drops_alpha() {
        let mut frame = Frame::new(8, 8).unwrap();
        frame.pixels_mut()[0..8].copy_from_slice(&[0xFF, 0xFF, 0xFF, 0xFF, 0x12, 0x34, 0x56, 0xFF]);

        let mut out = vec![0xDEAD_BEEF; 64];
        frame.to_argb(&mut out);

        assert_eq!(out[0], 0x00FF_FFFF);
        assert_eq!(out[1], 0x0012_3456);
        assert!(out[2..].iter().all(|w| *w == 0));
    }

    #[test]
    #[should_panic]
    fn argb_length_mismatch_panics() {
        let frame = Frame::new(8, 8).unwrap();
        frame.to_argb(&mut [0; 63]);
    }
}
