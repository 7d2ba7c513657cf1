use crate::error::Error;
use crate::frame::Frame;
use crate::pattern::{PatternTable, BLOCK_LEN};
use rand_core::RngCore;
use std::sync::Arc;

pub const STRIDE_LEN: usize = 4 * BLOCK_LEN;

/// One `u64` per stride, split into four indices least significant first.
/// Nothing is written unless `buffer.len()` is a multiple of [`STRIDE_LEN`].
pub fn fill_frame<R: RngCore + ?Sized>(
    buffer: &mut [u8],
    table: &PatternTable,
    rng: &mut R,
) -> Result<(), Error> {
    if buffer.len() % STRIDE_LEN != 0 {
        return Err(Error::UnalignedBuffer(buffer.len()));
    }

    let mut draw = [0u8; 8];

    for stride in buffer.chunks_exact_mut(STRIDE_LEN) {
        rng.try_fill_bytes(&mut draw)?;
        let mut bits = u64::from_le_bytes(draw);

        for region in stride.chunks_exact_mut(BLOCK_LEN) {
            region.copy_from_slice(table.block(bits as u16));
            bits >>= 16;
        }
    }

    Ok(())
}

pub struct WhiteNoise<R: RngCore> {
    table: Arc<PatternTable>,
    rng: R,
}

impl<R: RngCore> WhiteNoise<R> {
    pub fn new(table: Arc<PatternTable>, rng: R) -> Self {
        Self { table, rng }
    }

    pub fn table(&self) -> &Arc<PatternTable> {
        &self.table
    }

    pub fn fill(&mut self, buffer: &mut [u8]) -> Result<(), Error> {
        fill_frame(buffer, &self.table, &mut self.rng)
    }

    pub fn fill_frame(&mut self, frame: &mut Frame) -> Result<(), Error> {
        self.fill(frame.pixels_mut())
    }
}
