use bitvec::{order::Lsb0, view::BitView};

pub const BLOCK_PIXELS: usize = 16;
pub const BLOCK_LEN: usize = BLOCK_PIXELS * 4;
pub const TABLE_LEN: usize = 1 << 16;

const WHITE: [u8; 4] = [0xFF, 0xFF, 0xFF, 0xFF];
const BLACK: [u8; 4] = [0x00, 0x00, 0x00, 0xFF];

/// Bit `j` of the index decides pixel `j` of the block: set is opaque
/// white, clear is opaque black.
pub struct PatternTable {
    blocks: Box<[[u8; BLOCK_LEN]]>,
}

impl PatternTable {
    pub fn new() -> Self {
        let mut blocks = vec![[0u8; BLOCK_LEN]; TABLE_LEN].into_boxed_slice();

        for (index, block) in blocks.iter_mut().enumerate() {
            let value = index as u16;
            let bits = value.view_bits::<Lsb0>();

            for (pixel, set) in block.chunks_exact_mut(4).zip(bits.iter().by_vals()) {
                pixel.copy_from_slice(if set { &WHITE } else { &BLACK });
            }
        }

        Self { blocks }
    }

    #[inline]
    pub fn block(&self, index: u16) -> &[u8; BLOCK_LEN] {
        &self.blocks[index as usize]
    }
}

impl Default for PatternTable {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for PatternTable {
    fn eq(&self, other: &Self) -> bool {
        self.blocks == other.blocks
    }
}

impl Eq for PatternTable {}
