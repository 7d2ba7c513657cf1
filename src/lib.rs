mod error;
mod frame;
mod pattern;
mod rate;
mod white_noise;

pub use error::Error;
pub use frame::Frame;
pub use pattern::{PatternTable, BLOCK_LEN, BLOCK_PIXELS, TABLE_LEN};
pub use rate::{FpsCounter, Ticker};
pub use white_noise::{fill_frame, WhiteNoise, STRIDE_LEN};
