use anyhow::anyhow;
use log::{debug, info, warn};
use minifb::{Key, Scale, ScaleMode, Window, WindowOptions};
use rand_core::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use std::env;
use std::sync::mpsc::{self, Receiver, SyncSender, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use white_noise::{Error, FpsCounter, Frame, PatternTable, Ticker, WhiteNoise};

// Width * height must be a multiple of 64.
const WIDTH: usize = 256;
const HEIGHT: usize = 256;
const FPS: u32 = 60; // Limit generated frames to this much.

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let start = Instant::now();
    let table = Arc::new(PatternTable::new());
    debug!("pattern table built in {:?}", start.elapsed());

    let rng = Xoshiro256PlusPlus::from_entropy();
    let mut noise = WhiteNoise::new(table, rng);

    if let Some(path) = env::args().nth(1) {
        let mut frame = Frame::new(WIDTH, HEIGHT)?;
        noise.fill_frame(&mut frame)?;
        frame.write_png(&path)?;
        info!(
            "wrote {}x{} noise frame to {}",
            frame.width(),
            frame.height(),
            path
        );
        return Ok(());
    }

    run_window(noise)
}

fn run_window(noise: WhiteNoise<Xoshiro256PlusPlus>) -> anyhow::Result<()> {
    let mut window = Window::new(
        "White Noise - ESC to exit",
        WIDTH,
        HEIGHT,
        WindowOptions {
            resize: true,
            scale: Scale::X2,
            scale_mode: ScaleMode::Stretch,
            ..WindowOptions::default()
        },
    )?;
    window.limit_update_rate(Some(Duration::from_micros(1_000_000 / FPS as u64)));

    // Two frames circulate: one being filled, one being presented.
    let (ready_tx, ready_rx) = mpsc::sync_channel::<Frame>(1);
    let (free_tx, free_rx) = mpsc::channel::<Frame>();
    for _ in 0..2 {
        free_tx
            .send(Frame::new(WIDTH, HEIGHT)?)
            .map_err(|_| anyhow!("frame channel closed"))?;
    }

    info!("animating {}x{} noise at {} fps", WIDTH, HEIGHT, FPS);
    let producer = thread::spawn(move || produce(noise, free_rx, ready_tx));

    let mut buffer: Vec<u32> = vec![0; WIDTH * HEIGHT];

    while window.is_open() && !window.is_key_down(Key::Escape) {
        match ready_rx.try_recv() {
            Ok(frame) => {
                frame.to_argb(&mut buffer);
                if free_tx.send(frame).is_err() {
                    break;
                }
                window.update_with_buffer(&buffer, WIDTH, HEIGHT)?;
            }
            Err(TryRecvError::Empty) => window.update(),
            Err(TryRecvError::Disconnected) => break,
        }
    }

    drop(ready_rx);
    drop(free_tx);

    producer
        .join()
        .map_err(|_| anyhow!("noise producer panicked"))??;

    Ok(())
}

/// Fills free frames once per tick until the presenter hangs up.
fn produce(
    mut noise: WhiteNoise<Xoshiro256PlusPlus>,
    free: Receiver<Frame>,
    ready: SyncSender<Frame>,
) -> Result<(), Error> {
    let mut ticker = Ticker::new(FPS);
    let mut fps = FpsCounter::new(FPS);
    debug!("producing a frame every {:?}", ticker.interval());

    while let Ok(mut frame) = free.recv() {
        ticker.wait();

        if let Err(err) = noise.fill_frame(&mut frame) {
            warn!("noise producer stopped: {}", err);
            return Err(err);
        }

        if ready.send(frame).is_err() {
            break;
        }

        if let Some(rate) = fps.tick() {
            info!("FPS: {}", rate as u32);
        }
    }

    Ok(())
}
