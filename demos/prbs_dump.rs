use lfsr_rs::prelude::*;
use lfsr_rs::Lfsr16;
use log::info;
use std::error::Error;

/// An example that walks a few registers and prints what they produce. Run
/// with `RUST_LOG=trace` to see the construction logging as well.
fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    // PRBS7, the usual test pattern for serial links.
    let mut prbs7 = Lfsr::<u8, 7>::maximal(0x7f)?;
    info!("PRBS7 taps: {:#x}", prbs7.taps());
    let period = Lfsr::<u8, 7>::period_bound() as usize;
    for bit in prbs7.bits().take(period) {
        print!("{}", bit);
    }
    println!();

    let lfsr = Lfsr16::new(0xACE1, 0xD008)?;
    for value in lfsr.take(16) {
        println!("{:#018b}", value);
    }

    let mut rng = Lfsr::<u64, 64>::maximal(0x5eed)?;
    println!("{:#018x}", rng.next_u64());

    if let Err(e) = Lfsr::<u8, 8>::new(0, 0xB8) {
        println!("{}", e);
    }
    Ok(())
}
