//! Standings board for a single live poker table.
//!
//! Nine seats, each tracking a buy-in, a current stack and a count of
//! all-in losses. Every mutation rescores the seat, and the standings are
//! re-derived on each read.
#![allow(dead_code)]

pub mod delta;
pub use delta::*;

pub mod event;
pub use event::*;

pub mod field;
pub use field::*;

pub mod parse;

pub mod player;
pub use player::*;

pub mod roster;
pub use roster::*;

pub mod score;
pub use score::*;

pub mod standings;
pub use standings::*;

pub mod totals;
pub use totals::*;

#[cfg(feature = "cli")]
pub mod terminal;
#[cfg(feature = "cli")]
pub use terminal::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Chip counts for buy-ins and stacks. Never negative.
pub type Chips = u32;
/// Signed difference between current stack and buy-in.
pub type Profit = i64;
/// Number of all-in hands lost.
pub type Losses = u32;
/// Seat identifier, 1 through [`SEATS`].
pub type Seat = u8;
/// Score values.
pub type Points = f64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for tests.
pub trait Arbitrary {
    fn random() -> Self;
}

// ============================================================================
// TABLE PARAMETERS
// ============================================================================
/// Number of seats at the table.
pub const SEATS: usize = 9;
/// Points deducted per all-in loss.
pub const ALL_IN_PENALTY: Points = 3.0;
/// Scale applied to the winning ratio profit / (profit + buy-in).
pub const WIN_SCALE: Points = 150.0;
/// Scale applied to the losing ratio |profit| / (|profit| + buy-in).
pub const LOSS_SCALE: Points = 100.0;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// DEBUG goes to the file, only WARN and above reach the terminal so the
/// prompts stay readable.
#[cfg(feature = "cli")]
pub fn log(dir: &std::path::Path) -> anyhow::Result<()> {
    use anyhow::Context;
    std::fs::create_dir_all(dir).context("create logs directory")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .context("time moves slow")?
        .as_secs();
    let path = dir.join(format!("{}.log", time));
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(&path).with_context(|| format!("create {}", path.display()))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Warn,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).context("initialize logger")?;
    Ok(())
}
