//! Board Binary
//!
//! Interactive standings for a live table.
//!
//! Options: --name, --plain, --logs, --json, --script

use chipboard::*;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    log(&config.logs)?;
    if config.plain {
        colored::control::set_override(false);
    }
    Board::from(config).run()
}
