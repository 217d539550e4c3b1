use std::{alloc::System, env, io, mem::size_of};

use anyhow::Result;
use log::{info, LevelFilter};

use entity_store::config::ALLOCATION_LOG_TARGET;
use entity_store::datastructures::TypeMap;
use entity_store::gameworld::Entity;
use entity_store::memory::{self, TrackingAllocator};
use entity_store::menu::Menu;

#[global_allocator]
static GLOBAL: TrackingAllocator = TrackingAllocator::new(System);

fn main() -> Result<()> {
    // Allocation lines are gated by the menu toggle, so their target is open
    // unless RUST_LOG says otherwise.
    let mut logger = pretty_env_logger::formatted_builder();
    logger.filter_module(ALLOCATION_LOG_TARGET, LevelFilter::Trace);
    if let Ok(filters) = env::var("RUST_LOG") {
        logger.parse_filters(&filters);
    }
    logger.init();
    memory::install(&GLOBAL);

    println!("size_of::<TypeMap>() = {}", size_of::<TypeMap>());
    println!("size_of::<Entity>() = {}", size_of::<Entity>());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut menu = Menu::new(stdin.lock(), stdout.lock());
    menu.run()?;

    info!("Exiting, {}", memory::usage_report());
    Ok(())
}
