//! Terminal road-grid demo: find a route and play the vehicle along it.
//!
//! Run: cargo run --bin roadgrid -- --start 0,0 --end 5,14 --road 3,4

use clap::Parser;
use roadgrid_demos::{Cli, build_dispatcher, frame, terrain_summary};
use roadgrid_dispatch::Tick;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let dispatcher = build_dispatcher(&cli)?;
    log::info!(
        "grid {}: {}",
        dispatcher.grid().bounds(),
        terrain_summary(dispatcher.grid())
    );
    println!("{}\n", dispatcher.render());

    let Some(mut playback) = dispatcher.run()? else {
        println!("No route: the end cannot be reached.");
        return Ok(());
    };

    let end = dispatcher.end();
    while let Tick::Moved(at) = playback.tick() {
        println!("{}\n", frame(dispatcher.grid(), at, end));
        if !playback.is_finished() {
            std::thread::sleep(playback.interval());
        }
    }

    let route = playback.route();
    println!(
        "Arrived in {} steps, total cost {}.",
        route.len() - 1,
        route.cost()
    );
    Ok(())
}
