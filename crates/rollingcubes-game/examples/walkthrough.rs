//! Example driving a short game session from the command line.
//!
//! Prints the starting tray, the cubes that can currently roll, and the
//! state after one move. Set `RUST_LOG=trace` to watch the per-roll log
//! lines from the core.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example walkthrough
//! ```

use rollingcubes_game::GameSession;

fn main() {
    env_logger::init();

    let mut session = GameSession::new("walkthrough");
    println!("starting tray:\n{}", session.tray());

    let positions = session.tray().rollable_positions();
    println!("rollable cubes:");
    for position in &positions {
        println!("  {position}");
    }

    let Some(&first) = positions.first() else {
        println!("nothing can roll");
        return;
    };
    let direction = session
        .roll(i32::from(first.row()), i32::from(first.col()))
        .expect("enumerated positions are rollable");
    println!("\nrolled {first} {direction}:\n{}", session.tray());

    let result = session.finish();
    println!("{result}");
}
