//! Minimal driver: random 24x24 field, ten generations, text output.
//!
//! Rendering proper (windows, pixels, pacing) belongs to an external
//! presentation layer; this stands in for it with stdout.

use lichen_engine::{Engine, SimConfig};
use lichen_seed::{FieldSource, RandomField};

fn render(engine: &Engine) {
    let grid = engine.current_grid();
    println!(
        "generation {} ({} alive)",
        engine.generation(),
        grid.live_count()
    );
    for y in 0..grid.y_size() as i32 {
        let row: String = (0..grid.x_size() as i32)
            .map(|x| {
                if grid.is_alive(lichen_core::Coord::new(x, y)) {
                    '#'
                } else {
                    '.'
                }
            })
            .collect();
        println!("{row}");
    }
    println!();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let fill = RandomField::builder()
        .x_size(24)
        .y_size(24)
        .rareness(4)
        .seed(2024)
        .build()?
        .fill_field()?;

    let mut engine = Engine::new(
        fill,
        &SimConfig {
            threshold_min: 1.99,
            threshold_max: 3.49,
            diagonal_weight: 0.5,
        },
    )?;

    render(&engine);
    for _ in 0..10 {
        engine.advance();
        render(&engine);
    }
    Ok(())
}
