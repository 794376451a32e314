use augur::{AnchorMode, Augur, describe, format_interval, generate, round_to_hour};
use augur_demos::common::{get_source, get_start};
use chrono::TimeDelta;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let start = get_start() + TimeDelta::minutes(40);

    // 1. Free-standing grid generation.
    let grid = generate(start, 1, 12)?;
    println!("Exact grid from {}:", augur::pretty_time(start));
    println!("{}", describe(&grid)?);

    // 2. Anchoring to the nearest hour.
    println!("\nRounded start: {}", augur::pretty_time(round_to_hour(start)?));
    let augur = Augur::builder()
        .with_source(get_source())
        .anchor(AnchorMode::NearestHour)
        .step_hours(3)
        .count(8)
        .build()?;
    let anchored = augur.target_grid(start)?;
    println!("Anchored 3-hourly grid:");
    println!("{}", describe(&anchored)?);

    // 3. Interval rendering, including negative spans.
    for delta in [TimeDelta::hours(26), TimeDelta::milliseconds(1500), TimeDelta::hours(-1)] {
        println!("{delta} -> {}", format_interval(delta));
    }

    Ok(())
}
