use augur::{Augur, describe};
use augur_demos::common::{get_source, get_start, sample_prediction};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Build the evaluator over the demo source.
    let augur = Augur::builder().with_source(get_source()).build()?;

    // 2. Score the sample forecast against the observed closes.
    let eval = augur.evaluate(get_start(), &sample_prediction())?;

    // 3. Describe the grid the comparison ran on.
    println!("Target grid:");
    println!("{}", describe(&eval.grid)?);

    // 4. Print the side-by-side comparison.
    println!("\n{:>4}  {:<22} {:>12} {:>12}", "step", "time", "observed", "predicted");
    for row in eval.rows() {
        println!(
            "{:>4}  {:<22} {:>12.4} {:>12.4}",
            row.step,
            augur::pretty_time(row.ts),
            row.observed,
            row.predicted
        );
    }
    println!("\nNMSE: {:e}", eval.nmse);

    Ok(())
}
