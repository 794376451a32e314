use augur::{Augur, load_list, save_list};
use augur_demos::common::{get_source, get_start, sample_prediction};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Persist the forecast the way a prediction job would.
    let path = std::env::temp_dir().join(format!("augur_pred_vals_{}.txt", std::process::id()));
    save_list(&sample_prediction(), &path)?;
    println!("Saved prediction to {}", path.display());

    // 2. The file is a plain list literal, readable by other tools.
    println!("Contents: {}", std::fs::read_to_string(&path)?);
    let restored = load_list(&path)?;
    println!("Reloaded {} values", restored.len());

    // 3. Score straight from the file.
    let augur = Augur::builder().with_source(get_source()).build()?;
    let eval = augur.evaluate_file(get_start(), &path)?;
    println!("NMSE from file: {:e}", eval.nmse);

    std::fs::remove_file(&path)?;
    Ok(())
}
