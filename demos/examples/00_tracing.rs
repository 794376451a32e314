use augur::Augur;
use augur_demos::common::{get_source, get_start, sample_prediction};
use tracing_subscriber::fmt::format::FmtSpan;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize a human-friendly tracing subscriber with env-based filtering.
    // Suggested: RUST_LOG=info,augur=trace,augur_core=trace
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    // Source is the bundled fixture unless AUGUR_OHLC_FILE is set.
    let augur = Augur::builder().with_source(get_source()).build()?;

    let span = tracing::info_span!("demo", source = augur.source_name());
    let _guard = span.enter();

    // Grid, alignment and scoring each emit their own spans and events.
    let eval = augur.evaluate(get_start(), &sample_prediction())?;
    tracing::info!(nmse = eval.nmse, points = eval.len(), "done");

    Ok(())
}
