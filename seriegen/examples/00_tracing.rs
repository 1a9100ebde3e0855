use seriegen::{Seriegen, TextPreview, presets};
use tracing_subscriber::fmt::format::FmtSpan;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize a human-friendly tracing subscriber with env-based filtering.
    // Suggested: RUST_LOG=debug, together with `--features tracing` so the
    // generation spans exist.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    let generator = Seriegen::builder().seed(42).build()?;
    let table = generator.generate(&presets::demo_label_ranges())?;

    let mut sink = TextPreview::stdout();
    generator.present(presets::DEMO_TABLE_NAME, &table, &mut sink)?;

    Ok(())
}
