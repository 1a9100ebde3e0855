use seriegen::{Seriegen, TextPreview, presets};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Build a generator with the stock window settings and a fixed seed.
    let generator = Seriegen::builder().seed(42).build()?;

    // 2. Generate the five-label demo table, 100 points per label.
    let table = generator.generate(&presets::demo_label_ranges())?;

    // 3. Preview the head of the table on stdout.
    let mut sink = TextPreview::stdout();
    generator.present(presets::DEMO_TABLE_NAME, &table, &mut sink)?;

    Ok(())
}
