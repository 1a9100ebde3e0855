#[cfg(feature = "dataframe")]
use seriegen::{Seriegen, presets};

#[cfg(feature = "dataframe")]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let generator = Seriegen::builder().seed(42).build()?;
    let table = generator.generate(&presets::demo_label_ranges())?;

    let df = table.to_dataframe()?;
    println!(
        "DataFrame shape: {} rows x {} cols",
        df.height(),
        df.width()
    );
    println!("{}", df.head(Some(5)));
    Ok(())
}

#[cfg(not(feature = "dataframe"))]
fn main() {
    eprintln!("This example requires the 'dataframe' feature. Skipping.");
}
