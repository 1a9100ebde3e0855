#![cfg(feature = "dataframe")]

use seriegen::{Seriegen, presets};

#[test]
fn table_to_dataframe_smoke() {
    let generator = Seriegen::builder()
        .seed(42)
        .build()
        .expect("generator builds");
    let table = generator
        .generate(&presets::demo_label_ranges())
        .expect("generation succeeds");

    let df = table.to_dataframe().expect("dataframe conversion");
    assert_eq!(df.height(), table.len());

    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(names, ["X", "Y", "Legend"]);
}
