use anyhow::Result;
use menu_board::app::Session;
use menu_board::report;
use menu_board::{
    Course, CsvMenuFile, MenuAggregator, MenuConfig, MenuController, MenuSource, TomlMenuFile,
    UnparsablePrice,
};
use tempfile::TempDir;

const CSV_MENU: &str = "\
name,description,price,course
Soup,Veg,50,Starters
Steak,Beef,200,2
Cake,Choc,80,Dessert
Salad,Greens,40,1
Mystery,???,999,Brunch
";

#[test]
fn test_csv_seed_summary() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("menu.csv");
    std::fs::write(&path, CSV_MENU)?;

    let controller = MenuController::from_source(&CsvMenuFile::new(&path), MenuAggregator::default())?;
    assert_eq!(controller.snapshot().len(), 5);

    let text = report::render_summary("R", controller.snapshot(), &controller.averages());
    assert!(text.contains("Mystery - R999\n???\n"));
    assert!(text.ends_with("Average Prices:\nStarters: R45\nMain: R200\nDessert: R80\n"));
    Ok(())
}

#[test]
fn test_toml_config_drives_policy_and_prefix() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("menu.toml");
    std::fs::write(
        &path,
        r#"
[display]
currency_prefix = "$"

[aggregation]
unparsable_price = "poison"

[[items]]
name = "Cake"
description = "Choc"
price = "80"
course = 3

[[items]]
name = "Tart"
price = "n/a"
course = "Dessert"
"#,
    )?;

    let config = MenuConfig::from_file(&path)?;
    assert_eq!(config.unparsable_price(), UnparsablePrice::Poison);

    let controller = MenuController::from_source(
        &TomlMenuFile::new(&path),
        MenuAggregator::new(config.unparsable_price()),
    )?;
    let averages = controller.averages();
    assert!(averages.dessert.is_nan());

    let text = report::render_averages(config.currency_prefix(), &averages);
    assert!(text.contains("Dessert: $NaN"));
    Ok(())
}

#[test]
fn test_session_over_seeded_menu() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("menu.csv");
    std::fs::write(&path, CSV_MENU)?;

    let items = CsvMenuFile::new(&path).load()?;
    let controller = MenuController::with_items(items, MenuAggregator::default());
    let mut session = Session::new(controller, "R");

    let script = "\
remove 5
add Brownie|Nutty|100|Dessert
filter Dessert
averages
quit
";
    let mut output = Vec::new();
    session.run(script.as_bytes(), &mut output)?;
    let text = String::from_utf8(output)?;

    assert!(text.contains("Removed Mystery"));
    assert!(text.contains("Filtered Menu Items:\nCake - R80\nChoc\nBrownie - R100\nNutty\n"));
    assert!(text.contains("Dessert: R90"));

    let controller = session.into_controller();
    assert_eq!(controller.filter(Course::Dessert).len(), 2);
    assert_eq!(controller.snapshot().len(), 5);
    Ok(())
}
