use crate::config::toml_config::MenuConfig;
use crate::core::{CourseField, MenuCollection, MenuItem, MenuSource};
use crate::utils::error::Result;
use serde::Deserialize;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
struct CsvRow {
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    price: String,
    #[serde(default)]
    course: String,
}

/// Reads `name,description,price,course` rows in file order.
pub fn read_csv<R: Read>(reader: R) -> Result<MenuCollection> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut items = MenuCollection::new();
    for row in csv_reader.deserialize() {
        let row: CsvRow = row?;
        items.push(MenuItem {
            name: row.name,
            description: row.description,
            price: row.price,
            course: CourseField::parse(&row.course),
        });
    }

    Ok(items)
}

#[derive(Debug, Clone)]
pub struct CsvMenuFile {
    path: PathBuf,
}

impl CsvMenuFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl MenuSource for CsvMenuFile {
    fn load(&self) -> Result<MenuCollection> {
        tracing::debug!("Reading CSV menu from {}", self.path.display());
        let file = std::fs::File::open(&self.path)?;
        read_csv(file)
    }
}

/// Seed menu from the `[[items]]` of a TOML file; other sections are ignored.
#[derive(Debug, Clone)]
pub struct TomlMenuFile {
    path: PathBuf,
}

impl TomlMenuFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl MenuSource for TomlMenuFile {
    fn load(&self) -> Result<MenuCollection> {
        tracing::debug!("Reading TOML menu from {}", self.path.display());
        MenuConfig::from_file(&self.path)?.load()
    }
}
