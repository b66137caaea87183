use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::config::MenuConfig;
use crate::error::Result;
use crate::models::Dataset;

/// Write the classified menu as CSV.
///
/// All original columns are kept in order. Profit and category go into the
/// configured columns, which are appended unless the input already had them.
pub fn write_classified<W: Write>(writer: W, dataset: &Dataset, config: &MenuConfig) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    let mut headers = dataset.headers.clone();
    let profit_idx = column_or_append(&mut headers, &config.profit_column);
    let category_idx = column_or_append(&mut headers, &config.category_column);
    wtr.write_record(&headers)?;

    for item in dataset.iter() {
        let mut record = item.fields.clone();
        record.resize(headers.len(), String::new());
        record[profit_idx] = item.profit.map(format_number).unwrap_or_default();
        record[category_idx] = item
            .category
            .map(|c| c.label().to_string())
            .unwrap_or_default();
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the classified menu to a file.
pub fn save_classified<P: AsRef<Path>>(
    path: P,
    dataset: &Dataset,
    config: &MenuConfig,
) -> Result<()> {
    let path = path.as_ref();
    write_classified(File::create(path)?, dataset, config)?;
    tracing::info!(path = %path.display(), rows = dataset.len(), "saved optimized menu");
    Ok(())
}

fn column_or_append(headers: &mut Vec<String>, name: &str) -> usize {
    match headers.iter().position(|h| h == name) {
        Some(idx) => idx,
        None => {
            headers.push(name.to_string());
            headers.len() - 1
        }
    }
}

/// Shortest round-tripping representation; whole numbers have no decimals.
fn format_number(value: f64) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, MenuItem};

    fn classified() -> Dataset {
        let mut item = MenuItem::new("Masala Dosa", 90.0, 35.5, 410.0);
        item.fields = vec![
            "Masala Dosa".to_string(),
            "90".to_string(),
            "35.5".to_string(),
            "410".to_string(),
            "South".to_string(),
        ];
        item.profit = Some(54.5);
        item.category = Some(Category::PlowHorse);

        Dataset::new(
            vec![
                "Dish".to_string(),
                "Selling_Price".to_string(),
                "Cost_Price".to_string(),
                "Units_Sold".to_string(),
                "Section".to_string(),
            ],
            vec![item],
        )
    }

    fn render(dataset: &Dataset) -> String {
        let mut buf = Vec::new();
        write_classified(&mut buf, dataset, &MenuConfig::default()).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_appends_profit_and_category() {
        let out = render(&classified());
        assert_eq!(
            out,
            "Dish,Selling_Price,Cost_Price,Units_Sold,Section,Profit,Category\n\
             Masala Dosa,90,35.5,410,South,54.5,Plow Horse\n"
        );
    }

    #[test]
    fn test_overwrites_existing_derived_columns() {
        let mut ds = classified();
        ds.headers.push("Category".to_string());
        ds.items[0].fields.push("Dog".to_string());

        let out = render(&ds);
        assert_eq!(
            out,
            "Dish,Selling_Price,Cost_Price,Units_Sold,Section,Category,Profit\n\
             Masala Dosa,90,35.5,410,South,Plow Horse,54.5\n"
        );
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(60.0), "60");
        assert_eq!(format_number(-15.5), "-15.5");
        assert_eq!(format_number(f64::NAN), "NaN");
    }
}
