use crate::model::LocalizationRecord;
use anyhow::{bail, Context, Result};
use std::collections::HashMap;
use std::path::Path;

/// Reads one localization category sheet, `<dir>/<category>.csv`.
pub fn load_category(dir: &Path, category: &str) -> Result<Vec<LocalizationRecord>> {
    let path = dir.join(format!("{category}.csv"));
    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read sheet at {}", path.display()))?;
    parse_sheet(&raw).with_context(|| format!("Failed to parse sheet {category}"))
}

/// Parses a header-row CSV sheet into localization records. Columns are
/// matched by header name; a missing column yields empty strings so partial
/// locale coverage still parses.
pub fn parse_sheet(text: &str) -> Result<Vec<LocalizationRecord>> {
    let mut rows = parse_csv(text)?.into_iter();
    let header = rows.next().context("sheet has no header row")?;
    let cols: HashMap<&str, usize> = header
        .iter()
        .enumerate()
        .map(|(idx, name)| (name.as_str(), idx))
        .collect();
    if !cols.contains_key("Id") {
        bail!("sheet header has no Id column");
    }

    let take = |row: &[String], name: &str| -> String {
        cols.get(name)
            .and_then(|&idx| row.get(idx))
            .cloned()
            .unwrap_or_default()
    };

    let mut records = Vec::new();
    for row in rows {
        if row.iter().all(|field| field.is_empty()) {
            continue;
        }
        records.push(LocalizationRecord {
            id: take(&row, "Id"),
            eu_de: take(&row, "EUde"),
            eu_en: take(&row, "EUen"),
            eu_it: take(&row, "EUit"),
            eu_nl: take(&row, "EUnl"),
            eu_ru: take(&row, "EUru"),
            eu_fr: take(&row, "EUfr"),
            eu_es: take(&row, "EUes"),
            us_en: take(&row, "USen"),
            us_fr: take(&row, "USfr"),
            us_es: take(&row, "USes"),
            jp_ja: take(&row, "JPja"),
            kr_ko: take(&row, "KRko"),
            tw_zh: take(&row, "TWzh"),
            cn_zh: take(&row, "CNzh"),
        });
    }
    Ok(records)
}

// Quoted fields may contain commas, doubled quotes, and line breaks.
fn parse_csv(text: &str) -> Result<Vec<Vec<String>>> {
    let mut rows = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                _ => field.push(c),
            }
            continue;
        }
        match c {
            '"' if field.is_empty() => in_quotes = true,
            ',' => row.push(std::mem::take(&mut field)),
            '\r' => {}
            '\n' => {
                row.push(std::mem::take(&mut field));
                rows.push(std::mem::take(&mut row));
            }
            _ => field.push(c),
        }
    }
    if in_quotes {
        bail!("unterminated quoted field");
    }
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }
    Ok(rows)
}
