use crate::app::theme::{Palette, RESET};
use crate::core::Film;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Tsv,
    Json,
}

impl OutputFormat {
    pub fn is_table(self) -> bool {
        self == OutputFormat::Table
    }
}

const TITLE_HEADER: &str = "Title";
const DIRECTOR_HEADER: &str = "Director";
const COLUMN_GAP: &str = "  ";

/// 依指定格式輸出電影列；相同輸入一定得到相同輸出
pub fn render_films(films: &[Film], format: OutputFormat, palette: Option<Palette>) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(films, palette)),
        OutputFormat::Csv => render_delimited(films, b','),
        OutputFormat::Tsv => render_delimited(films, b'\t'),
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(films)?)),
    }
}

fn render_table(films: &[Film], palette: Option<Palette>) -> String {
    let cells: Vec<(Cow<'_, str>, Cow<'_, str>)> = films
        .iter()
        .map(|f| (table_cell(&f.title), table_cell(&f.director)))
        .collect();

    let title_width = cells
        .iter()
        .map(|(title, _)| title.width())
        .chain(std::iter::once(TITLE_HEADER.len()))
        .max()
        .unwrap_or(TITLE_HEADER.len());
    let director_width = cells
        .iter()
        .map(|(_, director)| director.width())
        .chain(std::iter::once(DIRECTOR_HEADER.len()))
        .max()
        .unwrap_or(DIRECTOR_HEADER.len());

    let header = format!(
        "{:<title_width$}{}{}",
        TITLE_HEADER, COLUMN_GAP, DIRECTOR_HEADER
    );
    let separator = format!(
        "{}{}{}",
        "-".repeat(title_width),
        COLUMN_GAP,
        "-".repeat(director_width)
    );

    let mut lines = Vec::with_capacity(cells.len() + 2);
    match palette {
        Some(p) => {
            lines.push(format!("{}{}{}", p.header, header, RESET));
            lines.push(format!("{}{}{}", p.border, separator, RESET));
        }
        None => {
            lines.push(header);
            lines.push(separator);
        }
    }

    for (title, director) in &cells {
        let padding = title_width - title.width();
        lines.push(format!(
            "{}{}{}{}",
            title,
            " ".repeat(padding),
            COLUMN_GAP,
            director
        ));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// 表格一列只能佔一行：控制字元（換行、tab 等）一律換成空白
fn table_cell(value: &str) -> Cow<'_, str> {
    if value.chars().any(char::is_control) {
        Cow::Owned(
            value
                .chars()
                .map(|c| if c.is_control() { ' ' } else { c })
                .collect(),
        )
    } else {
        Cow::Borrowed(value)
    }
}

fn render_delimited(films: &[Film], delimiter: u8) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());

    writer.write_record(["id", "title", "director"])?;
    for film in films {
        writer.write_record([&film.id, &film.title, &film.director])?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
