use crate::app::render::{render_films, OutputFormat};
use crate::app::theme::{ColorScheme, RESET};
use crate::core::film_list::FilmListView;
use crate::core::QueryChannel;
use crate::utils::error::Result;
use std::io::Write;

pub const HEADING: &str = "Star Wars Films";
pub const PLACEHOLDER: &str = "Loading...";
pub const FALLBACK: &str = "Something went wrong.";

/// 外層顯示殼：負責標題、主題、載入中提示與錯誤後備畫面
pub struct DisplayShell<W: Write> {
    out: W,
    scheme: ColorScheme,
    format: OutputFormat,
    color: bool,
}

impl<W: Write> DisplayShell<W> {
    pub fn new(out: W, scheme: ColorScheme, format: OutputFormat, color: bool) -> Self {
        Self {
            out,
            scheme,
            format,
            color,
        }
    }

    pub fn scheme(&self) -> ColorScheme {
        self.scheme
    }

    pub fn toggle_theme(&mut self) -> ColorScheme {
        self.scheme = self.scheme.toggle();
        tracing::debug!("Theme toggled to {:?}", self.scheme);
        self.scheme
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// 掛載視圖並輸出結果，回傳輸出的列數。
    ///
    /// 表格模式下先輸出載入中提示，查詢失敗時輸出後備訊息並把錯誤往外拋。
    /// 機器可讀格式只輸出資料本身。
    pub async fn show(&mut self, view: &mut FilmListView, channel: &dyn QueryChannel) -> Result<usize> {
        if self.format.is_table() {
            self.write_heading()?;
            writeln!(self.out, "{}", PLACEHOLDER)?;
            self.out.flush()?;
        } else {
            tracing::info!("{}", PLACEHOLDER);
        }

        let palette = self.color.then(|| self.scheme.palette());

        match view.mount(channel).await {
            Ok(rows) => {
                let rendered = render_films(rows, self.format, palette)?;
                self.out.write_all(rendered.as_bytes())?;
                self.out.flush()?;
                tracing::info!("✅ Rendered {} films", rows.len());
                Ok(rows.len())
            }
            Err(e) => {
                tracing::error!("❌ Loading films failed: {}", e);
                if self.format.is_table() {
                    writeln!(self.out, "{}", FALLBACK)?;
                    self.out.flush()?;
                }
                Err(e)
            }
        }
    }

    fn write_heading(&mut self) -> Result<()> {
        let icon = self.scheme.toggle_icon();
        if self.color {
            let palette = self.scheme.palette();
            writeln!(self.out, "{}{}{}  {}", palette.heading, HEADING, RESET, icon)?;
        } else {
            writeln!(self.out, "{}  {}", HEADING, icon)?;
        }
        writeln!(self.out)?;
        Ok(())
    }
}
