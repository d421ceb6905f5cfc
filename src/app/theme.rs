use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Auto,
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScheme {
    Light,
    Dark,
}

impl ColorScheme {
    /// 從終端機環境推測預設配色，無法判斷時使用淺色
    pub fn detect() -> Self {
        Self::from_colorfgbg(std::env::var("COLORFGBG").ok().as_deref())
    }

    /// `COLORFGBG` 形如 `15;0`，最後一段為背景色索引
    pub fn from_colorfgbg(value: Option<&str>) -> Self {
        let background = value
            .and_then(|v| v.rsplit(';').next())
            .and_then(|bg| bg.trim().parse::<u8>().ok());

        match background {
            Some(0..=6) | Some(8) => ColorScheme::Dark,
            _ => ColorScheme::Light,
        }
    }

    pub fn resolve(preference: ThemePreference) -> Self {
        match preference {
            ThemePreference::Auto => Self::detect(),
            ThemePreference::Light => ColorScheme::Light,
            ThemePreference::Dark => ColorScheme::Dark,
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Light,
        }
    }

    /// 切換按鈕圖示：深色模式顯示太陽，淺色模式顯示月亮
    pub fn toggle_icon(self) -> &'static str {
        match self {
            ColorScheme::Light => "☾",
            ColorScheme::Dark => "☀",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            ColorScheme::Light => Palette {
                heading: "\x1b[1;34m",
                header: "\x1b[1;30m",
                border: "\x1b[37m",
            },
            ColorScheme::Dark => Palette {
                heading: "\x1b[1;96m",
                header: "\x1b[1;97m",
                border: "\x1b[90m",
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub heading: &'static str,
    pub header: &'static str,
    pub border: &'static str,
}

pub const RESET: &str = "\x1b[0m";
