use std::io::IsTerminal;

use clap::builder::styling::{Color as ClapColor, RgbColor, Style, Styles};
use clap::ValueEnum;
use comfy_table::Color as ComfyColor;
use crossterm::style::Color;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorMode {
  Always,
  Auto,
  Never,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ThemeMode {
  Dark,
  Light,
  Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
  Dark,
  Light,
}

/// One palette role, as seen on a dark and on a light background.
#[derive(Clone, Copy)]
struct Swatch {
  dark: Color,
  light: Color,
}

const fn rgb(r: u8, g: u8, b: u8) -> Color {
  Color::Rgb { r, g, b }
}

const TIMESTAMP: Swatch = Swatch {
  dark: rgb(118, 166, 166),
  light: rgb(92, 62, 38),
};
const PRIMARY: Swatch = Swatch {
  dark: rgb(191, 126, 4),
  light: rgb(70, 42, 25),
};
const ACCENT: Swatch = Swatch {
  dark: rgb(166, 84, 55),
  light: rgb(211, 99, 70),
};
const INFO: Swatch = Swatch {
  dark: rgb(118, 166, 166),
  light: rgb(40, 111, 170),
};
const SUCCESS: Swatch = Swatch {
  dark: rgb(118, 166, 166),
  light: rgb(34, 142, 90),
};
const LABEL: Swatch = Swatch {
  dark: rgb(217, 164, 4),
  light: rgb(176, 103, 66),
};
const VALUE: Swatch = Swatch {
  dark: rgb(242, 211, 56),
  light: rgb(199, 146, 76),
};

pub struct Colors {
  enabled: bool,
  theme: Theme,
}

impl Colors {
  pub const fn new(enabled: bool, theme: Theme) -> Self {
    Self { enabled, theme }
  }

  const fn pick(&self, swatch: Swatch) -> Color {
    if !self.enabled {
      return Color::Reset;
    }
    match self.theme {
      Theme::Dark => swatch.dark,
      Theme::Light => swatch.light,
    }
  }

  pub const fn timestamp(&self) -> Color {
    self.pick(TIMESTAMP)
  }

  pub const fn primary(&self) -> Color {
    self.pick(PRIMARY)
  }

  pub const fn accent(&self) -> Color {
    self.pick(ACCENT)
  }

  pub const fn info(&self) -> Color {
    self.pick(INFO)
  }

  pub const fn success(&self) -> Color {
    self.pick(SUCCESS)
  }

  pub const fn label(&self) -> Color {
    self.pick(LABEL)
  }

  pub const fn value(&self) -> Color {
    self.pick(VALUE)
  }

  /// Help output styles; always the dark palette since clap decides on its own whether to color.
  pub const fn clap_styles() -> Styles {
    let colors = Self::new(true, Theme::Dark);

    Styles::styled()
      .header(Style::new().bold().underline().fg_color(to_clap(colors.label())))
      .usage(Style::new().bold().fg_color(to_clap(colors.label())))
      .literal(Style::new().fg_color(to_clap(colors.success())))
      .placeholder(Style::new().fg_color(to_clap(colors.info())))
      .error(Style::new().bold().fg_color(to_clap(colors.accent())))
      .valid(Style::new().fg_color(to_clap(colors.success())))
      .invalid(Style::new().bold().fg_color(to_clap(colors.accent())))
  }
}

/// The palette only holds RGB values; anything else maps to the terminal default.
const fn to_clap(color: Color) -> Option<ClapColor> {
  match color {
    Color::Rgb { r, g, b } => Some(ClapColor::Rgb(RgbColor(r, g, b))),
    _ => None,
  }
}

pub(crate) fn to_comfy(color: Color) -> ComfyColor {
  match color {
    Color::Rgb { r, g, b } => ComfyColor::Rgb { r, g, b },
    Color::AnsiValue(value) => ComfyColor::AnsiValue(value),
    _ => ComfyColor::Reset,
  }
}

pub fn colors_enabled(mode: ColorMode) -> bool {
  match mode {
    ColorMode::Always => true,
    ColorMode::Never => false,
    ColorMode::Auto => std::io::stdout().is_terminal(),
  }
}

pub fn detect_theme(mode: ThemeMode) -> Theme {
  match mode {
    ThemeMode::Dark => Theme::Dark,
    ThemeMode::Light => Theme::Light,
    ThemeMode::Auto => theme_from_colorfgbg(std::env::var("COLORFGBG").ok().as_deref()).unwrap_or(Theme::Dark),
  }
}

/// `COLORFGBG` is `fg;bg` (sometimes `fg;default;bg`); background codes 8 and up are light.
fn theme_from_colorfgbg(value: Option<&str>) -> Option<Theme> {
  let background = value?.split(';').next_back()?.parse::<u8>().ok()?;
  Some(if background >= 8 { Theme::Light } else { Theme::Dark })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_disabled_colors_reset() {
    let colors = Colors::new(false, Theme::Light);
    assert_eq!(colors.label(), Color::Reset);
    assert_eq!(colors.timestamp(), Color::Reset);
  }

  #[test]
  fn test_theme_selects_swatch() {
    assert_eq!(Colors::new(true, Theme::Dark).value(), rgb(242, 211, 56));
    assert_eq!(Colors::new(true, Theme::Light).value(), rgb(199, 146, 76));
  }

  #[test]
  fn test_theme_from_colorfgbg() {
    let cases = [
      (Some("15;0"), Some(Theme::Dark)),
      (Some("0;15"), Some(Theme::Light)),
      (Some("0;default;15"), Some(Theme::Light)),
      (Some("garbage"), None),
      (None, None),
    ];

    for (value, expected) in cases {
      assert_eq!(theme_from_colorfgbg(value), expected, "COLORFGBG={value:?}");
    }
  }

  #[test]
  fn test_comfy_conversion() {
    assert_eq!(to_comfy(rgb(1, 2, 3)), ComfyColor::Rgb { r: 1, g: 2, b: 3 });
    assert_eq!(to_comfy(Color::Reset), ComfyColor::Reset);
  }
}
