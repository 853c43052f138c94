use crossterm::style::{Color, Stylize};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn palette(self, colored: bool) -> Palette {
        match self {
            Theme::Dark => Palette {
                x: Color::Cyan,
                o: Color::Magenta,
                highlight: Color::Yellow,
                muted: Color::DarkGrey,
                text: Color::White,
                colored,
            },
            Theme::Light => Palette {
                x: Color::DarkBlue,
                o: Color::DarkRed,
                highlight: Color::DarkGreen,
                muted: Color::Grey,
                text: Color::Black,
                colored,
            },
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub x: Color,
    pub o: Color,
    pub highlight: Color,
    pub muted: Color,
    pub text: Color,
    colored: bool,
}

impl Palette {
    #[cfg(test)]
    pub fn plain() -> Palette {
        Theme::Dark.palette(false)
    }

    pub fn paint(&self, text: &str, color: Color) -> String {
        if self.colored {
            text.with(color).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn paint_bold(&self, text: &str, color: Color) -> String {
        if self.colored {
            text.with(color).bold().to_string()
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn test_plain_palette_emits_no_escapes() {
        let palette = Palette::plain();

        assert_eq!(palette.paint("X", palette.x), "X");
        assert_eq!(palette.paint_bold("O", palette.o), "O");
    }

    #[test]
    fn test_colored_palette_keeps_text() {
        let palette = Theme::Light.palette(true);

        assert!(palette.paint("X", palette.x).contains('X'));
        assert!(palette.paint_bold("O", palette.o).contains('O'));
    }
}
