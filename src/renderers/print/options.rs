//! Print export settings

use crate::errors::ExportError;
use serde::{Deserialize, Serialize};

/// Smallest and largest supported column count
pub const MIN_COLUMNS: u8 = 1;
pub const MAX_COLUMNS: u8 = 4;

/// Output sheet size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaperSize {
    #[default]
    A4,
    A5,
}

impl PaperSize {
    /// Width and height in points
    pub fn dimensions(self) -> (f64, f64) {
        match self {
            PaperSize::A4 => (595.28, 841.89),
            PaperSize::A5 => (419.53, 595.28),
        }
    }
}

/// Font size tier of the print document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Smaller,
    #[default]
    Normal,
    Bigger,
}

impl FontSize {
    /// CSS value for the body font size
    pub fn css(self) -> &'static str {
        match self {
            FontSize::Smaller => "8pt",
            FontSize::Normal => "10pt",
            FontSize::Bigger => "12pt",
        }
    }
}

/// Settings for print HTML and paginated export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PrintOptions {
    pub paper_size: PaperSize,
    /// Number of columns per sheet (1-4)
    pub columns: u8,
    pub font_size: FontSize,
    /// Include chords marked `print="false"`
    pub print_hidden_chords: bool,
    /// Extra header lines; the first one is appended to the author line
    pub metadata: Vec<String>,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            paper_size: PaperSize::A4,
            columns: 2,
            font_size: FontSize::Normal,
            print_hidden_chords: false,
            metadata: Vec::new(),
        }
    }
}

impl PrintOptions {
    pub fn validate(&self) -> Result<(), ExportError> {
        if !(MIN_COLUMNS..=MAX_COLUMNS).contains(&self.columns) {
            return Err(ExportError::InvalidValue(format!(
                "option \"columns\" must be between {} and {}, got {}",
                MIN_COLUMNS, MAX_COLUMNS, self.columns
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = PrintOptions::default();
        assert_eq!(options.paper_size, PaperSize::A4);
        assert_eq!(options.columns, 2);
        assert_eq!(options.font_size, FontSize::Normal);
        assert!(!options.print_hidden_chords);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial_json() {
        let options: PrintOptions =
            serde_json::from_str(r#"{"paperSize":"a5","fontSize":"smaller","printHiddenChords":true}"#).unwrap();
        assert_eq!(options.paper_size, PaperSize::A5);
        assert_eq!(options.font_size, FontSize::Smaller);
        assert!(options.print_hidden_chords);
        assert_eq!(options.columns, 2);
    }

    #[test]
    fn test_column_range() {
        for columns in [0u8, 5] {
            let options = PrintOptions { columns, ..PrintOptions::default() };
            assert!(matches!(options.validate(), Err(ExportError::InvalidValue(_))));
        }
        for columns in 1u8..=4 {
            let options = PrintOptions { columns, ..PrintOptions::default() };
            assert!(options.validate().is_ok());
        }
    }
}
