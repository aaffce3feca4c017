use image::{DynamicImage, ImageFormat, Luma};
use qrcode::render::svg;
use qrcode::{Color, EcLevel, QrCode};
use serde::{Deserialize, Serialize};
use std::io::Cursor;
use std::ops::RangeInclusive;
use thiserror::Error;

pub const SIZE_RANGE: RangeInclusive<u32> = 128..=512;
pub const DEFAULT_SIZE: u32 = 256;

#[derive(Error, Debug)]
pub enum QrError {
    #[error("Please enter content to generate QR code")]
    Empty,

    #[error("Error generating QR code: {0}")]
    Encode(#[from] qrcode::types::QrError),

    #[error("Error encoding PNG: {0}")]
    Image(#[from] image::ImageError),
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorLevel {
    Low,
    #[default]
    Medium,
    Quartile,
    High,
}

impl ErrorLevel {
    pub const ALL: [ErrorLevel; 4] = [
        ErrorLevel::Low,
        ErrorLevel::Medium,
        ErrorLevel::Quartile,
        ErrorLevel::High,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ErrorLevel::Low => "Low (7%)",
            ErrorLevel::Medium => "Medium (15%)",
            ErrorLevel::Quartile => "Quartile (25%)",
            ErrorLevel::High => "High (30%)",
        }
    }

    fn ec_level(self) -> EcLevel {
        match self {
            ErrorLevel::Low => EcLevel::L,
            ErrorLevel::Medium => EcLevel::M,
            ErrorLevel::Quartile => EcLevel::Q,
            ErrorLevel::High => EcLevel::H,
        }
    }
}

/// Square module grid, row-major, `true` for dark.
pub struct QrMatrix {
    code: QrCode,
    modules: Vec<bool>,
}

impl QrMatrix {
    pub fn width(&self) -> usize {
        self.code.width()
    }

    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        let width = self.width();
        x < width && y < width && self.modules[y * width + x]
    }

    pub fn to_svg(&self, size: u32) -> String {
        self.code
            .render::<svg::Color>()
            .min_dimensions(size, size)
            .dark_color(svg::Color("#000000"))
            .light_color(svg::Color("#ffffff"))
            .build()
    }

    /// Grayscale PNG at least `size` pixels wide.
    pub fn to_png(&self, size: u32) -> Result<Vec<u8>, QrError> {
        let image = self
            .code
            .render::<Luma<u8>>()
            .min_dimensions(size, size)
            .build();

        let mut bytes = Vec::new();
        DynamicImage::ImageLuma8(image).write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }
}

pub fn generate(text: &str, level: ErrorLevel) -> Result<QrMatrix, QrError> {
    if text.trim().is_empty() {
        return Err(QrError::Empty);
    }

    let code = QrCode::with_error_correction_level(text.as_bytes(), level.ec_level())?;
    let modules = code
        .to_colors()
        .into_iter()
        .map(|color| color == Color::Dark)
        .collect();

    Ok(QrMatrix { code, modules })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_one_for_short_text() {
        let matrix = generate("hello", ErrorLevel::Medium).unwrap();
        assert_eq!(matrix.width(), 21);
        // finder pattern corners are dark
        assert!(matrix.is_dark(0, 0));
        assert!(matrix.is_dark(20, 0));
        assert!(matrix.is_dark(0, 20));
        // separator next to the top-left finder is light
        assert!(!matrix.is_dark(7, 0));
        assert!(!matrix.is_dark(21, 0));
    }

    #[test]
    fn higher_correction_needs_more_modules() {
        let text = "https://example.com/some/fairly/long/path?with=query&and=more";
        let low = generate(text, ErrorLevel::Low).unwrap();
        let high = generate(text, ErrorLevel::High).unwrap();
        assert!(high.width() > low.width());
    }

    #[test]
    fn blank_input_is_rejected() {
        assert!(matches!(generate("   ", ErrorLevel::Low), Err(QrError::Empty)));
    }

    #[test]
    fn oversized_input_is_rejected() {
        let text = "x".repeat(5000);
        assert!(matches!(generate(&text, ErrorLevel::High), Err(QrError::Encode(_))));
    }

    #[test]
    fn svg_output() {
        let svg = generate("devkit", ErrorLevel::Quartile).unwrap().to_svg(DEFAULT_SIZE);
        assert!(svg.contains("<svg"));
        assert!(svg.contains("#000000"));
    }

    #[test]
    fn png_output() {
        let png = generate("devkit", ErrorLevel::Medium)
            .unwrap()
            .to_png(DEFAULT_SIZE)
            .unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");

        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!(decoded.width(), decoded.height());
        assert!(decoded.width() >= DEFAULT_SIZE);
    }
}
