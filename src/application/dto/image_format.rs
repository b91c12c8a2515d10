/// Image formats offered by the rendering service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImageFormat {
    #[default]
    Png,
    Svg,
    /// ASCII-art rendering
    Txt,
}

impl ImageFormat {
    /// Path segment used by the rendering service
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Svg => "svg",
            ImageFormat::Txt => "txt",
        }
    }
}

impl std::str::FromStr for ImageFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "png" => Ok(ImageFormat::Png),
            "svg" => Ok(ImageFormat::Svg),
            "txt" | "text" => Ok(ImageFormat::Txt),
            _ => Err(format!(
                "Invalid image format: {}. Please specify 'png', 'svg' or 'txt'",
                s
            )),
        }
    }
}

impl std::fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_image_format_from_str_case_insensitive() {
        assert_eq!(ImageFormat::from_str("PNG").unwrap(), ImageFormat::Png);
        assert_eq!(ImageFormat::from_str("Svg").unwrap(), ImageFormat::Svg);
        assert_eq!(ImageFormat::from_str("text").unwrap(), ImageFormat::Txt);
    }

    #[test]
    fn test_image_format_from_str_invalid() {
        let error = ImageFormat::from_str("gif").unwrap_err();
        assert!(error.contains("Invalid image format"));
        assert!(error.contains("gif"));
    }

    #[test]
    fn test_image_format_default_and_display() {
        assert_eq!(ImageFormat::default(), ImageFormat::Png);
        assert_eq!(ImageFormat::Txt.to_string(), "txt");
    }
}
