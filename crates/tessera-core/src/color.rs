use serde::{Deserialize, Serialize};

/// Named color of a shape.
///
/// Names outside the seven known ones are kept verbatim in `Other` so they
/// survive a load/save cycle; they render with the fallback color.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ShapeColor {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
    Orange,
    Cyan,
    Other(String),
}

impl ShapeColor {
    pub const NAMED: [ShapeColor; 7] = [
        ShapeColor::Red,
        ShapeColor::Blue,
        ShapeColor::Green,
        ShapeColor::Yellow,
        ShapeColor::Purple,
        ShapeColor::Orange,
        ShapeColor::Cyan,
    ];

    /// Resolve a color name. Matching is case-sensitive.
    pub fn from_name(name: &str) -> Self {
        match name {
            "red" => ShapeColor::Red,
            "blue" => ShapeColor::Blue,
            "green" => ShapeColor::Green,
            "yellow" => ShapeColor::Yellow,
            "purple" => ShapeColor::Purple,
            "orange" => ShapeColor::Orange,
            "cyan" => ShapeColor::Cyan,
            other => ShapeColor::Other(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ShapeColor::Red => "red",
            ShapeColor::Blue => "blue",
            ShapeColor::Green => "green",
            ShapeColor::Yellow => "yellow",
            ShapeColor::Purple => "purple",
            ShapeColor::Orange => "orange",
            ShapeColor::Cyan => "cyan",
            ShapeColor::Other(name) => name,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, ShapeColor::Other(_))
    }

    /// Display color for this name, or the fallback gray.
    pub fn rgb(&self) -> Rgb {
        match self {
            ShapeColor::Red => Rgb::new(239, 68, 68),
            ShapeColor::Blue => Rgb::new(59, 130, 246),
            ShapeColor::Green => Rgb::new(34, 197, 94),
            ShapeColor::Yellow => Rgb::new(250, 204, 21),
            ShapeColor::Purple => Rgb::new(168, 85, 247),
            ShapeColor::Orange => Rgb::new(249, 115, 22),
            ShapeColor::Cyan => Rgb::new(34, 211, 238),
            ShapeColor::Other(_) => Rgb::default(),
        }
    }
}

impl From<String> for ShapeColor {
    fn from(name: String) -> Self {
        match ShapeColor::from_name(&name) {
            ShapeColor::Other(_) => ShapeColor::Other(name),
            known => known,
        }
    }
}

impl From<&str> for ShapeColor {
    fn from(name: &str) -> Self {
        ShapeColor::from_name(name)
    }
}

impl From<ShapeColor> for String {
    fn from(color: ShapeColor) -> Self {
        match color {
            ShapeColor::Other(name) => name,
            known => known.name().to_string(),
        }
    }
}

impl std::fmt::Display for ShapeColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// 8-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_f32_array(&self, opacity: f32) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            opacity,
        ]
    }
}

/// The fallback gray used for unrecognized color names.
impl Default for Rgb {
    fn default() -> Self {
        Self {
            r: 107,
            g: 114,
            b: 128,
        }
    }
}
