use crate::error::TemplateError;
use crate::grid::Pixel;

/// Rectangular pattern of exact pixel values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl Template {
    /// Build a template from row-major rows (top row first).
    pub fn from_rows(rows: Vec<Vec<Pixel>>) -> Result<Self, TemplateError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 || height == 0 {
            return Err(TemplateError::Empty);
        }
        let mut pixels = Vec::with_capacity(width * height);
        for (row, r) in rows.iter().enumerate() {
            if r.len() != width {
                return Err(TemplateError::RaggedRow {
                    row,
                    got: r.len(),
                    want: width,
                });
            }
            pixels.extend_from_slice(r);
        }
        Ok(Self {
            width: width as u32,
            height: height as u32,
            pixels,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel at offset (dx, dy) from the template's top-left corner.
    #[inline]
    pub fn get(&self, dx: u32, dy: u32) -> Pixel {
        self.pixels[dy as usize * self.width as usize + dx as usize]
    }
}

/// A named search target bound to its identifying pattern.
#[derive(Debug, Clone)]
pub struct Marker {
    pub name: &'static str,
    pub template: Template,
}

// Palette shared by the built-in characters.
const RED: Pixel = Pixel::new(238, 21, 32);
const WHITE: Pixel = Pixel::new(255, 255, 255);
const BLUE: Pixel = Pixel::new(1, 136, 226);
const YELLOW: Pixel = Pixel::new(253, 252, 3);
const DARK: Pixel = Pixel::new(32, 32, 32);
const GREY: Pixel = Pixel::new(216, 216, 216);

fn builtin(name: &'static str, rows: Vec<Vec<Pixel>>) -> Marker {
    let template = Template::from_rows(rows).expect("built-in marker pattern should be valid");
    Marker { name, template }
}

// --- Built-in markers ---
//
// Each is the unique 2x2 corner signature of one character, exact RGB.

pub fn waldo() -> Marker {
    builtin("Waldo", vec![vec![RED, WHITE], vec![WHITE, BLUE]])
}

pub fn wilma() -> Marker {
    builtin("Wilma", vec![vec![WHITE, RED], vec![BLUE, WHITE]])
}

pub fn odlaw() -> Marker {
    builtin("Odlaw", vec![vec![YELLOW, DARK], vec![DARK, YELLOW]])
}

pub fn wizard() -> Marker {
    builtin("Wizard whitebeard", vec![vec![GREY, RED], vec![RED, GREY]])
}

pub fn woof() -> Marker {
    builtin("Woof", vec![vec![WHITE, RED], vec![RED, WHITE]])
}

/// Lookup keys for the built-in markers.
pub const BUILTIN_NAMES: &[&str] = &["waldo", "wilma", "odlaw", "wizard", "woof"];

/// All built-in markers in registry order.
pub fn builtin_markers() -> Vec<Marker> {
    vec![waldo(), wilma(), odlaw(), wizard(), woof()]
}

/// Load a built-in marker by key.
pub fn builtin_marker(name: &str) -> Option<Marker> {
    match name {
        "waldo" => Some(waldo()),
        "wilma" => Some(wilma()),
        "odlaw" => Some(odlaw()),
        "wizard" => Some(wizard()),
        "woof" => Some(woof()),
        _ => None,
    }
}
