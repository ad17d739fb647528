/// Horizontal alignment of a full-viewport section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
    #[default]
    Center,
    Full,
}

pub const SECTION_BASE_CLASSES: &str =
    "relative min-h-screen w-full flex flex-col justify-center px-6 md:px-20 py-20 z-10";

impl Align {
    /// Parse a `data-align` value; anything unrecognized is centered.
    pub fn from_attr(value: &str) -> Align {
        match value.trim().to_ascii_lowercase().as_str() {
            "left" => Align::Left,
            "right" => Align::Right,
            "full" => Align::Full,
            _ => Align::Center,
        }
    }

    pub fn classes(self) -> &'static str {
        match self {
            Align::Left => "items-start text-left",
            Align::Right => "items-end text-right",
            // full-width sections keep centered content
            Align::Center | Align::Full => "items-center text-center",
        }
    }
}

/// Class list for a section wrapper: base, alignment, then caller extras.
pub fn section_classes(align: Align, extra: &str) -> String {
    let extra = extra.trim();
    if extra.is_empty() {
        format!("{} {}", SECTION_BASE_CLASSES, align.classes())
    } else {
        format!("{} {} {}", SECTION_BASE_CLASSES, align.classes(), extra)
    }
}

/// Inline style every section carries so children can tilt in 3D.
pub const SECTION_STYLE: &str = "perspective: 1000px";
