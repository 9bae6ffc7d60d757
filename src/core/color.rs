use serde::{Serialize, Serializer};

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
    pub const RED: Color = Color(0xef4444);
    pub const ORANGE: Color = Color(0xf97316);
    pub const VIOLET: Color = Color(0x8b5cf6);
    pub const GREEN: Color = Color(0x22c55e);
    pub const BLUE: Color = Color(0x3b82f6);

    pub fn rgb(&self) -> (u8, u8, u8) {
        (
            ((self.0 >> 16) & 0xff) as u8,
            ((self.0 >> 8) & 0xff) as u8,
            (self.0 & 0xff) as u8,
        )
    }

    /// `#rrggbb`
    pub fn to_hex(&self) -> String {
        format!("#{:06x}", self.0 & 0xff_ffff)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

/// The eight filler shades procedural buildings are painted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FillerShade {
    Slate,
    Steel,
    Ash,
    Sand,
    Clay,
    Concrete,
    Graphite,
    Mist,
}

impl FillerShade {
    pub const ALL: [FillerShade; 8] = [
        FillerShade::Slate,
        FillerShade::Steel,
        FillerShade::Ash,
        FillerShade::Sand,
        FillerShade::Clay,
        FillerShade::Concrete,
        FillerShade::Graphite,
        FillerShade::Mist,
    ];

    pub fn color(&self) -> Color {
        match self {
            FillerShade::Slate => Color(0x64748b),
            FillerShade::Steel => Color(0x475569),
            FillerShade::Ash => Color(0x94a3b8),
            FillerShade::Sand => Color(0xa8a29e),
            FillerShade::Clay => Color(0x78716c),
            FillerShade::Concrete => Color(0x9ca3af),
            FillerShade::Graphite => Color(0x4b5563),
            FillerShade::Mist => Color(0xcbd5e1),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FillerShade::Slate => "slate",
            FillerShade::Steel => "steel",
            FillerShade::Ash => "ash",
            FillerShade::Sand => "sand",
            FillerShade::Clay => "clay",
            FillerShade::Concrete => "concrete",
            FillerShade::Graphite => "graphite",
            FillerShade::Mist => "mist",
        }
    }

    pub fn index(&self) -> u8 {
        *self as u8
    }
}
