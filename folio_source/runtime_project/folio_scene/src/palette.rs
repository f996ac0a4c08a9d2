use folio_structs::Color;

pub const INDIGO: Color = Color::hex(0x6366f1);
pub const VIOLET: Color = Color::hex(0x8b5cf6);
pub const CYAN: Color = Color::hex(0x22d3ee);
pub const PINK: Color = Color::hex(0xec4899);
pub const SLATE: Color = Color::hex(0x1a1a3a);

pub const ACCENTS: [Color; 4] = [INDIGO, VIOLET, CYAN, PINK];

#[inline]
pub fn accent(i: usize) -> Color {
    ACCENTS[i % ACCENTS.len()]
}
