use crate::foundation::core::Rgb8;

/// Built-in palette variants.
///
/// Each variant is the color table of one fighter family of the simulator, in the same order as
/// the fighter type indices, so a document written by the simulator renders with the palette of
/// the same name.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    serde::Serialize,
    serde::Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum PaletteKind {
    /// 18 Pokemon type colors, Normal through Fairy.
    #[default]
    Pokemon,
    /// Rock, paper, scissor.
    RockPaperScissors,
    /// 39 Street Fighter characters, Seth (`A`) through Dan (`g`).
    StreetFighter,
}

#[rustfmt::skip]
const POKEMON: [(&str, Rgb8); 18] = [
    ("Normal",   Rgb8::new(168, 168, 120)),
    ("Fire",     Rgb8::new(240, 128, 48)),
    ("Water",    Rgb8::new(104, 144, 240)),
    ("Electric", Rgb8::new(248, 208, 48)),
    ("Grass",    Rgb8::new(120, 200, 80)),
    ("Ice",      Rgb8::new(152, 216, 216)),
    ("Fighting", Rgb8::new(192, 48, 40)),
    ("Poison",   Rgb8::new(160, 64, 160)),
    ("Ground",   Rgb8::new(224, 192, 104)),
    ("Flying",   Rgb8::new(168, 144, 240)),
    ("Psychic",  Rgb8::new(248, 88, 136)),
    ("Bug",      Rgb8::new(168, 184, 32)),
    ("Rock",     Rgb8::new(184, 160, 56)),
    ("Ghost",    Rgb8::new(112, 88, 152)),
    ("Dragon",   Rgb8::new(112, 56, 248)),
    ("Dark",     Rgb8::new(112, 88, 72)),
    ("Steel",    Rgb8::new(184, 184, 208)),
    ("Fairy",    Rgb8::new(240, 182, 188)),
];

#[rustfmt::skip]
const ROCK_PAPER_SCISSORS: [(&str, Rgb8); 3] = [
    ("Rock",    Rgb8::new(128, 0, 0)),
    ("Paper",   Rgb8::new(0, 0, 128)),
    ("Scissor", Rgb8::new(0, 128, 0)),
];

#[rustfmt::skip]
const STREET_FIGHTER: [(&str, Rgb8); 39] = [
    ("Seth",     Rgb8::new(100, 122, 4)),
    ("CViper",   Rgb8::new(105, 78, 203)),
    ("Cammy",    Rgb8::new(107, 255, 138)),
    ("Akuma",    Rgb8::new(136, 41, 110)),
    ("FLong",    Rgb8::new(145, 143, 47)),
    ("Rufus",    Rgb8::new(15, 0, 158)),
    ("Sagat",    Rgb8::new(158, 102, 221)),
    ("Balrog",   Rgb8::new(170, 122, 61)),
    ("Adon",     Rgb8::new(172, 195, 17)),
    ("Ibuki",    Rgb8::new(172, 244, 210)),
    ("Abel",     Rgb8::new(180, 0, 170)),
    ("Blanka",   Rgb8::new(180, 234, 210)),
    ("Makoto",   Rgb8::new(189, 94, 2)),
    ("Bison",    Rgb8::new(196, 103, 77)),
    ("Ryu",      Rgb8::new(196, 238, 203)),
    ("Ken",      Rgb8::new(198, 250, 237)),
    ("Yun",      Rgb8::new(20, 184, 104)),
    ("Zangief",  Rgb8::new(236, 120, 183)),
    ("Dhalsim",  Rgb8::new(236, 231, 122)),
    ("Guile",    Rgb8::new(240, 211, 242)),
    ("Sakura",   Rgb8::new(242, 255, 43)),
    ("ChunLi",   Rgb8::new(244, 214, 202)),
    ("DeeJay",   Rgb8::new(254, 177, 238)),
    ("Juri",     Rgb8::new(255, 139, 106)),
    ("Rose",     Rgb8::new(27, 228, 98)),
    ("Gouken",   Rgb8::new(56, 205, 99)),
    ("Guy",      Rgb8::new(56, 43, 146)),
    ("Cody",     Rgb8::new(75, 245, 255)),
    ("Fuerte",   Rgb8::new(84, 123, 12)),
    ("Yang",     Rgb8::new(96, 186, 0)),
    ("EHonda",   Rgb8::new(241, 204, 245)),
    ("Gen",      Rgb8::new(176, 43, 196)),
    ("Vega",     Rgb8::new(175, 74, 207)),
    ("Dudley",   Rgb8::new(116, 252, 200)),
    ("Oni",      Rgb8::new(187, 241, 212)),
    ("EvilRyu",  Rgb8::new(137, 215, 168)),
    ("Hakan",    Rgb8::new(97, 148, 5)),
    ("THawk",    Rgb8::new(250, 254, 145)),
    ("Dan",      Rgb8::new(136, 51, 0)),
];

/// Ordered color lookup table. Index `i` is selected by the character `'A' + i`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    kind: PaletteKind,
    entries: &'static [(&'static str, Rgb8)],
}

impl Palette {
    /// The built-in palette for `kind`.
    pub fn builtin(kind: PaletteKind) -> Self {
        let entries: &'static [(&'static str, Rgb8)] = match kind {
            PaletteKind::Pokemon => &POKEMON,
            PaletteKind::RockPaperScissors => &ROCK_PAPER_SCISSORS,
            PaletteKind::StreetFighter => &STREET_FIGHTER,
        };
        Self { kind, entries }
    }

    /// Which built-in table this is.
    pub fn kind(&self) -> PaletteKind {
        self.kind
    }

    /// Number of colors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for the built-in tables.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Color at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<Rgb8> {
        self.entries.get(index).map(|(_, c)| *c)
    }

    /// Type label at `index`.
    pub fn label(&self, index: usize) -> Option<&'static str> {
        self.entries.get(index).map(|(name, _)| *name)
    }

    /// Colors in index order.
    pub fn colors(&self) -> impl Iterator<Item = Rgb8> + '_ {
        self.entries.iter().map(|(_, c)| *c)
    }
}

impl From<PaletteKind> for Palette {
    fn from(kind: PaletteKind) -> Self {
        Self::builtin(kind)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/palette.rs"]
mod tests;
