use std::fmt::Debug;

use crate::color::palette::PaletteKind;
use crate::simulate::rng::Rng64;

/// Fighter families the simulator can run.
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
pub enum FighterKind {
    /// The 18 Pokemon types with the type effectiveness chart.
    #[default]
    Pokemon,
    /// Rock beats scissor beats paper beats rock.
    RockPaperScissors,
    /// 39 Street Fighter characters; matchups are win chances rolled per attack.
    StreetFighter,
}

impl FighterKind {
    /// Palette that renders documents of this family.
    pub fn palette(self) -> PaletteKind {
        match self {
            Self::Pokemon => PokemonType::PALETTE,
            Self::RockPaperScissors => RpsType::PALETTE,
            Self::StreetFighter => StreetFighterType::PALETTE,
        }
    }
}

/// How an attack is decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Effectiveness scales the attacker's damage; the defender dies at zero health.
    Damage,
    /// Effectiveness is the attacker's chance to win in percent, rolled against `0..=100`.
    Chance,
}

/// A closed set of fighter types with their matchup table.
///
/// `index` doubles as the palette index, so the written letter of a type is `'A' + index`.
pub trait FighterType: Copy + Eq + Debug + 'static {
    /// Every type, in index order.
    const ALL: &'static [Self];
    /// Health of a fresh fighter.
    const HEALTH: i32;
    /// Base damage of an attack at 100% effectiveness.
    const DAMAGE: i32;
    /// Palette whose entries line up with the type indices.
    const PALETTE: PaletteKind;
    /// How an attack is decided.
    const RESOLUTION: Resolution = Resolution::Damage;

    /// Type at `index`, `None` past the end.
    fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
    /// Position of this type.
    fn index(self) -> usize;
    /// Attack effectiveness in percent.
    fn effectiveness(self, defender: Self) -> i32;
}

/// One grid cell: a fighter of type `K` with its remaining health.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fighter<K> {
    health: i32,
    damage: i32,
    kind: K,
}

impl<K: FighterType> Fighter<K> {
    /// A fresh fighter of `kind`.
    pub fn new(kind: K) -> Self {
        Self {
            health: K::HEALTH,
            damage: K::DAMAGE,
            kind,
        }
    }

    /// A fresh fighter of a uniformly drawn type.
    pub fn random(rng: &mut Rng64) -> Self {
        Self::new(K::ALL[rng.below(K::ALL.len())])
    }

    /// Current type.
    pub fn kind(&self) -> K {
        self.kind
    }

    /// Remaining health.
    pub fn health(&self) -> i32 {
        self.health
    }

    /// Letter this fighter is written as.
    pub fn letter(&self) -> char {
        char::from(b'A' + self.kind.index() as u8)
    }

    /// Whether attacking `defender` makes sense when own-kind fights are filtered out.
    pub fn should_fight(&self, defender: &Self) -> bool {
        self.kind != defender.kind
    }

    /// Attack effectiveness against `defender`, in percent.
    pub fn effectiveness(&self, defender: &Self) -> i32 {
        self.kind.effectiveness(defender.kind)
    }

    /// Attack `defender`. A defender that loses is converted to this fighter's type at full
    /// health; returns whether that happened. `rng` is only drawn from for
    /// [`Resolution::Chance`] families.
    pub fn fight(&self, defender: &mut Self, rng: &mut Rng64) -> bool {
        let effectiveness = self.effectiveness(defender);
        let died = match K::RESOLUTION {
            Resolution::Damage => defender.take_damage(self.damage * effectiveness / 100),
            Resolution::Chance => (rng.below(101) as i32) < effectiveness,
        };
        if died {
            defender.reset(self.kind);
        }
        died
    }

    fn take_damage(&mut self, damage: i32) -> bool {
        self.health -= damage;
        self.health <= 0
    }

    fn reset(&mut self, kind: K) {
        *self = Self::new(kind);
    }
}

/// Pokemon types in palette order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum PokemonType {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

impl FighterType for PokemonType {
    const ALL: &'static [Self] = &[
        Self::Normal,
        Self::Fire,
        Self::Water,
        Self::Electric,
        Self::Grass,
        Self::Ice,
        Self::Fighting,
        Self::Poison,
        Self::Ground,
        Self::Flying,
        Self::Psychic,
        Self::Bug,
        Self::Rock,
        Self::Ghost,
        Self::Dragon,
        Self::Dark,
        Self::Steel,
        Self::Fairy,
    ];
    const HEALTH: i32 = 80;
    const DAMAGE: i32 = 40;
    const PALETTE: PaletteKind = PaletteKind::Pokemon;

    fn index(self) -> usize {
        self as usize
    }

    fn effectiveness(self, defender: Self) -> i32 {
        POKEMON_CHART[self as usize][defender as usize]
    }
}

// Rows attack, columns defend.
#[rustfmt::skip]
const POKEMON_CHART: [[i32; 18]; 18] = [
    [ 100, 100, 100, 100, 100, 100, 100, 100, 100, 100, 100, 100,  50,   0, 100, 100,  50, 100 ], // Normal
    [ 100,  50,  50, 100, 200, 200, 100, 100, 100, 100, 100, 200,  50, 100,  50, 100, 200, 100 ], // Fire
    [ 100, 200,  50, 100,  50, 100, 100, 100, 200, 100, 100, 100, 200, 100,  50, 100, 100, 100 ], // Water
    [ 100, 100, 200,  50,  50, 100, 100, 100,   0, 200, 100, 100, 100, 100,  50, 100, 100, 100 ], // Electric
    [ 100,  50, 200, 100,  50, 100, 100,  50, 200,  50, 100,  50, 200, 100,  50, 100,  50, 100 ], // Grass
    [ 100,  50,  50, 100, 200,  50, 100, 100, 200, 200, 100, 100, 100, 100, 200, 100,  50, 100 ], // Ice
    [ 200, 100, 100, 100, 100, 200, 100,  50, 100,  50,  50,  50, 200,   0, 100, 200, 200,  50 ], // Fighting
    [ 100, 100, 100, 100, 200, 100, 100,  50,  50, 100, 100, 100,  50,  50, 100, 100,   0, 200 ], // Poison
    [ 100, 200, 100, 200,  50, 100, 100, 200, 100,   0, 100,  50, 200, 100, 100, 100, 200, 100 ], // Ground
    [ 100, 100, 100,  50, 200, 100, 200, 100, 100, 100, 100, 200,  50, 100, 100, 100,  50, 100 ], // Flying
    [ 100, 100, 100, 100, 100, 100, 200, 200, 100, 100,  50, 100, 100, 100, 100,   0,  50, 100 ], // Psychic
    [ 100,  50, 100, 100, 200, 100,  50,  50, 100,  50, 200, 100, 100,  50, 100, 200,  50,  50 ], // Bug
    [ 100, 200, 100, 100, 100, 200,  50, 100,  50, 200, 100, 200, 100, 100, 100, 100,  50, 100 ], // Rock
    [   0, 100, 100, 100, 100, 100, 100, 100, 100, 100, 200, 100, 100, 200, 100,  50, 100, 100 ], // Ghost
    [ 100, 100, 100, 100, 100, 100, 100, 100, 100, 100, 100, 100, 100, 100, 200, 100,  50,   0 ], // Dragon
    [ 100, 100, 100, 100, 100, 100,  50, 100, 100, 100, 200, 100, 100, 200, 100,  50, 100,  50 ], // Dark
    [ 100,  50,  50,  50, 100, 200, 100, 100, 100, 100, 100, 100, 200, 100, 100, 100,  50, 200 ], // Steel
    [ 100,  50, 100, 100, 100, 100, 200,  50, 100, 100, 100, 100, 100, 100, 200, 200,  50, 100 ], // Fairy
];

/// Rock, paper and scissor in palette order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum RpsType {
    Rock,
    Paper,
    Scissor,
}

impl FighterType for RpsType {
    const ALL: &'static [Self] = &[Self::Rock, Self::Paper, Self::Scissor];
    const HEALTH: i32 = 100;
    const DAMAGE: i32 = 100;
    const PALETTE: PaletteKind = PaletteKind::RockPaperScissors;

    fn index(self) -> usize {
        self as usize
    }

    fn effectiveness(self, defender: Self) -> i32 {
        let wins = matches!(
            (self, defender),
            (Self::Rock, Self::Scissor) | (Self::Paper, Self::Rock) | (Self::Scissor, Self::Paper)
        );
        if wins { 100 } else { 0 }
    }
}

/// Street Fighter characters in palette order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum StreetFighterType {
    Seth,
    CViper,
    Cammy,
    Akuma,
    FLong,
    Rufus,
    Sagat,
    Balrog,
    Adon,
    Ibuki,
    Abel,
    Blanka,
    Makoto,
    Bison,
    Ryu,
    Ken,
    Yun,
    Zangief,
    Dhalsim,
    Guile,
    Sakura,
    ChunLi,
    DeeJay,
    Juri,
    Rose,
    Gouken,
    Guy,
    Cody,
    Fuerte,
    Yang,
    EHonda,
    Gen,
    Vega,
    Dudley,
    Oni,
    EvilRyu,
    Hakan,
    THawk,
    Dan,
}

impl FighterType for StreetFighterType {
    const ALL: &'static [Self] = &[
        Self::Seth,
        Self::CViper,
        Self::Cammy,
        Self::Akuma,
        Self::FLong,
        Self::Rufus,
        Self::Sagat,
        Self::Balrog,
        Self::Adon,
        Self::Ibuki,
        Self::Abel,
        Self::Blanka,
        Self::Makoto,
        Self::Bison,
        Self::Ryu,
        Self::Ken,
        Self::Yun,
        Self::Zangief,
        Self::Dhalsim,
        Self::Guile,
        Self::Sakura,
        Self::ChunLi,
        Self::DeeJay,
        Self::Juri,
        Self::Rose,
        Self::Gouken,
        Self::Guy,
        Self::Cody,
        Self::Fuerte,
        Self::Yang,
        Self::EHonda,
        Self::Gen,
        Self::Vega,
        Self::Dudley,
        Self::Oni,
        Self::EvilRyu,
        Self::Hakan,
        Self::THawk,
        Self::Dan,
    ];
    const HEALTH: i32 = 100;
    const DAMAGE: i32 = 100;
    const PALETTE: PaletteKind = PaletteKind::StreetFighter;
    const RESOLUTION: Resolution = Resolution::Chance;

    fn index(self) -> usize {
        self as usize
    }

    fn effectiveness(self, defender: Self) -> i32 {
        STREET_FIGHTER_CHART[self as usize][defender as usize]
    }
}

// Percent chance that the row character beats the column character. Mirror matches are 0.
#[rustfmt::skip]
const STREET_FIGHTER_CHART: [[i32; 39]; 39] = [
    [ 0, 40, 40, 50, 40, 50, 50, 50, 40, 50, 50, 50, 50, 60, 60, 50, 60, 70, 60, 60, 40, 60, 50, 60, 60, 60, 40, 60, 50, 60, 60, 50, 60, 60, 60, 50, 60, 70, 70],
    [60,  0, 60, 60, 50, 50, 60, 40, 50, 40, 60, 50, 60, 40, 60, 60, 50, 40, 70, 60, 50, 60, 50, 40, 60, 60, 50, 60, 50, 50, 50, 60, 50, 50, 60, 60, 50, 60, 60],
    [60, 40,  0, 60, 40, 50, 60, 40, 50, 60, 60, 60, 60, 40, 60, 50, 50, 40, 60, 40, 50, 50, 40, 60, 60, 60, 50, 60, 60, 50, 60, 60, 60, 50, 60, 60, 60, 60, 60],
    [50, 40, 40,  0, 50, 50, 60, 50, 50, 50, 60, 50, 50, 50, 50, 50, 40, 60, 60, 60, 60, 60, 50, 50, 50, 60, 60, 50, 60, 50, 60, 60, 60, 50, 50, 60, 60, 60, 60],
    [60, 50, 60, 50,  0, 50, 60, 40, 50, 50, 50, 60, 50, 50, 60, 50, 50, 60, 60, 50, 50, 60, 60, 60, 40, 50, 50, 50, 50, 50, 60, 50, 50, 50, 60, 50, 60, 60, 60],
    [50, 50, 50, 50, 50,  0, 40, 50, 50, 60, 60, 50, 60, 50, 40, 50, 60, 30, 60, 40, 60, 60, 40, 50, 70, 40, 40, 50, 60, 60, 60, 50, 60, 50, 60, 60, 60, 50, 70],
    [50, 40, 40, 40, 40, 60,  0, 60, 50, 40, 50, 50, 50, 50, 50, 60, 60, 70, 50, 50, 60, 40, 50, 40, 60, 50, 60, 60, 50, 60, 60, 50, 60, 40, 50, 60, 60, 70, 60],
    [50, 60, 60, 50, 60, 50, 40,  0, 60, 50, 50, 60, 60, 50, 50, 50, 50, 40, 40, 40, 60, 40, 50, 50, 60, 50, 60, 50, 50, 60, 50, 50, 50, 60, 60, 50, 50, 50, 60],
    [60, 50, 50, 50, 50, 50, 50, 40,  0, 50, 50, 60, 50, 50, 60, 50, 50, 40, 40, 60, 60, 50, 50, 50, 60, 60, 50, 50, 60, 50, 40, 50, 50, 50, 50, 60, 60, 40, 60],
    [50, 60, 40, 50, 50, 40, 60, 50, 50,  0, 50, 40, 50, 40, 50, 50, 50, 40, 60, 60, 50, 50, 60, 50, 50, 50, 60, 50, 50, 50, 50, 50, 60, 50, 60, 60, 60, 40, 60],
    [50, 40, 40, 40, 50, 40, 50, 50, 50, 50,  0, 60, 50, 50, 60, 50, 50, 40, 70, 60, 50, 40, 50, 40, 50, 60, 50, 50, 50, 50, 60, 60, 60, 50, 60, 60, 60, 40, 50],
    [50, 50, 40, 50, 40, 50, 50, 40, 40, 60, 40,  0, 50, 40, 50, 50, 50, 60, 40, 60, 50, 50, 60, 60, 60, 60, 60, 60, 60, 40, 50, 50, 40, 50, 50, 50, 40, 80, 60],
    [50, 40, 40, 50, 50, 40, 50, 40, 50, 50, 50, 50,  0, 50, 50, 50, 50, 40, 60, 60, 50, 40, 50, 50, 60, 50, 50, 50, 60, 50, 40, 50, 60, 60, 60, 50, 60, 60, 70],
    [40, 60, 60, 50, 50, 50, 50, 50, 50, 60, 50, 60, 50,  0, 50, 50, 40, 40, 50, 30, 60, 50, 60, 60, 50, 50, 50, 50, 60, 50, 40, 50, 50, 50, 50, 50, 60, 50, 60],
    [40, 40, 40, 50, 40, 60, 50, 50, 40, 50, 40, 50, 50, 50,  0, 50, 60, 60, 40, 50, 60, 50, 50, 50, 40, 50, 50, 50, 50, 50, 60, 50, 60, 50, 60, 60, 60, 60, 70],
    [50, 40, 50, 50, 50, 50, 40, 50, 50, 50, 50, 50, 50, 50, 50,  0, 60, 50, 40, 40, 50, 60, 60, 50, 40, 50, 50, 60, 50, 60, 50, 60, 50, 50, 50, 50, 60, 50, 60],
    [40, 50, 50, 60, 50, 40, 40, 50, 50, 50, 50, 50, 50, 60, 40, 40,  0, 40, 70, 60, 50, 60, 50, 50, 60, 40, 50, 50, 50, 50, 60, 60, 60, 50, 50, 50, 50, 40, 60],
    [30, 60, 60, 40, 40, 70, 30, 60, 60, 60, 60, 40, 60, 60, 40, 50, 60,  0, 40, 40, 50, 30, 40, 40, 40, 40, 70, 60, 50, 60, 50, 40, 50, 60, 60, 50, 60, 50, 70],
    [40, 30, 40, 40, 40, 40, 50, 60, 60, 40, 30, 60, 40, 50, 60, 60, 30, 60,  0, 60, 40, 60, 60, 40, 50, 60, 50, 60, 50, 40, 70, 50, 50, 60, 50, 60, 50, 60, 70],
    [40, 40, 60, 40, 50, 60, 50, 60, 40, 40, 40, 40, 40, 70, 50, 60, 40, 60, 40,  0, 50, 60, 50, 60, 40, 50, 40, 50, 40, 50, 60, 50, 50, 60, 50, 50, 60, 70, 60],
    [60, 50, 50, 40, 50, 40, 40, 40, 40, 50, 50, 50, 50, 40, 40, 50, 50, 50, 60, 50,  0, 50, 50, 60, 50, 60, 50, 50, 50, 50, 40, 60, 50, 50, 60, 60, 60, 60, 60],
    [40, 40, 50, 40, 40, 40, 60, 60, 50, 50, 60, 50, 60, 50, 50, 40, 40, 70, 40, 40, 50,  0, 50, 50, 50, 50, 50, 50, 60, 50, 60, 50, 50, 50, 50, 50, 50, 60, 60],
    [50, 50, 60, 50, 40, 60, 50, 50, 50, 40, 50, 40, 50, 40, 50, 40, 50, 60, 40, 50, 50, 50,  0, 50, 40, 50, 50, 50, 50, 60, 60, 50, 50, 50, 50, 50, 50, 70, 60],
    [40, 60, 40, 50, 40, 50, 60, 50, 50, 50, 60, 40, 50, 40, 50, 50, 50, 60, 60, 40, 40, 50, 50,  0, 50, 50, 50, 50, 40, 40, 40, 50, 50, 50, 60, 60, 60, 70, 60],
    [40, 40, 40, 50, 60, 30, 40, 40, 40, 50, 50, 40, 40, 50, 60, 60, 40, 60, 50, 60, 50, 50, 60, 50,  0, 60, 60, 50, 60, 40, 40, 50, 50, 60, 50, 50, 60, 60, 60],
    [40, 40, 40, 40, 50, 60, 50, 50, 40, 50, 40, 40, 50, 50, 50, 50, 60, 60, 40, 50, 40, 50, 50, 50, 40,  0, 40, 40, 60, 60, 60, 50, 50, 60, 60, 60, 50, 60, 60],
    [60, 50, 50, 40, 50, 60, 40, 40, 50, 40, 50, 40, 50, 50, 50, 50, 50, 30, 50, 60, 50, 50, 50, 50, 40, 60,  0, 40, 50, 60, 50, 50, 50, 50, 60, 60, 60, 40, 60],
    [40, 40, 40, 50, 50, 50, 40, 50, 50, 50, 50, 40, 50, 50, 50, 40, 50, 40, 40, 50, 50, 50, 50, 50, 50, 60, 60,  0, 40, 40, 50, 50, 50, 60, 60, 60, 60, 60, 60],
    [50, 50, 40, 40, 50, 40, 50, 50, 40, 50, 50, 40, 40, 40, 50, 50, 50, 50, 50, 60, 50, 40, 50, 60, 40, 40, 50, 60,  0, 60, 50, 50, 50, 50, 60, 60, 50, 60, 50],
    [40, 50, 50, 50, 50, 40, 40, 40, 50, 50, 50, 60, 50, 50, 50, 40, 50, 40, 60, 50, 50, 50, 40, 60, 60, 40, 40, 60, 40,  0, 50, 60, 50, 50, 50, 50, 60, 40, 60],
    [40, 50, 40, 40, 40, 40, 40, 50, 60, 50, 40, 50, 60, 60, 40, 50, 40, 50, 30, 40, 60, 40, 40, 60, 60, 40, 50, 50, 50, 50,  0, 60, 60, 50, 50, 50, 60, 60, 60],
    [50, 40, 40, 40, 50, 50, 50, 50, 50, 50, 40, 50, 50, 50, 50, 40, 40, 60, 50, 50, 40, 50, 50, 50, 50, 50, 50, 50, 50, 40, 40,  0, 50, 50, 50, 50, 50, 70, 60],
    [40, 50, 40, 40, 50, 40, 40, 50, 50, 40, 40, 60, 40, 50, 40, 50, 40, 50, 50, 50, 50, 50, 50, 50, 50, 50, 50, 50, 50, 50, 40, 50,  0, 50, 50, 50, 60, 60, 60],
    [40, 50, 50, 50, 50, 50, 60, 40, 50, 50, 50, 50, 40, 50, 50, 50, 50, 40, 40, 40, 50, 50, 50, 50, 40, 40, 50, 40, 50, 50, 50, 50, 50,  0, 50, 50, 50, 40, 60],
    [40, 40, 40, 50, 40, 40, 50, 40, 50, 40, 40, 50, 40, 50, 40, 50, 50, 40, 50, 50, 40, 50, 50, 40, 50, 40, 40, 40, 40, 50, 50, 50, 50, 50,  0, 60, 50, 60, 60],
    [50, 40, 40, 40, 50, 40, 40, 50, 40, 40, 40, 50, 50, 50, 40, 50, 50, 50, 40, 50, 40, 50, 50, 40, 50, 40, 40, 40, 40, 50, 50, 50, 50, 50, 40,  0, 50, 60, 60],
    [40, 50, 40, 40, 40, 40, 40, 50, 40, 40, 40, 60, 40, 40, 40, 40, 50, 40, 50, 40, 40, 50, 50, 40, 40, 50, 40, 40, 50, 40, 40, 50, 40, 50, 50, 50,  0, 50, 60],
    [30, 40, 40, 40, 40, 50, 30, 50, 60, 60, 60, 20, 40, 50, 40, 50, 60, 50, 40, 30, 40, 40, 30, 30, 40, 40, 60, 40, 40, 60, 40, 30, 40, 60, 40, 40, 50,  0, 60],
    [30, 40, 40, 40, 40, 30, 40, 40, 40, 40, 50, 40, 30, 40, 30, 40, 40, 30, 30, 40, 40, 40, 40, 40, 40, 40, 40, 40, 50, 40, 40, 40, 40, 40, 40, 40, 40, 40,  0],
];

#[cfg(test)]
#[path = "../../tests/unit/simulate/fighter.rs"]
mod tests;
