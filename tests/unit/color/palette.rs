use super::*;

#[test]
fn pokemon_palette_order_and_bounds() {
    let p = Palette::builtin(PaletteKind::Pokemon);
    assert_eq!(p.len(), 18);
    assert_eq!(p.get(0), Some(Rgb8::new(168, 168, 120)));
    assert_eq!(p.label(0), Some("Normal"));
    assert_eq!(p.get(17), Some(Rgb8::new(240, 182, 188)));
    assert_eq!(p.label(17), Some("Fairy"));
    assert_eq!(p.get(18), None);
}

#[test]
fn rock_paper_scissors_palette_order() {
    let p = Palette::from(PaletteKind::RockPaperScissors);
    assert_eq!(p.kind(), PaletteKind::RockPaperScissors);
    let colors: Vec<_> = p.colors().collect();
    assert_eq!(
        colors,
        vec![
            Rgb8::new(128, 0, 0),
            Rgb8::new(0, 0, 128),
            Rgb8::new(0, 128, 0)
        ]
    );
}

#[test]
fn palette_kind_uses_kebab_case_names() {
    let kind: PaletteKind = serde_json::from_str("\"rock-paper-scissors\"").unwrap();
    assert_eq!(kind, PaletteKind::RockPaperScissors);
    assert_eq!(PaletteKind::default(), PaletteKind::Pokemon);
}

#[test]
fn street_fighter_palette_spans_a_to_g() {
    let kind: PaletteKind = serde_json::from_str("\"street-fighter\"").unwrap();
    let p = Palette::builtin(kind);
    assert_eq!(p.len(), 39);
    assert_eq!(p.get(0), Some(Rgb8::new(100, 122, 4)));
    assert_eq!(p.label(0), Some("Seth"));
    assert_eq!(p.get(38), Some(Rgb8::new(136, 51, 0)));
    assert_eq!(p.label(38), Some("Dan"));
    assert_eq!(p.get(39), None);
}
