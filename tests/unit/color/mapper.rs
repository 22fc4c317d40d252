use super::*;
use crate::color::palette::PaletteKind;

fn pokemon() -> Palette {
    Palette::builtin(PaletteKind::Pokemon)
}

#[test]
fn letters_in_range_map_to_palette_entries() {
    let p = pokemon();
    for i in 0..p.len() {
        let ch = char::from_u32(INDEX_BASE + i as u32).unwrap();
        assert_eq!(map_char(ch, &p).unwrap(), p.get(i));
    }
}

#[test]
fn characters_below_a_are_skipped() {
    let p = pokemon();
    for ch in [' ', '0', '9', '@', '\r', '\t', '!'] {
        assert_eq!(map_char(ch, &p).unwrap(), None);
    }

    let seq = map_document(&["A B", "@C\r"], &p).unwrap();
    assert_eq!(
        seq.as_slice(),
        &[
            p.get(0).unwrap(),
            p.get(1).unwrap(),
            p.get(2).unwrap()
        ]
    );
}

#[test]
fn out_of_range_character_is_an_error_not_a_skip() {
    let p = Palette::builtin(PaletteKind::RockPaperScissors);
    assert!(map_char('C', &p).unwrap().is_some());

    let err = map_document(&["ABC", "AD"], &p).unwrap_err();
    match err {
        BattleGifError::Palette {
            ch,
            index,
            len,
            line,
            column,
        } => {
            assert_eq!(ch, 'D');
            assert_eq!(index, 3);
            assert_eq!(len, 3);
            assert_eq!(line, 2);
            assert_eq!(column, 2);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn lowercase_letters_overflow_pokemon_palette() {
    // 'a' is 97, index 32.
    assert!(matches!(
        map_char('a', &pokemon()),
        Err(BattleGifError::Palette { index: 32, .. })
    ));
}

#[test]
fn lines_are_concatenated_in_order() {
    let p = pokemon();
    let seq = map_document(&["AB".to_string(), String::new(), "R".to_string()], &p).unwrap();
    assert_eq!(seq.len(), 3);
    assert_eq!(seq.as_slice()[2], p.get(17).unwrap());
    assert!(map_document::<&str>(&[], &p).unwrap().is_empty());
}
