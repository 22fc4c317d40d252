use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        BattleGifError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(BattleGifError::input("x").to_string().contains("input error:"));
    assert!(BattleGifError::encode("x").to_string().contains("encode error:"));
    assert!(
        BattleGifError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn palette_error_names_character_and_position() {
    let err = BattleGifError::Palette {
        ch: 'z',
        index: 57,
        len: 18,
        line: 3,
        column: 7,
    };
    let msg = err.to_string();
    assert!(msg.starts_with("palette error:"));
    assert!(msg.contains("'z'"));
    assert!(msg.contains("line 3, column 7"));
    assert!(msg.contains("index 57"));
    assert!(msg.contains("18 colors"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = BattleGifError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
