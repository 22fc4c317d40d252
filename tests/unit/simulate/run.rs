use super::*;
use crate::foundation::core::Canvas;
use crate::foundation::error::BattleGifError;
use std::path::PathBuf;

fn cfg(name: &str, fighter: FighterKind) -> SimulateConfig {
    let dir = PathBuf::from("target").join("unit_simulate").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    SimulateConfig {
        fighter,
        canvas: Canvas::square(32),
        rounds: 3,
        seed: 5,
        output_dir: dir,
        ..SimulateConfig::default()
    }
}

fn read_all(dir: &std::path::Path) -> Vec<(String, String)> {
    let mut out: Vec<(String, String)> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| {
            let p = e.unwrap().path();
            let name = p.file_name().unwrap().to_string_lossy().into_owned();
            (name, std::fs::read_to_string(&p).unwrap())
        })
        .collect();
    out.sort();
    out
}

#[test]
fn writes_initial_grid_plus_one_document_per_round() {
    let cfg = cfg("rounds", FighterKind::Pokemon);
    let stats = run_simulation(&cfg).unwrap();
    assert_eq!(stats.documents, 4);

    let docs = read_all(&cfg.output_dir);
    let names: Vec<&str> = docs.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, vec!["00000.txt", "00001.txt", "00002.txt", "00003.txt"]);

    for (_, text) in &docs {
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 32);
        for line in lines {
            assert_eq!(line.chars().count(), 32);
            assert!(line.chars().all(|c| ('A'..='R').contains(&c)));
        }
    }
}

#[test]
fn rps_documents_use_three_letters() {
    let cfg = cfg("rps", FighterKind::RockPaperScissors);
    run_simulation(&cfg).unwrap();
    for (_, text) in read_all(&cfg.output_dir) {
        assert!(text.chars().all(|c| c == '\n' || ('A'..='C').contains(&c)));
    }
}

#[test]
fn same_seed_writes_same_documents() {
    let a = cfg("seed_a", FighterKind::Pokemon);
    let b = cfg("seed_b", FighterKind::Pokemon);
    let sa = run_simulation(&a).unwrap();
    let sb = run_simulation(&b).unwrap();
    assert_eq!(sa, sb);
    assert_eq!(read_all(&a.output_dir), read_all(&b.output_dir));
}

#[test]
fn invalid_config_writes_nothing() {
    let bad = SimulateConfig {
        rounds: 0,
        ..cfg("invalid", FighterKind::Pokemon)
    };
    assert!(run_simulation(&bad).is_err());
    assert!(!bad.output_dir.exists());
}

#[test]
fn street_fighter_documents_use_letters_a_to_g() {
    let cfg = cfg("street_fighter", FighterKind::StreetFighter);
    let stats = run_simulation(&cfg).unwrap();
    assert_eq!(stats.documents, 4);
    for (_, text) in read_all(&cfg.output_dir) {
        assert!(text.chars().all(|c| c == '\n' || ('A'..='g').contains(&c)));
    }
}

#[test]
fn output_dir_under_a_file_is_an_io_error() {
    let base = PathBuf::from("target").join("unit_simulate").join("blocked");
    let _ = std::fs::remove_dir_all(&base);
    std::fs::create_dir_all(&base).unwrap();
    let file = base.join("not_a_dir");
    std::fs::write(&file, "x").unwrap();

    let blocked = SimulateConfig {
        output_dir: file.join("battle"),
        ..cfg("blocked_cfg", FighterKind::Pokemon)
    };
    let err = run_simulation(&blocked).unwrap_err();
    assert!(matches!(err, BattleGifError::Other(_)), "{err:?}");
    assert!(format!("{err:#}").contains("create output directory"), "{err:#}");
}
