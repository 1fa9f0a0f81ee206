use std::fs;
use std::path::Path;

use tempfile::tempdir;

use super::catalog::scroll_offset_for;
use super::model::Entry;
use super::scan::{is_playable_name, list_directory};
use super::*;
use crate::config::LibrarySettings;

fn settings_at(root: &Path) -> LibrarySettings {
    LibrarySettings {
        root: root.to_path_buf(),
        ..LibrarySettings::default()
    }
}

fn names(catalog: &Catalog) -> Vec<&str> {
    catalog.entries().iter().map(|e| e.name.as_str()).collect()
}

#[test]
fn is_playable_name_matches_extension_case_insensitive() {
    assert!(is_playable_name("a.minigsf", "minigsf"));
    assert!(is_playable_name("a.MiniGSF", "minigsf"));
    assert!(!is_playable_name("a.gsflib", "minigsf"));
    assert!(!is_playable_name("a.minigsf.txt", "minigsf"));
    assert!(!is_playable_name("minigsf", "minigsf"));
}

#[test]
fn list_directory_keeps_dirs_and_playable_files_sorted_dirs_first() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("b.minigsf"), b"x").unwrap();
    fs::write(dir.path().join("A.MINIGSF"), b"x").unwrap();
    fs::write(dir.path().join("game.gsflib"), b"x").unwrap();
    fs::write(dir.path().join("notes.txt"), b"x").unwrap();
    fs::create_dir(dir.path().join("zeta")).unwrap();
    fs::create_dir(dir.path().join("Alpha")).unwrap();

    let entries = list_directory(dir.path(), &settings_at(dir.path()));
    let got: Vec<(&str, bool)> = entries.iter().map(|e| (e.name.as_str(), e.is_dir)).collect();
    assert_eq!(
        got,
        vec![
            ("Alpha", true),
            ("zeta", true),
            ("A.MINIGSF", false),
            ("b.minigsf", false),
        ]
    );
}

#[test]
fn list_directory_does_not_recurse() {
    let dir = tempdir().unwrap();
    let sub = dir.path().join("sub");
    fs::create_dir(&sub).unwrap();
    fs::write(sub.join("deep.minigsf"), b"x").unwrap();

    let entries = list_directory(dir.path(), &settings_at(dir.path()));
    assert_eq!(entries, vec![Entry::dir("sub")]);
}

#[test]
fn list_directory_respects_include_hidden_false() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(".hidden.minigsf"), b"x").unwrap();
    fs::write(dir.path().join("shown.minigsf"), b"x").unwrap();

    let settings = LibrarySettings {
        include_hidden: false,
        ..settings_at(dir.path())
    };
    let entries = list_directory(dir.path(), &settings);
    assert_eq!(entries, vec![Entry::file("shown.minigsf")]);
}

#[test]
fn unreadable_directory_yields_empty_catalog() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("does-not-exist");
    let catalog = Catalog::open(&settings_at(&missing));
    assert!(catalog.is_empty());
    assert_eq!(catalog.selected(), 0);
    assert!(catalog.entries().is_empty());
}

#[test]
fn move_selection_clamps_single_steps_and_page_jumps() {
    let entries = (0..25).map(|i| Entry::file(format!("{i:02}.minigsf"))).collect();
    let mut catalog = Catalog::with_entries(&LibrarySettings::default(), entries);

    catalog.move_selection(-1);
    assert_eq!(catalog.selected(), 0);
    catalog.move_selection(10);
    assert_eq!(catalog.selected(), 10);
    catalog.move_selection(10);
    catalog.move_selection(10);
    assert_eq!(catalog.selected(), 24);
    catalog.move_selection(1);
    assert_eq!(catalog.selected(), 24);
    catalog.move_selection(-10);
    assert_eq!(catalog.selected(), 14);
}

#[test]
fn move_selection_on_empty_catalog_stays_at_zero() {
    let mut catalog = Catalog::with_entries(&LibrarySettings::default(), Vec::new());
    catalog.move_selection(10);
    assert_eq!(catalog.selected(), 0);
    catalog.move_selection(-1);
    assert_eq!(catalog.selected(), 0);
}

#[test]
fn find_adjacent_playable_skips_directories_and_wraps() {
    let catalog = Catalog::with_entries(
        &LibrarySettings::default(),
        vec![
            Entry::dir("d1"),
            Entry::dir("d2"),
            Entry::file("a.minigsf"),
            Entry::file("b.minigsf"),
        ],
    );

    assert_eq!(catalog.find_adjacent_playable(0, true), 2);
    assert_eq!(catalog.find_adjacent_playable(2, true), 3);
    assert_eq!(catalog.find_adjacent_playable(3, true), 2);
    assert_eq!(catalog.find_adjacent_playable(2, false), 3);
    assert_eq!(catalog.find_adjacent_playable(3, false), 2);
}

#[test]
fn find_adjacent_playable_never_returns_a_directory() {
    let catalog = Catalog::with_entries(
        &LibrarySettings::default(),
        vec![
            Entry::dir("a"),
            Entry::dir("b"),
            Entry::file("x.minigsf"),
            Entry::dir("c"),
            Entry::file("y.minigsf"),
        ],
    );
    for from in 0..catalog.entries().len() {
        for forward in [true, false] {
            let idx = catalog.find_adjacent_playable(from, forward);
            assert!(catalog.is_playable(idx), "from {from} forward {forward} gave {idx}");
        }
    }
}

#[test]
fn find_adjacent_playable_with_single_track_returns_it() {
    let catalog = Catalog::with_entries(
        &LibrarySettings::default(),
        vec![Entry::dir("d"), Entry::file("only.minigsf")],
    );
    assert_eq!(catalog.find_adjacent_playable(1, true), 1);
    assert_eq!(catalog.find_adjacent_playable(1, false), 1);
    assert_eq!(catalog.find_adjacent_playable(0, true), 1);
}

#[test]
fn find_adjacent_playable_without_tracks_returns_origin() {
    let catalog = Catalog::with_entries(
        &LibrarySettings::default(),
        vec![Entry::dir("a"), Entry::dir("b")],
    );
    assert_eq!(catalog.find_adjacent_playable(1, true), 1);

    let empty = Catalog::with_entries(&LibrarySettings::default(), Vec::new());
    assert_eq!(empty.find_adjacent_playable(0, false), 0);
}

#[test]
fn enter_descends_into_directories_and_reports_files() {
    let dir = tempdir().unwrap();
    let sub = dir.path().join("Golden Sun");
    fs::create_dir(&sub).unwrap();
    fs::write(sub.join("01.minigsf"), b"x").unwrap();
    fs::write(sub.join("02.minigsf"), b"x").unwrap();

    let mut catalog = Catalog::open(&settings_at(dir.path()));
    assert_eq!(names(&catalog), vec!["Golden Sun"]);

    assert_eq!(catalog.enter(0), EnterOutcome::Entered);
    assert_eq!(catalog.current_dir(), sub.as_path());
    assert_eq!(names(&catalog), vec!["01.minigsf", "02.minigsf"]);
    assert_eq!(catalog.selected(), 0);

    catalog.move_selection(1);
    assert_eq!(catalog.enter(1), EnterOutcome::Play(sub.join("02.minigsf")));
    // Playing does not move the listing.
    assert_eq!(catalog.current_dir(), sub.as_path());

    assert_eq!(catalog.enter(7), EnterOutcome::Nothing);
}

#[test]
fn go_up_stops_at_root() {
    let dir = tempdir().unwrap();
    let sub = dir.path().join("a").join("b");
    fs::create_dir_all(&sub).unwrap();

    let mut catalog = Catalog::open(&settings_at(dir.path()));
    assert!(!catalog.go_up());
    assert_eq!(catalog.current_dir(), dir.path());

    catalog.enter(0);
    catalog.enter(0);
    assert_eq!(catalog.current_dir(), sub.as_path());

    assert!(catalog.go_up());
    assert_eq!(catalog.current_dir(), dir.path().join("a").as_path());
    assert!(catalog.go_up());
    assert_eq!(catalog.current_dir(), dir.path());
    assert!(!catalog.go_up());
}

#[test]
fn scroll_offset_centers_selection_and_pins_ends() {
    // 20 entries, 8 visible rows (half = 4).
    assert_eq!(scroll_offset_for(0, 20, 8), 0);
    assert_eq!(scroll_offset_for(4, 20, 8), 0);
    assert_eq!(scroll_offset_for(5, 20, 8), 1);
    assert_eq!(scroll_offset_for(10, 20, 8), 6);
    assert_eq!(scroll_offset_for(16, 20, 8), 12);
    assert_eq!(scroll_offset_for(19, 20, 8), 12);
    // Short lists never scroll.
    assert_eq!(scroll_offset_for(2, 3, 8), 0);
    // Degenerate capacity still yields a valid offset.
    assert_eq!(scroll_offset_for(3, 5, 0), 3);
}

#[test]
fn update_scroll_caches_offset_on_catalog() {
    let entries = (0..30).map(|i| Entry::file(format!("{i:02}.minigsf"))).collect();
    let mut catalog = Catalog::with_entries(&LibrarySettings::default(), entries);
    catalog.select(15);
    assert_eq!(catalog.update_scroll(10), 10);
    assert_eq!(catalog.scroll_offset(), 10);
}
