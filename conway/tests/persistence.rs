mod common;

use std::fs;

use common::scratch_path;
use conway::{Grid, GridStore, LifeError, GRID_HEIGHT, GRID_WIDTH};
use proptest::prelude::*;

prop_compose! {
    fn arb_grid()(cells in prop::collection::vec(any::<bool>(), GRID_WIDTH * GRID_HEIGHT)) -> Grid {
        let mut grid = Grid::new();
        for (i, alive) in cells.into_iter().enumerate() {
            grid.set(i % GRID_WIDTH, i / GRID_WIDTH, alive);
        }
        grid
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_encode_decode_preserves_every_cell(grid in arb_grid()) {
        let decoded = Grid::decode(&grid.encode().unwrap()).unwrap();
        prop_assert_eq!(decoded, grid);
    }
}

#[test]
fn test_extreme_grids_survive_store() {
    let path = scratch_path("extremes");
    let store = GridStore::new(&path);

    let mut full = Grid::new();
    for y in 0..GRID_HEIGHT {
        for x in 0..GRID_WIDTH {
            full.set(x, y, true);
        }
    }
    let mut random = Grid::new();
    random.randomize();

    for grid in [Grid::new(), full, random] {
        store.save(&grid).expect("save");
        assert_eq!(store.load().expect("load"), grid);
    }
    fs::remove_file(&path).ok();
}

#[test]
fn test_save_replaces_previous_file() {
    let path = scratch_path("replace");
    let store = GridStore::new(&path);

    store.save(&Grid::from_cells([(1, 1)])).unwrap();
    store.save(&Grid::from_cells([(2, 2)])).unwrap();
    assert_eq!(store.load().unwrap(), Grid::from_cells([(2, 2)]));

    let mut staging = path.clone().into_os_string();
    staging.push(".tmp");
    assert!(!std::path::Path::new(&staging).exists(), "staging file left behind");
    fs::remove_file(&path).ok();
}

#[test]
fn test_load_missing_file_is_io_failure() {
    let store = GridStore::new(scratch_path("missing"));
    let err = store.load().unwrap_err();
    assert!(err.is_io(), "{err}");
}

#[test]
fn test_load_garbage_is_corrupt() {
    let path = scratch_path("garbage");
    fs::write(&path, b"\x00\x01 definitely not a grid").unwrap();
    let err = GridStore::new(&path).load().unwrap_err();
    assert!(matches!(err, LifeError::CorruptData(_)), "{err}");
    fs::remove_file(&path).ok();
}

#[test]
fn test_load_wrong_dimensions_is_corrupt() {
    let path = scratch_path("small");
    let small = serde_json::to_vec(&vec![vec![true; 20]; 20]).unwrap();
    fs::write(&path, small).unwrap();
    let err = GridStore::new(&path).load().unwrap_err();
    assert!(matches!(err, LifeError::CorruptData(_)), "{err}");
    fs::remove_file(&path).ok();
}

#[test]
fn test_save_into_missing_directory_fails() {
    let dir = scratch_path("no-such-dir");
    let store = GridStore::new(dir.join("gamestate.dat"));
    let err = store.save(&Grid::new()).unwrap_err();
    assert!(err.is_io(), "{err}");
    assert!(!dir.exists());
}
