use country_explorer::favorites::{FAVORITES_KEY, Favorites};
use country_explorer::storage::{JsonFileStore, KeyValueStore, MemoryStore};
use tempfile::tempdir;

#[test]
fn toggle_twice_restores_status_and_persisted_set() {
    let mut store = MemoryStore::default();
    let mut favs = Favorites::default();
    favs.toggle("Chile", &mut store).unwrap();
    let before_set = store.get(FAVORITES_KEY);
    let before = favs.is_favorite("Peru");

    assert!(favs.toggle("Peru", &mut store).unwrap());
    assert!(!favs.toggle("Peru", &mut store).unwrap());

    assert_eq!(favs.is_favorite("Peru"), before);
    assert_eq!(store.get(FAVORITES_KEY), before_set);
}

#[test]
fn persisted_as_json_array_and_reloaded() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");

    let mut store = JsonFileStore::open(&path).unwrap();
    let mut favs = Favorites::load(&store);
    favs.toggle("Peru", &mut store).unwrap();
    favs.toggle("Japan", &mut store).unwrap();

    let raw = store.get(FAVORITES_KEY).unwrap();
    let decoded: Vec<String> = serde_json::from_str(&raw).unwrap();
    assert_eq!(decoded, vec!["Peru", "Japan"]);

    let reopened = JsonFileStore::open(&path).unwrap();
    let reloaded = Favorites::load(&reopened);
    assert_eq!(reloaded, favs);
    assert!(reloaded.is_favorite("Japan"));
}

#[test]
fn memory_and_file_agree_after_every_toggle() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let mut store = JsonFileStore::open(&path).unwrap();
    let mut favs = Favorites::default();
    for name in ["A", "B", "A", "C", "B"] {
        favs.toggle(name, &mut store).unwrap();
        let on_disk = Favorites::load(&JsonFileStore::open(&path).unwrap());
        assert_eq!(on_disk, favs);
    }
    assert_eq!(favs.names(), ["C"]);
}
