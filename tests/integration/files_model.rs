use torview::ordering::{OrderingPolicy, SortKey, SortOrder};
use torview::tree::Address;
use torview::view::FilesModel;

#[test]
fn rows_expose_display_order_over_insertion_order() {
    let mut model = FilesModel::new(OrderingPolicy::default());
    model
        .set_files([
            ("Season 1/e02.mkv", 700u64),
            ("Season 1/e01.mkv", 650),
            ("notes.txt", 4),
            ("Artwork/cover.png", 90),
        ])
        .unwrap();

    let top: Vec<&str> = model
        .rows(Address::Root)
        .into_iter()
        .map(|a| model.tree().name(a).unwrap())
        .collect();
    assert_eq!(top, vec!["Artwork", "Season 1", "notes.txt"]);

    let season = model.rows(Address::Root)[1];
    let episodes: Vec<&str> = model
        .rows(season)
        .into_iter()
        .map(|a| model.tree().name(a).unwrap())
        .collect();
    assert_eq!(episodes, vec!["e01.mkv", "e02.mkv"]);
    assert_eq!(model.tree().size(season), Some(1_350));
}

#[test]
fn switching_policy_reorders_without_rebuilding() {
    let mut model = FilesModel::new(OrderingPolicy::default());
    model
        .set_files([("b.bin", 1u64), ("a.bin", 100), ("c.bin", 10)])
        .unwrap();
    let before = model.tree().root().children().to_vec();

    model.set_policy(OrderingPolicy::new(SortKey::Size, SortOrder::Descending));
    let names: Vec<String> = model.entries().into_iter().map(|e| e.name).collect();
    assert_eq!(names, vec!["a.bin", "c.bin", "b.bin"]);
    assert_eq!(model.tree().root().children(), before.as_slice());
}

#[test]
fn new_torrent_replaces_previous_tree() {
    let mut model = FilesModel::default();
    model.set_files([("first/one", 1u64)]).unwrap();
    model.set_files([("second/two", 2u64), ("second/three", 3)]).unwrap();

    assert!(model.tree().find("first").is_none());
    assert_eq!(model.tree().total_size(), 5);
    assert_eq!(model.tree().file_count(), 2);
    assert!(model.single_top_level());
}

#[test]
fn rejected_file_list_leaves_previous_tree() {
    let mut model = FilesModel::default();
    model.set_files([("keep/me", 42u64)]).unwrap();
    assert!(model.set_files([("fine", 1u64), ("trailing/", 1)]).is_err());
    assert_eq!(model.tree().total_size(), 42);
    assert!(model.tree().find("fine").is_none());
}
