use torview::ordering::{OrderingPolicy, SortKey, SortOrder};
use torview::tree::{NodeId, PathTree};

fn sorted_names(tree: &PathTree, policy: OrderingPolicy, parent: NodeId) -> Vec<String> {
    policy
        .sorted_children(tree, parent)
        .into_iter()
        .map(|id| tree.node(id).name().to_string())
        .collect()
}

#[test]
fn directory_ranks_before_file_regardless_of_direction() {
    let tree = PathTree::from_files([("docs/manual.pdf", 10u64), ("readme.txt", 1)]).unwrap();
    let docs = tree.find("docs").unwrap();
    let readme = tree.find("readme.txt").unwrap();

    for order in [SortOrder::Ascending, SortOrder::Descending] {
        let policy = OrderingPolicy::new(SortKey::Name, order);
        assert!(policy.precedes(&tree, docs, readme), "{order:?}");
        assert!(!policy.precedes(&tree, readme, docs), "{order:?}");
    }
}

#[test]
fn directories_first_beats_alphabetical_order() {
    let tree = PathTree::from_files([
        ("movie.mkv", 1_000_000u64),
        ("extras/poster.jpg", 2_000),
        ("extras/trailer.mp4", 50_000),
        ("a_file.txt", 1),
    ])
    .unwrap();

    assert_eq!(tree.total_size(), 1_052_001);
    assert_eq!(tree.node(tree.find("extras").unwrap()).size(), 52_000);

    let ascending = OrderingPolicy::new(SortKey::Name, SortOrder::Ascending);
    assert_eq!(
        sorted_names(&tree, ascending, NodeId::ROOT),
        vec!["extras", "a_file.txt", "movie.mkv"]
    );

    let descending = OrderingPolicy::new(SortKey::Name, SortOrder::Descending);
    assert_eq!(
        sorted_names(&tree, descending, NodeId::ROOT),
        vec!["extras", "movie.mkv", "a_file.txt"]
    );
}

#[test]
fn nested_directories_sort_among_themselves() {
    let tree = PathTree::from_files([
        ("root/Zeta/f", 1u64),
        ("root/alpha/f", 5),
        ("root/beta.txt", 3),
        ("root/Beta/f", 2),
    ])
    .unwrap();
    let root = tree.find("root").unwrap();

    let by_name = OrderingPolicy::default();
    assert_eq!(
        sorted_names(&tree, by_name, root),
        vec!["alpha", "Beta", "Zeta", "beta.txt"]
    );

    let by_size = OrderingPolicy::new(SortKey::Size, SortOrder::Descending);
    assert_eq!(
        sorted_names(&tree, by_size, root),
        vec!["alpha", "Beta", "Zeta", "beta.txt"]
    );

    let by_size_asc = OrderingPolicy::new(SortKey::Size, SortOrder::Ascending);
    assert_eq!(
        sorted_names(&tree, by_size_asc, root),
        vec!["Zeta", "Beta", "alpha", "beta.txt"]
    );
}
