use proptest::collection::{btree_map, vec};
use proptest::prelude::*;
use torview::tree::PathTree;

fn segment() -> impl Strategy<Value = String> {
    "[a-d]{1,3}"
}

/// Distinct full paths mapped to sizes. A path may be a prefix of another.
fn distinct_files() -> impl Strategy<Value = Vec<(String, u64)>> {
    btree_map(vec(segment(), 1..4).prop_map(|s| s.join("/")), 0u64..1_000_000, 1..40)
        .prop_map(|files| files.into_iter().collect())
}

fn all_sizes(tree: &PathTree) -> Vec<u64> {
    tree.iter().map(|(_, n)| n.size()).collect()
}

proptest! {
    #[test]
    fn root_size_equals_sum_of_leaf_files(files in distinct_files()) {
        // Only paths that stay leaves contribute to the total.
        let tree = PathTree::from_files(files.iter().map(|(p, s)| (p.as_str(), *s))).unwrap();
        let expected: u64 = files
            .iter()
            .filter(|(path, _)| {
                let prefix = format!("{}/", path);
                !files.iter().any(|(other, _)| other.starts_with(&prefix))
            })
            .map(|(_, size)| *size)
            .sum();
        prop_assert_eq!(tree.total_size(), expected);
    }

    #[test]
    fn aggregation_is_idempotent(files in distinct_files()) {
        let mut tree = PathTree::from_files(files.iter().map(|(p, s)| (p.as_str(), *s))).unwrap();
        let first = all_sizes(&tree);
        tree.aggregate_sizes();
        prop_assert_eq!(first, all_sizes(&tree));
    }

    #[test]
    fn every_directory_sums_its_children(files in distinct_files()) {
        let tree = PathTree::from_files(files.iter().map(|(p, s)| (p.as_str(), *s))).unwrap();
        for (_, node) in tree.iter() {
            if !node.is_leaf() {
                let sum: u64 = node.children().iter().map(|c| tree.node(*c).size()).sum();
                prop_assert_eq!(node.size(), sum);
            }
        }
    }
}

proptest! {
    #[test]
    fn root_size_equals_sum_for_flat_distinct_files(
        files in btree_map("[a-z]{1,8}\\.[a-z]{3}", 0u64..1_000_000, 1..50)
    ) {
        let tree = PathTree::from_files(files.iter().map(|(p, s)| (p.as_str(), *s))).unwrap();
        prop_assert_eq!(tree.total_size(), files.values().sum::<u64>());
        prop_assert_eq!(tree.file_count(), files.len());
    }
}
