use proptest::prelude::*;
use trampwick::model::{Link, Node, Tree};
use trampwick::traversal::{
    Strategy as Walk, collect_inorder, collect_inorder_bounced, direct, drive, traverse,
};

/// Binary search tree obtained by inserting `keys` in the given order,
/// duplicates ignored. Every tree shape can come out of some key order.
fn search_tree(keys: &[u32]) -> Link<u32> {
    let (&root, rest) = keys.split_first()?;
    let left: Vec<u32> = rest.iter().copied().filter(|&k| k < root).collect();
    let right: Vec<u32> = rest.iter().copied().filter(|&k| k > root).collect();
    Some(Node::boxed(root, search_tree(&left), search_tree(&right)))
}

fn arb_keys() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(0u32..1_000, 0..200)
}

fn arb_tree() -> impl Strategy<Value = Tree<u32>> {
    arb_keys().prop_map(|keys| Tree::from_link(search_tree(&keys)))
}

proptest! {
    #[test]
    fn test_drive_yields_sorted_keys(keys in arb_keys()) {
        let tree = Tree::from_link(search_tree(&keys));
        let mut expected = keys.clone();
        expected.sort_unstable();
        expected.dedup();

        let values: Vec<u32> = drive(tree.root()).copied().collect();
        prop_assert_eq!(values, expected);
    }

    #[test]
    fn test_walks_agree_with_direct(tree in arb_tree()) {
        let expected = direct(tree.root());
        prop_assert_eq!(expected.len(), tree.len());

        let lazy: Vec<u32> = drive(tree.root()).copied().collect();
        prop_assert_eq!(&lazy, &expected);
        prop_assert_eq!(&collect_inorder(tree.root()), &expected);
        prop_assert_eq!(&collect_inorder_bounced(tree.root()), &expected);

        for walk in Walk::ALL {
            prop_assert_eq!(&traverse(walk, &tree), &expected, "{}", walk);
        }
    }

    #[test]
    fn test_drive_is_repeatable(tree in arb_tree()) {
        let mut first = drive(tree.root());
        let first_values: Vec<u32> = first.by_ref().copied().collect();
        let second_values: Vec<u32> = drive(tree.root()).copied().collect();

        prop_assert_eq!(first_values, second_values);
        prop_assert_eq!(first.steps(), 3 * tree.len() + 1);
    }

    #[test]
    fn test_suspend_anywhere_resumes_the_rest(tree in arb_tree(), cut in 0usize..200) {
        let expected: Vec<u32> = drive(tree.root()).copied().collect();
        let cut = cut.min(expected.len());

        let mut walk = drive(tree.root());
        let mut values: Vec<u32> = walk.by_ref().take(cut).copied().collect();
        values.extend(trampwick::Inorder::from_step(walk.suspend()).copied());
        prop_assert_eq!(values, expected);
    }
}
