use avl::Tree;

use std::collections::BTreeSet;

/// The proven worst case for an AVL tree with `n` nodes, with the constants rounded up rather
/// than to the nearest hundredth: Fibonacci trees of height 13 and up sit right on the line.
fn height_bound(n: usize) -> f64 {
    1.4405 * ((n + 2) as f64).log2() - 0.3277
}

quickcheck::quickcheck! {
    fn valid_after_every_insert(xs: Vec<i16>) -> bool {
        let mut tree = Tree::new();
        xs.into_iter().all(|x| {
            tree.insert(x).unwrap();
            tree.is_valid_avl() && tree.is_valid_bst()
        })
    }

    fn in_order_is_sorted_and_deduplicated(xs: Vec<i16>) -> bool {
        let tree = Tree::try_from_keys(xs.iter().copied()).unwrap();
        let expected: BTreeSet<_> = xs.into_iter().collect();

        tree.in_order().eq(expected.iter())
    }

    fn height_stays_logarithmic(xs: Vec<i32>) -> bool {
        let tree = Tree::try_from_keys(xs).unwrap();

        tree.height() as f64 <= height_bound(tree.count_nodes())
    }

    fn sorted_input_stays_logarithmic(n: u16) -> bool {
        let n = n as usize % 2_000;
        let ascending = Tree::try_from_keys(0..n).unwrap();
        let descending = Tree::try_from_keys((0..n).rev()).unwrap();

        ascending.is_valid_avl()
            && descending.is_valid_avl()
            && ascending.height() as f64 <= height_bound(n)
            && descending.height() as f64 <= height_bound(n)
    }

    fn duplicates_change_nothing(xs: Vec<i8>, again: Vec<i8>) -> bool {
        let mut tree = Tree::try_from_keys(xs.iter().copied()).unwrap();
        let before = tree.clone();
        let present: Vec<_> = again.into_iter().filter(|x| xs.contains(x)).collect();

        present.into_iter().all(|x| tree.insert(x) == Ok(false)) && tree == before
    }

    fn walks_agree(xs: Vec<i16>) -> bool {
        let tree = Tree::try_from_keys(xs).unwrap();
        let n = tree.count_nodes();

        let mut pre: Vec<_> = tree.pre_order().collect();
        let mut post: Vec<_> = tree.post_order().collect();
        // The root comes first in one and last in the other.
        let roots_match = pre.first() == post.last();
        pre.sort();
        post.sort();

        roots_match
            && pre.len() == n
            && tree.in_order().eq(pre.iter().copied())
            && tree.in_order().eq(post.iter().copied())
    }

    fn min_max_match_in_order(xs: Vec<i16>) -> bool {
        let tree = Tree::try_from_keys(xs).unwrap();

        tree.min() == tree.in_order().next() && tree.max() == tree.in_order().last()
    }

    fn sum_matches_distinct_keys(xs: Vec<i16>) -> bool {
        let keys: Vec<i64> = xs.into_iter().map(i64::from).collect();
        let tree = Tree::try_from_keys(keys.iter().copied()).unwrap();
        let distinct: BTreeSet<_> = keys.into_iter().collect();

        tree.sum_keys::<i64>() == distinct.iter().sum::<i64>()
    }

    fn leaves_are_at_most_half_plus_one(xs: Vec<i16>) -> bool {
        let tree = Tree::try_from_keys(xs).unwrap();
        let (nodes, leaves) = (tree.count_nodes(), tree.count_leaves());

        // A binary tree with `l` leaves has at least `l - 1` internal nodes.
        (nodes == 0 && leaves == 0) || (leaves >= 1 && 2 * leaves <= nodes + 1)
    }

    fn clear_empties(xs: Vec<i16>) -> bool {
        let mut tree = Tree::try_from_keys(xs).unwrap();
        tree.clear();

        tree.is_empty() && tree.height() == 0 && tree.count_nodes() == 0
    }
}
