use bintree::search::Tree;

use quickcheck_macros::quickcheck;

/// Builds a tree by inserting `xs` front to back.
fn build(xs: &[i16]) -> Tree<i16> {
    let mut tree = Tree::new();
    for x in xs {
        tree.insert(*x);
    }

    tree
}

/// Counts the nodes by walking the tree instead of trusting `len`.
fn expected_len(tree: &Tree<i16>) -> usize {
    tree.into_iter().count()
}

#[quickcheck]
fn inorder_is_sorted(xs: Vec<i16>) -> bool {
    let tree = build(&xs);
    let values: Vec<_> = tree.inorder().collect();

    values.windows(2).all(|pair| pair[0] <= pair[1])
}

#[quickcheck]
fn inorder_is_a_permutation(xs: Vec<i16>) -> bool {
    let tree = build(&xs);
    let mut expected = xs;
    expected.sort_unstable();

    tree.inorder().copied().eq(expected) && tree.len() == expected_len(&tree)
}

#[quickcheck]
fn single_value(x: i16) -> bool {
    let tree = build(&[x]);

    tree.inorder().copied().collect::<Vec<_>>() == [x]
}

#[quickcheck]
fn with_root_matches_insert_into_empty(root: i16, xs: Vec<i16>) -> bool {
    let mut from_root = Tree::with_root(root);
    let mut from_empty = Tree::new();
    from_empty.insert(root);
    for x in &xs {
        from_root.insert(*x);
        from_empty.insert(*x);
    }

    from_root.inorder().eq(from_empty.inorder()) && from_root.depth() == from_empty.depth()
}

#[quickcheck]
fn traversal_is_repeatable(xs: Vec<i16>) -> bool {
    let tree = build(&xs);

    tree.inorder().eq(tree.inorder())
}

#[quickcheck]
fn sorted_input_is_degenerate(xs: Vec<i16>) -> bool {
    let mut xs = xs;
    xs.sort_unstable();
    let tree = build(&xs);

    tree.depth() == xs.len()
}
