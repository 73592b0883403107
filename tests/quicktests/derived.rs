use unbalanced_bst::{ElementEquality, Rotation, Tree};

use quickcheck_macros::quickcheck;

#[quickcheck]
fn mirror_of_mirror_is_the_original(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    match tree.mirror().and_then(|m| m.mirror()) {
        Ok(twice) => tree.compare_structure(&twice) && tree.equals(&twice),
        Err(e) => tree.is_empty() && e.is_underflow(),
    }
}

#[quickcheck]
fn mirror_is_a_mirror(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    match tree.mirror() {
        Ok(mirror) => tree.is_mirror(&mirror) && mirror.is_mirror(&tree),
        Err(e) => tree.is_empty() && e.is_underflow(),
    }
}

#[quickcheck]
fn copy_matches_source(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    match tree.copy() {
        Ok(copy) => {
            tree.compare_structure(&copy)
                && tree.equals(&copy)
                && copy.node_count() == tree.node_count()
        }
        Err(e) => tree.is_empty() && e.is_underflow(),
    }
}

#[quickcheck]
fn value_equality_matches_rebuilt_tree(xs: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    let rebuilt: Tree<_> = xs.iter().copied().collect();
    tree.set_equality(ElementEquality::Value);

    tree.equals(&rebuilt)
}

#[quickcheck]
fn rotations_keep_elements(xs: Vec<i8>, targets: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    let before: Vec<i8> = tree.in_order().into_iter().copied().collect();
    let count = tree.node_count();

    for (i, x) in targets.iter().enumerate() {
        let rotation = if i % 2 == 0 {
            tree.rotate_right(x)
        } else {
            tree.rotate_left(x)
        };
        if rotation == Rotation::NotFound && tree.contains(x) {
            return false;
        }
    }

    let after: Vec<i8> = tree.in_order().into_iter().copied().collect();
    before == after && count == tree.node_count()
}

#[quickcheck]
fn unsuccessful_rotation_changes_nothing(xs: Vec<i8>, x: i8) -> bool {
    let mut tree: Tree<_> = xs.into_iter().collect();
    let Ok(before) = tree.copy() else {
        return tree.rotate_right(&x) == Rotation::NotFound;
    };

    match tree.rotate_right(&x) {
        Rotation::Rotated => tree.contains(&x),
        Rotation::NoPivot | Rotation::NotFound => {
            tree.compare_structure(&before) && tree.equals(&before)
        }
    }
}

#[quickcheck]
fn levels_cover_every_node(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    match tree.levels() {
        Ok(levels) => {
            levels.len() as isize == tree.height() + 1
                && levels.iter().map(Vec::len).sum::<usize>() == tree.node_count()
        }
        Err(e) => tree.is_empty() && e.is_underflow(),
    }
}
