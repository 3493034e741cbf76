use set_algebra::Set;

fn sorted(s: &Set<i32>) -> Vec<i32> {
    let mut v = s.values();
    v.sort();
    v
}

#[test]
fn test_difference() {
    let cases = [
        (Set::new(), Set::from([1, 2, 3]), Set::new()),
        (
            Set::from([4, 7, 8, 23, 138]),
            Set::from([6, 8, 54, 65, 102, 138]),
            Set::from([4, 7, 23]),
        ),
        (Set::from([1, 2]), Set::new(), Set::from([1, 2])),
    ];
    for (a, b, want) in cases {
        let got = a.difference(&b);
        assert!(got.equal(&want), "{:?} - {:?} gave {:?}", a, b, got);
    }
}

#[test]
fn test_intersection() {
    let r = Set::from([4, 7, 8, 23, 138]);
    let s = Set::from([9, 21, 22, 23, 87, 132, 138]);
    let got = r.intersection(&s);
    assert_eq!(got.size(), 2);
    assert_eq!(sorted(&got), vec![23, 138]);
    assert!(r.intersection(&Set::new()).is_empty());
}

#[test]
fn test_union() {
    let cases = [
        (Set::from([1, 2, 3, 9]), Set::from([4, 5]), Set::from([1, 2, 3, 4, 5, 9])),
        (Set::from([1, 2, 3]), Set::from([1, 2, 3]), Set::from([1, 2, 3])),
        (Set::new(), Set::new(), Set::new()),
        (Set::from([25]), Set::new(), Set::from([25])),
        (Set::new(), Set::from([25, 8, 2, 14]), Set::from([25, 8, 2, 14])),
    ];
    for (a, b, want) in cases {
        let got = a.union(&b);
        assert!(got.equal(&want), "{:?} | {:?} gave {:?}", a, b, got);
    }
}

#[test]
fn test_symmetric_difference() {
    let cases = [
        (Set::from([1, 2, 3, 9]), Set::from([1, 2, 3, 4, 5]), Set::from([4, 5, 9])),
        (Set::from([1, 2, 3]), Set::from([1, 2, 3]), Set::new()),
        (
            Set::from([1, 2]),
            Set::from([3, 4, 5, 350]),
            Set::from([1, 2, 3, 4, 5, 350]),
        ),
    ];
    for (a, b, want) in cases {
        let got = a.symmetric_difference(&b);
        assert!(got.equal(&want), "{:?} ^ {:?} gave {:?}", a, b, got);
    }
}

#[test]
fn test_equal() {
    assert!(!Set::from([1, 2]).equal(&Set::from([1, 2, 3, 4])));
    assert!(Set::<i32>::new().equal(&Set::new()));
    assert!(Set::from([1, 2, 3, 4, 5]).equal(&Set::from([1, 2, 5, 4, 3])));
    assert!(!Set::from([1, 2, 3]).equal(&Set::from([1, 2, 4])));
    assert_ne!(Set::from([1]), Set::from([2]));
}

#[test]
fn test_is_subset_of() {
    assert!(!Set::from([1, 2, 3, 4, 5]).is_subset_of(&Set::from([1, 2, 3])));
    assert!(Set::from([1, 2, 3]).is_subset_of(&Set::from([1, 2, 3, 4, 5])));
    assert!(!Set::from([1, 3, 70]).is_subset_of(&Set::from([1, 2, 3, 4])));
    assert!(Set::new().is_subset_of(&Set::from([1])));
}

#[test]
fn test_is_superset_of() {
    assert!(!Set::from([1, 2, 3]).is_superset_of(&Set::from([1, 2, 3, 4, 5])));
    assert!(Set::from([1, 2, 3, 4, 5]).is_superset_of(&Set::from([1, 2, 3])));
    assert!(!Set::from([1, 2, 3, 4]).is_superset_of(&Set::from([1, 3, 70])));
    assert!(Set::from([1]).is_superset_of(&Set::new()));
}

#[test]
fn test_is_disjoint_from() {
    assert!(Set::from([1, 3, 5, 7]).is_disjoint_from(&Set::from([2, 4, 6, 8])));
    assert!(!Set::from([0, 1, 3]).is_disjoint_from(&Set::from([2, 4, 1])));
    assert!(Set::<i32>::new().is_disjoint_from(&Set::new()));
}

#[test]
fn test_operators() {
    let a = Set::from([1, 2, 3]);
    let b = Set::from([3, 4]);
    assert_eq!(&a | &b, Set::from([1, 2, 3, 4]));
    assert_eq!(&a & &b, Set::from([3]));
    assert_eq!(&a - &b, Set::from([1, 2]));
    assert_eq!(&a ^ &b, Set::from([1, 2, 4]));
}

#[test]
fn test_operands_are_left_untouched() {
    let a = Set::from([1, 2, 3]);
    let b = Set::from([2, 3, 4]);
    let _ = a.union(&b);
    let _ = a.intersection(&b);
    let _ = a.difference(&b);
    let _ = a.symmetric_difference(&b);
    assert_eq!(sorted(&a), vec![1, 2, 3]);
    assert_eq!(sorted(&b), vec![2, 3, 4]);
}
