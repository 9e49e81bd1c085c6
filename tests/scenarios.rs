//! Concrete scenarios and universal invariants from spec §8.

use level_ancestor::{Kind, LevelAncestor};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use test_case::test_case;

const ALL_KINDS: [Kind; 5] = [
    Kind::Table,
    Kind::JumpPointers,
    Kind::Ladder,
    Kind::JumpAndLadder,
    Kind::Optimal,
];

fn depth_of(parent: &[i64], v: usize) -> usize {
    let mut d = 0;
    let mut cur = v as i64;
    while parent[cur as usize] != -1 {
        cur = parent[cur as usize];
        d += 1;
    }
    d
}

fn naive_walk(parent: &[i64], v: usize, d: i64) -> Option<usize> {
    let dv = depth_of(parent, v) as i64;
    if d < 0 || d > dv {
        return None;
    }
    let mut cur = v;
    for _ in 0..(dv - d) {
        cur = parent[cur] as usize;
    }
    Some(cur)
}

#[test_case(Kind::Table; "table")]
#[test_case(Kind::JumpPointers; "jump_pointers")]
#[test_case(Kind::Ladder; "ladder")]
#[test_case(Kind::JumpAndLadder; "jump_and_ladder")]
#[test_case(Kind::Optimal; "optimal")]
fn s1_chain(kind: Kind) {
    let parent: Vec<i64> = vec![-1, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
    let la = LevelAncestor::new_with_kind(parent, kind).unwrap();
    for k in 0..=10 {
        assert_eq!(la.query(10, k).unwrap(), Some(k as usize));
    }
    assert_eq!(la.query(10, 11).unwrap(), None);
}

#[test_case(Kind::Table; "table")]
#[test_case(Kind::JumpPointers; "jump_pointers")]
#[test_case(Kind::Ladder; "ladder")]
#[test_case(Kind::JumpAndLadder; "jump_and_ladder")]
#[test_case(Kind::Optimal; "optimal")]
fn s2_star(kind: Kind) {
    let parent: Vec<i64> = vec![-1, 0, 0, 0, 0, 0, 0, 0, 0, 0];
    let la = LevelAncestor::new_with_kind(parent, kind).unwrap();
    for i in 1..10 {
        assert_eq!(la.query(i, 0).unwrap(), Some(0));
        assert_eq!(la.query(i, 1).unwrap(), Some(i));
    }
}

#[test_case(Kind::Table; "table")]
#[test_case(Kind::JumpPointers; "jump_pointers")]
#[test_case(Kind::Ladder; "ladder")]
#[test_case(Kind::JumpAndLadder; "jump_and_ladder")]
#[test_case(Kind::Optimal; "optimal")]
fn s3_bushy(kind: Kind) {
    let parent: Vec<i64> = vec![-1, 0, 0, 1, 1, 2, 3];
    let la = LevelAncestor::new_with_kind(parent, kind).unwrap();
    assert_eq!(la.query(6, 0).unwrap(), Some(0));
    assert_eq!(la.query(6, 1).unwrap(), Some(1));
    assert_eq!(la.query(6, 2).unwrap(), Some(3));
    assert_eq!(la.query(6, 3).unwrap(), Some(6));
    assert_eq!(la.query(6, 4).unwrap(), None);
}

#[test_case(Kind::JumpPointers; "jump_pointers")]
#[test_case(Kind::Ladder; "ladder")]
#[test_case(Kind::JumpAndLadder; "jump_and_ladder")]
#[test_case(Kind::Optimal; "optimal")]
fn s4_complete_binary(kind: Kind) {
    let n = 127usize;
    let parent: Vec<i64> = (0..n)
        .map(|i| if i == 0 { -1 } else { ((i - 1) / 2) as i64 })
        .collect();
    let la = LevelAncestor::new_with_kind(parent, kind).unwrap();
    assert_eq!(la.query(126, 0).unwrap(), Some(0));
    assert_eq!(la.query(126, 5).unwrap(), Some(62));
    assert_eq!(la.query(126, 6).unwrap(), Some(126));
}

#[test_case(Kind::JumpPointers; "jump_pointers")]
#[test_case(Kind::Ladder; "ladder")]
#[test_case(Kind::JumpAndLadder; "jump_and_ladder")]
#[test_case(Kind::Optimal; "optimal")]
fn s5_random_cross_check(kind: Kind) {
    let mut rng = StdRng::seed_from_u64(42);
    let n = 1000usize;
    let mut parent = vec![-1i64; n];
    for i in 1..n {
        parent[i] = rng.gen_range(0, i) as i64;
    }

    let la = LevelAncestor::new_with_kind(parent.clone(), kind).unwrap();

    for _ in 0..1000 {
        let v = rng.gen_range(0, n);
        let dv = depth_of(&parent, v) as i64;
        let d = rng.gen_range(0, dv + 1);
        assert_eq!(la.query(v, d).unwrap(), naive_walk(&parent, v, d));
    }
}

#[test]
fn s6_large_chain() {
    let n = 100_000usize;
    let parent: Vec<i64> = (0..n as i64).map(|i| i - 1).collect();
    let la = LevelAncestor::new(parent).unwrap();
    assert_eq!(la.query(99_999, 50_000).unwrap(), Some(50_000));
}

#[test]
fn universal_invariants_on_random_tree() {
    let mut rng = StdRng::seed_from_u64(7);
    let n = 300usize;
    let mut parent = vec![-1i64; n];
    for i in 1..n {
        parent[i] = rng.gen_range(0, i) as i64;
    }

    for &kind in &ALL_KINDS {
        let la = LevelAncestor::new_with_kind(parent.clone(), kind).unwrap();
        for v in 0..n {
            let dv = depth_of(&parent, v) as i64;

            // 1. Self.
            assert_eq!(la.query(v, dv).unwrap(), Some(v));
            // 2. Root.
            assert_eq!(la.query(v, 0).unwrap(), Some(0));
            // 3. Out of range.
            assert_eq!(la.query(v, dv + 1).unwrap(), None);
            assert_eq!(la.query(v, -1).unwrap(), None);

            for d in 0..=dv {
                let ancestor = la.query(v, d).unwrap().unwrap();
                // 4. Depth-correct.
                assert_eq!(depth_of(&parent, ancestor) as i64, d);
                // 5. Ancestor-chain.
                assert_eq!(Some(ancestor), naive_walk(&parent, v, d));
                // 6. Idempotence.
                assert_eq!(la.query(ancestor, d).unwrap(), Some(ancestor));
            }

            // 7. Monotone, sampled over a few (d1, d2) pairs.
            if dv >= 2 {
                let d2 = dv;
                let d1 = dv / 2;
                let via_v = la.query(v, d1).unwrap();
                let mid = la.query(v, d2).unwrap().unwrap();
                let via_mid = la.query(mid, d1).unwrap();
                assert_eq!(via_v, via_mid);
            }
        }
    }
}

#[test]
fn table_capacity_cap_rejects_large_n() {
    let n = 2000;
    let parent: Vec<i64> = (0..n as i64).map(|i| i - 1).collect();
    let err = LevelAncestor::new_with_kind(parent, Kind::Table).unwrap_err();
    assert!(matches!(
        err,
        level_ancestor::Error::CapacityExceeded { .. }
    ));
}
