use std::collections::HashSet;

use num_bigint::BigUint;
use test_log::test;

use kr_expansion::config::ExpansionConfig;
use kr_expansion::expansion::Expansion;
use kr_expansion::monoid::FiniteMonoid;
use kr_expansion::monoids::{
    CyclicGroup, FreeLeftRegularBand, TransformationMonoid, Truncated, TruncatedFreeMonoid,
};
use kr_expansion::types::{Label, Side, Word};

/// All words over `k` letters of length at most `max_len`.
fn all_words(k: u32, max_len: usize) -> Vec<Word> {
    let mut words = vec![Word::empty()];
    let mut layer = vec![Word::empty()];
    for _ in 0..max_len {
        let mut next = Vec::new();
        for w in &layer {
            for i in 0..k {
                next.push(w.appended(Label::new(i)));
            }
        }
        words.extend(next.iter().cloned());
        layer = next;
    }
    words
}

fn expand_with_side<M: FiniteMonoid>(monoid: M, side: Side) -> Expansion<M> {
    Expansion::with_config(monoid, ExpansionConfig::default().with_side(side)).unwrap()
}

#[test]
fn test_signature_is_deterministic() {
    let k1 = Expansion::new(FreeLeftRegularBand::new(3)).unwrap();
    let k2 = Expansion::new(FreeLeftRegularBand::new(3)).unwrap();
    for w in all_words(3, 3) {
        let s = k1.signature(&w).unwrap();
        assert_eq!(s, k1.signature(&w).unwrap());
        assert_eq!(s, k2.signature(&w).unwrap());
    }
}

#[test]
fn test_equivalence_relation() {
    let k = Expansion::new(TransformationMonoid::full_t2()).unwrap();
    let xs: Vec<_> = all_words(2, 3)
        .into_iter()
        .map(|w| k.element(w).unwrap())
        .collect();

    for x in &xs {
        assert!(k.are_equivalent(x, x).unwrap());
        for y in &xs {
            let xy = k.are_equivalent(x, y).unwrap();
            assert_eq!(xy, k.are_equivalent(y, x).unwrap());
            if !xy {
                continue;
            }
            for z in &xs {
                if k.are_equivalent(y, z).unwrap() {
                    assert!(k.are_equivalent(x, z).unwrap());
                }
            }
        }
    }
}

#[test]
fn test_product_is_congruence() {
    let k = Expansion::new(FreeLeftRegularBand::new(2)).unwrap();

    // Equivalent operands with different literal words.
    let x1 = k.element(Word::from([0])).unwrap();
    let x2 = k.element(Word::from([0, 0])).unwrap();
    let y1 = k.element(Word::from([1, 0])).unwrap();
    let y2 = k.element(Word::from([1, 0, 1, 0])).unwrap();
    assert_ne!(x1.word(), x2.word());
    assert_ne!(y1.word(), y2.word());
    assert!(k.are_equivalent(&x1, &x2).unwrap());
    assert!(k.are_equivalent(&y1, &y2).unwrap());

    let p1 = k.product(&x1, &y1).unwrap();
    let p2 = k.product(&x2, &y2).unwrap();
    assert!(k.are_equivalent(&p1, &p2).unwrap());
}

#[test]
fn test_product_matches_product_of_representatives() {
    for m in [
        TransformationMonoid::full_t2(),
        TransformationMonoid::new(3, vec![vec![1, 2, 0], vec![0, 0, 2]]),
    ] {
        let k = Expansion::new(m).unwrap();
        let xs: Vec<_> = all_words(2, 3)
            .into_iter()
            .map(|w| k.element(w).unwrap())
            .collect();

        for x in &xs {
            let rx = k.representative(x.word()).unwrap();
            for y in &xs {
                let ry = k.representative(y.word()).unwrap();
                let direct = k.product(x, y).unwrap();
                let via_representatives = k.product(&rx, &ry).unwrap();
                assert!(k.are_equivalent(&direct, &via_representatives).unwrap());
            }
        }
    }
}

#[test]
fn test_product_is_associative() {
    let k = Expansion::new(TransformationMonoid::full_t2()).unwrap();
    let xs = k.elements();
    for x in xs {
        for y in xs {
            for z in xs {
                let left = k.product(&k.product(x, y).unwrap(), z).unwrap();
                let right = k.product(x, &k.product(y, z).unwrap()).unwrap();
                assert_eq!(left, right);
            }
        }
    }
}

#[test]
fn test_size_bound() {
    fn check<M: FiniteMonoid>(k: Expansion<M>) {
        let bound = BigUint::from(k.cayley_graph().num_vertices()) << k.transition_edges().len();
        assert_eq!(k.size_bound(), bound);
        assert!(BigUint::from(k.len()) <= bound);
    }

    check(Expansion::new(FreeLeftRegularBand::new(3)).unwrap());
    check(Expansion::new(TransformationMonoid::full_t2()).unwrap());
    check(Expansion::new(TruncatedFreeMonoid::new(2, 2)).unwrap());
    check(Expansion::new(CyclicGroup::new(7)).unwrap());
}

#[test]
fn test_group_is_not_expanded() {
    let z5 = CyclicGroup::new(5);
    let k = Expansion::new(z5).unwrap();
    assert_eq!(k.components().count(), 1);
    assert!(k.transition_edges().is_empty());
    assert_eq!(k.len(), 5);

    let values: HashSet<u32> = k.iter().map(|x| *x.value()).collect();
    assert_eq!(values.len(), 5);
    for x in &k {
        assert!(x.transition_edges().is_empty());
    }

    // Same with two generators.
    let config = ExpansionConfig::default().with_generators(vec![2, 3]);
    let k = Expansion::with_config(CyclicGroup::new(6), config).unwrap();
    assert!(k.transition_edges().is_empty());
    assert_eq!(k.len(), 6);
}

#[test]
fn test_tree_is_not_expanded() {
    let m = TruncatedFreeMonoid::new(2, 3);
    let k = Expansion::new(m).unwrap();
    let graph = k.cayley_graph();
    let zero = graph.index_of(&Truncated::Zero).unwrap();

    // Every edge between non-zero vertices is a transition edge.
    for e in graph.edges() {
        if e.source != zero && e.target != zero {
            assert!(k.transition_edges().contains(&e), "{} is not a transition", e);
        }
    }

    // Each non-zero element has exactly one class, represented by its own word.
    let non_zero = k.iter().filter(|x| *x.value() != Truncated::Zero).count();
    assert_eq!(non_zero, graph.num_vertices() - 1);
    for w in all_words(2, 3) {
        assert_eq!(k.representative(&w).unwrap().word(), &w);
    }
}

#[test]
fn test_left_regular_band_scenario() {
    let k = Expansion::new(FreeLeftRegularBand::new(2)).unwrap();

    let one = k.one();
    assert_eq!(one, k.representative(&Word::empty()).unwrap());

    let gens = k.semigroup_generators().unwrap();
    assert_eq!(gens.len(), 2);
    for g in &gens {
        let gg = k.product(g, g).unwrap();
        assert!(k.are_equivalent(&gg, g).unwrap());
        let ggg = k.product(&gg, g).unwrap();
        assert!(k.are_equivalent(&ggg, g).unwrap());
        assert!(k.are_equivalent(&k.product(&one, g).unwrap(), g).unwrap());
    }

    let ab = k.product(&gens[0], &gens[1]).unwrap();
    let ba = k.product(&gens[1], &gens[0]).unwrap();
    assert!(!k.are_equivalent(&ab, &ba).unwrap());

    // Same value, same transition edges.
    let aba = k.element(Word::from([0, 1, 0])).unwrap();
    let aabb = k.element(Word::from([0, 0, 1, 1])).unwrap();
    assert!(k.are_equivalent(&ab, &aba).unwrap());
    assert!(k.are_equivalent(&aba, &aabb).unwrap());
    assert_eq!(k.representative(aabb.word()).unwrap().word(), &Word::from([0, 1]));
}

#[test]
fn test_left_regular_band_sizes() {
    assert_eq!(Expansion::new(FreeLeftRegularBand::new(3)).unwrap().len(), 16);
    assert_eq!(Expansion::new(FreeLeftRegularBand::default()).unwrap().len(), 65);
}

#[test]
fn test_sides_agree() {
    fn signatures<M: FiniteMonoid>(k: &Expansion<M>) -> HashSet<kr_expansion::signature::Signature<M::Element>> {
        k.iter().map(|x| x.signature().clone()).collect()
    }

    let right = expand_with_side(TransformationMonoid::full_t2(), Side::Right);
    let left = expand_with_side(TransformationMonoid::full_t2(), Side::Left);
    let both = expand_with_side(TransformationMonoid::full_t2(), Side::TwoSided);
    assert_eq!(right.len(), left.len());
    assert_eq!(right.len(), both.len());
    assert_eq!(signatures(&right), signatures(&left));
    assert_eq!(signatures(&right), signatures(&both));

    let right = expand_with_side(FreeLeftRegularBand::new(3), Side::Right);
    let both = expand_with_side(FreeLeftRegularBand::new(3), Side::TwoSided);
    assert_eq!(right.len(), both.len());
    assert_eq!(both.side(), Side::TwoSided);
}

#[test]
fn test_enumeration_is_reproducible() {
    let k1 = expand_with_side(FreeLeftRegularBand::new(3), Side::TwoSided);
    let k2 = expand_with_side(FreeLeftRegularBand::new(3), Side::TwoSided);
    let w1: Vec<&Word> = k1.iter().map(|x| x.word()).collect();
    let w2: Vec<&Word> = k2.iter().map(|x| x.word()).collect();
    assert_eq!(w1, w2);

    // Breadth-first: word lengths never decrease.
    for pair in w1.windows(2) {
        assert!(pair[0].len() <= pair[1].len());
    }
}

#[test]
fn test_condensation_is_dag() {
    let k = Expansion::new(TransformationMonoid::new(3, vec![vec![1, 2, 0], vec![0, 0, 2]])).unwrap();
    assert!(k.components().condensation_is_acyclic(k.cayley_graph()));
    for e in k.transition_edges().iter() {
        assert!(!k.components().same_component(e.source, e.target));
    }
}
