use nexus_minheap::{HeapEntry, MinHeap};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn is_heap<T>(entries: &[HeapEntry<T, i32>]) -> bool {
    (1..entries.len()).all(|i| entries[(i - 1) / 2].priority <= entries[i].priority)
}

#[derive(Debug, Clone)]
enum Op {
    Insert(i32),
    Extract,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => any::<i32>().prop_map(Op::Insert),
        2 => Just(Op::Extract),
    ]
}

proptest! {
    #[test]
    fn invariant_holds_after_every_call(ops in prop::collection::vec(op(), 0..300)) {
        let mut heap = MinHeap::new();
        let mut model: Vec<i32> = Vec::new();

        for op in ops {
            let before = heap.len();
            match op {
                Op::Insert(p) => {
                    heap.insert((), p).unwrap();
                    model.push(p);
                    prop_assert_eq!(heap.len(), before + 1);
                }
                Op::Extract => {
                    let got = heap.extract_min().map(|e| e.priority);
                    let expected = model.iter().copied().min();
                    prop_assert_eq!(got, expected);
                    if let Some(min) = expected {
                        let at = model.iter().position(|&p| p == min).unwrap();
                        model.swap_remove(at);
                        prop_assert_eq!(heap.len(), before - 1);
                    } else {
                        prop_assert_eq!(heap.len(), 0);
                    }
                }
            }
            prop_assert!(is_heap(heap.as_slice()));
            prop_assert!(heap.len() <= heap.capacity());
        }
    }

    #[test]
    fn repeated_extraction_is_sorted(priorities in prop::collection::vec(any::<i32>(), 0..500)) {
        let mut heap = MinHeap::new();
        for (i, &p) in priorities.iter().enumerate() {
            heap.insert(i, p).unwrap();
        }

        let mut out = Vec::with_capacity(priorities.len());
        while let Some(entry) = heap.extract_min() {
            prop_assert_eq!(priorities[entry.payload], entry.priority);
            out.push(entry.priority);
        }

        let mut expected = priorities.clone();
        expected.sort_unstable();
        prop_assert_eq!(out, expected);
    }

    #[test]
    fn peek_matches_extract(priorities in prop::collection::vec(any::<i32>(), 1..100)) {
        let mut heap = MinHeap::new();
        for &p in &priorities {
            heap.insert(p, p).unwrap();
        }
        let peeked = heap.peek_min().copied();
        prop_assert_eq!(peeked, heap.extract_min());
    }
}

#[test]
fn round_trip_example() {
    let mut heap: MinHeap<i32, i32> = MinHeap::new();
    for v in [5, 3, 8, 1, 9, 2] {
        heap.insert(v, v).unwrap();
    }
    let out: Vec<i32> = heap.into_sorted_vec().into_iter().map(|e| e.payload).collect();
    assert_eq!(out, vec![1, 2, 3, 5, 8, 9]);
}

#[test]
fn extract_on_empty_leaves_size_zero() {
    let mut heap: MinHeap<String, i32> = MinHeap::new();
    assert!(heap.extract_min().is_none());
    assert!(heap.peek_min().is_none());
    assert_eq!(heap.len(), 0);
    assert!(heap.is_empty());
}

#[test]
fn payloads_are_moved_back_intact() {
    let mut heap = MinHeap::new();
    heap.insert(String::from("later"), 2).unwrap();
    heap.insert(String::from("now"), 1).unwrap();

    let (payload, priority) = heap.extract_min().unwrap().into_parts();
    assert_eq!(payload, "now");
    assert_eq!(priority, 1);
}

#[test]
fn random_interleaving_stays_ordered() {
    let mut rng = SmallRng::seed_from_u64(0x5eed);
    let mut heap: MinHeap<(), i32> = MinHeap::new();

    for _ in 0..20_000 {
        if heap.is_empty() || rng.random_bool(0.55) {
            heap.insert((), rng.random_range(-1000..1000)).unwrap();
        } else {
            let min = heap.peek_min().map(|e| e.priority).unwrap();
            let entry = heap.extract_min().unwrap();
            assert_eq!(entry.priority, min);
            assert!(heap.iter().all(|e| e.priority >= min));
        }
    }
    assert!(is_heap(heap.as_slice()));
}
