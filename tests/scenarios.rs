use std::cell::Cell;
use std::rc::Rc;

use lazyseq::prelude::*;

/// A source over `values` that counts how many times it has been pulled.
fn recording(values: Vec<i32>) -> (impl Sequence<Item = i32>, Rc<Cell<usize>>) {
    let pulls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&pulls);
    let mut it = values.into_iter();
    let seq = from_fn(move || {
        counter.set(counter.get() + 1);
        it.next()
    });
    (seq, pulls)
}

#[test]
fn test_chain_then_map_squares() {
    let seq = chain(vec![1, 2].into_seq(), vec![3].into_seq()).map(|x| x * x);
    assert_eq!(seq.to_vec(), vec![1, 4, 9]);
}

#[test]
fn test_any_leaves_tail_unconsumed() {
    let (mut seq, pulls) = recording(vec![1, 3, 5, 6, 7]);

    assert!(seq.any(|x| x % 2 == 0));
    assert_eq!(pulls.get(), 4);
    assert_eq!(seq.to_vec(), vec![7]);
}

#[test]
fn test_partition_evens_and_odds() {
    let (even, odd) = vec![1, 2, 3, 4, 5, 6].into_seq().partition(|x| x % 2 == 0);
    assert_eq!(even, vec![2, 4, 6]);
    assert_eq!(odd, vec![1, 3, 5]);
}

#[test]
fn test_take_while_below_five() {
    let seq = vec![1, 2, 3, 4, 5, 6].into_seq().take_while(|x| *x < 5);
    assert_eq!(seq.to_vec(), vec![1, 2, 3, 4]);
}

#[test]
fn test_generate_until_none() {
    let seq = generate_sequence(0, |n: &i32| if *n < 5 { Some(n + 1) } else { None });
    assert_eq!(seq.to_vec(), vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_max_by_key_last_tie_wins() {
    let longest = vec!["a", "bb", "cc", "d"].into_seq().max_by_key(|s| s.len());
    assert_eq!(longest, Some("cc"));
}

#[test]
fn test_reduce_agrees_with_sum() {
    let values = vec![1, 2, 3, 4, 5, 6];
    let folded = values.clone().into_seq().reduce(|acc, x| acc + x, 0);
    let summed = values.into_seq().sum();

    assert_eq!(folded, 21);
    assert_eq!(summed, Ok(21));
}

#[test]
fn test_pipeline_construction_is_lazy() {
    let (source, pulls) = recording(vec![1, 2, 3, 4, 5, 6, 7, 8]);

    let mut pipeline = source
        .skip(1)
        .filter(|x| x % 2 == 0)
        .map(|x| x * 10)
        .enumerate()
        .scan(|acc: &i32, item: Indexed<i32>| acc + item.value, 0)
        .take(2);
    assert_eq!(pulls.get(), 0);

    assert_eq!(pipeline.pull(), Pull::Yielded(20));
    assert_eq!(pulls.get(), 2);
    assert_eq!(pipeline.pull(), Pull::Yielded(60));
    assert_eq!(pulls.get(), 4);
    assert_eq!(pipeline.pull(), Pull::Done);
    assert_eq!(pulls.get(), 4);
}

#[test]
fn test_infinite_source_with_bounded_consumers() {
    let naturals = || generate_sequence(0u64, |n| Some(n + 1));

    assert_eq!(naturals().find(|n| n * n > 50), Some(8));
    assert_eq!(naturals().position(|n| *n == 10), Some(9));
    assert!(!naturals().all(|n| *n < 3));
    assert_eq!(naturals().zip(vec!['a', 'b'].into_seq()).count(), 2);
}

#[test]
fn test_unfold_formats_state() {
    let labels = unfold_sequence((1u32, 1u32), |(i, fact)| {
        (i <= 4).then(|| (format!("{i}!={fact}"), (i + 1, fact * (i + 1))))
    });
    assert_eq!(labels.to_vec(), vec!["1!=1", "2!=2", "3!=6", "4!=24"]);
}

#[test]
fn test_flat_map_words_to_chars() {
    let (vowels, consonants) = vec!["hi", "bye", "good"]
        .into_seq()
        .flat_map(|w| w.chars().into_seq())
        .partition(|c| "aeiouy".contains(*c));

    assert_eq!(vowels.iter().collect::<String>(), "iyeoo");
    assert_eq!(consonants.iter().collect::<String>(), "hbgd");
}

#[test]
fn test_sum_of_empty_is_reported() {
    let err = empty::<i32>().sum().unwrap_err();
    assert_eq!(err, SeqError::Empty { operation: "sum" });
    assert!(err.to_string().contains("sum"));
}

#[test]
fn test_min_max_on_floats() {
    let readings = || vec![2.5, -1.0, 7.25, 7.25, 0.0].into_seq();

    assert_eq!(readings().max(), Some(7.25));
    assert_eq!(readings().min(), Some(-1.0));
    assert_eq!(empty::<f64>().max(), None);
}

#[test]
fn test_product_and_count() {
    assert_eq!((1..=5).into_seq().product(), 120);
    assert_eq!(vec![(); 3].into_seq().count(), 3);
}

#[test]
fn test_collect_with_custom_collector() {
    let csv = vec![1, 2, 3]
        .into_seq()
        .map(|x| x.to_string())
        .collect(|s| s.iter().collect::<Vec<_>>().join(","));
    assert_eq!(csv, "1,2,3");
}

#[test]
fn test_for_each_and_nth() {
    let mut seen = Vec::new();
    vec![10, 20, 30].into_seq().nth(2).for_each(|x| seen.push(x));
    assert_eq!(seen, vec![30]);
}
