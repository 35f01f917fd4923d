use order_stats::sort::{
    deterministic_select, randomized_quickselect_with_rng, select, Algorithm, Selector,
};
use order_stats::SelectionError;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn random_vec(rng: &mut ChaCha8Rng, len: usize, max: i64) -> Vec<i64> {
    (0..len).map(|_| rng.gen_range(0..=max)).collect()
}

#[test]
fn test_both_algorithms_match_sorted_order() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    for len in [1, 2, 5, 10, 11, 26, 97, 300] {
        // a narrow value range forces plenty of duplicates
        for max in [3, 1_000_000] {
            let data = random_vec(&mut rng, len, max);
            let mut sorted = data.clone();
            sorted.sort();
            for k in 1..=len {
                let expected = sorted[k - 1];
                assert_eq!(deterministic_select(&data, k), Ok(expected));
                assert_eq!(
                    randomized_quickselect_with_rng(&data, k, &mut rng),
                    Ok(expected)
                );
            }
        }
    }
}

#[test]
fn test_every_rank_reproduces_sort_for_adversarial_shapes() {
    let n = 257;
    let ascending: Vec<i32> = (0..n).collect();
    let descending: Vec<i32> = (0..n).rev().collect();
    let organ_pipe: Vec<i32> = (0..n).map(|i| if i < n / 2 { i } else { n - i }).collect();
    let constant = vec![42; n as usize];

    let mut selector = Selector::seeded(Algorithm::Randomized, 5);
    for data in [ascending, descending, organ_pipe, constant] {
        let mut sorted = data.clone();
        sorted.sort();
        for algorithm in [Algorithm::Deterministic, Algorithm::Randomized] {
            let rebuilt: Vec<i32> = (1..=data.len())
                .map(|k| select(&data, k, algorithm).unwrap())
                .collect();
            assert_eq!(rebuilt, sorted);
        }
        let rebuilt: Vec<i32> = (1..=data.len())
            .map(|k| selector.select(&data, k).unwrap())
            .collect();
        assert_eq!(rebuilt, sorted);
    }
}

#[test]
fn test_large_input_median() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let data = random_vec(&mut rng, 10_000, 100_000);
    let mut sorted = data.clone();
    sorted.sort();
    let k = data.len() / 2;
    assert_eq!(select(&data, k, Algorithm::Deterministic), Ok(sorted[k - 1]));
    assert_eq!(select(&data, k, Algorithm::Randomized), Ok(sorted[k - 1]));
}

#[test]
fn test_caller_sequence_is_untouched() {
    let data = vec![5, 3, 9, 1, 7, 3, 8, 2, 6, 4, 0, 11, 10];
    let snapshot = data.clone();
    for algorithm in [Algorithm::Deterministic, Algorithm::Randomized] {
        for k in 1..=data.len() {
            select(&data, k, algorithm).unwrap();
        }
    }
    assert_eq!(data, snapshot);
}

#[test]
fn test_error_cases() {
    let empty: Vec<i64> = Vec::new();
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    assert_eq!(deterministic_select(&empty, 3), Err(SelectionError::EmptyInput));
    assert_eq!(
        randomized_quickselect_with_rng(&empty, 0, &mut rng),
        Err(SelectionError::EmptyInput)
    );
    assert_eq!(
        select(&[1, 2, 3], 4, Algorithm::Randomized),
        Err(SelectionError::OutOfRange { k: 4, len: 3 })
    );

    let err: order_stats::Error = select(&[1], 0, Algorithm::Deterministic)
        .unwrap_err()
        .into();
    assert!(matches!(
        err,
        order_stats::Error::Selection(SelectionError::OutOfRange { k: 0, len: 1 })
    ));
}
