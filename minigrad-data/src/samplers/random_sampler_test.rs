// minigrad-data/src/samplers/random_sampler_test.rs

use super::*;
use std::collections::HashSet;

#[test]
fn test_random_sampler_len() {
    assert_eq!(RandomSampler::new(false, None).len(10), 10);
    assert_eq!(RandomSampler::new(false, Some(5)).len(10), 5);
}

#[test]
fn test_random_sampler_no_replacement_is_permutation() {
    let sampler = RandomSampler::new(false, None);
    let indices: Vec<usize> = sampler.iter(10).collect();
    assert_eq!(indices.len(), 10);
    let unique: HashSet<usize> = indices.into_iter().collect();
    assert_eq!(unique.len(), 10);
    assert!(unique.iter().all(|&i| i < 10));
}

#[test]
fn test_random_sampler_no_replacement_more_than_dataset_returns_empty() {
    let sampler = RandomSampler::new(false, Some(10));
    assert_eq!(sampler.iter(5).count(), 0);
}

#[test]
fn test_random_sampler_with_replacement() {
    let sampler = RandomSampler::new(true, Some(20));
    let indices: Vec<usize> = sampler.iter(5).collect();
    assert_eq!(indices.len(), 20);
    assert!(indices.iter().all(|&i| i < 5));
}

#[test]
fn test_random_sampler_empty_dataset() {
    assert_eq!(RandomSampler::new(false, None).iter(0).count(), 0);
    assert_eq!(RandomSampler::new(true, Some(5)).iter(0).count(), 0);
}

#[test]
fn test_random_sampler_seeded_epochs_reproducible() {
    let a = RandomSampler::new(false, None).with_seed(17);
    let b = RandomSampler::new(false, None).with_seed(17);
    let a_epochs: Vec<Vec<usize>> = (0..3).map(|_| a.iter(8).collect()).collect();
    let b_epochs: Vec<Vec<usize>> = (0..3).map(|_| b.iter(8).collect()).collect();
    assert_eq!(a_epochs, b_epochs);
}

#[test]
fn test_random_sampler_len_matches_iter() {
    let cases = [
        (RandomSampler::new(false, Some(10)), 5),
        (RandomSampler::new(true, Some(6)), 0),
        (RandomSampler::new(false, None), 0),
        (RandomSampler::new(true, Some(12)), 4),
        (RandomSampler::new(false, Some(3)), 4),
    ];
    for (sampler, dataset_len) in cases {
        assert_eq!(sampler.len(dataset_len), sampler.iter(dataset_len).count());
    }
}
