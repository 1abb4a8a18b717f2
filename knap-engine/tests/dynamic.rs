use knap_engine::{solve_exact, Error, ExactDpSolver, ItemSet, SolutionReconstructor};
use rand::{rngs::SmallRng, Rng, SeedableRng};

fn random_item_set(rng: &mut SmallRng, num_items: usize) -> ItemSet {
    let values = (0..num_items).map(|_| rng.gen_range(0..=60)).collect();
    let weights = (0..num_items).map(|_| rng.gen_range(0..=25)).collect();
    let capacity = rng.gen_range(0..=num_items as u64 * 12);
    ItemSet::from_parts(values, weights, capacity).unwrap()
}

fn brute_force(item_set: &ItemSet) -> u64 {
    let n = item_set.len();
    let mut best = 0;
    for mask in 0u32..(1 << n) {
        let (mut value, mut weight) = (0, 0);
        for i in 0..n {
            if mask & (1 << i) != 0 {
                value += item_set.value(i);
                weight += item_set.weight(i);
            }
        }
        if weight <= item_set.capacity() {
            best = best.max(value);
        }
    }
    best
}

#[test]
fn test_matches_brute_force() {
    let mut rng = SmallRng::seed_from_u64(1337);
    for num_items in 0..=14 {
        for _ in 0..5 {
            let item_set = random_item_set(&mut rng, num_items);
            let solution = solve_exact(&item_set).unwrap();
            assert_eq!(solution.total_value, brute_force(&item_set));
            assert!(solution.is_optimal);
        }
    }
    let item_set = random_item_set(&mut rng, 20);
    assert_eq!(
        solve_exact(&item_set).unwrap().total_value,
        brute_force(&item_set)
    );
}

#[test]
fn test_table_is_monotone() {
    let mut rng = SmallRng::seed_from_u64(42);
    let item_set = random_item_set(&mut rng, 15);
    let (_, memo) = ExactDpSolver::solve(&item_set).unwrap();
    for c in 0..=item_set.capacity() {
        for k in 0..=item_set.len() {
            let here = memo.get(c, k).unwrap();
            if k < item_set.len() {
                assert!(here <= memo.get(c, k + 1).unwrap());
            }
            if c < item_set.capacity() {
                assert!(here <= memo.get(c + 1, k).unwrap());
            }
        }
    }
}

#[test]
fn test_reconstruction_is_sound() {
    let mut rng = SmallRng::seed_from_u64(7);
    for num_items in [1, 3, 8, 30, 60] {
        let item_set = random_item_set(&mut rng, num_items);
        let (best, memo) = ExactDpSolver::solve(&item_set).unwrap();
        assert_eq!(memo.get(item_set.capacity(), num_items), Some(best));

        let taken = SolutionReconstructor::reconstruct(&item_set, &memo);
        let items: Vec<usize> = (0..num_items).filter(|&i| taken[i]).collect();
        assert_eq!(item_set.evaluate_total_value(&items).unwrap(), best);
    }
}

#[test]
fn test_equal_alternatives_are_left_out() {
    // Either item alone is optimal; the later one must not be taken
    let item_set = ItemSet::from_parts(vec![5, 5], vec![3, 3], 3).unwrap();
    let solution = solve_exact(&item_set).unwrap();
    assert_eq!(solution.items(), vec![0]);

    // Zero-value items add nothing and are never taken
    let item_set = ItemSet::from_parts(vec![0, 7, 0], vec![0, 2, 1], 3).unwrap();
    assert_eq!(solve_exact(&item_set).unwrap().items(), vec![1]);
}

#[test]
fn test_zero_capacity() {
    let item_set = ItemSet::from_parts(vec![4, 9], vec![0, 1], 0).unwrap();
    let solution = solve_exact(&item_set).unwrap();
    assert_eq!(solution.items(), vec![0]);
    assert_eq!(solution.total_value, 4);
    assert_eq!(solution.total_weight, 0);
}

#[test]
fn test_negative_capacity_overflows() {
    let item_set = ItemSet::from_parts(vec![1], vec![1], 5).unwrap();
    assert_eq!(
        ExactDpSolver::solve_with_capacity(&item_set, -3).unwrap_err(),
        Error::CapacityOverflow {
            capacity: -3,
            items: 1
        }
    );
}

#[test]
fn test_unaddressable_capacity_is_too_large() {
    let item_set = ItemSet::from_parts(vec![1, 2], vec![1, 1], u64::MAX).unwrap();
    assert!(matches!(
        ExactDpSolver::solve(&item_set),
        Err(Error::TableTooLarge { items: 2, .. })
    ));
}

#[test]
fn test_smaller_capacity() {
    let item_set = ItemSet::new(&[(60, 10), (100, 20), (120, 30)], 50).unwrap();
    let (best, memo) = ExactDpSolver::solve_with_capacity(&item_set, 30).unwrap();
    assert_eq!(best, 160);
    assert_eq!(memo.capacity(), 30);
    assert_eq!(
        SolutionReconstructor::reconstruct(&item_set, &memo),
        vec![true, true, false]
    );
}
