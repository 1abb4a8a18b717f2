use knap_engine::{Error, Item, ItemSet, Solution, Track};
use serde_json::json;

#[test]
fn test_accessors() {
    let item_set = ItemSet::new(&[(60, 10), (100, 20)], 50).unwrap();
    assert_eq!(item_set.len(), 2);
    assert_eq!(item_set.capacity(), 50);
    assert_eq!(item_set.value(1), 100);
    assert_eq!(item_set.weight(0), 10);
    assert_eq!(
        item_set.item(1),
        Item {
            index: 1,
            value: 100,
            weight: 20
        }
    );
    assert_eq!(item_set.max_value(), 100);
    assert_eq!(item_set.table_cells(), Some(3 * 51));
}

#[test]
fn test_declared_count_must_match() {
    assert!(ItemSet::with_declared_count(2, &[(1, 1), (2, 2)], 3).is_ok());
    assert!(matches!(
        ItemSet::with_declared_count(3, &[(1, 1), (2, 2)], 3),
        Err(Error::InvalidInstance(_))
    ));
}

#[test]
fn test_parallel_arrays_must_match() {
    assert!(matches!(
        ItemSet::from_parts(vec![1, 2], vec![1], 3),
        Err(Error::InvalidInstance(_))
    ));
}

#[test]
fn test_serde_validates() {
    let item_set: ItemSet = serde_json::from_value(json!({
        "values": [60, 100, 120],
        "weights": [10, 20, 30],
        "capacity": 50
    }))
    .unwrap();
    assert_eq!(item_set.len(), 3);
    assert_eq!(
        serde_json::to_value(&item_set).unwrap(),
        json!({
            "values": [60, 100, 120],
            "weights": [10, 20, 30],
            "capacity": 50
        })
    );

    assert!(serde_json::from_value::<ItemSet>(json!({
        "values": [60, 100],
        "weights": [10],
        "capacity": 50
    }))
    .is_err());
    assert!(serde_json::from_value::<ItemSet>(json!({
        "values": [-1],
        "weights": [10],
        "capacity": 50
    }))
    .is_err());
}

#[test]
fn test_generate_instance_is_seeded() {
    let track = Track {
        num_items: 50,
        budget: 40,
    };
    let a = ItemSet::generate_instance(&[1; 32], &track).unwrap();
    let b = ItemSet::generate_instance(&[1; 32], &track).unwrap();
    let c = ItemSet::generate_instance(&[2; 32], &track).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(a.len(), 50);
    assert!(a.weights().iter().all(|&w| (1..=50).contains(&w)));
    assert_eq!(
        a.capacity(),
        (0.4 * a.weights().iter().sum::<u64>() as f64) as u64
    );
}

#[test]
fn test_evaluate_total_value() {
    let item_set = ItemSet::new(&[(60, 10), (100, 20), (120, 30)], 50).unwrap();
    assert_eq!(item_set.evaluate_total_value(&[2, 1]).unwrap(), 220);
    assert!(matches!(
        item_set.evaluate_total_value(&[1, 1]),
        Err(Error::InvalidSolution(_))
    ));
    assert!(matches!(
        item_set.evaluate_total_value(&[3]),
        Err(Error::InvalidSolution(_))
    ));
    assert!(matches!(
        item_set.evaluate_total_value(&[0, 1, 2]),
        Err(Error::InvalidSolution(_))
    ));
}

#[test]
fn test_verify_solution() {
    let item_set = ItemSet::new(&[(60, 10), (100, 20), (120, 30)], 50).unwrap();
    let solution = Solution::from_taken(&item_set, vec![false, true, true], true);
    assert_eq!(solution.total_value, 220);
    assert_eq!(solution.total_weight, 50);
    assert_eq!(item_set.verify_solution(&solution).unwrap(), 220);

    let mut wrong_value = solution.clone();
    wrong_value.total_value = 221;
    assert!(item_set.verify_solution(&wrong_value).is_err());

    let mut wrong_weight = solution.clone();
    wrong_weight.total_weight = 49;
    assert!(item_set.verify_solution(&wrong_weight).is_err());

    let short = Solution::empty(2, false);
    assert!(item_set.verify_solution(&short).is_err());
}

#[test]
fn test_totals_must_fit_in_u64() {
    let heavy_values = [(4_000_000_000_000_000_000i64, 1i64); 5];
    assert!(matches!(
        ItemSet::new(&heavy_values, 5),
        Err(Error::InvalidInstance(_))
    ));
    assert!(matches!(
        knap_engine::solve(&heavy_values, 5),
        Err(Error::InvalidInstance(_))
    ));
    assert!(matches!(
        ItemSet::from_parts(vec![1; 5], vec![4_000_000_000_000_000_000; 5], 9),
        Err(Error::InvalidInstance(_))
    ));
    assert!(matches!(
        ItemSet::from_parts(vec![u64::MAX, 1], vec![1, 1], 2),
        Err(Error::InvalidInstance(_))
    ));

    // Totals right at the limit are still accepted and solved exactly
    let item_set = ItemSet::from_parts(vec![u64::MAX - 1, 1], vec![1, 1], 2).unwrap();
    let solution = knap_engine::solve_item_set(&item_set).unwrap();
    assert_eq!(solution.total_value, u64::MAX);
    assert_eq!(solution.items(), vec![0, 1]);
}
