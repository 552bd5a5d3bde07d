const NUM_OF_OPERATIONS: usize = 10_000;
const KEY_RANGE: u32 = 1_000;

macro_rules! ordered_set_tests {
    ($($module_name:ident: $type_name:ident$(,)*)*) => {
        $(
            mod $module_name {
                use balance_trees::$module_name::$type_name;
                use balance_trees::OrderedSet;
                use rand::Rng;
                use std::collections::BTreeSet;
                use super::{KEY_RANGE, NUM_OF_OPERATIONS};

                #[test]
                fn int_test_ordered_set() {
                    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
                    let mut set = $type_name::new();
                    let mut expected = BTreeSet::new();

                    for _ in 0..NUM_OF_OPERATIONS {
                        let key = rng.gen_range(0, KEY_RANGE);

                        match rng.gen_range(0, 3) {
                            0 => {
                                set.insert(key);
                                expected.insert(key);
                            },
                            1 => {
                                set.delete(&key);
                                expected.remove(&key);
                            },
                            _ => assert_eq!(set.find(&key), expected.contains(&key)),
                        }

                        assert_eq!(set.len(), expected.len());
                        assert_eq!(set.validate(), Ok(()));
                    }

                    assert_eq!(set.min(), expected.iter().next());
                    assert_eq!(set.max(), expected.iter().next_back());

                    let keys = expected.iter().cloned().collect::<Vec<u32>>();
                    for key in keys {
                        assert!(set.find(&key));
                        set.delete(&key);
                        assert!(!set.find(&key));
                        assert_eq!(set.validate(), Ok(()));
                    }

                    assert!(set.is_empty());
                    assert_eq!(set.height(), -1);
                }

                #[test]
                fn int_test_idempotent_operations() {
                    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
                    let mut set = $type_name::new();

                    for _ in 0..NUM_OF_OPERATIONS {
                        let key = rng.gen_range(0, KEY_RANGE);
                        set.insert(key);
                        let len = set.len();
                        let render = set.render();
                        set.insert(key);
                        assert_eq!(set.len(), len);
                        assert_eq!(set.render(), render);

                        let absent = KEY_RANGE + rng.gen_range(0, KEY_RANGE);
                        set.delete(&absent);
                        assert_eq!(set.len(), len);
                    }
                    assert_eq!(set.validate(), Ok(()));
                }

                #[test]
                fn int_test_trait_object() {
                    fn exercise(set: &mut dyn OrderedSet<u32>) {
                        assert!(set.is_empty());
                        assert_eq!(set.height(), -1);
                        for key in 0..64 {
                            set.insert(key);
                        }
                        assert_eq!(set.len(), 64);
                        assert!(set.height() >= 3);
                        for key in (0..64).filter(|key| key % 2 == 0) {
                            set.delete(&key);
                        }
                        assert_eq!(set.len(), 32);
                        assert!(set.find(&63));
                        assert!(!set.find(&62));
                    }

                    let mut set = $type_name::new();
                    exercise(&mut set);
                    assert_eq!(set.validate(), Ok(()));
                }
            }
        )*
    }
}

ordered_set_tests!(
    avl_tree: AvlTree,
    red_black_tree: RedBlackTree,
    splay_tree: SplayTree,
    tree234: Tree234,
);
