use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;
use std::collections::BTreeSet;

const NUM_OF_OPERATIONS: usize = 100;

fn bench_btreeset_insert(c: &mut Criterion) {
    c.bench_function("bench btreeset insert", |b| {
        b.iter(|| {
            let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
            let mut set = BTreeSet::new();
            for _ in 0..NUM_OF_OPERATIONS {
                set.insert(rng.next_u32());
            }
        })
    });
}

fn bench_btreeset_find(c: &mut Criterion) {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut set = BTreeSet::new();
    let mut values = Vec::new();
    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.next_u32();
        set.insert(key);
        values.push(key);
    }

    c.bench_function("bench btreeset find", move |b| {
        b.iter(|| {
            for key in &values {
                black_box(set.contains(key));
            }
        })
    });
}

fn bench_btreeset_delete(c: &mut Criterion) {
    c.bench_function("bench btreeset delete", |b| {
        b.iter(|| {
            let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
            let mut set = BTreeSet::new();
            let mut values = Vec::new();
            for _ in 0..NUM_OF_OPERATIONS {
                let key = rng.next_u32();
                set.insert(key);
                values.push(key);
            }
            for key in &values {
                set.remove(key);
            }
        })
    });
}

macro_rules! bst_set_benches {
    ($($module_name:ident: $type_name:ident,)*) => {
        $(
            mod $module_name {
                use balance_trees::$module_name::$type_name;
                use rand::Rng;
                use super::NUM_OF_OPERATIONS;
                use criterion::{Criterion, black_box};

                pub fn bench_insert(c: &mut Criterion) {
                    c.bench_function(&format!("bench {} insert", stringify!($module_name)), |b| b.iter(|| {
                        let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
                        let mut set = $type_name::new();
                        for _ in 0..NUM_OF_OPERATIONS {
                            set.insert(rng.next_u32());
                        }
                    }));
                }

                pub fn bench_find(c: &mut Criterion) {
                    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
                    let mut set = $type_name::new();
                    let mut values = Vec::new();

                    for _ in 0..NUM_OF_OPERATIONS {
                        let key = rng.next_u32();
                        set.insert(key);
                        values.push(key);
                    }

                    c.bench_function(&format!("bench {} find", stringify!($module_name)), move |b| b.iter(|| {
                        for key in &values {
                            black_box(set.find(key));
                        }
                    }));
                }

                pub fn bench_delete(c: &mut Criterion) {
                    c.bench_function(&format!("bench {} delete", stringify!($module_name)), |b| b.iter(|| {
                        let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
                        let mut set = $type_name::new();
                        let mut values = Vec::new();
                        for _ in 0..NUM_OF_OPERATIONS {
                            let key = rng.next_u32();
                            set.insert(key);
                            values.push(key);
                        }
                        for key in &values {
                            set.delete(key);
                        }
                    }));
                }
            }
        )*
    }
}

bst_set_benches!(
    avl_tree: AvlTree,
    red_black_tree: RedBlackTree,
    splay_tree: SplayTree,
    tree234: Tree234,
);

criterion_group!(
    benches,
    bench_btreeset_insert,
    bench_btreeset_find,
    bench_btreeset_delete,
    avl_tree::bench_insert,
    avl_tree::bench_find,
    avl_tree::bench_delete,
    red_black_tree::bench_insert,
    red_black_tree::bench_find,
    red_black_tree::bench_delete,
    splay_tree::bench_insert,
    splay_tree::bench_find,
    splay_tree::bench_delete,
    tree234::bench_insert,
    tree234::bench_find,
    tree234::bench_delete,
);
criterion_main!(benches);
