use std::fmt::Debug;

use crate::patterns;
use crate::Sort;

#[cfg(not(feature = "large_test_sizes"))]
pub const TEST_SIZES: [usize; 16] = [0, 1, 2, 3, 4, 5, 7, 8, 15, 16, 17, 31, 64, 100, 257, 500];

#[cfg(feature = "large_test_sizes")]
pub const TEST_SIZES: [usize; 18] = [
    0, 1, 2, 3, 4, 5, 7, 8, 15, 16, 17, 31, 64, 100, 257, 500, 1_000, 2_048,
];

fn sort_comp<T, S>(v: &mut [T])
where
    T: Ord + Copy + Debug,
    S: Sort,
{
    let seed = patterns::random_init_seed();

    let mut expected = v.to_vec();
    expected.sort();

    S::sort(v);

    assert_eq!(
        v,
        expected.as_slice(),
        "{} failed for len {}, seed {seed}",
        S::name(),
        v.len()
    );
}

fn test_impl<S: Sort>(pattern_fn: impl Fn(usize) -> Vec<i32>) {
    for test_len in TEST_SIZES {
        let mut test_data = pattern_fn(test_len);
        sort_comp::<i32, S>(test_data.as_mut_slice());
    }
}

pub fn basic<S: Sort>() {
    sort_comp::<i32, S>(&mut []);
    sort_comp::<(), S>(&mut []);
    sort_comp::<(), S>(&mut [()]);
    sort_comp::<(), S>(&mut [(), ()]);
    sort_comp::<(), S>(&mut [(), (), ()]);
    sort_comp::<i32, S>(&mut [2, 3]);
    sort_comp::<i32, S>(&mut [2, 3, 6]);
    sort_comp::<i32, S>(&mut [2, 3, 99, 6]);
    sort_comp::<i32, S>(&mut [2, 7709, 400, 90932]);
    sort_comp::<i32, S>(&mut [15, -1, 3, -1, -3, -1, 7]);
    sort_comp::<i32, S>(&mut [5, 3, 8, 1]);
    sort_comp::<i32, S>(&mut [4, 2, 5, 1, 3]);
    sort_comp::<i32, S>(&mut [3, 1, 2]);
}

pub fn fixed_seed<S: Sort>() {
    let fixed_seed_a = patterns::random_init_seed();
    let fixed_seed_b = patterns::random_init_seed();

    assert_eq!(fixed_seed_a, fixed_seed_b);
}

pub fn random<S: Sort>() {
    test_impl::<S>(patterns::random);
}

pub fn random_dense<S: Sort>() {
    test_impl::<S>(patterns::random_dense);
}

pub fn random_binary<S: Sort>() {
    test_impl::<S>(|len| patterns::random_uniform(len, 0..2));
}

pub fn random_permutation<S: Sort>() {
    test_impl::<S>(patterns::random_permutation);
}

pub fn random_zipf<S: Sort>() {
    test_impl::<S>(|len| patterns::random_zipf(len, 1.0));
}

pub fn all_equal<S: Sort>() {
    test_impl::<S>(patterns::all_equal);
}

pub fn ascending<S: Sort>() {
    test_impl::<S>(patterns::ascending);
}

pub fn descending<S: Sort>() {
    test_impl::<S>(patterns::descending);
}

pub fn saw_mixed<S: Sort>() {
    test_impl::<S>(|len| patterns::saw_mixed(len, ((len as f64).log2().round()) as usize));
}

pub fn pipe_organ<S: Sort>() {
    test_impl::<S>(patterns::pipe_organ);
}

pub fn extreme_values<S: Sort>() {
    sort_comp::<i32, S>(&mut [i32::MAX, i32::MIN, 0, -1, i32::MAX, 1, i32::MIN]);
    sort_comp::<i64, S>(&mut [i64::MIN, 1 << 40, -(1 << 40), i64::MAX, 0]);
    sort_comp::<u64, S>(&mut [u64::MAX, 0, 1, u64::MAX - 1, 1 << 63]);
    sort_comp::<u8, S>(&mut [200, 50, 100, 150, 25, 0, 255]);
}

pub fn already_sorted_is_unchanged<S: Sort>() {
    for test_len in TEST_SIZES {
        let mut v = patterns::random(test_len);
        S::sort(&mut v);
        let once = v.clone();

        S::sort(&mut v);
        assert_eq!(v, once, "{} changed sorted input of len {test_len}", S::name());
    }
}

pub fn sort_by_reverse<S: Sort>() {
    for test_len in TEST_SIZES {
        let mut v = patterns::random(test_len);

        let mut expected = v.clone();
        expected.sort_by(|a, b| b.cmp(a));

        S::sort_by(&mut v, |a, b| b.cmp(a));
        assert_eq!(v, expected, "{} reverse failed for len {test_len}", S::name());
    }
}

pub fn sort_by_key_only<S: Sort>() {
    // Sorting on a projection must still keep every element.
    let mut v: Vec<(i32, u32)> = patterns::random_dense(500)
        .into_iter()
        .zip(0..)
        .collect();

    let mut before = v.clone();
    S::sort_by(&mut v, |a, b| a.0.cmp(&b.0));

    assert!(v.windows(2).all(|w| w[0].0 <= w[1].0));

    let mut after = v.clone();
    before.sort();
    after.sort();
    assert_eq!(before, after);
}

pub fn stability<S: Sort>() {
    for test_len in TEST_SIZES {
        // Few distinct keys, the payload records the original position.
        let mut v: Vec<(i32, usize)> = patterns::random_uniform(test_len, 0..6)
            .into_iter()
            .zip(0..)
            .collect();

        S::sort_by(&mut v, |a, b| a.0.cmp(&b.0));

        for w in v.windows(2) {
            assert!(w[0].0 <= w[1].0);
            if w[0].0 == w[1].0 {
                assert!(
                    w[0].1 < w[1].1,
                    "{} reordered equal keys at len {test_len}: {:?}",
                    S::name(),
                    w
                );
            }
        }
    }
}

#[macro_export]
macro_rules! instantiate_sort_test_inner {
    ($sort_impl:ty, $test_fn_name:ident) => {
        #[test]
        fn $test_fn_name() {
            $crate::tests::$test_fn_name::<$sort_impl>();
        }
    };
}

#[macro_export]
macro_rules! instantiate_pattern_tests {
    ($sort_impl:ty, [$($pattern:ident),*]) => {
        $crate::paste::paste! {
            $(
                #[test]
                fn [<pattern_ $pattern>]() {
                    $crate::tests::$pattern::<$sort_impl>();
                }
            )*
        }
    };
}

#[macro_export]
macro_rules! instantiate_sort_tests {
    ($sort_impl:ty) => {
        $crate::instantiate_sort_test_inner!($sort_impl, basic);
        $crate::instantiate_sort_test_inner!($sort_impl, fixed_seed);
        $crate::instantiate_sort_test_inner!($sort_impl, extreme_values);
        $crate::instantiate_sort_test_inner!($sort_impl, already_sorted_is_unchanged);
        $crate::instantiate_sort_test_inner!($sort_impl, sort_by_reverse);
        $crate::instantiate_sort_test_inner!($sort_impl, sort_by_key_only);
        $crate::instantiate_pattern_tests!(
            $sort_impl,
            [
                random,
                random_dense,
                random_binary,
                random_permutation,
                random_zipf,
                all_equal,
                ascending,
                descending,
                saw_mixed,
                pipe_organ
            ]
        );
    };
}

#[macro_export]
macro_rules! instantiate_stable_sort_tests {
    ($sort_impl:ty) => {
        $crate::instantiate_sort_test_inner!($sort_impl, stability);
    };
}
