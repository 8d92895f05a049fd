//! # Thread Utilities

use core::num::NonZeroUsize;
use std::thread;

/// The search list of environment variables that Rayon uses to control parallelism.
#[cfg(feature = "rayon")]
const RAYON_VARS: &[&str] = &["RAYON_NUM_THREADS", "RAYON_RS_NUM_CPUS"];

/// Get the max parallelism available.
///
/// When `rayon` is enabled, will scan over `RAYON_VARS`.
pub fn est_max_parallelism() -> usize {
    let default = || {
        thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
    };

    #[cfg(feature = "rayon")]
    for name in RAYON_VARS {
        if let Some(x @ 1..) = std::env::var(name).ok().and_then(|s| s.parse::<usize>().ok()) {
            return x;
        }
    }

    default()
}

/// Resolve the max pool size.
///
/// ``min(max_pool, thread::available_parallelism() || RAYON_NUM_THREADS)``
pub fn resolve_max_pool(max_pool: Option<NonZeroUsize>) -> usize {
    let sys_max = est_max_parallelism();

    let max_pool = max_pool.map(|x| x.get()).unwrap_or(sys_max);

    core::cmp::min(max_pool, sys_max)
}

/// Split `len` items into `num_shards` contiguous ranges.
///
/// The first `len % num_shards` shards take one extra item; shards may be
/// empty when `len < num_shards`.
pub fn shard_ranges(
    len: usize,
    num_shards: NonZeroUsize,
) -> Vec<core::ops::Range<usize>> {
    let n = num_shards.get();
    let base = len / n;
    let extra = len % n;

    let mut start = 0;
    (0..n)
        .map(|idx| {
            let size = base + usize::from(idx < extra);
            let range = start..start + size;
            start += size;
            range
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::env;

    use serial_test::serial;

    use super::*;
    use crate::types::CommonHashMap;

    /// Run `f` with every rayon variable cleared, restoring them afterwards.
    #[cfg_attr(not(feature = "rayon"), allow(unused_mut))]
    fn with_clean_env<F: FnOnce()>(f: F) {
        let mut orig_env: CommonHashMap<String, Option<String>> = Default::default();

        #[cfg(feature = "rayon")]
        for name in RAYON_VARS {
            orig_env.insert(name.to_string(), env::var(name).ok());
            unsafe { env::remove_var(name) };
        }

        f();

        for (name, val) in orig_env {
            match val {
                Some(s) => unsafe { env::set_var(name, s) },
                None => unsafe { env::remove_var(name) },
            }
        }
    }

    #[test]
    #[serial]
    fn test_est_max_parallelism() {
        with_clean_env(|| {
            let base = est_max_parallelism();
            assert!(base >= 1);

            #[cfg(feature = "rayon")]
            for name in RAYON_VARS {
                unsafe { env::set_var(name, format!("{}", base + 12)) };
                assert_eq!(est_max_parallelism(), base + 12);

                unsafe { env::set_var(name, "0") };
                assert_eq!(est_max_parallelism(), base);

                unsafe { env::remove_var(name) };
            }

            assert_eq!(est_max_parallelism(), base);
        });
    }

    #[test]
    #[serial]
    fn test_resolve_max_pool() {
        with_clean_env(|| {
            let sys_max = est_max_parallelism();
            assert_eq!(resolve_max_pool(None), sys_max);
            assert_eq!(resolve_max_pool(NonZeroUsize::new(1)), 1);
            assert_eq!(resolve_max_pool(NonZeroUsize::new(sys_max + 5)), sys_max);
        });
    }

    #[test]
    fn test_shard_ranges() {
        let four = NonZeroUsize::new(4).unwrap();
        assert_eq!(shard_ranges(10, four), vec![0..3, 3..6, 6..8, 8..10]);
        assert_eq!(shard_ranges(2, four), vec![0..1, 1..2, 2..2, 2..2]);
        assert_eq!(shard_ranges(0, four), vec![0..0; 4]);

        let one = NonZeroUsize::new(1).unwrap();
        assert_eq!(shard_ranges(7, one), vec![0..7]);
    }
}
