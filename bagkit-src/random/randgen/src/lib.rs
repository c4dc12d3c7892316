use std::{collections::BTreeSet, ops::Range};

use rand::{
    distributions::{Distribution, Uniform},
    seq::SliceRandom,
    Rng,
};

pub trait Gen {
    type Output;
    fn generate<R: Rng>(&self, rng: &mut R) -> Self::Output;
}

/// A uniformly random permutation of `bound`.
pub struct Shuffled<B> {
    pub bound: B,
}

/// `len` independent uniform draws from `bound`.
pub struct Draws<B> {
    pub bound: B,
    pub len: usize,
}

/// `len` distinct values from `bound`, ascending.
pub struct StrictAsc<B> {
    pub bound: B,
    pub len: usize,
}

impl Gen for Range<i32> {
    type Output = i32;
    fn generate<R: Rng>(&self, rng: &mut R) -> Self::Output {
        let between = Uniform::from(self.clone());
        between.sample(rng)
    }
}

impl Gen for Shuffled<Range<i32>> {
    type Output = Vec<i32>;
    fn generate<R: Rng>(&self, rng: &mut R) -> Self::Output {
        let mut res: Vec<_> = self.bound.clone().collect();
        res.shuffle(rng);
        res
    }
}

impl Gen for Draws<Range<i32>> {
    type Output = Vec<i32>;
    fn generate<R: Rng>(&self, rng: &mut R) -> Self::Output {
        let between = Uniform::from(self.bound.clone());
        (0..self.len).map(|_| between.sample(rng)).collect()
    }
}

impl Gen for StrictAsc<Range<i32>> {
    type Output = Vec<i32>;
    fn generate<R: Rng>(&self, rng: &mut R) -> Self::Output {
        let Self { bound: Range { start, end }, len } = self;
        let n = (end - start) as usize;
        assert!(*len <= n, "cannot pick {len} distinct values out of {n}");

        // pick the complement instead when it is the smaller side
        let dense = 2 * len > n;
        let count = if dense { n - len } else { *len };

        let mut seen = BTreeSet::new();
        while seen.len() < count {
            seen.insert((*start..*end).generate(rng));
        }

        if dense {
            (*start..*end).filter(|x| !seen.contains(x)).collect()
        } else {
            seen.into_iter().collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    use crate::*;

    fn assert_uniform<K: Ord>(map: &BTreeMap<K, usize>, n: usize, k: usize) {
        assert_eq!(map.len(), k);
        for &v in map.values() {
            assert!(v >= (n / k) * 97 / 100);
            assert!(v <= (n / k) * 103 / 100);
        }
    }

    #[test]
    fn uniformity() {
        let mut rng = ChaCha20Rng::from_seed([0; 32]);
        let n = 10_usize.pow(5);

        let mut map = BTreeMap::new();
        for _ in 0..n {
            let tmp = Shuffled { bound: 0..3 }.generate(&mut rng);
            *map.entry(tmp).or_insert(0) += 1;
        }
        assert_uniform(&map, n, 6);

        let mut map = BTreeMap::new();
        for _ in 0..n {
            let tmp = StrictAsc { bound: 0..4, len: 3 }.generate(&mut rng);
            *map.entry(tmp).or_insert(0) += 1;
        }
        assert_uniform(&map, n, 4);

        let mut map = BTreeMap::new();
        for x in (Draws { bound: 0..4, len: n }).generate(&mut rng) {
            *map.entry(x).or_insert(0) += 1;
        }
        assert_uniform(&map, n, 4);
    }

    #[test]
    fn shapes() {
        let mut rng = ChaCha20Rng::from_seed([0; 32]);

        let mut perm = Shuffled { bound: -5..5 }.generate(&mut rng);
        perm.sort_unstable();
        assert_eq!(perm, (-5..5).collect::<Vec<_>>());

        for len in [0, 1, 10, 90, 100] {
            let asc = StrictAsc { bound: 0..100, len }.generate(&mut rng);
            assert_eq!(asc.len(), len);
            assert!(asc.windows(2).all(|w| w[0] < w[1]));
            assert!(asc.iter().all(|x| (0..100).contains(x)));
        }

        let draws = Draws { bound: 7..9, len: 50 }.generate(&mut rng);
        assert_eq!(draws.len(), 50);
        assert!(draws.iter().all(|x| (7..9).contains(x)));
    }
}
