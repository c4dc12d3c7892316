pub struct AssocBag<T>(Vec<(T, usize)>);

impl<T: Eq> AssocBag<T> {
    pub fn new() -> Self { Self(vec![]) }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }
    pub fn len(&self) -> usize { self.0.len() }
    pub fn total(&self) -> usize { self.0.iter().map(|&(_, k)| k).sum() }

    pub fn insert(&mut self, elt: T) {
        if let Some((_, k)) = self.0.iter_mut().find(|(e, _)| e == &elt) {
            *k += 1;
        } else {
            self.0.push((elt, 1));
        }
    }

    pub fn contains(&self, elt: &T) -> bool { self.amount(elt) > 0 }
    pub fn amount(&self, elt: &T) -> usize {
        self.0.iter().find(|(e, _)| e == elt).map_or(0, |&(_, k)| k)
    }

    pub fn sorted(&self) -> Vec<&T>
    where
        T: Ord,
    {
        let mut res: Vec<_> = self.0.iter().map(|(e, _)| e).collect();
        res.sort_unstable();
        res
    }
}

impl<T: Eq> Default for AssocBag<T> {
    fn default() -> Self { Self::new() }
}

#[test]
fn sanity_check() {
    let mut bag = AssocBag::new();
    assert!(bag.is_empty());
    assert_eq!(bag.amount(&"zero"), 0);

    bag.insert("two");
    bag.insert("zero");
    bag.insert("two");
    assert_eq!(bag.len(), 2);
    assert_eq!(bag.total(), 3);
    assert_eq!(bag.amount(&"two"), 2);
    assert_eq!(bag.amount(&"zero"), 1);
    assert!(bag.contains(&"zero"));
    assert!(!bag.contains(&"one"));
    assert_eq!(bag.sorted(), [&"two", &"zero"]);
}
