/// Sums values by key over a fixed set of keys chosen at construction. Every
/// key starts at `V::default()`, so keys that never receive a value are still
/// reported. Iteration is in key order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aggregate<K, V> {
    m: std::collections::BTreeMap<K, V>,
    sum: V,
}

impl<K, V> Aggregate<K, V>
where
    K: Ord,
    V: Default,
{
    pub fn with_keys<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        Self {
            m: keys.into_iter().map(|k| (k, V::default())).collect(),
            sum: V::default(),
        }
    }
}

impl<K, V> Aggregate<K, V> {
    pub fn sum(&self) -> V
    where
        V: Copy,
    {
        self.sum
    }

    /// Adds `value` to `key`'s total. Returns `false` and leaves the aggregate
    /// unmodified if `key` is not tracked.
    pub fn add(&mut self, key: K, value: V) -> bool
    where
        K: Ord,
        V: Copy + std::ops::AddAssign,
    {
        match self.m.get_mut(&key) {
            Some(total) => {
                *total += value;
                self.sum += value;
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (K, V)> + '_
    where
        K: Copy,
        V: Copy,
    {
        self.m.iter().map(|(&k, &v)| (k, v))
    }
}
