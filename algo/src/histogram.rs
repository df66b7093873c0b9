use std::collections::BTreeMap;

/// Age at death → number of cells killed in the killzone at that age.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct KillHistogram {
  buckets: BTreeMap<u32, u64>,
}

impl KillHistogram {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn record(&mut self, age: u32) {
    *self.buckets.entry(age).or_insert(0) += 1;
  }

  pub fn merge(&mut self, ages: &[u32]) {
    for &age in ages {
      self.record(age);
    }
  }

  pub fn get(&self, age: u32) -> u64 {
    self.buckets.get(&age).copied().unwrap_or(0)
  }

  /// Sum over all buckets.
  pub fn total(&self) -> u64 {
    self.buckets.values().sum()
  }

  pub fn is_empty(&self) -> bool {
    self.buckets.is_empty()
  }

  /// Buckets in ascending age.
  pub fn iter(&self) -> impl Iterator<Item = (u32, u64)> + '_ {
    self.buckets.iter().map(|(&age, &count)| (age, count))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn merge_accumulates() {
    let mut h = KillHistogram::new();
    assert!(h.is_empty());
    h.merge(&[3, 0, 3]);
    h.merge(&[]);
    h.record(1);

    assert_eq!(h.get(3), 2);
    assert_eq!(h.get(0), 1);
    assert_eq!(h.get(2), 0);
    assert_eq!(h.total(), 4);
    assert_eq!(h.iter().collect::<Vec<_>>(), vec![(0, 1), (1, 1), (3, 2)]);
  }
}
