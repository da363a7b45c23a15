//! The in-memory fact pool — generation and random sampling.

use chrono::Utc;
use pawfeed_core::fact::{Animal, Fact};
use rand::{Rng, seq::index};

/// The generated pool the mock endpoint samples from. Built once at
/// startup; never mutated afterwards.
#[derive(Debug, Clone)]
pub struct FactPool {
  facts: Vec<Fact>,
}

impl FactPool {
  /// Generate `count` facts, alternating cat and dog, with ids
  /// `fact_0..fact_{count-1}` and a random `sentCount` per fact.
  pub fn generate(count: usize) -> Self {
    let now = Utc::now();
    let mut rng = rand::thread_rng();
    let facts = (0..count)
      .map(|i| {
        let animal = if i % 2 == 0 { Animal::Cat } else { Animal::Dog };
        Fact {
          id:         format!("fact_{i}"),
          version:    0,
          text:       format!("This is a {animal} fact number {}.", i + 1),
          animal,
          updated_at: now,
          deleted:    false,
          sent_count: rng.gen_range(0..10),
        }
      })
      .collect();
    Self { facts }
  }

  pub fn len(&self) -> usize {
    self.facts.len()
  }

  pub fn is_empty(&self) -> bool {
    self.facts.is_empty()
  }

  /// Sample up to `amount` facts matching `animal_type`, uniformly and
  /// without replacement. Returns fewer than `amount` when the filtered
  /// pool is smaller.
  ///
  /// The filter is the literal upstream contract: the exact string
  /// `"cat,dog"` disables filtering, and every other value is compared
  /// for string equality against the fact's `source` field — an unknown
  /// value matches nothing.
  pub fn sample(&self, animal_type: &str, amount: usize) -> Vec<Fact> {
    let filtered: Vec<&Fact> = if animal_type == "cat,dog" {
      self.facts.iter().collect()
    } else {
      self
        .facts
        .iter()
        .filter(|f| f.animal.as_str() == animal_type)
        .collect()
    };

    let take = amount.min(filtered.len());
    let mut rng = rand::thread_rng();
    index::sample(&mut rng, filtered.len(), take)
      .into_iter()
      .map(|i| filtered[i].clone())
      .collect()
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn generation_alternates_animals() {
    let pool = FactPool::generate(4);
    assert_eq!(pool.len(), 4);

    let animals: Vec<Animal> =
      pool.facts.iter().map(|f| f.animal).collect();
    assert_eq!(
      animals,
      [Animal::Cat, Animal::Dog, Animal::Cat, Animal::Dog]
    );
  }

  #[test]
  fn generation_numbers_ids_and_text_from_zero() {
    let pool = FactPool::generate(2);
    assert_eq!(pool.facts[0].id, "fact_0");
    assert_eq!(pool.facts[0].text, "This is a cat fact number 1.");
    assert_eq!(pool.facts[1].id, "fact_1");
    assert_eq!(pool.facts[1].text, "This is a dog fact number 2.");
  }

  #[test]
  fn generated_sent_counts_are_bounded() {
    let pool = FactPool::generate(100);
    assert!(pool.facts.iter().all(|f| f.sent_count < 10));
  }

  #[test]
  fn sample_filters_by_exact_equality() {
    let pool = FactPool::generate(10);

    let cats = pool.sample("cat", 10);
    assert_eq!(cats.len(), 5);
    assert!(cats.iter().all(|f| f.animal == Animal::Cat));

    // Anything that isn't the literal "cat,dog" is an equality filter,
    // so an unrecognised value matches nothing.
    assert!(pool.sample("bird", 10).is_empty());
    assert!(pool.sample("dog,cat", 10).is_empty());
  }

  #[test]
  fn sample_combined_literal_draws_from_whole_pool() {
    let pool = FactPool::generate(20);
    let all = pool.sample("cat,dog", 20);

    assert_eq!(all.len(), 20);
    let cats = all.iter().filter(|f| f.animal == Animal::Cat).count();
    assert_eq!(cats, 10);
  }

  #[test]
  fn sample_is_without_replacement() {
    let pool = FactPool::generate(50);
    let drawn = pool.sample("cat,dog", 50);

    let mut ids: Vec<&str> = drawn.iter().map(|f| f.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 50);
  }

  #[test]
  fn sample_caps_at_filtered_pool_size() {
    let pool = FactPool::generate(6);
    assert_eq!(pool.sample("cat,dog", 50).len(), 6);
    assert_eq!(pool.sample("dog", 50).len(), 3);
  }
}
