use std::sync::{Mutex, PoisonError};

use anyhow::Result;
use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const CANNED_REPLIES: [&str; 5] = [
    "Our Pro plan is perfect for small teams up to 5 people! It includes 50GB storage and API access.",
    "The Business plan includes advanced features like custom branding and priority support.",
    "Yes, you can upgrade or downgrade your plan at any time!",
    "All plans come with a free trial period so you can test before you commit.",
    "Our Enterprise plan includes a dedicated account manager and unlimited users.",
];

#[async_trait]
pub trait ChatResponder: Send + Sync {
    async fn respond(&self, message: &str) -> Result<String>;
}

/// Source of uniformly distributed indices in `0..bound`.
pub trait RandomSource: Send {
    fn next_index(&mut self, bound: usize) -> usize;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadRngSource;

impl RandomSource for ThreadRngSource {
    fn next_index(&mut self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }
        rand::thread_rng().gen_range(0..bound)
    }
}

/// Reproducible picks for a given seed.
#[derive(Clone, Debug)]
pub struct SeededSource {
    rng: StdRng,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }
}

impl RandomSource for SeededSource {
    fn next_index(&mut self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }
        self.rng.gen_range(0..bound)
    }
}

/// Replays a fixed list of indices, wrapping around at the end.
#[derive(Clone, Debug, Default)]
pub struct FixedSequenceSource {
    indices: Vec<usize>,
    position: usize,
}

impl FixedSequenceSource {
    pub fn new(indices: impl Into<Vec<usize>>) -> Self {
        Self { indices: indices.into(), position: 0 }
    }
}

impl RandomSource for FixedSequenceSource {
    fn next_index(&mut self, bound: usize) -> usize {
        if bound == 0 || self.indices.is_empty() {
            return 0;
        }
        let index = self.indices[self.position % self.indices.len()];
        self.position = self.position.wrapping_add(1);
        index % bound
    }
}

/// Replies with one of [`CANNED_REPLIES`] regardless of what was asked.
pub struct CannedResponder<R> {
    source: Mutex<R>,
}

impl<R: RandomSource> CannedResponder<R> {
    pub fn new(source: R) -> Self {
        Self { source: Mutex::new(source) }
    }

    pub fn pick(&self) -> &'static str {
        let mut source = self.source.lock().unwrap_or_else(PoisonError::into_inner);
        CANNED_REPLIES[source.next_index(CANNED_REPLIES.len()) % CANNED_REPLIES.len()]
    }
}

impl Default for CannedResponder<ThreadRngSource> {
    fn default() -> Self {
        Self::new(ThreadRngSource)
    }
}

#[async_trait]
impl<R: RandomSource> ChatResponder for CannedResponder<R> {
    async fn respond(&self, _message: &str) -> Result<String> {
        Ok(self.pick().to_string())
    }
}
