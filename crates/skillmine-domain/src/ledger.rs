//! Evidence ledger
//!
//! Accumulates `(skill, repo, weight, reason)` observations, deduplicates them on
//! `(skill, repo, reason)`, caps the admitted weight per `(skill, repo)` pair and
//! aggregates everything into a deterministic ranking.

use crate::Evidence;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

/// Default ceiling for the cumulated weight of one skill in one repository
pub const DEFAULT_CAP: f64 = 5.0;

/// Per-skill ceilings tighter than [`DEFAULT_CAP`]
///
/// Notebook bytes are a weak signal, so Jupyter is capped lower.
pub fn default_skill_caps() -> HashMap<String, f64> {
    HashMap::from([("Jupyter".to_string(), 2.0)])
}

/// One row of the aggregated ranking
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedSkill {
    /// Canonical skill name
    pub skill: String,

    /// Sum of admitted weights across all repositories
    pub score: f64,

    /// Number of distinct repositories contributing to this skill
    pub repos: usize,

    /// Every admitted citation line, in insertion order
    pub evidence: Vec<String>,
}

/// Capping, deduplicating evidence store
///
/// A ledger assumes a single writer. One ledger is filled per repository scan and
/// then merged into the process-wide ledger with [`Ledger::merge_from`].
#[derive(Debug, Clone)]
pub struct Ledger {
    evidence: HashMap<String, Vec<Evidence>>,
    skill_order: Vec<String>,
    caps: HashMap<(String, String), f64>,
    seen: HashSet<(String, String, String)>,
    default_cap: f64,
    skill_caps: HashMap<String, f64>,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    /// Create an empty ledger with the default per-skill caps
    pub fn new() -> Self {
        Self::with_skill_caps(default_skill_caps())
    }

    /// Create an empty ledger with a caller-supplied per-skill cap table
    pub fn with_skill_caps(skill_caps: HashMap<String, f64>) -> Self {
        Self::with_caps(DEFAULT_CAP, skill_caps)
    }

    /// Create an empty ledger whose [`Ledger::add`] caps at `default_cap`
    pub fn with_caps(default_cap: f64, skill_caps: HashMap<String, f64>) -> Self {
        Self {
            evidence: HashMap::new(),
            skill_order: Vec::new(),
            caps: HashMap::new(),
            seen: HashSet::new(),
            default_cap,
            skill_caps,
        }
    }

    /// Cap applied by [`Ledger::add`] and [`Ledger::merge_from`]
    pub fn default_cap(&self) -> f64 {
        self.default_cap
    }

    /// Per-skill cap table used by this ledger
    pub fn skill_caps(&self) -> &HashMap<String, f64> {
        &self.skill_caps
    }

    /// Add an observation under this ledger's default cap
    pub fn add(&mut self, skill: &str, repo: &str, weight: f64, reason: &str) {
        self.add_with_cap(skill, repo, weight, reason, self.default_cap);
    }

    /// Add an observation under an explicit cap
    ///
    /// Never fails: duplicates and observations over the cap degrade to no-ops.
    /// The dedup key is marked seen even when nothing is admitted.
    pub fn add_with_cap(&mut self, skill: &str, repo: &str, weight: f64, reason: &str, cap: f64) {
        let key = (skill.to_string(), repo.to_string(), reason.to_string());
        if !self.seen.insert(key) {
            return;
        }

        // f64::min would swallow a NaN weight
        if weight.is_nan() || weight <= 0.0 {
            return;
        }

        let effective_cap = match self.skill_caps.get(skill) {
            Some(&override_cap) => cap.min(override_cap),
            None => cap,
        };

        let cap_key = (skill.to_string(), repo.to_string());
        let current = self.caps.get(&cap_key).copied().unwrap_or(0.0);
        let allowed = (effective_cap - current).max(0.0);
        let admitted = weight.min(allowed);
        if admitted <= 0.0 {
            return;
        }

        self.caps.insert(cap_key, current + admitted);
        if !self.evidence.contains_key(skill) {
            self.skill_order.push(skill.to_string());
        }
        self.evidence
            .entry(skill.to_string())
            .or_default()
            .push(Evidence::new(skill, repo, admitted, reason));
    }

    /// Re-add every admitted entry of `other` through [`Ledger::add`]
    pub fn merge_from(&mut self, other: &Ledger) {
        for evidence in other.iter() {
            self.add(&evidence.skill, &evidence.repo, evidence.weight, &evidence.reason);
        }
    }

    /// Admitted evidence in skill first-seen order, then insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Evidence> {
        self.skill_order
            .iter()
            .filter_map(|skill| self.evidence.get(skill))
            .flatten()
    }

    /// Admitted evidence for one skill
    pub fn evidence_for(&self, skill: &str) -> &[Evidence] {
        self.evidence.get(skill).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Cumulated admitted weight for a `(skill, repo)` pair
    pub fn admitted_weight(&self, skill: &str, repo: &str) -> f64 {
        self.caps
            .get(&(skill.to_string(), repo.to_string()))
            .copied()
            .unwrap_or(0.0)
    }

    /// Number of skills with at least one admitted entry
    pub fn skill_count(&self) -> usize {
        self.skill_order.len()
    }

    /// True when nothing has been admitted
    pub fn is_empty(&self) -> bool {
        self.skill_order.is_empty()
    }

    /// Aggregate into a ranking
    ///
    /// Sorted by descending score, then descending repository count, then
    /// case-insensitive name. The raw name breaks the last tie so the order is total.
    pub fn aggregate(&self) -> Vec<AggregatedSkill> {
        let mut out: Vec<AggregatedSkill> = self
            .skill_order
            .iter()
            .filter_map(|skill| self.evidence.get(skill).map(|entries| (skill, entries)))
            .map(|(skill, entries)| {
                let score = entries.iter().map(|e| e.weight).sum();
                let repos = entries
                    .iter()
                    .map(|e| e.repo.as_str())
                    .collect::<HashSet<_>>()
                    .len();
                AggregatedSkill {
                    skill: skill.clone(),
                    score,
                    repos,
                    evidence: entries.iter().map(Evidence::line).collect(),
                }
            })
            .collect();

        out.sort_by(compare_ranking);
        out
    }
}

fn compare_ranking(a: &AggregatedSkill, b: &AggregatedSkill) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| b.repos.cmp(&a.repos))
        .then_with(|| a.skill.to_lowercase().cmp(&b.skill.to_lowercase()))
        .then_with(|| a.skill.cmp(&b.skill))
}
