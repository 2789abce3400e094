//! Group labels and the policy that decides which constraints run.
//!
//! A constraint with no labels is in the implicit default group. Whether
//! such a constraint runs when the caller asks for specific groups is a
//! policy decision, spelled out by [`GroupPolicy`] rather than left to
//! empty-set arithmetic.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

// ============================================================================
// GROUPS
// ============================================================================

/// The group labels attached to one constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Groups {
    labels: SmallVec<[Cow<'static, str>; 2]>,
}

impl Groups {
    /// Creates an empty label set (the default group).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a label, ignoring duplicates.
    pub fn insert(&mut self, label: impl Into<Cow<'static, str>>) {
        let label = label.into();
        if !self.contains(&label) {
            self.labels.push(label);
        }
    }

    /// Returns true if the label is present.
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    /// Returns true if any requested group is one of these labels.
    #[must_use]
    pub fn intersects(&self, requested: &[&str]) -> bool {
        requested.iter().any(|group| self.contains(group))
    }

    /// Returns true when no labels are attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Number of labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Iterates over the labels in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(AsRef::as_ref)
    }
}

impl<S> FromIterator<S> for Groups
where
    S: Into<Cow<'static, str>>,
{
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut groups = Groups::new();
        for label in iter {
            groups.insert(label);
        }
        groups
    }
}

// ============================================================================
// GROUP POLICY
// ============================================================================

/// How ungrouped constraints behave when specific groups are requested.
///
/// Whatever the policy, a run that requests no groups executes every
/// constraint, and a labelled constraint runs when one of its labels is
/// requested.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupPolicy {
    /// Ungrouped constraints run for every request.
    #[default]
    UngroupedAlwaysRun,
    /// Ungrouped constraints belong to the default group and only run when
    /// that group is requested (or nothing is).
    DefaultGroupOnly,
}

impl GroupPolicy {
    /// Decides whether a constraint with `groups` runs for `requested`.
    ///
    /// `default_group` is only consulted by [`GroupPolicy::DefaultGroupOnly`].
    #[must_use]
    pub fn is_active(self, groups: &Groups, requested: &[&str], default_group: &str) -> bool {
        if requested.is_empty() {
            return true;
        }
        if groups.is_empty() {
            return match self {
                GroupPolicy::UngroupedAlwaysRun => true,
                GroupPolicy::DefaultGroupOnly => requested.contains(&default_group),
            };
        }
        groups.intersects(requested)
    }
}

// ============================================================================
// TESTS
// ============================================================================
