//! Profile registry
//!
//! A `TypeId`-keyed index of described types. Registration captures the
//! canonical profile once; classification queries run against the stored
//! profiles through an attached [`Classifier`].

use core::any::TypeId;

use rustc_hash::FxHashMap;

use super::classify::{Classifier, ClassifyReport};
use super::{AdaptorProfile, Profiled};

/// Store of profiles with an attached classifier.
pub struct ProfileRegistry {
    profiles: FxHashMap<TypeId, AdaptorProfile>,
    classifier: Classifier,
}

impl Default for ProfileRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileRegistry {
    /// Empty registry with the default rule set.
    pub fn new() -> Self {
        ProfileRegistry {
            profiles: FxHashMap::default(),
            classifier: Classifier::with_defaults(),
        }
    }

    /// Empty registry evaluating through `classifier` instead.
    pub fn with_classifier(classifier: Classifier) -> Self {
        ProfileRegistry {
            profiles: FxHashMap::default(),
            classifier,
        }
    }

    /// Record the canonical profile of `T`. Re-registering replaces the
    /// stored entry.
    pub fn register<T: Profiled + 'static>(&mut self) {
        self.profiles.insert(TypeId::of::<T>(), T::profile());
    }

    /// Stored profile of `T`, if registered.
    pub fn profile_of<T: 'static>(&self) -> Option<&AdaptorProfile> {
        self.profiles.get(&TypeId::of::<T>())
    }

    /// Classify the stored profile of `T`.
    pub fn classify<T: 'static>(&self) -> Option<ClassifyReport> {
        self.profile_of::<T>().map(|p| self.classifier.classify(p))
    }

    /// Profiles whose subjects classify as adaptors.
    pub fn conforming(&self) -> impl Iterator<Item = &AdaptorProfile> + '_ {
        self.profiles
            .values()
            .filter(|p| self.classifier.classify(p).is_adaptor())
    }

    /// Number of registered profiles.
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
