//! Conformance profiles
//!
//! The type system claims protocol membership ([`AdaptorMark`]) but cannot
//! rule anything out: a stray claim for some other type is just as
//! expressible as the honest self-claim. Exactness lives here, in data. An
//! [`AdaptorProfile`] describes one candidate type; the [`classify`] engine
//! evaluates the membership conditions over it and answers with diagnostics,
//! never with a failure.
//!
//! Positive declarations are honest by construction: the builder methods
//! carry the bounds they describe, so a profile cannot record a mark or an
//! accepted sequence the type does not actually have. The only way to lie
//! is by omission, which classification then surfaces.

pub mod classify;
pub mod errors;
pub mod registry;

use core::any::{type_name, TypeId};
use core::marker::PhantomData;

use serde::Serialize;

use crate::apply::ApplyOnce;
use crate::closure::AdaptorMark;
use crate::seq::Sequence;

/// Identity of a described type: its `TypeId` plus a display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TypeTag {
    #[serde(skip)]
    id: TypeId,
    name: &'static str,
}

impl TypeTag {
    /// Tag for `T`.
    pub fn of<T: 'static>() -> Self {
        TypeTag {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    /// The described type's `TypeId`.
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// The described type's name.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

/// How the subject is referred to in its description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    /// A concrete owned type.
    Owned,
    /// Described through a shared borrow.
    Shared,
    /// Described through an exclusive borrow.
    Exclusive,
}

impl Shape {
    /// Stable lowercase name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::Owned => "owned",
            Shape::Shared => "shared",
            Shape::Exclusive => "exclusive",
        }
    }
}

/// Declarative description of one candidate adaptor type.
#[derive(Debug, Clone, Serialize)]
pub struct AdaptorProfile {
    subject: TypeTag,
    shape: Shape,
    claims: Vec<TypeTag>,
    sequence: bool,
    accepts: Vec<TypeTag>,
}

impl AdaptorProfile {
    /// Start describing `T` as a concrete owned subject.
    pub fn describe<T: 'static>() -> ProfileBuilder<T> {
        ProfileBuilder {
            profile: AdaptorProfile {
                subject: TypeTag::of::<T>(),
                shape: Shape::Owned,
                claims: Vec::new(),
                sequence: false,
                accepts: Vec::new(),
            },
            _subject: PhantomData,
        }
    }

    /// Identity of the described type.
    pub fn subject(&self) -> TypeTag {
        self.subject
    }

    /// How the subject is referred to.
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Marks the subject claims.
    pub fn claims(&self) -> &[TypeTag] {
        &self.claims
    }

    /// Whether the subject is itself a sequence.
    pub fn is_sequence(&self) -> bool {
        self.sequence
    }

    /// Sequence types the subject is known to accept.
    pub fn accepts(&self) -> &[TypeTag] {
        &self.accepts
    }
}

/// Builder for [`AdaptorProfile`], parameterized by the subject so that
/// every positive declaration is backed by the bound it records.
#[derive(Debug)]
pub struct ProfileBuilder<T> {
    profile: AdaptorProfile,
    _subject: PhantomData<fn() -> T>,
}

impl<T: 'static> ProfileBuilder<T> {
    /// Record that the subject claims the mark for `D`.
    pub fn claim<D: 'static>(mut self) -> Self
    where
        T: AdaptorMark<D>,
    {
        self.profile.claims.push(TypeTag::of::<D>());
        self
    }

    /// Record that the subject is itself a sequence.
    pub fn sequence(mut self) -> Self
    where
        T: Sequence,
    {
        self.profile.sequence = true;
        self
    }

    /// Record a witness sequence type the subject accepts.
    pub fn accepts<S>(mut self) -> Self
    where
        S: Sequence + 'static,
        T: ApplyOnce<S>,
    {
        self.profile.accepts.push(TypeTag::of::<S>());
        self
    }

    /// Re-describe the subject as seen through a shared borrow.
    pub fn via_shared(mut self) -> Self {
        self.profile.shape = Shape::Shared;
        self
    }

    /// Re-describe the subject as seen through an exclusive borrow.
    pub fn via_exclusive(mut self) -> Self {
        self.profile.shape = Shape::Exclusive;
        self
    }

    /// Finish the description.
    pub fn finish(self) -> AdaptorProfile {
        self.profile
    }
}

/// Types that carry a canonical conformance profile.
pub trait Profiled {
    /// The canonical description of this type.
    fn profile() -> AdaptorProfile;
}
