//! Instrumented payload and error types for the integration tests.
//!
//! The counters are per thread, so each test sees only its own activity
//! once it has called `reset`.

#![allow(dead_code)]

use std::{
    any::TypeId,
    cell::RefCell,
    collections::HashMap,
    mem,
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Counts {
    pub clones: u32,
    pub clone_froms: u32,
    pub drops: u32,
    pub swaps: u32,
}

thread_local! {
    static COUNTS: RefCell<HashMap<TypeId, Counts>> = RefCell::new(HashMap::new());
}

fn bump<X: 'static>(update: impl FnOnce(&mut Counts)) {
    COUNTS.with(|counts| update(counts.borrow_mut().entry(TypeId::of::<X>()).or_default()));
}

/// Wraps `X` and counts how often it is cloned, clone-assigned, dropped
/// and swapped, separately for every `X`.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Counted<X: 'static> {
    pub inner: X,
}

impl<X: 'static> Counted<X> {
    pub fn new(inner: X) -> Self {
        Self { inner }
    }

    pub fn reset() {
        COUNTS.with(|counts| {
            counts.borrow_mut().insert(TypeId::of::<X>(), Counts::default());
        });
    }

    pub fn counts() -> Counts {
        COUNTS.with(|counts| {
            counts
                .borrow()
                .get(&TypeId::of::<X>())
                .copied()
                .unwrap_or_default()
        })
    }

    pub fn swap(&mut self, other: &mut Self) {
        bump::<X>(|c| c.swaps += 1);
        mem::swap(&mut self.inner, &mut other.inner);
    }
}

impl<X: Clone + 'static> Clone for Counted<X> {
    fn clone(&self) -> Self {
        bump::<X>(|c| c.clones += 1);
        Self {
            inner: self.inner.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        bump::<X>(|c| c.clone_froms += 1);
        self.inner.clone_from(&source.inner);
    }
}

impl<X: 'static> Drop for Counted<X> {
    fn drop(&mut self) {
        bump::<X>(|c| c.drops += 1);
    }
}

/// Records how many in-place arguments built it, or that it was cloned.
///
/// A slice in first position counts as one argument.
#[derive(Debug, PartialEq, Eq)]
pub struct CheckInPlace {
    pub in_place_args: Option<usize>,
    pub cloned: bool,
}

impl CheckInPlace {
    const fn built_from(args: usize) -> Self {
        Self {
            in_place_args: Some(args),
            cloned: false,
        }
    }
}

impl Clone for CheckInPlace {
    fn clone(&self) -> Self {
        Self {
            in_place_args: None,
            cloned: true,
        }
    }
}

impl From<()> for CheckInPlace {
    fn from((): ()) -> Self {
        Self::built_from(0)
    }
}

impl From<i32> for CheckInPlace {
    fn from(_: i32) -> Self {
        Self::built_from(1)
    }
}

impl From<(i32, i32)> for CheckInPlace {
    fn from(_: (i32, i32)) -> Self {
        Self::built_from(2)
    }
}

impl From<&[i32]> for CheckInPlace {
    fn from(_: &[i32]) -> Self {
        Self::built_from(1)
    }
}

impl From<(&[i32], i32)> for CheckInPlace {
    fn from(_: (&[i32], i32)) -> Self {
        Self::built_from(2)
    }
}

impl From<(&[i32], i32, i32)> for CheckInPlace {
    fn from(_: (&[i32], i32, i32)) -> Self {
        Self::built_from(3)
    }
}

/// Payload whose construction panics, for checking that a failed
/// in-place build leaves the target untouched.
#[derive(Debug)]
pub struct Explosive;

pub struct Detonate;

impl From<Detonate> for Explosive {
    fn from(_: Detonate) -> Self {
        panic!("construction failed")
    }
}
