//! # Structural equality
//!
//! [`Structural`] compares values by shape and content: sequences in order,
//! mappings by key set regardless of order, wrappers by what they wrap.
//! Comparing something that has no meaningful equality is an error, never
//! a silent `false`.

use crate::error::IntrospectError;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::hash::{BuildHasher, Hash};

pub type Comparison = Result<bool, IntrospectError>;

pub trait Structural {
    fn structural_eq(&self, other: &Self) -> Comparison;

    /// # The first thing inside without equality, if any
    ///
    /// Containers check both sides with it before any shortcut, so a length
    /// mismatch can't hide an uncomparable element
    fn uncomparable(&self) -> Option<String> {
        None
    }
}

/// Compare two values of the same shape
pub fn structural_equals<T: Structural + ?Sized>(a: &T, b: &T) -> Comparison {
    a.structural_eq(b)
}

/// # Fail when either side holds something without equality
pub fn ensure_comparable<T: Structural + ?Sized>(a: &T, b: &T) -> Result<(), IntrospectError> {
    match (a.uncomparable(), b.uncomparable()) {
        (None, None) => Ok(()),
        (this, that) => Err(IntrospectError::Uncomparable {
            this: this.unwrap_or_else(|| "a comparable value".to_owned()),
            that: that.unwrap_or_else(|| "a comparable value".to_owned()),
        }),
    }
}

/// # Make types compare with their [`PartialEq`]
///
/// Meant for records, a derived `PartialEq` compares every field
/// ```rust
/// #[derive(PartialEq, Debug)]
/// struct Person {
///     name: String,
///     age: u8,
/// }
/// callprobe::structural_via_eq!(Person);
/// ```
#[macro_export]
macro_rules! structural_via_eq {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::compare::Structural for $ty {
                fn structural_eq(&self, other: &Self) -> $crate::compare::Comparison {
                    Ok(self == other)
                }
            }
        )+
    };
}

structural_via_eq!(
    (), bool, char, str, String, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128,
    usize, f32, f64, std::time::Duration, std::path::Path, std::path::PathBuf,
);

impl<T: Eq + Hash, S: BuildHasher> Structural for HashSet<T, S> {
    fn structural_eq(&self, other: &Self) -> Comparison {
        Ok(self == other)
    }
}

impl<T: Ord> Structural for BTreeSet<T> {
    fn structural_eq(&self, other: &Self) -> Comparison {
        Ok(self == other)
    }
}

fn seq_eq<'a, T: Structural + 'a>(
    a: impl ExactSizeIterator<Item = &'a T>,
    b: impl ExactSizeIterator<Item = &'a T>,
) -> Comparison {
    if a.len() != b.len() {
        return Ok(false);
    }
    for (x, y) in a.zip(b) {
        if !x.structural_eq(y)? {
            return Ok(false);
        }
    }
    Ok(true)
}

impl<T: Structural> Structural for [T] {
    fn structural_eq(&self, other: &Self) -> Comparison {
        ensure_comparable(self, other)?;
        seq_eq(self.iter(), other.iter())
    }

    fn uncomparable(&self) -> Option<String> {
        self.iter().find_map(T::uncomparable)
    }
}

impl<T: Structural, const N: usize> Structural for [T; N] {
    fn structural_eq(&self, other: &Self) -> Comparison {
        ensure_comparable(self, other)?;
        seq_eq(self.iter(), other.iter())
    }

    fn uncomparable(&self) -> Option<String> {
        self.iter().find_map(T::uncomparable)
    }
}

impl<T: Structural> Structural for Vec<T> {
    fn structural_eq(&self, other: &Self) -> Comparison {
        ensure_comparable(self, other)?;
        seq_eq(self.iter(), other.iter())
    }

    fn uncomparable(&self) -> Option<String> {
        self.iter().find_map(T::uncomparable)
    }
}

impl<T: Structural> Structural for VecDeque<T> {
    fn structural_eq(&self, other: &Self) -> Comparison {
        ensure_comparable(self, other)?;
        seq_eq(self.iter(), other.iter())
    }

    fn uncomparable(&self) -> Option<String> {
        self.iter().find_map(T::uncomparable)
    }
}

impl<K: Eq + Hash, V: Structural, S: BuildHasher> Structural for HashMap<K, V, S> {
    fn structural_eq(&self, other: &Self) -> Comparison {
        ensure_comparable(self, other)?;
        if self.len() != other.len() {
            return Ok(false);
        }
        for (k, v) in self {
            match other.get(k) {
                Some(w) if v.structural_eq(w)? => {}
                _ => return Ok(false),
            }
        }
        Ok(true)
    }

    fn uncomparable(&self) -> Option<String> {
        self.values().find_map(V::uncomparable)
    }
}

impl<K: Ord, V: Structural> Structural for BTreeMap<K, V> {
    fn structural_eq(&self, other: &Self) -> Comparison {
        ensure_comparable(self, other)?;
        if self.len() != other.len() {
            return Ok(false);
        }
        for (k, v) in self {
            match other.get(k) {
                Some(w) if v.structural_eq(w)? => {}
                _ => return Ok(false),
            }
        }
        Ok(true)
    }

    fn uncomparable(&self) -> Option<String> {
        self.values().find_map(V::uncomparable)
    }
}

impl<T: Structural> Structural for Option<T> {
    fn structural_eq(&self, other: &Self) -> Comparison {
        ensure_comparable(self, other)?;
        match (self, other) {
            (Some(a), Some(b)) => a.structural_eq(b),
            (None, None) => Ok(true),
            _ => Ok(false),
        }
    }

    fn uncomparable(&self) -> Option<String> {
        self.as_ref().and_then(T::uncomparable)
    }
}

impl<T: Structural, E: Structural> Structural for Result<T, E> {
    fn structural_eq(&self, other: &Self) -> Comparison {
        ensure_comparable(self, other)?;
        match (self, other) {
            (Ok(a), Ok(b)) => a.structural_eq(b),
            (Err(a), Err(b)) => a.structural_eq(b),
            _ => Ok(false),
        }
    }

    fn uncomparable(&self) -> Option<String> {
        match self {
            Ok(v) => v.uncomparable(),
            Err(e) => e.uncomparable(),
        }
    }
}

impl<T: Structural + ?Sized> Structural for &T {
    fn structural_eq(&self, other: &Self) -> Comparison {
        (**self).structural_eq(*other)
    }

    fn uncomparable(&self) -> Option<String> {
        (**self).uncomparable()
    }
}

impl<T: Structural + ?Sized> Structural for Box<T> {
    fn structural_eq(&self, other: &Self) -> Comparison {
        (**self).structural_eq(other)
    }

    fn uncomparable(&self) -> Option<String> {
        (**self).uncomparable()
    }
}

macro_rules! structural_tuple {
    ($(($($name:ident $idx:tt),+)),+ $(,)?) => {
        $(
            impl<$($name: Structural),+> Structural for ($($name,)+) {
                fn structural_eq(&self, other: &Self) -> Comparison {
                    ensure_comparable(self, other)?;
                    $(
                        if !self.$idx.structural_eq(&other.$idx)? {
                            return Ok(false);
                        }
                    )+
                    Ok(true)
                }

                fn uncomparable(&self) -> Option<String> {
                    None$(.or_else(|| self.$idx.uncomparable()))+
                }
            }
        )+
    };
}

structural_tuple!(
    (A 0),
    (A 0, B 1),
    (A 0, B 1, C 2),
    (A 0, B 1, C 2, D 3),
);
