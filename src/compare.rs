//! Ordering policies for the queues in this crate
//!
//! Every queue stores a [`Comparator`] and routes each comparison through it.
//! `Greater` means "outranks": the element that outranks all others is the one
//! `peek` returns.
//!
//! | Policy         | Ordering                                            |
//! |----------------|-----------------------------------------------------|
//! | [`DefaultOrder`] | numeric when both keys are numbers, else textual  |
//! | [`NaturalOrder`] | the element's own [`Ord`]                         |
//! | [`Reversed`]     | another policy, flipped                           |
//! | [`BySign`]       | a function returning a signed difference          |
//! | closures         | any `Fn(&T, &T) -> Ordering`                      |
//!
//! # Example
//!
//! ```rust
//! use rust_amortized_pq::compare::{BySign, Comparator, DefaultOrder};
//! use std::cmp::Ordering;
//!
//! // Numbers compare numerically, not as text.
//! assert_eq!(DefaultOrder.compare(&10_i32, &9_i32), Ordering::Greater);
//! assert_eq!(DefaultOrder.compare("10", "9"), Ordering::Less);
//!
//! let lowest_first = BySign(|a: &i32, b: &i32| b - a);
//! assert!(lowest_first.outranks(&1, &5));
//! ```

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

/// A three-way ordering rule over `T`
///
/// `compare(a, b)` returns `Greater` when `a` outranks `b`, `Equal` when the
/// two are equivalent and `Less` otherwise. The rule must be a total order;
/// the queues do not detect inconsistent comparators.
pub trait Comparator<T: ?Sized> {
    /// Compares `a` against `b`
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Returns true if `a` strictly outranks `b`
    fn outranks(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Greater
    }
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// The sign of a numeric difference
///
/// NaN has no sign and maps to `Equal`.
pub trait Sign {
    fn sign(&self) -> Ordering;
}

macro_rules! integer_signs {
    ($($t:ty),* $(,)?) => {
        $(
            impl Sign for $t {
                fn sign(&self) -> Ordering {
                    self.cmp(&0)
                }
            }
        )*
    };
}

integer_signs!(i8, i16, i32, i64, i128, isize);

impl Sign for f32 {
    fn sign(&self) -> Ordering {
        self.partial_cmp(&0.0).unwrap_or(Ordering::Equal)
    }
}

impl Sign for f64 {
    fn sign(&self) -> Ordering {
        self.partial_cmp(&0.0).unwrap_or(Ordering::Equal)
    }
}

impl Sign for Ordering {
    fn sign(&self) -> Ordering {
        *self
    }
}

/// Adapts a function returning a signed number into a [`Comparator`]
///
/// Positive results mean the first argument outranks the second. This is
/// the natural way to write "lowest priority first" over a numeric field:
///
/// ```rust
/// use rust_amortized_pq::compare::BySign;
/// use rust_amortized_pq::PriorityQueue;
///
/// struct Task {
///     priority: i32,
/// }
///
/// let mut queue = PriorityQueue::with_comparator(BySign(|a: &Task, b: &Task| {
///     b.priority - a.priority
/// }));
/// queue.enqueue(Task { priority: 100 });
/// queue.enqueue(Task { priority: -1 });
/// assert_eq!(queue.dequeue().unwrap().priority, -1);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BySign<F>(pub F);

impl<T: ?Sized, F, S> Comparator<T> for BySign<F>
where
    F: Fn(&T, &T) -> S,
    S: Sign,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a, b).sign()
    }
}

/// Flips another comparator, so the lowest-ranked element comes out first
#[derive(Debug, Clone, Copy, Default)]
pub struct Reversed<C>(pub C);

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Reversed<C> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

/// Delegates to the [`Ord`] implementation of the element type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: ?Sized + Ord> Comparator<T> for NaturalOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// The comparison key an element presents to [`DefaultOrder`]
#[derive(Debug, Clone, PartialEq)]
pub enum Key<'a> {
    Integer(i128),
    Float(f64),
    Text(Cow<'a, str>),
}

impl Key<'_> {
    /// Compares two keys by the sign of their difference, if both are numeric
    fn numeric_cmp(&self, other: &Key<'_>) -> Option<Ordering> {
        match (self, other) {
            (Key::Integer(a), Key::Integer(b)) => Some(a.cmp(b)),
            (Key::Integer(a), Key::Float(b)) => Some((*a as f64 - b).sign()),
            (Key::Float(a), Key::Integer(b)) => Some((a - *b as f64).sign()),
            (Key::Float(a), Key::Float(b)) => Some((a - b).sign()),
            _ => None,
        }
    }

    /// The textual representation used when the keys are not both numeric
    fn text(&self) -> Cow<'_, str> {
        match self {
            Key::Integer(n) => Cow::Owned(n.to_string()),
            Key::Float(n) => Cow::Owned(n.to_string()),
            Key::Text(s) => Cow::Borrowed(&**s),
        }
    }
}

/// Types that can be ordered by [`DefaultOrder`]
pub trait DefaultKey {
    fn default_key(&self) -> Key<'_>;
}

macro_rules! integer_keys {
    ($($t:ty),* $(,)?) => {
        $(
            impl DefaultKey for $t {
                fn default_key(&self) -> Key<'_> {
                    Key::Integer(i128::from(*self))
                }
            }
        )*
    };
}

integer_keys!(i8, u8, i16, u16, i32, u32, i64, u64);

impl DefaultKey for isize {
    fn default_key(&self) -> Key<'_> {
        Key::Integer(*self as i128)
    }
}

impl DefaultKey for usize {
    fn default_key(&self) -> Key<'_> {
        Key::Integer(*self as i128)
    }
}

impl DefaultKey for f32 {
    fn default_key(&self) -> Key<'_> {
        Key::Float(f64::from(*self))
    }
}

impl DefaultKey for f64 {
    fn default_key(&self) -> Key<'_> {
        Key::Float(*self)
    }
}

impl DefaultKey for str {
    fn default_key(&self) -> Key<'_> {
        Key::Text(Cow::Borrowed(self))
    }
}

impl DefaultKey for String {
    fn default_key(&self) -> Key<'_> {
        Key::Text(Cow::Borrowed(self.as_str()))
    }
}

impl DefaultKey for char {
    fn default_key(&self) -> Key<'_> {
        Key::Text(Cow::Owned(self.to_string()))
    }
}

impl DefaultKey for bool {
    fn default_key(&self) -> Key<'_> {
        Key::Text(Cow::Borrowed(if *self { "true" } else { "false" }))
    }
}

impl<T: ?Sized + DefaultKey> DefaultKey for &T {
    fn default_key(&self) -> Key<'_> {
        (**self).default_key()
    }
}

/// The default ordering policy
///
/// When both operands are numeric (any primitive integer or float, or a
/// [`Value::Number`]) they are compared by the sign of `a - b`. Otherwise
/// both are rendered as text and compared lexicographically, so `"b"`
/// outranks `"a"` and the number `10` is ranked below the string `"9"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultOrder;

impl<T: ?Sized + DefaultKey> Comparator<T> for DefaultOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        let (a, b) = (a.default_key(), b.default_key());
        a.numeric_cmp(&b).unwrap_or_else(|| a.text().cmp(&b.text()))
    }
}

/// A dynamically typed element for queues that mix numbers and strings
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Text(String),
}

impl DefaultKey for Value {
    fn default_key(&self) -> Key<'_> {
        match self {
            Value::Number(n) => Key::Float(*n),
            Value::Text(s) => Key::Text(Cow::Borrowed(s.as_str())),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}
