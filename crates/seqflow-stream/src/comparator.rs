use std::cmp::Ordering;
use std::marker::PhantomData;

/// A strategy for ordering two values.
///
/// Any `Fn(&T, &T) -> Ordering` is a comparator, so closures and named
/// functions can be passed wherever a `Comparator` is expected. Struct
/// implementations are useful when the ordering needs its own state.
pub trait Comparator<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Extension trait providing combinators for comparators.
pub trait ComparatorExt<T: ?Sized>: Comparator<T> + Sized {
    /// The same ordering, reversed.
    fn reversed(self) -> Reversed<Self> {
        Reversed(self)
    }

    /// Break ties of `self` with `next`.
    fn then_comparing<C>(self, next: C) -> ThenComparing<Self, C>
    where
        C: Comparator<T>,
    {
        ThenComparing {
            first: self,
            second: next,
        }
    }
}

impl<T: ?Sized, C: Comparator<T>> ComparatorExt<T> for C {}

pub struct Reversed<C>(C);

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Reversed<C> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

pub struct ThenComparing<A, B> {
    first: A,
    second: B,
}

impl<T: ?Sized, A: Comparator<T>, B: Comparator<T>> Comparator<T> for ThenComparing<A, B> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.first
            .compare(a, b)
            .then_with(|| self.second.compare(a, b))
    }
}

/// Orders values by a key extracted from each of them.
pub struct Comparing<F, K> {
    key: F,
    _key: PhantomData<fn() -> K>,
}

impl<T: ?Sized, K: Ord, F> Comparator<T> for Comparing<F, K>
where
    F: Fn(&T) -> K,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.key)(a).cmp(&(self.key)(b))
    }
}

pub fn comparing<T: ?Sized, K: Ord, F>(key: F) -> Comparing<F, K>
where
    F: Fn(&T) -> K,
{
    Comparing {
        key,
        _key: PhantomData,
    }
}

pub fn natural_order<T: Ord + ?Sized>() -> impl Comparator<T> {
    |a: &T, b: &T| a.cmp(b)
}

pub fn reverse_order<T: Ord + ?Sized>() -> impl Comparator<T> {
    natural_order::<T>().reversed()
}
