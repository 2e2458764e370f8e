/// A boolean test over a borrowed value.
pub trait Predicate<T: ?Sized> {
    fn test(&self, value: &T) -> bool;
}

impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool,
{
    fn test(&self, value: &T) -> bool {
        self(value)
    }
}

/// Extension trait providing logical combinators for predicates.
pub trait PredicateExt<T: ?Sized>: Predicate<T> + Sized {
    fn negate(self) -> Not<Self> {
        Not(self)
    }

    fn and<P: Predicate<T>>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    fn or<P: Predicate<T>>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }
}

impl<T: ?Sized, P: Predicate<T>> PredicateExt<T> for P {}

#[derive(Debug, Clone, Copy)]
pub struct Not<P>(P);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P> {
    fn test(&self, value: &T) -> bool {
        !self.0.test(value)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct And<A, B>(A, B);

impl<T: ?Sized, A: Predicate<T>, B: Predicate<T>> Predicate<T> for And<A, B> {
    fn test(&self, value: &T) -> bool {
        self.0.test(value) && self.1.test(value)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Or<A, B>(A, B);

impl<T: ?Sized, A: Predicate<T>, B: Predicate<T>> Predicate<T> for Or<A, B> {
    fn test(&self, value: &T) -> bool {
        self.0.test(value) || self.1.test(value)
    }
}

pub fn is_none<T>(value: &Option<T>) -> bool {
    value.is_none()
}

pub fn is_some<T>(value: &Option<T>) -> bool {
    value.is_some()
}

pub fn is_empty(value: &str) -> bool {
    value.is_empty()
}

/// Adapt a predicate into a closure accepted by pipeline stages.
pub fn as_fn<T, P>(predicate: P) -> impl Fn(&T) -> bool
where
    P: Predicate<T>,
{
    move |value: &T| predicate.test(value)
}
