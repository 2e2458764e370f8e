/// A one-argument function `I -> O`.
pub trait Function<I, O> {
    fn apply(&self, input: I) -> O;
}

impl<I, O, F> Function<I, O> for F
where
    F: Fn(I) -> O,
{
    fn apply(&self, input: I) -> O {
        self(input)
    }
}

/// Extension trait providing `.and_then()` for composing functions.
pub trait FunctionExt<I, O>: Function<I, O> + Sized {
    /// Compose this function with another, feeding the output of `self` into `next`.
    fn and_then<P, N>(self, next: N) -> AndThen<Self, N, O>
    where
        N: Function<O, P>,
    {
        AndThen {
            first: self,
            second: next,
            _mid: std::marker::PhantomData,
        }
    }
}

impl<I, O, F: Function<I, O>> FunctionExt<I, O> for F {}

/// Two functions applied one after the other.
pub struct AndThen<A, B, M> {
    first: A,
    second: B,
    _mid: std::marker::PhantomData<fn() -> M>,
}

impl<I, M, O, A, B> Function<I, O> for AndThen<A, B, M>
where
    A: Function<I, M>,
    B: Function<M, O>,
{
    fn apply(&self, input: I) -> O {
        self.second.apply(self.first.apply(input))
    }
}
