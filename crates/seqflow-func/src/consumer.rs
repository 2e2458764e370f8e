/// Produces a fresh value on every call.
pub trait Supplier<T> {
    fn supply(&self) -> T;
}

impl<T, F> Supplier<T> for F
where
    F: Fn() -> T,
{
    fn supply(&self) -> T {
        self()
    }
}

/// Performs a side effect with a borrowed value.
pub trait Consumer<T: ?Sized> {
    fn accept(&self, value: &T);
}

impl<T: ?Sized, F> Consumer<T> for F
where
    F: Fn(&T),
{
    fn accept(&self, value: &T) {
        self(value)
    }
}

pub trait ConsumerExt<T: ?Sized>: Consumer<T> + Sized {
    /// Run `self`, then `next`, with the same value.
    fn followed_by<C: Consumer<T>>(self, next: C) -> Chain<Self, C> {
        Chain(self, next)
    }
}

impl<T: ?Sized, C: Consumer<T>> ConsumerExt<T> for C {}

pub struct Chain<A, B>(A, B);

impl<T: ?Sized, A: Consumer<T>, B: Consumer<T>> Consumer<T> for Chain<A, B> {
    fn accept(&self, value: &T) {
        self.0.accept(value);
        self.1.accept(value);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::person::Person;

    #[test]
    fn supplier_from_default() {
        let supplier = Person::default;
        let person = supplier.supply();
        assert_eq!(person, Person::default());
    }

    #[test]
    fn supplier_yields_fresh_values() {
        let counter = RefCell::new(0);
        let next_id = || {
            *counter.borrow_mut() += 1;
            *counter.borrow()
        };
        assert_eq!(next_id.supply(), 1);
        assert_eq!(next_id.supply(), 2);
    }

    #[test]
    fn greeter_consumer() {
        let greetings = RefCell::new(Vec::new());
        let greeter = |p: &Person| {
            greetings
                .borrow_mut()
                .push(format!("Hello, {}", p.first_name))
        };
        greeter.accept(&Person::new("Luke", "Skywalker"));
        assert_eq!(*greetings.borrow(), vec!["Hello, Luke"]);
    }

    #[test]
    fn consumers_chain_in_order() {
        let log = RefCell::new(Vec::new());
        let first = |s: &str| log.borrow_mut().push(format!("first:{s}"));
        let second = |s: &str| log.borrow_mut().push(format!("second:{s}"));
        first.followed_by(second).accept("x");
        assert_eq!(*log.borrow(), vec!["first:x", "second:x"]);
    }
}
