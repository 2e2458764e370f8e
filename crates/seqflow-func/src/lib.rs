pub mod consumer;
pub mod converter;
pub mod formula;
pub mod function;
pub mod person;
pub mod predicate;
pub mod scopes;

pub mod prelude {
    pub use crate::consumer::{Consumer, ConsumerExt, Supplier};
    pub use crate::converter::{Converter, Something, parse_i32};
    pub use crate::formula::{Formula, SquareRootFormula};
    pub use crate::function::{Function, FunctionExt};
    pub use crate::person::{Person, PersonFactory};
    pub use crate::predicate::{Predicate, PredicateExt};
    pub use crate::scopes::ScopeProbe;
}
