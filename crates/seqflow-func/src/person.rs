use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use seqflow_stream::comparator::Comparator;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
}

impl Person {
    pub fn new(first_name: &str, last_name: &str) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Orders people by first name.
pub fn by_first_name() -> impl Comparator<Person> {
    |a: &Person, b: &Person| -> Ordering { a.first_name.cmp(&b.first_name) }
}

/// Builds a value of type `P` from a first and last name.
pub trait PersonFactory<P> {
    fn create(&self, first_name: &str, last_name: &str) -> P;
}

impl<P, F> PersonFactory<P> for F
where
    F: Fn(&str, &str) -> P,
{
    fn create(&self, first_name: &str, last_name: &str) -> P {
        self(first_name, last_name)
    }
}
