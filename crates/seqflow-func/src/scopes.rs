//! Closures that read or write state living outside of them.
//!
//! Locals are captured by value. Instance and process-wide state is reached
//! through explicit shared cells: an `Rc<Cell<_>>` owned by [`ScopeProbe`]
//! and a static atomic.

use std::cell::Cell;
use std::rc::Rc;
use std::sync::atomic::{AtomicI32, Ordering};

use crate::converter::Converter;

static OUTER_STATIC_NUM: AtomicI32 = AtomicI32::new(0);

pub fn outer_static_num() -> i32 {
    OUTER_STATIC_NUM.load(Ordering::Relaxed)
}

/// A converter that adds a captured local to its input.
pub fn local_capture(num: i32) -> impl Fn(i32) -> String {
    move |from| (from + num).to_string()
}

/// A converter that overwrites the process-wide number and reports it.
pub fn static_writer() -> impl Fn(i32) -> String {
    |_from| {
        OUTER_STATIC_NUM.store(32, Ordering::Relaxed);
        outer_static_num().to_string()
    }
}

/// Owns a number that closures created from it can overwrite.
#[derive(Debug, Clone, Default)]
pub struct ScopeProbe {
    outer_num: Rc<Cell<i32>>,
}

impl ScopeProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn outer_num(&self) -> i32 {
        self.outer_num.get()
    }

    /// A converter that overwrites this probe's number and reports it.
    pub fn field_writer(&self) -> impl Fn(i32) -> String {
        let outer_num = Rc::clone(&self.outer_num);
        move |_from| {
            outer_num.set(52);
            outer_num.get().to_string()
        }
    }

    /// Run both writers and return what they reported.
    pub fn test_scopes(&self) -> Vec<String> {
        let field = self.field_writer().convert(23);
        let global = static_writer().convert(33);
        tracing::debug!(%field, %global, "scope writers ran");
        vec![field, global]
    }
}
