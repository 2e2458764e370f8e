use std::cmp::Ordering;
use std::rc::Rc;

use seqflow_core::config::PipelineConfig;
use seqflow_core::error::{PipelineError, Result, SeqflowError};
use seqflow_core::optional::OptionalValue;

use crate::comparator::Comparator;
use crate::sequence::Sequence;
use crate::sort::stable_sort_by;

type ItemIter<T> = Box<dyn Iterator<Item = Result<T>>>;
type Source<T> = Rc<dyn Fn() -> ItemIter<T>>;

/// A lazy, chainable computation over a [`Sequence`].
///
/// Intermediate operations (`filter`, `map`, `sorted`, ...) only record a
/// stage; nothing runs until a terminal operation (`count`, `reduce`,
/// `collect`, the match operations, ...) is called. Terminal operations take
/// `&self` and recompute from the original source on every call, so a
/// pipeline can be evaluated any number of times with consistent results.
///
/// A stage that fails yields an error in place of its element; the first
/// error in sequence order is returned by the terminal operation.
pub struct Pipeline<T> {
    source: Source<T>,
    stages: Vec<&'static str>,
    config: PipelineConfig,
}

impl<T: Clone + 'static> Pipeline<T> {
    pub fn from_sequence(sequence: &Sequence<T>) -> Self {
        let items = sequence.shared();
        Self {
            source: Rc::new(move || -> ItemIter<T> {
                let items = items.clone();
                Box::new((0..items.len()).map(move |i| Ok(items[i].clone())))
            }),
            stages: Vec::new(),
            config: PipelineConfig::default(),
        }
    }
}

impl<T: 'static> Pipeline<T> {
    pub fn with_config(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Names of the recorded stages, in order.
    pub fn stages(&self) -> &[&'static str] {
        &self.stages
    }

    fn stage<U, B>(self, name: &'static str, build: B) -> Pipeline<U>
    where
        U: 'static,
        B: Fn(ItemIter<T>) -> ItemIter<U> + 'static,
    {
        let upstream = self.source;
        let mut stages = self.stages;
        stages.push(name);
        Pipeline {
            source: Rc::new(move || build(upstream())),
            stages,
            config: self.config,
        }
    }

    // --- intermediate operations -------------------------------------------

    /// Keep the elements for which `predicate` holds, preserving order.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        let predicate = Rc::new(predicate);
        self.stage("filter", move |upstream: ItemIter<T>| -> ItemIter<T> {
            let predicate = Rc::clone(&predicate);
            Box::new(upstream.filter(move |item| match item {
                Ok(value) => predicate(value),
                Err(_) => true,
            }))
        })
    }

    /// Like [`filter`](Self::filter), with a predicate that can fail.
    pub fn try_filter<P>(self, predicate: P) -> Self
    where
        P: Fn(&T) -> Result<bool> + 'static,
    {
        let predicate = Rc::new(predicate);
        self.stage("try_filter", move |upstream: ItemIter<T>| -> ItemIter<T> {
            let predicate = Rc::clone(&predicate);
            Box::new(upstream.filter_map(move |item| {
                let value = match item {
                    Ok(value) => value,
                    Err(e) => return Some(Err(e)),
                };
                match predicate(&value) {
                    Ok(true) => Some(Ok(value)),
                    Ok(false) => None,
                    Err(e) => Some(Err(e)),
                }
            }))
        })
    }

    /// Transform every element, preserving order and count.
    pub fn map<U, F>(self, transform: F) -> Pipeline<U>
    where
        U: 'static,
        F: Fn(T) -> U + 'static,
    {
        let transform = Rc::new(transform);
        self.stage("map", move |upstream: ItemIter<T>| -> ItemIter<U> {
            let transform = Rc::clone(&transform);
            Box::new(upstream.map(move |item| item.map(|value| transform(value))))
        })
    }

    /// Like [`map`](Self::map), with a transform that can fail.
    pub fn try_map<U, F>(self, transform: F) -> Pipeline<U>
    where
        U: 'static,
        F: Fn(T) -> Result<U> + 'static,
    {
        let transform = Rc::new(transform);
        self.stage("try_map", move |upstream: ItemIter<T>| -> ItemIter<U> {
            let transform = Rc::clone(&transform);
            Box::new(upstream.map(move |item| item.and_then(|value| transform(value))))
        })
    }

    /// Sort by natural order. Equal elements keep their relative order.
    pub fn sorted(self) -> Self
    where
        T: Ord,
    {
        self.sort_stage("sorted", |a: &T, b: &T| a.cmp(b))
    }

    /// Sort with a custom comparator. Equal elements keep their relative order.
    ///
    /// A comparator that is not a total order does not cause a failure; the
    /// resulting order is unspecified.
    pub fn sorted_by<C>(self, comparator: C) -> Self
    where
        C: Comparator<T> + 'static,
    {
        self.sort_stage("sorted_by", move |a: &T, b: &T| comparator.compare(a, b))
    }

    /// Sort by natural order for types that are only partially ordered.
    ///
    /// Evaluation fails with [`PipelineError::InvalidOperation`] if any element
    /// has no defined ordering against the others (for example `f64::NAN`).
    pub fn sorted_partial(self) -> Self
    where
        T: PartialOrd,
    {
        self.stage("sorted_partial", |upstream: ItemIter<T>| -> ItemIter<T> {
            let mut items = match upstream.collect::<Result<Vec<T>>>() {
                Ok(items) => items,
                Err(e) => return Box::new(std::iter::once(Err(e))),
            };
            if let Some(position) = items.iter().position(|v| v.partial_cmp(v).is_none()) {
                return Box::new(std::iter::once(Err(invalid_operation(format!(
                    "element at position {position} has no natural ordering"
                )))));
            }
            let mut incomparable = false;
            stable_sort_by(&mut items, |a, b| {
                a.partial_cmp(b).unwrap_or_else(|| {
                    incomparable = true;
                    Ordering::Equal
                })
            });
            if incomparable {
                return Box::new(std::iter::once(Err(invalid_operation(
                    "elements have no natural ordering".into(),
                ))));
            }
            Box::new(items.into_iter().map(Ok))
        })
    }

    fn sort_stage<F>(self, name: &'static str, compare: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + 'static,
    {
        self.stage(name, move |upstream: ItemIter<T>| -> ItemIter<T> {
            match upstream.collect::<Result<Vec<T>>>() {
                Ok(mut items) => {
                    stable_sort_by(&mut items, &compare);
                    Box::new(items.into_iter().map(Ok))
                }
                Err(e) => Box::new(std::iter::once(Err(e))),
            }
        })
    }

    // --- terminal operations -----------------------------------------------

    /// Run every stage and return the resulting elements lazily.
    pub fn evaluate(&self) -> Box<dyn Iterator<Item = Result<T>>> {
        (self.source)()
    }

    fn span(&self, op: &'static str) -> tracing::Span {
        tracing::debug_span!(
            "pipeline.terminal",
            op,
            label = self.config.display_label(),
            tags = ?self.config.tags,
            metadata = ?self.config.metadata,
            run_id = %self.config.run_id,
            stages = self.stages.len()
        )
    }

    /// True iff at least one element satisfies `predicate`. Stops at the first match.
    pub fn any_match<P>(&self, predicate: P) -> Result<bool>
    where
        P: Fn(&T) -> bool,
    {
        let _span = self.span("any_match").entered();
        for item in self.evaluate() {
            if predicate(&item?) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// True iff every element satisfies `predicate`; true for an empty pipeline.
    /// Stops at the first failure.
    pub fn all_match<P>(&self, predicate: P) -> Result<bool>
    where
        P: Fn(&T) -> bool,
    {
        let _span = self.span("all_match").entered();
        for item in self.evaluate() {
            if !predicate(&item?) {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// True iff no element satisfies `predicate`. Stops at the first match.
    pub fn none_match<P>(&self, predicate: P) -> Result<bool>
    where
        P: Fn(&T) -> bool,
    {
        let _span = self.span("none_match").entered();
        for item in self.evaluate() {
            if predicate(&item?) {
                return Ok(false);
            }
        }
        Ok(true)
    }

    pub fn count(&self) -> Result<usize> {
        let _span = self.span("count").entered();
        let count = self
            .evaluate()
            .try_fold(0usize, |count, item| item.map(|_| count + 1))?;
        tracing::debug!(count, "pipeline counted");
        Ok(count)
    }

    /// Left fold without a seed, combining elements in sequence order.
    ///
    /// Returns [`OptionalValue::Absent`] for an empty pipeline.
    pub fn reduce<F>(&self, combiner: F) -> Result<OptionalValue<T>>
    where
        F: Fn(T, T) -> T,
    {
        let _span = self.span("reduce").entered();
        let mut items = self.evaluate();
        let first = match items.next() {
            Some(item) => item?,
            None => return Ok(OptionalValue::absent()),
        };
        let reduced = items.try_fold(first, |acc, item| item.map(|value| combiner(acc, value)))?;
        Ok(OptionalValue::of(reduced))
    }

    /// Invoke `action` once per element, in order.
    pub fn for_each<F>(&self, mut action: F) -> Result<()>
    where
        F: FnMut(T),
    {
        let _span = self.span("for_each").entered();
        for item in self.evaluate() {
            action(item?);
        }
        Ok(())
    }

    pub fn collect(&self) -> Result<Vec<T>> {
        let _span = self.span("collect").entered();
        self.evaluate().collect()
    }

    pub fn find_first(&self) -> Result<OptionalValue<T>> {
        let _span = self.span("find_first").entered();
        self.evaluate()
            .next()
            .transpose()
            .map(OptionalValue::from)
    }
}

impl<T> Clone for Pipeline<T> {
    fn clone(&self) -> Self {
        Self {
            source: Rc::clone(&self.source),
            stages: self.stages.clone(),
            config: self.config.clone(),
        }
    }
}

impl<T> std::fmt::Debug for Pipeline<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("stages", &self.stages)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

fn invalid_operation(message: String) -> SeqflowError {
    PipelineError::InvalidOperation(message).into()
}
