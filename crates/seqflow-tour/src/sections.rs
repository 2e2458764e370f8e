use std::cell::RefCell;
use std::cmp::Ordering;
use std::collections::BTreeMap;

use seqflow_core::config::PipelineConfig;
use seqflow_core::optional::OptionalValue;
use seqflow_func::consumer::{Consumer, Supplier};
use seqflow_func::converter::{Converter, Something, parse_i32};
use seqflow_func::formula::{Formula, SquareRootFormula};
use seqflow_func::function::{Function, FunctionExt};
use seqflow_func::person::{Person, PersonFactory, by_first_name};
use seqflow_func::predicate::{self, Predicate, PredicateExt};
use seqflow_func::scopes::{ScopeProbe, local_capture};
use seqflow_stream::comparator::{Comparator, ComparatorExt};
use seqflow_stream::pipeline::Pipeline;
use seqflow_stream::sequence::Sequence;

use crate::config::TourConfig;
use crate::error::Result;

/// A titled block of tour output.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub title: &'static str,
    pub lines: Vec<String>,
}

impl Section {
    fn new(title: &'static str, lines: Vec<String>) -> Self {
        Self { title, lines }
    }
}

/// Descending string order as a named strategy object.
struct Descending;

impl Comparator<String> for Descending {
    fn compare(&self, a: &String, b: &String) -> Ordering {
        b.cmp(a)
    }
}

pub fn formula_section() -> Section {
    let formula = SquareRootFormula;
    Section::new(
        "default methods",
        vec![
            format!("calculate(100) = {:.1}", formula.calculate(100)),
            format!("sqrt(16) = {:.1}", formula.sqrt(16)),
        ],
    )
}

pub fn sorting_section(config: &TourConfig) -> Result<Section> {
    let names = Sequence::new(config.names.clone());

    let with_strategy = names.pipeline().sorted_by(Descending).collect()?;
    let with_closure = names
        .pipeline()
        .sorted_by(|a: &String, b: &String| b.cmp(a))
        .collect()?;

    Ok(Section::new(
        "comparators",
        vec![
            format!("strategy object: {}", with_strategy.join(", ")),
            format!("closure: {}", with_closure.join(", ")),
        ],
    ))
}

pub fn interfaces_section() -> Result<Section> {
    let converter = |from: &str| parse_i32(from);
    let converted = converter.convert("123")?;

    let something = Something;
    let starts_with = |s: &str| something.starts_with(s);

    let factory = Person::new;
    let person = factory.create("Peter", "Parker");

    let plus_one = local_capture(1);

    Ok(Section::new(
        "functional interfaces",
        vec![
            converted.to_string(),
            starts_with.convert("Java"),
            person.full_name(),
            plus_one.convert(2),
        ],
    ))
}

pub fn scopes_section() -> Section {
    let probe = ScopeProbe::new();
    Section::new("closure scopes", probe.test_scopes())
}

pub fn predicates_section() -> Result<Section> {
    let non_empty = |s: &str| !s.is_empty();
    let is_not_empty = predicate::is_empty.negate();
    let missing: Option<bool> = None;

    let to_integer = |s: &str| parse_i32(s);
    let back_to_string =
        to_integer.and_then(|n: seqflow_core::error::Result<i32>| n.map(|n| n.to_string()));

    let words = Sequence::new(vec!["foo", "", "java", "bar"]);
    let non_blank = |s: &&str| !s.is_empty();
    let short = |s: &&str| s.len() < 4;
    let kept = words
        .pipeline()
        .filter(predicate::as_fn(non_blank.and(short)))
        .collect()?;

    let supplier = Person::default;
    let fresh = supplier.supply();

    let mut lines = vec![
        format!("predicate(\"foo\") = {}", non_empty.test("foo")),
        format!("predicate.negate()(\"foo\") = {}", non_empty.negate().test("foo")),
        format!("is_not_empty(\"\") = {}", is_not_empty.test("")),
        format!("is_none(None) = {}", predicate::is_none.test(&missing)),
        format!("back_to_string(\"123\") = {}", back_to_string.apply("123")?),
        format!("non_blank.and(short) keeps {}", kept.join(", ")),
        format!("supplied person is blank = {}", fresh == Person::default()),
    ];

    let greetings = RefCell::new(Vec::new());
    let greeter = |p: &Person| {
        greetings
            .borrow_mut()
            .push(format!("Hello, {}", p.first_name))
    };
    greeter.accept(&Person::new("Luke", "Skywalker"));
    lines.extend(greetings.into_inner());

    let john = Person::new("John", "Doe");
    let alice = Person::new("Alice", "Wonderland");
    lines.push(format!(
        "compare(John, Alice) = {:?}",
        by_first_name().compare(&john, &alice)
    ));
    lines.push(format!(
        "reversed(John, Alice) = {:?}",
        by_first_name().reversed().compare(&john, &alice)
    ));

    Ok(Section::new("built-in interfaces", lines))
}

pub fn optional_section() -> Result<Section> {
    let optional = OptionalValue::of("bam");

    let mut lines = vec![
        format!("is_present = {}", optional.is_present()),
        format!("get = {}", optional.get()?),
        format!("or_else = {}", optional.or_else("fallback")),
        format!(
            "absent.or_else = {}",
            OptionalValue::absent().or_else("fallback")
        ),
    ];
    optional.if_present(|s| {
        lines.push(format!(
            "first char = {}",
            s.chars().next().unwrap_or_default()
        ))
    });

    Ok(Section::new("optional values", lines))
}

/// Config attached to every pipeline of the stream section.
pub fn stream_config(config: &TourConfig) -> PipelineConfig {
    PipelineConfig::new()
        .with_label("tour.streams")
        .with_tag("tour")
        .with_metadata("collection_len", serde_json::json!(config.collection.len()))
}

pub fn stream_section(config: &TourConfig) -> Result<Section> {
    let pipeline_config = stream_config(config);
    let source = || -> Pipeline<String> {
        config.collection.pipeline().with_config(pipeline_config.clone())
    };
    let collection = &config.collection;
    let filter_prefix = config.filter_prefix.clone();
    let count_prefix = config.count_prefix.clone();
    let missing_prefix = config.missing_prefix.clone();
    let mut lines = Vec::new();

    let prefix = filter_prefix.clone();
    let filtered = source()
        .filter(move |s| s.starts_with(prefix.as_str()))
        .collect()?;
    lines.push(format!("filter: {}", filtered.join(", ")));

    let prefix = filter_prefix.clone();
    let sorted = source()
        .sorted()
        .filter(move |s| s.starts_with(prefix.as_str()))
        .collect()?;
    lines.push(format!("sorted: {}", sorted.join(", ")));
    lines.push(format!("source: {}", collection.as_slice().join(", ")));

    let mapped = source()
        .map(|s| s.to_uppercase())
        .sorted_by(|a: &String, b: &String| b.cmp(a))
        .collect()?;
    lines.push(format!("map: {}", mapped.join(", ")));

    let all = source();
    lines.push(format!(
        "any starts with {filter_prefix}: {}",
        all.any_match(|s| s.starts_with(filter_prefix.as_str()))?
    ));
    lines.push(format!(
        "all start with {filter_prefix}: {}",
        all.all_match(|s| s.starts_with(filter_prefix.as_str()))?
    ));
    lines.push(format!(
        "none start with {missing_prefix}: {}",
        all.none_match(|s| s.starts_with(missing_prefix.as_str()))?
    ));

    let prefix = count_prefix.clone();
    let count = source()
        .filter(move |s| s.starts_with(prefix.as_str()))
        .count()?;
    lines.push(format!("count starting with {count_prefix}: {count}"));

    let reduced = source()
        .sorted()
        .reduce(|a, b| format!("{a}#{b}"))?;
    reduced.if_present(|s| lines.push(format!("reduce: {s}")));

    Ok(Section::new("streams", lines))
}

pub fn map_section(config: &TourConfig) -> Section {
    let mut map = BTreeMap::new();
    for i in 0..config.map_size {
        map.entry(i).or_insert_with(|| format!("val{i}"));
    }
    // A second pass over the same keys changes nothing.
    for i in 0..config.map_size {
        map.entry(i).or_insert_with(|| format!("replaced{i}"));
    }

    Section::new("maps", map.into_values().collect())
}

/// Build every section of the tour, in order.
pub fn run(config: &TourConfig) -> Result<Vec<Section>> {
    let sections = vec![
        formula_section(),
        sorting_section(config)?,
        interfaces_section()?,
        scopes_section(),
        predicates_section()?,
        optional_section()?,
        stream_section(config)?,
        map_section(config),
    ];
    for section in &sections {
        tracing::info!(title = section.title, lines = section.lines.len(), "section ready");
    }
    Ok(sections)
}
