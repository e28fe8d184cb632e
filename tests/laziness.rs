use std::cell::Cell;

use lazyseq::prelude::*;
use test_case::test_case;

/// A re-iterable source that counts every value pulled from any of its cursors.
fn counted<'a>(values: &'a [i32], pulls: &'a Cell<usize>) -> impl Sequence<Item = i32> + 'a {
    from_fn(move || {
        let mut items = values.iter().copied();
        cursor_fn(move || match items.next() {
            Some(v) => {
                pulls.set(pulls.get() + 1);
                Step::Yielded(v)
            }
            None => Step::done(),
        })
    })
}

#[test_case(vec![], 0 ; "empty")]
#[test_case(vec![1, 2, 3], 6 ; "small")]
#[test_case(vec![-4, 4], 0 ; "cancelling")]
fn sum_cases(values: Vec<i32>, expected: i32) {
    assert_eq!(sum(values), expected);
}

#[test_case(vec![], None ; "empty is absent")]
#[test_case(vec![5], Some(5) ; "single value is the seed")]
#[test_case(vec![1, 2, 3], Some(6) ; "sum of three")]
fn reduce_cases(values: Vec<i32>, expected: Option<i32>) {
    assert_eq!(reduce(values, |a, b, _| a + b), expected);
}

#[test_case(vec![], f64::INFINITY, f64::NEG_INFINITY ; "empty")]
#[test_case(vec![3.0, 1.0, 2.0], 1.0, 3.0 ; "unordered")]
fn min_max_cases(values: Vec<f64>, lo: f64, hi: f64) {
    assert_eq!(min(&values), lo);
    assert_eq!(max(&values), hi);
}

#[test]
fn flatten_skips_empty_inner() {
    assert_eq!(flatten(vec![vec![1, 2], vec![], vec![3]]).to_array(), vec![1, 2, 3]);
}

#[test]
fn concat_of_nothing_is_empty() {
    assert!(concat(Vec::<Vec<u8>>::new()).to_array().is_empty());
}

#[test]
fn take_while_never_asks_about_index_four() {
    let highest = Cell::new(0);
    let small = take_while(vec![1, 2, 3, 4, 1], |v, i| {
        highest.set(highest.get().max(i));
        *v < 3
    });
    assert_eq!(small.to_array(), vec![1, 2]);
    assert_eq!(highest.get(), 2);
}

#[test]
fn take_while_releases_source_after_rejection() {
    let pulls = Cell::new(0);
    let source = counted(&[1, 9, 2, 3], &pulls);
    let mut cursor = take_while(&source, |v, _| *v < 5).cursor();
    assert_eq!(cursor.next(), Step::Yielded(1));
    assert!(cursor.next().is_complete());
    assert!(cursor.next().is_complete());
    assert_eq!(pulls.get(), 2);
}

#[test]
fn filter_even() {
    assert_eq!(filter(vec![1, 2, 3, 4], |v, _| v % 2 == 0).to_array(), vec![2, 4]);
}

#[test]
fn zip_truncates_and_drops_partial_round() {
    assert_eq!(zip(vec![1, 2, 3], vec!["a", "b"]).to_array(), vec![(1, "a"), (2, "b")]);
}

#[test]
fn zip_over_consumes_by_at_most_one() {
    let pulls = Cell::new(0);
    let long = counted(&[1, 2, 3, 4, 5], &pulls);
    let pairs = zip(&long, vec!['x', 'y']).to_array();
    assert_eq!(pairs, vec![(1, 'x'), (2, 'y')]);
    assert_eq!(pulls.get(), 3);
}

#[test]
fn zip_stops_pulling_after_first_exhausted_input() {
    let pulls = Cell::new(0);
    let long = counted(&[1, 2, 3], &pulls);
    let rows = zip_all([counted(&[], &Cell::new(0)).boxed(), long.boxed()]).to_array();
    assert!(rows.is_empty());
    assert_eq!(pulls.get(), 0);
}

#[test]
fn some_and_every_on_empty() {
    let none: Vec<i32> = Vec::new();
    assert!(!some(&none, |_, _| true));
    assert!(every(&none, |_, _| false));
}

#[test]
fn is_equal_detects_length_mismatch() {
    assert!(!is_equal(&vec![1, 2], &vec![1, 2, 3]));
    assert!(is_equal(&vec![1, 2], &vec![1, 2]));
}

#[test]
fn is_equal_pulls_one_past_divergence_at_most() {
    let left_pulls = Cell::new(0);
    let right_pulls = Cell::new(0);
    let left = counted(&[1, 2, 3, 4, 5], &left_pulls);
    let right = counted(&[1, 7, 3, 4, 5], &right_pulls);
    assert!(!cursors_equal_by(left.cursor(), right.cursor(), |a, b| a == b));
    assert_eq!(left_pulls.get(), 2);
    assert_eq!(right_pulls.get(), 2);
}

#[test]
fn group_by_example() {
    let grouped = group_by(vec![("a", 1), ("b", 2), ("a", 3)], |x, y| x + y);
    let expected: ObjectMap<i32> = [("a", 4), ("b", 2)].into_iter().collect();
    assert_eq!(grouped, expected);
}

#[test]
fn generate_and_repeat_examples() {
    assert_eq!(generate(|i| i * i, Some(4)).to_array(), vec![0, 1, 4, 9]);
    assert_eq!(repeat("x", Some(3)).to_array(), vec!["x", "x", "x"]);
}

#[test]
fn construction_calls_no_callbacks() {
    let calls = Cell::new(0);
    let count = |_: &i32| calls.set(calls.get() + 1);

    let pipeline = vec![1, 2, 3, 4]
        .map(|v, _| {
            count(&v);
            v * 10
        })
        .filter(|v, _| {
            count(v);
            *v > 10
        })
        .flat_map(|v, _| {
            count(&v);
            repeat(v, Some(2))
        })
        .take_while(|v, _| {
            count(v);
            *v < 40
        });
    let generated = generate(
        |i| {
            calls.set(calls.get() + 1);
            i
        },
        None,
    );
    let zipped = zip(&pipeline, &generated);
    assert_eq!(calls.get(), 0);

    let mut cursor = zipped.cursor();
    assert_eq!(cursor.next(), Step::Yielded((20, 0)));
    assert!(calls.get() > 0);
}

#[test]
fn map_calls_once_per_pulled_position() {
    let calls = Cell::new(0);
    let doubled = map(vec![1, 2, 3], |v, _| {
        calls.set(calls.get() + 1);
        v * 2
    });
    let mut cursor = doubled.cursor();
    assert_eq!(cursor.next(), Step::Yielded(2));
    assert_eq!(calls.get(), 1);
    drop(cursor);

    assert_eq!(doubled.to_array(), vec![2, 4, 6]);
    assert_eq!(calls.get(), 4);
}

#[test]
fn flatten_does_not_prefetch_inner_sequences() {
    let opened = Cell::new(0);
    let nested = map(vec![3, 2, 1], |n, _| {
        opened.set(opened.get() + 1);
        repeat(n, Some(n as usize))
    });
    let mut cursor = flatten(&nested).cursor();
    for _ in 0..3 {
        assert_eq!(cursor.next(), Step::Yielded(3));
    }
    assert_eq!(opened.get(), 1);
    assert_eq!(cursor.next(), Step::Yielded(2));
    assert_eq!(opened.get(), 2);
}

#[test]
fn single_use_sources_are_drained_once() {
    let once_only = single_use(vec![1, 2, 3]);
    assert_eq!(sum(&once_only), 6);
    assert_eq!(sum(&once_only), 0);
}

#[test]
fn try_fold_surfaces_first_error() {
    let pulls = Cell::new(0);
    let source = counted(&[1, 2, -3, 4, -5], &pulls);
    let result = try_fold(&source, |acc: i32, v, i| if v < 0 { Err(i) } else { Ok(acc + v) }, 0);
    assert_eq!(result, Err(2));
    assert_eq!(pulls.get(), 3);
}

/// Hand-written cursor that is not fused: yields 1, reports done, then yields 3.
struct Resuming<'a> {
    step: i32,
    pulls: &'a Cell<usize>,
}

impl Cursor for Resuming<'_> {
    type Item = i32;

    fn next(&mut self) -> Step<i32> {
        self.pulls.set(self.pulls.get() + 1);
        self.step += 1;
        match self.step {
            2 => Step::done(),
            s => Step::Yielded(s),
        }
    }
}

fn resuming(pulls: &Cell<usize>) -> impl Sequence<Item = i32> + '_ {
    from_fn(move || Resuming { step: 0, pulls })
}

fn assert_stays_done<S>(seq: S, first: S::Item, pulls: &Cell<usize>)
where
    S: Sequence,
    S::Item: std::fmt::Debug + PartialEq,
{
    pulls.set(0);
    let mut cursor = seq.cursor();
    assert_eq!(cursor.next(), Step::Yielded(first));
    for _ in 0..3 {
        assert!(cursor.next().is_complete());
    }
    assert_eq!(pulls.get(), 2);
}

#[test]
fn derived_cursors_stay_done_over_unfused_sources() {
    let pulls = Cell::new(0);
    assert_stays_done(map(resuming(&pulls), |v, _| v * 10), 10, &pulls);
    assert_stays_done(filter(resuming(&pulls), |_, _| true), 1, &pulls);
    assert_stays_done(filter_map(resuming(&pulls), |v, _| Some(v * 10)), 10, &pulls);
    assert_stays_done(entries(resuming(&pulls)), (0, 1), &pulls);
    assert_stays_done(take_while(resuming(&pulls), |_, _| true), 1, &pulls);
    assert_stays_done(chain(resuming(&pulls), empty()), 1, &pulls);
}

#[test]
fn filter_map_accepts_non_clone_outputs() {
    struct Token(usize);

    let words = ["let", "", "x", ""];
    let tokens = filter_map(&words[..], |w, i| (!w.is_empty()).then(|| Token(i)));
    let positions: Vec<usize> = tokens.to_iter().map(|t| t.0).collect();
    assert_eq!(positions, vec![0, 2]);
}

#[test]
fn slice_last_is_not_shadowed_by_the_prelude() {
    let names = vec![String::from("ada"), String::from("grace")];
    let tail: Option<&String> = names.last();
    assert_eq!(tail.map(String::as_str), Some("grace"));
    assert_eq!(names.last_value(), Some(String::from("grace")));
    assert_eq!(last(&names[..]), Some(String::from("grace")));
}
