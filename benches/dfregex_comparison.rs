#[macro_use]
extern crate criterion;
#[macro_use]
extern crate lazy_static;
extern crate dfregex;
extern crate rand;
extern crate regex;

use criterion::Criterion;
use dfregex::DatetimeMatcher;
use rand::prelude::*;
use regex::Regex;

const DFREGEX: &str = r"%Y-%m-%d %H:%M:%S";

// log-like lines, roughly half of them carrying a timestamp
fn make_lines(count: usize) -> Vec<String> {
    let mut rng = rand::thread_rng();
    let mut v = Vec::with_capacity(count);
    for i in 0..count {
        if i % 2 == 0 {
            v.push(format!(
                "{:04}-{:02}-{:02} {:02}:{:02}:{:02} service started",
                rng.gen_range(1970..2038),
                rng.gen_range(1..13),
                rng.gen_range(1..29),
                rng.gen_range(0..24),
                rng.gen_range(0..60),
                rng.gen_range(0..60),
            ));
        } else {
            v.push(format!("service heartbeat seq={}", rng.gen_range(0..100000)));
        }
    }
    v
}

lazy_static! {
    static ref LINES: Vec<String> = make_lines(1000);
    static ref GENERATED: Regex =
        Regex::new(&DatetimeMatcher::new().to_regex(DFREGEX, false)).unwrap();
    static ref HANDWRITTEN: Regex = Regex::new(
        r"[0-9]{4}-(?:0[1-9]|1[0-2])-(?:0[1-9]|[12][0-9]|3[01]) (?:[01][0-9]|2[0-3]):[0-5][0-9]:[0-5][0-9]"
    )
    .unwrap();
}

fn matching(c: &mut Criterion) {
    c.bench_function("generated pattern", |b| {
        b.iter(|| LINES.iter().filter(|l| GENERATED.is_match(l)).count())
    });
    c.bench_function("handwritten pattern", |b| {
        b.iter(|| LINES.iter().filter(|l| HANDWRITTEN.is_match(l)).count())
    });
}

fn compilation(c: &mut Criterion) {
    let dm = DatetimeMatcher::new();
    c.bench_function("tokenize and generate", |b| {
        b.iter(|| dm.to_regex(DFREGEX, true))
    });
}

criterion_group!(benches, matching, compilation);
criterion_main!(benches);
