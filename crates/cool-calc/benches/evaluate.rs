//! Evaluator Benchmarks
//!
//! Benchmarks for tokenizing, parsing and evaluating keypad expressions.
//!
//! Run with: `cargo bench --bench evaluate`

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use cool_calc::controller::Controller;
use cool_calc::core::parser::{Parser, Tokenizer};
use cool_calc::core::{evaluate, evaluator::evaluate_ast};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const EXPRESSIONS: [(&str, &str); 5] = [
    ("literal", "42"),
    ("addition", "12+3"),
    ("precedence", "1+2*3-4/5"),
    ("unary", "3--2*-4"),
    ("long_chain", "1+2-3*4/5+6-7*8/9+10-11*12/13+14-15*16"),
];

fn bench_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");

    for (name, expr) in EXPRESSIONS {
        group.bench_with_input(BenchmarkId::from_parameter(name), &expr, |bench, expr| {
            bench.iter(|| Tokenizer::new(black_box(expr)).tokenize());
        });
    }

    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for (name, expr) in EXPRESSIONS {
        let tokens = Tokenizer::new(expr).tokenize().unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(name), &tokens, |bench, tokens| {
            bench.iter(|| Parser::new(black_box(tokens.clone())).parse());
        });
    }

    group.finish();
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");

    for (name, expr) in EXPRESSIONS {
        group.bench_with_input(BenchmarkId::from_parameter(name), &expr, |bench, expr| {
            bench.iter(|| evaluate(black_box(expr)));
        });
    }

    let ast = Parser::parse_str(EXPRESSIONS[4].1).unwrap();
    group.bench_function("ast_only", |bench| {
        bench.iter(|| evaluate_ast(black_box(&ast)));
    });

    group.finish();
}

fn bench_controller(c: &mut Criterion) {
    c.bench_function("controller_press_sequence", |bench| {
        bench.iter(|| {
            let mut controller = Controller::new();
            controller.press_str(black_box("12+34*5=-6/7=C9*9="));
            black_box(controller.display().len())
        });
    });
}

criterion_group!(
    benches,
    bench_tokenize,
    bench_parse,
    bench_evaluate,
    bench_controller
);
criterion_main!(benches);
