//! PaceBench Example Benchmarks
//!
//! This example demonstrates PaceBench features and serves as a template for
//! creating your own benchmark suite.
//!
//! Run with:
//!   cargo run --release --example benchmarks                       # Run all benchmarks
//!   cargo run --release --example benchmarks -- --help             # Show all options
//!   cargo run --release --example benchmarks -- list               # List benchmarks
//!   cargo run --release --example benchmarks -- --group dispatch   # Run only one group
//!   cargo run --release --example benchmarks -- --format json --save-baseline

use pacebench::Suite;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt::Write;
use std::hint::black_box;

// ============================================================================
// Dispatch: enum match vs trait objects
// ============================================================================

#[derive(Clone, Copy)]
enum Shape {
    Circle(f64),
    Square(f64),
    Rect(f64, f64),
}

impl Shape {
    fn area(&self) -> f64 {
        match *self {
            Shape::Circle(r) => std::f64::consts::PI * r * r,
            Shape::Square(s) => s * s,
            Shape::Rect(w, h) => w * h,
        }
    }
}

trait Area {
    fn area(&self) -> f64;
}

struct Circle(f64);
struct Square(f64);
struct Rect(f64, f64);

impl Area for Circle {
    fn area(&self) -> f64 {
        std::f64::consts::PI * self.0 * self.0
    }
}

impl Area for Square {
    fn area(&self) -> f64 {
        self.0 * self.0
    }
}

impl Area for Rect {
    fn area(&self) -> f64 {
        self.0 * self.1
    }
}

fn enum_shapes(n: usize) -> Vec<Shape> {
    (0..n)
        .map(|i| match i % 3 {
            0 => Shape::Circle(i as f64),
            1 => Shape::Square(i as f64),
            _ => Shape::Rect(i as f64, 2.0),
        })
        .collect()
}

fn boxed_shapes(n: usize) -> Vec<Box<dyn Area>> {
    (0..n)
        .map(|i| -> Box<dyn Area> {
            match i % 3 {
                0 => Box::new(Circle(i as f64)),
                1 => Box::new(Square(i as f64)),
                _ => Box::new(Rect(i as f64, 2.0)),
            }
        })
        .collect()
}

fn register_dispatch(suite: &mut Suite) {
    suite
        .bench("dispatch_enum", |runner| {
            let shapes = enum_shapes(256);
            runner.run(|| shapes.iter().map(|s| black_box(s).area()).sum::<f64>())
        })
        .group("dispatch")
        .iterations(20_000);

    suite
        .bench("dispatch_dyn", |runner| {
            let shapes = boxed_shapes(256);
            runner.run(|| shapes.iter().map(|s| black_box(s).area()).sum::<f64>())
        })
        .group("dispatch")
        .iterations(20_000);

    suite.compare("enum_vs_dyn", "dispatch_dyn", "dispatch_enum");
}

// ============================================================================
// String building
// ============================================================================

fn register_strings(suite: &mut Suite) {
    suite
        .bench("string_format_join", |runner| {
            runner.run(|| {
                let parts: Vec<String> = (0..64).map(|i| format!("{}", i)).collect();
                parts.join(",")
            })
        })
        .group("strings")
        .tags(["alloc"])
        .iterations(10_000);

    suite
        .bench("string_write_reuse", |runner| {
            let mut buf = String::with_capacity(512);
            runner.run(|| {
                buf.clear();
                for i in 0..64 {
                    let _ = write!(buf, "{},", i);
                }
                buf.len()
            })
        })
        .group("strings")
        .tags(["alloc"])
        .iterations(10_000);

    suite.compare("write_vs_join", "string_format_join", "string_write_reuse");
}

// ============================================================================
// Collections
// ============================================================================

fn register_collections(suite: &mut Suite) {
    suite
        .bench("hashmap_insert", |runner| {
            runner.run(|| {
                let mut map = HashMap::with_capacity(100);
                for i in 0..100u32 {
                    map.insert(i, i * 2);
                }
                map
            })
        })
        .group("collections")
        .iterations(5_000);

    suite
        .bench("vec_sort_reversed", |runner| {
            // Fresh reversed input before the warm-up and every sample
            let data: RefCell<Vec<u32>> = RefCell::new(Vec::new());
            runner.run_with_setup(
                || *data.borrow_mut() = (0..1_000).rev().collect(),
                || {
                    let mut copy = data.borrow().clone();
                    copy.sort_unstable();
                    copy
                },
            )
        })
        .group("collections")
        .tags(["slow"])
        .iterations(2_000)
        .samples(5);

    suite
        .bench("checked_parse", |runner| {
            let inputs = ["12", "340", "5600", "78000"];
            runner.try_run(|| -> Result<u64, std::num::ParseIntError> {
                let mut total = 0u64;
                for s in inputs {
                    total += s.parse::<u64>()?;
                }
                Ok(total)
            })
        })
        .group("collections")
        .iterations(50_000);
}

fn main() -> anyhow::Result<()> {
    let mut suite = Suite::new();
    register_dispatch(&mut suite);
    register_strings(&mut suite);
    register_collections(&mut suite);
    pacebench::run(suite)
}
