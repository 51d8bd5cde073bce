#![feature(test)]

extern crate test;

use test::Bencher;
use wide64::{HostNumber, Int64, UInt64};

#[bench]
fn mul_add_chain(bench: &mut Bencher) {
    bench.iter(|| {
        let mut acc = UInt64::ONE;
        for no in 0..64u64 {
            acc = acc * UInt64::new(0x9E37_79B9_7F4A_7C15) + UInt64::new(no);
        }
        acc
    });
}

#[bench]
fn parse_decimal(bench: &mut Bencher) {
    bench.iter(|| test::black_box("-9223372036854775808").parse::<Int64>().unwrap());
}

#[bench]
fn from_number_wrapping(bench: &mut Bencher) {
    bench.iter(|| Int64::from_number(test::black_box(-3.6893488147419103e19)));
}
