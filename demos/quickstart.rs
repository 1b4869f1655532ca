//! Quickstart example: mapping real values into an MPC word and back

use number_mapper::{FixedPointMapper, TypedMapper};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Route the precision warnings to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "number_mapper=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("number-mapper Quickstart Demo\n");

    // 8-bit words, two decimal digits of precision
    let mut mapper = FixedPointMapper::new(8, 100).unwrap();

    let inputs = [1.5, -0.42, 0.007, 3.0];
    let words = mapper.encode_batch(&inputs);

    println!("width=8 divisor=100");
    for (x, w) in inputs.iter().zip(&words) {
        println!(
            "   {:>7} -> {:>3} -> unsigned {:>6.2}, signed {:>6.2}",
            x,
            w,
            mapper.decode_unsigned(*w),
            mapper.decode_signed(*w)
        );
    }
    println!("   3.0 does not fit (300 > 256) and wrapped to {}", words[3]);

    match mapper.set_divisor(300) {
        Ok(()) => println!("\nunexpected: divisor 300 accepted"),
        Err(e) => println!("\nset_divisor(300) rejected: {}", e),
    }
    println!("divisor is still {}", mapper.divisor());

    // Native word type fixes the width
    let typed = TypedMapper::<u32>::new(1 << 16).unwrap();
    let share: u32 = typed.encode(-2.75);
    println!("\nu32 with 16 fractional bits: -2.75 -> {:#010x} -> {}", share, typed.decode_signed(share));
}
