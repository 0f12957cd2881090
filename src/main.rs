use clap::Parser;
use splitmul::compose::direct_product;
use splitmul::karatsuba::karatsuba_step;
use splitmul::Fragment;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "splitmul")]
#[command(about = "Multiply two decimal numbers given as high/low digit-string halves")]
struct Args {
    /// High half of the first factor
    a: Fragment,
    /// Low half of the first factor
    b: Fragment,
    /// High half of the second factor
    c: Fragment,
    /// Low half of the second factor
    d: Fragment,
}

fn init_logger() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("splitmul=info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn main() {
    let args = Args::parse();
    init_logger();

    let direct = direct_product(&args.a, &args.b, &args.c, &args.d);
    tracing::debug!(first = %direct.first, second = %direct.second, "composed factors");
    println!("{}", direct);

    let result = karatsuba_step(&args.a, &args.b, &args.c, &args.d);
    println!("Karatsuba: {}", result);
}
