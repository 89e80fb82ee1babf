use clap::Parser;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

use paged_table::{LinkBase, PaginatorArgs};

/// Renders one page of a data file to stdout.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(flatten)]
    paginator: PaginatorArgs,

    /// The page to render, starting from 1.
    #[arg(long, default_value_t = 1)]
    page: usize,

    /// The path that page links point to.
    #[arg(long, default_value = "/")]
    base_path: String,
}

fn main() {
    setup_logging();

    let args = Args::parse();

    let result = args.paginator.paginator().and_then(|paginator| {
        let rows = args.paginator.rows()?;
        let base = LinkBase::new(&args.base_path, Vec::new());

        paginator.render_to(&rows, args.page, &base, std::io::stdout().lock())
    });

    if let Err(error) = result {
        tracing::error!("{error}");
        std::process::exit(1);
    }
}

// Logs go to stderr so that stdout only holds the rendered page.
fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(filter),
        )
        .init();
}
