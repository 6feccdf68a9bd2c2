// reduce_terminal: c = max(A) with a user-defined terminal max monoid
//
// Reads a Matrix Market `coordinate real` matrix and reduces it with
// z = (x > y) ? x : y, identity 0, and the given terminal (default 1).
// The terminal is meant to be an upper bound of every entry in A, so the
// reduction can stop at the first entry equal to it.

use anyhow::{bail, Context, Result};
use clap::Parser;
use rustsparse::api::{
    binary_op_free, binary_op_new, matrix_free, matrix_reduce, matrix_register, monoid_free,
    monoid_terminal_new, BinaryOpHandle, MatrixHandle,
};
use rustsparse::io::parse_matrix_market;
use rustsparse::ops::{Descriptor, Reduction};
use std::io::{self, Read};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "reduce_terminal", about = "Reduce a sparse matrix with a terminal max monoid")]
struct Args {
    /// Matrix Market file; reads stdin when omitted
    matrix: Option<PathBuf>,

    /// Terminal value of the max monoid
    #[arg(short, long, default_value_t = 1.0, allow_negative_numbers = true)]
    terminal: f64,

    /// Visit every entry even after the terminal is reached
    #[arg(long)]
    no_early_exit: bool,

    /// Fold entries in chunks of this size
    #[arg(long)]
    chunk: Option<usize>,
}

// This is not safe with NaNs
fn maxdouble(x: f64, y: f64) -> f64 {
    if x > y {
        x
    } else {
        y
    }
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display())),
        None => {
            if atty::is(atty::Stream::Stdin) {
                bail!("no matrix file given and stdin is a terminal");
            }
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("reading stdin")?;
            Ok(text)
        }
    }
}

fn reduce_with(
    a: MatrixHandle,
    max: BinaryOpHandle,
    terminal: f64,
    desc: &Descriptor,
) -> Result<Reduction<f64>> {
    let mut max_terminal =
        monoid_terminal_new(max, 0.0f64, terminal).context("Max_Terminal failed")?;
    let result = matrix_reduce::<f64>(a, max_terminal, Some(desc)).context("reduce failed");
    monoid_free(&mut max_terminal)?;
    result
}

impl Args {
    fn descriptor(&self) -> Descriptor {
        let mut desc = Descriptor::new();
        desc.set_terminal_exit(!self.no_early_exit)
            .set_chunk(self.chunk);
        desc
    }
}

/// c = max(A) for a Matrix Market document
fn reduce_text(text: &str, terminal: f64, desc: &Descriptor) -> Result<Reduction<f64>> {
    let a = parse_matrix_market(text).context("A failed")?;

    let mut a = matrix_register(a)?;
    let mut max = binary_op_new::<f64, f64, f64, _>(maxdouble, "maxdouble").context("Max failed")?;
    let result = reduce_with(a, max, terminal, desc);
    matrix_free(&mut a)?;
    binary_op_free(&mut max)?;
    result
}

fn run(args: &Args) -> Result<f64> {
    let text = read_input(args.matrix.as_ref())?;
    let c = reduce_text(&text, args.terminal, &args.descriptor())?;
    tracing::debug!(had_entries = c.had_entries, value = c.value, "reduced");
    Ok(c.value)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(c) => println!("{}", c),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: &str = "%%MatrixMarket matrix coordinate real general
3 3 4
1 1 0.25
2 2 1.0
3 1 0.5
3 3 0.75
";

    #[test]
    fn test_default_terminal_is_one() {
        let args = Args::try_parse_from(["reduce_terminal", "a.mtx"]).unwrap();
        assert_eq!(args.terminal, 1.0);
        assert_eq!(args.descriptor(), Descriptor::new());

        let c = reduce_text(A, args.terminal, &args.descriptor()).unwrap();
        assert_eq!(c, Reduction { value: 1.0, had_entries: true });
    }

    #[test]
    fn test_flags_build_descriptor() {
        let args = Args::try_parse_from([
            "reduce_terminal",
            "--no-early-exit",
            "--chunk",
            "2",
            "-t",
            "-3.5",
        ])
        .unwrap();
        assert_eq!(args.matrix, None);
        assert_eq!(args.terminal, -3.5);

        let desc = args.descriptor();
        assert!(!desc.terminal_exit);
        assert_eq!(desc.chunk, Some(2));

        // terminal below every entry: the full fold still finds the max
        let c = reduce_text(A, args.terminal, &desc).unwrap();
        assert_eq!(c.value, 1.0);
    }

    #[test]
    fn test_terminal_above_every_entry() {
        let c = reduce_text(A, 2.0, &Descriptor::new()).unwrap();
        assert_eq!(c.value, 1.0);
    }

    #[test]
    fn test_empty_matrix_reduces_to_zero() {
        let text = "%%MatrixMarket matrix coordinate real general\n4 4 0\n";
        let c = reduce_text(text, 1.0, &Descriptor::new()).unwrap();
        assert_eq!(c, Reduction { value: 0.0, had_entries: false });
    }

    #[test]
    fn test_rejects_non_double_matrix() {
        let text = "%%MatrixMarket matrix coordinate integer general\n1 1 1\n1 1 3\n";
        let err = reduce_text(text, 1.0, &Descriptor::new()).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.starts_with("A failed"));
        assert!(message.contains("A must be double precision"));
    }
}
