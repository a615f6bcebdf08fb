use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::Parser;
use huffcode::{Compressed, EncodedStream, bits};
use tracing::{debug, info};

/// Huffman-encode a file, then decode it again to check the round trip.
#[derive(Parser, Debug)]
#[command(name = "huffcode", version)]
struct Args {
    /// File to compress, or `-` for stdin
    #[arg(long, default_value = "input.txt", env = "HUFFCODE_INPUT")]
    input: PathBuf,

    /// Where to write the encoded bits, one '0' or '1' character per bit
    #[arg(long, default_value = "encoded.txt", env = "HUFFCODE_ENCODED")]
    encoded: PathBuf,

    /// Where to write the decoded bytes
    #[arg(long, default_value = "decoded.txt", env = "HUFFCODE_DECODED")]
    decoded: PathBuf,

    /// Print the code table to stdout
    #[arg(long)]
    print_codes: bool,
}

fn read_input(path: &Path) -> anyhow::Result<Vec<u8>> {
    if path == Path::new("-") {
        let mut input = vec![];
        io::stdin()
            .read_to_end(&mut input)
            .context("failed to read stdin")?;
        return Ok(input);
    }
    fs::read(path).with_context(|| format!("failed to read {}", path.display()))
}

fn read_stream(path: &Path) -> anyhow::Result<EncodedStream> {
    let encoded = fs::read_to_string(path)
        .with_context(|| format!("failed to read back {}", path.display()))?;
    bits::from_text(&encoded).with_context(|| format!("failed to parse {}", path.display()))
}

fn print_codes(compressed: &Compressed) {
    println!(
        "{} symbols, longest code {} bits",
        compressed.codes().len(),
        compressed.tree().depth()
    );
    println!("{:>6} {:>10}  code", "symbol", "frequency");
    for (symbol, code) in compressed.codes().iter() {
        let shown = if symbol.is_ascii_graphic() {
            format!("'{}'", symbol as char)
        } else {
            format!("{symbol:#04x}")
        };
        println!(
            "{shown:>6} {:>10}  {}",
            compressed.frequencies().get(symbol),
            bits::to_text(code)
        );
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let input = read_input(&args.input)?;
    let compressed = Compressed::new(&input)
        .with_context(|| format!("failed to encode {}", args.input.display()))?;

    if args.print_codes {
        print_codes(&compressed);
    }

    fs::write(&args.encoded, bits::to_text(compressed.stream()))
        .with_context(|| format!("failed to write {}", args.encoded.display()))?;
    debug!(path = %args.encoded.display(), "wrote encoded stream");

    let stream = read_stream(&args.encoded)?;
    let decoded = huffcode::decode(&stream, compressed.tree())
        .with_context(|| format!("failed to decode {}", args.encoded.display()))?;
    if decoded != input {
        bail!("decoded output differs from {}", args.input.display());
    }

    fs::write(&args.decoded, &decoded)
        .with_context(|| format!("failed to write {}", args.decoded.display()))?;

    let stats = compressed.stats();
    info!(
        input_bytes = stats.input_bytes,
        symbols = stats.distinct_symbols,
        encoded_bits = stats.encoded_bits,
        max_code_len = stats.max_code_len,
        ratio = stats.ratio(),
        bits_per_symbol = stats.bits_per_symbol(),
        entropy = stats.entropy,
        "round trip verified"
    );
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("huffcode=info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }

    println!(
        "Huffman encoding and decoding completed. Check {} and {} for results.",
        args.encoded.display(),
        args.decoded.display()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_in(dir: &Path) -> Args {
        Args {
            input: dir.join("input.txt"),
            encoded: dir.join("encoded.txt"),
            decoded: dir.join("decoded.txt"),
            print_codes: false,
        }
    }

    #[test]
    fn writes_encoded_and_decoded_files() {
        let dir = tempfile::tempdir().unwrap();
        let args = args_in(dir.path());
        fs::write(&args.input, "abracadabra").unwrap();

        run(&args).unwrap();

        let encoded = fs::read_to_string(&args.encoded).unwrap();
        assert_eq!(encoded.len(), 23);
        assert!(encoded.chars().all(|c| c == '0' || c == '1'));
        assert_eq!(fs::read(&args.decoded).unwrap(), b"abracadabra");
    }

    #[test]
    fn empty_input_fails() {
        let dir = tempfile::tempdir().unwrap();
        let args = args_in(dir.path());
        fs::write(&args.input, "").unwrap();

        let err = run(&args).unwrap_err();
        assert_eq!(
            err.downcast_ref::<huffcode::HuffmanError>(),
            Some(&huffcode::HuffmanError::EmptyInput)
        );
        assert!(!args.decoded.exists());
    }

    #[test]
    fn missing_input_fails() {
        let dir = tempfile::tempdir().unwrap();
        let args = args_in(dir.path());
        let err = run(&args).unwrap_err();
        assert!(format!("{err:#}").contains("input.txt"));
    }

    #[test]
    fn bad_bit_file_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("encoded.txt");
        fs::write(&path, "01x1").unwrap();

        let err = read_stream(&path).unwrap_err();
        assert!(format!("{err:#}").contains("encoded.txt"));
        assert_eq!(
            err.downcast_ref::<huffcode::HuffmanError>(),
            Some(&huffcode::HuffmanError::InvalidBitChar {
                position: 2,
                found: 'x'
            })
        );
    }

    #[test]
    fn parses_flags() {
        let args = Args::try_parse_from([
            "huffcode",
            "--input",
            "a.bin",
            "--encoded",
            "a.bits",
            "--print-codes",
        ])
        .unwrap();
        assert_eq!(args.input, PathBuf::from("a.bin"));
        assert_eq!(args.encoded, PathBuf::from("a.bits"));
        assert!(args.print_codes);
    }
}
