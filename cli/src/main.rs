use std::error::Error;
use std::fs::File;
use std::io::{self, Read, Write};

use clap::{Parser, Subcommand};
use mse_text::{read_tree, MessageQueue, Reader, ReaderOptions, Version};

#[derive(Parser, Debug)]
#[command(name = "mse-text", version, about = "MSE structured-text inspector")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Read a document completely and report every warning it produces.
    Check {
        /// Input file path, or '-' for stdin.
        input: String,

        /// Suppress recoverable anomalies instead of reporting them.
        #[arg(long)]
        lenient: bool,

        /// Application version to check the file's declared version against.
        #[arg(long, value_name = "x.y.z")]
        app_version: Option<Version>,
    },
    /// Print a schema-less JSON view of a document.
    Dump {
        /// Input file path, or '-' for stdin.
        input: String,

        /// Output file path (prints to stdout if omitted).
        #[arg(short, long, value_name = "file")]
        output: Option<String>,
    },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("ERROR  {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    match args.command {
        Command::Check {
            input,
            lenient,
            app_version,
        } => run_check(&input, lenient, app_version),
        Command::Dump { input, output } => run_dump(&input, output.as_deref()),
    }
}

fn run_check(
    input: &str,
    lenient: bool,
    app_version: Option<Version>,
) -> Result<(), Box<dyn Error>> {
    let (bytes, name) = read_input(input)?;
    let queue = MessageQueue::new();
    let mut options = ReaderOptions::new()
        .with_lenient(lenient)
        .with_sink(queue.clone());
    if let Some(version) = app_version {
        options = options.with_app_version(version);
    }

    let mut reader = Reader::new(bytes.as_slice(), name.clone(), &options)?;
    read_tree(&mut reader)?;
    let warning_count = reader.warnings().len();
    reader.show_warnings();

    for message in queue.drain() {
        eprintln!("{}", message.text);
    }

    if warning_count == 0 {
        println!("ok: {name} (version {})", reader.file_app_version());
    } else {
        println!(
            "checked: {name} (version {}), {warning_count} warning(s)",
            reader.file_app_version()
        );
    }
    Ok(())
}

fn run_dump(input: &str, output: Option<&str>) -> Result<(), Box<dyn Error>> {
    let (bytes, name) = read_input(input)?;
    // the dump has no schema; lenient mode keeps structural guesses quiet
    let options = ReaderOptions::new().with_lenient(true);
    let mut reader = Reader::new(bytes.as_slice(), name, &options)?;
    let nodes = read_tree(&mut reader)?;
    let json = serde_json::to_string_pretty(&nodes)?;

    match output {
        Some(path) => {
            let mut file = File::create(path)?;
            file.write_all(json.as_bytes())?;
            file.write_all(b"\n")?;
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn read_input(input: &str) -> Result<(Vec<u8>, String), Box<dyn Error>> {
    if input == "-" {
        let mut bytes = Vec::new();
        io::stdin().read_to_end(&mut bytes)?;
        Ok((bytes, "<stdin>".to_owned()))
    } else {
        let mut bytes = Vec::new();
        File::open(input)?.read_to_end(&mut bytes)?;
        Ok((bytes, input.to_owned()))
    }
}
