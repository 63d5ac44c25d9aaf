use std::error::Error;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use clap::Parser;
use json_mend::{FormatOptions, FormatResult, Indent};

#[derive(Parser, Debug)]
#[command(name = "jmend", version, about = "JSON normalizer and pretty-printer")]
struct Args {
    /// Input file path. Omit or use '-' to read from stdin.
    input: Option<String>,

    /// Output file path (prints to stdout if omitted).
    #[arg(short, long, value_name = "file")]
    output: Option<String>,

    /// Indentation size (default: 2).
    #[arg(long, value_name = "number", default_value_t = 2)]
    indent: usize,

    /// Validate only; write no output.
    #[arg(long)]
    check: bool,
}

#[derive(Debug)]
enum InputSource {
    Stdin,
    File(String),
}

fn main() {
    if let Err(err) = run() {
        eprintln!("ERROR  {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let (input_text, input_source) = read_input(args.input.as_deref())?;
    let options = FormatOptions::new().with_indent(Indent::spaces(args.indent));

    match json_mend::format_with_options(&input_text, &options) {
        FormatResult::Empty => Ok(()),
        FormatResult::Formatted { text } => {
            if args.check {
                return Ok(());
            }
            let output_target = OutputTarget::from_arg(args.output.as_deref());
            write_output(output_target.path(), text.as_bytes())?;
            if let OutputTarget::File(path) = &output_target {
                report_status(&input_source, path);
            }
            Ok(())
        }
        FormatResult::ParseError { message } => Err(json_mend::Error::parse(message).into()),
    }
}

fn read_input(input: Option<&str>) -> Result<(String, InputSource), Box<dyn Error>> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok((buf, InputSource::Stdin))
        }
        Some(path) => {
            let buf = fs::read_to_string(path)?;
            Ok((buf, InputSource::File(path.to_string())))
        }
    }
}

#[derive(Clone, Debug)]
enum OutputTarget {
    Stdout,
    File(String),
}

impl OutputTarget {
    fn from_arg(output: Option<&str>) -> Self {
        match output {
            Some(path) if path != "-" => OutputTarget::File(path.to_string()),
            _ => OutputTarget::Stdout,
        }
    }

    fn path(&self) -> Option<&str> {
        match self {
            OutputTarget::Stdout => None,
            OutputTarget::File(path) => Some(path.as_str()),
        }
    }
}

fn write_output(path: Option<&str>, data: &[u8]) -> Result<(), Box<dyn Error>> {
    match path {
        Some(path) if path != "-" => {
            let mut file = fs::File::create(path)?;
            file.write_all(data)?;
            Ok(())
        }
        _ => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(data)?;
            Ok(())
        }
    }
}

fn report_status(input_source: &InputSource, output_path: &str) {
    let input_label = match input_source {
        InputSource::Stdin => "stdin".to_string(),
        InputSource::File(path) => display_path(path),
    };
    println!("✔ Formatted {input_label} → {}", display_path(output_path));
}

fn display_path(path: &str) -> String {
    let path = Path::new(path);
    let Ok(cwd) = std::env::current_dir() else {
        return path.to_string_lossy().into_owned();
    };
    match path.strip_prefix(&cwd) {
        Ok(relative) => relative.to_string_lossy().into_owned(),
        Err(_) => path.to_string_lossy().into_owned(),
    }
}
