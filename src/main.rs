//! retrohue - legacy formatting code converter

use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use retrohue::{
    AMPERSAND, Deserializer, MiniMessage, SECTION_SIGN, convert_color_code, decode_text,
    named_color_from_hex, read_text_file, to_mini_message,
};

/// Environment variable holding an `EnvFilter` directive for log output.
const LOG_ENV: &str = "RETROHUE_LOG";

#[derive(Parser)]
#[command(name = "retrohue")]
#[command(version, about = "Convert legacy formatting codes to MiniMessage", long_about = None)]
#[command(after_help = "EXAMPLES:
    retrohue convert -a '&aHello &lworld'     Convert ampersand codes
    retrohue convert -f motd.txt --format json  Print the component tree
    retrohue color '&6'                        Look up a color code
    retrohue nearest '#ff8800'                 Nearest named color")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert legacy-coded text
    Convert(ConvertArgs),

    /// Look up a two-character color code such as `&a`
    Color {
        #[arg(value_name = "CODE")]
        code: String,

        /// Code prefix
        #[arg(short, long, default_value_t = AMPERSAND)]
        prefix: char,
    },

    /// Find the named color closest to a `#RRGGBB` value
    Nearest {
        #[arg(value_name = "HEX")]
        hex: String,
    },
}

#[derive(clap::Args)]
struct ConvertArgs {
    /// Text to convert; joined with spaces. Reads stdin when omitted.
    #[arg(value_name = "TEXT", conflicts_with = "file")]
    text: Vec<String>,

    /// Read input from a file
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Encoding to try when the input is not valid UTF-8
    #[arg(long, value_name = "LABEL")]
    encoding: Option<String>,

    /// Character that introduces a legacy code
    #[arg(short, long, default_value_t = SECTION_SIGN, conflicts_with = "ampersand")]
    code_identifier: char,

    /// Use `&` as the code identifier
    #[arg(short, long)]
    ampersand: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Minimessage)]
    format: OutputFormat,

    /// Reject markup with crossed or unclosed tags (json/plain formats)
    #[arg(long)]
    strict: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// MiniMessage markup
    Minimessage,
    /// Component tree as JSON
    Json,
    /// Text with all formatting removed
    Plain,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Command::Convert(args) => convert(&args),
        Command::Color { code, prefix } => lookup_code(&code, prefix),
        Command::Nearest { hex } => nearest(&hex),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_input(args: &ConvertArgs) -> Result<String, String> {
    if let Some(path) = &args.file {
        info!(path = %path.display(), "reading input file");
        return read_text_file(path, args.encoding.as_deref()).map_err(|e| e.to_string());
    }
    if !args.text.is_empty() {
        return Ok(args.text.join(" "));
    }

    debug!("reading input from stdin");
    let mut bytes = Vec::new();
    io::stdin()
        .read_to_end(&mut bytes)
        .map_err(|e| e.to_string())?;
    Ok(decode_text(&bytes, args.encoding.as_deref()).into_owned())
}

fn render(
    input: &str,
    code_identifier: char,
    format: OutputFormat,
    strict: bool,
) -> Result<String, String> {
    let markup = to_mini_message(input, code_identifier);
    if format == OutputFormat::Minimessage {
        return Ok(markup);
    }

    let component = MiniMessage::new()
        .strict(strict)
        .deserialize(&markup)
        .map_err(|e| e.to_string())?;
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(&component).map_err(|e| e.to_string()),
        _ => Ok(component.to_plain_text()),
    }
}

fn convert(args: &ConvertArgs) -> Result<(), String> {
    let input = read_input(args)?;
    let code_identifier = if args.ampersand {
        AMPERSAND
    } else {
        args.code_identifier
    };
    debug!(%code_identifier, bytes = input.len(), "converting");

    let output = render(&input, code_identifier, args.format, args.strict)?;
    if output.ends_with('\n') {
        print!("{output}");
    } else {
        println!("{output}");
    }
    Ok(())
}

fn lookup_code(code: &str, prefix: char) -> Result<(), String> {
    let color = convert_color_code(code, prefix)
        .ok_or_else(|| format!("not a color code: {code:?}"))?;
    println!("{color} ({})", color.value());
    Ok(())
}

fn nearest(hex: &str) -> Result<(), String> {
    let color = named_color_from_hex(hex)
        .ok_or_else(|| format!("not a #RRGGBB color: {hex:?}"))?;
    println!("{color} ({})", color.value());
    Ok(())
}
