// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fs::File;
use std::io::{self, Read, Write};
use std::process;

use pico_args::Arguments;

const HELP: &str = "\
svguri converts SVG into a tree of native vector drawing primitives.

USAGE:
  svguri [OPTIONS] <in-svg> <out-file>  # from file to file
  svguri [OPTIONS] <in-svg> -c          # from file to stdout
  svguri [OPTIONS] - <out-file>         # from stdin to file
  svguri [OPTIONS] - -c                 # from stdin to stdout

OPTIONS:
  -h, --help                        Prints help information
  -V, --version                     Prints version information
  -c                                Prints the output tree to the stdout

  --width LENGTH                    Sets the requested render width
                                    [default: --default-width]
  --height LENGTH                   Sets the requested render height
                                    [default: --default-height]
  --default-width LENGTH            Sets the width that will be used
                                    when no '--width' is set
                                    [values: 1..4294967295 (inclusive)] [default: 100]
  --default-height LENGTH           Sets the height that will be used
                                    when no '--height' is set
                                    [values: 1..4294967295 (inclusive)] [default: 100]

  --fill COLOR                      Replaces all fill colors with COLOR
  --replace-fill FROM=TO            Replaces the FROM fill color with TO.
                                    This option can be set multiple times.
                                    Cannot be used together with '--fill'
  --fill-all                        Sets '--fill' on all elements,
                                    even on ones without a fill

  --indent INDENT                   Sets the XML nodes indent
                                    [values: none, 0, 1, 2, 3, 4, tabs] [default: 4]
  --attrs-indent INDENT             Sets the XML attributes indent
                                    [values: none, 0, 1, 2, 3, 4, tabs] [default: none]
  --quiet                           Disables warnings

ARGS:
  <in-svg>                          Input file
  <out-file>                        Output file
";

#[derive(Debug)]
struct Args {
    width: Option<f32>,
    height: Option<f32>,
    default_width: u32,
    default_height: u32,

    fill: Option<String>,
    replace_fill: Vec<svguri::FillReplacement>,
    fill_all: bool,

    indent: xmlwriter::Indent,
    attrs_indent: xmlwriter::Indent,

    quiet: bool,

    input: String,
    output: String,
}

fn collect_args() -> Result<Args, pico_args::Error> {
    let mut input = Arguments::from_env();

    if input.contains(["-h", "--help"]) {
        print!("{}", HELP);
        process::exit(0);
    }

    if input.contains(["-V", "--version"]) {
        println!("{}", env!("CARGO_PKG_VERSION"));
        process::exit(0);
    }

    Ok(Args {
        width: input.opt_value_from_fn("--width", parse_size)?,
        height: input.opt_value_from_fn("--height", parse_size)?,
        default_width: input
            .opt_value_from_fn("--default-width", parse_length)?
            .unwrap_or(100),
        default_height: input
            .opt_value_from_fn("--default-height", parse_length)?
            .unwrap_or(100),

        fill: input.opt_value_from_str("--fill")?,
        replace_fill: input.values_from_fn("--replace-fill", parse_replacement)?,
        fill_all: input.contains("--fill-all"),

        indent: input
            .opt_value_from_fn("--indent", parse_indent)?
            .unwrap_or(xmlwriter::Indent::Spaces(4)),
        attrs_indent: input
            .opt_value_from_fn("--attrs-indent", parse_indent)?
            .unwrap_or(xmlwriter::Indent::None),

        quiet: input.contains("--quiet"),

        input: input.free_from_str()?,
        output: input.free_from_str()?,
    })
}

fn parse_size(s: &str) -> Result<f32, String> {
    let n: f32 = s.parse().map_err(|_| "invalid length")?;

    if n.is_finite() && n > 0.0 {
        Ok(n)
    } else {
        Err("LENGTH must be positive".to_string())
    }
}

fn parse_length(s: &str) -> Result<u32, String> {
    let n: u32 = s.parse().map_err(|_| "invalid length")?;

    if n > 0 {
        Ok(n)
    } else {
        Err("LENGTH cannot be zero".to_string())
    }
}

fn parse_replacement(s: &str) -> Result<svguri::FillReplacement, String> {
    let (color, fill) = s
        .split_once('=')
        .ok_or("replacement must be set as FROM=TO")?;

    let color = color.trim();
    let fill = fill.trim();
    if color.is_empty() || fill.is_empty() {
        return Err("replacement colors cannot be empty".to_string());
    }

    Ok(svguri::FillReplacement::new(color, fill))
}

fn parse_indent(s: &str) -> Result<xmlwriter::Indent, String> {
    let indent = match s {
        "none" => xmlwriter::Indent::None,
        "0" => xmlwriter::Indent::Spaces(0),
        "1" => xmlwriter::Indent::Spaces(1),
        "2" => xmlwriter::Indent::Spaces(2),
        "3" => xmlwriter::Indent::Spaces(3),
        "4" => xmlwriter::Indent::Spaces(4),
        "tabs" => xmlwriter::Indent::Tabs,
        _ => return Err("invalid INDENT value".to_string()),
    };

    Ok(indent)
}

#[derive(Clone, PartialEq, Debug)]
enum InputFrom<'a> {
    Stdin,
    File(&'a str),
}

#[derive(Clone, PartialEq, Debug)]
enum OutputTo<'a> {
    Stdout,
    File(&'a str),
}

fn main() {
    let args = match collect_args() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Error: {}.", e);
            process::exit(1);
        }
    };

    if !args.quiet {
        if let Ok(()) = log::set_logger(&LOGGER) {
            log::set_max_level(log::LevelFilter::Warn);
        }
    }

    if let Err(e) = process(args) {
        eprintln!("Error: {}.", e);
        process::exit(1);
    }
}

fn process(args: Args) -> Result<(), String> {
    let (in_svg, out_file) = {
        let in_svg = args.input.as_str();
        let out_file = args.output.as_str();

        let svg_from = if in_svg == "-" {
            InputFrom::Stdin
        } else if in_svg == "-c" {
            return Err("-c should be set after input".to_string());
        } else {
            InputFrom::File(in_svg)
        };

        let svg_to = if out_file == "-c" {
            OutputTo::Stdout
        } else {
            OutputTo::File(out_file)
        };

        (svg_from, svg_to)
    };

    let fill = match (args.fill, args.replace_fill.is_empty()) {
        (Some(_), false) => {
            return Err("--fill and --replace-fill cannot be set together".to_string());
        }
        (Some(color), true) => Some(svguri::Fill::Color(color)),
        (None, false) => Some(svguri::Fill::Replace(args.replace_fill)),
        (None, true) => None,
    };

    if args.fill_all && !matches!(fill, Some(svguri::Fill::Color(_))) {
        log::warn!("--fill-all has no effect without --fill.");
    }

    let opt = svguri::Options {
        fill,
        fill_all: args.fill_all,
        width: args.width,
        height: args.height,
        default_size: svguri::Size::from_wh(args.default_width as f32, args.default_height as f32)
            .ok_or("invalid default size")?,
    };

    let input_svg = match in_svg {
        InputFrom::Stdin => load_stdin(),
        InputFrom::File(path) => std::fs::read(path).map_err(|e| e.to_string()),
    }?;

    let tree = svguri::Tree::from_data(&input_svg, &opt).map_err(|e| e.to_string())?;

    let xml_opt = svguri::WriteOptions {
        use_single_quote: false,
        indent: args.indent,
        attributes_indent: args.attrs_indent,
    };

    let s = tree.to_string(&xml_opt);
    match out_file {
        OutputTo::Stdout => {
            io::stdout()
                .write_all(s.as_bytes())
                .map_err(|_| "failed to write to the stdout".to_string())?;
        }
        OutputTo::File(path) => {
            let mut f =
                File::create(path).map_err(|_| "failed to create the output file".to_string())?;
            f.write_all(s.as_bytes())
                .map_err(|_| "failed to write to the output file".to_string())?;
        }
    }

    Ok(())
}

fn load_stdin() -> Result<Vec<u8>, String> {
    let mut buf = Vec::new();
    let stdin = io::stdin();
    let mut handle = stdin.lock();

    handle
        .read_to_end(&mut buf)
        .map_err(|_| "failed to read from stdin".to_string())?;

    Ok(buf)
}

/// A simple stderr logger.
static LOGGER: SimpleLogger = SimpleLogger;
struct SimpleLogger;
impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::LevelFilter::Warn
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            let target = if !record.target().is_empty() {
                record.target()
            } else {
                record.module_path().unwrap_or_default()
            };

            let line = record.line().unwrap_or(0);
            let args = record.args();

            match record.level() {
                log::Level::Error => eprintln!("Error (in {}:{}): {}", target, line, args),
                log::Level::Warn => eprintln!("Warning (in {}:{}): {}", target, line, args),
                log::Level::Info => eprintln!("Info (in {}:{}): {}", target, line, args),
                log::Level::Debug => eprintln!("Debug (in {}:{}): {}", target, line, args),
                log::Level::Trace => eprintln!("Trace (in {}:{}): {}", target, line, args),
            }
        }
    }

    fn flush(&self) {}
}
