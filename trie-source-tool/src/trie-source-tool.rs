#![allow(clippy::uninlined_format_args)]

use log::LevelFilter;
use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
};
use structopt::StructOpt;
use trie_source::{banner, runtime_types, Language, Values};

#[derive(Debug, StructOpt)]
#[structopt(name = "trie-source-tool")]
struct Opt {
    /// Target language: c or rust.
    #[structopt(long, default_value = "c")]
    lang: Language,

    /// Directory to create the output file in.
    #[structopt(long, parse(from_os_str))]
    out_dir: Option<PathBuf>,

    /// Write to this file, with a banner, instead of stdout.
    #[structopt(long)]
    filename: Option<String>,

    /// First copyright year for the banner.
    #[structopt(long, default_value = "2016")]
    copyright_year: i32,

    /// Generator name for the banner. Defaults to today's date.
    #[structopt(long)]
    generator: Option<String>,

    /// Log more; repeat for even more.
    #[structopt(short, long, parse(from_occurrences))]
    verbose: u8,

    #[structopt(subcommand)]
    cmd: Command,
}

#[derive(Debug, StructOpt)]
enum Command {
    /// Write the bytes of a file as an array of mostly invariant characters.
    InvChars {
        /// The array name.
        #[structopt(long)]
        name: String,

        /// The file whose bytes are written.
        #[structopt(parse(from_os_str))]
        input: PathBuf,
    },

    /// Write numbers as an array.
    Array {
        /// The array name.
        #[structopt(long)]
        name: String,

        /// Element width in bits.
        #[structopt(long, default_value = "16")]
        width: u32,

        /// The values, in decimal or 0x-prefixed hex.
        values: Vec<String>,
    },

    /// Write the Rust declarations of the runtime trie types.
    RuntimeTypes,
}

fn parse_value(s: &str) -> Result<u32, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => s.parse::<u32>(),
    };
    parsed.map_err(|err| format!("invalid value \"{}\": {}", s, err))
}

fn narrow<T: TryFrom<u32>>(values: &[u32], width: u32) -> Result<Vec<T>, String> {
    values
        .iter()
        .map(|&v| {
            T::try_from(v).map_err(|_| format!("value {:#x} does not fit in {} bits", v, width))
        })
        .collect()
}

fn write_numbers(
    out: &mut dyn Write,
    opt: &Opt,
    name: &str,
    width: u32,
    values: &[String],
) -> Result<(), Box<dyn std::error::Error>> {
    let syntax = opt.lang.syntax();
    let values = values
        .iter()
        .map(|s| parse_value(s))
        .collect::<Result<Vec<u32>, _>>()?;
    let prefix = syntax.array_prefix(width, name);
    let postfix = Some(syntax.array_postfix());
    match width {
        8 => {
            let v = narrow::<u8>(&values, width)?;
            trie_source::write_array(out, Some(&prefix), Values::U8(&v), width, v.len(), postfix)?
        }
        16 => {
            let v = narrow::<u16>(&values, width)?;
            trie_source::write_array(out, Some(&prefix), Values::U16(&v), width, v.len(), postfix)?
        }
        _ => trie_source::write_array(
            out,
            Some(&prefix),
            Values::U32(&values),
            width,
            values.len(),
            postfix,
        )?,
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let opt = Opt::from_args();

    let level = match opt.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let mut out: Box<dyn Write> = match &opt.filename {
        Some(filename) => Box::new(banner::create_code_file(
            opt.out_dir.as_deref(),
            filename,
            opt.copyright_year,
            opt.generator.as_deref(),
        )?),
        None => Box::new(io::stdout().lock()),
    };

    match &opt.cmd {
        Command::InvChars { name, input } => {
            let bytes = match fs::read(input) {
                Ok(bytes) => bytes,
                Err(err) => {
                    log::error!("{}: {}", input.display(), err);
                    return Err(err.into());
                }
            };
            let syntax = opt.lang.syntax();
            trie_source::write_array_of_mostly_inv_chars(
                &mut out,
                syntax,
                Some(&syntax.array_prefix(8, name)),
                &bytes,
                bytes.len(),
                Some(syntax.array_postfix()),
            )?;
        }
        Command::Array {
            name,
            width,
            values,
        } => write_numbers(&mut out, &opt, name, *width, values)?,
        Command::RuntimeTypes => runtime_types::write_runtime_types(&mut out)?,
    }

    out.flush()?;
    Ok(())
}
