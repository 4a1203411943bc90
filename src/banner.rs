//! Creating generated files and writing their header banners.

use crate::error::Error;
use crate::sink::Sink;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// The last year covered by the fixed IBM copyright banner.
const LEGACY_BANNER_YEAR: i32 = 2016;

/// What goes in the "machine-generated by" slot: the generator name, or
/// today's date if there is none.
fn generated_by(generator: Option<&str>) -> String {
    match generator {
        Some(generator) => generator.to_string(),
        None => chrono::Local::now().format("%Y-%m-%d").to_string(),
    }
}

/// The banner for a generated source file, in `//` comment syntax.
pub fn code_banner(filename: &str, copyright_year: i32, generator: Option<&str>) -> String {
    let generator = generated_by(generator);
    if copyright_year <= LEGACY_BANNER_YEAR {
        format!(
            "// © 2016 and later: Unicode, Inc. and others.\n\
             // License & terms of use: http://www.unicode.org/copyright.html\n\
             //\n\
             // Copyright (C) 1999-2016, International Business Machines\n\
             // Corporation and others.  All Rights Reserved.\n\
             //\n\
             // file name: {}\n\
             //\n\
             // machine-generated by: {}\n\
             \n\n",
            filename, generator
        )
    } else {
        format!(
            "// © {} and later: Unicode, Inc. and others.\n\
             // License & terms of use: http://www.unicode.org/copyright.html\n\
             //\n\
             // file name: {}\n\
             //\n\
             // machine-generated by: {}\n\
             \n\n",
            copyright_year, filename, generator
        )
    }
}

/// The banner for a generated text data file, in `#` comment syntax.
pub fn text_data_banner(filename: &str, generator: Option<&str>) -> String {
    format!(
        "# Copyright (C) 2016 and later: Unicode, Inc. and others.\n\
         # License & terms of use: http://www.unicode.org/copyright.html\n\
         # Copyright (C) 1999-2016, International Business Machines\n\
         # Corporation and others.  All Rights Reserved.\n\
         #\n\
         # file name: {}\n\
         #\n\
         # machine-generated by: {}\n\
         \n\n",
        filename,
        generated_by(generator)
    )
}

pub fn write_code_banner<S: Sink + ?Sized>(
    sink: &mut S,
    filename: &str,
    copyright_year: i32,
    generator: Option<&str>,
) -> Result<(), Error> {
    sink.write_text(&code_banner(filename, copyright_year, generator))?;
    Ok(())
}

pub fn write_text_data_banner<S: Sink + ?Sized>(
    sink: &mut S,
    filename: &str,
    generator: Option<&str>,
) -> Result<(), Error> {
    sink.write_text(&text_data_banner(filename, generator))?;
    Ok(())
}

fn create(dir: Option<&Path>, filename: &str, banner: &str) -> Result<BufWriter<File>, Error> {
    let path = match dir {
        Some(dir) => dir.join(filename),
        None => PathBuf::from(filename),
    };
    let file = match File::create(&path) {
        Ok(file) => file,
        Err(source) => {
            log::error!("{}: unable to create file", path.display());
            return Err(Error::SinkUnavailable { path, source });
        }
    };
    log::debug!("created {}", path.display());
    let mut sink = BufWriter::new(file);
    sink.write_text(banner)?;
    Ok(sink)
}

/// Create `filename` in `dir` and write the code banner to it.
///
/// The returned writer is owned by the caller, which must flush it when done.
pub fn create_code_file(
    dir: Option<&Path>,
    filename: &str,
    copyright_year: i32,
    generator: Option<&str>,
) -> Result<BufWriter<File>, Error> {
    create(dir, filename, &code_banner(filename, copyright_year, generator))
}

/// Create `filename` in `dir` and write the text data banner to it.
pub fn create_text_data_file(
    dir: Option<&Path>,
    filename: &str,
    generator: Option<&str>,
) -> Result<BufWriter<File>, Error> {
    create(dir, filename, &text_data_banner(filename, generator))
}
