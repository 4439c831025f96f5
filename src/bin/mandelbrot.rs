// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

extern crate clap;
extern crate env_logger;
#[macro_use]
extern crate failure;
extern crate image;
#[macro_use]
extern crate log;
extern crate mandelbrot;
extern crate num_cpus;

use clap::{App, Arg, ArgMatches};
use image::jpeg::JPEGEncoder;
use image::png::PNGEncoder;
use image::pnm::PNMEncoder;
use image::pnm::{PNMSubtype, SampleEncoding};
use image::ColorType;
use mandelbrot::{PixelBuffer, RenderSettings};
use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::time::Instant;

fn parse_pair<T>(s: &str, separator: char) -> Option<(T, T)>
where
    T: FromStr,
{
    match s.find(separator) {
        None => None,
        Some(index) => match (T::from_str(&s[..index]), T::from_str(&s[index + 1..])) {
            (Ok(l), Ok(r)) => Some((l, r)),
            _ => None,
        },
    }
}

fn validate_pair<T: FromStr>(s: &str, separator: char, err: &str) -> Result<(), String> {
    match parse_pair::<T>(s, separator) {
        Some(_) => Ok(()),
        None => Err(err.to_string()),
    }
}

fn validate_range<T: FromStr + Ord>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

fn validate_finite(s: &str, err: &str) -> Result<(), String> {
    match f64::from_str(s) {
        Ok(f) if f.is_finite() => Ok(()),
        _ => Err(err.to_string()),
    }
}

const OUTPUT: &str = "output";
const SIZE: &str = "size";
const XRANGE: &str = "xrange";
const YRANGE: &str = "yrange";
const ITERATIONS: &str = "iterations";
const SPEED: &str = "speed";
const THREADS: &str = "threads";
const QUALITY: &str = "quality";

fn args<'a>() -> ArgMatches<'a> {
    let max_threads = num_cpus::get();

    App::new("mandelbrot")
        .version("0.1.0")
        .about("Escape-time Mandelbrot renderer")
        .arg(
            Arg::with_name(OUTPUT)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .default_value("mandelbrot.jpg")
                .help("Output file; the extension picks the format (jpg, png, ppm)"),
        )
        .arg(
            Arg::with_name(SIZE)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("4000x4000")
                .validator(|s| validate_pair::<u32>(&s, 'x', "Could not parse output image size"))
                .help("Size of output image"),
        )
        .arg(
            Arg::with_name(XRANGE)
                .long(XRANGE)
                .short("x")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("-0.08,-0.07")
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse the x range"))
                .help("Real components at the left and right edges"),
        )
        .arg(
            Arg::with_name(YRANGE)
                .long(YRANGE)
                .short("y")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("-0.825,-0.835")
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse the y range"))
                .help("Imaginary components at the top and bottom edges"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .default_value("500")
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        1_000_000,
                        "Could not parse iteration count",
                        "Iteration count must be between 1 and 1000000",
                    )
                })
                .help("Iterations before a point is considered bounded"),
        )
        .arg(
            Arg::with_name(SPEED)
                .long(SPEED)
                .short("c")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("3")
                .validator(|s| validate_finite(&s, "Color speed must be a finite number"))
                .help("Degrees of hue the palette advances per iteration"),
        )
        .arg(
            Arg::with_name(THREADS)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        max_threads,
                        "Could not parse thread count",
                        &format!("Thread count must be between 1 and {}", max_threads),
                    )
                })
                .help("Number of threads to use in solver (default: one per CPU)"),
        )
        .arg(
            Arg::with_name(QUALITY)
                .long(QUALITY)
                .short("q")
                .takes_value(true)
                .default_value("90")
                .validator(move |s| {
                    validate_range(
                        &s,
                        1u8,
                        100u8,
                        "Could not parse JPEG quality",
                        "JPEG quality must be between 1 and 100",
                    )
                })
                .help("JPEG quality"),
        )
        .get_matches()
}

fn encode(outfile: &str, buffer: &PixelBuffer, quality: u8) -> Result<Vec<u8>, failure::Error> {
    let extension = Path::new(outfile)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    let (width, height) = (buffer.width(), buffer.height());
    let mut bytes = vec![];
    match extension.as_ref().map(String::as_str) {
        Some("jpg") | Some("jpeg") => {
            let mut encoder = JPEGEncoder::new_with_quality(&mut bytes, quality);
            encoder.encode(&buffer.to_rgb_bytes(), width, height, ColorType::RGB(8))?;
        }
        Some("png") => {
            let encoder = PNGEncoder::new(&mut bytes);
            encoder.encode(&buffer.to_rgba_bytes(), width, height, ColorType::RGBA(8))?;
        }
        Some("ppm") | Some("pnm") => {
            let mut encoder = PNMEncoder::new(&mut bytes)
                .with_subtype(PNMSubtype::Pixmap(SampleEncoding::Binary));
            encoder.encode(&buffer.to_rgb_bytes()[..], width, height, ColorType::RGB(8))?;
        }
        _ => bail!("Unsupported output format for {}", outfile),
    }
    Ok(bytes)
}

fn settings_from(matches: &ArgMatches) -> Result<RenderSettings, failure::Error> {
    let (width, height) = parse_pair(matches.value_of(SIZE).unwrap_or_default(), 'x')
        .ok_or_else(|| format_err!("Error parsing image dimensions"))?;
    let x = parse_pair(matches.value_of(XRANGE).unwrap_or_default(), ',')
        .ok_or_else(|| format_err!("Error parsing x range"))?;
    let y = parse_pair(matches.value_of(YRANGE).unwrap_or_default(), ',')
        .ok_or_else(|| format_err!("Error parsing y range"))?;
    let iterations = usize::from_str(matches.value_of(ITERATIONS).unwrap_or_default())?;
    let speed = f64::from_str(matches.value_of(SPEED).unwrap_or_default())?;

    Ok(RenderSettings::new(width, height, x, y)
        .with_iterations(iterations)
        .with_color_speed(speed))
}

fn run() -> Result<(), failure::Error> {
    let start = Instant::now();
    let matches = args();
    let settings = settings_from(&matches)?;
    let threads = match matches.value_of(THREADS) {
        Some(t) => usize::from_str(t)?,
        None => num_cpus::get(),
    };
    let quality = u8::from_str(matches.value_of(QUALITY).unwrap_or_default())?;
    let outfile = matches.value_of(OUTPUT).unwrap_or_default();

    info!("{:?}", settings);
    let buffer = mandelbrot::render_with_threads(&settings, threads)?;
    let rendered = start.elapsed();
    info!("rendered in {} ms", rendered.as_millis());

    let bytes = encode(outfile, &buffer, quality)?;
    fs::write(outfile, bytes)?;

    println!("Total time elapsed: {} ms", start.elapsed().as_millis());
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("Render failure: {}", e);
        std::process::exit(1);
    }
}
