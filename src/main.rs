use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{value_parser, Arg, Command};
use hexrefine::{read_hex_mesh, refine_mesh, write_hex_mesh, Endian, RefineOptions};

const USAGE: &str = "Usage: hexrefine [input] [output]";

fn usage() -> ! {
    eprintln!("{USAGE}");
    std::process::exit(1);
}

fn main() -> Result<()> {
    let args: Vec<OsString> = std::env::args_os().collect();
    if args.len() != 3 {
        usage();
    }

    // everything after the program name is a path, even "--" or "-x"
    let argv = args[..1]
        .iter()
        .cloned()
        .chain([OsString::from("--")])
        .chain(args[1..].iter().cloned());

    let matches = Command::new("hexrefine")
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new("input")
                .help("Mesh file to refine")
                .value_name("INPUT")
                .value_parser(value_parser!(PathBuf))
                .allow_hyphen_values(true)
                .required(true),
        )
        .arg(
            Arg::new("output")
                .help("Where to write the refined mesh")
                .value_name("OUTPUT")
                .value_parser(value_parser!(PathBuf))
                .allow_hyphen_values(true)
                .required(true),
        )
        .try_get_matches_from(argv)
        .unwrap_or_else(|_| usage());

    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let input = matches
        .get_one::<PathBuf>("input")
        .context("missing input path")?;
    let output = matches
        .get_one::<PathBuf>("output")
        .context("missing output path")?;
    let endian = Endian::native();

    log::info!("Reading mesh {}", input.display());
    let mesh = read_hex_mesh(input, endian)
        .with_context(|| format!("Failed to read mesh from {}", input.display()))?;
    let header = mesh.header()?;
    log::info!(
        "Input: {} points, {} cells, extents {:?}",
        header.point_count,
        header.element_count,
        header.extents
    );

    log::info!("Refining");
    let refined = refine_mesh(mesh, RefineOptions::default()).context("Failed to refine mesh")?;
    let header = refined.header().context("Refined mesh does not fit the file format")?;
    log::info!("Output header: {}", serde_json::to_string(&header)?);

    log::info!("Writing mesh {}", output.display());
    write_hex_mesh(output, &refined, endian)
        .with_context(|| format!("Failed to write mesh to {}", output.display()))?;

    log::info!("Done");
    Ok(())
}
