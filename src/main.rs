use anyhow::Context;
use clap::{App, Arg, ArgMatches};
use colored::*;
use log::LevelFilter;
use rubik_advisor::*;
use std::path::{Path, PathBuf};

fn size_checker(arg: &str) -> Result<(), String> {
    match arg.parse::<usize>() {
        Ok(size) if size > 0 => Ok(()),
        _ => Err(format!("\"{}\" is not a positive integer", arg)),
    }
}

fn facelet_checker(arg: &str) -> Result<(), String> {
    CubeState::parse_facelets(arg)
        .map(|_| ())
        .map_err(|e| e.to_string())
}

fn new_app() -> App<'static> {
    App::new("Rubik Advisor")
        .about("Paint the stickers of a cube, check them and get solving advice")
        .arg(
            Arg::new("FACELETS")
                .validator(facelet_checker)
                .conflicts_with_all(&["load", "size", "scramble"])
                .help(
                    "Sticker colors, face by face in U R F D L B order, row by row.\n\
                    U, R, F, D, L, B for Up, Right, Front, Down, Left and Back\n\
                    (the cube size is deduced from the length)",
                ),
        )
        .arg(
            Arg::new("size")
                .long("size")
                .short('s')
                .help("Start from a solved cube of size <N> (2 when omitted)")
                .require_equals(true)
                .value_name("N")
                .conflicts_with("load")
                .validator(size_checker),
        )
        .arg(
            Arg::new("scramble")
                .long("scramble")
                .short('r')
                .help("<NB> of random sticker swaps on a new cube")
                .require_equals(true)
                .value_name("NB")
                .conflicts_with("load")
                .validator(|arg| arg.parse::<usize>()),
        )
        .arg(
            Arg::new("set")
                .long("set")
                .short('e')
                .help("Paint sticker <IDX> of <FACE> with <COLOR> (repeatable)")
                .require_equals(true)
                .value_name("FACE:IDX:COLOR")
                .multiple_occurrences(true)
                .validator(Edit::parse),
        )
        .arg(
            Arg::new("load")
                .long("load")
                .short('l')
                .help("Start from a cube saved with --save")
                .require_equals(true)
                .value_name("FILE"),
        )
        .arg(
            Arg::new("save")
                .long("save")
                .short('o')
                .help("Save the edited cube to <FILE>")
                .require_equals(true)
                .value_name("FILE"),
        )
        .arg(
            Arg::new("check")
                .long("check")
                .short('c')
                .exclusive(true)
                .takes_value(true)
                .multiple_values(true)
                .value_name("FILES")
                .help("Check several saved cubes at once"),
        )
        .arg(
            Arg::new("labels")
                .long("labels")
                .help("Print sticker position labels"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .multiple_occurrences(true)
                .help("Log more (repeat for more detail)"),
        )
}

fn init_logger(verbosity: u64) {
    env_logger::Builder::new()
        .filter_level(match verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .parse_default_env()
        .init();
}

fn open_bench(cmd: &ArgMatches) -> anyhow::Result<Workbench> {
    if let Some(facelets) = cmd.value_of("FACELETS") {
        let (cube, size) = CubeState::parse_facelets(facelets)?;
        return Ok(Workbench::from_cube(cube, size));
    }
    if let Some(file) = cmd.value_of("load") {
        let snapshot = Snapshot::load(Path::new(file))?;
        return Ok(Workbench::from_cube(snapshot.cube, snapshot.size));
    }

    let size = cmd
        .value_of("size")
        .unwrap_or("2")
        .parse()
        .context("invalid cube size")?;
    let mut bench = Workbench::new(size);
    if let Some(swaps) = cmd.value_of("scramble") {
        bench.scramble(
            swaps.parse().context("invalid swap count")?,
            &mut rand::thread_rng(),
        );
    }
    Ok(bench)
}

fn check(files: Vec<PathBuf>) -> anyhow::Result<()> {
    let mut failed = 0;

    for (file, outcome) in Snapshot::check_all(&files) {
        match outcome {
            Ok(result) => {
                if result.error().is_some() {
                    failed += 1;
                }
                println!("{} {}", format!("{}:", file.display()).bright_yellow(), result);
            }
            Err(e) => {
                failed += 1;
                println!("{}{}", "ERROR: ".bright_red(), e);
            }
        }
    }
    if failed > 0 {
        anyhow::bail!("{} of {} cubes failed the check", failed, files.len());
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cmd = new_app().get_matches();

    init_logger(cmd.occurrences_of("verbose"));
    if let Some(files) = cmd.values_of("check") {
        return check(files.map(PathBuf::from).collect());
    }

    let mut bench = open_bench(&cmd)?;
    if let Some(edits) = cmd.values_of("set") {
        for edit in edits {
            bench.apply(Edit::parse(edit)?)?;
        }
    }
    if cmd.is_present("labels") {
        bench.toggle_labels();
    }
    println!("\n{}", bench);
    println!("{}\n", bench.solve());

    if let Some(file) = cmd.value_of("save") {
        Snapshot::new(bench.size(), bench.cube().clone())
            .save(Path::new(file))
            .with_context(|| format!("could not save the cube to {}", file))?;
        println!("{}{}", "SAVED: ".bright_green(), file);
    }
    Ok(())
}
