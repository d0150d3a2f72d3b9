use std::path::PathBuf;

use clap::{Arg, ArgAction, ArgMatches, Command, crate_version, value_parser};
use glam::DVec2;
use miette::{IntoDiagnostic, WrapErr};
use routeshift::batch::{read_shapes, shapes_to_json};
use routeshift::{Token, apply_shift, path_center_checked, shift_path_report, tokenize};

fn main() -> miette::Result<()> {
    // Logs go to stderr, stdout carries the result
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = cli().get_matches();
    match matches.subcommand() {
        Some(("shift", m)) => shift(m),
        Some(("center", m)) => center(m),
        Some(("batch", m)) => batch(m),
        Some(("tokens", m)) => tokens(m),
        _ => unreachable!("subcommand is required"),
    }
}

fn cli() -> Command {
    let path_data = || {
        Arg::new("path")
            .value_name("PATH_DATA")
            .help("SVG path data, e.g. \"M 10 20 L 30 40\"")
            .required(true)
            .allow_hyphen_values(true)
            .action(ArgAction::Set)
    };
    let delta = |name: &'static str, help: &'static str| {
        Arg::new(name)
            .long(name)
            .value_name("NUM")
            .value_parser(value_parser!(f64))
            .allow_negative_numbers(true)
            .default_value("0")
            .help(help)
            .action(ArgAction::Set)
    };

    Command::new("routeshift")
        .version(crate_version!())
        .about("moves SVG path data from shape-local coordinates onto the map")
        .subcommand_required(true)
        .subcommand(
            Command::new("shift")
                .about("translate the absolute commands of a path")
                .arg(path_data())
                .arg(delta("dx", "horizontal offset"))
                .arg(delta("dy", "vertical offset"))
                .arg(
                    Arg::new("strict")
                        .long("strict")
                        .help("fail instead of dropping incomplete trailing data")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("center")
                .about("estimate the center of a path made of coordinate pairs")
                .arg(path_data())
                .arg(delta("dx", "horizontal offset"))
                .arg(delta("dy", "vertical offset")),
        )
        .subcommand(
            Command::new("batch")
                .about("fill in absolutePath for every shape in a JSON file")
                .arg(
                    Arg::new("input")
                        .value_name("FILE")
                        .value_parser(value_parser!(PathBuf))
                        .required(true)
                        .help("JSON array of shapes")
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .value_name("FILE")
                        .value_parser(value_parser!(PathBuf))
                        .help("where to write the shapes (default: stdout)")
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("parallel")
                        .long("parallel")
                        .help("shift shapes on all cores")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("tokens")
                .about("print the token stream of a path")
                .arg(path_data()),
        )
}

fn offset(m: &ArgMatches) -> DVec2 {
    let dx = m.get_one::<f64>("dx").copied().unwrap_or_default();
    let dy = m.get_one::<f64>("dy").copied().unwrap_or_default();
    DVec2::new(dx, dy)
}

fn path_arg(m: &ArgMatches) -> &str {
    m.get_one::<String>("path").map(String::as_str).unwrap_or_default()
}

fn shift(m: &ArgMatches) -> miette::Result<()> {
    let source = path_arg(m);
    let report = shift_path_report(source, offset(m));
    let path = if m.get_flag("strict") {
        report.into_strict("PATH_DATA", source)?
    } else {
        if let Some(truncation) = report.truncation {
            tracing::warn!(
                "dropped {} trailing token(s) at byte {}",
                truncation.discarded,
                truncation.at
            );
        }
        report.path
    };
    println!("{}", path);
    Ok(())
}

fn center(m: &ArgMatches) -> miette::Result<()> {
    let source = path_arg(m);
    match path_center_checked(source, offset(m)) {
        Some(c) => {
            println!("{} {}", c.x, c.y);
            Ok(())
        }
        None => Err(miette::miette!(
            help = "the estimate needs an even, non-zero count of numbers",
            "center of {:?} is undefined",
            source
        )),
    }
}

fn batch(m: &ArgMatches) -> miette::Result<()> {
    let Some(input) = m.get_one::<PathBuf>("input") else {
        unreachable!("input is required");
    };
    let mut shapes = read_shapes(input)?;
    tracing::info!("{}: {} shape(s)", input.display(), shapes.len());

    if m.get_flag("parallel") {
        routeshift::apply_shift_par(&mut shapes);
    } else {
        apply_shift(&mut shapes);
    }

    let json = shapes_to_json(&shapes)?;
    match m.get_one::<PathBuf>("output") {
        Some(output) => std::fs::write(output, json)
            .into_diagnostic()
            .wrap_err_with(|| format!("failed to write {}", output.display()))?,
        None => println!("{}", json),
    }
    Ok(())
}

fn tokens(m: &ArgMatches) -> miette::Result<()> {
    for token in tokenize(path_arg(m)) {
        match token {
            Token::Command { command, start } => {
                let kind = if command.absolute { "absolute" } else { "relative" };
                println!("{:>5}  {}  {:?} {}", start, command, command.kind, kind);
            }
            Token::Number { number, start } => {
                println!("{:>5}  {}  = {}", start, number.text, number.value);
            }
        }
    }
    Ok(())
}
