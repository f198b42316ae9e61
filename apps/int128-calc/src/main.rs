use clap::{Arg, ArgAction, ArgMatches, Command};
use log::LevelFilter;
use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};
use wideint::Int128;

// -------------------------------------------------------------------------------------------------
// HELPERS
// -------------------------------------------------------------------------------------------------

fn operand(name: &'static str) -> Arg {
    Arg::new(name)
        .required(true)
        .allow_hyphen_values(true)
        .help("Decimal or 0x prefixed hexadecimal integer, with an optional leading '-'")
}

fn parse_operand(matches: &ArgMatches, name: &str, strict: bool) -> Result<Int128, wideint::Error> {
    let input = matches
        .get_one::<String>(name)
        .ok_or_else(|| wideint::Error::from(format!("missing operand '{name}'")))?;

    let value = if strict {
        Int128::from_str_strict(input)?
    } else {
        Int128::from_str_lenient(input)
    };
    log::debug!("parsed {input:?} as {value:?}");

    Ok(value)
}

/// Prints the decimal value when available, then the `high low` words.
fn print_value(value: Int128) {
    #[cfg(feature = "format")]
    println!("{value}");
    println!("{} {}", value.high(), value.low());
}

// -------------------------------------------------------------------------------------------------
// MAIN
// -------------------------------------------------------------------------------------------------

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // We parse the input args
    let matches = Command::new("int128-calc")
        .about("Wrapping 128-bit integer arithmetic built from 64-bit words")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Prints debug messages"),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .action(ArgAction::SetTrue)
                .help("Reject operands containing characters outside of the digit set"),
        )
        .subcommand(
            Command::new("add")
                .about("Adds two integers, wrapping modulo 2^128")
                .arg(operand("lhs"))
                .arg(operand("rhs")),
        )
        .subcommand(
            Command::new("sub")
                .about("Subtracts two integers, wrapping modulo 2^128")
                .arg(operand("lhs"))
                .arg(operand("rhs")),
        )
        .subcommand(
            Command::new("neg")
                .about("Two's complement negation")
                .arg(operand("value")),
        )
        .subcommand(
            Command::new("parse")
                .about("Shows how an integer is parsed")
                .arg(operand("value")),
        )
        .arg_required_else_help(true)
        .get_matches();

    // We initialize the logger with proper verbosity
    let verb = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    CombinedLogger::init(vec![TermLogger::new(
        verb,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )])?;

    let strict = matches.get_flag("strict");

    let result = match matches.subcommand() {
        Some(("add", sub_matches)) => {
            let lhs = parse_operand(sub_matches, "lhs", strict)?;
            let rhs = parse_operand(sub_matches, "rhs", strict)?;
            lhs + rhs
        }
        Some(("sub", sub_matches)) => {
            let lhs = parse_operand(sub_matches, "lhs", strict)?;
            let rhs = parse_operand(sub_matches, "rhs", strict)?;
            lhs - rhs
        }
        Some(("neg", sub_matches)) => -parse_operand(sub_matches, "value", strict)?,
        Some(("parse", sub_matches)) => parse_operand(sub_matches, "value", strict)?,
        Some((name, _)) => return Err(format!("unknown subcommand '{name}'").into()),
        None => return Ok(()),
    };

    print_value(result);

    Ok(())
}
