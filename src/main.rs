use bidirange::{Direction, Range};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, clap::ValueEnum)]
enum EnablementLevel {
    #[default]
    Auto,
    Never,
    Always,
}

#[derive(clap::Parser, Debug)]
#[command(allow_negative_numbers = true)]
/// bidirange: walk an integer range both ways.
struct Cli {
    /// One bound of the range (inclusive).
    #[arg(default_value_t = 3)]
    a: i32,

    /// The other bound of the range (inclusive).
    #[arg(default_value_t = 10)]
    b: i32,

    /// Remove this value when the first pass reaches it. Repeatable.
    #[arg(short, long)]
    remove: Vec<i32>,

    /// Direction of the first pass; the second pass goes the other way.
    #[arg(long, value_enum, default_value_t)]
    start: Direction,

    #[arg(long, value_enum, default_value_t)]
    color: EnablementLevel,
}

fn main() -> std::process::ExitCode {
    use clap::Parser;

    env_logger::init();

    let cli = Cli::parse();
    let use_color = match cli.color {
        EnablementLevel::Auto => console::colors_enabled(),
        EnablementLevel::Always => true,
        EnablementLevel::Never => false,
    };

    let range = Range::new(cli.a, cli.b);
    for value in &cli.remove {
        if !range.contains(*value) {
            log::warn!(
                "{value} is outside [{}, {}] and will never be reached",
                range.lower_bound(),
                range.upper_bound()
            );
        }
    }

    range.set_direction(cli.start);
    if let Err(e) = print_pass(&range, &cli.remove, use_color) {
        eprintln!("{e}");
        return std::process::ExitCode::FAILURE;
    }
    range.set_direction(cli.start.reversed());
    if let Err(e) = print_pass(&range, &[], use_color) {
        eprintln!("{e}");
        return std::process::ExitCode::FAILURE;
    }
    std::process::ExitCode::SUCCESS
}

fn print_pass(
    range: &Range,
    to_remove: &[i32],
    use_color: bool,
) -> Result<(), bidirange::TraversalError> {
    let header = format!(
        "--- USING {} ITERATOR ---",
        range.direction().to_string().to_uppercase()
    );
    println!("{}", console::style(header).bold().force_styling(use_color));
    let mut traversal = range.iter();
    while traversal.has_next() {
        let value = traversal.try_next()?;
        if to_remove.contains(&value) {
            traversal.remove()?;
            log::info!("removed {value}");
        }
        println!("{value}");
    }
    Ok(())
}
