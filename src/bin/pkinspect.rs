//! Prints the contents of a save file for inspection.
use clap::Parser;
use log::LevelFilter;
use pkred::{region::parse_offset, BoxId, Creature, ItemEntry, SaveFile};
use prettytable::{format, row, Table};
use std::path::PathBuf;

#[derive(Parser)]
struct Cli {
    #[arg(short, long)]
    sav: PathBuf,
    /// One of: trainer, options, items, dex, party, box, box1..box12, boxes
    #[arg(short, long, default_value = "trainer")]
    location: String,
    /// Hex offset to dump raw bytes from instead of decoding a location
    #[arg(long)]
    peek: Option<String>,
    /// Byte count for --peek; negative reads backwards from the offset
    #[arg(long, default_value_t = 1, allow_hyphen_values = true)]
    size: isize,
    #[arg(long)]
    log_file: Option<PathBuf>,
    #[arg(long)]
    enable_debug: bool,
}

fn init_logging(args: &Cli) -> anyhow::Result<()> {
    let log_level = if args.enable_debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    match &args.log_file {
        Some(log_file) => simple_logging::log_to_file(log_file, log_level)?,
        None => env_logger::Builder::new()
            .filter_level(log_level)
            .parse_env(env_logger::Env::new().filter("RUST_LOG"))
            .init(),
    }
    Ok(())
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);
    table
}

fn print_trainer(save_file: &SaveFile) -> anyhow::Result<()> {
    let trainer_info = save_file.trainer_info()?;
    let time = trainer_info.time_played;
    let mut table = new_table();
    table.add_row(row!["PLAYER", trainer_info.player_name]);
    table.add_row(row!["RIVAL", trainer_info.rival_name]);
    table.add_row(row!["MONEY", trainer_info.money]);
    table.add_row(row!["COINS", trainer_info.casino_coins]);
    table.add_row(row!["BADGES", trainer_info.badges.earned().join(", ")]);
    table.add_row(row![
        "PLAYTIME",
        format!("{}:{:02}:{:02}", time.hours, time.minutes, time.seconds)
    ]);
    table.add_row(row!["PIKACHU", save_file.pikachu_friendship()?]);
    table.add_row(row!["PC BOX", save_file.current_box_number()?]);
    table.printstd();
    Ok(())
}

fn print_items(title: &str, items: &[ItemEntry]) {
    let mut table = new_table();
    table.add_row(row![title, "COUNT"]);
    for item in items {
        table.add_row(row![item.name, item.count]);
    }
    table.printstd();
}

fn print_creatures(label: &str, creatures: &[Creature]) {
    let mut table = new_table();
    table.add_row(row!["LOCATION", "SLOT", "POKEMON", "NAME", "LV", "HP", "OT", "MOVES"]);
    for (idx, pkmn) in creatures.iter().enumerate() {
        let moves = pkmn
            .moves
            .iter()
            .flatten()
            .map(|m| format!("{} {}/+{}", m.name, m.pp, m.pp_ups))
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(row![
            label,
            idx + 1,
            pkmn.species,
            pkmn.nickname,
            pkmn.level(),
            pkmn.current_hp,
            pkmn.original_trainer,
            moves
        ]);
    }
    table.printstd();
}

fn parse_box(location: &str) -> anyhow::Result<BoxId> {
    match &location[3..] {
        "" => Ok(BoxId::Current),
        number => Ok(BoxId::Stored(number.parse::<u8>()?)),
    }
}

fn run(args: Cli) -> anyhow::Result<()> {
    let save_file = SaveFile::open(&args.sav)?;

    if let Some(offset) = &args.peek {
        let offset = parse_offset(offset)?;
        let bytes = save_file.peek(offset, args.size)?;
        println!("0x{offset:04x}: {bytes:02x?}");
        return Ok(());
    }

    match args.location.as_str() {
        "trainer" => print_trainer(&save_file)?,
        "options" => println!("{:?}", save_file.options()?),
        "items" => {
            print_items("BAG", &save_file.bag_items()?);
            print_items("PC", &save_file.pc_items()?);
        }
        "dex" => {
            let mut table = new_table();
            table.add_row(row!["NO", "POKEMON", "SEEN", "OWNED"]);
            for entry in save_file.pokedex()? {
                table.add_row(row![entry.index, entry.species, entry.seen, entry.owned]);
            }
            table.printstd();
        }
        "party" => print_creatures("P", &save_file.get_party()?),
        "boxes" => {
            for (box_id, contents) in save_file.get_boxes() {
                match contents {
                    Ok(creatures) => print_creatures(&box_id.to_string(), creatures),
                    Err(err) => eprintln!("Unable to read {box_id}: {err}"),
                }
            }
        }
        location if location.starts_with("box") => {
            let box_id = parse_box(location)?;
            print_creatures(&box_id.to_string(), &save_file.get_box(box_id)?);
        }
        location => anyhow::bail!("Unknown location: {location}"),
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    init_logging(&args)?;

    run(args).map_err(|err| {
        eprintln!("Failed to inspect save: {err}");
        err
    })
}
