use clap::{Arg, Command};

use rle_tools::encode::encode_list;

fn main() {
    let matches = Command::new("rle-tools")
        .about("Tools for the Parquet hybrid RLE/bit-packing encoding")
        .subcommand_required(true)
        .subcommand(
            Command::new("encode")
                .about("Encodes a list of non-negative integers")
                .arg(
                    Arg::new("bit-width")
                        .help("Number of bits used to pack each value")
                        .long("bit-width")
                        .short('b')
                        .takes_value(true)
                        .required(true),
                )
                .arg(
                    Arg::new("values")
                        .help("The values to encode, e.g. \"[1, 2, 3]\"")
                        .takes_value(true)
                        .required(true),
                ),
        )
        .get_matches();

    if let Some(matches) = matches.subcommand_matches("encode") {
        let bit_width: &String = matches.get_one("bit-width").unwrap();
        let values: &String = matches.get_one("values").unwrap();

        let mut writer = std::io::stdout();
        if let Err(e) = encode_list(bit_width, values, &mut writer) {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
