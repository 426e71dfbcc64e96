use clap::Parser;
use pretty_doc::examples::json::{
    json_bool, json_dict, json_list, json_null, json_number, json_string, Json,
};
use pretty_doc::{debug, ToDoc};

/// Print a sample JSON document.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Show the top-level structure of the document, instead of rendering it.
    #[arg(long)]
    debug: bool,
}

fn favorites_list() -> Json {
    json_list(vec![
        json_string("chocolate"),
        json_string("lemon"),
        json_string("almond"),
    ])
}

fn dictionary() -> Json {
    json_dict(vec![
        ("Name", json_string("Alice")),
        ("Age", json_number(42)),
        ("Favorites", favorites_list()),
        ("Pets", json_list(vec![])),
        ("Verified", json_bool(true)),
        ("Nickname", json_null()),
    ])
}

fn main() {
    let args = Args::parse();
    let doc = dictionary().to_doc();
    if args.debug {
        println!("{}", debug(&doc));
    } else {
        println!("{}", doc);
    }
}
