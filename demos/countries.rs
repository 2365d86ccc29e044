use ibankit::report::countries_to_json;
use ibankit::*;

fn main() {
    let query = std::env::args().nth(1).unwrap_or_default();
    let hits = search_countries(&query);

    println!("=== {} of {} countries ===\n", hits.len(), list_countries().len());
    for rule in &hits {
        println!(
            "  {} {:<24} len {:>2}  {:<26} {}{}",
            rule.code,
            rule.name,
            rule.length,
            rule.structure,
            rule.formatted_example(),
            if rule.sepa { "  [SEPA]" } else { "" }
        );
    }

    if let Some(first) = hits.first() {
        println!("\n=== JSON for {} ===\n", first.code);
        match countries_to_json(std::slice::from_ref(*first)) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("error: {e}"),
        }
    }
}
