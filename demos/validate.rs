use ibankit::*;
use tracing_subscriber::EnvFilter;

fn main() {
    // RUST_LOG=ibankit=trace shows every failed pipeline stage
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== IBAN Validation ===\n");

    let inputs = [
        "GB33 BUKB 2020 1555 5555 55",
        "de75 5121 0800 1245 1261 99",
        "GB34BUKB20201555555555", // wrong check digits
        "DE7551210800124512619",  // one digit short
        "ZZ1234567890123",        // unknown country
        "",
    ];

    for input in &inputs {
        let outcome = validate(input);
        match (&outcome.formatted, outcome.country) {
            (Some(formatted), Some(country)) => {
                println!("  {input:?} => valid {country} IBAN: {formatted}", country = country.name);
            }
            _ => {
                println!("  {input:?} => INVALID");
                for message in outcome.messages() {
                    println!("      - {message}");
                }
            }
        }
    }

    println!("\n=== Check Digits ===\n");

    match compute_check_digits("GB", "BUKB20201555555555") {
        Ok(cd) => println!("  GB??BUKB20201555555555 => GB{cd}BUKB20201555555555"),
        Err(e) => println!("  error: {e}"),
    }

    println!("\n=== Iban Type ===\n");

    match "CH56 0483 5012 3456 7800 9".parse::<Iban>() {
        Ok(iban) => {
            println!("  country:      {}", iban.country_code());
            println!("  check digits: {}", iban.check_digits());
            println!("  BBAN:         {}", iban.bban());
            println!("  SEPA:         {}", iban.is_sepa());
            println!("  display:      {iban}");
        }
        Err(e) => println!("  {e}"),
    }
}
