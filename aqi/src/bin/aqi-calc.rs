//! Run the AQI pipeline on numbers from the command line.
//!
//! Usage: aqi-calc <channel A> <channel B> <humidity> [<short-term avg> <long-term avg>]

use aqi::{aqi_from_concentration, correct_concentration, parse_int_or_zero, trend};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() != 3 && args.len() != 5 {
        eprintln!("usage: aqi-calc <channel A> <channel B> <humidity> [<short-term> <long-term>]");
        std::process::exit(2);
    }
    let [adj1, adj2, hum] = [&args[0], &args[1], &args[2]].map(|s| parse_int_or_zero(s));

    let pm = correct_concentration(adj1, adj2, hum);
    let aqi = aqi_from_concentration(pm);
    let level = aqi.classify();
    println!("corrected PM2.5: {pm:.2} µg/m³");
    println!("AQI: {aqi}");
    println!("level: {}", level.attributes.label);

    if let [short, long] = &args[3..] {
        let t = trend(parse_int_or_zero(short), parse_int_or_zero(long));
        println!("trend: {t:?}");
    }
}
