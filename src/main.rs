//  _   _
// | |_(_) ___ _ __ _ __   __ _ ___ ___
// | __| |/ _ \ '__| '_ \ / _` / __/ __|
// | |_| |  __/ |  | |_) | (_| \__ \__ \
//  \__|_|\___|_|  | .__/ \__,_|___/___/
//                 |_|
//
// Version : 0.1.0
// License : MIT
//
// A tiered random password generator.

use clap::Parser;

use tierpass::passgen::PasswordGenerator;

#[derive(Debug, Parser)]
#[command(name = "tierpass")]
#[command(about = "A tiered random password generator", long_about = None)]
struct Cli {
    /// Length of the password
    #[arg(short, long, default_value_t = 6)]
    length: usize,

    /// Pick the length at random from [6, 2048] instead
    #[arg(short, long, default_value_t = false)]
    random_length: bool,

    /// Character tiers to draw from: 1 = letters, 2 = letters + symbols,
    /// 3 = letters + symbols + ambiguous characters
    #[arg(short, long, default_value = "1")]
    frequency: String,

    /// Number of passwords to generate
    #[arg(short, long, default_value_t = 1)]
    count: usize,

    /// Print password statistics
    #[arg(short, long, default_value_t = false)]
    stats: bool,
}

fn main() {
    let cli = Cli::parse();
    let mut generator = PasswordGenerator::new(cli.random_length, cli.length, &cli.frequency);

    if cli.count > 1 {
        for password in generator.generate_batch(cli.count) {
            println!("{}", password);
        }
    } else {
        println!("{}", generator.password());
    }

    if cli.stats {
        println!("{}", generator.statistics());
    }
}
