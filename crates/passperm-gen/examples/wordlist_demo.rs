// Print the word forms and tier sizes for the seeds given on the command line.
//
// cargo run -p passperm-gen --example wordlist_demo -- alice rover:Rex

use passperm_core::{IntensityLevel, Tier};
use passperm_gen::{Generator, GeneratorOptions};

fn main() {
    let words: Vec<String> = std::env::args().skip(1).collect();
    let words = if words.is_empty() {
        vec!["alice".to_string(), "rover:Rex".to_string()]
    } else {
        words
    };

    let options = GeneratorOptions::default().with_level(IntensityLevel::new(3));
    let generator = Generator::new(words, options);

    for seed in generator.seeds() {
        println!("{}: {}", seed.text, generator.forms(seed.id).join(" "));
    }
    println!();

    let estimate = generator.estimate();
    for tier in Tier::ALL {
        println!("{tier:?}-word candidates: {}", estimate.get(tier));
    }
    println!("total: {}", estimate.total());

    println!();
    for line in generator.stream().take(10) {
        println!("{}", line.text);
    }
}
