use randvariate::{Categorical, Method, sample_binomial, sample_poisson};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A die that lands on six half the time.
    let faces = [0.1, 0.1, 0.1, 0.1, 0.1, 0.5];
    let die = Categorical::new(&faces, Method::Alias)?;

    let mut rng = rand::rng();
    let counts = die.sample_counts(&mut rng, 600_000);
    for (face, count) in counts.iter().enumerate() {
        println!("{: >2} {count: >7}", face + 1);
    }

    // Sixes in ten throws, and throws before the die is swapped out.
    let sixes = sample_binomial(&mut rng, 10, faces[5])?;
    let throws = sample_poisson(&mut rng, 42.0)?;
    println!("sixes in 10 throws: {sixes}");
    println!("throws this round: {throws}");

    Ok(())
}
