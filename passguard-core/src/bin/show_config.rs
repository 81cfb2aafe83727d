use passguard_core::PasswordConfig;

fn main() {
    let config = match PasswordConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid password configuration: {}", e);
            std::process::exit(1);
        }
    };

    println!("PassGuard Password Algorithm Configuration:\n");
    println!("  Salt Length: {} bytes", config.salt_length());
    println!(
        "  Hash Function: {} ({}-byte digest)",
        config.hash_function().name(),
        config.hash_function().digest_len()
    );
    println!("  Hash Iterations: {}", config.hash_iterations());
    println!("  Constant-Time Compare: {}", config.compare_in_constant_time());
}
