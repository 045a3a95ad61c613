//! Basic Usage Example
//!
//! Encodes an application config as shell `export` statements and prints
//! them, ready to be `eval`ed or written to a profile.
//!
//! Run with: `cargo run -p shenv --example basic_usage`

use std::rc::Rc;

use shenv::ShellEnv;

// =============================================================================
// Example 1: Flat struct
// =============================================================================

#[derive(ShellEnv)]
struct Simple {
    #[env(name = "MYVAR")]
    greeting: String,
    #[env(name = "B")]
    count: i32,
    ignored: i32,
}

// =============================================================================
// Example 2: Nested records and derived names
// =============================================================================

#[derive(ShellEnv)]
#[env(rename_all = "SCREAMING_SNAKE_CASE")]
struct Database {
    #[env(name = "DATABASE_URL")]
    url: String,
    pool_size: u32,
    #[env(omitempty)]
    replica: Option<String>,
}

#[derive(ShellEnv)]
struct AppConfig {
    #[env(name = "APP_NAME")]
    name: String,
    #[env(name = "DB")]
    database: Rc<Database>,
    #[env(skip)]
    #[allow(dead_code)]
    feature_flags: Vec<String>,
}

// =============================================================================
// Example 3: Unsupported types
// =============================================================================

#[derive(ShellEnv)]
struct WithHosts {
    #[env(name = "HOSTS")]
    hosts: Vec<String>,
}

fn main() -> Result<(), shenv::Error> {
    println!("=== Simple ===");
    let simple = Simple {
        greeting: "hallo".into(),
        count: 4711,
        ignored: 42,
    };
    print!("{}", shenv::to_string(&simple)?);

    println!("\n=== Nested ===");
    let config = AppConfig {
        name: "billing".into(),
        database: Rc::new(Database {
            url: "postgres://db:5432/billing".into(),
            pool_size: 16,
            replica: None,
        }),
        feature_flags: vec!["beta".into()],
    };
    shenv::to_writer(std::io::stdout().lock(), &config)?;

    println!("\n=== Unsupported ===");
    let with_hosts = WithHosts {
        hosts: vec!["a".into(), "b".into()],
    };
    match shenv::to_vec(&with_hosts) {
        Ok(_) => println!("unexpected success"),
        Err(err) => println!("error: {err} (field path: {:?})", err.field_path()),
    }

    Ok(())
}
