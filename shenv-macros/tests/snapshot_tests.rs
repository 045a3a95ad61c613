//! Snapshot tests for encoded output of derived records.

use shenv::ShellEnv;

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
#[env(rename_all = "SCREAMING_SNAKE_CASE")]
struct Server {
    host: String,
    port: u16,
    #[env(skip)]
    #[allow(dead_code)]
    allowed_origins: Vec<String>,
}

#[derive(ShellEnv)]
struct AppConfig {
    #[env(name = "APP_NAME")]
    name: String,
    #[env(name = "DB")]
    database: Database,
    #[env(name = "SERVER")]
    server: Server,
    #[env(name = "LOG_LEVEL", omitempty)]
    log_level: Option<String>,
}

fn sample() -> AppConfig {
    AppConfig {
        name: "billing".into(),
        database: Database {
            url: "postgres://db:5432/billing".into(),
            pool_size: 16,
            replica: None,
        },
        server: Server {
            host: "0.0.0.0".into(),
            port: 8080,
            allowed_origins: vec!["https://example.org".into()],
        },
        log_level: Some("debug".into()),
    }
}

#[test]
fn snapshot_app_config() {
    let output = shenv::to_string(&sample()).unwrap();
    insta::assert_snapshot!(output.trim_end(), @r"
    export APP_NAME='billing'
    export DATABASE_URL='postgres://db:5432/billing'
    export DB_POOL_SIZE='16'
    export SERVER_HOST='0.0.0.0'
    export SERVER_PORT='8080'
    export LOG_LEVEL='debug'
    ");
}

#[test]
fn snapshot_app_config_with_replica() {
    let mut config = sample();
    config.database.replica = Some("postgres://replica:5432/billing".into());
    config.log_level = None;

    let output = shenv::to_string(&config).unwrap();
    insta::assert_snapshot!(output.trim_end(), @r"
    export APP_NAME='billing'
    export DATABASE_URL='postgres://db:5432/billing'
    export DB_POOL_SIZE='16'
    export DB_REPLICA='postgres://replica:5432/billing'
    export SERVER_HOST='0.0.0.0'
    export SERVER_PORT='8080'
    ");
}
