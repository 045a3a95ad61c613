mod support {
    pub use shenv as env;
}

use shenv::ShellEnv;

#[derive(ShellEnv)]
#[env(crate = "support::env")]
struct Greeting {
    #[env(name = "GREETING")]
    text: String,
}

fn main() {
    let greeting = Greeting {
        text: "hallo".into(),
    };
    assert_eq!(
        support::env::to_string(&greeting).unwrap(),
        "export GREETING='hallo'\n"
    );
}
