use shenv::ShellEnv;

#[derive(ShellEnv)]
struct Marker;

#[derive(ShellEnv)]
struct Port(#[env(name = "PORT")] u16);

#[derive(ShellEnv)]
struct Endpoint(String, Port, Marker);

#[derive(ShellEnv)]
struct Top {
    #[env(name = "EP")]
    endpoint: Endpoint,
}

fn main() {
    assert_eq!(shenv::to_string(&Marker).unwrap(), "");
    assert_eq!(shenv::to_string(&Port(80)).unwrap(), "export PORT='80'\n");

    let top = Top {
        endpoint: Endpoint("localhost".into(), Port(443), Marker),
    };
    assert_eq!(
        shenv::to_string(&top).unwrap(),
        "export EP_0='localhost'\nexport PORT='443'\n"
    );
}
