use shenv::ShellEnv;

#[derive(ShellEnv)]
#[env(rename_all = "SCREAMING_SNAKE_CASE")]
struct Item {
    r#type: String,
    r#match: u8,
}

#[derive(ShellEnv)]
struct r#Wrapper {
    #[env(name = "ITEM")]
    r#item: Item,
}

fn main() {
    let wrapper = Wrapper {
        item: Item {
            r#type: "widget".into(),
            r#match: 1,
        },
    };
    assert_eq!(
        shenv::to_string(&wrapper).unwrap(),
        "export ITEM_TYPE='widget'\nexport ITEM_MATCH='1'\n"
    );
}
