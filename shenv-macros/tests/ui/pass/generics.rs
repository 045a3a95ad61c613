use std::fmt::Debug;

use shenv::ShellEnv;

#[derive(ShellEnv)]
struct Labeled<'a, T, const N: usize>
where
    T: Debug,
{
    #[env(name = "LABEL")]
    label: &'a str,
    #[env(name = "VALUE")]
    value: T,
    #[env(skip)]
    #[allow(dead_code)]
    history: [T; N],
}

#[derive(ShellEnv)]
struct Boxed<T: ?Sized + ShellEnv> {
    #[env(name = "INNER")]
    inner: Box<T>,
}

fn main() {
    let labeled = Labeled {
        label: "answer",
        value: 42i32,
        history: [1, 2, 3],
    };
    assert_eq!(
        shenv::to_string(&labeled).unwrap(),
        "export LABEL='answer'\nexport VALUE='42'\n"
    );

    let boxed: Boxed<str> = Boxed { inner: "text".into() };
    assert_eq!(shenv::to_string(&boxed).unwrap(), "export INNER='text'\n");
}
