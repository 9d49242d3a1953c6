// native repl over the same shell the browser gets, handy for poking at it
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use neon_shell::{LineKind, Shell, ShellConfig};
    use std::io::{self, BufRead, Write};

    env_logger::init();

    // optional first arg: path to a json config
    let config = match std::env::args().nth(1) {
        Some(path) => ShellConfig::load(&path).unwrap_or_else(|e| {
            eprintln!("{}, using defaults", e);
            ShellConfig::default()
        }),
        None => ShellConfig::default(),
    };

    let mut shell = Shell::new(config);
    let executor = shell.executor_mut();
    executor.on_program_launch(|argv: &[String]| {
        println!("[host] opening overlay: {}", argv.join(" "));
    });
    executor.on_theme_change(|theme| println!("[host] theme -> {}", theme.as_str()));
    executor.on_glitch_change(|intensity| println!("[host] glitch -> {}", intensity));

    for line in shell.scrollback() {
        println!("{}", line.text);
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{} ", shell.prompt());
        if stdout.flush().is_err() {
            break;
        }
        let input = match lines.next() {
            Some(Ok(input)) => input,
            _ => break,
        };

        let result = shell.submit(&input);
        if result.requests_clear() {
            print!("\x1B[2J\x1B[H");
        } else {
            for line in &result.lines {
                match line.kind {
                    LineKind::Error => eprintln!("{}", line.text),
                    _ => println!("{}", line.text),
                }
            }
        }
        if shell.is_closed() {
            break;
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {}
