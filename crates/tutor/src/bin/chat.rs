use std::io::{self, BufRead};

use tutor::Tutor;

fn main() {
    // If a prompt is provided on the command line, run a single-shot
    // reply and exit.
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let mut tutor = Tutor::new();

    if !args.is_empty() {
        let prompt = args.join(" ");
        println!("> {}", prompt);
        println!("{}", tutor.reply(&prompt));
        return;
    }

    // Interactive REPL
    println!("Interactive tutor — type 'quit' or Ctrl-D to exit");
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        match line {
            Ok(s) => {
                let s = s.trim();
                if s.is_empty() {
                    continue;
                }
                if s.eq_ignore_ascii_case("quit") || s.eq_ignore_ascii_case("exit") {
                    println!("Bye");
                    break;
                }
                println!("{}", tutor.reply(s));
            }
            Err(_) => break,
        }
    }
}
