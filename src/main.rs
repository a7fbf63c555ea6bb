use std::io::{self, BufRead, Write};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut buffer = String::new();
    let mut stdout = io::stdout();
    let stdin = io::stdin();
    loop {
        stdout.write_all("> ".as_bytes())?;
        stdout.flush()?;
        if stdin.lock().read_line(&mut buffer)? == 0 {
            break;
        }
        let line = buffer.trim();
        if !line.is_empty() {
            match symdiff::differentiate(line) {
                Ok(derivative) => println!("{derivative}"),
                Err(e) => eprintln!("Error {e}"),
            }
        }
        buffer.clear();
    }
    Ok(())
}
