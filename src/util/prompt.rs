use std::io::{self, BufRead, Write};

/// Ask for a value on stderr and read one line from stdin.
///
/// An empty answer resolves to `default` when one is given; otherwise the
/// empty string is returned and the caller decides whether that is usable.
pub fn prompt(label: &str, default: Option<&str>) -> io::Result<String> {
    let mut stderr = io::stderr().lock();
    match default {
        Some(value) => write!(stderr, "{label} [{value}]: ")?,
        None => write!(stderr, "{label}: ")?,
    }
    stderr.flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    let answer = line.trim();
    if answer.is_empty() {
        if let Some(value) = default {
            return Ok(value.to_owned());
        }
    }
    Ok(answer.to_owned())
}
