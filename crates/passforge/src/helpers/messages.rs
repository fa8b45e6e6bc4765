use colored::Colorize;

const ERROR: &str = "Error:";

/// Print an error message for failure.
pub fn fail(msg: impl AsRef<str>) {
    let out = format!("{} {}", ERROR.red(), msg.as_ref());
    println!("{}", out);
}
