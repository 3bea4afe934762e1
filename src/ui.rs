use console::style;

pub fn heading(text: &str) {
    println!("{}", style(text).bold().cyan());
}

pub fn info(text: &str) {
    println!("{}", text);
}

pub fn success(text: &str) {
    println!("{}", style(text).green());
}

pub fn warn(text: &str) {
    eprintln!("{}", style(text).yellow());
}

pub fn error(text: &str) {
    eprintln!("{}", style(text).red());
}

pub fn list_item(text: &str) {
    println!("  {} {}", style("-").dim(), text);
}
