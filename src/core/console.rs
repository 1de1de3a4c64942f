use chrono::Local;

fn stamp() -> String {
    Local::now().format("%H:%M:%S").to_string()
}

pub fn info(message: &str) {
    eprintln!("[{}] {message}", stamp());
}

pub fn error(message: &str) {
    eprintln!("[{}] error: {message}", stamp());
}
