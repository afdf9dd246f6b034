//! Console dump of JDX exchanges for manual inspection.

use serde::Serialize;

use crate::jdx_client::ApiResponse;

/// Renders status, headers and the body indented by four spaces.
pub fn format_response<T>(response: &ApiResponse<T>) -> String {
    let mut out = format!("Status: {}\n", response.status);
    for (name, value) in &response.headers {
        out.push_str(&format!("{name}: {value}\n"));
    }
    out.push_str("Response:\n");
    out.push_str(&to_pretty_json(&response.body));
    out
}

pub fn print_response<T>(response: &ApiResponse<T>) {
    println!("{}", format_response(response));
}

pub fn print_title(title: &str) {
    println!("{title}");
}

pub fn print_empty_lines(count: usize) {
    for _ in 0..count {
        println!();
    }
}

/// Pretty JSON with a 4-space indent.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> String {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    match value.serialize(&mut ser) {
        Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
        Err(e) => format!("<unprintable response: {e}>"),
    }
}
