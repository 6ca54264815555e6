use std::fmt::Write;
use std::ops::{Div, Rem};

use indicatif::{ProgressState, ProgressStyle};

fn shorten(n: u64) -> String {
    if n > 1000000 {
        return format!("{}.{} M", n.div(1000000), n.div(100000).rem(10));
    }
    n.to_string()
}

pub fn get_pb_seeding() -> ProgressStyle {
    ProgressStyle::with_template(
        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {rows} {msg}",
    )
    .expect("static progress template")
    .with_key("rows", |state: &ProgressState, w: &mut dyn Write| {
        let pos = state.pos();
        let len = state.len().unwrap_or(pos);
        let _ = write!(
            w,
            "{}/{} ({:.1}s)",
            shorten(pos),
            shorten(len),
            state.eta().as_secs_f64()
        );
    })
    .progress_chars("#>-")
}
