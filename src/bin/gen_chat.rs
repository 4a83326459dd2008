//! Synthetic WhatsApp export generator for stress testing chatstats.
//!
//! Usage: cargo run --features gen-test --bin gen_chat -- [messages] [output]
//! Example: cargo run --features gen-test --bin gen_chat -- 100000 big_chat.txt

use std::env;
use std::fs::File;
use std::io::{BufWriter, Write};

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rand::Rng;
use rand::seq::SliceRandom;

const GROUP_NAME: &str = "Weekend Plans";

const SENDERS: &[&str] = &[
    "Alice",
    "Bob",
    "Иван",
    "Мария",
    "村上",
    "محمد",
    "🔥FireUser🔥",
    "+44 7700 900123",
];

const EMOJIS: &[&str] = &["😀", "😂", "🤔", "🔥", "💀", "👍", "❤️", "🏳️‍🌈", "👨‍👩‍👧‍👦"];

fn main() {
    let args: Vec<String> = env::args().collect();

    let count: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(100_000);
    let output = args.get(2).map(|s| s.as_str()).unwrap_or("big_chat.txt");

    println!("🧪 Chat Generator");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("   Messages: {}", count);
    println!("   Output:   {}", output);
    println!();

    if let Err(e) = generate(count, output) {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn generate(count: usize, output: &str) -> std::io::Result<()> {
    let file = File::create(output)?;
    let mut writer = BufWriter::with_capacity(1024 * 1024, file); // 1MB buffer

    let mut rng = rand::thread_rng();
    let start = std::time::Instant::now();
    let mut bytes_written: usize = 0;

    let mut ts: NaiveDateTime = NaiveDate::from_ymd_opt(2023, 1, 1)
        .and_then(|d| d.and_hms_opt(8, 0, 0))
        .unwrap_or_default();

    let header = format!(
        "{} {}: \u{200E}Messages and calls are end-to-end encrypted. Only people in this chat can read, listen to, or share them.\n",
        stamp(ts),
        GROUP_NAME
    );
    writer.write_all(header.as_bytes())?;
    bytes_written += header.len();

    for i in 0..count {
        // Mostly short replies, sometimes a long silence
        let gap = if rng.gen_ratio(1, 50) {
            Duration::hours(rng.gen_range(6..72))
        } else {
            Duration::seconds(rng.gen_range(5..900))
        };
        ts += gap;

        let sender = SENDERS.choose(&mut rng).copied().unwrap_or("Alice");
        let line = format!("{} {}: {}\n", stamp(ts), sender, generate_message(&mut rng, i));
        bytes_written += line.len();
        writer.write_all(line.as_bytes())?;

        // Occasionally insert lines the extractor must skip
        if i % 1000 == 500 {
            let garbage = generate_garbage_line(&mut rng);
            writer.write_all(garbage.as_bytes())?;
            bytes_written += garbage.len();
        }

        if (i + 1) % 10000 == 0 {
            let elapsed = start.elapsed().as_secs_f64();
            eprint!(
                "\r   Generated {}/{} ({:.1} MB, {:.0} msg/s)",
                i + 1,
                count,
                bytes_written as f64 / 1_000_000.0,
                (i + 1) as f64 / elapsed
            );
        }
    }

    writer.flush()?;

    let elapsed = start.elapsed();
    println!("\n\n✅ Done!");
    println!("   Size: {:.2} MB", bytes_written as f64 / 1_000_000.0);
    println!("   Time: {:.2}s", elapsed.as_secs_f64());
    Ok(())
}

fn stamp(ts: NaiveDateTime) -> String {
    ts.format("[%-d/%-m/%Y, %H:%M:%S]").to_string()
}

fn generate_message(rng: &mut impl Rng, index: usize) -> String {
    match index % 12 {
        0..=3 => format!("Normal message #{} with some text", index),
        4 => "\u{200E}image omitted".to_string(),
        5 => format!("Check this photo: https://example.com/p/{}", index),
        6 => "GIF omitted".to_string(),
        7 => "oh shit, I forgot".to_string(),
        8 => {
            let emojis: String = (0..20)
                .filter_map(|_| EMOJIS.choose(rng).copied())
                .collect();
            format!("Emoji spam: {}", emojis)
        }
        // Multi-line body; only the first line is a record
        9 => format!("First line #{}\nsecond line\nthird line", index),
        10 => format!("Long message #{}: {}", index, "lorem ipsum ".repeat(60)),
        _ => format!("Кириллица: Привет мир! #{}", index),
    }
}

fn generate_garbage_line(rng: &mut impl Rng) -> String {
    match rng.gen_range(0..4) {
        0 => "This line has no timestamp or sender format\n".to_string(),
        1 => "[31/2/2024, 10:00:00] Nobody: impossible date\n".to_string(),
        2 => "15/01/2024, 10:30 - Alice: other export style\n".to_string(),
        _ => "\n".to_string(),
    }
}
