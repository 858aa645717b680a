// Interactive demo: type a bare vowel cluster and a tone name, see where
// the mark lands and how the cluster renders in each code table.
//
// Usage:
//   cargo run --example compose
//   > ua hỏi
//   > oa sắc coda
//   > ươ sắc coda

use std::io::{self, BufRead, Write};

use libviet_core::validator::ToneContext;
use libviet_core::{CodeTable, Composer, Config, Tone, VowelSequence};

fn parse_tone(name: &str) -> Option<Tone> {
    Tone::ALL.iter().copied().find(|t| t.label() == name)
}

fn main() {
    let composer = Composer::new(Config::default());
    let stdin = io::stdin();

    println!("libviet-core composer demo");
    println!("enter: <cluster> <tone> [coda]   e.g. \"ua hỏi\" or \"oa sắc coda\"");

    loop {
        print!("> ");
        let _ = io::stdout().flush();
        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let mut parts = line.split_whitespace();
        let (Some(cluster), Some(tone)) = (parts.next(), parts.next()) else {
            continue;
        };

        let seq: VowelSequence = match cluster.parse() {
            Ok(seq) => seq,
            Err(e) => {
                println!("  {e}");
                continue;
            }
        };
        let Some(tone) = parse_tone(tone) else {
            println!("  tones: ngang sắc huyền hỏi ngã nặng");
            continue;
        };
        let ctx = ToneContext {
            has_trailing_consonant: parts.next() == Some("coda"),
            ..ToneContext::default()
        };

        let valid = if composer.is_valid(&seq) { "valid" } else { "not canonical" };
        let (index, rendered) = composer.compose_vowel(&seq, tone, false, &ctx);
        println!("  cluster {seq} ({valid}), anchor index {index}, anchored vowel \"{rendered}\"");
        println!(
            "  full cluster: {}",
            composer.compose_cluster(&seq, tone, false, &ctx)
        );
        for table in CodeTable::ALL {
            let per_table = Composer::new(Config {
                code_table: table,
                ..Config::default()
            });
            println!(
                "    {table:?}: {:?} (double backspace: {})",
                per_table.compose_cluster(&seq, tone, false, &ctx),
                table.needs_double_backspace()
            );
        }
    }
}
