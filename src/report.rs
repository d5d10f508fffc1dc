use datefacet::{MatchTrace, TokenTrace, Trace};
use std::collections::BTreeSet;

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const RED: &str = "\x1b[31m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            self.paint(s, BOLD)
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            self.paint(s, DIM)
        }
    }
}

pub fn print_run(trace: &Trace, facets: &BTreeSet<i32>, years: bool, color: bool) {
    let palette = ansi::Palette::new(color);

    for token in &trace.tokens {
        println!("\n{}", palette.bold(palette.paint(format!("⚙  Date: \"{}\"", token.input), ansi::CYAN)));
        println!("  {} {}", palette.dim("buckets:"), palette.paint(token.buckets.to_string(), ansi::BLUE));
        print_token(token, &palette);
    }

    println!("\n{}", palette.paint("━━━ Facets ━━━", ansi::GRAY));
    if facets.is_empty() {
        println!("{}", palette.dim("  No facets produced"));
        println!("\n{}", palette.paint("Possible reasons:", ansi::YELLOW));
        println!("  • No digits in any date string");
        println!("  • Numbers present but none in a recognized year form (1-2 digit years need BC/AD)");
        println!("  • Every match was dropped during resolution (see above)");
    } else {
        let label = if years { "years:" } else { "decades:" };
        let values: Vec<String> = facets.iter().map(i32::to_string).collect();
        println!("  {} {}", palette.dim(label), palette.bold(palette.paint(values.join(", "), ansi::GREEN)));
    }

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!("  Total: {}", palette.paint(format!("{:?}", trace.elapsed), ansi::GREEN));
    println!();
}

fn print_token(token: &TokenTrace, palette: &ansi::Palette) {
    if let Some(hit) = token.calendar {
        let how = if hit.stripped { "calendar parse (leading words stripped)" } else { "calendar parse" };
        println!("  {} {}", palette.paint(format!("✓ {}", hit.year), ansi::GREEN), palette.dim(format!("│ {how}")));
        return;
    }

    if token.matches.is_empty() {
        println!("  {}", palette.dim("✗ no date forms matched"));
        return;
    }

    for (idx, m) in token.matches.iter().enumerate() {
        println!("  {} {}", palette.paint(format!("[{}]", idx), ansi::GRAY), fmt_match(m, palette));
    }
}

fn fmt_match(m: &MatchTrace, palette: &ansi::Palette) -> String {
    let outcome = match &m.result {
        Ok(years) => palette.bold(palette.paint(format!("{:?}", years), ansi::GREEN)),
        Err(err) => palette.paint(format!("dropped: {err}"), ansi::RED),
    };

    format!(
        "{} {} {} {} {}",
        palette.paint(format!("{}..{}", m.start, m.end), ansi::YELLOW),
        palette.paint(m.alternative.name(), ansi::BLUE),
        palette.dim(format!("\"{}\"", m.text)),
        palette.dim("→"),
        outcome
    )
}
