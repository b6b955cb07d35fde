use geosift::ScanResult;
use geosift::selfcheck::SelfCheckReport;

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
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
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_scan(input: &str, result: &ScanResult, color: bool) {
    let palette = ansi::Palette::new(color);

    let preview: String = input.chars().take(72).collect();
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Scanning: \"{preview}\""), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Points ━━━", ansi::GRAY));
    if result.coordinates.is_empty() {
        println!("{}", palette.dim("  No coordinates found"));
        println!("\n{}", palette.paint("Possible reasons:", ansi::YELLOW));
        println!("  • No bracketed, parenthesized or compass-suffixed pairs in the text");
        println!("  • Pairs were rejected as implausible (range, round counts, low precision)");
        println!("\n{}", palette.dim("  Tip: set RUST_LOG=geosift=trace to see per-candidate decisions"));
        return;
    }

    for (idx, c) in result.coordinates.iter().enumerate() {
        println!(
            "  {} {} {} {}",
            palette.paint(format!("[{idx}]"), ansi::GRAY),
            palette.bold(palette.paint(format!("{}, {}", c.latitude, c.longitude), ansi::GREEN)),
            palette.dim("│"),
            palette.paint(format!("Point {}", idx + 1), ansi::CYAN),
        );
    }

    println!("\n{}", palette.paint("━━━ Echo ━━━", ansi::GRAY));
    println!("  {}", geosift::format(&result.coordinates));
}

pub fn print_self_check(report: &SelfCheckReport, color: bool) {
    let palette = ansi::Palette::new(color);

    println!("\n{}", palette.paint("━━━ Self-check ━━━", ansi::GRAY));
    for case in &report.cases {
        let status = if case.passed {
            palette.paint("✓", ansi::GREEN)
        } else {
            palette.paint("✗", ansi::RED)
        };
        println!(
            "  {} {} {}",
            status,
            case.description,
            palette.dim(format!("(expected {}, got {})", case.expected, case.actual)),
        );
        if !case.passed {
            println!("      {}", palette.dim(format!("input: \"{}\"", case.input)));
        }
    }

    let failed = report.failures().count();
    if failed == 0 {
        println!("\n  {}", palette.paint(format!("{} cases, all passed", report.cases.len()), ansi::GREEN));
    } else {
        println!(
            "\n  {}",
            palette.paint(format!("{failed} of {} cases failed", report.cases.len()), ansi::RED)
        );
    }
}
