use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use review_recommender::{
    build_index,
    catalog::seed::seed_products,
    evaluate::query::ALL_CATEGORY_LABELS,
    render::{render_results, BLANK_QUERY_PROMPT},
    CategoryFilter, Error, ProductIndex, RecommendConfig, RecommendRequest,
};

/// Recommend products whose reviews match a free-text preference
#[derive(Parser, Debug)]
#[command(name = "review-recommender")]
#[command(about = "Recommend products whose reviews match your preference", long_about = None)]
struct Args {
    /// Preference text. Answers once and exits; without it queries are read from stdin
    #[arg(short, long)]
    query: Option<String>,

    /// Category to recommend from ("all" for every category)
    #[arg(short, long, default_value = "all")]
    category: String,

    /// Minimum product rating, 0.0 to 5.0
    #[arg(long)]
    min_rating: Option<f64>,

    /// Number of recommendations, 1 to 5
    #[arg(short = 'k', long, value_parser = clap::value_parser!(u8).range(1..=5))]
    top_k: Option<u8>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Log level
    #[arg(long, default_value = "warn")]
    log_level: String,
}

struct Shell {
    index: ProductIndex,
    config: RecommendConfig,
    /// filters applied to every query; `text` is replaced per query
    template: RecommendRequest,
    json: bool,
}

impl Shell {
    fn answer(&self, text: &str, out: &mut impl Write) -> anyhow::Result<()> {
        let request = RecommendRequest {
            text: text.to_string(),
            ..self.template.clone()
        };
        match self.index.recommend_request(&request) {
            Ok(rows) if self.json => writeln!(out, "{}", serde_json::to_string_pretty(&rows)?)?,
            Ok(rows) => write!(out, "{}", render_results(&rows, self.config.bar_width))?,
            Err(Error::BlankQuery) => writeln!(out, "{BLANK_QUERY_PROMPT}")?,
            Err(e) if e.is_query_error() => writeln!(out, "{e}")?,
            Err(e) => return Err(e.into()),
        }
        Ok(())
    }

    /// Handle a `:command`. Returns false when the user asked to quit.
    fn command(&mut self, line: &str, out: &mut impl Write) -> anyhow::Result<bool> {
        let (name, arg) = line.split_once(' ').unwrap_or((line, ""));
        let arg = arg.trim();
        match name {
            ":q" | ":quit" => return Ok(false),
            ":category" => {
                self.template.category = CategoryFilter::parse(arg);
                writeln!(out, "category: {}", self.template.category)?;
            }
            ":rating" => match arg.parse::<f64>() {
                Ok(r) if (0.0..=5.0).contains(&r) => {
                    self.template.min_rating = r;
                    writeln!(out, "min rating: {r:.1}")?;
                }
                _ => writeln!(out, "rating must be a number between 0 and 5")?,
            },
            ":top" => match arg.parse::<usize>() {
                Ok(k) if (1..=self.config.max_top_k).contains(&k) => {
                    self.template.top_k = k;
                    writeln!(out, "top k: {k}")?;
                }
                _ => writeln!(out, "top must be between 1 and {}", self.config.max_top_k)?,
            },
            _ => self.help(out)?,
        }
        Ok(true)
    }

    fn help(&self, out: &mut impl Write) -> io::Result<()> {
        let mut categories = vec![ALL_CATEGORY_LABELS[0]];
        categories.extend(self.index.catalog().categories());
        writeln!(out, "Categories: {}", categories.join(", "))?;
        writeln!(
            out,
            "Filters: category={} min_rating={:.1} top_k={}",
            self.template.category, self.template.min_rating, self.template.top_k
        )?;
        writeln!(out, "Type a preference, or :category <name>, :rating <0-5>, :top <n>, :q")
    }

    fn run_interactive(&mut self) -> anyhow::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.help(&mut out)?;
        write!(out, "> ")?;
        out.flush()?;
        for line in stdin.lock().lines() {
            let line = line.context("failed to read stdin")?;
            let trimmed = line.trim();
            if trimmed.starts_with(':') {
                if !self.command(trimmed, &mut out)? {
                    break;
                }
            } else {
                self.answer(&line, &mut out)?;
            }
            write!(out, "> ")?;
            out.flush()?;
        }
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = RecommendConfig::default();
    config.validate()?;

    let index = build_index(seed_products()).context("failed to build the product index")?;
    info!(products = index.len(), "ready");

    let mut template = config.request(String::new()).with_category(CategoryFilter::parse(&args.category));
    if let Some(min_rating) = args.min_rating {
        template = template.with_min_rating(min_rating);
    }
    if let Some(top_k) = args.top_k {
        template = template.with_top_k(top_k as usize);
    }

    let mut shell = Shell {
        index,
        config,
        template,
        json: args.json,
    };
    match args.query {
        Some(query) => shell.answer(&query, &mut io::stdout().lock()),
        None => shell.run_interactive(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use review_recommender::evaluate::ResultRow;

    fn shell() -> Shell {
        let config = RecommendConfig::default();
        let template = config.request(String::new());
        Shell {
            index: build_index(seed_products()).unwrap(),
            config,
            template,
            json: false,
        }
    }

    fn answer(shell: &Shell, text: &str) -> String {
        let mut out = Vec::new();
        shell.answer(text, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn command(shell: &mut Shell, line: &str) -> (bool, String) {
        let mut out = Vec::new();
        let keep_going = shell.command(line, &mut out).unwrap();
        (keep_going, String::from_utf8(out).unwrap())
    }

    #[test]
    fn blank_line_prompts_for_text() {
        let shell = shell();
        assert_eq!(answer(&shell, "   "), format!("{BLANK_QUERY_PROMPT}\n"));
    }

    #[test]
    fn answers_with_rendered_rows() {
        let mut shell = shell();
        shell.template.min_rating = 0.0;
        let text = answer(&shell, "kopi pahit");
        assert!(text.contains("Kopi Robusta Sachet"));
        assert!(text.contains("Details:"));
    }

    #[test]
    fn invalid_filter_is_printed_not_returned() {
        let mut shell = shell();
        shell.template.min_rating = 7.0;
        assert!(answer(&shell, "kopi").starts_with("Invalid filter"));
    }

    #[test]
    fn json_mode_prints_rows() {
        let mut shell = shell();
        shell.json = true;
        shell.template = shell.template.clone().with_min_rating(0.0).with_top_k(2);
        let rows: Vec<ResultRow> = serde_json::from_str(&answer(&shell, "kopi pahit")).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].product_name, "Kopi Robusta Sachet");
    }

    #[test]
    fn rating_command_checks_bounds() {
        let mut shell = shell();
        let (_, out) = command(&mut shell, ":rating 7");
        assert!(out.starts_with("rating must be"));
        let (_, out) = command(&mut shell, ":rating abc");
        assert!(out.starts_with("rating must be"));
        assert_eq!(shell.template.min_rating, 4.0);

        let (keep_going, out) = command(&mut shell, ":rating 4.5");
        assert!(keep_going);
        assert_eq!(out, "min rating: 4.5\n");
        assert_eq!(shell.template.min_rating, 4.5);
    }

    #[test]
    fn top_command_checks_bounds() {
        let mut shell = shell();
        for bad in [":top 0", ":top 6", ":top"] {
            let (_, out) = command(&mut shell, bad);
            assert_eq!(out, "top must be between 1 and 5\n");
        }
        assert_eq!(shell.template.top_k, 3);

        command(&mut shell, ":top 5");
        assert_eq!(shell.template.top_k, 5);
    }

    #[test]
    fn category_command_accepts_sentinels() {
        let mut shell = shell();
        let (_, out) = command(&mut shell, ":category Minuman");
        assert_eq!(out, "category: Minuman\n");
        assert_eq!(shell.template.category, CategoryFilter::Only("Minuman".to_string()));

        command(&mut shell, ":category Semua");
        assert_eq!(shell.template.category, CategoryFilter::All);
    }

    #[test]
    fn quit_stops_and_unknown_shows_help() {
        let mut shell = shell();
        assert!(!command(&mut shell, ":q").0);
        assert!(!command(&mut shell, ":quit").0);
        let (keep_going, out) = command(&mut shell, ":what");
        assert!(keep_going);
        assert!(out.starts_with("Categories: all, Makanan Ringan, Minuman"));
    }
}
