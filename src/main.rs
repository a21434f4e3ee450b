//! Wordle AI CLI
//!
//! Play Wordle in the terminal, get suggestions for a game played
//! elsewhere, or pit the solver strategies against each other.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;
use wordle_ai::compare::{compare_strategies, draw_secrets, COMPARISON_GUESS_LIMIT};
use wordle_ai::strategy::{expected_remaining, PositionFrequencies};
use wordle_ai::{
    Dictionary, Feedback, FeedbackPattern, GameSession, GameStats, GameStatus, ScoredGuess,
    SolverConfig, Strategy, Word, WordleSolver, MAX_ATTEMPTS,
};

const BANNER_TEXT: &str = include_str!("text/banner.txt");
const PLAY_HELP_TEXT: &str = include_str!("text/play_help.txt");

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// TOML file with solver settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Strategy used for suggestions [default: from config, else entropy]
    #[arg(short, long, value_enum, global = true)]
    strategy: Option<Strategy>,

    /// Answer word list (requires --allowed)
    #[arg(long, global = true, requires = "allowed")]
    answers: Option<PathBuf>,

    /// Allowed guess word list (requires --answers)
    #[arg(long, global = true, requires = "answers")]
    allowed: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play a game in the terminal
    Play {
        /// Use this secret instead of a random one
        #[arg(long)]
        secret: Option<String>,
        /// Seed for choosing secrets
        #[arg(long)]
        seed: Option<u64>,
        /// Show the top suggestion after every guess
        #[arg(long)]
        hints: bool,
    },
    /// Get suggestions for a game played elsewhere (default)
    Assist,
    /// Print the best opening guesses
    Suggest {
        #[arg(short, long, default_value_t = 5)]
        top: usize,
    },
    /// Let the solver play against a known word
    Solve { target: String },
    /// Compare all strategies on random secrets
    Compare {
        #[arg(short, long, default_value_t = 50)]
        games: usize,
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
    /// Guess distribution of the active strategy over every answer
    Bench,
}

struct Spinner {
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Spinner {
    fn new(message: &'static str) -> Self {
        let running = Arc::new(AtomicBool::new(true));
        let running_clone = running.clone();
        let handle = thread::spawn(move || {
            let frames = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
            let mut i = 0;
            while running_clone.load(Ordering::Relaxed) {
                print!("\r{} {}", frames[i % frames.len()], message);
                let _ = io::stdout().flush();
                thread::sleep(Duration::from_millis(80));
                i += 1;
            }
            print!("\r{}\r", " ".repeat(message.len() + 3));
            let _ = io::stdout().flush();
        });
        Self {
            running,
            handle: Some(handle),
        }
    }

    fn stop(mut self) {
        self.running.store(false, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.running.store(false, Ordering::Relaxed);
    }
}

fn print_banner() {
    for line in BANNER_TEXT.lines().take(6) {
        println!("{}", line);
    }
}

/// Print `text` and read one line. `None` on end of input.
fn prompt(text: &str) -> io::Result<Option<String>> {
    print!("{}", text);
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

fn parse_strategy(name: Option<&&str>) -> Option<Strategy> {
    name.and_then(|s| Strategy::from_str(s, true).ok())
}

fn print_ranked(ranked: &[ScoredGuess], strategy: Strategy, remaining: usize) {
    println!();
    println!("Top {} guesses ({}):", ranked.len(), strategy);
    match strategy {
        Strategy::Entropy => {
            println!("{:>4} {:>8} {:>8} {:>12} Possible?", "#", "Word", "Entropy", "Exp. Remain");
            println!("{}", "-".repeat(50));
            for (i, guess) in ranked.iter().enumerate() {
                println!(
                    "{:>4} {:>8} {:>8.3} {:>12.1} {}",
                    i + 1,
                    guess.word.to_uppercase(),
                    guess.score,
                    expected_remaining(guess.score, remaining),
                    if guess.is_candidate { "✓" } else { "" }
                );
            }
        }
        Strategy::Position => {
            println!("{:>4} {:>8} {:>8} Possible?", "#", "Word", "Score");
            println!("{}", "-".repeat(36));
            for (i, guess) in ranked.iter().enumerate() {
                println!(
                    "{:>4} {:>8} {:>8.3} {}",
                    i + 1,
                    guess.word.to_uppercase(),
                    guess.score,
                    if guess.is_candidate { "✓" } else { "" }
                );
            }
        }
        Strategy::Hybrid => {
            println!(
                "{:>4} {:>8} {:>8} {:>8} {:>8} {:>8} Possible?",
                "#", "Word", "Score", "Entropy", "Position", "Freq"
            );
            println!("{}", "-".repeat(64));
            for (i, guess) in ranked.iter().enumerate() {
                let b = guess.breakdown.unwrap_or_default();
                println!(
                    "{:>4} {:>8} {:>8.3} {:>8.3} {:>8.3} {:>8.3} {}",
                    i + 1,
                    guess.word.to_uppercase(),
                    guess.score,
                    b.entropy,
                    b.position,
                    b.frequency,
                    if guess.is_candidate { "✓" } else { "" }
                );
            }
        }
    }
    println!();
    println!("Remaining possibilities: {}", remaining);
    println!();
}

fn print_words(words: &[Word]) {
    for (i, word) in words.iter().enumerate() {
        if i > 0 && i % 10 == 0 {
            println!();
        }
        print!("{:>8}", word.to_uppercase());
    }
    println!();
}

fn print_solve(guesses: &[(Word, FeedbackPattern)]) {
    for (i, (guess, pattern)) in guesses.iter().enumerate() {
        println!("Guess {}: {} → {}", i + 1, guess.to_uppercase(), pattern);
    }
    println!();
    match guesses.last() {
        Some((_, pattern)) if pattern.is_win() => {
            println!("✓ Solved in {} guesses!", guesses.len())
        }
        _ => println!("✗ Failed to solve within {} guesses.", MAX_ATTEMPTS),
    }
    println!();
}

/// Top letters per position among the remaining candidates.
fn print_letter_table(candidates: &[Word]) {
    let frequencies = PositionFrequencies::from_candidates(candidates);
    println!();
    for (position, row) in frequencies.rows().iter().enumerate() {
        let mut letters: Vec<(u8, f64)> = (b'a'..=b'z').zip(row.iter().copied()).collect();
        letters.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
        let top: Vec<String> = letters
            .iter()
            .take(5)
            .filter(|(_, share)| *share > 0.0)
            .map(|(letter, share)| {
                format!("{} {:>4.0}%", (*letter as char).to_ascii_uppercase(), share * 100.0)
            })
            .collect();
        println!("  {}: {}", position + 1, top.join("  "));
    }
    println!();
}

fn run_assist(mut solver: WordleSolver) -> anyhow::Result<()> {
    print_banner();
    println!(
        "Loaded {} answers, {} allowed guesses. Strategy: {}",
        solver.dictionary().answers().len(),
        solver.dictionary().allowed().len(),
        solver.strategy()
    );
    println!("Type 'help' for commands or 'suggest' to get started.");
    println!();

    while let Some(line) = prompt("> ")? {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        match parts[0].to_lowercase().as_str() {
            "help" | "h" | "?" => println!("{}", BANNER_TEXT),
            "quit" | "exit" | "q" => {
                println!("Goodbye!");
                break;
            }
            "suggest" | "s" | "best" => match solver.find_best_guess() {
                Ok(best) => {
                    println!();
                    println!("Best guess: {}", best.word.to_uppercase());
                    println!("  {} score: {:.3}", solver.strategy(), best.score);
                    let entropy = solver.entropy_of(&best.word);
                    println!("  Entropy: {:.3} bits", entropy);
                    println!(
                        "  Expected remaining: {:.1} words",
                        expected_remaining(entropy, solver.remaining_count())
                    );
                    if best.is_candidate {
                        println!("  ✓ This word is a possible answer");
                    } else {
                        println!("  ✗ This word is NOT a possible answer");
                    }
                    println!();
                    println!("Remaining possibilities: {}", solver.remaining_count());
                    println!();
                }
                Err(e) => println!("{}. Use 'reset' to start over.", e),
            },
            "top" | "t" => {
                let n: usize = parts.get(1).and_then(|s| s.parse().ok()).unwrap_or(5);
                match solver.find_best_guesses(n) {
                    Ok(top) => print_ranked(&top, solver.strategy(), solver.remaining_count()),
                    Err(e) => println!("{}", e),
                }
            }
            "strategy" => match parse_strategy(parts.get(1)) {
                Some(strategy) => {
                    solver.set_strategy(strategy);
                    println!("Strategy: {}", strategy);
                }
                None => println!("Usage: strategy <entropy|position|hybrid>"),
            },
            "feedback" | "f" | "fb" => {
                if parts.len() < 3 {
                    println!("Usage: feedback <word> <pattern>");
                    println!("Example: feedback crane gybbb");
                    continue;
                }
                let parsed = Word::parse(parts[1])
                    .and_then(|w| Ok((w, FeedbackPattern::parse(parts[2])?)));
                let (word, pattern) = match parsed {
                    Ok(p) => p,
                    Err(e) => {
                        println!("{}", e);
                        continue;
                    }
                };

                let prev_count = solver.remaining_count();
                match solver.apply_feedback(&word, pattern) {
                    Ok(new_count) => {
                        println!();
                        println!("Guess: {}", word.to_uppercase());
                        println!("Feedback: {}", pattern);
                        println!(
                            "Eliminated {} words ({} → {})",
                            prev_count - new_count,
                            prev_count,
                            new_count
                        );
                        if pattern.is_win() {
                            println!();
                            println!("🎉 Congratulations! You solved it!");
                        } else if new_count <= 10 {
                            println!();
                            println!("Remaining words:");
                            print_words(solver.possible_answers());
                        }
                        println!();
                    }
                    Err(e) => {
                        println!();
                        println!("⚠️  {}", e);
                        println!("Nothing was changed. Check the pattern and try again.");
                        println!();
                    }
                }
            }
            "letters" | "l" => print_letter_table(solver.possible_answers()),
            "remaining" | "r" | "left" => {
                let remaining = solver.possible_answers();
                println!();
                println!("Remaining possibilities: {}", remaining.len());
                if remaining.len() <= 50 {
                    print_words(remaining);
                }
                println!();
            }
            "solve" => {
                let target = match parts.get(1).map(|s| Word::parse(s)) {
                    Some(Ok(target)) => target,
                    Some(Err(e)) => {
                        println!("{}", e);
                        continue;
                    }
                    None => {
                        println!("Usage: solve <target_word>");
                        continue;
                    }
                };
                println!();
                println!("Solving for: {}", target.to_uppercase());
                println!();
                solver.reset();
                let guesses = solver.solve_for_target(&target);
                print_solve(&guesses);
                solver.reset();
            }
            "reset" => {
                solver.reset();
                println!("Reset to initial state. {} words available.", solver.remaining_count());
            }
            _ => {
                println!("Unknown command: {}", parts[0]);
                println!("Type 'help' for available commands.");
            }
        }
    }
    Ok(())
}

fn print_keyboard(game: &GameSession) {
    for row in ["qwertyuiop", "asdfghjkl", "zxcvbnm"] {
        let keys: Vec<String> = row
            .bytes()
            .map(|letter| {
                let mark = match game.key_state(letter) {
                    Some(Feedback::Correct) => "🟩",
                    Some(Feedback::Present) => "🟨",
                    Some(Feedback::Absent) => "⬛",
                    None => "  ",
                };
                format!("{}{}", (letter as char).to_ascii_uppercase(), mark)
            })
            .collect();
        println!("  {}", keys.join(" "));
    }
}

fn print_stats(stats: &GameStats) {
    println!();
    println!(
        "Played: {}  Win %: {:.0}  Streak: {}  Max streak: {}  Avg guesses: {:.2}",
        stats.games_played,
        stats.win_rate(),
        stats.current_streak,
        stats.max_streak,
        stats.average_guesses()
    );
    let most = stats.distribution.iter().copied().max().unwrap_or(0).max(1);
    for (i, &count) in stats.distribution.iter().enumerate() {
        let label = if i < MAX_ATTEMPTS { (i + 1).to_string() } else { "X".to_string() };
        let bar = "█".repeat((count * 30 / most) as usize);
        println!("  {}: {:>4} {}", label, count, bar);
    }
    println!();
}

fn run_play(
    dictionary: Arc<Dictionary>,
    config: &SolverConfig,
    mut strategy: Strategy,
    secret: Option<String>,
    seed: Option<u64>,
    auto_hint: bool,
) -> anyhow::Result<()> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut stats = GameStats::new();
    let mut game = match secret {
        Some(secret) => GameSession::new(dictionary.clone(), Word::parse(&secret)?)?,
        None => GameSession::random(dictionary.clone(), &mut rng)?,
    };

    print_banner();
    println!("{}", PLAY_HELP_TEXT);

    loop {
        let text = if game.status().is_over() {
            "(new/quit) > ".to_string()
        } else {
            format!("[{}/{}] > ", game.attempt(), MAX_ATTEMPTS)
        };
        let Some(line) = prompt(&text)? else { break };
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        match parts[0].to_lowercase().as_str() {
            "quit" | "exit" | "q" => break,
            "help" | "?" => println!("{}", PLAY_HELP_TEXT),
            "new" | "n" => {
                game = GameSession::random(dictionary.clone(), &mut rng)?;
                println!("New game started.");
            }
            "stats" => print_stats(&stats),
            "keyboard" | "k" => print_keyboard(&game),
            "strategy" => match parse_strategy(parts.get(1)) {
                Some(s) => {
                    strategy = s;
                    println!("Strategy: {}", strategy);
                }
                None => println!("Usage: strategy <entropy|position|hybrid>"),
            },
            "hint" => {
                let n: usize = parts.get(1).and_then(|s| s.parse().ok()).unwrap_or(3);
                match game.hint(strategy, config, n) {
                    Ok(ranked) => print_ranked(&ranked, strategy, game.candidates().len()),
                    Err(e) => println!("{}", e),
                }
            }
            guess => {
                let analysis = match game.submit_guess(guess) {
                    Ok(analysis) => analysis.clone(),
                    Err(e) => {
                        println!("{}", e);
                        continue;
                    }
                };
                println!(
                    "  {}  {}   entropy {:.2} bits, gained {:.2} bits, {} candidates left",
                    analysis.word.to_uppercase(),
                    analysis.pattern,
                    analysis.entropy,
                    analysis.information_gain,
                    analysis.candidates_remaining
                );

                match game.status() {
                    GameStatus::Won { guesses } => {
                        println!();
                        println!("🎉 You won! Solved in {} guesses.", guesses);
                        game.record(&mut stats);
                        print_stats(&stats);
                    }
                    GameStatus::Lost => {
                        println!();
                        if let Some(secret) = game.revealed_secret() {
                            println!("Game over. The word was: {}", secret.to_uppercase());
                        }
                        game.record(&mut stats);
                        print_stats(&stats);
                    }
                    GameStatus::InProgress if auto_hint => {
                        if let Ok(ranked) = game.hint(strategy, config, 1) {
                            if let Some(best) = ranked.first() {
                                println!("  Hint ({}): {}", strategy, best.word.to_uppercase());
                            }
                        }
                    }
                    GameStatus::InProgress => {}
                }
            }
        }
    }
    Ok(())
}

fn run_compare(
    dictionary: Arc<Dictionary>,
    config: &SolverConfig,
    games: usize,
    seed: u64,
) -> anyhow::Result<()> {
    let secrets = draw_secrets(&dictionary, games, seed)?;
    println!("Comparing strategies on {} games (seed {})...", games, seed);

    let spinner = Spinner::new("Simulating...");
    let start = Instant::now();
    let results = compare_strategies(dictionary, config, &secrets);
    let elapsed = start.elapsed();
    spinner.stop();

    println!();
    println!(
        "{:>10} {:>8} {:>8} {:>8} {:>5} {:>5} {:>9}",
        "Strategy", "Mean", "Median", "Std Dev", "Min", "Max", "Success"
    );
    println!("{}", "-".repeat(60));
    for summary in &results {
        println!(
            "{:>10} {:>8.2} {:>8.1} {:>8.2} {:>5} {:>5} {:>8.1}%",
            summary.strategy.name(),
            summary.mean,
            summary.median,
            summary.std_dev,
            summary.min,
            summary.max,
            summary.success_rate
        );
    }
    println!();
    println!(
        "Games not solved within {} guesses count as {}.",
        COMPARISON_GUESS_LIMIT,
        COMPARISON_GUESS_LIMIT + 1
    );
    println!("Time elapsed: {:.2?}", elapsed);
    Ok(())
}

fn run_bench(solver: &WordleSolver) {
    println!();
    println!(
        "Running {} benchmark on all {} answers...",
        solver.strategy(),
        solver.dictionary().answers().len()
    );

    let spinner = Spinner::new("Computing...");
    let start = Instant::now();
    let distribution = solver.benchmark_guess_distribution();
    let elapsed = start.elapsed();
    spinner.stop();

    let total: usize = distribution.iter().map(|(_, c)| c).sum();
    let total_guesses: usize = distribution.iter().map(|(g, c)| g * c).sum();
    let average = total_guesses as f64 / total.max(1) as f64;

    println!("Results:");
    println!("{}", "=".repeat(40));
    println!();
    println!("Guess distribution:");
    for (guesses, count) in &distribution {
        let pct = *count as f64 / total as f64 * 100.0;
        let bar = "█".repeat((*count * 40 / total).max(1));
        let label = if *guesses > MAX_ATTEMPTS { "X".to_string() } else { guesses.to_string() };
        println!("  {} guesses: {:>5} ({:>5.1}%) {}", label, count, pct, bar);
    }
    println!();
    println!("Average guesses: {:.3}", average);
    println!("Total words: {}", total);
    println!("Time elapsed: {:.2?}", elapsed);

    let failures: usize = distribution
        .iter()
        .filter(|(g, _)| *g > MAX_ATTEMPTS)
        .map(|(_, c)| c)
        .sum();
    if failures > 0 {
        println!("Words not solved in {} guesses: {}", MAX_ATTEMPTS, failures);
    } else {
        println!("✓ All words solved within {} guesses!", MAX_ATTEMPTS);
    }
    println!();
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = SolverConfig::load(cli.config.as_deref()).context("loading configuration")?;
    config.init_threads();

    let dictionary = Arc::new(match (&cli.answers, &cli.allowed) {
        (Some(answers), Some(allowed)) => {
            Dictionary::from_files(answers, allowed).context("loading word lists")?
        }
        _ => Dictionary::embedded()?,
    });
    let strategy = cli.strategy.unwrap_or(config.strategy);
    let solver = WordleSolver::new(dictionary.clone(), strategy, config.clone());

    match cli.command.unwrap_or(Command::Assist) {
        Command::Assist => run_assist(solver)?,
        Command::Play {
            secret,
            seed,
            hints,
        } => run_play(dictionary, &config, strategy, secret, seed, hints)?,
        Command::Suggest { top } => {
            let ranked = solver.find_best_guesses(top)?;
            print_ranked(&ranked, solver.strategy(), solver.remaining_count());
        }
        Command::Solve { target } => {
            let target = Word::parse(&target)?;
            let mut solver = solver;
            println!("Solving for: {}", target.to_uppercase());
            println!();
            let guesses = solver.solve_for_target(&target);
            print_solve(&guesses);
        }
        Command::Compare { games, seed } => run_compare(dictionary, &config, games, seed)?,
        Command::Bench => run_bench(&solver),
    }
    Ok(())
}
