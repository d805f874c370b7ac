use std::sync::Arc;

use skillpath::api::ApiClient;
use skillpath::config::ClientConfig;
use skillpath::error::Error;
use skillpath::model::ExperienceLevel;
use skillpath::profile::{ProfileComposer, TagCategory};
use skillpath::render;
use skillpath::session::{PathView, Session};
use tokio::io::{AsyncBufReadExt, BufReader};

/// One parsed REPL command.
#[derive(Debug, Clone, PartialEq)]
enum Command {
    Help,
    Quit,
    User(String),
    Level(ExperienceLevel),
    AddTag(TagCategory, String),
    RemoveTag(TagCategory, String),
    ShowProfile,
    Recommend,
    OpenPath(usize),
    Start,
    Step { number: u32, completed: bool },
    Health,
}

fn tag_category(word: &str) -> Option<TagCategory> {
    match word {
        "skill" => Some(TagCategory::Skills),
        "interest" => Some(TagCategory::Interests),
        "course" => Some(TagCategory::CompletedCourses),
        "domain" => Some(TagCategory::PreferredDomains),
        _ => None,
    }
}

/// Parse one input line. Tag values may contain spaces.
fn parse_command(line: &str) -> Result<Command, String> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Err(String::new());
    };

    match head {
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        "health" => Ok(Command::Health),
        "profile" => Ok(Command::ShowProfile),
        "recommend" => Ok(Command::Recommend),
        "start" => Ok(Command::Start),
        "user" => {
            let id: Vec<&str> = words.collect();
            if id.is_empty() {
                Err("usage: user <id>".into())
            } else {
                Ok(Command::User(id.join(" ")))
            }
        }
        "level" => {
            let value = words.next().ok_or("usage: level <beginner|intermediate|advanced>")?;
            value.parse().map(Command::Level)
        }
        "path" => {
            let n = words
                .next()
                .and_then(|w| w.parse().ok())
                .ok_or("usage: path <card number>")?;
            Ok(Command::OpenPath(n))
        }
        "step" => {
            let number: u32 = words
                .next()
                .and_then(|w| w.parse().ok())
                .ok_or("usage: step <n> done|todo")?;
            let completed = match words.next() {
                Some("done") => true,
                Some("todo") => false,
                _ => return Err("usage: step <n> done|todo".into()),
            };
            Ok(Command::Step { number, completed })
        }
        word => {
            let Some(category) = tag_category(word) else {
                return Err(format!("unknown command '{word}' — type 'help'"));
            };
            let action = words.next().ok_or(format!("usage: {word} add|rm <value>"))?;
            let value: Vec<&str> = words.collect();
            if value.is_empty() {
                return Err(format!("usage: {word} add|rm <value>"));
            }
            let value = value.join(" ");
            match action {
                "add" => Ok(Command::AddTag(category, value)),
                "rm" => Ok(Command::RemoveTag(category, value)),
                other => Err(format!("unknown action '{other}' — use add or rm")),
            }
        }
    }
}

const HELP: &str = "\
Commands:
  skill|interest|course|domain add <value>   add a profile tag
  skill|interest|course|domain rm <value>    remove a profile tag
  level <beginner|intermediate|advanced>     set experience level
  user <id>                                  set your user ID
  profile                                    show the current profile
  recommend                                  get job recommendations
  path <n>                                   view the learning path for card n
  start                                      start the proposed path
  step <n> done|todo                         mark a step complete or not
  health                                     check service availability
  quit                                       exit";

fn show_profile(composer: &ProfileComposer, level: ExperienceLevel, session: &Session) {
    for category in TagCategory::ALL {
        let tags = composer.tags(category);
        if tags.is_empty() {
            println!("  {}: (none)", category.label());
        } else {
            println!("  {}: {}", category.label(), tags.join(", "));
        }
    }
    println!("  experience level: {level}");
    println!("  user ID: {}", session.user_id().unwrap_or("(not set)"));
}

async fn dispatch(
    command: Command,
    session: &mut Session,
    composer: &mut ProfileComposer,
    level: &mut ExperienceLevel,
) {
    match command {
        Command::Help => println!("{HELP}"),
        Command::Quit => unreachable!("handled by the loop"),
        Command::User(id) => {
            session.set_user_id(&id);
            println!("User ID set to '{id}'");
        }
        Command::Level(new_level) => {
            *level = new_level;
            println!("Experience level set to {level}");
        }
        Command::AddTag(category, value) => {
            let tags = composer.add_tag(category, &value);
            println!("{}: {}", category.label(), tags.join(", "));
        }
        Command::RemoveTag(category, value) => {
            let tags = composer.remove_tag(category, &value);
            if tags.is_empty() {
                println!("{}: (none)", category.label());
            } else {
                println!("{}: {}", category.label(), tags.join(", "));
            }
        }
        Command::ShowProfile => show_profile(composer, *level, session),
        Command::Recommend => {
            println!("🤖 Analyzing your profile...");
            let profile = composer.snapshot(*level);
            match session.load_recommendations(&profile).await {
                Ok(_) => println!("{}", render::recommendation_cards(session.recommendations())),
                Err(e) => println!("⚠️  {e}"),
            }
        }
        Command::OpenPath(position) => {
            println!("Checking for an active path... 🔎");
            match session.open_path(position).await {
                Ok(PathView::Active(path)) => println!("{}", render::stateful_path(path)),
                Ok(PathView::Proposal { job_title, steps, .. }) => {
                    println!("{}", render::proposal(job_title, steps))
                }
                Ok(PathView::Blocked { other_job_title }) => {
                    println!("{}", render::blocked(other_job_title))
                }
                Err(e) => println!("⚠️  {e}"),
            }
        }
        Command::Start => {
            println!("Saving path to your profile...");
            match session.start_path().await {
                Ok(path) => println!("{}", render::stateful_path(path)),
                Err(e) => println!("⚠️  {e}"),
            }
        }
        Command::Step { number, completed } => match session.toggle_step(number, completed).await {
            Ok(pct) => println!("{}", render::progress_bar(pct)),
            Err(e @ Error::Api(_)) => println!("⚠️  Could not update progress: {e}"),
            Err(e) => println!("⚠️  {e}"),
        },
        Command::Health => println!("{}", session.check_health().await),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    let config = ClientConfig::from_env();

    eprintln!("🎓 skillpath v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Backend: {}", config.base_url);
    eprintln!(
        "   User ID: {}",
        config.user_id.as_deref().unwrap_or("(not set — use 'user <id>')")
    );

    let api = ApiClient::new(&config)?;
    let mut session = Session::new(Arc::new(api), config.user_id.clone());

    // One-shot availability indicator; nothing else is gated on it.
    eprintln!("   {}\n", session.check_health().await);
    eprintln!("   Type 'help' for commands.\n");

    let mut composer = ProfileComposer::new();
    let mut level = ExperienceLevel::default();

    let stdin = tokio::io::stdin();
    let mut lines = BufReader::new(stdin).lines();

    eprint!("> ");
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            eprint!("> ");
            continue;
        }
        match parse_command(line) {
            Ok(Command::Quit) => break,
            Ok(command) => dispatch(command, &mut session, &mut composer, &mut level).await,
            Err(msg) if msg.is_empty() => {}
            Err(msg) => println!("⚠️  {msg}"),
        }
        eprint!("> ");
    }

    Ok(())
}
