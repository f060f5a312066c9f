//! Terminal front end for a running toki-dict server.
//!
//! `toki-dict-cli list --search 말 --filter official`
//! `toki-dict-cli add --word toki --meaning 말하다 --official`
//! `toki-dict-cli edit 3 --english talk`
//! `toki-dict-cli delete 3`

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use toki_dict::client::{DictionaryApp, Notice, OfficialFilter, WordsClient};
use toki_dict::Word;

#[derive(Parser)]
#[command(name = "toki-dict-cli", version, about = "Toki Pona dictionary client")]
struct Cli {
    /// Server origin.
    #[arg(long, env = "TOKI_DICT_URL", default_value = "http://127.0.0.1:5000")]
    url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List words, optionally filtered.
    List {
        #[arg(long, short, default_value = "")]
        search: String,
        #[arg(long, short, default_value_t = OfficialFilter::All)]
        filter: OfficialFilter,
    },
    /// Add a word.
    Add(FormArgs),
    /// Replace the fields of an existing word; omitted fields keep their value.
    Edit {
        id: i32,
        #[command(flatten)]
        form: FormArgs,
        /// Mark the word as unofficial.
        #[arg(long, conflicts_with = "official")]
        unofficial: bool,
    },
    /// Delete a word after confirmation.
    Delete {
        id: i32,
        /// Skip the confirmation prompt.
        #[arg(long, short)]
        yes: bool,
    },
}

#[derive(Args)]
struct FormArgs {
    #[arg(long)]
    word: Option<String>,
    #[arg(long)]
    meaning: Option<String>,
    #[arg(long)]
    english: Option<String>,
    #[arg(long)]
    example: Option<String>,
    #[arg(long)]
    official: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut app = DictionaryApp::new(WordsClient::new(cli.url));

    if let Err(n) = app.reload().await {
        return report(&[n]);
    }

    match cli.command {
        Command::List { search, filter } => {
            app.view.set_query(search);
            app.view.set_filter(filter);
            print_list(&app);
            ExitCode::SUCCESS
        }
        Command::Add(form) => {
            apply_form(&mut app, form);
            let notices = app.submit().await;
            report(&notices)
        }
        Command::Edit { id, form, unofficial } => {
            let Some(existing) = app.view.find(id).cloned() else {
                return report(&[Notice::SaveFailed]);
            };
            app.start_edit(&existing);
            let official = if form.official {
                true
            } else if unofficial {
                false
            } else {
                existing.is_official
            };
            apply_form(&mut app, form);
            app.form.is_official = official;
            let notices = app.submit().await;
            report(&notices)
        }
        Command::Delete { id, yes } => match app.delete(id, |prompt| yes || confirm(prompt)).await {
            Some(notices) => report(&notices),
            None => ExitCode::SUCCESS,
        },
    }
}

/// Overlay provided fields onto the form; absent ones keep what is there.
fn apply_form(app: &mut DictionaryApp, form: FormArgs) {
    if let Some(v) = form.word {
        app.form.word = v;
    }
    if let Some(v) = form.meaning {
        app.form.meaning = v;
    }
    if let Some(v) = form.english {
        app.form.english = v;
    }
    if let Some(v) = form.example {
        app.form.example = v;
    }
    app.form.is_official = form.official;
}

fn print_list(app: &DictionaryApp) {
    println!(
        "총 {}개의 단어 | {}개 공식 단어",
        app.view.total(),
        app.view.official_count()
    );
    if app.view.visible_count() == 0 {
        println!("단어가 없습니다.");
        return;
    }
    for w in app.view.visible() {
        print_word(w);
    }
}

fn print_word(w: &Word) {
    let badge = if w.is_official { " [공식]" } else { "" };
    println!("{:>4}  {}{}", w.id, w.word, badge);
    println!("      한국어: {}", w.meaning);
    if let Some(english) = &w.english {
        println!("      English: {}", english);
    }
    if let Some(example) = &w.example {
        println!("      예문: {}", example);
    }
}

fn confirm(prompt: &str) -> bool {
    print!("{} [y/N] ", prompt);
    if io::stdout().flush().is_err() {
        return false;
    }
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line).is_err() {
        return false;
    }
    matches!(line.trim(), "y" | "Y" | "yes")
}

fn report(notices: &[Notice]) -> ExitCode {
    let mut failed = false;
    for n in notices {
        if n.is_error() {
            failed = true;
            eprintln!("{}", n.message());
        } else {
            println!("{}", n.message());
        }
    }
    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
