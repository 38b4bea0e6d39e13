use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};
use user_roster::command::{parse_command, Command, HELP};
use user_roster::config::AppConfig;
use user_roster::{App, AppEvent, EventResult, HttpRemote, Notifier, RecordRemote, ViewSnapshot};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    use env_logger::Builder;
    use log::LevelFilter;

    Builder::new()
        .filter_level(LevelFilter::Info)
        .filter_module("reqwest", LevelFilter::Warn)
        .filter_module("hyper", LevelFilter::Warn)
        .parse_default_env()
        .init();

    let config = AppConfig::load()?;
    log::info!("Using user collection at {}", config.remote.base_url);

    let remote = HttpRemote::from_config(&config.remote)?;
    let notifier = Notifier::new(config.auto_hide());
    let auto_hide = tokio::spawn(notifier.clone().run_auto_hide());

    let mut app = App::new(remote, notifier);
    let result = run(&mut app).await;

    auto_hide.abort();
    result
}

async fn run<R: RecordRemote>(app: &mut App<R>) -> anyhow::Result<()> {
    println!("Users");
    app.dispatch(AppEvent::Load).await;
    render(&app.view());
    if app.view().unavailable {
        return Ok(());
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => println!("{}", HELP),
            Ok(Command::List) => render(&app.view()),
            Ok(Command::Event(event)) => {
                let result = app.dispatch(event).await;
                report(&result);
                let view = app.view();
                render(&view);
                if view.unavailable {
                    break;
                }
            }
            Err(message) => println!("{}", message),
        }
    }

    Ok(())
}

fn report(result: &EventResult) {
    match result {
        EventResult::OpenRejected(err) => println!("{}", err),
        EventResult::NotFound(id) => println!("No user with id {}", id),
        EventResult::Edited(false) => println!("No dialog is open"),
        EventResult::Submitted(outcome) => log::debug!("submit: {:?}", outcome),
        _ => {}
    }
}

fn render(view: &ViewSnapshot) {
    if view.unavailable {
        println!("Page not available");
        return;
    }
    if view.loading {
        println!("Loading...");
        return;
    }

    if !view.filter.is_empty() {
        println!("filter: {:?}", view.filter);
    }
    println!("{:>5}  {:<6} {:<24} {}", "id", "code", "name", "description");
    for row in &view.rows {
        println!(
            "{:>5}  {:<6} {:<24} {}",
            row.id, row.code, row.name, row.description
        );
    }

    if let Some(dialog) = &view.dialog {
        println!("[{}]", dialog.title);
        println!("  code:        {}", dialog.draft.code);
        println!("  name:        {}", dialog.draft.name);
        println!("  description: {}", dialog.draft.description);
        for (field, message) in &dialog.messages {
            println!("  ! {}: {}", field.label(), message);
        }
        if !dialog.can_submit {
            println!("  ({} is disabled)", dialog.title);
        }
    }

    if view.notice.is_open {
        println!("error: {}", view.notice.message);
    }
}
