use std::fmt::Write as _;

use anyhow::{Result, anyhow};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::{
    catalog::{CategoryFilter, Feature},
    notify::{CollectingNotificationSink, Notification},
    session::{ConfirmRejected, OrderSession, SaveOutcome},
};

const HELP: &str = "\
commands:
  list                      show features under the current filter
  categories                show available categories
  filter <category|all>     change the category filter
  toggle <id>               select or deselect a feature
  note <id> [text]          set the note for a feature (empty clears it)
  notes <id>                show or hide the note input for a feature
  name|email|company <v>    update contact details
  requirements <text>       set additional requirements
  summary                   show the current selection and total
  save                      save the estimate
  confirm                   confirm and send the selection
  help                      show this help
  quit                      leave the form
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Categories,
    Filter(CategoryFilter),
    Toggle(String),
    Note { id: String, text: String },
    Notes(String),
    Name(String),
    Email(String),
    Company(String),
    Requirements(String),
    Summary,
    Save,
    Confirm,
    Help,
    Quit,
}

impl Command {
    /// Parses one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let command = match verb {
            "list" => Command::List,
            "categories" => Command::Categories,
            "filter" => Command::Filter(CategoryFilter::parse(required(verb, rest)?)),
            "toggle" => Command::Toggle(required(verb, rest)?.to_string()),
            "note" => {
                let rest = required(verb, rest)?;
                let (id, text) = match rest.split_once(char::is_whitespace) {
                    Some((id, text)) => (id, text.trim()),
                    None => (rest, ""),
                };
                Command::Note {
                    id: id.to_string(),
                    text: text.to_string(),
                }
            }
            "notes" => Command::Notes(required(verb, rest)?.to_string()),
            "name" => Command::Name(rest.to_string()),
            "email" => Command::Email(rest.to_string()),
            "company" => Command::Company(rest.to_string()),
            "requirements" => Command::Requirements(rest.to_string()),
            "summary" => Command::Summary,
            "save" => Command::Save,
            "confirm" => Command::Confirm,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(anyhow!("unknown command '{other}'. type 'help' for usage")),
        };

        Ok(Some(command))
    }
}

fn required<'a>(verb: &str, rest: &'a str) -> Result<&'a str> {
    if rest.is_empty() {
        return Err(anyhow!("'{verb}' needs an argument. type 'help' for usage"));
    }
    Ok(rest)
}

/// Line-oriented presentation over a session. Notifications are printed after each command.
pub async fn run<R, W>(
    mut session: OrderSession,
    notifications: CollectingNotificationSink,
    input: R,
    mut output: W,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    output
        .write_all(b"feature order form. type 'help' for commands.\n")
        .await?;
    output.flush().await?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let rendered = match Command::parse(&line) {
            Ok(None) => continue,
            Ok(Some(Command::Quit)) => break,
            Ok(Some(command)) => apply(&mut session, command).await,
            Err(err) => format!("{err}\n"),
        };

        output.write_all(rendered.as_bytes()).await?;
        for notification in notifications.drain() {
            output
                .write_all(render_notification(&notification).as_bytes())
                .await?;
        }
        output.flush().await?;
    }

    tracing::info!(
        target: "console",
        selected = session.selection().selected_count(),
        "console_closed"
    );
    Ok(())
}

async fn apply(session: &mut OrderSession, command: Command) -> String {
    match command {
        Command::List => render_features(session),
        Command::Categories => session
            .categories()
            .iter()
            .map(|category| format!("{} ({})\n", category.as_str(), category.label()))
            .collect(),
        Command::Filter(filter) => {
            let known = session.categories().contains(&filter);
            session.set_filter(filter);
            if known {
                render_features(session)
            } else {
                format!("no features in category '{}'\n", session.filter().as_str())
            }
        }
        Command::Toggle(id) => {
            if !session.catalog().contains(&id) {
                return format!("unknown feature '{id}'\n");
            }
            if session.toggle_feature(&id) {
                format!("selected {id}\n")
            } else {
                format!("deselected {id}\n")
            }
        }
        Command::Note { id, text } => {
            if !session.catalog().contains(&id) {
                return format!("unknown feature '{id}'\n");
            }
            session.set_comment(&id, text);
            format!("note updated for {id}\n")
        }
        Command::Notes(id) => {
            if !session.catalog().contains(&id) {
                return format!("unknown feature '{id}'\n");
            }
            if session.toggle_comment_input(&id) {
                format!("note input open for {id}\n")
            } else {
                format!("note input closed for {id}\n")
            }
        }
        Command::Name(value) => {
            session.set_name(value);
            "name updated\n".to_string()
        }
        Command::Email(value) => {
            session.set_email(value);
            "email updated\n".to_string()
        }
        Command::Company(value) => {
            session.set_company(value);
            "project name updated\n".to_string()
        }
        Command::Requirements(value) => {
            session.set_requirements(value);
            "requirements updated\n".to_string()
        }
        Command::Summary => render_summary(session),
        Command::Save => match session.save_estimate() {
            SaveOutcome::Saved => format!("estimate saved for {}\n", session.contact().email),
            SaveOutcome::EmailRequired => String::new(),
        },
        Command::Confirm => match session.confirm_selection().await {
            Ok(_) | Err(ConfirmRejected::NoFeaturesSelected) => String::new(),
            Err(ConfirmRejected::AlreadySubmitting) => "a submission is in progress\n".to_string(),
        },
        Command::Help => HELP.to_string(),
        Command::Quit => String::new(),
    }
}

fn render_features(session: &OrderSession) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== {} ==", session.filter().label());
    for feature in session.visible_features() {
        let marker = if session.selection().is_selected(&feature.id) {
            "[x]"
        } else {
            "[ ]"
        };
        let _ = writeln!(
            out,
            "{marker} {:>3}  {}  ({}, {})  {}{}",
            feature.id,
            feature.title,
            feature.kind.label(),
            feature.category,
            render_price(feature),
            render_flags(feature),
        );
        if session.selection().is_comment_input_open(&feature.id) {
            let _ = writeln!(
                out,
                "        note: {}",
                session.selection().comment_for(&feature.id).unwrap_or("")
            );
        }
    }
    out
}

fn render_summary(session: &OrderSession) -> String {
    let aggregate = session.aggregate();
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} selected, total ${}",
        aggregate.selected_count(),
        aggregate.total_cost
    );
    for feature in &aggregate.selected_features {
        let _ = writeln!(out, "  {}  {}", render_price(feature), feature.title);
        if let Some(note) = session.selection().note_for(&feature.id) {
            let _ = writeln!(out, "      note: {note}");
        }
    }
    out
}

fn render_price(feature: &Feature) -> String {
    if feature.is_free() {
        "Free".to_string()
    } else {
        format!("${}", feature.price)
    }
}

fn render_flags(feature: &Feature) -> &'static str {
    match (feature.popular, feature.recommended) {
        (true, true) => "  *popular *recommended",
        (true, false) => "  *popular",
        (false, true) => "  *recommended",
        (false, false) => "",
    }
}

fn render_notification(notification: &Notification) -> String {
    let marker = if notification.is_destructive() { "!" } else { "" };
    format!("{marker}[{}] {}\n", notification.title, notification.description)
}
