use crate::infra::{assistant_bridge, eligibility_service, parse_language};
use clap::{Args, ValueEnum};
use std::io::{self, Write};
use super_visa::config::AppConfig;
use super_visa::error::AppError;
use super_visa::i18n::Language;
use super_visa::telemetry;
use super_visa::workflows::assistant::{
    AssistantReply, ChatMessage, ChatRole, ChatSession, ReplyDisposition,
};
use super_visa::workflows::eligibility::{
    EligibilityForm, EligibilityView, MessageCatalog, ThresholdTableView,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::debug;

#[derive(Args, Debug)]
pub(crate) struct EstimateArgs {
    /// Sponsor status, e.g. "Citoyen Canadien", "permanent_resident" or "other"
    #[arg(long)]
    pub(crate) status: String,
    /// Number of parents or grandparents invited
    #[arg(long, default_value = "1")]
    pub(crate) relatives: String,
    /// Dependents already living in the sponsor's household
    #[arg(long, default_value = "0")]
    pub(crate) dependents: String,
    /// Declared annual income, free-form (e.g. "40 000 $")
    #[arg(long)]
    pub(crate) income: String,
    /// Output language (fr or en). Defaults to APP_DEFAULT_LANG.
    #[arg(long, value_parser = parse_language)]
    pub(crate) lang: Option<Language>,
    /// Print the full verdict as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum TableFormat {
    #[default]
    Table,
    Csv,
    Json,
}

#[derive(Args, Debug)]
pub(crate) struct ThresholdsArgs {
    /// Output language (fr or en). Defaults to APP_DEFAULT_LANG.
    #[arg(long, value_parser = parse_language)]
    pub(crate) lang: Option<Language>,
    #[arg(long, value_enum, default_value_t = TableFormat::Table)]
    pub(crate) format: TableFormat,
}

#[derive(Args, Debug)]
pub(crate) struct AskArgs {
    /// Question for the assistant
    pub(crate) message: String,
    #[arg(long, value_parser = parse_language)]
    pub(crate) lang: Option<Language>,
}

#[derive(Args, Debug)]
pub(crate) struct ChatArgs {
    #[arg(long, value_parser = parse_language)]
    pub(crate) lang: Option<Language>,
}

pub(crate) fn run_estimate(args: EstimateArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let language = args.lang.unwrap_or(config.default_language);
    let service = eligibility_service(&config, MessageCatalog::builtin());
    let form = EligibilityForm {
        status: Some(args.status),
        relatives_invited: Some(args.relatives),
        dependents: Some(args.dependents),
        income: Some(args.income),
    };
    let view = service.estimate(&form, language);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &view).map_err(io::Error::from)?;
        writeln!(out)?;
    } else {
        render_verdict(&mut out, &view)?;
    }
    Ok(())
}

pub(crate) fn run_thresholds(args: ThresholdsArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let language = args.lang.unwrap_or(config.default_language);
    let table = eligibility_service(&config, MessageCatalog::builtin()).thresholds(language);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.format {
        TableFormat::Table => render_table(&mut out, &table)?,
        TableFormat::Csv => write_csv(&mut out, &table)?,
        TableFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &table).map_err(io::Error::from)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

pub(crate) async fn run_ask(args: AskArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let language = args.lang.unwrap_or(config.default_language);
    let bridge = assistant_bridge(&config)?;
    let reply = bridge.ask(&args.message, language).await;
    println!("{}", reply.text);
    Ok(())
}

/// Reads questions from stdin while earlier ones are still in flight. Only the
/// answer to the latest question is printed.
pub(crate) async fn run_chat(args: ChatArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let bridge = assistant_bridge(&config)?;
    let mut session = ChatSession::new(args.lang.unwrap_or(config.default_language));
    if let Some(greeting) = session.transcript().first() {
        print_message(greeting);
    }
    println!("(/lang to switch language, /quit to leave)");

    let (tx, mut rx) = mpsc::channel::<(u64, AssistantReply)>(16);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match line.trim() {
                    "/quit" | "/exit" => break,
                    "/lang" => {
                        session.set_language(session.language().toggled());
                        println!("[{}]", session.language().code());
                        continue;
                    }
                    _ => {}
                }

                let Some(ticket) = session.submit(&line) else { continue };
                let bridge = bridge.clone();
                let tx = tx.clone();
                let language = session.language();
                tokio::spawn(async move {
                    let reply = bridge.ask(&ticket.prompt, language).await;
                    let _ = tx.send((ticket.sequence, reply)).await;
                });
            }
            Some((sequence, reply)) = rx.recv() => {
                accept_reply(&mut session, sequence, reply);
            }
        }
    }

    while session.is_pending() {
        match rx.recv().await {
            Some((sequence, reply)) => accept_reply(&mut session, sequence, reply),
            None => break,
        }
    }
    Ok(())
}

fn accept_reply(session: &mut ChatSession, sequence: u64, reply: AssistantReply) {
    match session.resolve(sequence, reply) {
        ReplyDisposition::Accepted => {
            if let Some(message) = session.transcript().last() {
                print_message(message);
            }
        }
        ReplyDisposition::Stale { latest } => {
            debug!(sequence, latest, "discarded superseded assistant reply");
        }
    }
}

fn print_message(message: &ChatMessage) {
    let speaker = match message.role {
        ChatRole::User => "you",
        ChatRole::Assistant => "assistant",
    };
    println!("{speaker}> {}", message.text);
}

fn render_verdict<W: Write>(out: &mut W, view: &EligibilityView) -> io::Result<()> {
    writeln!(out, "{}", view.result.message)?;
    writeln!(out, "{}", view.result.detail)?;
    writeln!(out, "{}: {}", view.cta_label, view.cta_url)
}

fn render_table<W: Write>(out: &mut W, table: &ThresholdTableView) -> io::Result<()> {
    let width = table
        .rows
        .iter()
        .map(|row| row.label.chars().count())
        .chain(std::iter::once(table.beyond_label.chars().count()))
        .max()
        .unwrap_or_default();

    for row in &table.rows {
        writeln!(
            out,
            "{:<width$}  {}",
            row.label,
            row.formatted_income,
            width = width
        )?;
    }
    writeln!(
        out,
        "{:<width$}  {}",
        table.beyond_label,
        table.beyond_value,
        width = width
    )
}

fn write_csv<W: Write>(out: W, table: &ThresholdTableView) -> io::Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for row in &table.rows {
        writer.serialize(row).map_err(io::Error::from)?;
    }
    writer.flush()
}
