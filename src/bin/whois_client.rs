use clap::Parser;
use std::io::{BufRead, Write};
use whois_lookup::client::render::{render_state, LOADING_MESSAGE};
use whois_lookup::utils::logger;
use whois_lookup::{ClientConfig, LookupClient, LookupSession, LookupView, ViewState};

async fn run_once(
    session: &mut LookupSession,
    client: &LookupClient,
    domain: &str,
    view: LookupView,
) -> bool {
    if let Some(domain) = session.begin(domain) {
        println!("{}", LOADING_MESSAGE);
        let outcome = client.lookup(&domain, view).await;
        session.finish(outcome);
    }
    println!("{}", render_state(session.state()));
    !matches!(session.state(), ViewState::Error(_))
}

fn prompt(label: &str) -> std::io::Result<Option<String>> {
    print!("{}", label);
    std::io::stdout().flush()?;
    let mut line = String::new();
    if std::io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ClientConfig::parse();
    logger::init_cli_logger(config.verbose);

    let client = LookupClient::new(config.server.clone());
    let mut session = LookupSession::new();

    if let Some(domain) = config.domain.as_deref() {
        if !run_once(&mut session, &client, domain, config.view).await {
            std::process::exit(1);
        }
        return Ok(());
    }

    println!("WHOIS Domain Lookup (empty type keeps the previous choice, Ctrl-D quits)");
    let mut view = config.view;
    loop {
        let Some(domain) = prompt("Domain name: ")? else {
            break;
        };
        let Some(choice) = prompt(&format!("Information type [domain/contact] ({}): ", view))?
        else {
            break;
        };
        if !choice.trim().is_empty() {
            match choice.trim().parse::<LookupView>() {
                Ok(parsed) => view = parsed,
                Err(e) => {
                    println!("Error: {}", e);
                    continue;
                }
            }
        }

        run_once(&mut session, &client, &domain, view).await;
        println!();
    }

    Ok(())
}
