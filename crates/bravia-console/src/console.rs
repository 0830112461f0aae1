// The interactive console: one session, two caches, a line-read loop.
//
// Strictly one operation at a time: every network call is awaited to
// completion before the next prompt is printed. Nothing here is fatal
// except a broken stdin -- every device-side failure is reported as a
// single line and the loop continues.

use std::io::Write;

use secrecy::ExposeSecret;
use tokio::io::{AsyncBufReadExt, BufReader};

use bravia_core::{
    ApiError, CommandCatalog, CoreError, DeviceSession, Discovery, SendOutcome, SystemInfoCache,
    extract_ipv4,
};

use crate::command::ConsoleCommand;
use crate::error::ConsoleError;
use crate::report;

/// Prompt label before the model is known.
const DEFAULT_LABEL: &str = "Bravia";

pub struct Console {
    session: DeviceSession,
    catalog: CommandCatalog,
    sysinfo: SystemInfoCache,
    discovery: Discovery,
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl Console {
    pub fn new() -> Self {
        Self {
            session: DeviceSession::new(),
            catalog: CommandCatalog::default(),
            sysinfo: SystemInfoCache::default(),
            discovery: Discovery::default(),
        }
    }

    /// Auto-configure, then read and dispatch lines until quit or EOF.
    pub async fn run(&mut self) -> Result<(), ConsoleError> {
        self.auto_configure().await;

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            self.print_prompt()?;
            let Some(line) = lines.next_line().await? else {
                // End of input behaves exactly like an explicit quit.
                println!();
                break;
            };

            let command = ConsoleCommand::parse(&line);
            tracing::debug!(?command, "dispatching input");
            match command {
                ConsoleCommand::Help => report::print_help(),
                ConsoleCommand::Configure => self.auto_configure().await,
                ConsoleCommand::FindTv => self.find_tv().await,
                ConsoleCommand::UpdateCommands => self.update_commands().await,
                ConsoleCommand::ShowCommands => self.show_commands(),
                ConsoleCommand::ShowInfo => self.show_info(),
                ConsoleCommand::ShowOptions => self.show_options(),
                ConsoleCommand::UpdateInfo => self.update_info().await,
                ConsoleCommand::Search(needle) => self.search_commands(&needle),
                ConsoleCommand::SetOption(rest) => self.set_option(&rest),
                ConsoleCommand::Quit => break,
                ConsoleCommand::Remote(name) => self.send_remote(&name).await,
            }
        }

        report::status("Exiting Bravia Console.");
        Ok(())
    }

    fn print_prompt(&self) -> Result<(), ConsoleError> {
        let label = self.sysinfo.model().unwrap_or(DEFAULT_LABEL);
        print!("{label}> ");
        std::io::stdout().flush()?;
        Ok(())
    }

    // ── Configuration ────────────────────────────────────────────────

    /// Discovery -> system info -> command catalog, in that order.
    /// No retry loop: a failed discovery tells the operator to re-run
    /// `configure` manually.
    async fn auto_configure(&mut self) {
        report::info("Auto detecting settings");
        self.find_tv().await;
        if self.session.addr().is_some() {
            self.update_info().await;
            self.update_commands().await;
        } else {
            report::error("Auto configuration failed, enter the command 'configure' to try again");
        }
    }

    async fn find_tv(&mut self) {
        report::info("Searching the local network for a Bravia TV");
        match self.discovery.probe().await {
            Ok(addr) => {
                self.session.set_addr(addr);
                report::status(&format!("Bravia TV found at IP: {addr}"));
            }
            Err(ApiError::DiscoveryTimeout) => report::error("No Sony Bravia TV found!"),
            Err(ApiError::DiscoveryDecode) => report::error("Unable to decode response"),
            Err(other) => report::error(&format!("Error: {other}")),
        }
    }

    // ── Catalog ──────────────────────────────────────────────────────

    async fn update_commands(&mut self) {
        report::info("Updating commands");
        match self.catalog.update(&self.session).await {
            Ok(count) => report::status(&format!("{count} commands found")),
            Err(err) => self.report_failure(&err),
        }
    }

    fn show_commands(&self) {
        report::info(&self.catalog.names().collect::<Vec<_>>().join(", "));
    }

    fn search_commands(&self, needle: &str) {
        report::info(&self.catalog.search(needle).join(", "));
    }

    // ── System info ──────────────────────────────────────────────────

    async fn update_info(&mut self) {
        report::info("Updating system info");
        match self.sysinfo.update(&self.session).await {
            Ok(model) => report::status(&format!("TV model identified as {model}")),
            Err(err) => self.report_failure(&err),
        }
    }

    fn show_info(&self) {
        if self.sysinfo.is_empty() {
            return;
        }
        let rows = self
            .sysinfo
            .entries()
            .map(|(key, value)| vec![key.to_string(), value.to_string()]);
        println!("{}", report::render_table(rows));
    }

    // ── Options ──────────────────────────────────────────────────────

    fn show_options(&self) {
        let ip = self
            .session
            .addr()
            .map_or_else(|| "unset".to_string(), |addr| addr.to_string());
        let rows = vec![
            vec![
                "psk".to_string(),
                self.session.psk().expose_secret().to_string(),
                "Pre shared key".to_string(),
            ],
            vec!["ip".to_string(), ip, "IP address".to_string()],
        ];
        println!("{}", report::render_table(rows));
    }

    fn set_option(&mut self, rest: &str) {
        if let Some(psk) = rest.strip_prefix("psk ") {
            self.session.set_psk(psk);
            report::info(&format!("PSK set to {psk}."));
        } else if rest.starts_with("ip ") {
            // First dotted-quad wins, trailing text is ignored.
            match extract_ipv4(rest) {
                Some(addr) => {
                    self.session.set_addr(addr);
                    report::info(&format!("IP set to {addr}"));
                }
                None => report::error("Invalid ip value"),
            }
        } else {
            report::error("Invalid option value");
        }
    }

    // ── Remote-control dispatch ──────────────────────────────────────

    async fn send_remote(&mut self, name: &str) {
        match self.session.send_command(&self.catalog, name).await {
            SendOutcome::NotInCatalog => {
                report::warning("Command was not found, try help or ? for more information");
            }
            SendOutcome::Sent => report::status(&format!("Sent command {name} to TV")),
            SendOutcome::Failed(err) => self.report_failure(&err),
        }
    }

    // ── Failure reporting ────────────────────────────────────────────

    fn report_failure(&self, err: &CoreError) {
        match err {
            CoreError::NoAddress => report::error("TV was not found. Please run configure first"),
            CoreError::Unauthorized { psk } => report::print_unauthorized(psk),
            other => report::error(&format!("Error: {other}")),
        }
    }
}
